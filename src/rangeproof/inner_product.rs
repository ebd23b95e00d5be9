/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Inner product argument
//!
//! Proves knowledge of `a, b` such that `P = g^a * h^b * u^<a, b>`,
//! sending `2 log2(n)` points and two scalars instead of the vectors.

use num_integer::Integer;
use tracing::trace;

use crate::internal_common::*;
use crate::vector;

///Generators of the inner product argument: `n`, the base `u`, and the vectors `g`, `h`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductParams {
    pub n: usize,
    pub u: Point,
    pub gg: Vec<Point>,
    pub hh: Vec<Point>,

} impl InnerProductParams {
    ///Build parameters for vectors of length `n`, which must be a power of 2.
    ///
    ///Missing generator vectors are derived from the fixed seeds, the same way range proof setup does.
    pub fn setup(n: usize, gg: Option<Vec<Point>>, hh: Option<Vec<Point>>
    ) -> Result<Self, RangeProofError> {
        if !n.is_power_of_two() {
            return Err(RangeProofError::InvalidRange(
                format!("inner product length {n} is not a power of 2")));
        }
        let curve = &*SECP256K1;

        let (gg, hh) = match (gg, hh) {
            (Some(gg), Some(hh)) => (gg, hh),
            (gg, hh) => {
                let (default_gg, default_hh) = generator_vectors(curve, n)?;
                (gg.unwrap_or(default_gg), hh.unwrap_or(default_hh))
            }
        };
        if gg.len() != n {
            return Err(RangeProofError::LengthMismatch { left: gg.len(), right: n });
        }
        if hh.len() != n {
            return Err(RangeProofError::LengthMismatch { left: hh.len(), right: n });
        }

        return Ok(Self {
            n,
            u: inner_product_u_point(curve)?,
            gg,
            hh,
        });
    }

    ///The same parameters with `h` replaced.
    pub fn with_h(&self, hh: Vec<Point>) -> Result<Self, RangeProofError> {
        if hh.len() != self.n {
            return Err(RangeProofError::LengthMismatch { left: hh.len(), right: self.n });
        }
        return Ok(Self {
            hh,
            ..self.clone()
        });
    }
}

///`g^a * h^b`, the commitment an inner product proof is made against.
pub fn commit_inner_product(params: &InnerProductParams, a: &[Scalar], b: &[Scalar]
) -> Result<Point, RangeProofError> {
    let curve = &*SECP256K1;
    return Ok(curve.add(
        &vector::group_exp(curve, &params.gg, a)?,
        &vector::group_exp(curve, &params.hh, b)?
    ));
}

//v[i] = v[i] * lo + v[i + half] * hi, for the lower half, then drop the upper half
fn fold_scalars(curve: &Curve, v: &mut Vec<Scalar>, lo: &Scalar, hi: &Scalar) {
    let half = v.len() / 2;
    let (left, right) = v.split_at_mut(half);
    for (l, r) in left.iter_mut().zip(right.iter()) {
        *l = (&*l * lo + r * hi).mod_floor(curve.order());
    }
    v.truncate(half);
}

//same as `fold_scalars`, for group elements
fn fold_points(curve: &Curve, v: &mut Vec<Point>, lo: &Scalar, hi: &Scalar
) -> Result<(), RangeProofError> {
    let half = v.len() / 2;
    let (left, right) = v.split_at_mut(half);
    let left_scaled = vector::group_scale(curve, left, &vector::copies(lo, half))?;
    let right_scaled = vector::group_scale(curve, right, &vector::copies(hi, half))?;
    for (l, (ls, rs)) in left.iter_mut().zip(left_scaled.iter().zip(right_scaled.iter())) {
        *l = curve.add(ls, rs);
    }
    v.truncate(half);
    return Ok(());
}

//absorb the statement and return `u' = u^x`
fn bind_statement(curve: &Curve, params: &InnerProductParams, transcript: &mut Transcript,
    commit: &Point, c: &Scalar
) -> Point {
    transcript.append_point(commit);
    transcript.append_scalar(c);
    let x = transcript.challenge_scalar();
    return curve.scalar_mul(&params.u, &x);
}

///An inner product proof: one `(L, R)` pair per folding round, and the final scalars `a`, `b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProductProof {
    pub ls: Vec<Point>,
    pub rs: Vec<Point>,
    pub a: Scalar,
    pub b: Scalar,

} impl InnerProductProof {
    ///Prove that `commit = g^a * h^b` and `<a, b> = c`.
    ///
    ///`transcript` is continued from whatever the caller has already absorbed,
    ///and the verifier must pass a transcript in the same state.
    pub fn prove(params: &InnerProductParams, transcript: &mut Transcript,
        a: &[Scalar], b: &[Scalar], commit: &Point, c: &Scalar
    ) -> Result<Self, RangeProofError> {
        if !params.n.is_power_of_two() || params.gg.len() != params.n || params.hh.len() != params.n {
            return Err(RangeProofError::Malformed);
        }
        if a.len() != params.n {
            return Err(RangeProofError::LengthMismatch { left: a.len(), right: params.n });
        }
        if b.len() != params.n {
            return Err(RangeProofError::LengthMismatch { left: b.len(), right: params.n });
        }
        let curve = &*SECP256K1;
        let u_prime = bind_statement(curve, params, transcript, commit, c);

        let mut a = a.to_vec();
        let mut b = b.to_vec();
        let mut gg = params.gg.clone();
        let mut hh = params.hh.clone();
        let mut ls: Vec<Point> = Vec::new();
        let mut rs: Vec<Point> = Vec::new();

        while a.len() > 1 {
            let half = a.len() / 2;
            let (a_lo, a_hi) = a.split_at(half);
            let (b_lo, b_hi) = b.split_at(half);
            let (g_lo, g_hi) = gg.split_at(half);
            let (h_lo, h_hi) = hh.split_at(half);

            let c_l = vector::inner_product(curve, a_lo, b_hi)?;
            let c_r = vector::inner_product(curve, a_hi, b_lo)?;

            //L = g_hi^a_lo * h_lo^b_hi * u'^cL
            let l = curve.add(
                &curve.add(&vector::group_exp(curve, g_hi, a_lo)?, &vector::group_exp(curve, h_lo, b_hi)?),
                &curve.scalar_mul(&u_prime, &c_l)
            );
            //R = g_lo^a_hi * h_hi^b_lo * u'^cR
            let r = curve.add(
                &curve.add(&vector::group_exp(curve, g_lo, a_hi)?, &vector::group_exp(curve, h_hi, b_lo)?),
                &curve.scalar_mul(&u_prime, &c_r)
            );

            let (x, _) = transcript.derive_challenges(&l, &r);
            let x_inv = mod_inverse(&x, curve.order())?;
            trace!(length = a.len(), "inner product folding round");

            fold_points(curve, &mut gg, &x_inv, &x)?;
            fold_points(curve, &mut hh, &x, &x_inv)?;
            fold_scalars(curve, &mut a, &x, &x_inv);
            fold_scalars(curve, &mut b, &x_inv, &x);

            ls.push(l);
            rs.push(r);
        }

        return Ok(Self {
            ls,
            rs,
            a: a[0].clone(),
            b: b[0].clone(),
        });
    }

    ///Verify against `commit = g^a * h^b` and the claimed inner product `c`.
    ///
    ///Returns `Ok(false)` if the proof is invalid,
    ///or `Err(Malformed)` if it has the wrong number of rounds for `params`.
    pub fn verify(&self, params: &InnerProductParams, transcript: &mut Transcript,
        commit: &Point, c: &Scalar
    ) -> Result<bool, RangeProofError> {
        let rounds = params.n.trailing_zeros() as usize;
        if !params.n.is_power_of_two() || params.gg.len() != params.n || params.hh.len() != params.n
            || self.ls.len() != rounds || self.rs.len() != rounds {
            return Err(RangeProofError::Malformed);
        }
        let curve = &*SECP256K1;
        if !self.ls.iter().chain(self.rs.iter()).all(|point| curve.is_on_curve(point)) {
            return Ok(false);
        }

        let u_prime = bind_statement(curve, params, transcript, commit, c);
        //P = commit * u'^c
        let mut p = curve.add(commit, &curve.scalar_mul(&u_prime, c));
        let mut gg = params.gg.clone();
        let mut hh = params.hh.clone();

        for (l, r) in self.ls.iter().zip(self.rs.iter()) {
            let (x, _) = transcript.derive_challenges(l, r);
            let x_inv = mod_inverse(&x, curve.order())?;
            let x2 = (&x * &x).mod_floor(curve.order());
            let x2_inv = (&x_inv * &x_inv).mod_floor(curve.order());
            trace!(length = gg.len(), "inner product verification round");

            fold_points(curve, &mut gg, &x_inv, &x)?;
            fold_points(curve, &mut hh, &x, &x_inv)?;
            //P' = L^(x^2) * P * R^(x^-2)
            p = curve.add(
                &curve.add(&curve.scalar_mul(l, &x2), &p),
                &curve.scalar_mul(r, &x2_inv)
            );
        }

        //g^a * h^b * u'^(a * b)
        let ab = (&self.a * &self.b).mod_floor(curve.order());
        let expected = curve.add(
            &curve.add(&curve.scalar_mul(&gg[0], &self.a), &curve.scalar_mul(&hh[0], &self.b)),
            &curve.scalar_mul(&u_prime, &ab)
        );
        return Ok(p == expected);
    }
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for InnerProductProof {}
#[cfg(feature = "to_bytes")] impl ToBytes<'_> for InnerProductParams {}
