/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Bulletproofs rangeproofs
//!
//! Proves `0 <= x < 2^n` for the value `x` committed to in `V = g^x * h^gamma`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use tracing::debug;
use zeroize::Zeroize;

use crate::internal_common::*;
use crate::vector;
use super::{
    InnerProductParams, InnerProductProof, commit_inner_product,
    MAX_RANGE_END, MAX_RANGE_END_EXPONENT
};

///Public parameters of a range proof over `[0, 2^n)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupParams {
    pub n: usize,
    pub g: Point,
    pub h: Point,
    pub gg: Vec<Point>,
    pub hh: Vec<Point>,
    pub inner_product_params: InnerProductParams,

} impl SetupParams {
    ///Generate the parameters for proofs over `[0, range_end)`.
    ///
    ///`range_end` must be `2^n` where `n` is itself a power of 2 no larger than `MAX_RANGE_END_EXPONENT`.
    ///All generators are derived from fixed seeds, so there is no trusted setup.
    pub fn setup(range_end: u64) -> Result<Self, RangeProofError> {
        if !range_end.is_power_of_two() {
            return Err(RangeProofError::InvalidRange(
                format!("range end {range_end} is not a power of 2")));
        }
        if range_end > MAX_RANGE_END {
            return Err(RangeProofError::InvalidRange(
                format!("range end {range_end} exceeds 2^{MAX_RANGE_END_EXPONENT}")));
        }
        let n = range_end.trailing_zeros() as usize;
        if !n.is_power_of_two() {
            return Err(RangeProofError::InvalidRange(
                format!("bit length {n} is not a power of 2")));
        }
        debug!(n, "range proof setup");

        let curve = &*SECP256K1;
        let (gg, hh) = generator_vectors(curve, n)?;
        let inner_product_params = InnerProductParams::setup(n, Some(gg.clone()), Some(hh.clone()))?;

        return Ok(Self {
            n,
            g: curve.generator().clone(),
            h: pedersen_h_point(curve)?,
            gg,
            hh,
            inner_product_params,
        });
    }
}

///`n` fresh random scalars
pub(crate) fn sample_random_vector(curve: &Curve, n: usize) -> Result<Vec<Scalar>, RangeProofError> {
    return (0..n).map(|_| curve.random_scalar()).collect();
}

///`aR = aL - 1`, digit by digit. Every digit of `aL` must be 0 or 1.
fn compute_ar(a_l: &[i64]) -> Result<Vec<i64>, RangeProofError> {
    let mut result = Vec::with_capacity(a_l.len());
    for digit in a_l {
        match digit {
            0 => result.push(-1),
            1 => result.push(0),
            _ => return Err(RangeProofError::NonBinaryDigit(*digit)),
        }
    }
    return Ok(result);
}

///`delta(y, z) = (z - z^2) * <1, y^n> - z^3 * <1, 2^n>`
fn delta(curve: &Curve, y_n: &[Scalar], z: &Scalar, n: usize) -> Result<Scalar, RangeProofError> {
    let order = curve.order();
    let z2 = (z * z).mod_floor(order);
    let z3 = (&z2 * z).mod_floor(order);
    let ones = vector::copies(&BigInt::one(), n);
    let twos = vector::powers_of(curve, &BigInt::from(2), n);

    let sum_y = vector::inner_product(curve, &ones, y_n)?;
    let sum_2 = vector::inner_product(curve, &ones, &twos)?;
    return Ok(((z - &z2) * sum_y - z3 * sum_2).mod_floor(order));
}

///`h'_i = h_i^(y^-i)`
fn update_generators(curve: &Curve, hh: &[Point], y: &Scalar) -> Result<Vec<Point>, RangeProofError> {
    let y_inv = mod_inverse(y, curve.order())?;
    return vector::group_scale(curve, hh, &vector::powers_of(curve, &y_inv, hh.len()));
}

//label, n and V come before any prover message
fn start_transcript(n: usize, v: &Point) -> Transcript {
    let mut transcript = Transcript::new(domains::TRANSCRIPT_RANGE_PROOF, &SECP256K1);
    transcript.append_scalar(&BigInt::from(n));
    transcript.append_point(v);
    return transcript;
}

///Bulletproofs rangeproof.
///
///Carries its own `SetupParams`, so it can be verified on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProof {
    ///Commitment to the secret
    pub v: Point,
    pub a: Point,
    pub s: Point,
    pub t1: Point,
    pub t2: Point,
    pub taux: Scalar,
    pub mu: Scalar,
    pub tprime: Scalar,
    pub inner_product_proof: InnerProductProof,
    ///`g^bl * h'^br`, the statement of the inner product proof
    pub commit: Point,
    pub params: SetupParams,

} impl RangeProof {
    ///Prove that `secret` is in `[0, 2^n)`, with a random blinding factor for `V`.
    ///
    ///Secrets outside the range still produce a proof, which will fail verification.
    pub fn prove(secret: &Scalar, params: &SetupParams) -> Result<Self, RangeProofError> {
        let gamma = SECP256K1.random_scalar()?;
        return Self::prove_with_blinding(secret, &gamma, params);
    }

    ///Prove that `secret` is in `[0, 2^n)`, committing to it as `V = g^secret * h^gamma`.
    pub fn prove_with_blinding(secret: &Scalar, gamma: &Scalar, params: &SetupParams
    ) -> Result<Self, RangeProofError> {
        let curve = &*SECP256K1;
        let order = curve.order();
        let n = params.n;
        debug!(n, "proving range");

        //phase 1: commit to the bits of the secret
        let v = commit(curve, secret, gamma, &params.h);
        let mut transcript = start_transcript(n, &v);

        let mut a_l_digits = vector::decompose(secret, 2, n)?;
        let a_r_digits = compute_ar(&a_l_digits)?;
        let a_l = vector::from_i64(curve, &a_l_digits);
        let a_r = vector::from_i64(curve, &a_r_digits);
        a_l_digits.zeroize();

        let alpha = curve.random_scalar()?;
        let a = commit_vector(curve, &a_l, &a_r, &alpha, &params.h, &params.gg, &params.hh)?;

        let s_l = sample_random_vector(curve, n)?;
        let s_r = sample_random_vector(curve, n)?;
        let rho = curve.random_scalar()?;
        let s = commit_vector(curve, &s_l, &s_r, &rho, &params.h, &params.gg, &params.hh)?;

        let (y, z) = transcript.derive_challenges(&a, &s);

        //phase 2: commit to the coefficients of t(X)
        let y_n = vector::powers_of(curve, &y, n);
        let two_n = vector::powers_of(curve, &BigInt::from(2), n);
        let z_n = vector::copies(&z, n);
        let z2 = (&z * &z).mod_floor(order);
        let z2_two_n = vector::scalar_mul(curve, &two_n, &z2);

        //t1 = <aL - z, y^n ∘ sR> + <sL, y^n ∘ (aR + z) + z^2 2^n>
        let a_l_minus_z = vector::sub(curve, &a_l, &z_n)?;
        let y_n_s_r = vector::mul(curve, &y_n, &s_r)?;
        let a_r_plus_z = vector::add(curve, &a_r, &z_n)?;
        let r0 = vector::add(curve, &vector::mul(curve, &y_n, &a_r_plus_z)?, &z2_two_n)?;
        let t1 = (vector::inner_product(curve, &a_l_minus_z, &y_n_s_r)?
            + vector::inner_product(curve, &s_l, &r0)?).mod_floor(order);
        //t2 = <sL, y^n ∘ sR>
        let t2 = vector::inner_product(curve, &s_l, &y_n_s_r)?;

        let tau1 = curve.random_scalar()?;
        let tau2 = curve.random_scalar()?;
        let t1_point = commit(curve, &t1, &tau1, &params.h);
        let t2_point = commit(curve, &t2, &tau2, &params.h);

        let (x, _) = transcript.derive_challenges(&t1_point, &t2_point);

        //phase 3: evaluate at x
        //bl = aL - z + x sL
        let bl = vector::add(curve, &a_l_minus_z, &vector::scalar_mul(curve, &s_l, &x))?;
        //br = y^n ∘ (aR + z + x sR) + z^2 2^n
        let br = vector::add(curve,
            &vector::mul(curve, &y_n,
                &vector::add(curve, &a_r_plus_z, &vector::scalar_mul(curve, &s_r, &x))?)?,
            &z2_two_n
        )?;
        let tprime = vector::inner_product(curve, &bl, &br)?;

        let taux = (&tau2 * &x * &x + &tau1 * &x + &z2 * gamma).mod_floor(order);
        let mu = (&alpha + &rho * &x).mod_floor(order);

        transcript.append_scalar(&taux);
        transcript.append_scalar(&mu);
        transcript.append_scalar(&tprime);

        let h_prime = update_generators(curve, &params.hh, &y)?;
        let inner_product_params = params.inner_product_params.with_h(h_prime)?;
        let commit = commit_inner_product(&inner_product_params, &bl, &br)?;
        let inner_product_proof = InnerProductProof::prove(
            &inner_product_params, &mut transcript, &bl, &br, &commit, &tprime)?;

        return Ok(Self {
            v,
            a,
            s,
            t1: t1_point,
            t2: t2_point,
            taux,
            mu,
            tprime,
            inner_product_proof,
            commit,
            params: params.clone(),
        });
    }

    ///Verify a rangeproof.
    ///
    ///Returns `Ok(true)` if the proof is valid, `Ok(false)` if any check fails,
    ///or `Err(Malformed)` if the proof is not structurally a range proof.
    pub fn verify(&self) -> Result<bool, RangeProofError> {
        let curve = &*SECP256K1;
        let order = curve.order();
        let params = &self.params;
        let n = params.n;
        debug!(n, "verifying range proof");

        if n == 0 || n > MAX_RANGE_END_EXPONENT {
            return Err(RangeProofError::Malformed);
        }
        let canonical = SetupParams::setup(1u64 << n).map_err(|_| RangeProofError::Malformed)?;
        if &canonical != params {
            debug!("range proof parameters are not the canonical ones");
            return Ok(false);
        }
        let points = [&self.v, &self.a, &self.s, &self.t1, &self.t2, &self.commit];
        if !points.iter().all(|point| curve.is_on_curve(point)) {
            debug!("range proof contains a point that is not on the curve");
            return Ok(false);
        }

        let mut transcript = start_transcript(n, &self.v);
        let (y, z) = transcript.derive_challenges(&self.a, &self.s);
        let (x, _) = transcript.derive_challenges(&self.t1, &self.t2);
        transcript.append_scalar(&self.taux);
        transcript.append_scalar(&self.mu);
        transcript.append_scalar(&self.tprime);

        let y_n = vector::powers_of(curve, &y, n);
        let z2 = (&z * &z).mod_floor(order);
        let x2 = (&x * &x).mod_floor(order);

        //g^t' * h^taux == V^(z^2) * g^delta * T1^x * T2^(x^2)
        let lhs = commit(curve, &self.tprime, &self.taux, &params.h);
        let rhs = curve.add(
            &curve.add(&curve.scalar_mul(&self.v, &z2), &curve.base_mul(&delta(curve, &y_n, &z, n)?)),
            &curve.add(&curve.scalar_mul(&self.t1, &x), &curve.scalar_mul(&self.t2, &x2))
        );
        if lhs != rhs {
            debug!("range proof polynomial evaluation check failed");
            return Ok(false);
        }

        //A * S^x * g^-z * h'^(z y^n + z^2 2^n) == h^mu * commit
        let h_prime = update_generators(curve, &params.hh, &y)?;
        let two_n = vector::powers_of(curve, &BigInt::from(2), n);
        let h_exponents = vector::add(curve,
            &vector::scalar_mul(curve, &y_n, &z),
            &vector::scalar_mul(curve, &two_n, &z2)
        )?;
        let minus_z = vector::copies(&(order - &z), n);
        let lhs = curve.add(
            &curve.add(&self.a, &curve.scalar_mul(&self.s, &x)),
            &curve.add(
                &vector::group_exp(curve, &params.gg, &minus_z)?,
                &vector::group_exp(curve, &h_prime, &h_exponents)?
            )
        );
        let rhs = curve.add(&curve.scalar_mul(&params.h, &self.mu), &self.commit);
        if lhs != rhs {
            debug!("range proof vector commitment check failed");
            return Ok(false);
        }

        let inner_product_params = params.inner_product_params.with_h(h_prime)?;
        if !self.inner_product_proof.verify(&inner_product_params, &mut transcript, &self.commit, &self.tprime)? {
            debug!("range proof inner product argument failed");
            return Ok(false);
        }
        return Ok(true);
    }

    ///Same as `verify`, but an invalid proof is returned as `Err(VerificationFailed)`.
    pub fn ensure_valid(&self) -> Result<(), RangeProofError> {
        return match self.verify()? {
            true => Ok(()),
            false => Err(RangeProofError::VerificationFailed)
        };
    }
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for SetupParams {}
#[cfg(feature = "to_bytes")] impl ToBytes<'_> for RangeProof {}
