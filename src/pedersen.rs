/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments

use crate::curve::*;
use crate::errors::RangeProofError;
use crate::field::Scalar;
use crate::vector;

///Seed of `H` and of the generator vectors.
pub const SEED_H: &str = "BulletproofsDoesNotNeedTrustedSetupH";
///Seed of the inner product base `u`.
pub const SEED_U: &str = "BulletproofsDoesNotNeedTrustedSetupU";

///get `H`
pub fn pedersen_h_point(curve: &Curve) -> Result<Point, RangeProofError> {
    return curve.map_to_group(SEED_H);
}

///get `u`, the base of the inner product argument
pub fn inner_product_u_point(curve: &Curve) -> Result<Point, RangeProofError> {
    return curve.map_to_group(SEED_U);
}

///get the generator vectors `(g_0..g_n, h_0..h_n)`
pub fn generator_vectors(curve: &Curve, n: usize) -> Result<(Vec<Point>, Vec<Point>), RangeProofError> {
    let mut gg: Vec<Point> = Vec::with_capacity(n);
    let mut hh: Vec<Point> = Vec::with_capacity(n);
    for i in 0..n {
        gg.push(curve.map_to_group(&format!("{SEED_H}g{i}"))?);
        hh.push(curve.map_to_group(&format!("{SEED_H}h{i}"))?);
    }
    return Ok((gg, hh));
}

///Commit to `value` with blinding factor `blinding`: `g^value * h^blinding`
pub fn commit(curve: &Curve, value: &Scalar, blinding: &Scalar, h: &Point) -> Point {
    return curve.add(&curve.base_mul(value), &curve.scalar_mul(h, blinding));
}

///Vector commitment `h^alpha * Π g_i^l_i * Π h_i^r_i`
pub fn commit_vector(curve: &Curve, l: &[Scalar], r: &[Scalar], alpha: &Scalar,
    h: &Point, gg: &[Point], hh: &[Point]
) -> Result<Point, RangeProofError> {
    let gl = vector::group_exp(curve, gg, l)?;
    let hr = vector::group_exp(curve, hh, r)?;
    return Ok(curve.add(&curve.add(&curve.scalar_mul(h, alpha), &gl), &hr));
}
