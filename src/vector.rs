/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Vector algebra over the scalar field, and vector exponentiation in the group.
//!
//! Every result is reduced modulo the group order.
//! Binary operations on vectors of different lengths fail with `LengthMismatch`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curve::{Curve, Jacobian, Point};
use crate::errors::RangeProofError;
use crate::field::Scalar;

fn check_lengths<A, B>(a: &[A], b: &[B]) -> Result<(), RangeProofError> {
    if a.len() != b.len() {
        return Err(RangeProofError::LengthMismatch { left: a.len(), right: b.len() });
    }
    return Ok(());
}

fn zip_with(curve: &Curve, a: &[Scalar], b: &[Scalar], op: impl Fn(&Scalar, &Scalar) -> Scalar
) -> Result<Vec<Scalar>, RangeProofError> {
    check_lengths(a, b)?;
    return Ok(a.iter().zip(b)
        .map(|(x, y)| op(x, y).mod_floor(curve.order()))
        .collect());
}

///`a + b`, componentwise
pub fn add(curve: &Curve, a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, RangeProofError> {
    return zip_with(curve, a, b, |x, y| x + y);
}

///`a - b`, componentwise
pub fn sub(curve: &Curve, a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, RangeProofError> {
    return zip_with(curve, a, b, |x, y| x - y);
}

///`a ∘ b`, componentwise (Hadamard) product
pub fn mul(curve: &Curve, a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, RangeProofError> {
    return zip_with(curve, a, b, |x, y| x * y);
}

///`s * a`
pub fn scalar_mul(curve: &Curve, a: &[Scalar], s: &Scalar) -> Vec<Scalar> {
    return a.iter().map(|x| (x * s).mod_floor(curve.order())).collect();
}

///`<a, b>`
pub fn inner_product(curve: &Curve, a: &[Scalar], b: &[Scalar]) -> Result<Scalar, RangeProofError> {
    check_lengths(a, b)?;
    let mut result = BigInt::zero();
    for (x, y) in a.iter().zip(b) {
        result = (result + x * y).mod_floor(curve.order());
    }
    return Ok(result);
}

///`n` copies of `x`
pub fn copies(x: &Scalar, n: usize) -> Vec<Scalar> {
    return vec![x.clone(); n];
}

///`[1, x, x^2, ..., x^(n-1)]`
pub fn powers_of(curve: &Curve, x: &Scalar, n: usize) -> Vec<Scalar> {
    let mut result = Vec::with_capacity(n);
    let mut current = BigInt::one();
    for _ in 0..n {
        result.push(current.clone());
        current = (current * x).mod_floor(curve.order());
    }
    return result;
}

///Convert small integers to scalars, reduced modulo the order (so `-1` becomes `order - 1`).
pub fn from_i64(curve: &Curve, a: &[i64]) -> Vec<Scalar> {
    return a.iter().map(|x| BigInt::from(*x).mod_floor(curve.order())).collect();
}

///Digits of `x` in base `base`, least significant first, truncated or zero-padded to `length` digits.
///
///Uses floor division, so negative inputs wrap around like two's complement does in base 2:
///`decompose(-1, 2, 4) = [1, 1, 1, 1]`.
pub fn decompose(x: &BigInt, base: u32, length: usize) -> Result<Vec<i64>, RangeProofError> {
    if base < 2 {
        return Err(RangeProofError::InvalidRange(format!("invalid decomposition base {base}")));
    }
    let base = BigInt::from(base);
    let mut x = x.clone();
    let mut digits = Vec::with_capacity(length);
    for _ in 0..length {
        let (quotient, digit) = x.div_mod_floor(&base);
        digits.push(digit.to_i64().unwrap_or_default());
        x = quotient;
    }
    return Ok(digits);
}

///`Π points[i]^exponents[i]`, the identity for empty input.
pub fn group_exp(curve: &Curve, points: &[Point], exponents: &[Scalar]) -> Result<Point, RangeProofError> {
    check_lengths(points, exponents)?;

    #[cfg(feature = "parallel")]
    let terms: Vec<Jacobian> = points.par_iter().zip(exponents.par_iter())
        .map(|(point, exponent)| curve.mul_jacobian(point, exponent))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let terms: Vec<Jacobian> = points.iter().zip(exponents.iter())
        .map(|(point, exponent)| curve.mul_jacobian(point, exponent))
        .collect();

    let sum = terms.iter()
        .fold(Jacobian::infinity(), |acc, term| curve.add_jacobian(&acc, term));
    return Ok(curve.to_affine(&sum));
}

///`[points[i]^exponents[i]]`
pub fn group_scale(curve: &Curve, points: &[Point], exponents: &[Scalar]) -> Result<Vec<Point>, RangeProofError> {
    check_lengths(points, exponents)?;

    #[cfg(feature = "parallel")]
    let result: Vec<Point> = points.par_iter().zip(exponents.par_iter())
        .map(|(point, exponent)| curve.scalar_mul(point, exponent))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let result: Vec<Point> = points.iter().zip(exponents.iter())
        .map(|(point, exponent)| curve.scalar_mul(point, exponent))
        .collect();

    return Ok(result);
}
