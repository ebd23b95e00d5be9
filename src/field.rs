/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Modular arithmetic over arbitrary-precision integers.
//!
//! `add`, `sub` and `mul` do **not** reduce their result:
//! callers decide when to apply `reduce` with the modulus they are working in
//! (the group order for scalars, the field prime for coordinates).

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::RangeProofError;

///An integer used as a protocol value (secret, blinding factor, challenge, ...).
///
///Scalars are signed so that values such as `-1` can be committed to;
///they are reduced modulo the group order before use in a commitment.
pub type Scalar = BigInt;

///`x + y`, unreduced
pub fn add(x: &BigInt, y: &BigInt) -> BigInt {
    return x + y;
}

///`x - y`, unreduced
pub fn sub(x: &BigInt, y: &BigInt) -> BigInt {
    return x - y;
}

///`x * y`, unreduced
pub fn mul(x: &BigInt, y: &BigInt) -> BigInt {
    return x * y;
}

///`x mod modulo`, always in `[0, modulo)` for a positive modulus (even for negative `x`).
pub fn reduce(x: &BigInt, modulo: &BigInt) -> BigInt {
    return x.mod_floor(modulo);
}

///Modular inverse of `x`.
///
///Returns `NonInvertible` if `gcd(x, modulo) != 1`, which includes `x ≡ 0`.
pub fn mod_inverse(x: &BigInt, modulo: &BigInt) -> Result<BigInt, RangeProofError> {
    let x = reduce(x, modulo);
    if x.is_zero() {
        return Err(RangeProofError::NonInvertible);
    }
    let ext_gcd = x.extended_gcd(modulo);
    if !ext_gcd.gcd.is_one() {
        return Err(RangeProofError::NonInvertible);
    }
    return Ok(reduce(&ext_gcd.x, modulo));
}

///`base ^ exponent mod modulo`.
///
///Negative exponents are supported by computing the positive power then inverting it,
///which fails with `NonInvertible` when the base has no inverse.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulo: &BigInt) -> Result<BigInt, RangeProofError> {
    let base = reduce(base, modulo);
    if exponent.is_negative() {
        let positive = base.modpow(&exponent.abs(), modulo);
        return mod_inverse(&positive, modulo);
    }
    return Ok(base.modpow(exponent, modulo));
}
