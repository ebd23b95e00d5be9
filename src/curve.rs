/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants
//!
//! The group is secp256k1, `y^2 = x^3 + 7` over a 256-bit prime field.
//! Points are stored in affine form;
//! additions and doublings are computed in Jacobian coordinates and normalized afterwards.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::errors::RangeProofError;
use crate::field::{self, Scalar};
use crate::hashes::h_int;
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;

///Number of counter values tried by `map_to_group` before giving up.
pub const MAP_TO_GROUP_ATTEMPTS: usize = 256;

lazy_static! {
    ///The secp256k1 curve context used by the protocol.
    pub static ref SECP256K1: Curve = Curve::secp256k1();
}

///A point on the curve: either affine coordinates or the point at infinity.
///
///`Affine { x: 0, y: 0 }` is not on the curve and is treated as the identity by `is_zero`,
///but the operations in this module only ever produce `Infinity` for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        return Self::Affine { x, y };
    }

    ///The identity element
    pub fn infinity() -> Self {
        return Self::Infinity;
    }

    ///True for the point at infinity, and for the all-zero coordinate pair.
    pub fn is_zero(&self) -> bool {
        return match self {
            Self::Infinity => true,
            Self::Affine { x, y } => x.is_zero() && y.is_zero(),
        };
    }

    ///Affine coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        if self.is_zero() {
            return None;
        }
        return match self {
            Self::Affine { x, y } => Some((x, y)),
            Self::Infinity => None,
        };
    }
}

///A point in Jacobian coordinates: `(X, Y, Z)` represents `(X/Z^2, Y/Z^3)`, and `Z = 0` is infinity.
#[derive(Debug, Clone)]
pub(crate) struct Jacobian {
    x: BigInt,
    y: BigInt,
    z: BigInt,
}

impl Jacobian {
    pub(crate) fn infinity() -> Self {
        return Self { x: BigInt::one(), y: BigInt::one(), z: BigInt::zero() };
    }

    fn is_infinity(&self) -> bool {
        return self.z.is_zero();
    }
}

///An immutable short-Weierstrass curve `y^2 = x^3 + b` of prime order.
///
///Every group operation takes the curve explicitly, so that nothing depends on hidden global state.
///Use `SECP256K1` for the protocol curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    p: BigInt,
    n: BigInt,
    b: BigInt,
    generator: Point,
    //(p + 1) / 4, valid because p = 3 mod 4
    sqrt_exponent: BigInt,
}

impl Curve {
    ///secp256k1 parameters, SEC 2 section 2.4.1
    pub fn secp256k1() -> Self {
        let hex = |s: &str| BigInt::parse_bytes(s.as_bytes(), 16).unwrap_or_default();

        let p = hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
        let n = hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
        let gx = hex("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
        let gy = hex("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");
        let sqrt_exponent = (&p + BigInt::one()) >> 2;

        return Self {
            p,
            n,
            b: BigInt::from(7),
            generator: Point::new(gx, gy),
            sqrt_exponent,
        };
    }

    ///The group order
    pub fn order(&self) -> &BigInt {
        return &self.n;
    }

    ///The prime of the base field
    pub fn field_prime(&self) -> &BigInt {
        return &self.p;
    }

    ///The base point `G`
    pub fn generator(&self) -> &Point {
        return &self.generator;
    }

    fn fp(&self, x: BigInt) -> BigInt {
        return x.mod_floor(&self.p);
    }

    ///`x^3 + b mod p`
    fn rhs(&self, x: &BigInt) -> BigInt {
        return self.fp(x * x * x + &self.b);
    }

    ///Check `y^2 = x^3 + b`. The identity is considered on the curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        return match point.coordinates() {
            None => true,
            Some((x, y)) => {
                x < &self.p && y < &self.p && x.sign() != Sign::Minus && y.sign() != Sign::Minus
                    && self.fp(y * y) == self.rhs(x)
            }
        };
    }

    ///Square root modulo p, if `a` is a quadratic residue.
    pub fn sqrt(&self, a: &BigInt) -> Option<BigInt> {
        let a = self.fp(a.clone());
        let root = a.modpow(&self.sqrt_exponent, &self.p);
        if self.fp(&root * &root) == a {
            return Some(root);
        }
        return None;
    }

    pub(crate) fn to_jacobian(&self, point: &Point) -> Jacobian {
        return match point.coordinates() {
            None => Jacobian::infinity(),
            Some((x, y)) => Jacobian { x: x.clone(), y: y.clone(), z: BigInt::one() },
        };
    }

    pub(crate) fn to_affine(&self, point: &Jacobian) -> Point {
        if point.is_infinity() {
            return Point::Infinity;
        }
        let z_inv = match field::mod_inverse(&point.z, &self.p) {
            Ok(z_inv) => z_inv,
            //only z = 0 mod p has no inverse
            Err(_) => return Point::Infinity,
        };
        let z_inv2 = self.fp(&z_inv * &z_inv);
        let z_inv3 = self.fp(&z_inv2 * &z_inv);
        return Point::new(self.fp(&point.x * z_inv2), self.fp(&point.y * z_inv3));
    }

    //dbl-2009-l, a = 0
    pub(crate) fn double_jacobian(&self, p1: &Jacobian) -> Jacobian {
        if p1.is_infinity() || p1.y.is_zero() {
            return Jacobian::infinity();
        }
        let a = self.fp(&p1.x * &p1.x);
        let b = self.fp(&p1.y * &p1.y);
        let c = self.fp(&b * &b);
        let x1_b = &p1.x + &b;
        let d = self.fp(BigInt::from(2) * (&x1_b * &x1_b - &a - &c));
        let e = self.fp(BigInt::from(3) * a);
        let f = self.fp(&e * &e);

        let x3 = self.fp(&f - BigInt::from(2) * &d);
        let y3 = self.fp(e * (d - &x3) - BigInt::from(8) * c);
        let z3 = self.fp(BigInt::from(2) * &p1.y * &p1.z);
        return Jacobian { x: x3, y: y3, z: z3 };
    }

    //add-2007-bl, falling back to doubling for equal inputs
    pub(crate) fn add_jacobian(&self, p1: &Jacobian, p2: &Jacobian) -> Jacobian {
        if p1.is_infinity() {
            return p2.clone();
        }
        if p2.is_infinity() {
            return p1.clone();
        }
        let z1z1 = self.fp(&p1.z * &p1.z);
        let z2z2 = self.fp(&p2.z * &p2.z);
        let u1 = self.fp(&p1.x * &z2z2);
        let u2 = self.fp(&p2.x * &z1z1);
        let s1 = self.fp(&p1.y * &p2.z * &z2z2);
        let s2 = self.fp(&p2.y * &p1.z * &z1z1);
        let h = self.fp(&u2 - &u1);
        let r = self.fp(BigInt::from(2) * (&s2 - &s1));

        if h.is_zero() {
            if r.is_zero() {
                return self.double_jacobian(p1);
            }
            //P + (-P)
            return Jacobian::infinity();
        }

        let h2 = BigInt::from(2) * &h;
        let i = self.fp(&h2 * &h2);
        let j = self.fp(&h * &i);
        let v = self.fp(&u1 * &i);

        let x3 = self.fp(&r * &r - &j - BigInt::from(2) * &v);
        let y3 = self.fp(&r * (&v - &x3) - BigInt::from(2) * &s1 * &j);
        let z1_z2 = &p1.z + &p2.z;
        let z3 = self.fp((&z1_z2 * &z1_z2 - &z1z1 - &z2z2) * &h);
        return Jacobian { x: x3, y: y3, z: z3 };
    }

    ///Double-and-add, staying in Jacobian coordinates. `k` is reduced modulo the order first.
    pub(crate) fn mul_jacobian(&self, point: &Point, k: &Scalar) -> Jacobian {
        let k = k.mod_floor(&self.n);
        if k.is_zero() || point.is_zero() {
            return Jacobian::infinity();
        }
        let base = self.to_jacobian(point);
        let mut acc = Jacobian::infinity();
        for i in (0..k.bits()).rev() {
            acc = self.double_jacobian(&acc);
            if k.bit(i) {
                acc = self.add_jacobian(&acc, &base);
            }
        }
        return acc;
    }

    ///`P + Q`. Either operand being the identity returns the other.
    pub fn add(&self, p1: &Point, p2: &Point) -> Point {
        if p1.is_zero() {
            return p2.clone();
        }
        if p2.is_zero() {
            return p1.clone();
        }
        return self.to_affine(&self.add_jacobian(&self.to_jacobian(p1), &self.to_jacobian(p2)));
    }

    ///`2P`
    pub fn double(&self, point: &Point) -> Point {
        if point.is_zero() {
            return Point::Infinity;
        }
        return self.to_affine(&self.double_jacobian(&self.to_jacobian(point)));
    }

    ///`-P`, equal to `(order - 1) * P`
    pub fn negate(&self, point: &Point) -> Point {
        return match point.coordinates() {
            None => Point::Infinity,
            Some((x, y)) => Point::new(x.clone(), self.fp(-y)),
        };
    }

    ///`P - Q`
    pub fn sub(&self, p1: &Point, p2: &Point) -> Point {
        return self.add(p1, &self.negate(p2));
    }

    ///`k * P`, with `k` reduced modulo the order. Returns the identity when `k = 0 mod order`.
    pub fn scalar_mul(&self, point: &Point, k: &Scalar) -> Point {
        return self.to_affine(&self.mul_jacobian(point, k));
    }

    ///`k * G`
    pub fn base_mul(&self, k: &Scalar) -> Point {
        return self.scalar_mul(&self.generator, k);
    }

    ///Hash a seed to a curve point with no known discrete logarithm relative to any other point.
    ///
    ///For `i = 0, 1, ...` hash `i || seed` to an x coordinate, and return the first `(x, y)`
    ///on the curve. Fails after `MAP_TO_GROUP_ATTEMPTS` tries.
    pub fn map_to_group(&self, seed: &str) -> Result<Point, RangeProofError> {
        return self.map_to_group_bounded(seed, MAP_TO_GROUP_ATTEMPTS);
    }

    fn map_to_group_bounded(&self, seed: &str, attempts: usize) -> Result<Point, RangeProofError> {
        for i in 0..attempts {
            let msg = [i.to_string().as_bytes(), seed.as_bytes()].concat();
            let x = self.fp(h_int(&msg));
            let fx = self.rhs(&x);
            if let Some(y) = self.sqrt(&fx) {
                let point = Point::new(x, y);
                if self.is_on_curve(&point) && !point.is_zero() {
                    return Ok(point);
                }
            }
        }
        return Err(RangeProofError::HashToCurveFailure(seed.to_string()));
    }

    ///SEC1 compressed encoding. The identity encodes as a single zero byte.
    pub fn compress(&self, point: &Point) -> Vec<u8> {
        return match point.coordinates() {
            None => vec!(0u8),
            Some((x, y)) => {
                let prefix = if y.is_odd() { 3u8 } else { 2u8 };
                [&[prefix][..], &encode_int(x)].concat()
            }
        };
    }

    ///Inverse of `compress`. Returns `None` for anything that does not decode to a curve point.
    pub fn decompress(&self, bytes: &[u8]) -> Option<Point> {
        if bytes.len() == 1 && bytes[0] == 0 {
            return Some(Point::Infinity);
        }
        if bytes.len() != 33 || (bytes[0] != 2 && bytes[0] != 3) {
            return None;
        }
        let x = BigInt::from_bytes_be(Sign::Plus, &bytes[1..]);
        if x >= self.p {
            return None;
        }
        let mut y = self.sqrt(&self.rhs(&x))?;
        if y.is_odd() != (bytes[0] == 3) {
            y = self.fp(-y);
        }
        let point = Point::new(x, y);
        if point.is_zero() {
            return None;
        }
        return Some(point);
    }

    ///A uniformly random scalar modulo the group order, from the operating system's CSPRNG.
    pub fn random_scalar(&self) -> Result<Scalar, RangeProofError> {
        let mut scalar_bytes = [0u8; 64];
        OsRng.try_fill_bytes(&mut scalar_bytes)
            .map_err(|e| RangeProofError::EntropyFailure(e.to_string()))?;
        let scalar = BigInt::from_bytes_be(Sign::Plus, &scalar_bytes).mod_floor(&self.n);
        scalar_bytes.zeroize();
        return Ok(scalar);
    }

    ///return a random point on the curve
    pub fn random_point(&self) -> Result<Point, RangeProofError> {
        return Ok(self.base_mul(&self.random_scalar()?));
    }
}

///Fixed-width (32 byte) big-endian encoding of a non-negative integer below 2^256.
///Larger values keep their low 32 bytes.
pub(crate) fn encode_int(x: &BigInt) -> [u8; 32] {
    let (_, bytes) = x.to_bytes_be();
    let mut out = [0u8; 32];
    let take = bytes.len().min(32);
    out[32 - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    return out;
}

///Encode a point to bytes for hashing purposes: `x || y`, 32 bytes each, identity as all zeroes.
///
///This is not intended to be reversible; use `Curve::compress` for that.
pub fn encode_point(point: &Point) -> [u8; 64] {
    let mut out = [0u8; 64];
    if let Some((x, y)) = point.coordinates() {
        out[..32].copy_from_slice(&encode_int(x));
        out[32..].copy_from_slice(&encode_int(y));
    }
    return out;
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for Point {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(SECP256K1.compress(self));
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match SECP256K1.decompress(bytes) {
            Some(point) => Ok(point),
            None => Err(SerializationError::DecodingError)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_to_group_gives_up() {
        let curve = Curve::secp256k1();
        assert_eq!(
            curve.map_to_group_bounded("seed", 0),
            Err(RangeProofError::HashToCurveFailure("seed".to_string()))
        );
        assert_eq!(curve.map_to_group_bounded("seed", MAP_TO_GROUP_ATTEMPTS), curve.map_to_group("seed"));
    }
}
