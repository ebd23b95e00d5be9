/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use sha2::{Digest, Sha256};

use crate::curve::*;
use crate::field::Scalar;

///Hash bytes to bytes.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    return digest;
}

///Hash bytes to bytes, domain separated.
///You most likely won't need this, see `h_bytes` instead.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    return h_bytes(&[msg, domain].concat());
}

///Hash bytes to a non-negative integer (big-endian digest, unreduced).
pub fn h_int(msg: &[u8]) -> BigInt {
    return BigInt::from_bytes_be(Sign::Plus, &h_bytes(msg));
}

pub mod domains {
    //! Pre-defined hash domains

    pub const TRANSCRIPT_RANGE_PROOF: &[u8] =           "zkrp_range".as_bytes();
    pub const TRANSCRIPT_INNER_PRODUCT: &[u8] =         "zkrp_ipa".as_bytes();

    pub const TRANSCRIPT_POINT: &[u8] =                 "zkrp_point".as_bytes();
    pub const TRANSCRIPT_SCALAR: &[u8] =                "zkrp_scalar".as_bytes();
    pub const TRANSCRIPT_CHALLENGE: &[u8] =             "zkrp_challenge".as_bytes();
}

///Fiat-Shamir transcript.
///
///The state is a running SHA-256 chain over everything absorbed so far,
///so every challenge depends on the full ordered history of commitments before it.
///Prover and verifier must absorb exactly the same values in exactly the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    state: [u8; 32],
    order: BigInt,
}

impl Transcript {
    ///Start a new transcript, domain separated by `label`.
    pub fn new(label: &[u8], curve: &Curve) -> Self {
        return Self {
            state: h_bytes(label),
            order: curve.order().clone(),
        };
    }

    ///Absorb a group element.
    pub fn append_point(&mut self, point: &Point) {
        self.state = domain_h_bytes(
            &[&self.state[..], &encode_point(point)].concat(), domains::TRANSCRIPT_POINT);
    }

    ///Absorb a scalar (reduced modulo the group order).
    pub fn append_scalar(&mut self, scalar: &Scalar) {
        let reduced = scalar.mod_floor(&self.order);
        self.state = domain_h_bytes(
            &[&self.state[..], &encode_int(&reduced)].concat(), domains::TRANSCRIPT_SCALAR);
    }

    ///Derive two challenges from two committed group elements.
    ///
    ///The first challenge hashes `state || C1 || C2`,
    ///the second hashes the same bytes with the first digest appended.
    ///The second digest becomes the new state.
    pub fn derive_challenges(&mut self, c1: &Point, c2: &Point) -> (Scalar, Scalar) {
        let buffer = [&self.state[..], &encode_point(c1), &encode_point(c2)].concat();
        let digest1 = h_bytes(&buffer);
        let digest2 = h_bytes(&[&buffer[..], &digest1].concat());
        self.state = digest2;

        return (
            BigInt::from_bytes_be(Sign::Plus, &digest1).mod_floor(&self.order),
            BigInt::from_bytes_be(Sign::Plus, &digest2).mod_floor(&self.order),
        );
    }

    ///Derive a single challenge from the current state.
    pub fn challenge_scalar(&mut self) -> Scalar {
        self.state = domain_h_bytes(&self.state, domains::TRANSCRIPT_CHALLENGE);
        return BigInt::from_bytes_be(Sign::Plus, &self.state).mod_floor(&self.order);
    }
}
