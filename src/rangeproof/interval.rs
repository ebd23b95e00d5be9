/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Proofs that a committed value lies in an arbitrary interval `[a, b)`

use num_bigint::BigInt;
use tracing::debug;

use crate::internal_common::*;
use super::{RangeProof, SetupParams, MAX_RANGE_END, MAX_RANGE_END_EXPONENT};

///Parameters of an interval proof over `[a, b)`, holding one set of range parameters per bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalParams {
    pub a: Scalar,
    pub b: Scalar,
    ///proves `x - b + 2^32 >= 0`
    pub bp1: SetupParams,
    ///proves `x - a >= 0`
    pub bp2: SetupParams,

} impl IntervalParams {
    ///Set up proofs over `[a, b)`. Requires `a <= b`.
    pub fn setup_generic(a: &Scalar, b: &Scalar) -> Result<Self, RangeProofError> {
        if a > b {
            return Err(RangeProofError::InvalidInterval);
        }
        debug!(%a, %b, "interval proof setup");
        return Ok(Self {
            a: a.clone(),
            b: b.clone(),
            bp1: SetupParams::setup(MAX_RANGE_END)?,
            bp2: SetupParams::setup(MAX_RANGE_END)?,
        });
    }

    ///Prove that `secret` is in `[a, b)`.
    ///
    ///Like `RangeProof::prove`, this does not check the secret:
    ///an out of range secret gives a proof that fails verification.
    pub fn prove_generic(&self, secret: &Scalar) -> Result<IntervalProof, RangeProofError> {
        let offset = BigInt::from(MAX_RANGE_END);
        let gamma = SECP256K1.random_scalar()?;
        debug!(a = %self.a, b = %self.b, "proving interval");

        let p1 = RangeProof::prove_with_blinding(&(secret - &self.b + &offset), &gamma, &self.bp1)?;
        let p2 = RangeProof::prove_with_blinding(&(secret - &self.a), &gamma, &self.bp2)?;

        return Ok(IntervalProof {
            a: self.a.clone(),
            b: self.b.clone(),
            p1,
            p2,
        });
    }
}

///A proof that a committed value is in `[a, b)`: two range proofs over `[0, 2^32)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalProof {
    pub a: Scalar,
    pub b: Scalar,
    pub p1: RangeProof,
    pub p2: RangeProof,

} impl IntervalProof {
    ///Verify an interval proof.
    ///
    ///Both range proofs must verify over `[0, 2^32)`, and their commitments must be to
    ///`x - b + 2^32` and `x - a` for the same `x`: `V2 - V1 = g^(b - a - 2^32)`.
    pub fn verify(&self) -> Result<bool, RangeProofError> {
        debug!(a = %self.a, b = %self.b, "verifying interval proof");
        if self.a > self.b {
            return Ok(false);
        }
        if self.p1.params.n != MAX_RANGE_END_EXPONENT || self.p2.params.n != MAX_RANGE_END_EXPONENT {
            debug!("interval proof is not made of 32 bit range proofs");
            return Ok(false);
        }
        if !self.p1.verify()? {
            return Ok(false);
        }
        if !self.p2.verify()? {
            return Ok(false);
        }

        let curve = &*SECP256K1;
        let shift = &self.b - &self.a - BigInt::from(MAX_RANGE_END);
        if curve.sub(&self.p2.v, &self.p1.v) != curve.base_mul(&shift) {
            debug!("interval proof commitments are to different values");
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

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for IntervalParams {}
#[cfg(feature = "to_bytes")] impl ToBytes<'_> for IntervalProof {}
