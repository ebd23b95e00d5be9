/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///Encoding/serialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
}

///Rangeproof errors
///
///Note that an invalid proof is *not* an error:
///`verify` returns `Ok(false)` for it.
///`VerificationFailed` only appears when a caller asks for it via `ensure_valid`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeProofError {
    ///The range end is not a power of 2, or its exponent is invalid.
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    ///The lower bound of an interval is above its upper bound.
    #[error("a must be less than or equal to b")]
    InvalidInterval,
    ///Vector operation on vectors of different lengths.
    #[error("Size of first argument ({left}) is different from size of second argument ({right}).")]
    LengthMismatch { left: usize, right: usize },
    ///A bit decomposition produced something other than 0 or 1.
    #[error("Input contains non-binary element: {0}")]
    NonBinaryDigit(i64),
    ///No curve point was found for the given seed within the bounded search.
    #[error("Failed to hash-to-point for seed {0:?}")]
    HashToCurveFailure(String),
    ///Attempted to invert a value with no modular inverse (ie zero).
    #[error("Value has no modular inverse.")]
    NonInvertible,
    ///The secure random source failed.
    #[error("Entropy source failure: {0}")]
    EntropyFailure(String),
    ///The rangeproof is invalid.
    #[error("This rangeproof is invalid.")]
    VerificationFailed,
    ///The given rangeproof is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    #[error("Malformed proof or parameters.")]
    Malformed,
}
