/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Bulletproofs: proofs that a value committed to in a pedersen commitment lies in a range,
//! without revealing the value.
//!
//! `SetupParams` + `RangeProof` prove `0 <= x < 2^n`,
//! and `IntervalParams` + `IntervalProof` combine two of them to prove `a <= x < b`.

mod bulletproof;
mod inner_product;
mod interval;

pub use bulletproof::{SetupParams, RangeProof};
pub use inner_product::{InnerProductParams, InnerProductProof, commit_inner_product};
pub use interval::{IntervalParams, IntervalProof};

///Largest supported range end, `2^MAX_RANGE_END_EXPONENT`.
pub const MAX_RANGE_END: u64 = 1 << MAX_RANGE_END_EXPONENT;

///Largest supported bit length of a range.
//Must be a power of 2, since the inner product argument halves its vectors each round.
pub const MAX_RANGE_END_EXPONENT: usize = 32;
