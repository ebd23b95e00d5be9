// SPDX short identifier: Unlicense

use num_bigint::BigInt;
use zkrp::{
    ToBytes,
    rangeproof::{RangeProof, SetupParams},
};

fn main() {
    //Parameters for proofs that a value is in [0, 2^32).
    //Every generator comes from a fixed seed, so prover and verifier
    //compute the same parameters independently; there is no trusted setup.
    let params = SetupParams::setup(1 << 32)
        .expect("Real software should have proper error handling.");

    //Prove that 123456789 is in range, without revealing it.
    //The proof contains a pedersen commitment `v` to the value.
    let proof = RangeProof::prove(&BigInt::from(123456789), &params)
        .expect("Real software should have proper error handling.");

    //Send the proof somewhere
    let bytes = proof.to_bytes().unwrap();
    let received = RangeProof::from_bytes(&bytes).unwrap();

    //Verify the rangeproof.
    //An invalid proof is `Ok(false)`, not an error.
    assert!(received.verify().unwrap());
    //or, to treat an invalid proof as an error:
    received.ensure_valid()
        .expect("Real software should have proper error handling.");


    //Out of range values still produce a proof, but it won't verify
    let proof = RangeProof::prove(&BigInt::from(-1), &params).unwrap();
    assert!(!proof.verify().unwrap());


    //Smaller ranges give smaller, faster proofs.
    //The bit length must itself be a power of 2: 1, 2, 4, 8, 16 or 32 bits.
    let params = SetupParams::setup(1 << 8).unwrap();
    let proof = RangeProof::prove(&BigInt::from(200), &params).unwrap();
    assert!(proof.verify().unwrap());
    assert!(SetupParams::setup(1 << 7).is_err());
}
