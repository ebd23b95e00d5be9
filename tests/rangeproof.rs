// SPDX short identifier: Unlicense

use num_bigint::BigInt;

use zkrp::{
    common::*,
    rangeproof::{RangeProof, SetupParams, MAX_RANGE_END},
};

fn prove_and_verify(secret: i64, params: &SetupParams) -> bool {
    let proof = RangeProof::prove(&BigInt::from(secret), params).unwrap();
    return proof.verify().unwrap();
}

#[test]
fn bulletproofs_test() {
    let params = SetupParams::setup(MAX_RANGE_END).unwrap();
    assert_eq!(params.n, 32);

    assert!(prove_and_verify(0, &params));
    assert!(prove_and_verify(3, &params));
    assert!(prove_and_verify(MAX_RANGE_END as i64 - 1, &params));

    //out of range secrets produce proofs that fail verification
    assert!(!prove_and_verify(-1, &params));
    assert!(!prove_and_verify(MAX_RANGE_END as i64, &params));
    assert!(!prove_and_verify(MAX_RANGE_END as i64 + 1, &params));
}

#[test]
fn small_ranges_test() {
    for (range_end, secrets) in [(2u64, vec!(0, 1)), (4, vec!(0, 3)), (16, vec!(0, 9, 15)), (256, vec!(0, 200, 255))] {
        let params = SetupParams::setup(range_end).unwrap();
        for secret in secrets {
            assert!(prove_and_verify(secret, &params));
        }
        assert!(!prove_and_verify(range_end as i64, &params));
        assert!(!prove_and_verify(-1, &params));
    }
}

#[test]
fn setup_rejection_test() {
    //not a power of 2
    for range_end in [0u64, 3, 100, (1 << 32) - 1] {
        assert!(matches!(SetupParams::setup(range_end), Err(RangeProofError::InvalidRange(_))));
    }
    //exponent too large
    assert!(matches!(SetupParams::setup(1 << 33), Err(RangeProofError::InvalidRange(_))));
    assert!(matches!(SetupParams::setup(1 << 63), Err(RangeProofError::InvalidRange(_))));
    //bit length not a power of 2
    for exponent in [0, 3, 5, 12, 31] {
        assert!(matches!(SetupParams::setup(1 << exponent), Err(RangeProofError::InvalidRange(_))));
    }
}

#[test]
fn blinding_test() {
    let params = SetupParams::setup(1 << 8).unwrap();
    let curve = &*SECP256K1;
    let gamma = curve.random_scalar().unwrap();
    let secret = BigInt::from(77);

    let proof = RangeProof::prove_with_blinding(&secret, &gamma, &params).unwrap();
    assert_eq!(proof.v, curve.add(&curve.base_mul(&secret), &curve.scalar_mul(&params.h, &gamma)));
    proof.ensure_valid().unwrap();
}

#[test]
fn tampered_proof_test() {
    let params = SetupParams::setup(1 << 8).unwrap();
    let curve = &*SECP256K1;
    let proof = RangeProof::prove(&BigInt::from(42), &params).unwrap();
    assert!(proof.verify().unwrap());

    //a different commitment
    let mut tampered = proof.clone();
    tampered.v = curve.add(&proof.v, curve.generator());
    assert!(!tampered.verify().unwrap());
    assert_eq!(tampered.ensure_valid(), Err(RangeProofError::VerificationFailed));

    let mut tampered = proof.clone();
    tampered.tprime += BigInt::from(1);
    assert!(!tampered.verify().unwrap());

    let mut tampered = proof.clone();
    tampered.mu += BigInt::from(1);
    assert!(!tampered.verify().unwrap());

    let mut tampered = proof.clone();
    tampered.inner_product_proof.a += BigInt::from(1);
    assert!(!tampered.verify().unwrap());

    //a point that is not on the curve
    let mut tampered = proof.clone();
    tampered.t1 = Point::new(BigInt::from(1), BigInt::from(1));
    assert!(!tampered.verify().unwrap());

    //parameters that were not derived from the seeds
    let mut tampered = proof.clone();
    tampered.params.h = curve.random_point().unwrap();
    assert!(!tampered.verify().unwrap());

    //wrong number of inner product rounds
    let mut tampered = proof.clone();
    tampered.inner_product_proof.ls.pop();
    assert_eq!(tampered.verify(), Err(RangeProofError::Malformed));

    //unsupported bit length
    let mut tampered = proof;
    tampered.params.n = 64;
    assert_eq!(tampered.verify(), Err(RangeProofError::Malformed));
}

#[test]
#[cfg(feature = "to_bytes")]
fn serialization_test() {
    let params = SetupParams::setup(1 << 16).unwrap();
    let proof = RangeProof::prove(&BigInt::from(12345), &params).unwrap();

    let serialized = proof.to_bytes().unwrap();
    let deserialized = RangeProof::from_bytes(&serialized).unwrap();
    assert_eq!(deserialized, proof);
    assert!(deserialized.verify().unwrap());

    let serialized = params.to_bytes().unwrap();
    assert_eq!(SetupParams::from_bytes(&serialized).unwrap(), params);

    assert_eq!(RangeProof::from_bytes(&[1, 2, 3]), Err(SerializationError::DecodingError));
}
