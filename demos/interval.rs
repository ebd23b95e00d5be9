// SPDX short identifier: Unlicense

use num_bigint::BigInt;
use zkrp::{
    ToBytes,
    rangeproof::{IntervalParams, IntervalProof},
};

fn main() {
    //Parameters for proofs that a value is in [18, 200)
    let params = IntervalParams::setup_generic(&BigInt::from(18), &BigInt::from(200))
        .expect("Real software should have proper error handling.");

    //Prove that 40 is in the interval.
    //This is two rangeproofs: one for 40 - 18 >= 0, and one for 40 - 200 + 2^32 >= 0
    let proof = params.prove_generic(&BigInt::from(40))
        .expect("Real software should have proper error handling.");

    //The proof carries its bounds, so it can be verified on its own
    let bytes = proof.to_bytes().unwrap();
    let received = IntervalProof::from_bytes(&bytes).unwrap();
    assert_eq!(received.a, BigInt::from(18));
    assert_eq!(received.b, BigInt::from(200));
    assert!(received.verify().unwrap());


    //The upper bound is exclusive
    let proof = params.prove_generic(&BigInt::from(200)).unwrap();
    assert!(!proof.verify().unwrap());

    //The lower bound is inclusive
    let proof = params.prove_generic(&BigInt::from(18)).unwrap();
    assert!(proof.verify().unwrap());
}
