// SPDX short identifier: Unlicense

use num_bigint::BigInt;

use zkrp::{
    common::*,
    hashes::{Transcript, domains},
    rangeproof::{InnerProductParams, InnerProductProof, commit_inner_product},
    vector,
};

fn transcript() -> Transcript {
    return Transcript::new(domains::TRANSCRIPT_INNER_PRODUCT, &SECP256K1);
}

#[test]
fn inner_product_test() {
    let curve = &*SECP256K1;
    let params = InnerProductParams::setup(4, None, None).unwrap();
    let a = vector::from_i64(curve, &[2, -1, 10, 6]);
    let b = vector::from_i64(curve, &[1, 2, 10, 7]);
    let c = vector::inner_product(curve, &a, &b).unwrap();
    assert_eq!(c, BigInt::from(142));

    let commit = commit_inner_product(&params, &a, &b).unwrap();
    let proof = InnerProductProof::prove(&params, &mut transcript(), &a, &b, &commit, &c).unwrap();
    assert_eq!(proof.ls.len(), 2);
    assert_eq!(proof.rs.len(), 2);
    assert!(proof.verify(&params, &mut transcript(), &commit, &c).unwrap());

    //wrong inner product
    assert!(!proof.verify(&params, &mut transcript(), &commit, &BigInt::from(143)).unwrap());
    //wrong commitment
    let other = commit_inner_product(&params, &b, &a).unwrap();
    assert!(!proof.verify(&params, &mut transcript(), &other, &c).unwrap());
    //different transcript state
    let mut shifted = transcript();
    shifted.append_scalar(&BigInt::from(1));
    assert!(!proof.verify(&params, &mut shifted, &commit, &c).unwrap());
}

#[test]
fn lengths_test() {
    let curve = &*SECP256K1;
    for n in [1usize, 2, 8, 32] {
        let params = InnerProductParams::setup(n, None, None).unwrap();
        let a: Vec<Scalar> = (0..n).map(|_| curve.random_scalar().unwrap()).collect();
        let b: Vec<Scalar> = (0..n).map(|_| curve.random_scalar().unwrap()).collect();
        let c = vector::inner_product(curve, &a, &b).unwrap();
        let commit = commit_inner_product(&params, &a, &b).unwrap();

        let proof = InnerProductProof::prove(&params, &mut transcript(), &a, &b, &commit, &c).unwrap();
        assert_eq!(proof.ls.len(), n.trailing_zeros() as usize);
        assert!(proof.verify(&params, &mut transcript(), &commit, &c).unwrap());
    }
}

#[test]
fn malformed_test() {
    let curve = &*SECP256K1;
    assert!(matches!(InnerProductParams::setup(3, None, None), Err(RangeProofError::InvalidRange(_))));
    assert!(matches!(InnerProductParams::setup(0, None, None), Err(RangeProofError::InvalidRange(_))));

    //parameters that were not built by `setup`
    let empty = InnerProductParams {
        n: 0,
        u: curve.generator().clone(),
        gg: Vec::new(),
        hh: Vec::new(),
    };
    assert_eq!(
        InnerProductProof::prove(&empty, &mut transcript(), &[], &[], &Point::infinity(), &BigInt::from(0)),
        Err(RangeProofError::Malformed)
    );
    let mut uneven = InnerProductParams::setup(2, None, None).unwrap();
    uneven.hh.pop();
    let pair = vector::from_i64(curve, &[1, 2]);
    assert_eq!(
        InnerProductProof::prove(&uneven, &mut transcript(), &pair, &pair, &Point::infinity(), &BigInt::from(5)),
        Err(RangeProofError::Malformed)
    );

    let params = InnerProductParams::setup(4, None, None).unwrap();
    assert_eq!(
        params.with_h(vec!(curve.generator().clone(); 3)),
        Err(RangeProofError::LengthMismatch { left: 3, right: 4 })
    );

    let a = vector::from_i64(curve, &[1, 2, 3, 4]);
    let short = vector::from_i64(curve, &[1, 2]);
    let commit = Point::infinity();
    assert!(InnerProductProof::prove(&params, &mut transcript(), &short, &a, &commit, &BigInt::from(0)).is_err());

    let c = vector::inner_product(curve, &a, &a).unwrap();
    let commit = commit_inner_product(&params, &a, &a).unwrap();
    let mut proof = InnerProductProof::prove(&params, &mut transcript(), &a, &a, &commit, &c).unwrap();
    proof.rs.push(Point::infinity());
    assert_eq!(proof.verify(&params, &mut transcript(), &commit, &c), Err(RangeProofError::Malformed));

    //off-curve round commitment
    proof.rs.pop();
    proof.ls[0] = Point::new(BigInt::from(1), BigInt::from(1));
    assert!(!proof.verify(&params, &mut transcript(), &commit, &c).unwrap());
}

#[test]
fn custom_generators_test() {
    let curve = &*SECP256K1;
    let gg: Vec<Point> = (0..2).map(|_| curve.random_point().unwrap()).collect();
    let params = InnerProductParams::setup(2, Some(gg.clone()), None).unwrap();
    assert_eq!(params.gg, gg);
    assert_eq!(params.hh.len(), 2);

    let a = vector::from_i64(curve, &[5, 6]);
    let b = vector::from_i64(curve, &[7, 8]);
    let c = BigInt::from(5 * 7 + 6 * 8);
    let commit = commit_inner_product(&params, &a, &b).unwrap();
    let proof = InnerProductProof::prove(&params, &mut transcript(), &a, &b, &commit, &c).unwrap();
    assert!(proof.verify(&params, &mut transcript(), &commit, &c).unwrap());

    //mismatched supplied vector
    assert_eq!(
        InnerProductParams::setup(4, Some(gg), None),
        Err(RangeProofError::LengthMismatch { left: 2, right: 4 })
    );
}
