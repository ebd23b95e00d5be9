// SPDX short identifier: Unlicense

use num_bigint::BigInt;
use num_integer::Integer;

use zkrp::{
    common::*,
    field,
    vector,
};

fn scalars(values: &[i64]) -> Vec<Scalar> {
    return vector::from_i64(&SECP256K1, values);
}

#[test]
fn inner_product_test() {
    let curve = &*SECP256K1;
    let a = scalars(&[7, 7, 7]);
    let b = scalars(&[3, 3, 3]);
    assert_eq!(vector::inner_product(curve, &a, &b).unwrap(), BigInt::from(63));

    //negative entries are reduced first
    let a = scalars(&[2, -1, 10, 6]);
    let b = scalars(&[1, 2, 10, 7]);
    assert_eq!(vector::inner_product(curve, &a, &b).unwrap(), BigInt::from(142));

    assert_eq!(vector::inner_product(curve, &[], &[]).unwrap(), BigInt::from(0));
}

#[test]
fn componentwise_test() {
    let curve = &*SECP256K1;
    let order = curve.order();
    let a = scalars(&[1, 2, 3]);
    let b = scalars(&[4, 5, -6]);

    assert_eq!(vector::add(curve, &a, &b).unwrap(), scalars(&[5, 7, -3]));
    assert_eq!(vector::sub(curve, &a, &b).unwrap(), scalars(&[-3, -3, 9]));
    assert_eq!(vector::mul(curve, &a, &b).unwrap(), scalars(&[4, 10, -18]));
    assert_eq!(vector::scalar_mul(curve, &a, &BigInt::from(-2)), scalars(&[-2, -4, -6]));

    //every result is reduced
    let big = vec!(order - BigInt::from(1));
    let sum = vector::add(curve, &big, &scalars(&[2])).unwrap();
    assert_eq!(sum, vec!(BigInt::from(1)));
    for x in vector::sub(curve, &a, &b).unwrap() {
        assert!(x >= BigInt::from(0) && &x < order);
    }
}

#[test]
fn length_mismatch_test() {
    let curve = &*SECP256K1;
    let a = scalars(&[1, 2, 3]);
    let b = scalars(&[1, 2]);
    let mismatch = Err(RangeProofError::LengthMismatch { left: 3, right: 2 });

    assert_eq!(vector::add(curve, &a, &b), mismatch);
    assert_eq!(vector::sub(curve, &a, &b), mismatch);
    assert_eq!(vector::mul(curve, &a, &b), mismatch);
    assert_eq!(vector::inner_product(curve, &a, &b), Err(RangeProofError::LengthMismatch { left: 3, right: 2 }));

    let points = vec!(curve.generator().clone(); 2);
    assert_eq!(
        vector::group_exp(curve, &points, &a),
        Err(RangeProofError::LengthMismatch { left: 2, right: 3 })
    );
    assert_eq!(
        vector::group_scale(curve, &points, &a),
        Err(RangeProofError::LengthMismatch { left: 2, right: 3 })
    );
}

#[test]
fn powers_test() {
    let curve = &*SECP256K1;
    assert_eq!(vector::powers_of(curve, &BigInt::from(2), 5), scalars(&[1, 2, 4, 8, 16]));
    assert_eq!(vector::powers_of(curve, &BigInt::from(3), 1), scalars(&[1]));
    assert!(vector::powers_of(curve, &BigInt::from(3), 0).is_empty());
    assert_eq!(vector::copies(&BigInt::from(9), 3), scalars(&[9, 9, 9]));
}

#[test]
fn decompose_test() {
    assert_eq!(vector::decompose(&BigInt::from(6), 2, 4).unwrap(), vec!(0, 1, 1, 0));
    assert_eq!(vector::decompose(&BigInt::from(1234), 10, 6).unwrap(), vec!(4, 3, 2, 1, 0, 0));
    //truncated
    assert_eq!(vector::decompose(&BigInt::from(255), 2, 4).unwrap(), vec!(1, 1, 1, 1));
    //negative values wrap around
    assert_eq!(vector::decompose(&BigInt::from(-1), 2, 4).unwrap(), vec!(1, 1, 1, 1));
    assert_eq!(vector::decompose(&BigInt::from(1u64 << 32), 2, 32).unwrap(), vec!(0; 32));

    assert!(matches!(vector::decompose(&BigInt::from(5), 1, 4), Err(RangeProofError::InvalidRange(_))));
}

#[test]
fn group_exp_test() {
    let curve = &*SECP256K1;
    let g = curve.generator();
    let h = curve.random_point().unwrap();
    let points = vec!(g.clone(), h.clone());
    let exponents = scalars(&[3, -2]);

    let expected = curve.sub(&curve.base_mul(&BigInt::from(3)), &curve.scalar_mul(&h, &BigInt::from(2)));
    assert_eq!(vector::group_exp(curve, &points, &exponents).unwrap(), expected);
    assert!(vector::group_exp(curve, &[], &[]).unwrap().is_zero());

    let scaled = vector::group_scale(curve, &points, &exponents).unwrap();
    assert_eq!(scaled[0], curve.base_mul(&BigInt::from(3)));
    assert_eq!(curve.add(&scaled[0], &scaled[1]), expected);
}

#[test]
fn field_test() {
    let order = SECP256K1.order();
    let x = BigInt::from(123456789);
    let inverse = field::mod_inverse(&x, order).unwrap();
    assert_eq!(field::reduce(&field::mul(&x, &inverse), order), BigInt::from(1));

    //mod_pow with a negative exponent inverts
    let cube_inverse = field::mod_pow(&x, &BigInt::from(-3), order).unwrap();
    let cube = field::mod_pow(&x, &BigInt::from(3), order).unwrap();
    assert_eq!((cube * cube_inverse).mod_floor(order), BigInt::from(1));

    //field operations leave reduction to the caller
    let sum = field::add(order, &BigInt::from(5));
    assert!(&sum > order);
    assert_eq!(field::reduce(&sum, order), BigInt::from(5));
    assert_eq!(field::reduce(&BigInt::from(-1), order), order - BigInt::from(1));
}
