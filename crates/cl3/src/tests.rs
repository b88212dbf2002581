use proptest::prelude::*;

use crate::*;

fn approx_eq(a: &MultiVector, b: &MultiVector) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

#[test]
fn test_metric_literals() {
    assert_eq!(VECX * VECX, ONE);
    assert_eq!(VECY * VECY, ONE);
    assert_eq!(VECZ * VECZ, ONE);

    assert_eq!(VECX * VECY, AXIX);
    assert_eq!(VECY * VECX, -AXIX);
    assert_eq!(VECY * VECZ, AXIY);
    assert_eq!(VECZ * VECX, AXIZ);

    assert_eq!(AXIX * AXIX, -ONE);
    assert_eq!(AXIY * AXIY, -ONE);
    assert_eq!(AXIZ * AXIZ, -ONE);

    assert_eq!(IMAG * IMAG, -ONE);
    assert_eq!(VECX * VECY * VECZ, IMAG);
    assert_eq!(MultiVector::geometric_product(&AXIX, &VECZ), IMAG);
}

#[test]
fn test_product_matches_metric_table() {
    for lhs in Basis::ALL {
        for rhs in Basis::ALL {
            assert_eq!(
                MultiVector::unit(lhs) * MultiVector::unit(rhs),
                metric(lhs, rhs),
                "{lhs} * {rhs}",
            );
        }
    }
}

#[test]
fn test_multiplication_order_matters() {
    let a = MultiVector::get_vector(1.0, 2.0, 3.0);
    let b = MultiVector::get_vector(-2.0, 0.5, 4.0);
    assert_ne!(a * b, b * a);
    // The symmetric part of a product of vectors is their dot product.
    assert_eq!((a * b + b * a) * 0.5, MultiVector::scalar(11.0));
}

#[test]
fn test_linear_combination() {
    assert_eq!(
        MultiVector::linear_combination(&VECTOR_BASIS, &[1.5, -2.0, 7.25]),
        Ok(MultiVector::get_vector(1.5, -2.0, 7.25)),
    );
    assert_eq!(
        MultiVector::linear_combination(&AXIS_BASIS, &[0.0, 3.0, -1.0]),
        Ok(MultiVector::get_axis(0.0, 3.0, -1.0)),
    );
    assert_eq!(
        MultiVector::linear_combination(&[], &[]),
        Ok(MultiVector::ZERO),
    );

    let frame = [ONE, IMAG, VECX + AXIY];
    assert_eq!(
        MultiVector::linear_combination(&frame, &[2.0, 3.0, 4.0]),
        Ok(MultiVector::new(2.0, 4.0, 0.0, 0.0, 0.0, 4.0, 0.0, 3.0)),
    );
}

#[test]
fn test_linear_combination_length_mismatch() {
    assert_eq!(
        MultiVector::linear_combination(&VECTOR_BASIS, &[1.0, 2.0]),
        Err(Error::LengthMismatch {
            system: 3,
            coefficients: 2,
        }),
    );
    assert_eq!(
        MultiVector::linear_combination(&[ONE], &[1.0, 2.0]).map_err(|e| e.to_string()),
        Err("linear combination of 1 multivectors given 2 coefficients".to_owned()),
    );
}

#[test]
fn test_metric_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let v = MultiVector::get_vector(i as Float, 1.0, 0.0);
                v * v
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let square = handle.join().expect("thread panicked");
        assert_eq!(square, MultiVector::scalar((i * i) as Float + 1.0));
    }
}

proptest! {
    #[test]
    fn proptest_associativity(a: MultiVector, b: MultiVector, c: MultiVector) {
        let lhs = (a * b) * c;
        let rhs = a * (b * c);
        prop_assert!(approx_eq(&lhs, &rhs), "{lhs} != {rhs}");
    }

    #[test]
    fn proptest_distributivity(a: MultiVector, b: MultiVector, c: MultiVector) {
        let lhs = a * (b + c);
        let rhs = a * b + a * c;
        prop_assert!(approx_eq(&lhs, &rhs), "{lhs} != {rhs}");

        let lhs = (b + c) * a;
        let rhs = b * a + c * a;
        prop_assert!(approx_eq(&lhs, &rhs), "{lhs} != {rhs}");
    }

    #[test]
    fn proptest_identities(m: MultiVector) {
        prop_assert_eq!(ONE * m, m);
        prop_assert_eq!(m * ONE, m);
        prop_assert_eq!(ZERO + m, m);
        prop_assert_eq!(ZERO * m, ZERO);
        prop_assert_eq!(m * ZERO, ZERO);
        prop_assert_eq!(-(-m), m);
        prop_assert_eq!(m - m, ZERO);
    }

    #[test]
    fn proptest_pseudoscalar_commutes(m: MultiVector) {
        prop_assert_eq!(IMAG * m, m * IMAG);
    }

    #[test]
    fn proptest_reverse_of_product(a: MultiVector, b: MultiVector) {
        let lhs = (a * b).reverse();
        let rhs = b.reverse() * a.reverse();
        prop_assert!(approx_eq(&lhs, &rhs), "{lhs} != {rhs}");
    }

    #[test]
    fn proptest_linear_combination_of_vector_basis(
        x in -1000.0..1000.0_f64,
        y in -1000.0..1000.0_f64,
        z in -1000.0..1000.0_f64,
    ) {
        prop_assert_eq!(
            MultiVector::linear_combination(&VECTOR_BASIS, &[x, y, z]),
            Ok(MultiVector::get_vector(x, y, z)),
        );
    }

    #[test]
    fn proptest_rotation_preserves_vector_norm(
        axis in proptest::array::uniform3(-10.0..10.0_f64),
        v in proptest::array::uniform3(-10.0..10.0_f64),
        theta in -10.0..10.0_f64,
    ) {
        let [ax, ay, az] = axis;
        let Some(axis) = MultiVector::get_axis(ax, ay, az).normalize() else {
            return Ok(());
        };
        let [x, y, z] = v;
        let v = MultiVector::get_vector(x, y, z);
        let rotated = v.rotate(&axis, theta);
        prop_assert!((rotated.mag() - v.mag()).abs() < EPSILON);
        prop_assert!(approx_eq(&Rotation::new(&axis, -theta).apply(&rotated), &v));
    }
}
