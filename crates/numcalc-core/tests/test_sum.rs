//! Tests for typed and dynamic addition.

use approx::assert_relative_eq;
use numcalc_core::{
    arithmetic::sum,
    dynamic::{self, Value},
    error::NumericError,
    types::constants::MAX_SAFE_INTEGER,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn test_sum_table() {
    let cases = [
        (1.0, 2.0, 3.0),
        (-1.0, -2.0, -3.0),
        (0.1, 0.2, 0.3),
        (0.0, 0.0, 0.0),
        (MAX_SAFE_INTEGER, 1.0, MAX_SAFE_INTEGER + 1.0),
        (-MAX_SAFE_INTEGER, -1.0, -MAX_SAFE_INTEGER - 1.0),
        (0.0, 5.0, 5.0),
    ];

    for (a, b, expected) in cases {
        assert_relative_eq!(sum(a, b), expected, epsilon = 1e-12);
        assert_relative_eq!(
            dynamic::sum(&Value::from(a), &Value::from(b)).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_sum_of_computed_arguments() {
    let a = (|| 3.0)();
    let b = (|| 4.0)();
    assert_eq!(sum(a, b), 7.0);
}

#[test]
fn test_dynamic_sum_rejects_non_numbers() {
    let cases = vec![
        (Value::from("1"), Value::from(2)),
        (Value::Null, Value::Undefined),
        (Value::List(Vec::new()), Value::Object(BTreeMap::new())),
        (Value::from(2), Value::function(|x| x)),
    ];

    for (a, b) in cases {
        let result = dynamic::sum(&a, &b);
        assert!(
            matches!(result, Err(NumericError::InvalidArgument { .. })),
            "sum({a:?}, {b:?}) should be rejected"
        );
    }
}

#[test]
fn test_dynamic_sum_reports_type_names() {
    let err = dynamic::sum(&Value::from(1), &Value::from("2")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument `b`: expected number, got string"
    );
}

#[test]
fn test_null_is_not_the_string_null() {
    let null = dynamic::sum(&Value::Null, &Value::from(1.0)).unwrap_err();
    let text = dynamic::sum(&Value::from("null"), &Value::from(1.0)).unwrap_err();
    assert_eq!(null.to_string(), "Invalid argument `a`: expected number, got null");
    assert_eq!(text.to_string(), "Invalid argument `a`: expected number, got string");
}

#[test]
fn test_special_values_pass_through() {
    assert!(dynamic::sum(&Value::from(f64::NAN), &Value::from(0.0))
        .unwrap()
        .is_nan());
    assert_eq!(
        dynamic::sum(&Value::from(f64::INFINITY), &Value::from(1.0)).unwrap(),
        f64::INFINITY
    );
    assert_eq!(sum(f64::MAX, f64::MAX), f64::INFINITY);
}

#[test]
fn test_sum_is_repeatable() {
    let first = sum(0.1_f64, 0.2);
    for _ in 0..10 {
        assert_eq!(sum(0.1_f64, 0.2).to_bits(), first.to_bits());
    }
}

proptest! {
    #[test]
    fn sum_matches_ieee_addition(a in -1e300f64..1e300, b in -1e300f64..1e300) {
        prop_assert_eq!(sum(a, b), a + b);
    }

    #[test]
    fn sum_is_commutative(a in any::<f64>(), b in any::<f64>()) {
        let ab = sum(a, b);
        let ba = sum(b, a);
        prop_assert!(ab == ba || (ab.is_nan() && ba.is_nan()));
    }

    #[test]
    fn dynamic_sum_agrees_with_typed(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let dynamic = dynamic::sum(&Value::from(a), &Value::from(b)).unwrap();
        prop_assert_eq!(dynamic, sum(a, b));
    }
}
