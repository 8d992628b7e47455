//! Integration tests for quadruple resolution end to end, including the
//! serde surface a front end would drive.

use approx::assert_relative_eq;
use cagr::{Quadruple, Quantity, SolveError, resolve, resolve_parts};
use rstest::rstest;

#[test]
fn test_full_solve_workflow() {
    // A caller derives the rate, then reuses it to recover the other
    // quantities of the same change.
    let rate = resolve_parts(Some(1.0), Some(8.0), Some(3.0), None).unwrap();
    assert_relative_eq!(rate, 100.0, epsilon = 1e-9);

    let end = resolve_parts(Some(1.0), None, Some(3.0), Some(rate)).unwrap();
    assert_relative_eq!(end, 8.0, epsilon = 1e-9);

    let periods = resolve_parts(Some(1.0), Some(8.0), None, Some(rate)).unwrap();
    assert_relative_eq!(periods, 3.0, epsilon = 1e-9);

    let start = resolve_parts(None, Some(8.0), Some(3.0), Some(rate)).unwrap();
    assert_relative_eq!(start, 1.0, epsilon = 1e-9);
}

#[rstest]
#[case(Some(2.0), Some(32.0), None, Some(100.0), 4.0)]
#[case(Some(4.0), Some(1.0), Some(2.0), None, -50.0)]
#[case(Some(100.0), None, Some(2.0), Some(10.0), 121.0)]
fn test_resolve_cases(
    #[case] start: Option<f64>,
    #[case] end: Option<f64>,
    #[case] periods: Option<f64>,
    #[case] rate: Option<f64>,
    #[case] expected: f64,
) {
    let quadruple = Quadruple::new(start, end, periods, rate);
    assert_relative_eq!(resolve(&quadruple).unwrap(), expected, epsilon = 1e-9);
}

#[test]
fn test_json_null_marks_the_unknown_slot() {
    let quadruple: Quadruple =
        serde_json::from_str(r#"{"start":1.0,"end":8.0,"periods":null,"rate":100.0}"#)
            .expect("quadruple JSON should deserialize");
    assert_eq!(quadruple.solving_for(), Some(Quantity::Periods));
    assert_relative_eq!(resolve(&quadruple).unwrap(), 3.0, epsilon = 1e-9);
}

#[test]
fn test_json_round_trip_keeps_unknown_slots_null() {
    let quadruple = Quadruple::new(Some(4.0), None, Some(2.0), Some(-50.0));
    let json = serde_json::to_string(&quadruple).expect("quadruple should serialize");
    assert!(json.contains(r#""end":null"#));

    let back: Quadruple = serde_json::from_str(&json).expect("round trip should deserialize");
    assert_eq!(back, quadruple);
    assert_relative_eq!(resolve(&back).unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_json_zero_survives_as_a_value() {
    // A serialized zero must never be read back as an unknown slot.
    let quadruple: Quadruple =
        serde_json::from_str(r#"{"start":0.0,"end":1.0,"periods":1.0,"rate":null}"#)
            .expect("quadruple JSON should deserialize");
    assert_eq!(quadruple.solving_for(), Some(Quantity::Rate));
    assert_eq!(resolve(&quadruple), Ok(f64::INFINITY));
}

#[test]
fn test_malformed_quadruples_fail_typed() {
    let full = Quadruple::new(Some(1.0), Some(8.0), Some(3.0), Some(100.0));
    assert_eq!(
        resolve(&full),
        Err(SolveError::ExactlyOneUnknown { unknowns: 0 })
    );

    assert_eq!(
        resolve_parts(Some(1.0), Some(8.0), None, Some(f64::NAN)),
        Err(SolveError::InvalidValue(Quantity::Rate))
    );
}
