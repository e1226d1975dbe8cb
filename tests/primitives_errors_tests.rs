//! Tests for the calibration error enum: display formatting and trait
//! surface.

use ringfit::prelude::CalibrationError;

#[test]
fn test_calibration_error_display() {
    // EmptyInput
    let err = CalibrationError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // InvalidInput
    let err = CalibrationError::InvalidInput {
        got: 8,
        expected: 16,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid event: got 8 ring sums, expected 16"
    );

    // SingularMatrix
    let err = CalibrationError::SingularMatrix { dim: 17 };
    assert_eq!(
        format!("{}", err),
        "Normal-equations matrix of dimension 17 is numerically singular"
    );

    // InvalidRange
    let err = CalibrationError::InvalidRange {
        lower: 3,
        upper: 10,
        step: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Quantile range 3%-10% is not aligned to the stored 5% bins"
    );

    // DimensionMismatch
    let err = CalibrationError::DimensionMismatch {
        context: "predict weights",
        expected: 16,
        got: 12,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch in predict weights: expected length 16, got 12"
    );

    // InvalidNumericValue
    let err = CalibrationError::InvalidNumericValue("target[0]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: target[0]=NaN");

    // InvalidRidge
    let err = CalibrationError::InvalidRidge(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid ridge alpha: -1 (must be >= 0 and finite)"
    );

    // InvalidQuantileCount
    let err = CalibrationError::InvalidQuantileCount(0);
    assert_eq!(
        format!("{}", err),
        "Invalid quantile count: 0 (must be >= 1 and divide 100 for range queries)"
    );

    // InvalidRingCount
    let err = CalibrationError::InvalidRingCount(0);
    assert_eq!(
        format!("{}", err),
        "Invalid ring count: 0 (must be at least 1)"
    );

    // InvalidRingIndex
    let err = CalibrationError::InvalidRingIndex { got: 16, rings: 16 };
    assert_eq!(
        format!("{}", err),
        "Invalid ring index: 16 (detector has 16 rings)"
    );

    // InvalidSubsetStart
    let err = CalibrationError::InvalidSubsetStart { got: 16, rings: 16 };
    assert_eq!(
        format!("{}", err),
        "Invalid subset start: 16 (must be less than ring count 16)"
    );

    // InconsistentAuxiliary
    let err = CalibrationError::InconsistentAuxiliary { event: 3 };
    assert_eq!(
        format!("{}", err),
        "Event 3 disagrees with the stream on auxiliary value presence"
    );

    // InvalidClampRange
    let err = CalibrationError::InvalidClampRange {
        floor: 3.0,
        cap: 1.0,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid clamp range: floor 3 and cap 1 (must be finite with floor <= cap)"
    );

    // DuplicateParameter
    let err = CalibrationError::DuplicateParameter { parameter: "ridge" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'ridge' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_calibration_error_properties() {
    let err1 = CalibrationError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(
        err1,
        CalibrationError::InvalidNumericValue("foo".to_string())
    );
}

#[test]
fn test_calibration_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<CalibrationError>();
}
