//! Tests for quantile boundaries, range selection, dispersion ratios, and
//! band comparison.

use approx::assert_relative_eq;
use ringfit::prelude::*;

fn one_to_hundred() -> Vec<f64> {
    (1..=100).map(f64::from).collect()
}

#[test]
fn test_hundred_quantiles_of_uniform_ladder() {
    let values = one_to_hundred();
    let bounds = QuantileBoundaries::compute(&values, 100).unwrap();
    assert_eq!(bounds.len(), 100);
    for (k, &b) in bounds.as_slice().iter().enumerate() {
        assert_relative_eq!(b, (k + 1) as f64, epsilon = 1e-12);
    }
}

#[test]
fn test_boundaries_are_monotone() {
    let values = vec![5.0, 1.0, 9.0, 1.0, 7.0, 3.0, 3.0, 8.0, 2.0, 6.0];
    let bounds = QuantileBoundaries::compute(&values, 10).unwrap();
    for pair in bounds.as_slice().windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_boundaries_invariant_under_shuffling() {
    let values = one_to_hundred();
    let mut scrambled = Vec::with_capacity(values.len());
    // Deterministic interleave: 50, 100, 49, 99, ...
    for i in 0..50 {
        scrambled.push(values[49 - i]);
        scrambled.push(values[99 - i]);
    }

    let straight = QuantileBoundaries::compute(&values, 20).unwrap();
    let shuffled = QuantileBoundaries::compute(&scrambled, 20).unwrap();
    assert_eq!(straight, shuffled);
}

#[test]
fn test_compute_rejects_bad_input() {
    assert_eq!(
        QuantileBoundaries::<f64>::compute(&[], 10).unwrap_err(),
        CalibrationError::EmptyInput
    );
    assert_eq!(
        QuantileBoundaries::compute(&[1.0, 2.0], 0).unwrap_err(),
        CalibrationError::InvalidQuantileCount(0)
    );
}

#[test]
fn test_full_range_selection_is_identity() {
    let values = one_to_hundred();
    let bounds = QuantileBoundaries::compute(&values, 20).unwrap();
    let selected = bounds.select_range(&values, 0, 100).unwrap();
    assert_eq!(selected, values);
}

#[test]
fn test_interior_selection_is_strict() {
    let values = one_to_hundred();
    let bounds = QuantileBoundaries::compute(&values, 100).unwrap();

    // 40% and 60% boundaries are 40 and 60; selection is strictly between.
    let central = bounds.select_range(&values, 40, 60).unwrap();
    assert_eq!(central.len(), 19);
    assert_eq!(central[0], 41.0);
    assert_eq!(central[18], 59.0);

    // The lowest band is unbounded below.
    let lowest = bounds.select_range(&values, 0, 5).unwrap();
    assert_eq!(lowest, vec![1.0, 2.0, 3.0, 4.0]);

    // The highest band is unbounded above.
    let highest = bounds.select_range(&values, 95, 100).unwrap();
    assert_eq!(highest, vec![96.0, 97.0, 98.0, 99.0, 100.0]);
}

#[test]
fn test_misaligned_range_is_rejected() {
    let values = one_to_hundred();
    let bounds = QuantileBoundaries::compute(&values, 20).unwrap();

    let err = bounds.select_range(&values, 3, 10).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::InvalidRange {
            lower: 3,
            upper: 10,
            step: 5,
        }
    );

    let err = bounds.select_range(&values, 10, 5).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::InvalidRange {
            lower: 10,
            upper: 5,
            step: 5,
        }
    );

    let err = bounds.select_range(&values, 95, 105).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::InvalidRange {
            lower: 95,
            upper: 105,
            step: 5,
        }
    );

    // A boundary count that does not divide 100 cannot answer percentage
    // queries.
    let odd = QuantileBoundaries::compute(&values, 7).unwrap();
    assert_eq!(
        odd.select_range(&values, 0, 100).unwrap_err(),
        CalibrationError::InvalidQuantileCount(7)
    );
}

#[test]
fn test_dispersion_ratio_known_value() {
    // RMS of [0, 2, 4] is sqrt(8/3); RMS of [0, 1, 2] is sqrt(2/3).
    let ratio = dispersion_ratio(&[0.0, 2.0, 4.0], &[0.0, 1.0, 2.0]);
    assert_relative_eq!(ratio, 2.0, epsilon = 1e-12);
}

#[test]
fn test_dispersion_ratio_degenerate_denominator() {
    // A constant denominator band has zero RMS: the ratio is pinned to 1.
    let ratio = dispersion_ratio(&[0.0, 10.0, 20.0], &[7.0, 7.0, 7.0]);
    assert_eq!(ratio, 1.0);

    let ratio = dispersion_ratio(&[1.0, 2.0], &[]);
    assert_eq!(ratio, 1.0);
}

#[test]
fn test_compare_bands_of_identical_distributions() {
    let values = one_to_hundred();
    let bands = compare_bands(&values, &values, 100, 5).unwrap();
    assert_eq!(bands.len(), 20);

    for band in &bands {
        assert_eq!(band.reference_count, band.predicted_count);
        assert_relative_eq!(band.reference_rms, band.predicted_rms, epsilon = 1e-12);
        // Identical bands with non-degenerate spread have ratio 1.
        if band.reference_rms >= 1e-4 {
            assert_relative_eq!(band.dispersion_ratio, 1.0, epsilon = 1e-12);
        }
    }

    assert_eq!(bands[0].lower_pct, 0);
    assert_eq!(bands[0].upper_pct, 5);
    assert_eq!(bands[19].lower_pct, 95);
    assert_eq!(bands[19].upper_pct, 100);
    // Strict boundary selection: the edge bands keep 4 and 5 values.
    assert_eq!(bands[0].reference_count, 4);
    assert_eq!(bands[19].reference_count, 5);
}

#[test]
fn test_compare_bands_validates_inputs() {
    let values = one_to_hundred();
    let err = compare_bands(&values, &values[..50], 100, 5).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::DimensionMismatch {
            context: "compare_bands",
            expected: 100,
            got: 50,
        }
    );

    // Band width off the quantile grid.
    let err = compare_bands(&values, &values, 20, 3).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::InvalidRange {
            lower: 0,
            upper: 3,
            step: 5,
        }
    );

    // Band width that does not tile 0-100%.
    let err = compare_bands(&values, &values, 100, 30).unwrap_err();
    assert_eq!(
        err,
        CalibrationError::InvalidRange {
            lower: 0,
            upper: 30,
            step: 1,
        }
    );
}
