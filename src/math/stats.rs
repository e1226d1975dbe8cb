//! Basic sample statistics for distribution comparison.
//!
//! ## Purpose
//!
//! This module provides the population mean and root-mean-square deviation
//! used by dispersion ratios and fit diagnostics.
//!
//! ## Design notes
//!
//! * **Formula**: RMS = sqrt(mean((x_i - mean(x))^2)), the population form.
//! * Empty inputs yield zero rather than NaN; callers that consider empty
//!   input an error check before calling.
//!
//! ## Non-goals
//!
//! * This module does not provide robust (outlier-resistant) estimators.
//! * This module does not handle non-finite values (NaN/Inf).

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample Statistics
// ============================================================================

/// Population mean of a slice; zero on empty input.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let mut sum = T::zero();
    for &v in values {
        sum = sum + v;
    }
    sum / T::from(values.len()).unwrap()
}

/// Population root-mean-square deviation from the mean; zero on empty input.
#[inline]
pub fn rms_deviation<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let m = mean(values);
    let mut sum_sq = T::zero();
    for &v in values {
        let d = v - m;
        sum_sq = sum_sq + d * d;
    }
    (sum_sq / T::from(values.len()).unwrap()).sqrt()
}
