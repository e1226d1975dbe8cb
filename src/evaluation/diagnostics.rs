//! Fit-quality diagnostics.
//!
//! ## Purpose
//!
//! This module summarizes how well a prediction vector reproduces its
//! target: error magnitudes (RMSE, MAE), explained variance (R²), and the
//! residual location/spread used to check the least-squares orthogonality
//! property.
//!
//! ## Design notes
//!
//! * Statistics are population-form, matching the rest of the crate.
//! * For a constant target with a perfect fit, R² is defined as 1.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{mean, rms_deviation};
use crate::primitives::errors::CalibrationError;

// ============================================================================
// Diagnostics
// ============================================================================

/// Diagnostic statistics of a prediction against its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Coefficient of determination.
    pub r_squared: T,
    /// Mean residual (target minus prediction).
    pub residual_mean: T,
    /// RMS deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Compute diagnostics for `predicted` against `target`.
    ///
    /// Fails with `EmptyInput` on empty slices and `DimensionMismatch` when
    /// the lengths disagree.
    pub fn compute(target: &[T], predicted: &[T]) -> Result<Self, CalibrationError> {
        if target.is_empty() || predicted.is_empty() {
            return Err(CalibrationError::EmptyInput);
        }
        if target.len() != predicted.len() {
            return Err(CalibrationError::DimensionMismatch {
                context: "diagnostics",
                expected: target.len(),
                got: predicted.len(),
            });
        }

        let n = T::from(target.len()).unwrap();
        let residuals: Vec<T> = target
            .iter()
            .zip(predicted.iter())
            .map(|(&t, &p)| t - p)
            .collect();

        let mut ss_res = T::zero();
        let mut abs_sum = T::zero();
        for &r in &residuals {
            ss_res = ss_res + r * r;
            abs_sum = abs_sum + r.abs();
        }

        let target_mean = mean(target);
        let mut ss_tot = T::zero();
        for &t in target {
            let d = t - target_mean;
            ss_tot = ss_tot + d * d;
        }

        let r_squared = if ss_tot <= T::epsilon() {
            T::one()
        } else {
            T::one() - ss_res / ss_tot
        };

        Ok(Self {
            rmse: (ss_res / n).sqrt(),
            mae: abs_sum / n,
            r_squared,
            residual_mean: mean(&residuals),
            residual_sd: rms_deviation(&residuals),
        })
    }
}
