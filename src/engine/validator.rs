//! Input validation for calibration configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for calibration parameters and
//! input data: dimension agreement, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CalibrationError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for calibration configuration and input data.
///
/// Provides static methods returning `Result<(), CalibrationError>` that
/// fail fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a regression target against the accumulated event count.
    pub fn validate_target<T: Float>(events: usize, target: &[T]) -> Result<(), CalibrationError> {
        // Check 1: Alignment with the matrix columns
        if target.len() != events {
            return Err(CalibrationError::DimensionMismatch {
                context: "fit target",
                expected: events,
                got: target.len(),
            });
        }

        // Check 2: All values finite
        for (i, &val) in target.iter().enumerate() {
            if !val.is_finite() {
                return Err(CalibrationError::InvalidNumericValue(format!(
                    "target[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the configured ring count.
    pub fn validate_rings(rings: usize) -> Result<(), CalibrationError> {
        if rings == 0 {
            return Err(CalibrationError::InvalidRingCount(rings));
        }
        Ok(())
    }

    /// Validate the ridge regularization strength.
    pub fn validate_ridge<T: Float>(ridge: T) -> Result<(), CalibrationError> {
        if !ridge.is_finite() || ridge < T::zero() {
            return Err(CalibrationError::InvalidRidge(
                ridge.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the first active ring of a subset fit.
    pub fn validate_subset_start(
        active_start: usize,
        rings: usize,
    ) -> Result<(), CalibrationError> {
        Self::validate_rings(rings)?;
        if active_start >= rings {
            return Err(CalibrationError::InvalidSubsetStart {
                got: active_start,
                rings,
            });
        }
        Ok(())
    }

    /// Validate the number of quantile boundaries.
    pub fn validate_quantile_count(num_quantiles: usize) -> Result<(), CalibrationError> {
        if num_quantiles == 0 {
            return Err(CalibrationError::InvalidQuantileCount(num_quantiles));
        }
        Ok(())
    }

    /// Validate a band width against the stored quantile resolution.
    ///
    /// The band width must be a multiple of the per-boundary step and must
    /// tile the full 0-100% range.
    pub fn validate_band_width(
        band_width_pct: usize,
        num_quantiles: usize,
    ) -> Result<(), CalibrationError> {
        Self::validate_quantile_count(num_quantiles)?;
        if 100 % num_quantiles != 0 {
            return Err(CalibrationError::InvalidQuantileCount(num_quantiles));
        }
        let step = 100 / num_quantiles;
        if band_width_pct == 0 || band_width_pct % step != 0 || 100 % band_width_pct != 0 {
            return Err(CalibrationError::InvalidRange {
                lower: 0,
                upper: band_width_pct,
                step,
            });
        }
        Ok(())
    }

    /// Validate a per-hit clamp policy.
    pub fn validate_clamp<T: Float>(floor: T, cap: T) -> Result<(), CalibrationError> {
        if !floor.is_finite() || !cap.is_finite() || floor > cap {
            return Err(CalibrationError::InvalidClampRange {
                floor: floor.to_f64().unwrap_or(f64::NAN),
                cap: cap.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CalibrationError> {
        if let Some(parameter) = duplicate_param {
            return Err(CalibrationError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
