//! Error types for the calibration pipeline.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate, from event accumulation through quantile
//! comparison.
//!
//! ## Design notes
//!
//! * **Context-Rich**: Variants carry the offending values (lengths, indices,
//!   bounds) so callers can report failures without re-deriving state.
//! * **Synchronous**: Errors are returned at the point of detection; there is
//!   no background recovery or partial-result path.
//! * **no_std**: Implements `core::fmt::Display` everywhere and
//!   `std::error::Error` only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! * **Recoverable vs. fatal**: `InvalidInput` during accumulation is
//!   recoverable (skip the event and continue); `SingularMatrix` is fatal to
//!   the fit attempt and is never retried internally.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced by the calibration pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Input arrays are empty.
    EmptyInput,

    /// A per-event ring-sum slice had the wrong number of entries.
    ///
    /// Recoverable: the event is not written and the caller may skip it.
    InvalidInput {
        /// Number of ring sums supplied.
        got: usize,
        /// Number of rings the accumulator was configured with.
        expected: usize,
    },

    /// The normal-equations matrix is numerically singular.
    ///
    /// Fatal to this fit attempt. A caller may retry with a ridge term
    /// (`ridge > 0`) to regularize the system; the solver never retries on
    /// its own.
    SingularMatrix {
        /// Dimension of the square system that failed to invert.
        dim: usize,
    },

    /// A quantile range request is not aligned to the stored bin width.
    InvalidRange {
        /// Requested lower percentage.
        lower: usize,
        /// Requested upper percentage.
        upper: usize,
        /// Percentage width per stored boundary.
        step: usize,
    },

    /// Matrix/vector/weight-vector lengths disagree.
    ///
    /// Fatal and surfaced immediately; lengths are never coerced by
    /// truncation or padding.
    DimensionMismatch {
        /// Operation that detected the mismatch.
        context: &'static str,
        /// Length required by the operation.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// A value was NaN or infinite where a finite number is required.
    InvalidNumericValue(String),

    /// The ridge regularization strength is negative or non-finite.
    InvalidRidge(f64),

    /// The requested number of quantiles is unusable.
    InvalidQuantileCount(usize),

    /// The configured ring count is zero.
    InvalidRingCount(usize),

    /// A per-hit ring index is out of range.
    InvalidRingIndex {
        /// Ring index supplied with the hit.
        got: usize,
        /// Number of rings in the accumulator.
        rings: usize,
    },

    /// The subset start ring does not leave any active rings.
    InvalidSubsetStart {
        /// Requested first active ring.
        got: usize,
        /// Total number of rings.
        rings: usize,
    },

    /// An event's auxiliary value presence disagrees with the stream so far.
    InconsistentAuxiliary {
        /// Index the offending event would have received.
        event: usize,
    },

    /// The clamp policy bounds are not a valid range.
    InvalidClampRange {
        /// Lower hit threshold.
        floor: f64,
        /// Upper hit cap.
        cap: f64,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::EmptyInput => write!(f, "Input arrays are empty"),
            CalibrationError::InvalidInput { got, expected } => write!(
                f,
                "Invalid event: got {} ring sums, expected {}",
                got, expected
            ),
            CalibrationError::SingularMatrix { dim } => write!(
                f,
                "Normal-equations matrix of dimension {} is numerically singular",
                dim
            ),
            CalibrationError::InvalidRange { lower, upper, step } => write!(
                f,
                "Quantile range {}%-{}% is not aligned to the stored {}% bins",
                lower, upper, step
            ),
            CalibrationError::DimensionMismatch {
                context,
                expected,
                got,
            } => write!(
                f,
                "Dimension mismatch in {}: expected length {}, got {}",
                context, expected, got
            ),
            CalibrationError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            CalibrationError::InvalidRidge(alpha) => write!(
                f,
                "Invalid ridge alpha: {} (must be >= 0 and finite)",
                alpha
            ),
            CalibrationError::InvalidQuantileCount(q) => write!(
                f,
                "Invalid quantile count: {} (must be >= 1 and divide 100 for range queries)",
                q
            ),
            CalibrationError::InvalidRingCount(rings) => {
                write!(f, "Invalid ring count: {} (must be at least 1)", rings)
            }
            CalibrationError::InvalidRingIndex { got, rings } => write!(
                f,
                "Invalid ring index: {} (detector has {} rings)",
                got, rings
            ),
            CalibrationError::InvalidSubsetStart { got, rings } => write!(
                f,
                "Invalid subset start: {} (must be less than ring count {})",
                got, rings
            ),
            CalibrationError::InconsistentAuxiliary { event } => write!(
                f,
                "Event {} disagrees with the stream on auxiliary value presence",
                event
            ),
            CalibrationError::InvalidClampRange { floor, cap } => write!(
                f,
                "Invalid clamp range: floor {} and cap {} (must be finite with floor <= cap)",
                floor, cap
            ),
            CalibrationError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalibrationError {}
