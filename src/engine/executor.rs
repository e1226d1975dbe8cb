//! Pipeline execution for a complete calibration run.
//!
//! ## Purpose
//!
//! This module runs a frozen dataset through the composed pipeline:
//! fit (plain, ridge, or ring-subset per configuration), prediction on the
//! fitted matrix, diagnostics, and per-band quantile comparison of the
//! predicted against the reference distribution.
//!
//! ## Design notes
//!
//! * **Config-in, report-out**: the executor is a pure function of the
//!   dataset and an explicit configuration; there is no process-wide state.
//! * Individual stages stay public in the algorithms layer for
//!   collaborators that need only one (e.g. cross-dataset prediction).
//!
//! ## Non-goals
//!
//! * No persistence: the report is an in-memory value for the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::accumulate::CalibrationSet;
use crate::algorithms::quantile::{self, QuantileBand};
use crate::algorithms::regression::{self, WeightVector};
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::math::dense::DenseKernels;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::CalibrationError;

// ============================================================================
// Configuration
// ============================================================================

/// Explicit configuration of one calibration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutorConfig<T> {
    /// Ridge regularization strength (0 disables).
    pub ridge: T,
    /// First ring included in the fit (0 uses every ring).
    pub active_ring_start: usize,
    /// Number of quantile boundaries per distribution.
    pub num_quantiles: usize,
    /// Width of each comparison band, in percent.
    pub band_width_pct: usize,
}

// ============================================================================
// Report
// ============================================================================

/// Owned result of a calibration run.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationReport<T> {
    /// Fitted weight vector, bias last.
    pub weights: WeightVector<T>,
    /// Predicted multiplicity, one value per event.
    pub predictions: Vec<T>,
    /// Fit-quality statistics of the predictions against the reference.
    pub diagnostics: FitDiagnostics<T>,
    /// Per-band comparison of the predicted and reference distributions.
    pub bands: Vec<QuantileBand<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the composed calibration pipeline.
pub struct CalibrationExecutor;

impl CalibrationExecutor {
    /// Fit, predict, and compare one dataset under the given configuration.
    pub fn run<T: FloatLinalg + DenseKernels>(
        set: &CalibrationSet<T>,
        config: &ExecutorConfig<T>,
    ) -> Result<CalibrationReport<T>, CalibrationError> {
        let weights = regression::fit_subset(
            set.matrix(),
            set.reference(),
            config.active_ring_start,
            config.ridge,
        )?;

        let predictions = weights.predict(set.matrix())?;
        let diagnostics = FitDiagnostics::compute(set.reference(), &predictions)?;
        let bands = quantile::compare_bands(
            set.reference(),
            &predictions,
            config.num_quantiles,
            config.band_width_pct,
        )?;

        Ok(CalibrationReport {
            weights,
            predictions,
            diagnostics,
            bands,
        })
    }
}
