//! High-level API for centrality calibration.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the calibration parameters, and the model it
//! produces, which owns accumulator construction and the pipeline run.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with source-derived defaults for every
//!   parameter.
//! * **Validated**: Parameters are validated once, when `.build()` is
//!   called; duplicate configuration is rejected.
//! * **Explicit**: Ridge strength and the ring-subset window are model
//!   configuration, never process-wide flags.
//! * **Type-Safe**: Generic over `Float` precisions supported by the linalg
//!   backend (f32 and f64).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`Calibration`] builder via `Calibration::new()`.
//! 2. Chain configuration methods (`.rings()`, `.ridge()`, ...).
//! 3. Call `.build()` to obtain a validated [`CalibrationModel`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::executor::{CalibrationExecutor, ExecutorConfig};
use crate::engine::validator::Validator;
use crate::math::dense::DenseKernels;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::accumulate::{CalibrationSet, ClampPolicy, RingAccumulator};
pub use crate::algorithms::quantile::{
    compare_bands, dispersion_ratio, QuantileBand, QuantileBoundaries,
};
pub use crate::algorithms::regression::{fit, fit_subset, WeightVector};
pub use crate::engine::executor::CalibrationReport;
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::primitives::errors::CalibrationError;
pub use crate::primitives::matrix::RingMatrix;

/// Default number of detector rings.
const DEFAULT_RINGS: usize = 16;

/// Default number of quantile boundaries.
const DEFAULT_QUANTILES: usize = 100;

/// Default comparison band width, in percent.
const DEFAULT_BAND_WIDTH_PCT: usize = 5;

/// Default initial event capacity for accumulators built by the model.
const DEFAULT_EVENT_CAPACITY: usize = 256;

// ============================================================================
// Calibration Builder
// ============================================================================

/// Fluent builder for calibration parameters.
#[derive(Debug, Clone)]
pub struct Calibration<T: FloatLinalg + DenseKernels> {
    /// Number of detector rings.
    pub rings: Option<usize>,

    /// Ridge regularization strength.
    pub ridge: Option<T>,

    /// First ring included in the fit.
    pub active_ring_start: Option<usize>,

    /// Number of quantile boundaries.
    pub num_quantiles: Option<usize>,

    /// Comparison band width, in percent.
    pub band_width_pct: Option<usize>,

    /// Per-hit clamp policy.
    pub clamp: Option<ClampPolicy<T>>,

    /// Initial event capacity for accumulators.
    pub initial_capacity: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + DenseKernels + Debug> Default for Calibration<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + DenseKernels + Debug> Calibration<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            rings: None,
            ridge: None,
            active_ring_start: None,
            num_quantiles: None,
            band_width_pct: None,
            clamp: None,
            initial_capacity: None,
            duplicate_param: None,
        }
    }

    /// Set the number of detector rings (default: 16).
    pub fn rings(mut self, rings: usize) -> Self {
        if self.rings.is_some() {
            self.duplicate_param = Some("rings");
        }
        self.rings = Some(rings);
        self
    }

    /// Set the ridge regularization strength (default: 0, plain least
    /// squares).
    pub fn ridge(mut self, alpha: T) -> Self {
        if self.ridge.is_some() {
            self.duplicate_param = Some("ridge");
        }
        self.ridge = Some(alpha);
        self
    }

    /// Set the first ring included in fits (default: 0, all rings).
    ///
    /// Inner rings are dominated by beam-related background in the source
    /// domain; excluding them keeps the weight-vector shape uniform while
    /// pinning their coefficients to zero.
    pub fn active_ring_start(mut self, start: usize) -> Self {
        if self.active_ring_start.is_some() {
            self.duplicate_param = Some("active_ring_start");
        }
        self.active_ring_start = Some(start);
        self
    }

    /// Set the number of quantile boundaries (default: 100).
    pub fn quantiles(mut self, num_quantiles: usize) -> Self {
        if self.num_quantiles.is_some() {
            self.duplicate_param = Some("quantiles");
        }
        self.num_quantiles = Some(num_quantiles);
        self
    }

    /// Set the comparison band width in percent (default: 5).
    pub fn band_width(mut self, pct: usize) -> Self {
        if self.band_width_pct.is_some() {
            self.duplicate_param = Some("band_width");
        }
        self.band_width_pct = Some(pct);
        self
    }

    /// Set the per-hit clamp policy (default: floor 0.2, cap 3.0).
    pub fn clamp(mut self, policy: ClampPolicy<T>) -> Self {
        if self.clamp.is_some() {
            self.duplicate_param = Some("clamp");
        }
        self.clamp = Some(policy);
        self
    }

    /// Set the initial event capacity for accumulators (default: 256).
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        if self.initial_capacity.is_some() {
            self.duplicate_param = Some("initial_capacity");
        }
        self.initial_capacity = Some(capacity);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<CalibrationModel<T>, CalibrationError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let rings = self.rings.unwrap_or(DEFAULT_RINGS);
        let ridge = self.ridge.unwrap_or_else(T::zero);
        let active_ring_start = self.active_ring_start.unwrap_or(0);
        let num_quantiles = self.num_quantiles.unwrap_or(DEFAULT_QUANTILES);
        let band_width_pct = self.band_width_pct.unwrap_or(DEFAULT_BAND_WIDTH_PCT);
        let clamp = self.clamp.unwrap_or_default();
        let initial_capacity = self.initial_capacity.unwrap_or(DEFAULT_EVENT_CAPACITY);

        Validator::validate_rings(rings)?;
        Validator::validate_ridge(ridge)?;
        Validator::validate_subset_start(active_ring_start, rings)?;
        Validator::validate_band_width(band_width_pct, num_quantiles)?;
        Validator::validate_clamp(clamp.floor, clamp.cap)?;

        Ok(CalibrationModel {
            rings,
            ridge,
            active_ring_start,
            num_quantiles,
            band_width_pct,
            clamp,
            initial_capacity,
        })
    }
}

// ============================================================================
// Calibration Model
// ============================================================================

/// A validated calibration configuration.
#[derive(Debug, Clone)]
pub struct CalibrationModel<T: FloatLinalg + DenseKernels> {
    rings: usize,
    ridge: T,
    active_ring_start: usize,
    num_quantiles: usize,
    band_width_pct: usize,
    clamp: ClampPolicy<T>,
    initial_capacity: usize,
}

impl<T: FloatLinalg + DenseKernels + Debug> CalibrationModel<T> {
    /// Number of detector rings.
    #[inline]
    pub fn rings(&self) -> usize {
        self.rings
    }

    /// Ridge regularization strength.
    #[inline]
    pub fn ridge(&self) -> T {
        self.ridge
    }

    /// First ring included in fits.
    #[inline]
    pub fn active_ring_start(&self) -> usize {
        self.active_ring_start
    }

    /// Create an accumulator matching this model's ring count and clamp.
    pub fn accumulator(&self) -> RingAccumulator<T> {
        RingAccumulator::with_capacity(self.rings, self.initial_capacity).with_clamp(self.clamp)
    }

    /// Fit weights on a frozen dataset using this model's ridge and ring
    /// window.
    pub fn fit(&self, set: &CalibrationSet<T>) -> Result<WeightVector<T>, CalibrationError> {
        self.fit_matrix(set.matrix(), set.reference())
    }

    /// Fit weights on an explicit matrix/target pair.
    pub fn fit_matrix(
        &self,
        matrix: &RingMatrix<T>,
        target: &[T],
    ) -> Result<WeightVector<T>, CalibrationError> {
        if matrix.rings() != self.rings {
            return Err(CalibrationError::DimensionMismatch {
                context: "fit matrix rings",
                expected: self.rings,
                got: matrix.rings(),
            });
        }
        fit_subset(matrix, target, self.active_ring_start, self.ridge)
    }

    /// Compare a predicted distribution against its reference, band by band,
    /// using this model's quantile resolution.
    pub fn compare(
        &self,
        reference: &[T],
        predicted: &[T],
    ) -> Result<Vec<QuantileBand<T>>, CalibrationError> {
        compare_bands(reference, predicted, self.num_quantiles, self.band_width_pct)
    }

    /// Run the full pipeline on a frozen dataset: fit, predict, diagnostics,
    /// and band comparison.
    pub fn run(&self, set: &CalibrationSet<T>) -> Result<CalibrationReport<T>, CalibrationError> {
        if set.rings() != self.rings {
            return Err(CalibrationError::DimensionMismatch {
                context: "run dataset rings",
                expected: self.rings,
                got: set.rings(),
            });
        }
        let config = ExecutorConfig {
            ridge: self.ridge,
            active_ring_start: self.active_ring_start,
            num_quantiles: self.num_quantiles,
            band_width_pct: self.band_width_pct,
        };
        CalibrationExecutor::run(set, &config)
    }
}
