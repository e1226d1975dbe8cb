//! # ringfit — Ring-Sum Regression Calibration
//!
//! A calibration pipeline for estimating collision-event centrality (a
//! particle-multiplicity proxy) from calorimeter-like per-ring energy sums,
//! by fitting a linear model against an independently measured reference
//! multiplicity.
//!
//! ## What does it do?
//!
//! A forward detector reports, per event, the summed response of R
//! concentric rings. An independent detector reports a reference
//! multiplicity for the same event. This crate:
//!
//! 1. **Accumulates** a finite stream of events into a dense ring-sum
//!    matrix and aligned reference vector, clamping raw hits to suppress
//!    noise and saturation.
//! 2. **Fits** the normal-equations least-squares model (with an explicit
//!    intercept) mapping ring sums to the reference, optionally
//!    ridge-regularized and optionally restricted to the outer rings.
//! 3. **Predicts** a multiplicity for each event of any compatible dataset
//!    (fit on simulation, predict on detector data).
//! 4. **Compares** the predicted and reference distributions band by band
//!    through empirical quantiles and per-band dispersion ratios.
//!
//! Event-file decoding, histogramming, and plotting are external
//! collaborators: this crate consumes in-memory tuples and returns owned
//! values.
//!
//! ## Quick Start
//!
//! ```rust
//! use ringfit::prelude::*;
//!
//! // Accumulate four events of two-ring data with a track-count reference.
//! let model = Calibration::<f64>::new().rings(2).quantiles(4).band_width(25).build()?;
//! let mut events = model.accumulator();
//! events.append(&[1.0, 1.0], 3.0, None)?;
//! events.append(&[2.0, 1.0], 5.0, None)?;
//! events.append(&[3.0, 2.0], 7.0, None)?;
//! events.append(&[4.0, 2.0], 9.0, None)?;
//! let set = events.finish();
//!
//! // Fit, then apply the weights back onto the fitted matrix.
//! let weights = model.fit(&set)?;
//! let predicted = weights.predict(set.matrix())?;
//! assert!((predicted[0] - 3.0).abs() < 1e-9);
//! # Result::<(), CalibrationError>::Ok(())
//! ```
//!
//! ## Ridge and outer-ring fits
//!
//! Ill-conditioned ring data is stabilized by a ridge term, and inner rings
//! dominated by beam background can be excluded while keeping the weight
//! vector's shape uniform:
//!
//! ```rust
//! use ringfit::prelude::*;
//!
//! let matrix = RingMatrix::from_rows(&[
//!     vec![0.5, 1.5, 2.5, 3.5, 4.5],
//!     vec![1.0, 0.5, 2.0, 1.5, 3.0],
//!     vec![0.2, 0.9, 0.1, 0.8, 0.3],
//! ])?;
//! let target = vec![2.0, 3.5, 6.0, 7.5, 10.0];
//!
//! // Outer-ring fit with a mild ridge term: ring 0 is pinned to exactly 0.
//! let weights = fit_subset(&matrix, &target, 1, 1e-3)?;
//! assert_eq!(weights.ring_weights()[0], 0.0);
//! assert_eq!(weights.rings(), 3);
//! # Result::<(), CalibrationError>::Ok(())
//! ```
//!
//! ## Quantile comparison
//!
//! ```rust
//! use ringfit::prelude::*;
//!
//! let reference: Vec<f64> = (1..=100).map(f64::from).collect();
//! let bounds = QuantileBoundaries::compute(&reference, 100)?;
//! assert_eq!(bounds.as_slice()[49], 50.0);
//!
//! // The 40-60% central band, selected strictly between its boundaries.
//! let central = bounds.select_range(&reference, 40, 60)?;
//! assert_eq!(central.len(), 19);
//!
//! let ratio = dispersion_ratio(&central, &reference);
//! assert!(ratio < 1.0);
//! # Result::<(), CalibrationError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Every fallible operation returns `Result<_, CalibrationError>` and fails
//! synchronously at the point of detection:
//!
//! * `InvalidInput` — an event with the wrong ring count; the event is not
//!   written and the caller may skip it.
//! * `SingularMatrix` — the normal-equations matrix is not invertible;
//!   retry with `ridge > 0` if appropriate, the solver never retries on its
//!   own.
//! * `InvalidRange` — a quantile range request off the stored bin grid.
//! * `DimensionMismatch` — misaligned matrix/vector/weight lengths, never
//!   coerced.
//!
//! ## Minimal usage (no_std)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard-library dependency:
//!
//! ```toml
//! [dependencies]
//! ringfit = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Adams, J. et al. (2020). "The STAR Event Plane Detector"
//! - Hoerl, A. E. & Kennard, R. W. (1970). "Ridge Regression: Biased
//!   Estimation for Nonorthogonal Problems"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors and dense matrix storage.
mod primitives;

// Layer 2: Math - dense solves, dot/axpy kernels, sample statistics.
mod math;

// Layer 3: Algorithms - accumulation, regression, quantile binning.
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation and pipeline execution.
mod engine;

// High-level fluent API for calibration runs.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard calibration prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use ringfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        compare_bands, dispersion_ratio, fit, fit_subset, Calibration, CalibrationError,
        CalibrationModel, CalibrationReport, CalibrationSet, ClampPolicy, FitDiagnostics,
        QuantileBand, QuantileBoundaries, RingAccumulator, RingMatrix, WeightVector,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
