//! Empirical quantile boundaries and per-band distribution comparison.
//!
//! ## Purpose
//!
//! This module partitions a distribution into equal-population quantile
//! ranges and compares two parallel distributions band by band, the
//! validation step that checks whether a predicted multiplicity preserves
//! the reference's centrality ordering and spread.
//!
//! ## Design notes
//!
//! * **Boundaries**: the empirical quantile function; `boundary[k]` is the
//!   smallest sorted value with at least `(k+1)/Q` of the input at or below
//!   it. Boundaries are monotonically non-decreasing by construction and
//!   invariant under input shuffling; ties resolve by sort order.
//! * **Range selection**: values strictly between the two bracketing
//!   boundaries, with the domain edges unbounded, so a 0-100% query is a
//!   no-op filter. Requests must align to the stored bin width.
//! * **Dispersion ratio**: RMS(a)/RMS(b), defined as 1.0 by convention when
//!   the denominator RMS falls below 1e-4. This is a deliberate
//!   degenerate-case policy, not an error.
//! * Every band result is exclusively owned by the call that produced it and
//!   returned by value.
//!
//! ## Invariants
//!
//! * `boundary[k] <= boundary[k+1]` for all k.
//! * A failed range request returns no partial result.
//!
//! ## Non-goals
//!
//! * This module does not produce histograms or plots; it returns raw band
//!   summaries for comparison collaborators.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::stats::rms_deviation;
use crate::primitives::errors::CalibrationError;

/// Denominator RMS below this is treated as degenerate (ratio fixed at 1).
const DEGENERATE_RMS: f64 = 1e-4;

// ============================================================================
// Quantile Boundaries
// ============================================================================

/// Ordered empirical quantile boundaries of a distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileBoundaries<T> {
    bounds: Vec<T>,
}

impl<T: Float> QuantileBoundaries<T> {
    /// Compute `num_quantiles` equal-population boundaries of `values`.
    ///
    /// Shuffling the input does not change the result; the computation sorts
    /// internally. Fails with `EmptyInput` on an empty slice and
    /// `InvalidQuantileCount` when `num_quantiles` is zero.
    pub fn compute(values: &[T], num_quantiles: usize) -> Result<Self, CalibrationError> {
        if values.is_empty() {
            return Err(CalibrationError::EmptyInput);
        }
        Validator::validate_quantile_count(num_quantiles)?;

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let n = sorted.len();
        let bounds = (1..=num_quantiles)
            .map(|k| {
                // Smallest order statistic covering fraction k / num_quantiles.
                let rank = (k * n).div_ceil(num_quantiles);
                sorted[rank - 1]
            })
            .collect();
        Ok(Self { bounds })
    }

    /// Number of stored boundaries.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// True when no boundaries are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The boundary values, ascending.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.bounds
    }

    /// Percentage width covered by each stored boundary, when 100 divides
    /// evenly.
    pub fn step_pct(&self) -> Option<usize> {
        let q = self.bounds.len();
        if q > 0 && 100 % q == 0 {
            Some(100 / q)
        } else {
            None
        }
    }

    /// Select the values of `values` falling in the `lower_pct..upper_pct`
    /// quantile range of this boundary set.
    ///
    /// The selection is strict on interior boundaries and unbounded at the
    /// domain edges (`lower_pct = 0` and `upper_pct = 100`), so
    /// `select_range(values, 0, 100)` returns every value. Fails with
    /// `InvalidRange` when the percentages are not multiples of the stored
    /// bin width or are out of order, and with `InvalidQuantileCount` when
    /// the boundary count does not divide 100.
    pub fn select_range(
        &self,
        values: &[T],
        lower_pct: usize,
        upper_pct: usize,
    ) -> Result<Vec<T>, CalibrationError> {
        let step = self
            .step_pct()
            .ok_or(CalibrationError::InvalidQuantileCount(self.bounds.len()))?;
        if lower_pct % step != 0 || upper_pct % step != 0 || lower_pct >= upper_pct || upper_pct > 100
        {
            return Err(CalibrationError::InvalidRange {
                lower: lower_pct,
                upper: upper_pct,
                step,
            });
        }

        // The boundary array stores upper bounds, so the lower cut is the
        // boundary one bin below the requested percentage.
        let lower = if lower_pct == 0 {
            None
        } else {
            Some(self.bounds[lower_pct / step - 1])
        };
        let upper = if upper_pct == 100 {
            None
        } else {
            Some(self.bounds[upper_pct / step - 1])
        };

        Ok(values
            .iter()
            .copied()
            .filter(|&v| {
                lower.map_or(true, |lo| lo < v) && upper.map_or(true, |hi| v < hi)
            })
            .collect())
    }
}

// ============================================================================
// Dispersion Ratio
// ============================================================================

/// Ratio of the RMS deviation of `a` to that of `b`.
///
/// Returns exactly 1.0 when `b`'s RMS is below 1e-4, regardless of `a`, to
/// avoid division blow-up in degenerate bands.
pub fn dispersion_ratio<T: Float>(a: &[T], b: &[T]) -> T {
    let rms_b = rms_deviation(b);
    if rms_b < T::from(DEGENERATE_RMS).unwrap() {
        return T::one();
    }
    rms_deviation(a) / rms_b
}

// ============================================================================
// Band Comparison
// ============================================================================

/// Summary of one quantile band across two parallel distributions.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileBand<T> {
    /// Lower edge of the band, in percent.
    pub lower_pct: usize,
    /// Upper edge of the band, in percent.
    pub upper_pct: usize,
    /// RMS deviation of the reference values in this band.
    pub reference_rms: T,
    /// RMS deviation of the predicted values in this band.
    pub predicted_rms: T,
    /// Predicted-over-reference dispersion ratio (1.0 when the reference
    /// band is degenerate).
    pub dispersion_ratio: T,
    /// Number of reference values selected into the band.
    pub reference_count: usize,
    /// Number of predicted values selected into the band.
    pub predicted_count: usize,
}

/// Compare two parallel distributions band by band.
///
/// Each distribution is partitioned by its own `num_quantiles` boundaries,
/// then scanned in `band_width_pct`-wide ranges; per band the population,
/// RMS deviation, and predicted-over-reference dispersion ratio are
/// reported. Fails with `DimensionMismatch` when the distributions have
/// different lengths and `InvalidRange` when the band width is not a
/// multiple of the stored bin width or does not divide 100.
pub fn compare_bands<T: Float>(
    reference: &[T],
    predicted: &[T],
    num_quantiles: usize,
    band_width_pct: usize,
) -> Result<Vec<QuantileBand<T>>, CalibrationError> {
    if reference.len() != predicted.len() {
        return Err(CalibrationError::DimensionMismatch {
            context: "compare_bands",
            expected: reference.len(),
            got: predicted.len(),
        });
    }
    Validator::validate_band_width(band_width_pct, num_quantiles)?;

    let reference_bounds = QuantileBoundaries::compute(reference, num_quantiles)?;
    let predicted_bounds = QuantileBoundaries::compute(predicted, num_quantiles)?;

    let bands = 100 / band_width_pct;
    let mut out = Vec::with_capacity(bands);
    for i in 0..bands {
        let lower_pct = i * band_width_pct;
        let upper_pct = lower_pct + band_width_pct;
        let reference_band = reference_bounds.select_range(reference, lower_pct, upper_pct)?;
        let predicted_band = predicted_bounds.select_range(predicted, lower_pct, upper_pct)?;
        out.push(QuantileBand {
            lower_pct,
            upper_pct,
            reference_rms: rms_deviation(&reference_band),
            predicted_rms: rms_deviation(&predicted_band),
            dispersion_ratio: dispersion_ratio(&predicted_band, &reference_band),
            reference_count: reference_band.len(),
            predicted_count: predicted_band.len(),
        });
    }
    Ok(out)
}
