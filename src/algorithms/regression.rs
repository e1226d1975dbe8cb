//! Normal-equations least squares over ring sums.
//!
//! ## Purpose
//!
//! This module fits the linear model mapping per-ring energy sums to the
//! reference multiplicity: ordinary least squares with an explicit intercept,
//! optional ridge regularization, and a subset variant restricted to the
//! outer rings.
//!
//! ## Design notes
//!
//! * **Explicit assembly**: the Gram system is built directly from the sums
//!   `A[q][t] = sum_j C[q,j] C[t,j]`, `A[R][t] = sum_j C[t,j]`,
//!   `A[R][R] = N`, `B[t] = sum_j g_j C[t,j]`, `B[R] = sum_j g_j`, with the
//!   intercept column last so the weight layout is `[rings..., bias]`. The
//!   ring-major matrix makes every sum a contiguous dot product.
//! * **Ridge**: `ridge > 0` adds `ridge` to the full diagonal (intercept row
//!   included) before solving, shrinking coefficients toward zero to
//!   stabilize ill-conditioned fits.
//! * **Subset fits**: restricting to rings `[active_start, R)` solves a
//!   smaller system and re-expands into a full-length weight vector with
//!   exact zeros in the excluded positions, so downstream prediction stays
//!   agnostic to which rings were used.
//! * No iterative refinement; precision follows the chosen float type
//!   (double in practice). The solver does not special-case small event
//!   counts; `N >= active + 1` is the caller's responsibility and
//!   shortfalls surface as `SingularMatrix`.
//!
//! ## Invariants
//!
//! * A returned weight vector always has length `rings + 1`.
//! * Excluded subset positions hold bitwise 0.0, never "small but nonzero".
//!
//! ## Non-goals
//!
//! * No L1/lasso path; ridge (L2) is the only regularizer.
//! * No automatic retry on singular systems; the caller decides whether to
//!   re-fit with a ridge term.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::dense::DenseKernels;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::CalibrationError;
use crate::primitives::matrix::RingMatrix;

// ============================================================================
// Weight Vector
// ============================================================================

/// A fitted weight vector: per-ring coefficients plus a trailing bias term.
///
/// Index `r < rings` is the coefficient of ring `r`; index `rings` is the
/// bias. Immutable once produced by a fit.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector<T> {
    weights: Vec<T>,
}

impl<T: Float> WeightVector<T> {
    /// Wrap a raw coefficient vector (`rings + 1` entries, bias last).
    ///
    /// Fails with `EmptyInput` when fewer than two entries are supplied
    /// (at least one ring plus the bias).
    pub fn new(weights: Vec<T>) -> Result<Self, CalibrationError> {
        if weights.len() < 2 {
            return Err(CalibrationError::EmptyInput);
        }
        Ok(Self { weights })
    }

    /// Number of ring coefficients (excludes the bias).
    #[inline]
    pub fn rings(&self) -> usize {
        self.weights.len() - 1
    }

    /// The bias/intercept term.
    #[inline]
    pub fn bias(&self) -> T {
        self.weights[self.weights.len() - 1]
    }

    /// The per-ring coefficients, in matrix row order.
    #[inline]
    pub fn ring_weights(&self) -> &[T] {
        &self.weights[..self.weights.len() - 1]
    }

    /// The full coefficient slice, bias last.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.weights
    }

    /// Consume into the raw coefficient vector.
    pub fn into_inner(self) -> Vec<T> {
        self.weights
    }
}

impl<T: DenseKernels> WeightVector<T> {
    /// Apply the weights to a ring-sum matrix, one prediction per event.
    ///
    /// `prediction[j] = bias + sum_r w_r * matrix[r][j]`. The matrix need
    /// not be the one the weights were fitted on; cross-dataset application
    /// (fit on simulation, predict on detector data) is a first-class use.
    /// Fails with `DimensionMismatch` when the ring counts disagree.
    pub fn predict(&self, matrix: &RingMatrix<T>) -> Result<Vec<T>, CalibrationError> {
        if matrix.rings() != self.rings() {
            return Err(CalibrationError::DimensionMismatch {
                context: "predict weights",
                expected: self.rings(),
                got: matrix.rings(),
            });
        }
        let mut predictions = vec![self.bias(); matrix.events()];
        for (r, &w) in self.ring_weights().iter().enumerate() {
            T::axpy(w, matrix.row(r), &mut predictions);
        }
        Ok(predictions)
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit weights over all rings.
///
/// Equivalent to [`fit_subset`] with `active_start = 0`.
pub fn fit<T: FloatLinalg + DenseKernels>(
    matrix: &RingMatrix<T>,
    target: &[T],
    ridge: T,
) -> Result<WeightVector<T>, CalibrationError> {
    fit_subset(matrix, target, 0, ridge)
}

/// Fit weights over the contiguous ring subset `[active_start, rings)`.
///
/// Builds and solves the normal-equations system for the active rings plus
/// an intercept, then re-expands the solution into a full-length weight
/// vector: positions below `active_start` are exactly 0.0, the bias is
/// carried at the last index. Fails with `SingularMatrix` when the Gram
/// matrix is not numerically invertible; the caller may retry with
/// `ridge > 0`.
pub fn fit_subset<T: FloatLinalg + DenseKernels>(
    matrix: &RingMatrix<T>,
    target: &[T],
    active_start: usize,
    ridge: T,
) -> Result<WeightVector<T>, CalibrationError> {
    let rings = matrix.rings();
    Validator::validate_subset_start(active_start, rings)?;
    Validator::validate_target(matrix.events(), target)?;
    Validator::validate_ridge(ridge)?;

    let active = rings - active_start;
    let dim = active + 1;
    let mut gram = vec![T::zero(); dim * dim];
    let mut rhs = vec![T::zero(); dim];

    // Ring-ring block and intercept border, exploiting symmetry.
    for q in 0..active {
        let row_q = matrix.row(active_start + q);
        for t in q..active {
            let value = T::dot(row_q, matrix.row(active_start + t));
            gram[q * dim + t] = value;
            gram[t * dim + q] = value;
        }
        let row_sum = T::sum(row_q);
        gram[q * dim + active] = row_sum;
        gram[active * dim + q] = row_sum;
        rhs[q] = T::dot(target, row_q);
    }
    gram[active * dim + active] = T::from(matrix.events()).unwrap();
    rhs[active] = T::sum(target);

    if ridge > T::zero() {
        for i in 0..dim {
            gram[i * dim + i] = gram[i * dim + i] + ridge;
        }
    }

    let solution =
        T::solve_gram(&gram, &rhs, dim).ok_or(CalibrationError::SingularMatrix { dim })?;

    // Re-expand: excluded rings pinned to exact zero, bias last.
    let mut weights = vec![T::zero(); rings + 1];
    weights[active_start..rings].copy_from_slice(&solution[..active]);
    weights[rings] = solution[active];
    WeightVector::new(weights)
}
