//! Linear algebra backend for the normal-equations solver.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense solve of
//! the normal-equations system, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses LU decomposition with partial pivoting; the Gram matrix is
//!   symmetric and small (ring count + 1 square), so a direct dense solve is
//!   appropriate.
//! * Singularity is detected before solving by inspecting the pivot spread
//!   of the factorization: a vanishing smallest pivot is a vanishing
//!   determinant, gated relative to the largest pivot so the check is
//!   insensitive to the overall scale of the accumulated sums.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the square system `A * w = b`.
    ///
    /// `a` is the row-major `n` by `n` Gram matrix, `b` the right-hand side
    /// of length `n`. Returns `None` when the matrix is numerically
    /// singular.
    fn solve_gram(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_gram(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_gram_f64(a, b, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_gram(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_gram_f32(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based dense solves for the normal equations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve `A * w = b` using f64 precision.
    pub fn solve_gram_f64(a: &[f64], b: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let lu = matrix.lu();
        if pivots_degenerate(lu.u().diagonal().as_slice(), f64::EPSILON * 100.0) {
            return None;
        }

        lu.solve(&rhs).map(|w: DVector<f64>| w.as_slice().to_vec())
    }

    /// Solve `A * w = b` using f32 precision.
    pub fn solve_gram_f32(a: &[f32], b: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        let lu = matrix.lu();
        if pivots_degenerate(lu.u().diagonal().as_slice(), f32::EPSILON * 100.0) {
            return None;
        }

        lu.solve(&rhs).map(|w: DVector<f32>| w.as_slice().to_vec())
    }

    /// True when the smallest pivot magnitude collapses relative to the
    /// largest, i.e. the determinant is numerically zero.
    fn pivots_degenerate<T: Float>(pivots: &[T], epsilon: T) -> bool {
        let mut smallest = T::infinity();
        let mut largest = T::zero();
        for &p in pivots {
            if !p.is_finite() {
                return true;
            }
            let magnitude = p.abs();
            smallest = smallest.min(magnitude);
            largest = largest.max(magnitude);
        }
        largest == T::zero() || smallest < epsilon * largest
    }
}
