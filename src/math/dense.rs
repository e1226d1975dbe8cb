//! Dense vector kernels for Gram assembly and prediction.
//!
//! ## Purpose
//!
//! This module provides the contiguous dot-product and axpy sweeps that
//! dominate the solver and predictor inner loops, with a two-lane SIMD
//! specialization for f64.
//!
//! ## Design notes
//!
//! * **Trait dispatch**: `DenseKernels` mirrors the precision-dispatch
//!   pattern used by `FloatLinalg`; f64 routes to `wide::f64x2` loops with a
//!   scalar tail, f32 stays scalar.
//! * The ring-major matrix layout guarantees both operands of every dot and
//!   axpy are contiguous slices, so no gather step is needed.
//!
//! ## Invariants
//!
//! * Kernels operate over the shorter of the two operand lengths; callers
//!   validate dimensions before reaching this layer.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// DenseKernels Trait
// ============================================================================

/// Contiguous vector kernels with per-precision specializations.
pub trait DenseKernels: Float {
    /// Dot product of two slices.
    fn dot(a: &[Self], b: &[Self]) -> Self;

    /// Sum of a slice.
    fn sum(values: &[Self]) -> Self;

    /// In-place `y += alpha * x`.
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]);
}

impl DenseKernels for f64 {
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        simd::dot_f64(a, b)
    }

    #[inline]
    fn sum(values: &[Self]) -> Self {
        simd::sum_f64(values)
    }

    #[inline]
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        simd::axpy_f64(alpha, x, y)
    }
}

impl DenseKernels for f32 {
    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        scalar::dot(a, b)
    }

    #[inline]
    fn sum(values: &[Self]) -> Self {
        scalar::sum(values)
    }

    #[inline]
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]) {
        scalar::axpy(alpha, x, y)
    }
}

// ============================================================================
// Scalar Kernels
// ============================================================================

/// Scalar fallback kernels.
pub mod scalar {
    use super::*;

    /// Scalar dot product.
    pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
        let n = a.len().min(b.len());
        let mut acc = T::zero();
        for i in 0..n {
            acc = acc + a[i] * b[i];
        }
        acc
    }

    /// Scalar sum.
    pub fn sum<T: Float>(values: &[T]) -> T {
        let mut acc = T::zero();
        for &v in values {
            acc = acc + v;
        }
        acc
    }

    /// Scalar axpy.
    pub fn axpy<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
        let n = x.len().min(y.len());
        for i in 0..n {
            y[i] = y[i] + alpha * x[i];
        }
    }
}

// ============================================================================
// SIMD Kernels (f64)
// ============================================================================

/// Two-lane SIMD kernels for f64.
pub mod simd {
    use super::*;

    /// SIMD dot product, two events per lane step.
    pub fn dot_f64(a: &[f64], b: &[f64]) -> f64 {
        let n = a.len().min(b.len());
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;

        while i + 2 <= n {
            let va = f64x2::new([a[i], a[i + 1]]);
            let vb = f64x2::new([b[i], b[i + 1]]);
            acc += va * vb;
            i += 2;
        }

        let mut total = acc.reduce_add();

        // Tail
        for k in i..n {
            total += a[k] * b[k];
        }
        total
    }

    /// SIMD sum, two events per lane step.
    pub fn sum_f64(values: &[f64]) -> f64 {
        let n = values.len();
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;

        while i + 2 <= n {
            acc += f64x2::new([values[i], values[i + 1]]);
            i += 2;
        }

        let mut total = acc.reduce_add();
        for k in i..n {
            total += values[k];
        }
        total
    }

    /// SIMD axpy, two events per lane step.
    pub fn axpy_f64(alpha: f64, x: &[f64], y: &mut [f64]) {
        let n = x.len().min(y.len());
        let va = f64x2::splat(alpha);
        let mut i = 0;

        while i + 2 <= n {
            let vx = f64x2::new([x[i], x[i + 1]]);
            let vy = f64x2::new([y[i], y[i + 1]]);
            let out = (vx * va + vy).to_array();
            y[i] = out[0];
            y[i + 1] = out[1];
            i += 2;
        }

        for k in i..n {
            y[k] += alpha * x[k];
        }
    }
}
