//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! calibration pipeline:
//! - Dense linear algebra for the normal-equations solve
//! - Contiguous dot/axpy kernels with SIMD specializations
//! - Basic sample statistics (mean, RMS deviation)
//!
//! These are reusable building blocks with no domain-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dense solve of the normal-equations system (nalgebra backend).
pub mod linalg;

/// Contiguous dot/axpy kernels with f64 SIMD specializations.
pub mod dense;

/// Population mean and RMS deviation.
pub mod stats;
