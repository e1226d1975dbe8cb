//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit quality assessment: diagnostic statistics
//! of a prediction vector against its target.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-quality diagnostics (RMSE, MAE, R², residual summary).
pub mod diagnostics;
