//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer provides orchestration and input validation: the fail-fast
//! `Validator` and the executor that runs a frozen dataset through the
//! composed fit → predict → compare pipeline.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution and the calibration report.
pub mod executor;

/// Fail-fast validation of configuration and data.
pub mod validator;
