//! Streaming accumulation of per-event detector observations.
//!
//! ## Purpose
//!
//! This module turns a finite stream of `(ring sums, reference, auxiliary)`
//! tuples into the frozen dataset consumed by the solver: a dense ring-sum
//! matrix plus aligned reference and auxiliary vectors.
//!
//! ## Design notes
//!
//! * **Atomic appends**: every check runs before the first write, so a
//!   rejected event leaves no trace and the caller may skip it and continue.
//! * **Clamped hit path**: raw per-hit responses are clamped to a fixed
//!   range before summation (below the floor they are zeroed, above the cap
//!   they saturate) to suppress noise and saturation artifacts. The clamp is
//!   a domain policy whose constants must be reproduced exactly for
//!   numerical compatibility with downstream fits; the pre-summed `append`
//!   path does not re-clamp, since ring sums legitimately exceed the per-hit
//!   cap.
//! * **Single writer, then freeze**: only the accumulator can write the
//!   growing matrix, and reading requires consuming it through `finish`,
//!   which trims storage to the exact event count. Column/row/vector
//!   alignment is unverifiable mid-growth, so the freeze is an invariant of
//!   the type, not a convention.
//!
//! ## Invariants
//!
//! * Matrix columns, the reference vector, and the auxiliary vector stay
//!   aligned 1:1 at every event index.
//! * Auxiliary presence is decided by the first event and enforced for the
//!   rest of the stream.
//!
//! ## Non-goals
//!
//! * This module does not read event files or apply physics cuts; it
//!   consumes already-decoded in-memory tuples.
//! * This module does not support incremental refits after `finish`; a new
//!   calibration requires a full new accumulation pass.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CalibrationError;
use crate::primitives::matrix::RingMatrix;

// ============================================================================
// Clamp Policy
// ============================================================================

/// Per-hit response clamp applied before summation.
///
/// Responses below `floor` are zeroed; responses above `cap` saturate at
/// `cap`. The defaults reproduce the source detector's minimum-ionizing
/// calibration window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampPolicy<T> {
    /// Threshold below which a hit is treated as noise and zeroed.
    pub floor: T,
    /// Saturation cap applied to large responses.
    pub cap: T,
}

impl<T: Float> Default for ClampPolicy<T> {
    fn default() -> Self {
        Self {
            floor: T::from(0.2).unwrap(),
            cap: T::from(3.0).unwrap(),
        }
    }
}

impl<T: Float> ClampPolicy<T> {
    /// Create a clamp policy with explicit bounds.
    pub fn new(floor: T, cap: T) -> Self {
        Self { floor, cap }
    }

    /// Apply the clamp to a single hit response.
    #[inline]
    pub fn apply(&self, response: T) -> T {
        if response < self.floor {
            T::zero()
        } else if response > self.cap {
            self.cap
        } else {
            response
        }
    }
}

// ============================================================================
// Ring Accumulator
// ============================================================================

/// Streaming accumulator for per-event ring sums and reference values.
#[derive(Debug, Clone)]
pub struct RingAccumulator<T> {
    matrix: RingMatrix<T>,
    reference: Vec<T>,
    auxiliary: Vec<T>,
    has_auxiliary: Option<bool>,
    clamp: ClampPolicy<T>,
    scratch: Vec<T>,
}

impl<T: Float> RingAccumulator<T> {
    /// Create an accumulator for the given ring count.
    pub fn new(rings: usize) -> Self {
        Self {
            matrix: RingMatrix::new(rings),
            reference: Vec::new(),
            auxiliary: Vec::new(),
            has_auxiliary: None,
            clamp: ClampPolicy::default(),
            scratch: Vec::new(),
        }
    }

    /// Create an accumulator with a pre-sized event capacity.
    pub fn with_capacity(rings: usize, capacity: usize) -> Self {
        Self {
            matrix: RingMatrix::with_capacity(rings, capacity),
            reference: Vec::with_capacity(capacity),
            auxiliary: Vec::new(),
            has_auxiliary: None,
            clamp: ClampPolicy::default(),
            scratch: Vec::new(),
        }
    }

    /// Replace the per-hit clamp policy.
    pub fn with_clamp(mut self, clamp: ClampPolicy<T>) -> Self {
        self.clamp = clamp;
        self
    }

    /// Number of detector rings.
    #[inline]
    pub fn rings(&self) -> usize {
        self.matrix.rings()
    }

    /// Number of events accumulated so far.
    #[inline]
    pub fn events(&self) -> usize {
        self.matrix.events()
    }

    /// The active clamp policy.
    #[inline]
    pub fn clamp(&self) -> ClampPolicy<T> {
        self.clamp
    }

    /// Append one event from pre-summed ring values.
    ///
    /// Fails with `InvalidInput` when `ring_sums` does not have one entry
    /// per ring, and with `InconsistentAuxiliary` when the auxiliary
    /// presence disagrees with the stream so far. A failed append writes
    /// nothing.
    pub fn append(
        &mut self,
        ring_sums: &[T],
        reference: T,
        auxiliary: Option<T>,
    ) -> Result<(), CalibrationError> {
        if ring_sums.len() != self.matrix.rings() {
            return Err(CalibrationError::InvalidInput {
                got: ring_sums.len(),
                expected: self.matrix.rings(),
            });
        }
        self.check_auxiliary(auxiliary.is_some())?;

        self.matrix.push_column(ring_sums)?;
        self.reference.push(reference);
        if let Some(aux) = auxiliary {
            self.auxiliary.push(aux);
        }
        Ok(())
    }

    /// Append one event from raw per-hit responses.
    ///
    /// Each hit is a `(ring, response)` pair; responses are clamped before
    /// being summed into their ring. Fails with `InvalidRingIndex` when a
    /// hit addresses a ring outside the detector.
    pub fn append_hits(
        &mut self,
        hits: &[(usize, T)],
        reference: T,
        auxiliary: Option<T>,
    ) -> Result<(), CalibrationError> {
        let rings = self.matrix.rings();
        for &(ring, _) in hits {
            if ring >= rings {
                return Err(CalibrationError::InvalidRingIndex { got: ring, rings });
            }
        }

        let mut sums = mem::take(&mut self.scratch);
        sums.clear();
        sums.resize(rings, T::zero());
        for &(ring, response) in hits {
            sums[ring] = sums[ring] + self.clamp.apply(response);
        }

        let result = self.append(&sums, reference, auxiliary);
        self.scratch = sums;
        result
    }

    /// Trim storage to the exact event count and freeze into a dataset.
    pub fn finish(mut self) -> CalibrationSet<T> {
        self.matrix.trim();
        self.reference.shrink_to_fit();
        let auxiliary = if self.has_auxiliary == Some(true) {
            self.auxiliary.shrink_to_fit();
            Some(self.auxiliary)
        } else {
            None
        };
        CalibrationSet {
            matrix: self.matrix,
            reference: self.reference,
            auxiliary,
        }
    }

    fn check_auxiliary(&mut self, has: bool) -> Result<(), CalibrationError> {
        match self.has_auxiliary {
            None => {
                self.has_auxiliary = Some(has);
                Ok(())
            }
            Some(expected) if expected == has => Ok(()),
            Some(_) => Err(CalibrationError::InconsistentAuxiliary {
                event: self.events(),
            }),
        }
    }
}

// ============================================================================
// Calibration Set
// ============================================================================

/// The frozen output of an accumulation pass.
///
/// Holds the ring-sum matrix and its aligned reference (and optional
/// auxiliary) vectors. Immutable by construction: the only mutating path is
/// the accumulator that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSet<T> {
    matrix: RingMatrix<T>,
    reference: Vec<T>,
    auxiliary: Option<Vec<T>>,
}

impl<T: Float> CalibrationSet<T> {
    /// Assemble a dataset from parts already held by a collaborator.
    ///
    /// Fails with `DimensionMismatch` when the vectors are not aligned with
    /// the matrix columns.
    pub fn new(
        matrix: RingMatrix<T>,
        reference: Vec<T>,
        auxiliary: Option<Vec<T>>,
    ) -> Result<Self, CalibrationError> {
        if reference.len() != matrix.events() {
            return Err(CalibrationError::DimensionMismatch {
                context: "calibration set reference",
                expected: matrix.events(),
                got: reference.len(),
            });
        }
        if let Some(ref aux) = auxiliary {
            if aux.len() != matrix.events() {
                return Err(CalibrationError::DimensionMismatch {
                    context: "calibration set auxiliary",
                    expected: matrix.events(),
                    got: aux.len(),
                });
            }
        }
        Ok(Self {
            matrix,
            reference,
            auxiliary,
        })
    }

    /// The ring-sum matrix.
    #[inline]
    pub fn matrix(&self) -> &RingMatrix<T> {
        &self.matrix
    }

    /// The reference observable, one value per event.
    #[inline]
    pub fn reference(&self) -> &[T] {
        &self.reference
    }

    /// The auxiliary observable, when the stream carried one.
    #[inline]
    pub fn auxiliary(&self) -> Option<&[T]> {
        self.auxiliary.as_deref()
    }

    /// Number of events in the set.
    #[inline]
    pub fn events(&self) -> usize {
        self.matrix.events()
    }

    /// Number of detector rings.
    #[inline]
    pub fn rings(&self) -> usize {
        self.matrix.rings()
    }

    /// Decompose into owned parts for collaborator-side persistence.
    pub fn into_parts(self) -> (RingMatrix<T>, Vec<T>, Option<Vec<T>>) {
        (self.matrix, self.reference, self.auxiliary)
    }
}
