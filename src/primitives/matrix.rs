//! Dense ring-sum matrix with explicit event-capacity management.
//!
//! ## Purpose
//!
//! This module provides the `RingMatrix` storage underlying the calibration
//! pipeline: a dense matrix with a fixed number of detector rings (rows) and
//! a dynamically growing number of events (columns).
//!
//! ## Design notes
//!
//! * **Ring-major layout**: each ring's samples are contiguous across events,
//!   so Gram assembly (row-row dot products) and prediction (per-ring axpy
//!   sweeps) operate on contiguous slices.
//! * **Geometric growth**: appending past capacity doubles the event
//!   capacity and copies each ring row into the wider allocation. Growth is
//!   explicit rather than delegated to `Vec` because the row stride changes
//!   with capacity.
//! * **Trim at freeze**: `trim` compacts storage to the exact event count
//!   once the input stream is exhausted.
//!
//! ## Invariants
//!
//! * `events <= capacity` at all times.
//! * Row `r` occupies `data[r * capacity .. r * capacity + events]`.
//! * A column is either fully written or not present; no partially written
//!   event is ever observable.
//!
//! ## Non-goals
//!
//! * This module does not perform any numeric analysis of its contents.
//! * This module does not shrink capacity except through `trim`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CalibrationError;

/// Default initial event capacity for a freshly created matrix.
const DEFAULT_EVENT_CAPACITY: usize = 4;

// ============================================================================
// RingMatrix
// ============================================================================

/// Dense matrix of per-ring energy sums, rings by events.
///
/// Rows are detector rings (fixed at construction); columns are events
/// (appended one at a time). Entry `(r, j)` is the summed, clamped response
/// of ring `r` in event `j`.
#[derive(Debug, Clone)]
pub struct RingMatrix<T> {
    rings: usize,
    events: usize,
    capacity: usize,
    data: Vec<T>,
}

impl<T: PartialEq> PartialEq for RingMatrix<T> {
    /// Logical equality: same shape and same accumulated values, regardless
    /// of spare capacity.
    fn eq(&self, other: &Self) -> bool {
        self.rings == other.rings
            && self.events == other.events
            && (0..self.rings).all(|r| {
                self.data[r * self.capacity..r * self.capacity + self.events]
                    == other.data[r * other.capacity..r * other.capacity + other.events]
            })
    }
}

impl<T: Float> RingMatrix<T> {
    /// Create an empty matrix with the given ring count.
    pub fn new(rings: usize) -> Self {
        Self::with_capacity(rings, DEFAULT_EVENT_CAPACITY)
    }

    /// Create an empty matrix with the given ring count and event capacity.
    pub fn with_capacity(rings: usize, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            rings,
            events: 0,
            capacity,
            data: vec![T::zero(); rings * capacity],
        }
    }

    /// Build a matrix from ring-major rows.
    ///
    /// Every row must have the same length (the event count). Fails with
    /// `EmptyInput` when no rows are given and `DimensionMismatch` when row
    /// lengths disagree.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, CalibrationError> {
        if rows.is_empty() {
            return Err(CalibrationError::EmptyInput);
        }
        let events = rows[0].len();
        for row in rows.iter() {
            if row.len() != events {
                return Err(CalibrationError::DimensionMismatch {
                    context: "from_rows",
                    expected: events,
                    got: row.len(),
                });
            }
        }
        let rings = rows.len();
        let mut matrix = Self::with_capacity(rings, events.max(1));
        for (r, row) in rows.iter().enumerate() {
            matrix.data[r * matrix.capacity..r * matrix.capacity + events].copy_from_slice(row);
        }
        matrix.events = events;
        Ok(matrix)
    }

    /// Build a matrix from event-major columns.
    ///
    /// Every column must have the same length (the ring count).
    pub fn from_columns(columns: &[Vec<T>]) -> Result<Self, CalibrationError> {
        if columns.is_empty() {
            return Err(CalibrationError::EmptyInput);
        }
        let rings = columns[0].len();
        let mut matrix = Self::with_capacity(rings, columns.len());
        for column in columns.iter() {
            matrix.push_column(column)?;
        }
        Ok(matrix)
    }

    /// Number of detector rings (rows).
    #[inline]
    pub fn rings(&self) -> usize {
        self.rings
    }

    /// Number of accumulated events (columns).
    #[inline]
    pub fn events(&self) -> usize {
        self.events
    }

    /// Current event capacity of the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Contiguous slice of ring `r` across all accumulated events.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rings`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.capacity;
        &self.data[start..start + self.events]
    }

    /// Value at ring `r`, event `j`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rings` or `j >= events`.
    #[inline]
    pub fn get(&self, r: usize, j: usize) -> T {
        assert!(j < self.events, "event index out of range");
        self.data[r * self.capacity + j]
    }

    /// Copy of event column `j`, one value per ring.
    ///
    /// # Panics
    ///
    /// Panics if `j >= events`.
    pub fn column(&self, j: usize) -> Vec<T> {
        assert!(j < self.events, "event index out of range");
        (0..self.rings)
            .map(|r| self.data[r * self.capacity + j])
            .collect()
    }

    /// Append one event column, growing capacity geometrically when full.
    ///
    /// The length check happens before any write, so a failed append leaves
    /// the matrix untouched.
    pub fn push_column(&mut self, column: &[T]) -> Result<(), CalibrationError> {
        if column.len() != self.rings {
            return Err(CalibrationError::InvalidInput {
                got: column.len(),
                expected: self.rings,
            });
        }
        if self.events == self.capacity {
            self.grow(self.capacity * 2);
        }
        for (r, &value) in column.iter().enumerate() {
            self.data[r * self.capacity + self.events] = value;
        }
        self.events += 1;
        Ok(())
    }

    /// Compact the backing storage to the exact event count.
    pub fn trim(&mut self) {
        if self.capacity != self.events.max(1) {
            self.grow(self.events.max(1));
        }
        self.data.shrink_to_fit();
    }

    /// Reallocate to the given event capacity, preserving row alignment.
    fn grow(&mut self, new_capacity: usize) {
        let mut data = vec![T::zero(); self.rings * new_capacity];
        for r in 0..self.rings {
            let src = &self.data[r * self.capacity..r * self.capacity + self.events];
            data[r * new_capacity..r * new_capacity + self.events].copy_from_slice(src);
        }
        self.data = data;
        self.capacity = new_capacity;
    }
}
