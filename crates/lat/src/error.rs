//! Error types for the checked matrix APIs.
//!
//! The core operations of this crate never fail at runtime: dimension
//! mismatches are rejected by the type system and indexing bounds are a
//! precondition. The errors below are only produced by the additive,
//! explicitly checked entry points such as [`Matrix::try_at`] and
//! [`Matrix::try_from_slice`].
//!
//! [`Matrix::try_at`]: crate::Matrix::try_at
//! [`Matrix::try_from_slice`]: crate::Matrix::try_from_slice

use core::fmt;
use thiserror::Error;

/// Axis of a matrix, used to report which index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The row axis (first index).
    Row,
    /// The column axis (second index).
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Errors reported by the checked matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An index lies outside the matrix along one axis.
    ///
    /// This error occurs when a checked access is given a row or column
    /// index greater than or equal to the corresponding dimension.
    #[error("{axis} index {index} out of bounds for {axis} count {len}")]
    IndexOutOfBounds {
        /// Axis on which the index was out of range
        axis: Axis,
        /// The offending index
        index: usize,
        /// Number of valid indices along that axis
        len: usize,
    },

    /// A flat sequence does not hold the expected number of elements.
    ///
    /// This error occurs when building a matrix or a view from a slice
    /// whose length does not match the required element count.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Required number of elements
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },
}

impl MatrixError {
    /// Create an IndexOutOfBounds error.
    pub const fn index_out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { axis, index, len }
    }

    /// Create a LengthMismatch error.
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

/// Result type alias for the checked matrix operations.
pub type Result<T> = core::result::Result<T, MatrixError>;
