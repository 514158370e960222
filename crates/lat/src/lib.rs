//! Fixed-dimension matrices with strided row and column views.
//!
//! This crate provides a small, allocation-free matrix type whose dimensions
//! are const generic parameters. Shape errors are compile errors: adding a
//! `2 x 3` matrix to a `3 x 2` one, or multiplying matrices whose inner
//! dimensions differ, does not type-check.
//!
//! # Key Concepts
//!
//! - **Matrix**: [`Matrix<T, R, C>`], `R * C` elements stored row-major inline
//! - **Index descriptors**: `(r, c)`, `(r, ALL)` and `(ALL, c)` select a cell,
//!   a row or a column through a single [`Matrix::at`] entry point
//! - **Strided views**: [`StridedView`] / [`StridedViewMut`], non-owning
//!   windows over a row (stride 1) or a column (stride `C`) that iterate like
//!   ordinary double-ended, exact-size sequences
//!
//! # Modules
//!
//! - [`error`]: Error types for the checked APIs
//! - [`index`]: Index descriptors and the [`MatrixIndex`] dispatch trait
//! - [`linalg`]: Matrix product, inner product and identity helpers
//! - [`matrix`]: The [`Matrix`] container
//! - [`types`]: Shape and element type aliases
//! - [`view`]: Strided views and their iterators
//!
//! # Example
//! ```
//! use lat::prelude::*;
//!
//! let a = IMatrix::<2, 2>::from_rows([[1, 2], [3, 4]]);
//! let v = IColVec::<2>::from_rows([[2], [3]]);
//!
//! let transformed = a * v;
//! assert_eq!(transformed.at((ALL, 0)), [8, 18]);
//!
//! let dot: i32 = (transformed.transpose() * transformed).into();
//! assert_eq!(dot, 388);
//! ```
//!
//! # Features
//!
//! - `std` (default): link the standard library; without it the crate is
//!   `no_std`
//! - `nalgebra` (default): conversions to and from `nalgebra::SMatrix`
//! - `serde`: `Serialize` / `Deserialize` as nested row arrays

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod index;
pub mod linalg;
pub mod matrix;
pub mod types;
pub mod view;

mod compare;
mod ops;

#[cfg(feature = "nalgebra")]
mod convert;

#[cfg(feature = "serde")]
mod serialize;

// Re-export commonly used items at the crate root
pub use error::{Axis, MatrixError, Result};
pub use index::{All, Cell, ColumnSelector, MatrixIndex, RowSelector, ALL};
pub use linalg::{identity, inner_product, matmul};
pub use matrix::Matrix;
pub use types::{
    ColVec, FColVec, FMatrix, FRowVec, FSquareMatrix, IColVec, IMatrix, IRowVec, ISquareMatrix,
    RowVec, SquareMatrix,
};
pub use view::{Iter, IterMut, StridedView, StridedViewMut};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use lat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MatrixError, Result};
    pub use crate::index::{All, Cell, ColumnSelector, RowSelector, ALL};
    pub use crate::linalg::{identity, inner_product, matmul};
    pub use crate::matrix::Matrix;
    pub use crate::types::{
        ColVec, FColVec, FMatrix, FRowVec, FSquareMatrix, IColVec, IMatrix, IRowVec,
        ISquareMatrix, RowVec, SquareMatrix,
    };
    pub use crate::view::{StridedView, StridedViewMut};
}
