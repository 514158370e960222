//! Conversions to and from `nalgebra` statically sized matrices.
//!
//! Enabled by the `nalgebra` feature. `nalgebra` stores column-major, so the
//! conversion goes element by element through logical `(row, column)`
//! positions rather than reinterpreting storage.

use nalgebra::{SMatrix, Scalar};

use crate::matrix::Matrix;

impl<T: Scalar, const R: usize, const C: usize> From<SMatrix<T, R, C>> for Matrix<T, R, C> {
    fn from(matrix: SMatrix<T, R, C>) -> Self {
        Self::from_fn(|r, c| matrix[(r, c)].clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<Matrix<T, R, C>> for SMatrix<T, R, C> {
    fn from(matrix: Matrix<T, R, C>) -> Self {
        Self::from_fn(|r, c| matrix[(r, c)].clone())
    }
}
