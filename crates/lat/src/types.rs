//! Type aliases for common matrix shapes.

use crate::matrix::Matrix;

/// Row vector: a `1 x N` matrix.
pub type RowVec<T, const N: usize> = Matrix<T, 1, N>;

/// Column vector: an `N x 1` matrix.
pub type ColVec<T, const N: usize> = Matrix<T, N, 1>;

/// Square `N x N` matrix.
pub type SquareMatrix<T, const N: usize> = Matrix<T, N, N>;

/// `i32` matrix.
pub type IMatrix<const R: usize, const C: usize> = Matrix<i32, R, C>;

/// `i32` row vector.
pub type IRowVec<const N: usize> = RowVec<i32, N>;

/// `i32` column vector.
pub type IColVec<const N: usize> = ColVec<i32, N>;

/// `i32` square matrix.
pub type ISquareMatrix<const N: usize> = SquareMatrix<i32, N>;

/// `f32` matrix.
pub type FMatrix<const R: usize, const C: usize> = Matrix<f32, R, C>;

/// `f32` row vector.
pub type FRowVec<const N: usize> = RowVec<f32, N>;

/// `f32` column vector.
pub type FColVec<const N: usize> = ColVec<f32, N>;

/// `f32` square matrix.
pub type FSquareMatrix<const N: usize> = SquareMatrix<f32, N>;
