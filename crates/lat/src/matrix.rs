//! The fixed-dimension matrix container.
//!
//! [`Matrix<T, R, C>`] owns exactly `R * C` elements stored contiguously in
//! row-major order: the element at `(r, c)` lives at linear offset `r * C + c`
//! of [`Matrix::as_slice`]. Both dimensions are part of the type, so matrices
//! of different shapes never mix and shape errors surface at compile time.

use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::ConstZero;

use crate::error::{MatrixError, Result};
use crate::index::{Cell, MatrixIndex};
use crate::view::{span_len, StridedView, StridedViewMut};

/// Dense `R x C` matrix with inline, row-major storage.
///
/// The container places no requirement on `T`; each operation states the
/// bounds it needs. Indexing bounds are a precondition: the unchecked entry
/// points ([`at`](Self::at), `matrix[(r, c)]`, [`row`](Self::row),
/// [`column`](Self::column)) panic on an out-of-range index, while
/// [`get`](Self::get) and [`try_at`](Self::try_at) report it.
///
/// # Example
/// ```
/// use lat::{Matrix, ALL};
///
/// let m = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m[(1, 0)], 3);
/// assert_eq!(m.at((0, ALL)), [1, 2]);
/// assert_eq!(m.at((ALL, 1)), [2, 4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;

    /// Number of columns.
    pub const COLUMNS: usize = C;

    /// Total number of elements.
    pub const LEN: usize = R * C;

    /// Create a matrix from a nested row-major literal.
    #[inline]
    pub const fn from_rows(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Create a matrix by calling `f(row, column)` for every position, in
    /// row-major order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: core::array::from_fn(|r| core::array::from_fn(|c| f(r, c))),
        }
    }

    /// Create a matrix from a flat row-major array.
    ///
    /// The element count must equal `R * C`; anything else fails to compile.
    ///
    /// ```
    /// use lat::IMatrix;
    ///
    /// let m = IMatrix::<2, 3>::from_flat([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(1, 2)], 6);
    /// ```
    ///
    /// ```compile_fail
    /// use lat::IMatrix;
    ///
    /// let m = IMatrix::<2, 2>::from_flat([1, 2, 3]);
    /// ```
    pub fn from_flat<const N: usize>(flat: [T; N]) -> Self
    where
        T: Copy,
    {
        const { assert!(N == R * C, "flat length must equal rows * columns") };
        Self::from_fn(|r, c| flat[r * C + c])
    }

    /// Create a matrix from a row-major slice, checking its length at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::LengthMismatch`] unless `slice.len() == R * C`.
    pub fn try_from_slice(slice: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if slice.len() != Self::LEN {
            return Err(MatrixError::length_mismatch(Self::LEN, slice.len()));
        }
        Ok(Self::from_fn(|r, c| slice[r * C + c]))
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        C
    }

    /// `(rows, columns)`.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Borrow the storage as nested rows.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    /// Mutably borrow the storage as nested rows.
    #[inline]
    pub fn as_rows_mut(&mut self) -> &mut [[T; C]; R] {
        &mut self.data
    }

    /// Consume the matrix, returning its nested rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }

    /// Borrow the storage as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Mutably borrow the storage as a flat row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutably iterate over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Apply `f` to every element, producing a matrix of the same shape.
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix {
            data: self.data.map(|row| row.map(&mut f)),
        }
    }

    /// Index by cell, row selector or column selector.
    ///
    /// `(r, c)` yields `&T`, `(r, ALL)` a row view and `(ALL, c)` a column
    /// view. Bounds are a precondition; an out-of-range index panics.
    #[inline]
    pub fn at<I>(&self, index: I) -> I::Output<'_>
    where
        I: MatrixIndex<T, R, C>,
    {
        index.index(self)
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut<I>(&mut self, index: I) -> I::OutputMut<'_>
    where
        I: MatrixIndex<T, R, C>,
    {
        index.index_mut(self)
    }

    /// Checked indexing, returning `None` when the index is out of range.
    #[inline]
    pub fn get<I>(&self, index: I) -> Option<I::Output<'_>>
    where
        I: MatrixIndex<T, R, C>,
    {
        index.check().ok().map(|index| index.index(self))
    }

    /// Checked mutable indexing, returning `None` when the index is out of
    /// range.
    #[inline]
    pub fn get_mut<I>(&mut self, index: I) -> Option<I::OutputMut<'_>>
    where
        I: MatrixIndex<T, R, C>,
    {
        match index.check() {
            Ok(index) => Some(index.index_mut(self)),
            Err(_) => None,
        }
    }

    /// Checked indexing that reports which axis was out of range.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] for an out-of-range row or
    /// column.
    #[inline]
    pub fn try_at<I>(&self, index: I) -> Result<I::Output<'_>>
    where
        I: MatrixIndex<T, R, C>,
    {
        index.check().map(|index| index.index(self))
    }

    /// View of row `row`: `C` elements, stride 1.
    #[inline]
    pub fn row(&self, row: usize) -> StridedView<'_, T, C, 1> {
        StridedView::from_span(&self.data[row])
    }

    /// Mutable view of row `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> StridedViewMut<'_, T, C, 1> {
        StridedViewMut::from_span(&mut self.data[row])
    }

    /// View of column `column`: `R` elements, stride `C`.
    ///
    /// The span `column..column + (R - 1) * C + 1` only fits the storage
    /// when `column < C`, so the slice bounds check doubles as the index
    /// check.
    #[inline]
    pub fn column(&self, column: usize) -> StridedView<'_, T, R, C> {
        if R == 0 {
            return StridedView::from_span(&[]);
        }
        StridedView::from_span(&self.as_slice()[column..column + span_len(R, C)])
    }

    /// Mutable view of column `column`.
    #[inline]
    pub fn column_mut(&mut self, column: usize) -> StridedViewMut<'_, T, R, C> {
        if R == 0 {
            return StridedViewMut::from_span(&mut []);
        }
        StridedViewMut::from_span(&mut self.as_mut_slice()[column..column + span_len(R, C)])
    }

    /// Iterate over the row views, top to bottom.
    pub fn row_views(
        &self,
    ) -> impl DoubleEndedIterator<Item = StridedView<'_, T, C, 1>> + ExactSizeIterator {
        (0..R).map(move |r| self.row(r))
    }

    /// Iterate over the column views, left to right.
    pub fn column_views(
        &self,
    ) -> impl DoubleEndedIterator<Item = StridedView<'_, T, R, C>> + ExactSizeIterator {
        (0..C).map(move |c| self.column(c))
    }

    /// Return the `C x R` transpose.
    ///
    /// Each source row is copied into the matching column of the result.
    pub fn transpose(&self) -> Matrix<T, C, R>
    where
        T: Copy + Default,
    {
        let mut result = Matrix::<T, C, R>::default();
        for (r, row) in self.row_views().enumerate() {
            result.column_mut(r).copy_from_view(&row);
        }
        result
    }
}

impl<T: ConstZero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix, usable in constant expressions.
    pub const ZERO: Self = Self::from_rows([[T::ZERO; C]; R]);
}

impl<T> Matrix<T, 1, 1> {
    /// Unwrap a 1x1 matrix into its single element.
    ///
    /// This is how the result of `row * column` is read as a scalar.
    #[inline]
    pub fn into_scalar(self) -> T {
        let [[value]] = self.data;
        value
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.data[row][column]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.data[row][column]
    }
}

impl<T, const R: usize, const C: usize> Index<Cell> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, cell: Cell) -> &T {
        &self.data[cell.row][cell.column]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<Cell> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        &mut self.data[cell.row][cell.column]
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(data: [[T; C]; R]) -> Self {
        Self::from_rows(data)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(matrix: Matrix<T, R, C>) -> Self {
        matrix.data
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = MatrixError;

    fn try_from(slice: &[T]) -> Result<Self> {
        Self::try_from_slice(slice)
    }
}

impl<T, const R: usize, const C: usize> AsRef<[T]> for Matrix<T, R, C> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const R: usize, const C: usize> AsMut<[T]> for Matrix<T, R, C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
