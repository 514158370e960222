//! Index descriptors for [`Matrix`].
//!
//! A single indexing entry point, [`Matrix::at`], returns a different kind of
//! result depending on the *type* of index it is given:
//!
//! | descriptor                      | built from     | result                        |
//! |---------------------------------|----------------|-------------------------------|
//! | [`Cell`]                        | `(row, col)`   | `&T`                          |
//! | [`RowSelector`]                 | `(row, ALL)`   | row view, stride 1            |
//! | [`ColumnSelector`]              | `(ALL, col)`   | column view, stride `COLUMNS` |
//!
//! The choice is made statically through the sealed [`MatrixIndex`] trait, so
//! selecting a row or a column costs no runtime branch.
//!
//! [`Matrix::at`]: crate::Matrix::at

use crate::error::{Axis, MatrixError, Result};
use crate::matrix::Matrix;
use crate::view::{StridedView, StridedViewMut};

/// Wildcard marker meaning "every index along this axis".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct All;

/// The wildcard value, used in place of a row or a column index.
pub const ALL: All = All;

/// Index of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Row of the element
    pub row: usize,
    /// Column of the element
    pub column: usize,
}

impl Cell {
    /// Create a cell index.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Index selecting a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowSelector {
    /// Selected row
    pub row: usize,
}

impl RowSelector {
    /// Create a row selector.
    pub const fn new(row: usize) -> Self {
        Self { row }
    }
}

/// Index selecting a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnSelector {
    /// Selected column
    pub column: usize,
}

impl ColumnSelector {
    /// Create a column selector.
    pub const fn new(column: usize) -> Self {
        Self { column }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<(usize, All)> for RowSelector {
    fn from((row, _): (usize, All)) -> Self {
        Self::new(row)
    }
}

impl From<(All, usize)> for ColumnSelector {
    fn from((_, column): (All, usize)) -> Self {
        Self::new(column)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Cell {}
    impl Sealed for super::RowSelector {}
    impl Sealed for super::ColumnSelector {}
    impl Sealed for (usize, usize) {}
    impl Sealed for (usize, super::All) {}
    impl Sealed for (super::All, usize) {}
}

/// Shape-dispatched indexing into a `Matrix<T, R, C>`.
///
/// Implemented for [`Cell`], [`RowSelector`], [`ColumnSelector`] and the
/// tuple shapes `(usize, usize)`, `(usize, All)`, `(All, usize)`. The trait
/// is sealed; the set of index shapes is closed.
pub trait MatrixIndex<T, const R: usize, const C: usize>: sealed::Sealed + Copy {
    /// Result of indexing a shared matrix.
    type Output<'a>
    where
        T: 'a;

    /// Result of indexing a mutable matrix.
    type OutputMut<'a>
    where
        T: 'a;

    /// Resolve the index against a shared matrix.
    ///
    /// Bounds are a precondition; an out-of-range index panics.
    fn index(self, matrix: &Matrix<T, R, C>) -> Self::Output<'_>;

    /// Resolve the index against a mutable matrix.
    fn index_mut(self, matrix: &mut Matrix<T, R, C>) -> Self::OutputMut<'_>;

    /// Validate the index against the matrix dimensions.
    fn check(self) -> Result<Self>;
}

#[inline]
fn check_axis(axis: Axis, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(MatrixError::index_out_of_bounds(axis, index, len))
    }
}

impl<T, const R: usize, const C: usize> MatrixIndex<T, R, C> for Cell {
    type Output<'a>
        = &'a T
    where
        T: 'a;
    type OutputMut<'a>
        = &'a mut T
    where
        T: 'a;

    #[inline]
    fn index(self, matrix: &Matrix<T, R, C>) -> &T {
        &matrix[self]
    }

    #[inline]
    fn index_mut(self, matrix: &mut Matrix<T, R, C>) -> &mut T {
        &mut matrix[self]
    }

    fn check(self) -> Result<Self> {
        check_axis(Axis::Row, self.row, R)?;
        check_axis(Axis::Column, self.column, C)?;
        Ok(self)
    }
}

impl<T, const R: usize, const C: usize> MatrixIndex<T, R, C> for RowSelector {
    type Output<'a>
        = StridedView<'a, T, C, 1>
    where
        T: 'a;
    type OutputMut<'a>
        = StridedViewMut<'a, T, C, 1>
    where
        T: 'a;

    #[inline]
    fn index(self, matrix: &Matrix<T, R, C>) -> Self::Output<'_> {
        matrix.row(self.row)
    }

    #[inline]
    fn index_mut(self, matrix: &mut Matrix<T, R, C>) -> Self::OutputMut<'_> {
        matrix.row_mut(self.row)
    }

    fn check(self) -> Result<Self> {
        check_axis(Axis::Row, self.row, R)?;
        Ok(self)
    }
}

impl<T, const R: usize, const C: usize> MatrixIndex<T, R, C> for ColumnSelector {
    type Output<'a>
        = StridedView<'a, T, R, C>
    where
        T: 'a;
    type OutputMut<'a>
        = StridedViewMut<'a, T, R, C>
    where
        T: 'a;

    #[inline]
    fn index(self, matrix: &Matrix<T, R, C>) -> Self::Output<'_> {
        matrix.column(self.column)
    }

    #[inline]
    fn index_mut(self, matrix: &mut Matrix<T, R, C>) -> Self::OutputMut<'_> {
        matrix.column_mut(self.column)
    }

    fn check(self) -> Result<Self> {
        check_axis(Axis::Column, self.column, C)?;
        Ok(self)
    }
}

/// Forward a tuple shape to the descriptor it converts into.
macro_rules! forward_tuple_index {
    ($tuple:ty => $descriptor:ty) => {
        impl<T, const R: usize, const C: usize> MatrixIndex<T, R, C> for $tuple {
            type Output<'a>
                = <$descriptor as MatrixIndex<T, R, C>>::Output<'a>
            where
                T: 'a;
            type OutputMut<'a>
                = <$descriptor as MatrixIndex<T, R, C>>::OutputMut<'a>
            where
                T: 'a;

            #[inline]
            fn index(self, matrix: &Matrix<T, R, C>) -> Self::Output<'_> {
                <$descriptor>::from(self).index(matrix)
            }

            #[inline]
            fn index_mut(self, matrix: &mut Matrix<T, R, C>) -> Self::OutputMut<'_> {
                <$descriptor>::from(self).index_mut(matrix)
            }

            fn check(self) -> Result<Self> {
                MatrixIndex::<T, R, C>::check(<$descriptor>::from(self)).map(|_| self)
            }
        }
    };
}

forward_tuple_index!((usize, usize) => Cell);
forward_tuple_index!((usize, All) => RowSelector);
forward_tuple_index!((All, usize) => ColumnSelector);
