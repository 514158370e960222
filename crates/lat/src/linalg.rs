//! Free-function linear algebra helpers.
//!
//! - [`inner_product`]: zero-seeded sum of pairwise products
//! - [`matmul`]: row-by-column matrix product, mixed element types allowed
//! - [`identity`] and [`Matrix::IDENTITY`]: square identity matrices

use core::ops::Mul;

use num_traits::{ConstOne, ConstZero, One, Zero};

use crate::matrix::Matrix;
use crate::types::SquareMatrix;

/// Sum of `lhs[i] * rhs[i]`, starting from `O::zero()`.
///
/// Stops at the shorter of the two sequences. Works with any iterator of
/// references, including [`StridedView`](crate::StridedView) iterators of
/// different strides.
pub fn inner_product<'a, 'b, T, U, O>(
    lhs: impl IntoIterator<Item = &'a T>,
    rhs: impl IntoIterator<Item = &'b U>,
) -> O
where
    T: 'a + Mul<U, Output = O> + Copy,
    U: 'b + Copy,
    O: Zero,
{
    lhs.into_iter()
        .zip(rhs)
        .fold(O::zero(), |acc, (&a, &b)| acc + a * b)
}

/// Matrix product of an `N x M` and an `M x K` matrix.
///
/// Output cell `(r, c)` is the inner product of row `r` of `lhs` with column
/// `c` of `rhs`. Sharing `M` between the operand types makes an
/// inner-dimension mismatch a type error:
///
/// ```compile_fail
/// use lat::{matmul, IMatrix};
///
/// let a = IMatrix::<2, 3>::default();
/// let b = IMatrix::<2, 3>::default();
/// let _ = matmul(&a, &b);
/// ```
///
/// The element types may differ; the result holds `<T as Mul<U>>::Output`.
pub fn matmul<T, U, O, const N: usize, const M: usize, const K: usize>(
    lhs: &Matrix<T, N, M>,
    rhs: &Matrix<U, M, K>,
) -> Matrix<O, N, K>
where
    T: Mul<U, Output = O> + Copy,
    U: Copy,
    O: Zero,
{
    Matrix::from_fn(|r, c| lhs.row(r).dot(&rhs.column(c)))
}

/// `N x N` identity matrix.
pub fn identity<T: Zero + One, const N: usize>() -> SquareMatrix<T, N> {
    Matrix::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
}

impl<T: ConstZero + ConstOne + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix, evaluated at compile time once per `(T, N)`.
    pub const IDENTITY: Self = {
        let mut data = [[T::ZERO; N]; N];
        let mut i = 0;
        while i < N {
            data[i][i] = T::ONE;
            i += 1;
        }
        Self::from_rows(data)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FSquareMatrix, IMatrix, ISquareMatrix};

    #[test]
    fn test_inner_product() {
        assert_eq!(inner_product::<i32, i32, i32>(&[1, 2, 3], &[4, 5, 6]), 32);
        assert_eq!(inner_product::<i32, i32, i32>(&[], &[]), 0);
    }

    #[test]
    fn test_inner_product_float_accumulator_does_not_truncate() {
        let x = inner_product::<f64, f64, f64>(&[0.5, 0.25], &[1.0, 1.0]);
        assert!((x - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identity_forms_agree() {
        const I3: ISquareMatrix<3> = Matrix::IDENTITY;
        assert_eq!(I3, identity::<i32, 3>());
        assert_eq!(I3.into_rows(), [[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        assert_eq!(FSquareMatrix::<2>::IDENTITY, identity::<f32, 2>());
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = IMatrix::<2, 2>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(matmul(&a, &ISquareMatrix::<2>::IDENTITY), a);
        assert_eq!(matmul(&ISquareMatrix::<2>::IDENTITY, &a), a);
    }

    #[test]
    fn test_matmul_non_square_shapes() {
        let a = Matrix::<f64, 1, 2>::from_rows([[0.5, 2.0]]);
        let b = Matrix::<f64, 2, 1>::from_rows([[4.0], [0.25]]);
        assert_eq!(matmul(&a, &b).into_scalar(), 2.5);

        let column = Matrix::<u8, 2, 1>::from_rows([[2], [3]]);
        let row = Matrix::<u8, 1, 2>::from_rows([[1, 1]]);
        assert_eq!(matmul(&column, &row).into_rows(), [[2, 2], [3, 3]]);
    }

    #[test]
    fn test_empty_inner_dimension_yields_zero() {
        let a = Matrix::<i32, 2, 0>::default();
        let b = Matrix::<i32, 0, 3>::default();
        assert_eq!(matmul(&a, &b), Matrix::<i32, 2, 3>::ZERO);
    }
}
