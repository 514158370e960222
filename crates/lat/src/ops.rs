//! Arithmetic operator implementations for [`Matrix`].
//!
//! - element-wise `+`, `-`, `+=`, `-=` and unary `-` between matrices of the
//!   same type
//! - scalar `matrix * k`, `k * matrix` and `matrix *= k`
//! - matrix product `lhs * rhs` for a shared element type (see
//!   [`matmul`](crate::linalg::matmul) for mixed element types)
//!
//! The non-mutating binary forms are built on the compound ones, which mutate
//! the left operand in place.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use crate::linalg::matmul;
use crate::matrix::Matrix;

impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, &rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += rhs;
        }
    }
}

impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, &rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs -= rhs;
        }
    }
}

impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: AddAssign + Copy,
{
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: SubAssign + Copy,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, scalar: T) {
        for x in self.iter_mut() {
            *x *= scalar;
        }
    }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: MulAssign + Copy,
{
    type Output = Self;

    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

// Does not overlap with `Mul<T>` above: `T` would have to contain itself.
impl<T, const N: usize, const M: usize, const K: usize> Mul<Matrix<T, M, K>> for Matrix<T, N, M>
where
    T: Mul<Output = T> + Zero + Copy,
{
    type Output = Matrix<T, N, K>;

    #[inline]
    fn mul(self, rhs: Matrix<T, M, K>) -> Self::Output {
        matmul(&self, &rhs)
    }
}

/// `scalar * matrix` and the 1x1 to scalar conversion for primitive numbers.
///
/// Both need the scalar type in `Self` position, which the orphan rules
/// only allow for concrete types.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                #[inline]
                fn mul(self, matrix: Matrix<$scalar, R, C>) -> Self::Output {
                    matrix * self
                }
            }

            impl From<Matrix<$scalar, 1, 1>> for $scalar {
                #[inline]
                fn from(matrix: Matrix<$scalar, 1, 1>) -> Self {
                    matrix.into_scalar()
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::types::{FMatrix, IColVec, IMatrix, IRowVec};

    #[test]
    fn test_add_sub_elementwise() {
        let a = IMatrix::<2, 2>::from_rows([[1, 2], [3, 4]]);
        let b = IMatrix::<2, 2>::from_rows([[10, 20], [30, 40]]);
        assert_eq!((a + b).into_rows(), [[11, 22], [33, 44]]);
        assert_eq!((b - a).into_rows(), [[9, 18], [27, 36]]);
        assert_eq!((-a).into_rows(), [[-1, -2], [-3, -4]]);
    }

    #[test]
    fn test_compound_assignment_mutates_left_operand() {
        let mut a = IMatrix::<1, 3>::from_rows([[1, 2, 3]]);
        let b = IMatrix::<1, 3>::from_rows([[1, 1, 1]]);
        a += b;
        a += b;
        assert_eq!(a.into_rows(), [[3, 4, 5]]);
        a -= b;
        assert_eq!(a.into_rows(), [[2, 3, 4]]);
        a *= 3;
        assert_eq!(a.into_rows(), [[6, 9, 12]]);
    }

    #[test]
    fn test_scalar_multiplication_commutes() {
        let a = FMatrix::<2, 2>::from_rows([[1.0, -2.0], [0.5, 4.0]]);
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!((a * 2.0).into_rows(), [[2.0, -4.0], [1.0, 8.0]]);
    }

    #[test]
    fn test_matrix_product_operator() {
        let a = IMatrix::<2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = IMatrix::<3, 2>::from_rows([[7, 8], [9, 10], [11, 12]]);
        assert_eq!((a * b).into_rows(), [[58, 64], [139, 154]]);
    }

    #[test]
    fn test_row_times_column_is_scalar() {
        let row = IRowVec::<3>::from_rows([[1, 2, 3]]);
        let column = IColVec::<3>::from_rows([[4], [5], [6]]);
        let dot: i32 = (row * column).into();
        assert_eq!(dot, 32);
    }
}
