//! Property tests for the algebraic laws of matrix operations.
//!
//! Integer matrices are used wherever the law is exact; floating-point
//! matrices are compared with `approx` tolerances.

use approx::assert_abs_diff_eq;
use lat::prelude::*;
use proptest::prelude::*;

/// Strategy producing integer matrices with small entries, so products of
/// up to three matrices cannot overflow.
fn int_matrix<const R: usize, const C: usize>() -> impl Strategy<Value = IMatrix<R, C>> {
    prop::collection::vec(-50i32..50, R * C)
        .prop_map(|values| IMatrix::<R, C>::try_from_slice(&values).unwrap())
}

fn float_matrix<const R: usize, const C: usize>() -> impl Strategy<Value = Matrix<f64, R, C>> {
    prop::collection::vec(-10.0f64..10.0, R * C)
        .prop_map(|values| Matrix::<f64, R, C>::try_from_slice(&values).unwrap())
}

proptest! {
    #[test]
    fn transpose_is_an_involution(a in int_matrix::<2, 3>()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn transpose_swaps_positions(a in int_matrix::<3, 4>()) {
        let t = a.transpose();
        for r in 0..3 {
            for c in 0..4 {
                prop_assert_eq!(t[(c, r)], a[(r, c)]);
            }
        }
    }

    #[test]
    fn product_is_associative(
        a in int_matrix::<2, 3>(),
        b in int_matrix::<3, 4>(),
        c in int_matrix::<4, 2>(),
    ) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn float_product_is_associative_within_tolerance(
        a in float_matrix::<3, 3>(),
        b in float_matrix::<3, 3>(),
        c in float_matrix::<3, 3>(),
    ) {
        assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-6);
    }

    #[test]
    fn identity_is_neutral(a in int_matrix::<3, 3>()) {
        prop_assert_eq!(a * ISquareMatrix::<3>::IDENTITY, a);
        prop_assert_eq!(ISquareMatrix::<3>::IDENTITY * a, a);
        prop_assert_eq!(a * identity::<i32, 3>(), a);
    }

    #[test]
    fn rectangular_identity_laws(a in int_matrix::<2, 4>()) {
        prop_assert_eq!(a * ISquareMatrix::<4>::IDENTITY, a);
        prop_assert_eq!(ISquareMatrix::<2>::IDENTITY * a, a);
    }

    #[test]
    fn addition_commutes(a in int_matrix::<3, 2>(), b in int_matrix::<3, 2>()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn subtraction_undoes_addition(a in int_matrix::<3, 2>(), b in int_matrix::<3, 2>()) {
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!(a - a, IMatrix::<3, 2>::ZERO);
    }

    #[test]
    fn scalar_scales_every_cell(a in int_matrix::<2, 3>(), k in -20i32..20) {
        let scaled = a * k;
        for r in 0..2 {
            for c in 0..3 {
                prop_assert_eq!(scaled[(r, c)], a[(r, c)] * k);
            }
        }
        prop_assert_eq!(k * a, scaled);
    }

    #[test]
    fn row_view_iterates_row_in_order(a in int_matrix::<3, 4>(), r in 0usize..3) {
        let expected: Vec<i32> = (0..4).map(|c| a[(r, c)]).collect();
        let actual: Vec<i32> = a.at((r, ALL)).iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn column_view_iterates_column_in_order(a in int_matrix::<3, 4>(), c in 0usize..4) {
        let expected: Vec<i32> = (0..3).map(|r| a[(r, c)]).collect();
        let expected_reversed: Vec<i32> = expected.iter().rev().copied().collect();
        let actual: Vec<i32> = a.at((ALL, c)).iter().copied().collect();
        prop_assert_eq!(actual, expected);

        let reversed: Vec<i32> = a.at((ALL, c)).iter().rev().copied().collect();
        prop_assert_eq!(reversed, expected_reversed);
    }

    #[test]
    fn view_nth_matches_indexing(a in int_matrix::<4, 3>(), c in 0usize..3, n in 0usize..6) {
        let column = a.column(c);
        prop_assert_eq!(column.iter().nth(n), column.get(n));
        prop_assert_eq!(column.iter().len(), 4);
    }

    #[test]
    fn cell_row_and_column_of_product(a in int_matrix::<2, 3>(), b in int_matrix::<3, 2>()) {
        let product = a * b;
        for r in 0..2 {
            for c in 0..2 {
                prop_assert_eq!(product[(r, c)], a.row(r).dot(&b.column(c)));
            }
        }
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_oracle {
    use super::*;
    use nalgebra::SMatrix;

    proptest! {
        #[test]
        fn product_matches_nalgebra(a in int_matrix::<3, 2>(), b in int_matrix::<2, 4>()) {
            let expected = SMatrix::<i32, 3, 2>::from(a) * SMatrix::<i32, 2, 4>::from(b);
            prop_assert_eq!(Matrix::from(expected), a * b);
        }

        #[test]
        fn transpose_matches_nalgebra(a in int_matrix::<2, 5>()) {
            let expected = SMatrix::<i32, 2, 5>::from(a).transpose();
            prop_assert_eq!(Matrix::from(expected), a.transpose());
        }
    }
}
