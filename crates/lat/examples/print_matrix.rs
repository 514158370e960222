//! Walk through the basic matrix operations and print each result.

use lat::prelude::*;

fn print<const R: usize, const C: usize>(matrix: &IMatrix<R, C>) {
    for row in matrix.row_views() {
        for value in row {
            print!("{value} ");
        }
        println!();
    }
}

fn main() {
    let mat = IMatrix::<2, 2>::from_rows([[1, 2], [3, 4]]);
    let id = ISquareMatrix::<2>::IDENTITY;
    println!("mat:");
    print(&mat);

    println!("transpose:");
    print(&mat.transpose());

    println!("id:");
    print(&id);

    let result = mat * id;
    println!("result:");
    print(&result);

    println!("rows:");
    for value in result.at((0, ALL)) {
        print!("{value} ");
    }
    println!();

    println!("columns:");
    for value in result.at((ALL, 1)) {
        print!("{value} ");
    }
    println!();

    let vector = IColVec::<2>::from_rows([[2], [3]]);
    println!("vector:");
    print(&vector);

    let transformed = result * vector;
    println!("transformed:");
    print(&transformed);

    println!("scaled:");
    print(&(transformed * 2));

    let dot: i32 = (transformed.transpose() * transformed).into();
    println!("dot product:");
    println!("{dot}");
}
