//! Matrix functions.

use crate::{Determinant, Float, Matrix, Number, Vector};

/// Swaps rows and columns.
pub fn transpose<T: Copy, const C: usize, const R: usize>(m: Matrix<T, C, R>) -> Matrix<T, R, C> {
    m.transpose()
}

/// Inverse of a square matrix.
///
/// Singular matrices are not detected and produce non-finite components.
pub fn inverse<T: Float, const N: usize>(m: Matrix<T, N, N>) -> Matrix<T, N, N> {
    m.inverse()
}

/// Determinant of a square matrix of dimension 1 to 4.
pub fn determinant<M: Determinant>(m: M) -> M::Output {
    m.determinant()
}

/// Multiplies `column` by `row`, yielding a matrix with one column per element of `row`.
pub fn outer_product<T: Number, const C: usize, const R: usize>(
    column: Vector<T, R>,
    row: Vector<T, C>,
) -> Matrix<T, C, R> {
    Matrix::outer_product(column, row)
}

/// Component-wise product of two matrices.
///
/// This is unlike `a * b`, which is the linear-algebraic product.
pub fn matrix_comp_mult<T: Number, const C: usize, const R: usize>(
    a: Matrix<T, C, R>,
    b: Matrix<T, C, R>,
) -> Matrix<T, C, R> {
    a.matrix_comp_mult(b)
}
