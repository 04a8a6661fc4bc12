use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Matrix;
use crate::{elementwise::zip_with, traits::Number, Scalar, Vector};

/// Column access: `mat[col]` is the column vector with index `col`.
impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    #[track_caller]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

/// Element access: `mat[(row, col)]`.
impl<T, const C: usize, const R: usize> Index<(usize, usize)> for Matrix<T, C, R> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<(usize, usize)> for Matrix<T, C, R> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

impl<T: PartialEq, const C: usize, const R: usize> PartialEq for Matrix<T, C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const C: usize, const R: usize> Eq for Matrix<T, C, R> {}

/// Matrix * Column Vector.
///
/// The result is the linear combination of the columns, weighted by the vector's elements.
impl<T: Number, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        (0..C).fold(Vector::ZERO, |acc, col| {
            zip_with(|sum: T, elem: T| sum + elem * rhs[col], acc, self.0[col])
        })
    }
}

/// Row Vector * Matrix.
impl<T: Number, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, C, R>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.0[col]))
    }
}

/// Matrix * Matrix.
impl<T: Number, const C: usize, const R: usize, const K: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, C, R>
{
    type Output = Matrix<T, K, R>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        Matrix(rhs.0.map(|column| self * column))
    }
}

impl<T: Number, const N: usize> MulAssign for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T, const C: usize, const R: usize> Add for Matrix<T, C, R>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Matrix(self.0 + rhs.0)
    }
}

impl<T, const C: usize, const R: usize> Sub for Matrix<T, C, R>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Matrix(self.0 - rhs.0)
    }
}

impl<T, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T: AddAssign, const C: usize, const R: usize> AddAssign for Matrix<T, C, R> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: SubAssign, const C: usize, const R: usize> SubAssign for Matrix<T, C, R> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Matrix * Scalar.
impl<T, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R>
where
    T: Mul<Output = T> + Scalar,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix / Scalar.
impl<T, const C: usize, const R: usize> Div<T> for Matrix<T, C, R>
where
    T: Div<Output = T> + Scalar,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R>
where
    T: MulAssign + Scalar,
{
    fn mul_assign(&mut self, rhs: T) {
        for column in self.0.as_mut_slice() {
            *column *= rhs;
        }
    }
}

impl<T, const C: usize, const R: usize> DivAssign<T> for Matrix<T, C, R>
where
    T: DivAssign + Scalar,
{
    fn div_assign(&mut self, rhs: T) {
        for column in self.0.as_mut_slice() {
            *column /= rhs;
        }
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            /// Scalar * Matrix.
            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}

scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, Mat2, Matrix};

    #[test]
    fn product_of_non_square() {
        let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::from_rows([[1, 0], [0, 1], [1, 1]]);
        assert_eq!(a * b, Mat2::from_rows([[4, 5], [10, 11]]));
        assert_eq!((a * b) * vec2(1, -1), vec2(-1, -1));
        assert_eq!(vec2(1, 1) * a, crate::vec3(5, 7, 9));
    }

    #[test]
    fn sum_and_difference() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::from_rows([[4, 3], [2, 1]]);
        assert_eq!(a + b, Mat2::splat_diagonal(5) + Mat2::from_rows([[0, 5], [5, 0]]));
        assert_eq!(a - b, Mat2::from_rows([[-3, -1], [1, 3]]));
        assert_eq!(-(a - b), b - a);

        let mut c = a;
        c *= Mat2::identity();
        assert_eq!(c, a);
    }
}
