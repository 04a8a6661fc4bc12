use std::fmt;

use itertools::Itertools;

use crate::{
    elementwise::{zip_with, Broadcast, Components},
    Float, Number, One, Scalar, ScalarCast, Vector, Zero,
};

mod ops;
mod transform;
mod view;

pub use view::{Row, RowMut};

// Square matrices.
pub type Mat1<T> = Matrix<T, 1, 1>;
pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;

pub type Mat1f = Mat1<f32>;
pub type Mat2f = Mat2<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;

/// GLSL `mat2x3`: 2 columns, 3 rows.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
pub type Mat2x4<T> = Matrix<T, 2, 4>;
pub type Mat3x2<T> = Matrix<T, 3, 2>;
pub type Mat3x4<T> = Matrix<T, 3, 4>;
pub type Mat4x2<T> = Matrix<T, 4, 2>;
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `C` columns, `R` rows, and element type `T`.
///
/// The matrix is stored as `C` column vectors of length `R`, contiguously and without padding. The
/// dimension order and the `MatCxR` aliases follow GLSL: a [`Mat2x3`] has 2 columns and 3 rows.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays or vectors.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] and [`Matrix::splat_diagonal`] create square matrices that are zero
///   outside of their diagonal. [`Matrix::identity`] is the special case with ones on the diagonal.
/// - [`Matrix::ZERO`] has every element set to 0.
/// - Transforms: [`Matrix::rotation_clockwise`], [`Matrix::rotation_x`], [`Matrix::translation`],
///   [`Matrix::look_at`], [`Matrix::perspective`] and friends.
///
/// # Element Access
///
/// - `mat[c]` and [`Matrix::column`] return the column with index `c` as a `&Vector`. Writing
///   through `&mut mat[c]` or [`Matrix::column_mut`] modifies the matrix.
/// - [`Matrix::row`] and [`Matrix::row_mut`] return a [`Row`] or [`RowMut`] view that borrows the
///   matrix.
/// - `mat[(row, col)]` addresses a single element, with the row first as in mathematical notation.
///
/// ```
/// # use gmath::*;
/// let mut m = Mat2::from_rows([[5, 6], [7, 8]]);
/// assert_eq!(m[1], vec2(6, 8));
/// m[(1, 0)] = -7;
/// m[0][0] = -5;
/// assert_eq!(m.row(1).to_vector(), vec2(-7, 8));
/// assert_eq!(m[0], vec2(-5, -7));
/// ```
///
/// Indexing out of bounds panics. [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s
/// instead:
///
/// ```
/// # use gmath::*;
/// let row: Matrix<i32, 2, 1> = Matrix::from_columns([[9], [10]]);
/// assert_eq!(row.get(0, 1), Some(&10));
/// assert_eq!(row.get(1, 0), None);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize>(Vector<Vector<T, R>, C>);

unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable
    for Matrix<T, C, R>
{
}
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

impl<T: Zero, const C: usize, const R: usize> Matrix<T, C, R> {
    pub const ZERO: Self = Self(Vector::ZERO);
}

impl<T: Zero, const C: usize, const R: usize> Zero for Matrix<T, C, R> {
    const ZERO: Self = Self(Vector::ZERO);
}

impl<T, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Builds a matrix from `C` columns, the storage order.
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat3x2::from_columns([vec2(1, 4), vec2(2, 5), vec2(3, 6)]);
    /// assert_eq!(m, Mat3x2::from_rows([[1, 2, 3], [4, 5, 6]]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(Vector::from(columns.map(Into::into)))
    }

    /// Builds a matrix from `R` rows, which reads like the written-out matrix.
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, R, C>::from_columns(rows).transpose()
    }

    /// Element `(row, col)` is `f(row, col)`. Calls happen column by column.
    ///
    /// ```
    /// # use gmath::*;
    /// let hilbert: Mat2<f64> = Matrix::from_fn(|r, c| 1.0 / (r + c + 1) as f64);
    /// assert_eq!(hilbert.row(1).to_vector(), vec2(0.5, 1.0 / 3.0));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(Vector::from_fn(|col| Vector::from_fn(|row| f(row, col))))
    }

    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Mirrors the matrix along its diagonal, turning a `CxR` matrix into an `RxC` one.
    ///
    /// ```
    /// # use gmath::*;
    /// let wide = Mat4x2::from_rows([[1, 2, 3, 4], [5, 6, 7, 8]]);
    /// assert_eq!(wide.transpose()[1], vec4(5, 6, 7, 8));
    /// ```
    pub fn transpose(self) -> Matrix<T, R, C>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the column with index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn column(&self, col: usize) -> &Vector<T, R> {
        &self.0[col]
    }

    /// Returns a mutable reference to the column with index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn column_mut(&mut self, col: usize) -> &mut Vector<T, R> {
        &mut self.0[col]
    }

    /// Returns a view of the row with index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1)[2], 5);
    /// assert_eq!(mat.row(1).to_vector(), vec3(3, 4, 5));
    /// ```
    #[track_caller]
    pub fn row(&self, row: usize) -> Row<'_, T, C, R> {
        Row::new(self, row)
    }

    /// Returns a mutable view of the row with index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mut mat = Mat2::<i32>::identity();
    /// mat.row_mut(0).set(vec2(5, 6));
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [5, 6],
    ///     [0, 1],
    /// ]));
    /// ```
    #[track_caller]
    pub fn row_mut(&mut self, row: usize) -> RowMut<'_, T, C, R> {
        RowMut::new(self, row)
    }

    /// Checked element access. Unlike indexing, never panics.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.as_slice().get(col)?.as_slice().get(row)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.as_mut_slice().get_mut(col)?.as_mut_slice().get_mut(row)
    }

    /// Returns the columns of this matrix as a vector of column vectors.
    #[inline]
    pub fn as_columns(&self) -> &Vector<Vector<T, R>, C> {
        &self.0
    }

    /// Converts this matrix into a vector of column vectors.
    #[inline]
    pub fn into_columns(self) -> Vector<Vector<T, R>, C> {
        self.0
    }

    /// Returns all elements as a flat slice, in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.as_flat_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn as_flat_slice(&self) -> &[T]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(self.0.as_slice())
    }

    /// Converts to a `C2`x`R2` matrix, keeping the top-left block that both sizes share.
    ///
    /// Padding is zero, including on the diagonal, so growing an identity matrix does *not*
    /// produce a larger identity.
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat2::from_rows([[1, 2], [3, 4]]).resize::<3, 3>();
    /// assert_eq!(m.row(2).to_vector(), vec3(0, 0, 0));
    /// assert_eq!(m.resize::<1, 2>(), Matrix::<i32, 1, 2>::from_columns([[1, 3]]));
    /// ```
    pub fn resize<const C2: usize, const R2: usize>(self) -> Matrix<T, C2, R2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            self.get(row, col).copied().unwrap_or(T::ZERO)
        })
    }

    /// Converts each element to `U`, with the semantics of an `as` cast.
    pub fn cast<U>(self) -> Matrix<U, C, R>
    where
        T: ScalarCast<U>,
    {
        self.map(ScalarCast::cast)
    }

    /// Returns the identity matrix.
    ///
    /// The identity matrix has 1 on its diagonal and 0 everywhere else. For non-square matrices,
    /// the diagonal starts in the top left corner.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Mat3f::identity() * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
    /// assert_eq!(Mat3x2::<i32>::identity(), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Multiplies the matrices component by component.
    ///
    /// This is *not* the matrix product, which is available via the `*` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let b = Matrix::from_rows([[5, 6], [7, 8]]);
    /// assert_eq!(a.matrix_comp_mult(b), Matrix::from_rows([[5, 12], [21, 32]]));
    /// ```
    pub fn matrix_comp_mult(self, other: Self) -> Self
    where
        T: Number,
    {
        Matrix(zip_with(|a: Vector<T, R>, b: Vector<T, R>| a * b, self.0, other.0))
    }

    /// Computes the outer product of a column vector and a row vector.
    ///
    /// Element `(i, j)` of the result is `column[i] * row[j]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Matrix::outer_product(vec2(1, 2), vec3(3, 4, 5));
    /// assert_eq!(m, Matrix::from_rows([
    ///     [3, 4, 5],
    ///     [6, 8, 10],
    /// ]));
    /// ```
    pub fn outer_product(column: Vector<T, R>, row: Vector<T, C>) -> Self
    where
        T: Number,
    {
        Matrix(row.map(|r| column.map(|c| c * r)))
    }

    /// Swaps two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize) {
        for column in self.0.as_mut_slice() {
            column.as_mut_slice().swap(a, b);
        }
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Elements `(i, i)`, top left to bottom right.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Scaling matrix: `diag` on the diagonal, zero elsewhere.
    ///
    /// ```
    /// # use gmath::*;
    /// let scale = Mat3::from_diagonal([2, 3, 4]);
    /// assert_eq!(scale * vec3(1, 1, 1), vec3(2, 3, 4));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Creates a square matrix with `value` on its diagonal and zero everywhere else.
    pub fn splat_diagonal(value: T) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_diagonal(Vector::splat(value))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        self.diagonal().fold(T::ZERO, |acc, x| acc + x)
    }

    /// Computes the inverse of this matrix using Gauss-Jordan elimination with partial pivoting.
    ///
    /// Singularity is not detected. Inverting a singular matrix divides by zero and yields
    /// non-finite elements, and near-singular matrices lose precision.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Matrix::from_rows([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    /// assert_approx_eq!(m * m.inverse(), Mat2::identity()).abs(1e-12);
    ///
    /// let singular = Mat2f::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    /// assert!(singular.inverse().as_columns().as_slice().iter().any(|c| !c.x().is_finite()));
    /// ```
    pub fn inverse(self) -> Self
    where
        T: Float,
    {
        let mut m = self;
        let mut inv = Self::identity();
        for k in 0..N {
            let mut pivot = k;
            for row in k + 1..N {
                if m[(row, k)].abs() > m[(pivot, k)].abs() {
                    pivot = row;
                }
            }
            if pivot != k {
                m.swap_rows(pivot, k);
                inv.swap_rows(pivot, k);
            }

            let q = T::ONE / m[(k, k)];
            for col in 0..N {
                m[(k, col)] = m[(k, col)] * q;
                inv[(k, col)] = inv[(k, col)] * q;
            }

            for row in 0..N {
                if row == k {
                    continue;
                }
                let factor = m[(row, k)];
                for col in 0..N {
                    m[(row, col)] = m[(row, col)] - factor * m[(k, col)];
                    inv[(row, col)] = inv[(row, col)] - factor * inv[(k, col)];
                }
            }
        }
        inv
    }
}

/// Square matrices with a closed-form [determinant].
///
/// Implemented for sizes 1x1 to 4x4. The inherent `determinant` method of [`Matrix`] does the same;
/// this trait exists so that generic code (like [`crate::functions::determinant`]) can name it.
///
/// [determinant]: https://en.wikipedia.org/wiki/Determinant
pub trait Determinant {
    type Output;

    fn determinant(&self) -> Self::Output;
}

impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let minor = |col: usize| {
            let (a, b) = match col {
                0 => (1, 2),
                1 => (0, 2),
                _ => (0, 1),
            };
            self[(1, a)] * self[(2, b)] - self[(1, b)] * self[(2, a)]
        };
        self[(0, 0)] * minor(0) - self[(0, 1)] * minor(1) + self[(0, 2)] * minor(2)
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        // Laplace expansion along the first row.
        let minor = |skip: usize| {
            Mat3::from_fn(|row, col| self[(row + 1, if col < skip { col } else { col + 1 })])
                .determinant()
        };
        self[(0, 0)] * minor(0) - self[(0, 1)] * minor(1) + self[(0, 2)] * minor(2)
            - self[(0, 3)] * minor(3)
    }
}

macro_rules! determinant_impls {
    ($($n:literal),+) => {
        $(
            impl<T: Number> Determinant for Matrix<T, $n, $n> {
                type Output = T;

                #[inline]
                fn determinant(&self) -> T {
                    Matrix::<T, $n, $n>::determinant(self)
                }
            }
        )+
    };
}

determinant_impls!(1, 2, 3, 4);

impl<T, const C: usize, const R: usize> Default for Matrix<T, C, R>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: Components, const C: usize, const R: usize> Components for Matrix<T, C, R> {
    type Scalar = T::Scalar;

    fn splat_components(scalar: Self::Scalar) -> Self {
        Matrix(Components::splat_components(scalar))
    }

    fn map_components<F>(self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        Matrix(self.0.map_components(f))
    }

    fn zip_components<F>(self, other: Self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        Matrix(self.0.zip_components(other.0, f))
    }

    fn zip3_components<F>(self, b: Self, c: Self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        Matrix(self.0.zip3_components(b.0, c.0, f))
    }

    fn fold_components<A, F>(self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, Self::Scalar) -> A,
    {
        self.0.fold_components(init, f)
    }
}

impl<S, T, const C: usize, const R: usize> Broadcast<Matrix<T, C, R>> for S
where
    S: Scalar,
    T: Components<Scalar = S>,
{
    #[inline]
    fn broadcast(self) -> Matrix<T, C, R> {
        Matrix::splat_components(self)
    }
}

/// Rows in natural writing order: `[[a, b], [c, d]]`.
///
/// The `#` modifier puts each row on its own line.
impl<T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|row| self.row(row)))
            .finish()
    }
}

/// One bracketed line per row, with columns right-aligned.
///
/// Precision flags are applied to every element.
///
/// ```
/// # use gmath::*;
/// let m = Matrix::from_rows([
///     [1.0, -20.0],
///     [300.0, 4.0],
/// ]);
/// assert_eq!(m.to_string(), "[  1, -20]\n[300,   4]");
/// assert_eq!(format!("{:.1}", Mat2f::identity()), "[1.0, 0.0]\n[0.0, 1.0]");
/// ```
impl<T: fmt::Display, const C: usize, const R: usize> fmt::Display for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .0
            .as_slice()
            .iter()
            .map(|column| {
                column
                    .as_slice()
                    .iter()
                    .map(|elem| match f.precision() {
                        Some(precision) => format!("{elem:.precision$}"),
                        None => elem.to_string(),
                    })
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = cells
            .iter()
            .map(|column| column.iter().map(String::len).max().unwrap_or(0))
            .collect();

        for row in 0..R {
            if row != 0 {
                f.write_str("\n")?;
            }
            let line = (0..C).format_with(", ", |col, g| {
                let width = widths[col];
                g(&format_args!("{:>width$}", cells[col][row]))
            });
            write!(f, "[{line}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, vec2, vec3, vec4, Vec2f};

    use super::*;

    #[test]
    fn rows_versus_columns() {
        let by_rows = Mat2x3::from_rows([[1, -1], [2, -2], [3, -3]]);
        let by_cols = Mat2x3::from_columns([[1, 2, 3], [-1, -2, -3]]);
        assert_eq!(by_rows, by_cols);
        assert_eq!(by_rows.transpose(), Mat3x2::from_rows([[1, 2, 3], [-1, -2, -3]]));
    }

    #[test]
    fn element_access() {
        let mut m = Mat3::<i32>::ZERO;
        m[(2, 0)] = 1;
        *m.column_mut(1) = vec3(4, 5, 6);
        m.row_mut(0)[2] = 9;
        assert_eq!(*m.column(0), vec3(0, 0, 1));
        assert_eq!(m.row(0).to_vector(), vec3(0, 4, 9));
        assert_eq!(m[2], vec3(9, 0, 0));
        assert_eq!(m.get(1, 1), Some(&5));
        assert_eq!(m.get(3, 0), None);
        *m.get_mut(1, 2).unwrap() = -1;
        assert_eq!(m.row(1).to_vector(), vec3(0, 5, -1));
    }

    #[test]
    #[should_panic]
    fn row_past_end() {
        let m = Mat3x2::<u8>::ZERO;
        m.row(2);
    }

    #[test]
    fn square_helpers() {
        let m = Mat3::from_diagonal(vec3(7, 8, 9));
        assert_eq!(m.diagonal(), vec3(7, 8, 9));
        assert_eq!(m.trace(), 24);
        assert_eq!(m[(0, 1)], 0);
        assert_eq!(Mat4::splat_diagonal(2.0), Mat4::identity() + Mat4::identity());
        assert_eq!(Mat2x3::<i32>::identity().row(2).to_vector(), vec2(0, 0));
    }

    #[test]
    fn formatting() {
        let m = Mat2x3::from_rows([[1, 2], [30, 4], [5, -6]]);
        assert_eq!(format!("{m:?}"), "[[1, 2], [30, 4], [5, -6]]");
        assert_eq!(format!("{m:#?}"), "[\n    [1, 2],\n    [30, 4],\n    [5, -6],\n]");
        assert_eq!(m.to_string(), "[ 1,  2]\n[30,  4]\n[ 5, -6]");
        assert_eq!(format!("{:?}", Mat1::<f64>::identity()), "[[1.0]]");
        assert_eq!(Mat2::<u16>::default(), Mat2::ZERO);
    }

    #[test]
    fn resizing() {
        let m = Mat3::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let top_left = m.resize::<2, 2>();
        assert_eq!(top_left, Mat2::from_rows([[1, 2], [4, 5]]));
        assert_eq!(m.resize::<3, 1>().row(0).to_vector(), vec3(1, 2, 3));

        let padded = top_left.resize::<4, 4>();
        assert_eq!(padded.row(1).to_vector(), vec4(4, 5, 0, 0));
        assert_eq!(padded.trace(), 6);

        let halves = m.cast::<f32>() * 0.5;
        assert_eq!(halves.cast::<i32>().row(2).to_vector(), vec3(3, 4, 4));
    }

    #[test]
    fn flat_storage() {
        let m = Mat3x2::from_rows([[1u32, 2, 3], [4, 5, 6]]);
        assert_eq!(m.as_flat_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(bytemuck::bytes_of(&m).len(), 6 * 4);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1::from_diagonal([-3]).determinant(), -3);
        assert_eq!(Mat2::from_rows([[3, 8], [4, 6]]).determinant(), -14);
        for det in [
            Mat1f::identity().determinant(),
            Mat2f::identity().determinant(),
            Mat3f::identity().determinant(),
            Mat4f::identity().determinant(),
        ] {
            assert_eq!(det, 1.0);
        }
        assert_eq!(Mat4::<i64>::ZERO.determinant(), 0);

        let m = Mat3::from_rows([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(m.determinant(), -306);
        assert_eq!(Determinant::determinant(&m.transpose()), -306);

        // Swapping two rows flips the sign.
        let m = Mat4::from_rows([[3, 2, 0, 1], [4, 0, 1, 2], [3, 0, 2, 1], [9, 2, 3, 1]]);
        let mut swapped = m;
        swapped.swap_rows(0, 3);
        assert_eq!(m.determinant(), 24);
        assert_eq!(swapped.determinant(), -24);
    }

    #[test]
    fn inverse() {
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [0.0, 2.0, 1.0],
            [1.0, 0.0, 0.0],
            [3.0, 1.0, 2.0],
        ]);
        assert_approx_eq!(m * m.inverse(), Mat3::identity()).abs(1e-12);
        assert_approx_eq!(m.inverse() * m, Mat3::identity()).abs(1e-12);
        assert_approx_eq!(m.inverse().inverse(), m).abs(1e-12);

        let rot = Mat2f::rotation_clockwise(PI / 3.0);
        assert_approx_eq!(rot.inverse(), rot.transpose()).abs(1e-6);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Mat3f::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        let inv = m.inverse();
        assert!(inv
            .as_columns()
            .fold(false, |acc, col| acc || col.as_slice().iter().any(|e| !e.is_finite())));
    }

    #[test]
    fn outer_and_comp_mult() {
        let outer = Mat2x3::outer_product(vec3(1, -1, 2), vec2(3, 5));
        assert_eq!(outer[1], vec3(5, -5, 10));

        let a = Mat2::from_rows([[2.0, -1.0], [0.5, 3.0]]);
        let b = Mat2::from_rows([[4.0, 4.0], [2.0, 0.0]]);
        assert_eq!(a.matrix_comp_mult(b), Mat2::from_rows([[8.0, -4.0], [1.0, 0.0]]));
    }

    #[test]
    fn products() {
        let m = Mat3x2::from_rows([[1, 0, 2], [0, 3, -1]]);
        assert_eq!(m * vec3(1, 1, 1), vec2(3, 2));
        assert_eq!(vec2(1, 1) * m, vec3(1, 3, 1));

        let n = Mat2x3::from_rows([[1, 1], [0, 2], [4, 0]]);
        let mn: Mat2<i32> = m * n;
        assert_eq!(mn, Mat2::from_rows([[9, 1], [-4, 6]]));
        let nm: Mat3<i32> = n * m;
        assert_eq!(nm.row(2).to_vector(), vec3(4, 0, 8));
        assert_eq!(Mat3x2::<i32>::identity() * Mat3::identity(), Mat3x2::identity());
    }

    #[test]
    fn arithmetic() {
        let m = Mat2x3::from_rows([[1, -1], [2, 0], [0, 5]]);
        assert_eq!(m + m, 2 * m);
        assert_eq!(m - m * 2, -m);
        assert_eq!(m * 6 / 3, m + m);

        let mut acc = m;
        acc *= 4;
        acc -= m;
        acc += m * 2;
        acc /= 5;
        assert_eq!(acc, m);
    }

    #[test]
    fn rotation() {
        assert_eq!(Mat2f::rotation_counterclockwise(0.0), Mat2f::identity());
        let quarter = Mat2f::rotation_counterclockwise(PI / 2.0);
        assert_approx_eq!(quarter * Vec2f::X, Vec2f::Y).abs(1e-6);
        assert_approx_eq!(Mat2f::rotation_clockwise(PI / 2.0) * quarter, Mat2f::identity())
            .abs(1e-6);
    }

    #[test]
    fn nalgebra_cross_check() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            let m: Mat4<f64> = Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
            let n = nalgebra::Matrix4::from_fn(|r, c| m[(r, c)]);

            approx::assert_relative_eq!(
                m.determinant(),
                n.determinant(),
                epsilon = 1e-9,
                max_relative = 1e-9
            );

            if n.determinant().abs() < 1e-3 {
                continue;
            }
            let (Some(expected), inv) = (n.try_inverse(), m.inverse()) else {
                continue;
            };
            for r in 0..4 {
                for c in 0..4 {
                    approx::assert_relative_eq!(
                        inv[(r, c)],
                        expected[(r, c)],
                        epsilon = 1e-6,
                        max_relative = 1e-6
                    );
                }
            }

            let v = vec4(1.0, -2.0, 0.5, 3.0);
            let nv = n * nalgebra::Vector4::new(1.0, -2.0, 0.5, 3.0);
            let mv = m * v;
            for i in 0..4 {
                approx::assert_relative_eq!(mv[i], nv[i], epsilon = 1e-12);
            }
        }
    }
}
