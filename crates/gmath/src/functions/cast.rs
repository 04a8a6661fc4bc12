//! Shape and element type conversions.

use crate::{Matrix, ScalarCast, Vector, Zero};

/// Converts a vector to dimension `M`, truncating extra elements or filling new ones with zero.
///
/// ```
/// # use gmath::*;
/// # use gmath::functions::vec_resize;
/// assert_eq!(vec_resize::<_, 3, 5>(vec3(1, 2, 3)), [1, 2, 3, 0, 0]);
/// ```
pub fn vec_resize<T, const N: usize, const M: usize>(v: Vector<T, N>) -> Vector<T, M>
where
    T: Zero + Copy,
{
    v.resize()
}

/// Converts every element of a vector to `U`, with the semantics of an `as` cast.
pub fn vec_cast<U, T, const N: usize>(v: Vector<T, N>) -> Vector<U, N>
where
    T: ScalarCast<U>,
{
    v.cast()
}

/// Converts a matrix to `C2` columns and `R2` rows.
///
/// Overlapping elements keep their row and column. New elements are zero, so growing an identity
/// matrix does not yield an identity matrix.
pub fn mat_resize<T, const C: usize, const R: usize, const C2: usize, const R2: usize>(
    m: Matrix<T, C, R>,
) -> Matrix<T, C2, R2>
where
    T: Zero + Copy,
{
    m.resize()
}

/// Converts every element of a matrix to `U`, with the semantics of an `as` cast.
pub fn mat_cast<U, T, const C: usize, const R: usize>(m: Matrix<T, C, R>) -> Matrix<U, C, R>
where
    T: ScalarCast<U>,
{
    m.cast()
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Mat2, Mat3, Vec2};

    use super::*;

    #[test]
    fn vectors() {
        let v = vec3(1.5f32, -2.0, 3.0);
        let grown: Vector<f32, 4> = vec_resize(v);
        assert_eq!(grown, vec4(1.5, -2.0, 3.0, 0.0));
        let back: Vector<f32, 3> = vec_resize(grown);
        assert_eq!(back, v);
        let shrunk: Vec2<f32> = vec_resize(v);
        assert_eq!(shrunk, vec2(1.5, -2.0));

        assert_eq!(vec_cast::<i32, _, 3>(v), vec3(1, -2, 3));
        assert_eq!(vec_cast::<f32, _, 3>(vec_cast::<i32, _, 3>(v)), vec3(1.0, -2.0, 3.0));
        assert_eq!(vec_cast::<u8, _, 2>(vec2(300i32, -1)), vec2(44, 255));
    }

    #[test]
    fn matrices() {
        let m = Mat2::from_rows([[1, 2], [3, 4]]);
        let big: Mat3<i32> = mat_resize(m);
        assert_eq!(big, Mat3::from_rows([[1, 2, 0], [3, 4, 0], [0, 0, 0]]));
        let small: Mat2<i32> = mat_resize(big);
        assert_eq!(small, m);

        let f: Mat2<f64> = mat_cast(m);
        assert_eq!(f, Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(mat_cast::<i32, _, 2, 2>(f * 1.5), Mat2::from_rows([[1, 3], [4, 6]]));
    }
}
