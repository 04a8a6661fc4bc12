//! Transformation matrices.
//!
//! All 3D transforms use a right-handed coordinate system and produce matrices that multiply
//! column vectors (`mat * vec`). Projection matrices map the view volume to OpenGL clip space,
//! where the depth range is `-1..=1`.

use std::ops::Neg;

use crate::{traits::Number, Float, Matrix, Trig, Vec2, Vec3};

impl<T> Matrix<T, 2, 2>
where
    T: Number + Trig + Neg<Output = T>,
{
    /// Creates a 2D rotation matrix that rotates a vector counterclockwise by `radians`.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [cos, -sin],
            [sin, cos],
        ]);
        mat
    }

    /// Creates a 2D rotation matrix that rotates a vector clockwise by `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let rot = Mat2f::rotation_clockwise(std::f32::consts::FRAC_PI_2);
    /// assert_approx_eq!(rot * Vec2f::Y, Vec2f::X).abs(1e-6);
    /// ```
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }
}

impl<T> Matrix<T, 3, 3>
where
    T: Number + Trig + Neg<Output = T>,
{
    /// Rotation by `radians` around the X axis.
    ///
    /// Looking down the axis towards the origin, the rotation is counterclockwise.
    pub fn rotation_x(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [l, o, o],
            [o, c, -s],
            [o, s, c],
        ]);
        mat
    }

    /// Rotation by `radians` around the Y axis.
    pub fn rotation_y(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [c, o, s],
            [o, l, o],
            [-s, o, c],
        ]);
        mat
    }

    /// Rotation by `radians` around the Z axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let rot = Mat3f::rotation_z(std::f32::consts::FRAC_PI_2);
    /// assert_approx_eq!(rot * Vec3f::X, Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotation_z(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [c, -s, o],
            [s, c, o],
            [o, o, l],
        ]);
        mat
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Creates a 2D translation in homogeneous coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat3::translation2(vec2(5, -1));
    /// assert_eq!(m * vec3(1, 1, 1), vec3(6, 0, 1));
    /// ```
    pub fn translation2(offset: Vec2<T>) -> Self {
        let mut mat = Self::identity();
        mat[2] = offset.extend(T::ONE);
        mat
    }

    /// Creates a 2D scaling transform in homogeneous coordinates.
    pub fn scale2(factors: Vec2<T>) -> Self {
        Self::from_diagonal(factors.extend(T::ONE))
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Creates a 3D translation in homogeneous coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat4::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// // Directions (w = 0) are not affected.
    /// assert_eq!(m * vec4(1.0, 0.0, 0.0, 0.0), vec4(1.0, 0.0, 0.0, 0.0));
    /// ```
    pub fn translation(offset: Vec3<T>) -> Self {
        let mut mat = Self::identity();
        mat[3] = offset.extend(T::ONE);
        mat
    }

    /// Creates a 3D scaling transform in homogeneous coordinates.
    pub fn scale(factors: Vec3<T>) -> Self {
        Self::from_diagonal(factors.extend(T::ONE))
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Creates a shear that adds `factor` times coordinate `src` to coordinate `dst`.
    ///
    /// This is the identity with `factor` stored at row `dst`, column `src`. It works in any
    /// dimension, so homogeneous 2D and 3D shears are the 3x3 and 4x4 cases. With `src == dst`
    /// the result scales that one axis by `factor` instead.
    ///
    /// # Panics
    ///
    /// Panics if `src` or `dst` is not below `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let m = Mat2::shear(1, 0, 2);
    /// assert_eq!(m * vec2(1, 3), vec2(7, 3));
    /// ```
    #[track_caller]
    pub fn shear(src: usize, dst: usize, factor: T) -> Self {
        let mut mat = Self::identity();
        mat[(dst, src)] = factor;
        mat
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a view matrix for a camera at `eye` looking at `center`.
    ///
    /// The camera looks down its negative Z axis, with `up` pointing roughly along its positive Y
    /// axis. `up` must not be parallel to the viewing direction.
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [s.x(), s.y(), s.z(), -s.dot(eye)],
            [u.x(), u.y(), u.z(), -u.dot(eye)],
            [-f.x(), -f.y(), -f.z(), f.dot(eye)],
            [o, o, o, l],
        ]);
        mat
    }

    /// Creates a perspective projection.
    ///
    /// `fovy` is the vertical field of view in radians, `aspect` is the width of the viewport
    /// divided by its height. `near` and `far` are the (positive) distances to the clipping planes.
    pub fn perspective(fovy: T, aspect: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let tan_half = (fovy / two).tan();

        let mut mat = Self::ZERO;
        mat[(0, 0)] = T::ONE / (aspect * tan_half);
        mat[(1, 1)] = T::ONE / tan_half;
        mat[(2, 2)] = -(far + near) / (far - near);
        mat[(3, 2)] = -T::ONE;
        mat[(2, 3)] = -(two * far * near) / (far - near);
        mat
    }

    /// Creates an orthographic projection of the given view box.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;

        let mut mat = Self::identity();
        mat[(0, 0)] = two / (right - left);
        mat[(1, 1)] = two / (top - bottom);
        mat[(2, 2)] = -two / (far - near);
        mat[(0, 3)] = -(right + left) / (right - left);
        mat[(1, 3)] = -(top + bottom) / (top - bottom);
        mat[(2, 3)] = -(far + near) / (far - near);
        mat
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, vec2, vec3, vec4, Mat3, Mat3f, Mat4f, Vec3f, Vec4f};

    #[test]
    fn axis_rotations() {
        assert_approx_eq!(Mat3f::rotation_x(FRAC_PI_2) * Vec3f::Y, Vec3f::Z).abs(1e-6);
        assert_approx_eq!(Mat3f::rotation_y(FRAC_PI_2) * Vec3f::Z, Vec3f::X).abs(1e-6);
        assert_approx_eq!(Mat3f::rotation_z(FRAC_PI_2) * Vec3f::X, Vec3f::Y).abs(1e-6);

        let r = Mat3f::rotation_x(0.3) * Mat3f::rotation_y(-1.2) * Mat3f::rotation_z(2.0);
        assert_approx_eq!(r * r.transpose(), Mat3f::identity()).abs(1e-5);
        assert_approx_eq!(r.determinant(), 1.0).abs(1e-5);
    }

    #[test]
    fn homogeneous_2d() {
        let m = Mat3::translation2(vec2(1.0, 2.0)) * Mat3::scale2(vec2(2.0, 3.0));
        assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(3.0, 5.0, 1.0));
    }

    #[test]
    fn homogeneous_3d() {
        let m = Mat4f::translation(vec3(1.0, 2.0, 3.0)) * Mat4f::scale(vec3(2.0, 2.0, 2.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(3.0, 4.0, 5.0, 1.0));
        assert_eq!(m.inverse() * vec4(3.0, 4.0, 5.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn shears() {
        let xy = Mat3::shear(1, 0, 0.5);
        assert_eq!(xy * vec3(1.0, 4.0, 1.0), vec3(3.0, 4.0, 1.0));
        assert_eq!(xy.determinant(), 1.0);
        assert_eq!(xy.inverse(), Mat3::shear(1, 0, -0.5));

        // Translation is a shear of the homogeneous coordinate.
        let shift = Mat4f::shear(3, 2, -2.0);
        assert_eq!(shift, Mat4f::translation(vec3(0.0, 0.0, -2.0)));
        assert_eq!(Mat3::shear(2, 2, 3), Mat3::from_diagonal(vec3(1, 1, 3)));
    }

    #[test]
    #[should_panic]
    fn shear_axis_out_of_range() {
        Mat3f::shear(0, 3, 1.0);
    }

    #[test]
    fn look_at() {
        let eye = vec3(0.0, 0.0, 5.0);
        let view = Mat4f::look_at(eye, Vec3f::ZERO, Vec3f::Y);
        // The eye maps to the origin, the target lies on the negative Z axis.
        assert_approx_eq!(view * eye.extend(1.0), Vec4f::W).abs(1e-6);
        assert_approx_eq!(view * Vec4f::W, vec4(0.0, 0.0, -5.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn projections() {
        let proj = Mat4f::perspective(FRAC_PI_2, 1.0, 1.0, 10.0);
        let near = proj * vec4(0.0, 0.0, -1.0, 1.0);
        let far = proj * vec4(0.0, 0.0, -10.0, 1.0);
        assert_approx_eq!(near.z() / near.w(), -1.0).abs(1e-6);
        assert_approx_eq!(far.z() / far.w(), 1.0).abs(1e-6);
        let edge = proj * vec4(1.0, 0.0, -1.0, 1.0);
        assert_approx_eq!(edge.x() / edge.w(), 1.0).abs(1e-6);

        let ortho = Mat4f::orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        assert_approx_eq!(ortho * vec4(2.0, 1.0, -10.0, 1.0), vec4(1.0, 1.0, 1.0, 1.0)).abs(1e-6);
        assert_approx_eq!(ortho * vec4(-2.0, -1.0, 0.0, 1.0), vec4(-1.0, -1.0, -1.0, 1.0))
            .abs(1e-6);
    }
}
