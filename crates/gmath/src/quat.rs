use std::{fmt, ops::Neg};

use crate::{
    elementwise::{Broadcast, Components},
    traits::Number,
    vec3, vec4, Float, Mat3, Mat4, One, Scalar, Sqrt, Trig, Vec3, Vector, Zero,
};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// When the cosine between two rotations is within this distance of 1, they are treated as
/// parallel. [`Quat::slerp`] falls back to linear interpolation in that case.
const PARALLEL_THRESHOLD: f64 = 0.0001;

/// Quaternion `w + xi + yj + zk`, mostly used at unit length to encode a 3D rotation.
///
/// Components are stored in the order `w`, `x`, `y`, `z`, where `w` is the real part and `x`, `y`
/// and `z` are the coefficients of the imaginary units `i`, `j` and `k`.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// let q = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
/// assert_approx_eq!(q * Vec3f::X, Vec3f::Y).abs(1e-6);
/// assert_eq!(Quatf::default(), Quat::IDENTITY);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The rotation by zero radians, `1 + 0i + 0j + 0k`.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO),
    };
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> Quat<T> {
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(w, x, y, z),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] holding `w`, `x`, `y` and `z`.
    #[inline]
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    #[inline]
    pub fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Creates a quaternion from its real part and its imaginary vector part.
    pub fn from_real_imag(real: T, imag: Vec3<T>) -> Self {
        let [x, y, z] = imag.into_array();
        Self::new(real, x, y, z)
    }

    /// Returns the real part `w`.
    #[inline]
    pub fn real(&self) -> T
    where
        T: Copy,
    {
        self.vec[0]
    }

    /// Returns the imaginary part `(x, y, z)` as a vector.
    pub fn imag(&self) -> Vec3<T>
    where
        T: Copy,
    {
        vec3(self.vec[1], self.vec[2], self.vec[3])
    }

    #[inline]
    pub fn w(&self) -> T
    where
        T: Copy,
    {
        self.vec[0]
    }

    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        self.vec[1]
    }

    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        self.vec[2]
    }

    #[inline]
    pub fn z(&self) -> T
    where
        T: Copy,
    {
        self.vec[3]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        &mut self.vec[0]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.vec[1]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.vec[2]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.vec[3]
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion rotating by `radians` around a normalized `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let q = Quat::from_axis_angle(Vec3f::Y, std::f32::consts::PI);
    /// assert_approx_eq!(q * Vec3f::X, -Vec3f::X).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_real_imag(cos, axis.map(|e| e * sin))
    }

    /// Creates a rotation around the direction of `axis`, by an angle equal to its length.
    ///
    /// A zero vector results in [`Quat::IDENTITY`].
    pub fn from_scaled_axis(axis: Vec3<T>) -> Self
    where
        T: Number + Trig + Sqrt,
    {
        let angle = axis.length();
        if angle == T::ZERO {
            Self::IDENTITY
        } else {
            Self::from_axis_angle(axis.map(|e| e / angle), angle)
        }
    }

    /// Creates the shortest rotation that takes the unit vector `from` to the unit vector `to`.
    ///
    /// If the vectors point in opposite directions, the result is a half turn around an arbitrary
    /// axis perpendicular to `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let q = Quat::from_rotation_arc(Vec3f::X, Vec3f::Z);
    /// assert_approx_eq!(q * Vec3f::X, Vec3f::Z).abs(1e-6);
    /// ```
    pub fn from_rotation_arc(from: Vec3<T>, to: Vec3<T>) -> Self
    where
        T: Float,
    {
        let eps = T::from_f64(PARALLEL_THRESHOLD);
        let cos = from.dot(to);
        if cos >= T::ONE - eps {
            return Self::IDENTITY;
        }
        if cos < eps - T::ONE {
            let mut axis = Vec3::Z.cross(from);
            if axis.length2() < eps {
                axis = Vec3::X.cross(from);
            }
            return Self::from_axis_angle(axis.normalize(), T::PI);
        }

        let s = ((T::ONE + cos) * (T::ONE + T::ONE)).sqrt();
        Self::from_real_imag(s * Self::one_half(), from.cross(to) / s)
    }

    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::new(cos, sin, T::ZERO, T::ZERO)
    }

    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::new(cos, T::ZERO, sin, T::ZERO)
    }

    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::new(cos, T::ZERO, T::ZERO, sin)
    }

    /// Creates a quaternion that rotates around the X, Y, and Z axis, in sequence.
    ///
    /// The X rotation is applied first, so this is `from_rotation_z(z) * from_rotation_y(y) *
    /// from_rotation_x(x)`.
    #[doc(alias = "from_rotation_xyz")]
    pub fn from_euler(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_z(z) * Self::from_rotation_y(y) * Self::from_rotation_x(x)
    }

    /// Computes the dot product of the quaternions, treated as 4-dimensional vectors.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// `w² + x² + y² + z²`.
    ///
    /// Rotations are only represented by quaternions of length one. [`Quat::to_mat3`] and
    /// [`Quat::slerp`] assume unit length and produce skewed results otherwise.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Euclidean norm of the four components.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Rescales to unit length. The zero quaternion turns into NaNs.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Negates the imaginary part.
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T> + Copy,
    {
        Self::new(self.w(), -self.x(), -self.y(), -self.z())
    }

    /// Returns the multiplicative inverse, the conjugate divided by the squared length.
    ///
    /// The zero quaternion has no inverse and yields non-finite components.
    pub fn inverse(self) -> Self
    where
        T: Number + Neg<Output = T>,
    {
        let length2 = self.length2();
        Self {
            vec: self.conjugate().vec.map(|e| e / length2),
        }
    }

    /// Quaternion exponential.
    pub fn exp(self) -> Self
    where
        T: Float,
    {
        let imag = self.imag();
        let angle = imag.length();
        let scale = self.w().exp();
        if angle == T::ZERO {
            return Self::from_real_imag(scale, Vector::ZERO);
        }

        let (sin, cos) = angle.sin_cos();
        Self::from_real_imag(cos * scale, imag * (sin * scale / angle))
    }

    /// Quaternion natural logarithm.
    ///
    /// For a quaternion without imaginary part the result is real as well, so the logarithm of a
    /// negative real number loses its `π` term.
    pub fn log(self) -> Self
    where
        T: Float,
    {
        let imag = self.imag();
        let imag_len = imag.length();
        let len = self.length();
        if imag_len == T::ZERO {
            return Self::from_real_imag(len.ln(), Vector::ZERO);
        }

        let angle = (self.w() / len).clamp(-T::ONE, T::ONE).acos();
        Self::from_real_imag(len.ln(), imag * (angle / imag_len))
    }

    /// Raises this quaternion to a real power.
    ///
    /// For unit quaternions, this scales the rotation angle by `exponent`.
    pub fn pow(self, exponent: T) -> Self
    where
        T: Float,
    {
        (self.log() * exponent).exp()
    }

    /// Linearly interpolates between `self` and `other` component by component.
    ///
    /// The result is not normalized.
    #[doc(alias = "mix")]
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number + Scalar,
    {
        self * (T::ONE - t) + other * t
    }

    /// Spherical linear interpolation along the shorter arc between two unit quaternions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gmath::*;
    /// let a = Quatf::IDENTITY;
    /// let b = Quat::from_rotation_z(1.0);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quat::from_rotation_z(0.5)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Float,
    {
        let mut other = other;
        let mut cos = self.dot(other);
        if cos < T::ZERO {
            other = -other;
            cos = -cos;
        }

        if cos > T::ONE - T::from_f64(PARALLEL_THRESHOLD) {
            return self.lerp(other, t);
        }

        let angle = cos.acos();
        (self * ((T::ONE - t) * angle).sin() + other * (t * angle).sin()) / angle.sin()
    }

    /// Converts this unit quaternion to a 3x3 rotation matrix.
    pub fn to_mat3(self) -> Mat3<T>
    where
        T: Number,
    {
        let [w, x, y, z] = self.vec.into_array();
        let two = T::ONE + T::ONE;
        let l = T::ONE;

        #[rustfmt::skip]
        let mat = Mat3::from_rows([
            [l - two * (y * y + z * z), two * (x * y - w * z),     two * (x * z + w * y)],
            [two * (x * y + w * z),     l - two * (x * x + z * z), two * (y * z - w * x)],
            [two * (x * z - w * y),     two * (y * z + w * x),     l - two * (x * x + y * y)],
        ]);
        mat
    }

    /// Converts this unit quaternion to a 4x4 homogeneous rotation matrix.
    pub fn to_mat4(self) -> Mat4<T>
    where
        T: Number,
    {
        let mut mat = self.to_mat3().resize::<4, 4>();
        mat[(3, 3)] = T::ONE;
        mat
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(quat: Quat<T>) -> Self {
        quat.vec
    }
}

impl<T: Scalar> Components for Quat<T> {
    type Scalar = T;

    fn splat_components(scalar: T) -> Self {
        Self::from_vec(Vector::splat(scalar))
    }

    fn map_components<F>(self, f: &mut F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self::from_vec(self.vec.map_components(f))
    }

    fn zip_components<F>(self, other: Self, f: &mut F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self::from_vec(self.vec.zip_components(other.vec, f))
    }

    fn zip3_components<F>(self, b: Self, c: Self, f: &mut F) -> Self
    where
        F: FnMut(T, T, T) -> T,
    {
        Self::from_vec(self.vec.zip3_components(b.vec, c.vec, f))
    }

    fn fold_components<A, F>(self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.vec.fold_components(init, f)
    }
}

impl<S: Scalar> Broadcast<Quat<S>> for S {
    #[inline]
    fn broadcast(self) -> Quat<S> {
        Quat::splat_components(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.vec[0])
            .field("x", &self.vec[1])
            .field("y", &self.vec[2])
            .field("z", &self.vec[3])
            .finish()
    }
}

/// Formats the quaternion as `(w + xi + yj + zk)`.
impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.vec[0].fmt(f)?;
        f.write_str(" + ")?;
        self.vec[1].fmt(f)?;
        f.write_str("i + ")?;
        self.vec[2].fmt(f)?;
        f.write_str("j + ")?;
        self.vec[3].fmt(f)?;
        f.write_str("k)")
    }
}
