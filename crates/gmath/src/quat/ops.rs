use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::{traits::Number, Quat, Scalar, Vec3};

/// The Hamilton product.
///
/// Composes two rotations: `a * b` rotates by `b` first, then by `a`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [lw, lx, ly, lz] = self.into_vec().into_array();
        let [rw, rx, ry, rz] = rhs.into_vec().into_array();

        Quat::new(
            lw * rw - lx * rx - ly * ry - lz * rz,
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry - lx * rz + ly * rw + lz * rx,
            lw * rz + lx * ry - ly * rx + lz * rw,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a 3D vector by computing `q * (0, v) * q⁻¹`.
impl<T> Mul<Vec3<T>> for Quat<T>
where
    T: Number + Neg<Output = T>,
{
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        (self * Quat::from_real_imag(T::ZERO, rhs) * self.inverse()).imag()
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::from_vec(self.into_vec() + rhs.into_vec())
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Quat::from_vec(self.into_vec() - rhs.into_vec())
    }
}

impl<T: Neg<Output = T> + Copy> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::from_vec(-self.into_vec())
    }
}

impl<T: Number + Scalar> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Quat::from_vec(self.into_vec() * rhs)
    }
}

impl<T: Number + Scalar> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Quat::from_vec(self.into_vec() / rhs)
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl Mul<Quat<$t>> for $t {
                type Output = Quat<$t>;

                #[inline]
                fn mul(self, rhs: Quat<$t>) -> Quat<$t> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);
