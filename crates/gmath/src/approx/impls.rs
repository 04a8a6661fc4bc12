use super::{ApproxEq, ApproxFloat, EpsilonEq, Tolerance};
use crate::{
    elementwise::{all, zip_with},
    Matrix, Quat, Vector,
};

macro_rules! float_impls {
    ($($t:ident),+) => {
        $(
            impl ApproxFloat for $t {
                const EPSILON: Self = $t::EPSILON;

                fn within(self, other: Self, tolerance: &Tolerance<Self>) -> bool {
                    if self == other {
                        return true;
                    }
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }

                    let finite = self.is_finite() && other.is_finite();
                    let diff = (self - other).abs();
                    let abs = finite && tolerance.abs.map_or(false, |abs| diff <= abs);
                    let rel = finite
                        && tolerance
                            .rel
                            .map_or(false, |rel| diff <= self.abs().max(other.abs()) * rel);
                    // Same-signed floats are ordered like their bit patterns.
                    let ulps = tolerance.ulps.map_or(false, |ulps| {
                        self.is_sign_negative() == other.is_sign_negative()
                            && self.to_bits().abs_diff(other.to_bits()) <= ulps.into()
                    });
                    abs || rel || ulps
                }
            }

            impl ApproxEq for $t {
                type Float = Self;

                fn approx_eq(&self, other: &Self, tolerance: &Tolerance<Self>) -> bool {
                    self.within(*other, tolerance)
                }
            }

            impl EpsilonEq for $t {
                fn epsilon_eq(&self, other: &Self, ulp: u32) -> bool {
                    let diff = (self - other).abs();
                    self == other
                        || diff < $t::EPSILON * (self + other).abs() * ulp as $t
                        || diff < $t::MIN_POSITIVE
                }
            }
        )+
    };
}

float_impls!(f32, f64);

macro_rules! exact_impls {
    ($($t:ty),+) => {
        $(
            impl EpsilonEq for $t {
                fn epsilon_eq(&self, other: &Self, _: u32) -> bool {
                    self == other
                }
            }
        )+
    };
}

exact_impls!(bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Float = T::Float;

    fn approx_eq(&self, other: &[U], tolerance: &Tolerance<T::Float>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<Vector<U, N>> for Vector<T, N> {
    type Float = T::Float;

    fn approx_eq(&self, other: &Vector<U, N>, tolerance: &Tolerance<T::Float>) -> bool {
        self.as_slice().approx_eq(other.as_slice(), tolerance)
    }
}

impl<T: ApproxEq, const C: usize, const R: usize> ApproxEq for Matrix<T, C, R> {
    type Float = T::Float;

    fn approx_eq(&self, other: &Self, tolerance: &Tolerance<T::Float>) -> bool {
        self.as_columns().approx_eq(other.as_columns(), tolerance)
    }
}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Float = T::Float;

    fn approx_eq(&self, other: &Self, tolerance: &Tolerance<T::Float>) -> bool {
        self.as_vec().approx_eq(other.as_vec(), tolerance)
    }
}

impl<T: EpsilonEq + Copy, const N: usize> EpsilonEq for Vector<T, N> {
    fn epsilon_eq(&self, other: &Self, ulp: u32) -> bool {
        all(zip_with(|a: T, b: T| a.epsilon_eq(&b, ulp), *self, *other))
    }
}

impl<T: EpsilonEq + Copy, const C: usize, const R: usize> EpsilonEq for Matrix<T, C, R> {
    fn epsilon_eq(&self, other: &Self, ulp: u32) -> bool {
        self.as_columns().epsilon_eq(other.as_columns(), ulp)
    }
}

impl<T: EpsilonEq + Copy> EpsilonEq for Quat<T> {
    fn epsilon_eq(&self, other: &Self, ulp: u32) -> bool {
        self.as_vec().epsilon_eq(other.as_vec(), ulp)
    }
}
