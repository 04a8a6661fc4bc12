use std::{fmt, ops};

/// Primitive types that form the innermost components of every container.
///
/// This is implemented for `bool`, all built-in integer types, [`f32`], and [`f64`]. Scalars are
/// what the elementwise engine broadcasts against containers, and what the [`Components`]
/// recursion bottoms out at.
///
/// [`Components`]: crate::elementwise::Components
pub trait Scalar: Copy + PartialEq + fmt::Debug + 'static {
    /// Returns the bits used to hash this value.
    ///
    /// Values that compare equal produce the same bits: `-0.0` hashes like `0.0`, and all NaNs
    /// share one canonical pattern.
    fn hash_bits(self) -> u64;
}

/// Circular and hyperbolic functions. Angles are in radians.
pub trait Trig {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Angle of the point `(other, self)`, in `[-PI, PI]`.
    fn atan2(self, other: Self) -> Self;
    /// `(sin, cos)`
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Ordering helpers shared by integers and floats.
///
/// The float impls forward to the inherent `min`/`max`, which prefer the non-NaN operand.
///
/// With this trait in scope (for example through `use gmath::*`), `i32::max` and `7.max(3)` are
/// ambiguous with [`Ord::max`] for integers. Name the trait explicitly. Floats are unaffected
/// because their inherent methods take precedence.
///
/// ```
/// use gmath::*;
///
/// assert_eq!(vec3(2, 7, 5).fold(0, Ord::max), 7);
/// assert_eq!(vec3(2, 7, 5).fold(9, <i32 as MinMax>::min), 2);
/// assert_eq!(1.5f32.max(-1.0), 1.5);
/// assert_eq!(Ord::max(7, 3), MinMax::max(7i32, 3));
/// ```
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// `min(max(self, lo), hi)`. No check that `lo <= hi`.
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

/// Types with a sign: signed integers and floats.
pub trait Signed: Sized {
    /// Absolute value.
    fn abs(self) -> Self;

    /// Returns -1, 0 or 1 depending on the sign of `self`.
    ///
    /// Unlike [`f32::signum`], zero maps to zero. NaN stays NaN.
    fn sign(self) -> Self;
}

/// Additive identity. Containers use it for every component.
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity of a scalar, or a container filled with it.
pub trait One {
    const ONE: Self;
}

/// Scalars and containers closed under the four arithmetic operators.
///
/// Unsigned integers qualify, as negation isn't part of the bound.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalars ([`f32`] and [`f64`]).
///
/// This bundles everything the function library needs from an element type.
pub trait Float:
    Number
    + Scalar
    + ops::Neg<Output = Self>
    + PartialOrd
    + MinMax
    + Signed
    + Trig
    + Sqrt
    + fmt::Display
{
    /// Difference between 1.0 and the next larger representable value.
    const EPSILON: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    const PI: Self;
    const INFINITY: Self;
    const NAN: Self;

    /// Converts an `f64` constant, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;

    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn exp_m1(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn ln_1p(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn cbrt(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    fn round(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
}

/// Numeric conversion between primitive scalars, with the semantics of an `as` cast.
///
/// Float to integer conversions saturate, integer to float conversions round to nearest.
pub trait ScalarCast<U>: Scalar {
    fn cast(self) -> U;
}

macro_rules! int_impls {
    ($($t:ty),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl One for $t {
                const ONE: Self = 1;
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $t {
                #[inline]
                fn hash_bits(self) -> u64 {
                    self as u64
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_int_impls {
    ($($t:ty),+) => {
        $(
            impl Signed for $t {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    self.signum()
                }
            }
        )+
    };
}
signed_int_impls!(i8, i16, i32, i64, i128, isize);

impl Scalar for bool {
    #[inline]
    fn hash_bits(self) -> u64 {
        self as u64
    }
}

macro_rules! float_impls {
    ($($t:ident),+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }

            impl One for $t {
                const ONE: Self = 1.0;
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Signed for $t {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    if self > 0.0 {
                        1.0
                    } else if self < 0.0 {
                        -1.0
                    } else {
                        self
                    }
                }
            }

            impl Scalar for $t {
                #[inline]
                fn hash_bits(self) -> u64 {
                    if self == 0.0 {
                        0
                    } else if self.is_nan() {
                        $t::NAN.to_bits() as u64
                    } else {
                        self.to_bits() as u64
                    }
                }
            }

            impl Trig for $t {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn sinh(self) -> Self {
                    self.sinh()
                }

                fn cosh(self) -> Self {
                    self.cosh()
                }

                fn tanh(self) -> Self {
                    self.tanh()
                }

                fn asinh(self) -> Self {
                    self.asinh()
                }

                fn acosh(self) -> Self {
                    self.acosh()
                }

                fn atanh(self) -> Self {
                    self.atanh()
                }
            }

            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $t {
                const EPSILON: Self = $t::EPSILON;
                const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
                const PI: Self = std::$t::consts::PI;
                const INFINITY: Self = $t::INFINITY;
                const NAN: Self = $t::NAN;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn exp(self) -> Self {
                    self.exp()
                }

                fn exp2(self) -> Self {
                    self.exp2()
                }

                fn exp_m1(self) -> Self {
                    self.exp_m1()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn log2(self) -> Self {
                    self.log2()
                }

                fn log10(self) -> Self {
                    self.log10()
                }

                fn ln_1p(self) -> Self {
                    self.ln_1p()
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }

                fn cbrt(self) -> Self {
                    self.cbrt()
                }

                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn trunc(self) -> Self {
                    self.trunc()
                }

                fn round(self) -> Self {
                    self.round()
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                fn is_infinite(self) -> bool {
                    self.is_infinite()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! scalar_casts {
    ($($from:ty),+) => {
        scalar_casts!(@each [$($from),+] [$($from),+]);
    };
    (@each [$($from:ty),+] $to:tt) => {
        $( scalar_casts!(@from $from $to); )+
    };
    (@from $from:ty [$($to:ty),+]) => {
        $(
            impl ScalarCast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
scalar_casts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign() {
        assert_eq!(Signed::sign(-3.5f32), -1.0);
        assert_eq!(Signed::sign(0.0f32), 0.0);
        assert_eq!(Signed::sign(2.0f64), 1.0);
        assert!(Signed::sign(f32::NAN).is_nan());
        assert_eq!(Signed::sign(-7i32), -1);
        assert_eq!(Signed::sign(0i64), 0);
    }

    #[test]
    fn hash_bits_follow_equality() {
        assert_eq!(0.0f32.hash_bits(), (-0.0f32).hash_bits());
        assert_eq!(f64::NAN.hash_bits(), (-f64::NAN).hash_bits());
        assert_ne!(1.0f32.hash_bits(), 2.0f32.hash_bits());
        assert_eq!(true.hash_bits(), 1);
    }

    #[test]
    fn casts() {
        assert_eq!(ScalarCast::<f32>::cast(3i32), 3.0);
        assert_eq!(ScalarCast::<i32>::cast(3.9f64), 3);
        assert_eq!(ScalarCast::<u8>::cast(-1.0f32), 0);
        assert_eq!(ScalarCast::<u8>::cast(300i32), 44);
    }
}
