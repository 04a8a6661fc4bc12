//! Rounding, sign, range and interpolation functions.

use crate::{
    elementwise::{map_with, Broadcast, Components},
    Float, MinMax, One, Signed, Vector, Zero,
};

use super::{map, zip, zip3};

lift_unary! {
    /// Absolute value.
    abs: Signed => Signed::abs;
    /// Returns -1, 0 or 1 depending on the sign of each component.
    ///
    /// Zeros (of either sign) and NaNs are returned unchanged.
    sign: Signed => Signed::sign;
    /// Rounds towards negative infinity.
    floor: Float => Float::floor;
    /// Rounds towards positive infinity.
    ceil: Float => Float::ceil;
    /// Rounds towards zero.
    trunc: Float => Float::trunc;
    /// Rounds to the nearest integer, with ties rounding away from zero.
    round: Float => Float::round;
}

/// Returns the fractional part, `x - floor(x)`.
///
/// The result is always in `[0, 1)` for finite inputs, including negative ones.
///
/// ```
/// # use gmath::*;
/// # use gmath::functions::fract;
/// assert_eq!(fract(vec2(1.25, -0.25)), vec2(0.25, 0.75));
/// ```
pub fn fract<C>(x: C) -> C
where
    C: Components,
    C::Scalar: Float,
{
    map(x, |x| x - x.floor())
}

/// Floored modulo, `x - y * floor(x / y)`.
///
/// Unlike the `%` operator, the result has the sign of `y`.
///
/// ```
/// # use gmath::*;
/// # use gmath::functions::modulo;
/// assert_eq!(modulo(vec2(5.5, -1.0), 2.0), vec2(1.5, 1.0));
/// ```
#[doc(alias = "mod")]
pub fn modulo<C>(x: C, y: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: Float,
{
    zip(x, y, |x, y| x - y * (x / y).floor())
}

/// Component-wise minimum.
pub fn min<C>(x: C, y: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: MinMax,
{
    zip(x, y, MinMax::min)
}

/// Component-wise maximum.
pub fn max<C>(x: C, y: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: MinMax,
{
    zip(x, y, MinMax::max)
}

/// Constrains each component to lie between the matching components of `lower` and `upper`.
pub fn clamp<C>(x: C, lower: impl Broadcast<C>, upper: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: MinMax,
{
    zip3(x, lower, upper, MinMax::clamp)
}

/// Linear interpolation, `x * (1 - a) + y * a`.
///
/// The blend factor `a` is either a scalar or a container with one factor per component.
///
/// ```
/// # use gmath::*;
/// # use gmath::functions::mix;
/// assert_eq!(mix(vec2(0.0, 0.0), vec2(10.0, 20.0), 0.5), vec2(5.0, 10.0));
/// assert_eq!(mix(vec2(0.0, 0.0), vec2(10.0, 20.0), vec2(0.0, 1.0)), vec2(0.0, 20.0));
/// ```
#[doc(alias = "lerp")]
pub fn mix<C>(x: C, y: C, a: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: Float,
{
    zip3(x, y, a, |x, y, a| x * (<C::Scalar as One>::ONE - a) + y * a)
}

/// Returns 0 for components of `x` below `edge`, 1 otherwise.
pub fn step<C>(edge: impl Broadcast<C>, x: C) -> C
where
    C: Components,
    C::Scalar: Float,
{
    zip(x, edge, |x, edge| {
        if x < edge {
            <C::Scalar as Zero>::ZERO
        } else {
            <C::Scalar as One>::ONE
        }
    })
}

/// Hermite interpolation between 0 and 1 as `x` moves from `edge0` to `edge1`.
///
/// ```
/// # use gmath::*;
/// # use gmath::functions::smoothstep;
/// assert_eq!(smoothstep(0.0, 2.0, vec3(-1.0, 1.0, 3.0)), vec3(0.0, 0.5, 1.0));
/// ```
pub fn smoothstep<C>(edge0: impl Broadcast<C>, edge1: impl Broadcast<C>, x: C) -> C
where
    C: Components,
    C::Scalar: Float,
{
    let zero = <C::Scalar as Zero>::ZERO;
    let one = <C::Scalar as One>::ONE;
    let two = one + one;
    let three = two + one;
    zip3(x, edge0, edge1, |x, e0, e1| {
        let t = ((x - e0) / (e1 - e0)).clamp(zero, one);
        t * t * (three - two * t)
    })
}

/// Returns which components are NaN.
#[doc(alias = "isnan")]
pub fn is_nan<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<bool, N> {
    map_with(|x: T| x.is_nan(), x)
}

/// Returns which components are positive or negative infinity.
#[doc(alias = "isinf")]
pub fn is_inf<T: Float, const N: usize>(x: Vector<T, N>) -> Vector<bool, N> {
    map_with(|x: T| x.is_infinite(), x)
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec4};

    use super::*;

    #[test]
    fn sign_and_abs() {
        assert_eq!(abs(vec3(-1.5, 0.0, 2.0)), vec3(1.5, 0.0, 2.0));
        assert_eq!(sign(vec4(-3.0, 0.0, 0.5, -0.0)), vec4(-1.0, 0.0, 1.0, 0.0));
        assert_eq!(sign(vec3(-7, 0, 9)), vec3(-1, 0, 1));
        assert_eq!(sign(vec2(-2.0, 3.0)) * abs(vec2(-2.0, 3.0)), vec2(-2.0, 3.0));
    }

    #[test]
    fn rounding() {
        let x = vec4(-1.5, -0.5, 0.5, 1.7);
        assert_eq!(floor(x), vec4(-2.0, -1.0, 0.0, 1.0));
        assert_eq!(ceil(x), vec4(-1.0, -0.0, 1.0, 2.0));
        assert_eq!(trunc(x), vec4(-1.0, -0.0, 0.0, 1.0));
        assert_eq!(round(x), vec4(-2.0, -1.0, 1.0, 2.0));
        assert_eq!(fract(floor(x)), Vec4::<f64>::ZERO);
    }

    #[test]
    fn modulo_sign_follows_divisor() {
        assert_eq!(modulo(vec3(7.0, -7.0, 7.0), vec3(3.0, 3.0, -3.0)), vec3(1.0, 2.0, -2.0));
        assert_eq!(modulo(0.75 + 1.0, 1.0), fract(0.75));
    }

    #[test]
    fn ranges() {
        let a = vec3(1, 5, -2);
        let b = vec3(3, 2, -2);
        assert_eq!(min(a, b), vec3(1, 2, -2));
        assert_eq!(max(a, b), vec3(3, 5, -2));
        assert_eq!(min(a, 0), vec3(0, 0, -2));
        assert_eq!(max(a, 0), vec3(1, 5, 0));
        assert_eq!(clamp(vec3(-1.0, 0.5, 2.0), 0.0, 1.0), vec3(0.0, 0.5, 1.0));
        assert_eq!(clamp(a, vec3(2, 0, 0), vec3(4, 4, 4)), vec3(2, 4, 0));
    }

    #[test]
    fn interpolation() {
        let a = vec2(1.0, -1.0);
        assert_eq!(mix(a, a, 0.25), a);
        assert_eq!(mix(a, vec2(3.0, 1.0), 0.5), vec2(2.0, 0.0));
        assert_eq!(step(0.5, vec3(0.0, 0.5, 1.0)), vec3(0.0, 1.0, 1.0));
        assert_eq!(step(vec2(1.0, -1.0), vec2(0.0, 0.0)), vec2(0.0, 1.0));
        assert_eq!(smoothstep(vec2(0.0, 1.0), vec2(4.0, 2.0), vec2(1.0, 1.5)), vec2(0.15625, 0.5));
    }

    #[test]
    fn classification() {
        let x = vec4(f32::NAN, f32::INFINITY, -f32::INFINITY, 1.0);
        assert_eq!(is_nan(x), vec4(true, false, false, false));
        assert_eq!(is_inf(x), vec4(false, true, true, false));
    }
}
