//! Angle conversion, trigonometric and hyperbolic functions.

use crate::{
    elementwise::{Broadcast, Components},
    Float, One, Trig,
};

use super::{map, zip};

/// Converts degrees to radians.
pub fn radians<C>(degrees: C) -> C
where
    C: Components,
    C::Scalar: Float,
{
    let scale = <C::Scalar as Float>::PI / <C::Scalar as Float>::from_f64(180.0);
    map(degrees, |d| d * scale)
}

/// Converts radians to degrees.
pub fn degrees<C>(radians: C) -> C
where
    C: Components,
    C::Scalar: Float,
{
    let scale = <C::Scalar as Float>::from_f64(180.0) / <C::Scalar as Float>::PI;
    map(radians, |r| r * scale)
}

lift_unary! {
    sin: Float => Trig::sin;
    cos: Float => Trig::cos;
    tan: Float => Trig::tan;
    /// Arc sine. Returns values in `[-π/2, π/2]`, NaN outside of `[-1, 1]`.
    asin: Float => Trig::asin;
    /// Arc cosine. Returns values in `[0, π]`, NaN outside of `[-1, 1]`.
    acos: Float => Trig::acos;
    /// Arc tangent. Returns values in `[-π/2, π/2]`.
    atan: Float => Trig::atan;

    sinh: Float => Trig::sinh;
    cosh: Float => Trig::cosh;
    tanh: Float => Trig::tanh;
    asinh: Float => Trig::asinh;
    /// Inverse hyperbolic cosine. NaN for inputs below 1.
    acosh: Float => Trig::acosh;
    /// Inverse hyperbolic tangent. Infinite at `±1`, NaN beyond.
    atanh: Float => Trig::atanh;

    /// Secant, `1 / cos(x)`.
    sec: Float => |x| <C::Scalar as One>::ONE / x.cos();
    /// Cosecant, `1 / sin(x)`.
    csc: Float => |x| <C::Scalar as One>::ONE / x.sin();
    /// Cotangent, `1 / tan(x)`.
    cot: Float => |x| <C::Scalar as One>::ONE / x.tan();
    asec: Float => |x| (<C::Scalar as One>::ONE / x).acos();
    acsc: Float => |x| (<C::Scalar as One>::ONE / x).asin();
    acot: Float => |x| (<C::Scalar as One>::ONE / x).atan();

    sech: Float => |x| <C::Scalar as One>::ONE / x.cosh();
    csch: Float => |x| <C::Scalar as One>::ONE / x.sinh();
    coth: Float => |x| <C::Scalar as One>::ONE / x.tanh();
    asech: Float => |x| (<C::Scalar as One>::ONE / x).acosh();
    acsch: Float => |x| (<C::Scalar as One>::ONE / x).asinh();
    acoth: Float => |x| (<C::Scalar as One>::ONE / x).atanh();
}

/// Arc tangent of `y / x`, using the signs of both to determine the quadrant.
///
/// Returns values in `[-π, π]`.
pub fn atan2<C>(y: C, x: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: Float,
{
    zip(y, x, Trig::atan2)
}
