//! Powers, exponentials, logarithms and roots.

use crate::{
    elementwise::{Broadcast, Components},
    Float, One, Sqrt,
};

use super::zip;

/// Raises `x` to the power `y`.
pub fn pow<C>(x: C, y: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: Float,
{
    zip(x, y, Float::powf)
}

lift_unary! {
    /// `e^x`
    exp: Float => Float::exp;
    /// Natural logarithm.
    log: Float => Float::ln;
    /// `2^x`
    exp2: Float => Float::exp2;
    /// Base-2 logarithm.
    log2: Float => Float::log2;
    /// `e^x - 1`, accurate for small `x`.
    exp_m1: Float => Float::exp_m1;
    /// Base-10 logarithm.
    log10: Float => Float::log10;
    /// `ln(1 + x)`, accurate for small `x`.
    log_1p: Float => Float::ln_1p;
    /// Square root. NaN for negative inputs.
    sqrt: Float => Sqrt::sqrt;
    /// Cube root, defined for negative inputs too.
    cbrt: Float => Float::cbrt;
    /// `1 / sqrt(x)`. Infinite at 0, NaN for negative inputs.
    inversesqrt: Float => |x| <C::Scalar as One>::ONE / x.sqrt();
}
