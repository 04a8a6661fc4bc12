//! Trigonometric round trips and Pythagorean identities.
//!
//! Inverse functions are only checked on intervals where they are well conditioned. Near the ends
//! of their domain (`acos` close to 0, `acosh` close to 1) a single rounding step in the forward
//! function moves the result by many ULPs.

use gmath::{functions::*, Vector};

use super::TestFloat;
use crate::Harness;

pub fn run<T: TestFloat, const N: usize>(h: &mut Harness) {
    let one = Vector::<T, N>::splat(T::ONE);

    h.check("degrees(radians(x)) == x", |s| {
        let x: Vector<T, N> = s.between(-360.0, 360.0);
        s.eq(&degrees(radians(x)), &x)
    });

    h.check("sin²(x) + cos²(x) == 1", |s| {
        let x: Vector<T, N> = s.between(-4.0, 4.0);
        s.eq(&(sin(x) * sin(x) + cos(x) * cos(x)), &one)
    });
    h.check("tan(x) == sin(x) / cos(x)", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&tan(x), &(sin(x) / cos(x)))
    });
    h.check("1 / tan(x) == cos(x) / sin(x)", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&(one / tan(x)), &(cos(x) / sin(x)))
    });
    h.check("1 + tan²(x) == sec²(x)", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&(tan(x) * tan(x) + T::ONE), &(sec(x) * sec(x)))
    });
    h.check("1 + cot²(x) == csc²(x)", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&(cot(x) * cot(x) + T::ONE), &(csc(x) * csc(x)))
    });

    h.check("asin(sin(x)) == x", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&asin(sin(x)), &x)
    });
    h.check("acos(cos(x)) == x", |s| {
        let x: Vector<T, N> = s.between(0.5, 2.5);
        s.eq(&acos(cos(x)), &x)
    });
    h.check("atan(tan(x)) == x", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&atan(tan(x)), &x)
    });
    h.check("atan2(sin(x), cos(x)) == x", |s| {
        let x: Vector<T, N> = s.between(0.5, 3.0);
        s.eq(&atan2(sin(x), cos(x)), &x)
    });

    h.check("asinh(sinh(x)) == x", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&asinh(sinh(x)), &x)
    });
    h.check("acosh(cosh(x)) == x", |s| {
        let x: Vector<T, N> = s.between(0.5, 2.0);
        s.eq(&acosh(cosh(x)), &x)
    });
    h.check("atanh(tanh(x)) == x", |s| {
        let x: Vector<T, N> = s.signed();
        s.eq(&atanh(tanh(x)), &x)
    });
    h.check("cosh²(x) - sinh²(x) == 1", |s| {
        let x: Vector<T, N> = s.between(-0.5, 0.5);
        s.eq(&(cosh(x) * cosh(x) - sinh(x) * sinh(x)), &one)
    });
}
