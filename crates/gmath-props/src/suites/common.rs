//! Laws of the rounding, sign, range and interpolation functions.

use gmath::{functions::*, Vector};

use super::TestFloat;
use crate::Harness;

pub fn run<T: TestFloat, const N: usize>(h: &mut Harness) {
    let zero = Vector::<T, N>::ZERO;

    h.check("abs(a) == abs(-a)", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&abs(a), &abs(-a))
    });
    h.check("sign(0) == 0", |s| s.eq(&sign(zero), &zero));
    h.check("sign(a) * abs(a) == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(sign(a) * abs(a)), &a)
    });

    h.check("floor(a) <= a", |s| {
        let a: Vector<T, N> = s.between(-10.0, 10.0);
        all(less_than_equal(floor(a), a))
    });
    h.check("ceil(a) >= a", |s| {
        let a: Vector<T, N> = s.between(-10.0, 10.0);
        all(greater_than_equal(ceil(a), a))
    });
    h.check("ceil(a) == -floor(-a)", |s| {
        let a: Vector<T, N> = s.between(-10.0, 10.0);
        s.eq(&ceil(a), &-floor(-a))
    });
    h.check("fract(floor(a)) == 0", |s| {
        let a: Vector<T, N> = s.between(-10.0, 10.0);
        s.eq(&fract(floor(a)), &zero)
    });
    h.check("mod(x + 1, 1) == fract(x)", |s| {
        let x: Vector<T, N> = s.between(0.5, 1.0);
        s.eq(&modulo(x + T::ONE, T::ONE), &fract(x))
    });
    h.check("mod(a, x) == mod(a, splat(x))", |s| {
        let a: Vector<T, N> = s.between(-10.0, 10.0);
        let x: T = s.between(0.5, 2.0);
        s.eq(&modulo(a, x), &modulo(a, Vector::splat(x)))
    });

    h.check("min(a, b) <= a, b", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        let m = min(a, b);
        all(less_than_equal(m, a)) && all(less_than_equal(m, b))
    });
    h.check("max(a, b) >= a, b", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        let m = max(a, b);
        all(greater_than_equal(m, a)) && all(greater_than_equal(m, b))
    });
    h.check("min(a, b) + max(a, b) == a + b", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&(min(a, b) + max(a, b)), &(a + b))
    });
    h.check("min(a, x) == min(a, splat(x))", |s| {
        let a: Vector<T, N> = s.signed();
        let x: T = s.signed();
        s.eq(&min(a, x), &min(a, Vector::splat(x)))
    });
    h.check("max(a, x) == max(a, splat(x))", |s| {
        let a: Vector<T, N> = s.signed();
        let x: T = s.signed();
        s.eq(&max(a, x), &max(a, Vector::splat(x)))
    });
    h.check("lo <= clamp(a, lo, hi) <= hi", |s| {
        let a: Vector<T, N> = s.between(-2.0, 2.0);
        let lo: Vector<T, N> = s.between(-1.0, 0.0);
        let hi: Vector<T, N> = s.unit();
        let c = clamp(a, lo, hi);
        all(less_than_equal(lo, c)) && all(less_than_equal(c, hi))
    });

    h.check("mix(a, a, t) == a", |s| {
        let a: Vector<T, N> = s.signed();
        let t: T = s.unit();
        s.eq(&mix(a, a, t), &a)
    });
    // Operands are non-negative so the sum cannot cancel.
    h.check("mix(a, b, t) + mix(b, a, t) == a + b", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.unit());
        let t: T = s.unit();
        s.eq(&(mix(a, b, t) + mix(b, a, t)), &(a + b))
    });
    h.check("mix(a, b, t) == mix(a, b, splat(t))", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        let t: T = s.unit();
        s.eq(&mix(a, b, t), &mix(a, b, Vector::splat(t)))
    });
    h.check("smoothstep(0, 1, t) == t² (3 - 2t)", |s| {
        let t: Vector<T, N> = s.unit();
        let two = T::ONE + T::ONE;
        let expected = t * t * (Vector::splat(two + T::ONE) - t * two);
        s.eq(&smoothstep(T::ZERO, T::ONE, t), &expected)
    });
}
