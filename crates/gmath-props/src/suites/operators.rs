//! Arithmetic operator laws for float vectors.

use gmath::{
    functions::{all, greater_than_equal, less_than, not_equal, vec_cast, vec_resize},
    ScalarCast, Vector,
};

use super::TestFloat;
use crate::Harness;

pub fn run<T: TestFloat, const N: usize>(h: &mut Harness)
where
    f64: ScalarCast<T>,
{
    let zero = Vector::<T, N>::ZERO;
    let one = Vector::<T, N>::splat(T::ONE);

    h.check("a == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&a, &a)
    });
    h.check("a != b", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.ne(&a, &b)
    });

    h.check("a + b == b + a", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&(a + b), &(b + a))
    });
    h.check("a + (b + c) == (a + b) + c", |s| {
        let [a, b, c]: [Vector<T, N>; 3] = [(); 3].map(|_| s.unit());
        s.eq(&(a + (b + c)), &((a + b) + c))
    });
    h.check("a + 0 == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(a + zero), &a)
    });
    h.check("a - 0 == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(a - zero), &a)
    });
    h.check("0 - a == -a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(zero - a), &-a)
    });
    h.check("a - b == -(b - a)", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&(a - b), &-(b - a))
    });
    h.check("-(-a) == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&-(-a), &a)
    });
    h.check("a - b - c != a - (b - c)", |s| {
        let [a, b, c]: [Vector<T, N>; 3] = [(); 3].map(|_| s.signed());
        s.ne(&(a - b - c), &(a - (b - c)))
    });

    h.check("a * b == b * a", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&(a * b), &(b * a))
    });
    h.check("a * (b * c) == (a * b) * c", |s| {
        let [a, b, c]: [Vector<T, N>; 3] = [(); 3].map(|_| s.signed());
        s.eq(&(a * (b * c)), &((a * b) * c))
    });
    h.check("a * (x + y) == a * x + a * y", |s| {
        let a: Vector<T, N> = s.unit();
        let [x, y]: [T; 2] = [(); 2].map(|_| s.unit());
        s.eq(&(a * (x + y)), &(a * x + a * y))
    });
    h.check("a * 1 == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(a * T::ONE), &a)
    });
    h.check("a * 0 == 0", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(a * T::ZERO), &zero)
    });
    h.check("a * -1 * -1 == a", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(a * -T::ONE * -T::ONE), &a)
    });
    h.check("a * (1 / a) == 1", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&(a * (one / a)), &one)
    });

    h.check("(a + b) / c == a / c + b / c", |s| {
        let [a, b, c]: [Vector<T, N>; 3] = [(); 3].map(|_| s.unit());
        s.eq(&((a + b) / c), &(a / c + b / c))
    });
    h.check("a / (b + c) != a / b + a / c", |s| {
        let [a, b, c]: [Vector<T, N>; 3] = [(); 3].map(|_| s.unit());
        s.ne(&(a / (b + c)), &(a / b + a / c))
    });

    h.check("less_than(a, b) != greater_than_equal(a, b)", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        all(not_equal(less_than(a, b), greater_than_equal(a, b)))
    });

    h.check("resize(resize(a, 4), N) == a", |s| {
        let a: Vector<T, N> = s.signed();
        let wide: Vector<T, 4> = vec_resize(a);
        s.eq(&vec_resize::<T, 4, N>(wide), &a)
    });
    h.check("cast(cast(a, f64), T) == a", |s| {
        let a: Vector<T, N> = s.signed();
        let wide: Vector<f64, N> = vec_cast(a);
        s.eq(&vec_cast::<T, f64, N>(wide), &a)
    });
}
