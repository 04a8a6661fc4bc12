//! Exact operator laws for `i32` vectors.
//!
//! Operands are small enough that no law below overflows.

use gmath::{functions::*, Vector};

use crate::{Harness, Sampler};

fn operand<const N: usize>(s: &mut Sampler<'_>) -> Vector<i32, N> {
    s.range(-1000, 1000)
}

pub fn run<const N: usize>(h: &mut Harness) {
    let zero = Vector::<i32, N>::ZERO;

    h.check("a + b == b + a", |s| {
        let [a, b] = [(); 2].map(|_| operand::<N>(s));
        a + b == b + a
    });
    h.check("a + (b + c) == (a + b) + c", |s| {
        let [a, b, c] = [(); 3].map(|_| operand::<N>(s));
        a + (b + c) == (a + b) + c
    });
    h.check("a + 0 == a", |s| {
        let a = operand::<N>(s);
        a + zero == a
    });
    h.check("0 - a == -a", |s| {
        let a = operand::<N>(s);
        zero - a == -a
    });
    h.check("a - b == -(b - a)", |s| {
        let [a, b] = [(); 2].map(|_| operand::<N>(s));
        a - b == -(b - a)
    });
    h.check("a - b - c != a - (b - c)", |s| {
        let [a, b, c] = [(); 3].map(|_| operand::<N>(s));
        // Equal exactly when every component of `c` is zero.
        a - b - c != a - (b - c) || c == zero
    });

    h.check("a * b == b * a", |s| {
        let [a, b] = [(); 2].map(|_| operand::<N>(s));
        a * b == b * a
    });
    h.check("a * (b * c) == (a * b) * c", |s| {
        let [a, b, c] = [(); 3].map(|_| operand::<N>(s));
        a * (b * c) == (a * b) * c
    });
    h.check("a * (x + y) == a * x + a * y", |s| {
        let a = operand::<N>(s);
        let [x, y]: [i32; 2] = [(); 2].map(|_| s.range(-1000, 1000));
        a * (x + y) == a * x + a * y
    });
    h.check("a * 1 == a", |s| {
        let a = operand::<N>(s);
        a * 1 == a
    });
    h.check("a * 0 == 0", |s| {
        let a = operand::<N>(s);
        a * 0 == zero
    });

    h.check("abs(a) == abs(-a)", |s| {
        let a = operand::<N>(s);
        abs(a) == abs(-a)
    });
    h.check("sign(a) * abs(a) == a", |s| {
        let a = operand::<N>(s);
        sign(a) * abs(a) == a
    });
    h.check("min(a, b) + max(a, b) == a + b", |s| {
        let [a, b] = [(); 2].map(|_| operand::<N>(s));
        min(a, b) + max(a, b) == a + b
    });
    h.check("clamp(a, -10, 10) == min(max(a, -10), 10)", |s| {
        let a = operand::<N>(s);
        clamp(a, -10, 10) == min(max(a, -10), 10)
    });

    h.check("less_than(a, b) != greater_than_equal(a, b)", |s| {
        let [a, b] = [(); 2].map(|_| operand::<N>(s));
        all(not_equal(less_than(a, b), greater_than_equal(a, b)))
    });
    h.check("cast(cast(a, f64), i32) == a", |s| {
        let a = operand::<N>(s);
        vec_cast::<i32, f64, N>(vec_cast(a)) == a
    });
    h.check("resize(resize(a, 4), N) == a", |s| {
        let a = operand::<N>(s);
        vec_resize::<i32, 4, N>(vec_resize(a)) == a
    });
}
