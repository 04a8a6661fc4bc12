//! Laws of the geometric vector functions.

use gmath::{functions::*, Vec3, Vector};

use super::TestFloat;
use crate::Harness;

pub fn run<T: TestFloat, const N: usize>(h: &mut Harness) {
    h.check("length(normalize(a)) == 1", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&length(normalize(a)), &T::ONE)
    });
    h.check("length(a) == sqrt(dot(a, a))", |s| {
        let a: Vector<T, N> = s.signed();
        s.eq(&length(a), &sqrt(dot(a, a)))
    });
    h.check("dot(a, b) == dot(b, a)", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&dot(a, b), &dot(b, a))
    });
    h.check("distance(a, b) == distance(b, a)", |s| {
        let [a, b]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&distance(a, b), &distance(b, a))
    });
    h.check("dot(faceforward(n, i, n), i) <= 0", |s| {
        let [n, i]: [Vector<T, N>; 2] = [(); 2].map(|_| s.signed());
        dot(faceforward(n, i, n), i) <= T::ZERO
    });
}

/// Cross product laws, which only exist in 3 dimensions.
pub fn run_cross<T: TestFloat>(h: &mut Harness) {
    h.check("cross(a, b) == -cross(b, a)", |s| {
        let [a, b]: [Vec3<T>; 2] = [(); 2].map(|_| s.signed());
        s.eq(&cross(a, b), &-cross(b, a))
    });
    h.check("cross(a, a) == 0", |s| {
        let a: Vec3<T> = s.signed();
        s.eq(&cross(a, a), &Vec3::ZERO)
    });
}
