//! Geometric functions on vectors.

use crate::{Float, MinMax, Number, Vec3, Vector};

/// Dot product of `a` and `b`.
pub fn dot<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// Cross product of two 3D vectors.
pub fn cross<T: Number>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

/// Euclidean length of `v`.
pub fn length<T: Float, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Distance between the points `a` and `b`.
pub fn distance<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    length(a - b)
}

/// Scales `v` to unit length.
///
/// The zero vector has no direction and normalizes to NaN.
pub fn normalize<T: Float, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

/// Returns `n` if it points away from `nref` as seen along `i`, `-n` otherwise.
///
/// ```
/// # use gmath::*;
/// # use gmath::functions::faceforward;
/// let n = vec3(0.0, 1.0, 0.0);
/// assert_eq!(faceforward(n, vec3(0.0, -1.0, 0.0), n), n);
/// assert_eq!(faceforward(n, vec3(0.0, 1.0, 0.0), n), -n);
/// ```
pub fn faceforward<T: Float, const N: usize>(
    n: Vector<T, N>,
    i: Vector<T, N>,
    nref: Vector<T, N>,
) -> Vector<T, N> {
    if nref.dot(i) < T::ZERO {
        n
    } else {
        -n
    }
}

/// Reflects the incident direction `i` off a surface with normal `n`.
///
/// `n` should be normalized.
pub fn reflect<T: Float, const N: usize>(i: Vector<T, N>, n: Vector<T, N>) -> Vector<T, N> {
    let d = n.dot(i);
    i - n * (d + d)
}

/// Refracts the incident direction `i` through a surface with normal `n`.
///
/// `eta` is the ratio of the indices of refraction. Both `i` and `n` should be normalized. Total
/// internal reflection yields the zero vector.
pub fn refract<T: Float, const N: usize>(
    i: Vector<T, N>,
    n: Vector<T, N>,
    eta: T,
) -> Vector<T, N> {
    let d = n.dot(i);
    let k = T::ONE - eta * eta * (T::ONE - d * d);
    if k < T::ZERO {
        Vector::ZERO
    } else {
        i * eta - n * (eta * d + k.sqrt())
    }
}

/// Projects `a` onto the line spanned by `b`.
pub fn project<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    b * (a.dot(b) / b.dot(b))
}

/// The component of `a` perpendicular to `b`, so that `project(a, b) + reject(a, b) == a`.
pub fn reject<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a - project(a, b)
}

/// Unsigned angle between `a` and `b` in radians, in `[0, π]`.
///
/// The cosine is clamped before taking the arc cosine, so nearly parallel vectors give 0 or π
/// rather than NaN.
pub fn angle<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    let cos = a.dot(b) / (a.length() * b.length());
    MinMax::clamp(cos, -T::ONE, T::ONE).acos()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::{assert_approx_eq, vec2, vec3, Vec2, Vec3};

    use super::*;

    #[test]
    fn products() {
        assert_eq!(dot(vec3(1, 3, -5), vec3(4, -2, -1)), 3);
        assert_eq!(cross(Vec3::<i32>::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0)), Vec3::<f64>::ZERO);

        let (a, b) = (vec3(2.0, -1.0, 0.5), vec3(0.3, 4.0, -2.0));
        let c = cross(a, b);
        assert_approx_eq!(dot(c, a), 0.0).abs(1e-12);
        assert_approx_eq!(dot(c, b), 0.0).abs(1e-12);
    }

    #[test]
    fn lengths() {
        assert_eq!(length(vec2(3.0, 4.0)), 5.0);
        assert_eq!(distance(vec3(1.0, 1.0, 1.0), vec3(1.0, 4.0, 5.0)), 5.0);
        assert_eq!(normalize(vec2(0.0, -2.0)), vec2(0.0, -1.0));
        assert_approx_eq!(length(normalize(vec3(1.0, 2.0, 3.0))), 1.0).abs(1e-12);
        assert!(normalize(Vec3::<f64>::ZERO).x().is_nan());
    }

    #[test]
    fn reflection() {
        let n = vec2(0.0, 1.0);
        assert_eq!(reflect(vec2(1.0, -1.0), n), vec2(1.0, 1.0));
        assert_eq!(reflect(reflect(vec2(0.5, -2.0), n), n), vec2(0.5, -2.0));
    }

    #[test]
    fn refraction() {
        let n = vec2(0.0, 1.0);
        let i = normalize(vec2(1.0, -1.0));
        // Unit ratio passes straight through.
        assert_approx_eq!(refract(i, n, 1.0), i).abs(1e-12);
        // Snell's law: sin(out) = eta * sin(in).
        let out = refract(i, n, 0.5);
        assert_approx_eq!(length(out), 1.0).abs(1e-12);
        assert_approx_eq!(out.x(), 0.5 * i.x()).abs(1e-12);
        // Total internal reflection.
        assert_eq!(refract(i, n, 1.5), Vec2::<f64>::ZERO);
    }

    #[test]
    fn projection() {
        let (a, b) = (vec3(2.0, 3.0, -1.0), vec3(0.0, 2.0, 0.0));
        assert_eq!(project(a, b), vec3(0.0, 3.0, 0.0));
        assert_eq!(reject(a, b), vec3(2.0, 0.0, -1.0));
        assert_eq!(project(a, b) + reject(a, b), a);
    }

    #[test]
    fn angles() {
        assert_approx_eq!(angle(vec2(1.0, 0.0), vec2(0.0, 3.0)), FRAC_PI_2).abs(1e-12);
        assert_approx_eq!(angle(vec2(1.0, 0.0), vec2(2.0, 2.0)), FRAC_PI_4).abs(1e-12);
        assert_eq!(angle(vec3(3.0, 4.0, 0.0), vec3(6.0, 8.0, 0.0)), 0.0);
        assert_eq!(angle(vec3(3.0, 4.0, 0.0), vec3(-6.0, -8.0, 0.0)), PI);
    }
}
