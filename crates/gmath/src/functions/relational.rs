//! Component-wise comparisons producing boolean vectors.

use crate::{
    elementwise::{map_with, op, zip_with},
    Vector,
};

pub use crate::elementwise::{all, any};

/// `a < b` for every component.
pub fn less_than<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N>
where
    T: PartialOrd + Copy,
{
    zip_with(op::Less, a, b)
}

/// `a <= b` for every component.
pub fn less_than_equal<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N>
where
    T: PartialOrd + Copy,
{
    zip_with(op::LessEqual, a, b)
}

/// `a > b` for every component.
pub fn greater_than<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N>
where
    T: PartialOrd + Copy,
{
    zip_with(op::Greater, a, b)
}

/// `a >= b` for every component.
#[doc(alias = "greater_than_or_equal")]
pub fn greater_than_equal<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N>
where
    T: PartialOrd + Copy,
{
    zip_with(op::GreaterEqual, a, b)
}

/// `a == b` for every component.
///
/// This is exact comparison. Use [`assert_approx_eq!`](crate::assert_approx_eq) or
/// [`ApproxEq`](crate::approx::ApproxEq) for tolerance-based float comparisons.
pub fn equal<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N>
where
    T: PartialEq + Copy,
{
    zip_with(op::Equal, a, b)
}

/// `a != b` for every component.
pub fn not_equal<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N>
where
    T: PartialEq + Copy,
{
    zip_with(op::NotEqual, a, b)
}

/// Logical complement of every component.
pub fn not<const N: usize>(v: Vector<bool, N>) -> Vector<bool, N> {
    map_with(op::Not, v)
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4, Vector};

    use super::*;

    #[test]
    fn comparisons() {
        let a = vec4(1, 2, 3, 4);
        let b = vec4(4, 2, 1, 5);
        assert_eq!(less_than(a, b), vec4(true, false, false, true));
        assert_eq!(less_than_equal(a, b), vec4(true, true, false, true));
        assert_eq!(greater_than(a, b), vec4(false, false, true, false));
        assert_eq!(greater_than_equal(a, b), vec4(false, true, true, false));
        assert_eq!(equal(a, b), vec4(false, true, false, false));
        assert_eq!(not_equal(a, b), vec4(true, false, true, true));
    }

    #[test]
    fn exactly_one_ordering_holds() {
        let a = vec4(-1.0, 0.0, 2.5, 7.0);
        let b = vec4(0.0, -0.0, 2.5, 3.0);
        let lt = less_than(a, b);
        let eq = equal(a, b);
        let gt = greater_than(a, b);
        for i in 0..4 {
            assert_eq!([lt[i], eq[i], gt[i]].iter().filter(|x| **x).count(), 1);
        }
        assert_eq!(not(greater_than(a, b)), less_than_equal(a, b));
        assert_eq!(not(equal(a, b)), not_equal(a, b));
    }

    #[test]
    fn nan_is_unordered() {
        let a = vec3(f64::NAN, 1.0, 1.0);
        let b = vec3(1.0, f64::NAN, 1.0);
        assert_eq!(less_than(a, b), vec3(false, false, false));
        assert_eq!(greater_than_equal(a, b), vec3(false, false, true));
        assert_eq!(not_equal(a, b), vec3(true, true, false));
        assert_eq!(equal(a, a), vec3(false, true, true));
    }

    #[test]
    fn reductions() {
        assert!(all(vec3(true, true, true)));
        assert!(!all(vec3(true, false, true)));
        assert!(any(vec3(false, false, true)));
        assert!(!any(vec3(false, false, false)));
        assert!(all(Vector::<bool, 0>::from([])));
        assert!(!any(Vector::<bool, 0>::from([])));
        assert_eq!(not(vec3(true, false, true)), vec3(false, true, false));
    }
}
