//! The elementwise operation engine.
//!
//! Every componentwise computation in this crate is expressed through the functions in this module:
//!
//! - [`map_with`], [`zip_with`] and [`zip_with3`] apply an operation lane by lane to one, two or
//!   three operands. Operands are either [`Vector`]s of the same length `N` or bare [`Scalar`]s,
//!   which are broadcast to every lane (see [`Lanes`]). A length mismatch between vector operands
//!   is a type error.
//! - [`fold`], [`all`] and [`any`] reduce a vector to a single value.
//! - The [`Components`] trait recurses structurally through nested containers (vectors of vectors,
//!   matrices, quaternions) down to their scalars. The function library in [`crate::functions`] is
//!   built on it, as are approximate comparison, hashing, and random sampling.
//!
//! Operations are passed as values implementing [`UnaryOp`], [`BinaryOp`] or [`TernaryOp`]. Any
//! closure with a matching signature qualifies, and the [`op`] module provides named operation
//! types for the built-in operators.
//!
//! # Examples
//!
//! ```
//! # use gmath::*;
//! # use gmath::elementwise::{op, zip_with};
//! let sum: Vector<i32, 3> = zip_with(op::Add, vec3(1, 2, 3), vec3(4, 5, 6));
//! assert_eq!(sum, vec3(5, 7, 9));
//!
//! // Scalars broadcast against every lane.
//! let scaled: Vector<i32, 3> = zip_with(|a: i32, b: i32| a * b, vec3(1, 2, 3), 10);
//! assert_eq!(scaled, vec3(10, 20, 30));
//! ```

pub mod op;

use std::ops;

use crate::{One, Scalar, Vector, Zero};

/// An operation taking one operand.
pub trait UnaryOp<A> {
    type Output;

    fn apply(&mut self, a: A) -> Self::Output;
}

/// An operation taking two operands.
pub trait BinaryOp<A, B> {
    type Output;

    fn apply(&mut self, a: A, b: B) -> Self::Output;
}

/// An operation taking three operands.
pub trait TernaryOp<A, B, C> {
    type Output;

    fn apply(&mut self, a: A, b: B, c: C) -> Self::Output;
}

impl<A, R, F> UnaryOp<A> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&mut self, a: A) -> R {
        self(a)
    }
}

impl<A, B, R, F> BinaryOp<A, B> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&mut self, a: A, b: B) -> R {
        self(a, b)
    }
}

impl<A, B, C, R, F> TernaryOp<A, B, C> for F
where
    F: FnMut(A, B, C) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&mut self, a: A, b: B, c: C) -> R {
        self(a, b, c)
    }
}

/// Operands that provide one element per lane of an `N`-lane operation.
///
/// A [`Vector<T, N>`] yields its elements. A [`Scalar`] yields itself in every lane, for any `N`.
pub trait Lanes<const N: usize> {
    /// The type of each lane's element.
    type Elem;

    /// Returns the element in lane `index`.
    fn lane(&self, index: usize) -> Self::Elem;
}

impl<T: Copy, const N: usize> Lanes<N> for Vector<T, N> {
    type Elem = T;

    #[inline]
    fn lane(&self, index: usize) -> T {
        self[index]
    }
}

impl<S: Scalar, const N: usize> Lanes<N> for S {
    type Elem = S;

    #[inline]
    fn lane(&self, _: usize) -> S {
        *self
    }
}

/// Applies `op` to every lane of `a`.
pub fn map_with<O, A, const N: usize>(mut op: O, a: A) -> Vector<O::Output, N>
where
    A: Lanes<N>,
    O: UnaryOp<A::Elem>,
{
    Vector::from_fn(|i| op.apply(a.lane(i)))
}

/// Applies `op` to the corresponding lanes of `a` and `b`.
pub fn zip_with<O, A, B, const N: usize>(mut op: O, a: A, b: B) -> Vector<O::Output, N>
where
    A: Lanes<N>,
    B: Lanes<N>,
    O: BinaryOp<A::Elem, B::Elem>,
{
    Vector::from_fn(|i| op.apply(a.lane(i), b.lane(i)))
}

/// Applies `op` to the corresponding lanes of `a`, `b` and `c`.
pub fn zip_with3<O, A, B, C, const N: usize>(mut op: O, a: A, b: B, c: C) -> Vector<O::Output, N>
where
    A: Lanes<N>,
    B: Lanes<N>,
    C: Lanes<N>,
    O: TernaryOp<A::Elem, B::Elem, C::Elem>,
{
    Vector::from_fn(|i| op.apply(a.lane(i), b.lane(i), c.lane(i)))
}

/// Left fold over the elements of `v`, starting at `init`.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// # use gmath::elementwise::{fold, op};
/// assert_eq!(fold(op::Add, 0, vec4(1, 2, 3, 4)), 10);
/// ```
pub fn fold<O, Acc, T, const N: usize>(mut op: O, init: Acc, v: Vector<T, N>) -> Acc
where
    O: BinaryOp<Acc, T, Output = Acc>,
{
    v.into_array()
        .into_iter()
        .fold(init, |acc, elem| op.apply(acc, elem))
}

/// Returns `true` if every element of `v` is `true`.
///
/// An empty vector yields `true`.
pub fn all<const N: usize>(v: Vector<bool, N>) -> bool {
    fold(op::And, true, v)
}

/// Returns `true` if any element of `v` is `true`.
///
/// An empty vector yields `false`.
pub fn any<const N: usize>(v: Vector<bool, N>) -> bool {
    fold(op::Or, false, v)
}

/// Sum of the elements of `v`, `v[0] + v[1] + ...`.
///
/// An empty vector sums to zero. Elements may themselves be vectors.
///
/// ```
/// # use gmath::*;
/// # use gmath::elementwise::sum;
/// assert_eq!(sum(vec4(1, 2, 3, 4)), 10);
/// assert_eq!(sum(vec2(vec2(1.0, 2.0), vec2(0.5, 0.5))), vec2(1.5, 2.5));
/// ```
pub fn sum<T, const N: usize>(v: Vector<T, N>) -> T
where
    T: Zero + ops::Add<Output = T>,
{
    fold(op::Add, T::ZERO, v)
}

/// Product of the elements of `v`, `v[0] * v[1] * ...`.
///
/// An empty vector has product one.
pub fn product<T, const N: usize>(v: Vector<T, N>) -> T
where
    T: One + ops::Mul<Output = T>,
{
    fold(op::Mul, T::ONE, v)
}

/// Containers that can be traversed down to their [`Scalar`] components.
///
/// Scalars are their own single component. Vectors recurse into their elements, so a
/// `Vector<Vector<f32, 3>, 2>` has six `f32` components. Matrices and quaternions forward to their
/// vector representation.
pub trait Components: Copy {
    /// The innermost scalar type.
    type Scalar: Scalar;

    /// Creates a container with every component set to `scalar`.
    fn splat_components(scalar: Self::Scalar) -> Self;

    fn map_components<F>(self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar;

    fn zip_components<F>(self, other: Self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar;

    fn zip3_components<F>(self, b: Self, c: Self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar, Self::Scalar) -> Self::Scalar;

    /// Folds over all components in storage order.
    fn fold_components<A, F>(self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, Self::Scalar) -> A;
}

impl<S: Scalar> Components for S {
    type Scalar = S;

    #[inline]
    fn splat_components(scalar: S) -> S {
        scalar
    }

    #[inline]
    fn map_components<F>(self, f: &mut F) -> S
    where
        F: FnMut(S) -> S,
    {
        f(self)
    }

    #[inline]
    fn zip_components<F>(self, other: S, f: &mut F) -> S
    where
        F: FnMut(S, S) -> S,
    {
        f(self, other)
    }

    #[inline]
    fn zip3_components<F>(self, b: S, c: S, f: &mut F) -> S
    where
        F: FnMut(S, S, S) -> S,
    {
        f(self, b, c)
    }

    #[inline]
    fn fold_components<A, F>(self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, S) -> A,
    {
        f(init, self)
    }
}

impl<T: Components, const N: usize> Components for Vector<T, N> {
    type Scalar = T::Scalar;

    fn splat_components(scalar: Self::Scalar) -> Self {
        Vector::splat(T::splat_components(scalar))
    }

    fn map_components<F>(self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar,
    {
        map_with(|elem: T| elem.map_components(&mut *f), self)
    }

    fn zip_components<F>(self, other: Self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        zip_with(|a: T, b: T| a.zip_components(b, &mut *f), self, other)
    }

    fn zip3_components<F>(self, b: Self, c: Self, f: &mut F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar, Self::Scalar) -> Self::Scalar,
    {
        zip_with3(|a: T, b: T, c: T| a.zip3_components(b, c, &mut *f), self, b, c)
    }

    fn fold_components<A, F>(self, init: A, f: &mut F) -> A
    where
        F: FnMut(A, Self::Scalar) -> A,
    {
        fold(|acc: A, elem: T| elem.fold_components(acc, &mut *f), init, self)
    }
}

/// Arguments that can stand in for a container of type `C`.
///
/// Every [`Components`] type converts to itself, and a bare scalar broadcasts to every component
/// of any container built from it. This is what lets the function library accept either a
/// container or a scalar in positions like the blend factor of [`mix`][crate::functions::mix].
pub trait Broadcast<C> {
    fn broadcast(self) -> C;
}

impl<C: Components> Broadcast<C> for C {
    #[inline]
    fn broadcast(self) -> C {
        self
    }
}

impl<S, T, const N: usize> Broadcast<Vector<T, N>> for S
where
    S: Scalar,
    T: Components<Scalar = S>,
{
    #[inline]
    fn broadcast(self) -> Vector<T, N> {
        Vector::splat_components(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, Vec3};

    #[test]
    fn scalar_broadcast_on_either_side() {
        let v = vec3(1, 2, 3);
        let left: Vec3<i32> = zip_with(op::Sub, 10i32, v);
        let right: Vec3<i32> = zip_with(op::Sub, v, 10i32);
        assert_eq!(left, vec3(9, 8, 7));
        assert_eq!(right, vec3(-9, -8, -7));
    }

    #[test]
    fn result_type_follows_op() {
        let lt: Vec3<bool> = zip_with(op::Less, vec3(1.0f32, 5.0, 3.0), 3.0f32);
        assert_eq!(lt, vec3(true, false, false));

        let words: Vector<String, 2> = map_with(|n: i32| n.to_string(), vec2(4, 2));
        assert_eq!(words, vec2("4".to_string(), "2".to_string()));
    }

    #[test]
    fn ternary() {
        let v: Vec3<i32> = zip_with3(
            |a: i32, b: i32, c: i32| a * b + c,
            vec3(1, 2, 3),
            2i32,
            vec3(10, 20, 30),
        );
        assert_eq!(v, vec3(12, 24, 36));
    }

    #[test]
    fn reductions() {
        assert!(all(vec3(true, true, true)));
        assert!(!all(vec3(true, false, true)));
        assert!(any(vec3(false, false, true)));
        assert!(!any(vec2(false, false)));

        // Vacuous truth for empty vectors.
        assert!(all(Vector::<bool, 0>::from([])));
        assert!(!any(Vector::<bool, 0>::from([])));
    }

    #[test]
    fn sums_and_products() {
        assert_eq!(sum(vec3(2, -5, 9)), 6);
        assert_eq!(product(vec3(2, -5, 9)), -90);
        assert_eq!(sum(vec2(0.25f32, 0.5)), 0.75);
        assert_eq!(product(vec2(0.25f32, 0.5)), 0.125);

        assert_eq!(sum(Vector::<i32, 0>::from([])), 0);
        assert_eq!(product(Vector::<f64, 0>::from([])), 1.0);

        let columns = vec3(vec2(1, 2), vec2(3, 4), vec2(5, 6));
        assert_eq!(sum(columns), vec2(9, 12));
        assert_eq!(product(columns), vec2(15, 48));
    }

    #[test]
    fn nested_components() {
        let nested = vec2(vec3(1, 2, 3), vec3(4, 5, 6));
        let doubled = nested.map_components(&mut |x| x * 2);
        assert_eq!(doubled, vec2(vec3(2, 4, 6), vec3(8, 10, 12)));

        let sum = nested.fold_components(0, &mut |acc, x| acc + x);
        assert_eq!(sum, 21);

        let mut order = Vec::new();
        nested.fold_components((), &mut |(), x| order.push(x));
        assert_eq!(order, [1, 2, 3, 4, 5, 6]);

        let splat: Vector<Vec3<i32>, 2> = 7i32.broadcast();
        assert_eq!(splat, vec2(vec3(7, 7, 7), vec3(7, 7, 7)));
    }
}
