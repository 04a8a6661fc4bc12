//! Approximate equality for floats and float containers.
//!
//! [`ApproxEq`] backs the [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros used throughout the unit tests. Each
//! assertion carries a [`Tolerance`] made of up to three independent bounds.
//!
//! [`EpsilonEq`] is the cruder check used when validating identities on random operands: the
//! allowed error grows with the magnitude of the operands and a ULP factor. See [`almost_equal`].

mod impls;

use std::{fmt, panic::Location};

/// ULP factor applied by [`almost_equal`].
pub const DEFAULT_ULP: u32 = 4;

/// Bounds that make two floats count as equal.
///
/// Every bound is optional. Values match if *any* enabled bound accepts them, and a tolerance
/// with no bound accepts nothing but identical values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    /// Largest accepted `|a - b|`.
    pub abs: Option<F>,
    /// Largest accepted `|a - b| / max(|a|, |b|)`.
    pub rel: Option<F>,
    /// Largest accepted distance in [units in the last place].
    ///
    /// [units in the last place]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    pub ulps: Option<u32>,
}

impl<F: ApproxFloat> Tolerance<F> {
    pub const EXACT: Self = Self {
        abs: None,
        rel: None,
        ulps: None,
    };

    /// Machine epsilon, both absolute and relative.
    pub const EPSILON: Self = Self {
        abs: Some(F::EPSILON),
        rel: Some(F::EPSILON),
        ulps: None,
    };

    fn is_exact(&self) -> bool {
        self.abs.is_none() && self.rel.is_none() && self.ulps.is_none()
    }
}

/// Float types a [`Tolerance`] can be expressed in.
pub trait ApproxFloat: Copy + fmt::Debug {
    const EPSILON: Self;

    /// Applies `tolerance` to a single pair of values.
    ///
    /// NaN matches nothing. Infinities only match themselves. Zeros of either sign match each
    /// other, otherwise values of opposite sign are never within a ULP bound.
    fn within(self, other: Self, tolerance: &Tolerance<Self>) -> bool;
}

/// Componentwise approximate equality.
///
/// Implemented for [`f32`], [`f64`], slices, and the vector, matrix and quaternion types. A
/// container matches when every pair of components does.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    type Float: ApproxFloat;

    fn approx_eq(&self, other: &Rhs, tolerance: &Tolerance<Self::Float>) -> bool;
}

/// Epsilon-scaled approximate equality.
///
/// Two floats `a` and `b` are equal when one of the following holds:
///
/// - `a == b`, which also accepts matching infinities
/// - `|a - b| < EPSILON * |a + b| * ulp`
/// - `|a - b| < MIN_POSITIVE`, for results that cancel to almost nothing
///
/// Integers and booleans compare exactly. Containers require every component to be equal.
pub trait EpsilonEq {
    fn epsilon_eq(&self, other: &Self, ulp: u32) -> bool;
}

/// [`EpsilonEq`] with a ULP factor of [`DEFAULT_ULP`].
///
/// ```
/// # use gmath::{*, approx::almost_equal};
/// let scaled = vec2(10.0f64, 0.7) * 0.1;
/// assert!(almost_equal(&scaled, &vec2(1.0, 0.07)));
/// assert!(!almost_equal(&0.5f32, &0.5001));
/// assert!(almost_equal(&-12i64, &-12));
/// ```
pub fn almost_equal<T: EpsilonEq + ?Sized>(a: &T, b: &T) -> bool {
    a.epsilon_eq(b, DEFAULT_ULP)
}

/// Pending approximate assertion, created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The builder methods add bounds to the [`Tolerance`]. The assertion runs when the guard goes
/// out of scope at the end of the statement, and falls back to [`Tolerance::EPSILON`] if no
/// bound was added.
pub struct Asserter<'a, T: ApproxEq + fmt::Debug> {
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    tolerance: Tolerance<T::Float>,
    message: Option<fmt::Arguments<'a>>,
    location: &'static Location<'static>,
}

impl<'a, T: ApproxEq + fmt::Debug> Asserter<'a, T> {
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        message: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            tolerance: Tolerance::EXACT,
            message,
            location: Location::caller(),
        }
    }

    /// Accepts an absolute difference up to `abs`. Suited to values close to zero.
    pub fn abs(&mut self, abs: T::Float) -> &mut Self {
        self.tolerance.abs = Some(abs);
        self
    }

    /// Accepts a difference up to `rel` times the larger magnitude.
    ///
    /// Near zero this needs huge factors: only `rel >= 1.0` lets anything non-zero match `0.0`.
    pub fn rel(&mut self, rel: T::Float) -> &mut Self {
        self.tolerance.rel = Some(rel);
        self
    }

    /// Accepts up to `ulps` representable floats between the values.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.tolerance.ulps = Some(ulps);
        self
    }
}

impl<'a, T: ApproxEq + fmt::Debug> Drop for Asserter<'a, T> {
    fn drop(&mut self) {
        let tolerance = if self.tolerance.is_exact() {
            Tolerance::EPSILON
        } else {
            self.tolerance
        };
        let equal = self.left.approx_eq(self.right, &tolerance);
        if equal != (self.kind == AssertionKind::Eq) {
            // `drop` can't be `#[track_caller]`, so the assertion site is reported explicitly.
            assertion_failed(
                self.left,
                self.right,
                self.kind,
                self.location,
                self.message,
            );
        }
    }
}

#[cold]
fn assertion_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match message {
        Some(message) => panic!(
            "assertion `left {op} right` failed at {location}: {message}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Like [`assert_eq!`], but compares with [`ApproxEq`].
///
/// Chain [`abs`][crate::approx::Asserter::abs], [`rel`][crate::approx::Asserter::rel] or
/// [`ulps`][crate::approx::Asserter::ulps] onto the macro to pick the bounds.
///
/// ```
/// # use gmath::*;
/// let tenth = 1.0f64 / 10.0;
/// assert_approx_eq!(tenth * 3.0, 0.3);
///
/// assert_approx_eq!(2.0, 2.5).abs(0.5);
/// assert_approx_eq!(200.0, 202.0).rel(0.01);
/// assert_approx_eq!(4.0f32, 4.0 + 2.0 * 4.0 * f32::EPSILON).ulps(2);
/// assert_approx_eq!(vec3(tenth, 0.2, 0.0) * 3.0, vec3(0.3, 0.6, 0.0));
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$left,
            &$right,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($left:expr, $right:expr, $($fmt:tt)+) => {
        $crate::approx::Asserter::new(
            &$left,
            &$right,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($fmt)+)),
        )
    };
}

/// Negated [`assert_approx_eq!`].
///
/// ```
/// # use gmath::*;
/// assert_approx_ne!(2.0, 2.5).abs(0.1);
/// assert_approx_ne!(vec2(1.0, 1.0), vec2(1.0, 1.1));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$left,
            &$right,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($left:expr, $right:expr, $($fmt:tt)+) => {
        $crate::approx::Asserter::new(
            &$left,
            &$right,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($fmt)+)),
        )
    };
}
