//! Named operation types for the elementwise engine.
//!
//! Each type here is a zero-sized [`UnaryOp`] or [`BinaryOp`] that forwards to the corresponding
//! operator trait or comparison. The arithmetic operator impls of [`Vector`] are written in terms
//! of these.
//!
//! [`Vector`]: crate::Vector

use std::ops;

use super::{BinaryOp, UnaryOp};
use crate::MinMax;

macro_rules! arithmetic {
    ($($(#[$attr:meta])* $name:ident => $tr:ident :: $method:ident;)+) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl<A, B> BinaryOp<A, B> for $name
            where
                A: ops::$tr<B>,
            {
                type Output = <A as ops::$tr<B>>::Output;

                #[inline]
                fn apply(&mut self, a: A, b: B) -> Self::Output {
                    ops::$tr::$method(a, b)
                }
            }
        )+
    };
}

arithmetic! {
    /// `a + b`
    Add => Add::add;
    /// `a - b`
    Sub => Sub::sub;
    /// `a * b`
    Mul => Mul::mul;
    /// `a / b`
    Div => Div::div;
    /// `a % b`
    Rem => Rem::rem;
    /// `a & b`
    BitAnd => BitAnd::bitand;
    /// `a | b`
    BitOr => BitOr::bitor;
    /// `a ^ b`
    BitXor => BitXor::bitxor;
}

macro_rules! comparison {
    ($($(#[$attr:meta])* $name:ident => $tr:ident :: $method:ident;)+) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl<A, B> BinaryOp<A, B> for $name
            where
                A: $tr<B>,
            {
                type Output = bool;

                #[inline]
                fn apply(&mut self, a: A, b: B) -> bool {
                    a.$method(&b)
                }
            }
        )+
    };
}

comparison! {
    /// `a < b`
    Less => PartialOrd::lt;
    /// `a <= b`
    LessEqual => PartialOrd::le;
    /// `a > b`
    Greater => PartialOrd::gt;
    /// `a >= b`
    GreaterEqual => PartialOrd::ge;
    /// `a == b`
    Equal => PartialEq::eq;
    /// `a != b`
    NotEqual => PartialEq::ne;
}

/// Logical AND of two booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct And;

impl BinaryOp<bool, bool> for And {
    type Output = bool;

    #[inline]
    fn apply(&mut self, a: bool, b: bool) -> bool {
        a && b
    }
}

/// Logical OR of two booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Or;

impl BinaryOp<bool, bool> for Or {
    type Output = bool;

    #[inline]
    fn apply(&mut self, a: bool, b: bool) -> bool {
        a || b
    }
}

/// The smaller of two values, via [`MinMax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl<T: MinMax> BinaryOp<T, T> for Min {
    type Output = T;

    #[inline]
    fn apply(&mut self, a: T, b: T) -> T {
        a.min(b)
    }
}

/// The larger of two values, via [`MinMax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl<T: MinMax> BinaryOp<T, T> for Max {
    type Output = T;

    #[inline]
    fn apply(&mut self, a: T, b: T) -> T {
        a.max(b)
    }
}

/// `-a`
#[derive(Debug, Clone, Copy, Default)]
pub struct Neg;

impl<A: ops::Neg> UnaryOp<A> for Neg {
    type Output = A::Output;

    #[inline]
    fn apply(&mut self, a: A) -> A::Output {
        -a
    }
}

/// `!a`
#[derive(Debug, Clone, Copy, Default)]
pub struct Not;

impl<A: ops::Not> UnaryOp<A> for Not {
    type Output = A::Output;

    #[inline]
    fn apply(&mut self, a: A) -> A::Output {
        !a
    }
}
