//! Implementations of `std::ops`.
//!
//! Every arithmetic operator forwards to the elementwise engine. Each binary operator comes in two
//! flavors: vector-vector (elementwise, `T: Op<U>`) and vector-scalar (the scalar is broadcast).
//! Scalar-vector operators with the scalar on the left are implemented for the primitive types.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use crate::{
    elementwise::{map_with, op, zip_with},
    Scalar,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg + Copy,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        map_with(op::Neg, self)
    }
}

/// Element-wise logical (or bitwise) negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not + Copy,
{
    type Output = Vector<T::Output, N>;

    #[inline]
    fn not(self) -> Self::Output {
        map_with(op::Not, self)
    }
}

macro_rules! binary_ops {
    ($($tr:ident::$method:ident, $assign_tr:ident::$assign_method:ident => $op:ident;)+) => {
        $(
            /// Element-wise operation between two vectors of the same length.
            impl<T, U, const N: usize> $tr<Vector<U, N>> for Vector<T, N>
            where
                T: $tr<U> + Copy,
                U: Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: Vector<U, N>) -> Self::Output {
                    zip_with(op::$op, self, rhs)
                }
            }

            /// Vector-scalar operation, applying the scalar to every element.
            impl<T, const N: usize> $tr<T> for Vector<T, N>
            where
                T: $tr + Scalar,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    zip_with(op::$op, self, rhs)
                }
            }

            impl<T, U, const N: usize> $assign_tr<Vector<U, N>> for Vector<T, N>
            where
                T: $assign_tr<U>,
            {
                fn $assign_method(&mut self, rhs: Vector<U, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            impl<T, const N: usize> $assign_tr<T> for Vector<T, N>
            where
                T: $assign_tr + Scalar,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign => Add;
    Sub::sub, SubAssign::sub_assign => Sub;
    Mul::mul, MulAssign::mul_assign => Mul;
    Div::div, DivAssign::div_assign => Div;
    Rem::rem, RemAssign::rem_assign => Rem;
    BitAnd::bitand, BitAndAssign::bitand_assign => BitAnd;
    BitOr::bitor, BitOrAssign::bitor_assign => BitOr;
    BitXor::bitxor, BitXorAssign::bitxor_assign => BitXor;
}

// Coherence rules out a generic `impl<T: Scalar> Add<Vector<T, N>> for T`, so the scalar-on-the-left
// forms are spelled out per primitive.
macro_rules! scalar_lhs_ops {
    (@op $t:ty: $($tr:ident::$method:ident => $op:ident),+) => {
        $(
            impl<const N: usize> $tr<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn $method(self, rhs: Vector<$t, N>) -> Self::Output {
                    zip_with(op::$op, self, rhs)
                }
            }
        )+
    };
    ($($t:ty),+) => {
        $(
            scalar_lhs_ops!(@op $t: Add::add => Add, Sub::sub => Sub, Mul::mul => Mul, Div::div => Div, Rem::rem => Rem);
        )+
    };
}

scalar_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec3, Vec3f, Vector};

    #[test]
    fn arithmetic() {
        assert_eq!(vec3(1, 2, 3) + vec3(4, 5, 6), vec3(5, 7, 9));
        assert_eq!(vec3(1, 2, 3) - vec3(4, 5, 6), vec3(-3, -3, -3));
        assert_eq!(vec3(1, 2, 3) * vec3(4, 5, 6), vec3(4, 10, 18));
        assert_eq!(vec3(8, 10, 12) / vec3(4, 5, 6), vec3(2, 2, 2));
        assert_eq!(vec3(8, 11, 12) % vec3(3, 5, 7), vec3(2, 1, 5));
        assert_eq!(-vec2(1.0, -2.0), vec2(-1.0, 2.0));
    }

    #[test]
    fn scalar_broadcast() {
        assert_eq!(vec3(1, 2, 3) * 2, vec3(2, 4, 6));
        assert_eq!(2 * vec3(1, 2, 3), vec3(2, 4, 6));
        assert_eq!(vec3(1.0, 2.0, 4.0) / 2.0, vec3(0.5, 1.0, 2.0));
        assert_eq!(1.0 / vec3(1.0, 2.0, 4.0), vec3(1.0, 0.5, 0.25));
        assert_eq!(10u8 - vec2(1u8, 2), vec2(9, 8));
        assert_eq!(vec4(1, 2, 3, 4) + 1, vec4(2, 3, 4, 5));
    }

    #[test]
    fn assign() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += Vec3f::X;
        v *= 2.0;
        v -= vec3(0.0, 1.0, 1.0);
        v /= vec3(1.0, 3.0, 5.0);
        assert_eq!(v, vec3(4.0, 1.0, 1.0));

        let mut bits = vec2(0b1100u8, 0b1010);
        bits &= vec2(0b0100, 0b0010);
        bits |= 0b0001;
        bits ^= vec2(0b0000, 0b0011);
        assert_eq!(bits, vec2(0b0101, 0b0000));
    }

    #[test]
    fn logic() {
        let a = vec3(true, false, true);
        let b = vec3(true, true, false);
        assert_eq!(a & b, vec3(true, false, false));
        assert_eq!(a | b, vec3(true, true, true));
        assert_eq!(a ^ b, vec3(false, true, true));
        assert_eq!(!a, vec3(false, true, false));
    }

    #[test]
    fn mixed_element_types() {
        let v: Vec3<i32> = vec3(1, 2, 3);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v, [1, 2, 3][..]);
        assert_ne!(v, vec3(1, 2, 4));
        assert_eq!(vec2(1u8, 2).cast::<f32>(), vec2(1.0, 2.0));
    }

    #[test]
    fn nested() {
        let a = vec2(vec2(1, 2), vec2(3, 4));
        let b = vec2(vec2(10, 20), vec2(30, 40));
        assert_eq!(a + b, vec2(vec2(11, 22), vec2(33, 44)));
        assert_eq!(-a, Vector::from([vec2(-1, -2), vec2(-3, -4)]));
    }
}
