use std::{array, cmp::Ordering, fmt};

use itertools::Itertools;

use crate::{
    elementwise::{fold, op, zip_with},
    traits::{Number, Sqrt},
    One, ScalarCast, Zero,
};

mod access;
mod ops;

/// Vector without components.
pub type Vec0<T> = Vector<T, 0>;
pub type Vec1<T> = Vector<T, 1>;
pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

pub type Vec1f = Vec1<f32>;
pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;

/// Fixed-size vector of `N` components of type `T`.
///
/// The dimension is part of the type, so adding a [`Vec2`] to a [`Vec3`] is a compile error
/// rather than a runtime check. Storage is a plain `[T; N]` with no padding, which makes the
/// type [`bytemuck::Pod`] whenever `T` is.
///
/// Vectors are built with [`vec1`] through [`vec4`], from arrays via [`From`], or with
/// [`Vector::splat`], [`Vector::from_fn`], [`Vector::from_slice`] and [`Vector::from_ptr`].
/// [`Default`] fills every component with `T::default()`.
///
/// Components are reachable by index, or in up to 4 dimensions by name: `x y z w` for positions,
/// `r g b a` for colors and `s t p q` for texture coordinates all refer to the same slots.
///
/// All arithmetic is componentwise, with a scalar on either side broadcast to every component:
///
/// ```
/// # use gmath::*;
/// let v = vec3(2, 4, 6);
/// assert_eq!(v / 2, vec3(1, 2, 3));
/// assert_eq!(1 + v, vec3(3, 5, 7));
/// assert_eq!(v * vec3(0, 1, -1), vec3(0, 4, -6));
/// ```
///
/// Equality compares all components. [`PartialOrd`] and [`Ord`] are lexicographic, and the
/// [`Hash`] impl is consistent with equality, so integer vectors can key a `HashMap`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All components zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Self::ZERO;
}

impl<T: One, const N: usize> One for Vector<T, N> {
    const ONE: Self = Self([T::ONE; N]);
}

// Unit axes. `W` only exists in 4 dimensions.
impl<T: Zero + One> Vector<T, 1> {
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = Self([T::ONE, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Repeats `value` in every component.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Vec4::splat(-1), vec4(-1, -1, -1, -1));
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Computes component `i` as `f(i)`.
    ///
    /// ```
    /// # use gmath::*;
    /// let squares: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(squares, vec4(0, 1, 4, 9));
    /// ```
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Takes the leading `N` values of `slice`; any further values are ignored.
    ///
    /// # Panics
    ///
    /// If `slice.len() < N`.
    ///
    /// ```
    /// # use gmath::*;
    /// let packed = [0.5, 0.25, 0.125, 9.0, 9.0];
    /// assert_eq!(Vec3::from_slice(&packed), vec3(0.5, 0.25, 0.125));
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Copy,
    {
        match slice.get(..N) {
            Some(head) => Self::from_fn(|i| head[i]),
            None => panic!(
                "slice of length {} is too short for a vector with {} elements",
                slice.len(),
                N,
            ),
        }
    }

    /// Loads `N` values from consecutive memory starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` has to be aligned for `T` and point to `N` initialized values that are valid for
    /// reads.
    ///
    /// ```
    /// # use gmath::*;
    /// let vertices = [1.0f32, 1.0, 0.0, 2.0, 3.0, 4.0];
    /// let second: Vec3f = unsafe { Vector::from_ptr(vertices.as_ptr().add(3)) };
    /// assert_eq!(second, vec3(2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub unsafe fn from_ptr(ptr: *const T) -> Self
    where
        T: Copy,
    {
        Self(ptr.cast::<[T; N]>().read())
    }

    /// Transforms every component with `f`, possibly changing the component type.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(-3, 3).map(|c| c > 0), vec2(false, true));
    /// ```
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the components of `self` and `other` by position.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2('a', 'b').zip(vec2(1, 2)), vec2(('a', 1), ('b', 2)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut pairs = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match pairs.next() {
            Some(pair) => pair,
            // Both sides yield exactly `N` items.
            None => unreachable!(),
        })
    }

    /// Reduces the components in index order.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec4(3, 1, 4, 1).fold(0, Ord::max), 4);
    /// assert_eq!(vec3(0.5, -2.0, 1.5).fold(0.0, |acc, x| acc + x), 0.0);
    /// ```
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        fold(f, init, self)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Converts to an `M`-component vector.
    ///
    /// Shrinking drops the trailing components. Growing keeps all of them and pads with zeros.
    ///
    /// ```
    /// # use gmath::*;
    /// let rgb = vec3(0.2, 0.4, 0.6);
    /// assert_eq!(rgb.resize::<4>(), vec4(0.2, 0.4, 0.6, 0.0));
    /// assert_eq!(rgb.resize::<2>(), vec2(0.2, 0.4));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from_fn(|i| self.0.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Converts every component to `U` like the `as` operator would.
    ///
    /// Float to integer conversions truncate toward zero and saturate at the target's bounds.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec3(2.7f64, -2.7, 1e10).cast::<i16>(), vec3(2, -2, i16::MAX));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: ScalarCast<U>,
    {
        self.map(ScalarCast::cast)
    }

    /// Sum of the componentwise products of `self` and `other`.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec4(1, 2, 3, 4).dot(vec4(-1, 0, 1, 2)), 10);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        fold(op::Add, T::ZERO, zip_with(op::Mul, self, other))
    }

    /// Squared Euclidean length, `self.dot(self)`.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Euclidean length.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(-5.0, 12.0).length(), 13.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales `self` to length 1.
    ///
    /// The zero vector has no direction, so normalizing it yields NaN in every component.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let len = self.length();
        self.map(|c| c / len)
    }
}

// Growing and shrinking by one component at a time.
impl<T> Vector<T, 0> {
    pub fn extend(self, value: T) -> Vector<T, 1> {
        Vector([value])
    }
}

impl<T> Vector<T, 1> {
    pub fn truncate(self) -> Vector<T, 0> {
        Vector([])
    }

    pub fn extend(self, y: T) -> Vector<T, 2> {
        let [x] = self.0;
        vec2(x, y)
    }
}

impl<T> Vector<T, 2> {
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.0;
        vec1(x)
    }

    /// Appends a Z component.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(vec2(7, 8).extend(9), vec3(7, 8, 9));
    /// ```
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, z)
    }
}

impl<T> Vector<T, 3> {
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends a W component, e.g. to turn a point into homogeneous coordinates.
    ///
    /// ```
    /// # use gmath::*;
    /// let point = vec3(4.0, 5.0, 6.0).extend(1.0);
    /// assert_eq!(point.w(), 1.0);
    /// ```
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Right-handed cross product.
    ///
    /// The result is orthogonal to both inputs, and swapping the operands flips its sign.
    ///
    /// ```
    /// # use gmath::*;
    /// assert_eq!(Vec3::<i32>::Z.cross(Vec3::X), Vec3::Y);
    /// assert_eq!(vec3(1, 2, 3).cross(vec3(4, 5, 6)), vec3(-3, 6, -3));
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T> Vector<T, 4> {
    /// Drops the W component.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialOrd, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord, const N: usize> Ord for Vector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// Both formats print `(a, b, c)` and forward precision and width flags to every component.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt::Debug::fmt(&self.0.iter().format(", "), f)?;
        write!(f, ")")
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt::Display::fmt(&self.0.iter().format(", "), f)?;
        write!(f, ")")
    }
}

#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn axes() {
        assert_eq!(Vec2::<i8>::Y, [0, 1]);
        assert_eq!(Vec3::<u32>::Z, [0, 0, 1]);
        assert_eq!(Vec4::<f64>::W.as_array(), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Vec1::<f32>::X.x(), 1.0);
        assert_eq!(Vec4::<i64>::ONE, Vec4::splat(1));
    }

    #[test]
    fn indexing() {
        let mut v = vec4(10, 20, 30, 40);
        v[3] += 2;
        *v.y_mut() = -20;
        assert_eq!(v.into_array(), [10, -20, 30, 42]);
        assert_eq!(v.as_slice().len(), 4);
    }

    #[test]
    #[should_panic]
    fn index_past_end() {
        let v = vec2(0.0f32, 0.0);
        let _ = v[2];
    }

    #[test]
    #[should_panic]
    fn zero_dimensional_index() {
        let _ = Vec0::<u8>::default()[0];
    }

    #[test]
    fn formatting() {
        assert_eq!(vec2(-1, 8).to_string(), "(-1, 8)");
        assert_eq!(format!("{:?}", vec3(1.0f64, 0.5, 0.0)), "(1.0, 0.5, 0.0)");
        assert_eq!(format!("{:.1}", vec2(0.3f32, 2.0)), "(0.3, 2.0)");
        assert_eq!(Vec0::<f32>::ZERO.to_string(), "()");
    }

    #[test]
    fn slices_and_pointers() {
        let buf = [1u16, 2, 3, 4, 5, 6];
        assert_eq!(Vec2::from_slice(&buf[4..]), vec2(5, 6));
        let tail: Vec3<u16> = unsafe { Vector::from_ptr(buf.as_ptr().add(1)) };
        assert_eq!(tail, vec3(2, 3, 4));
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn slice_too_short() {
        let _ = Vec4::from_slice(&[0u8; 3]);
    }

    #[test]
    fn assignment_copies() {
        let original = vec2(1.5, -1.5);
        let mut copy = original;
        *copy.x_mut() = 0.0;
        assert_eq!(original.x(), 1.5);
        assert_eq!(copy, vec2(0.0, -1.5));
    }

    #[test]
    fn resizing() {
        let v = vec4(9u8, 8, 7, 6);
        assert_eq!(v.resize::<2>(), vec2(9, 8));
        assert_eq!(v.resize::<2>().resize::<4>(), vec4(9, 8, 0, 0));
        assert_eq!(v.resize::<0>().resize::<1>(), vec1(0));
        assert_eq!(vec1(3).extend(4).extend(5).extend(6).truncate(), vec3(3, 4, 5));
    }

    #[test]
    fn casting() {
        assert_eq!(vec3(-1i32, 0, 300).cast::<u8>(), vec3(255, 0, 44));
        assert_eq!(vec2(0.999f32, -0.999).cast::<i32>(), vec2(0, 0));
        let exact = vec4(-7i16, 1, 2, 3);
        assert_eq!(exact.cast::<f32>().cast::<i16>(), exact);
    }

    #[test]
    fn lexicographic_order() {
        assert!(vec2(0, 9) < vec2(1, 0));
        assert!(vec3(1.0, 2.0, 3.0) <= vec3(1.0, 2.0, 3.0));
        assert_eq!(vec2(4, 4).cmp(&vec2(4, 5)), Ordering::Less);
        assert!(vec2(1.0, f64::NAN).partial_cmp(&vec2(1.0, 0.0)).is_none());
    }

    #[test]
    fn equal_vectors_hash_equally() {
        let set: HashSet<_> = [vec2(1, 2), vec2(2, 1), vec2(1, 2)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&vec2(2, 1)));
    }

    #[test]
    fn products() {
        assert_eq!(vec3(2, -1, 0).dot(vec3(3, 3, 100)), 3);
        assert_eq!(Vec3::<i32>::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::<i32>::Y.cross(Vec3::X), -Vec3::<i32>::Z);
        let a = vec3(1.0, -2.0, 0.5);
        let b = vec3(0.0, 4.0, 2.0);
        assert_eq!(a.cross(b).dot(a), 0.0);
        assert_eq!(a.cross(b).dot(b), 0.0);
    }

    #[test]
    fn lengths() {
        assert_eq!(vec4(1, 1, 1, 1).length2(), 4);
        assert_eq!(vec3(2.0f64, 3.0, 6.0).length(), 7.0);
        assert_approx_eq!(vec2(1.0f32, -1.0).normalize().length(), 1.0);
        assert_eq!(vec2(0.0, -8.0).normalize(), vec2(0.0, -1.0));
        assert!(Vec2::<f32>::ZERO.normalize().y().is_nan());
    }
}
