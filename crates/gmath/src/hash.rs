//! Hashing of containers by their scalar components.
//!
//! Floating-point containers don't implement [`Hash`], since `f32` and `f64` don't. This module
//! provides a combine-based hash over the bit patterns of all scalar components, and [`HashKey`],
//! which makes any container usable as a [`HashMap`][std::collections::HashMap] or
//! [`HashSet`][std::collections::HashSet] key.

use std::hash::{Hash, Hasher};

use crate::{elementwise::Components, Scalar};

/// The initial value that component hashes are folded into.
pub const HASH_SEED: u64 = 73;

/// Mixes the hash `h` into `seed`.
///
/// This is the classic `boost::hash_combine` step, using wrapping arithmetic.
#[inline]
pub fn hash_combine(seed: u64, h: u64) -> u64 {
    seed ^ h
        .wrapping_add(0x9e3779b9)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hashes every scalar component of `value`, in storage order, starting from [`HASH_SEED`].
///
/// `-0.0` hashes like `0.0`, and all NaNs hash identically.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// # use gmath::hash::hash_components;
/// assert_eq!(hash_components(vec2(0.0, 1.0)), hash_components(vec2(-0.0, 1.0)));
/// assert_ne!(hash_components(vec2(1, 2)), hash_components(vec2(2, 1)));
/// ```
pub fn hash_components<C: Components>(value: C) -> u64 {
    value.fold_components(HASH_SEED, &mut |seed, scalar: C::Scalar| {
        hash_combine(seed, scalar.hash_bits())
    })
}

/// A function object computing [`hash_components`].
///
/// Useful wherever a hashing strategy is passed around as a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentHasher;

impl ComponentHasher {
    #[inline]
    pub fn hash<C: Components>(&self, value: C) -> u64 {
        hash_components(value)
    }
}

/// Wrapper that implements [`Eq`] and [`Hash`] by comparing scalar bit patterns.
///
/// Two keys are equal if all of their components have the same canonical bits (as returned by
/// [`Scalar::hash_bits`]), so `0.0` and `-0.0` are the same key, and NaN keys are equal to each
/// other.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// # use gmath::hash::HashKey;
/// use std::collections::HashSet;
///
/// let mut set = HashSet::new();
/// set.insert(HashKey(vec3(1.0, 2.0, 3.0)));
/// set.insert(HashKey(vec3(1.0, 2.0, 3.0)));
/// set.insert(HashKey(vec3(f32::NAN, 0.0, 0.0)));
/// set.insert(HashKey(vec3(f32::NAN, -0.0, 0.0)));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HashKey<C>(pub C);

impl<C: Components> PartialEq for HashKey<C> {
    fn eq(&self, other: &Self) -> bool {
        let mut bits = Vec::new();
        self.0.fold_components((), &mut |(), s: C::Scalar| bits.push(s.hash_bits()));
        let mut i = 0;
        other.0.fold_components(true, &mut |eq, s: C::Scalar| {
            let same = bits.get(i) == Some(&s.hash_bits());
            i += 1;
            eq && same
        })
    }
}

impl<C: Components> Eq for HashKey<C> {}

impl<C: Components> Hash for HashKey<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_components(self.0));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{vec2, vec3, Mat2f, Quat, Vector};

    use super::*;

    #[test]
    fn combine() {
        assert_eq!(hash_combine(0, 0), 0x9e3779b9);
        assert_eq!(hash_combine(73, 0), 73 ^ (0x9e3779b9 + (73 << 6) + (73 >> 2)));
        assert_eq!(
            hash_combine(u64::MAX, u64::MAX),
            u64::MAX
                ^ u64::MAX
                    .wrapping_add(0x9e3779b9)
                    .wrapping_add(u64::MAX << 6)
                    .wrapping_add(u64::MAX >> 2)
        );
    }

    #[test]
    fn seed_and_order() {
        assert_eq!(hash_components(Vector::<f32, 0>::ZERO), HASH_SEED);
        assert_eq!(
            hash_components(7u32),
            hash_combine(HASH_SEED, 7u32.hash_bits())
        );
        assert_ne!(hash_components(vec2(1.0, 2.0)), hash_components(vec2(2.0, 1.0)));
        assert_eq!(ComponentHasher.hash(vec3(1, 2, 3)), hash_components(vec3(1, 2, 3)));
    }

    #[test]
    fn same_components_same_hash() {
        // Hashes only depend on the components, not on the container shape.
        let m = Mat2f::from_columns([[1.0, 2.0], [3.0, 4.0]]);
        let q = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(hash_components(m), hash_components(q));
        assert_eq!(
            hash_components(m),
            hash_components(vec2(vec2(1.0f32, 2.0), vec2(3.0, 4.0)))
        );
    }

    #[test]
    fn float_canonicalization() {
        assert_eq!(hash_components(0.0f64), hash_components(-0.0f64));
        assert_eq!(hash_components(f64::NAN), hash_components(-f64::NAN));
        assert_ne!(hash_components(1.0f32), hash_components(1.0000001f32));
    }

    #[test]
    fn hash_key_map() {
        let mut map = HashMap::new();
        map.insert(HashKey(vec2(0.5, 1.5)), "a");
        map.insert(HashKey(vec2(0.5, -0.0)), "b");
        assert_eq!(map.get(&HashKey(vec2(0.5, 1.5))), Some(&"a"));
        assert_eq!(map.get(&HashKey(vec2(0.5, 0.0))), Some(&"b"));
        assert_eq!(map.get(&HashKey(vec2(1.5, 0.5))), None);
        assert_eq!(HashKey(f32::NAN), HashKey(f32::NAN));
    }
}
