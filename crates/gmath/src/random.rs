//! Uniform random sampling of scalars and containers.
//!
//! Sampling is driven by a caller-provided [`fastrand::Rng`], so a seeded generator gives
//! reproducible results. [`random`] is a shorthand that uses a fresh generator.

use crate::{
    elementwise::{Broadcast, Components},
    Float, Quat, Scalar,
};

/// Scalars that can be drawn uniformly from an interval.
pub trait SampleUniform: Scalar {
    /// Draws a value from `lower..upper`.
    ///
    /// Floats are drawn from the half-open interval. For integers, an empty interval
    /// (`lower >= upper`) yields `lower`. Booleans ignore the bounds and are fair coin flips.
    fn sample_uniform(rng: &mut fastrand::Rng, lower: Self, upper: Self) -> Self;
}

macro_rules! float_impls {
    ($($t:ident),+) => {
        $(
            impl SampleUniform for $t {
                #[inline]
                fn sample_uniform(rng: &mut fastrand::Rng, lower: Self, upper: Self) -> Self {
                    lower + (upper - lower) * rng.$t()
                }
            }
        )+
    };
}

float_impls!(f32, f64);

macro_rules! int_impls {
    ($($t:ident),+) => {
        $(
            impl SampleUniform for $t {
                #[inline]
                fn sample_uniform(rng: &mut fastrand::Rng, lower: Self, upper: Self) -> Self {
                    if lower < upper {
                        rng.$t(lower..upper)
                    } else {
                        lower
                    }
                }
            }
        )+
    };
}

int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl SampleUniform for bool {
    #[inline]
    fn sample_uniform(rng: &mut fastrand::Rng, _lower: Self, _upper: Self) -> Self {
        rng.bool()
    }
}

/// Draws every component of a container independently from the matching bounds.
///
/// Either bound may be a bare scalar, which applies to every component.
///
/// # Examples
///
/// ```
/// # use gmath::*;
/// # use gmath::random::sample;
/// let mut rng = fastrand::Rng::with_seed(1);
/// let v: Vec3f = sample(&mut rng, 0.0, vec3(1.0, 10.0, 100.0));
/// assert!(v.x() < 1.0 && v.y() < 10.0 && v.z() < 100.0);
///
/// let m: Mat2<i32> = sample(&mut rng, -5, 5);
/// assert!(m.as_flat_slice().iter().all(|e| (-5..5).contains(e)));
/// ```
pub fn sample<C>(
    rng: &mut fastrand::Rng,
    lower: impl Broadcast<C>,
    upper: impl Broadcast<C>,
) -> C
where
    C: Components,
    C::Scalar: SampleUniform,
{
    lower
        .broadcast()
        .zip_components(upper.broadcast(), &mut |lo, hi| {
            SampleUniform::sample_uniform(rng, lo, hi)
        })
}

/// Like [`sample`], but uses a freshly seeded generator.
pub fn random<C>(lower: impl Broadcast<C>, upper: impl Broadcast<C>) -> C
where
    C: Components,
    C::Scalar: SampleUniform,
{
    sample(&mut fastrand::Rng::new(), lower, upper)
}

impl<T: Float + SampleUniform> Quat<T> {
    /// Draws a rotation uniformly from the space of all 3D rotations.
    ///
    /// Uses Shoemake's method of mapping three uniform variables onto the unit 3-sphere.
    pub fn random_rotation(rng: &mut fastrand::Rng) -> Self {
        let [u1, u2, u3] = [(); 3].map(|_| T::sample_uniform(rng, T::ZERO, T::ONE));
        let tau = T::PI + T::PI;

        let (a, b) = ((T::ONE - u1).sqrt(), u1.sqrt());
        let (sin2, cos2) = (tau * u2).sin_cos();
        let (sin3, cos3) = (tau * u3).sin_cos();
        Quat::new(b * cos3, a * sin2, a * cos2, b * sin3)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec4, Mat3f, Vec2, Vec4, Vec4f};

    use super::*;

    #[test]
    fn scalar_ranges() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..1000 {
            let f = f64::sample_uniform(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&f));
            let i = i32::sample_uniform(&mut rng, -2, 3);
            assert!((-2..3).contains(&i));
            let u = u8::sample_uniform(&mut rng, 250, 255);
            assert!(u >= 250);
        }
        assert_eq!(i32::sample_uniform(&mut rng, 4, 4), 4);
        assert_eq!(i32::sample_uniform(&mut rng, 5, -5), 5);
        assert_eq!(f32::sample_uniform(&mut rng, 1.5, 1.5), 1.5);
    }

    #[test]
    fn container_bounds() {
        let mut rng = fastrand::Rng::with_seed(4);
        for _ in 0..100 {
            let v: Vec4f = sample(&mut rng, vec4(0.0, 1.0, 2.0, 3.0), vec4(1.0, 2.0, 3.0, 4.0));
            assert_eq!(v.map(f32::floor), vec4(0.0, 1.0, 2.0, 3.0));

            let w: Vec2<i64> = sample(&mut rng, vec2(10, 20), 30);
            assert!((10..30).contains(&w.x()) && (20..30).contains(&w.y()));

            let m: Mat3f = sample(&mut rng, -1.0, 1.0);
            assert!(m.as_flat_slice().iter().all(|e| e.abs() <= 1.0));
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let a: Vec4<u32> = sample(&mut fastrand::Rng::with_seed(99), 0, 1000);
        let b: Vec4<u32> = sample(&mut fastrand::Rng::with_seed(99), 0, 1000);
        assert_eq!(a, b);

        let r: f64 = random(5.0, 6.0);
        assert!((5.0..6.0).contains(&r));
    }

    #[test]
    fn random_rotations_are_unit() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut sum = Vec4::<f64>::ZERO;
        for _ in 0..2000 {
            let q = Quat::<f64>::random_rotation(&mut rng);
            assert_approx_eq!(q.length(), 1.0).abs(1e-12);
            sum += q.into_vec();
        }
        // Components are symmetric around zero.
        assert_approx_eq!(sum / 2000.0, Vec4::ZERO).abs(0.1);
    }
}
