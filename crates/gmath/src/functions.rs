//! GLSL-style free functions.
//!
//! Most functions here are lifted component-wise over any [`Components`] type: scalars, vectors,
//! nested vectors, matrices and quaternions. Where a second or third operand is accepted as
//! `impl Broadcast<C>`, it can be either a container of the same type or a bare scalar that
//! applies to every component.
//!
//! Domain errors are not detected. They follow IEEE-754 semantics and produce NaN or infinity,
//! like `asin(2.0)` or `inversesqrt(0.0)` do.
//!
//! # Examples
//!
//! ```
//! # use gmath::*;
//! use gmath::functions::*;
//!
//! assert_eq!(mix(Vec3f::ZERO, vec3(10.0, 10.0, 10.0), 0.5), vec3(5.0, 5.0, 5.0));
//! assert_eq!(clamp(vec2(-3, 7), 0, 5), vec2(0, 5));
//! assert_eq!(normalize(vec3(3.0, 4.0, 0.0)), vec3(0.6, 0.8, 0.0));
//! assert!(all(less_than(vec2(1, 2), vec2(2, 3))));
//! ```

/// Declares functions applying a scalar operation to every component.
macro_rules! lift_unary {
    ($($(#[$attr:meta])* $name:ident: $bound:ident => $f:expr;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<C>(x: C) -> C
            where
                C: Components,
                C::Scalar: $bound,
            {
                super::map(x, $f)
            }
        )+
    };
}

mod cast;
mod common;
mod exponential;
mod geometric;
mod matrix;
mod relational;
mod trig;

pub use cast::*;
pub use common::*;
pub use exponential::*;
pub use geometric::*;
pub use matrix::*;
pub use relational::*;
pub use trig::*;

pub use crate::elementwise::{product, sum};

use crate::elementwise::{Broadcast, Components};

#[inline]
fn map<C: Components>(x: C, mut f: impl FnMut(C::Scalar) -> C::Scalar) -> C {
    x.map_components(&mut f)
}

#[inline]
fn zip<C: Components>(
    a: C,
    b: impl Broadcast<C>,
    mut f: impl FnMut(C::Scalar, C::Scalar) -> C::Scalar,
) -> C {
    a.zip_components(b.broadcast(), &mut f)
}

#[inline]
fn zip3<C: Components>(
    a: C,
    b: impl Broadcast<C>,
    c: impl Broadcast<C>,
    mut f: impl FnMut(C::Scalar, C::Scalar, C::Scalar) -> C::Scalar,
) -> C {
    a.zip3_components(b.broadcast(), c.broadcast(), &mut f)
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Mat3, Matrix, Vec3f};

    use super::*;

    #[test]
    fn scenarios() {
        assert_eq!(vec3(1, 2, 3) + vec3(4, 5, 6), vec3(5, 7, 9));
        assert_eq!(normalize(vec3(3.0, 4.0, 0.0)), vec3(0.6, 0.8, 0.0));
        assert_eq!(dot(vec3(1, 0, 0), vec3(0, 1, 0)), 0);
        assert_eq!(Mat3::<i32>::identity() * vec3(1, 2, 3), vec3(1, 2, 3));
        assert_eq!(
            mix(Vec3f::ZERO, vec3(10.0, 10.0, 10.0), 0.5),
            vec3(5.0, 5.0, 5.0)
        );
    }

    #[test]
    fn lifts_over_all_shapes() {
        assert_eq!(abs(-2.5f32), 2.5);
        assert_eq!(abs(vec3(-1, 2, -3)), vec3(1, 2, 3));
        assert_eq!(
            floor(Matrix::from_rows([[0.5, -0.5], [1.5, 2.0]])),
            Matrix::from_rows([[0.0, -1.0], [1.0, 2.0]])
        );
        let nested = vec3(vec3(1.0, 4.0, 9.0), vec3(16.0, 25.0, 36.0), Vec3f::ZERO);
        assert_eq!(
            sqrt(nested),
            vec3(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0), Vec3f::ZERO)
        );
    }
}
