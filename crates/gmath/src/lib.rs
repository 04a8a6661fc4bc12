//! Fixed-size vectors, matrices and quaternions with a GLSL-flavored function library.
//!
//! All dimensions are const generic parameters, so shape mismatches are compile errors and every
//! value is a plain `Copy` array with no heap allocation.
//!
//! - [`Vector<T, N>`] is an `N`-element vector. Operators act element-wise, and a bare scalar on
//!   either side applies to every element.
//! - [`Matrix<T, C, R>`] has `C` columns of `R` rows each, stored column-major without padding.
//!   [`Mat2x3`] therefore has 2 columns and 3 rows, matching GLSL's `mat2x3`.
//! - [`Quat<T>`] is a quaternion stored as `(w, x, y, z)`, used to represent 3D rotations.
//!
//! The [`functions`] module provides the GLSL built-ins (`mix`, `clamp`, `normalize`,
//! `smoothstep`, ...) lifted over every container type via the [`elementwise`] engine. Approximate
//! float comparisons live in [`approx`], uniform sampling in [`random`] and hashing in [`hash`].
//!
//! # Examples
//!
//! ```
//! use gmath::*;
//!
//! let m = Mat3::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
//! assert_eq!(m * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
//! assert_eq!(m.determinant(), 1.0);
//!
//! let q = Quatf::from_rotation_z(std::f32::consts::FRAC_PI_2);
//! assert_approx_eq!(q * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)).abs(1e-6);
//! ```

pub mod approx;
pub mod elementwise;
pub mod functions;
pub mod hash;
mod matrix;
mod quat;
pub mod random;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
