//! Randomized checks of the algebraic identities that `gmath` is expected to satisfy.
//!
//! Floating-point identities do not hold exactly, and some only hold for most operands. Instead of
//! a binary pass/fail, every identity is evaluated over many randomly sampled operands and its
//! *failure fraction* is reported. An identity counts as broken when that fraction exceeds the
//! configured threshold (see [`HarnessConfig`]).
//!
//! Identities that are expected *not* to hold (like `a / (b + c) == a / b + a / c`) are checked in
//! negated form, so a regression that makes them hold shows up as a high failure fraction.
//!
//! # Examples
//!
//! ```
//! use gmath::Vec3f;
//! use gmath_props::{Harness, HarnessConfig};
//!
//! let config = HarnessConfig { seed: 7, ..HarnessConfig::default() };
//! let mut harness = Harness::new("example", &config, 0);
//! harness.check("a + b == b + a", |s| {
//!     let (a, b): (Vec3f, Vec3f) = (s.signed(), s.signed());
//!     s.eq(&(a + b), &(b + a))
//! });
//! assert!(harness.finish().all_passed());
//! ```

use log::LevelFilter;

mod config;
mod harness;
pub mod suites;

pub use config::HarnessConfig;
pub use harness::{Harness, Outcome, Report, Sampler};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate log at *debug* level unless `RUST_LOG` says otherwise.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
