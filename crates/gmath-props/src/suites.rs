//! The identity suites checked by the `gmath-props` binary.
//!
//! Every suite is generic over its element type and dimension. [`all`] instantiates them for
//! `f32` and `f64` (and `i32` for the integer suite) in 1 to 4 dimensions.

use gmath::{approx::EpsilonEq, random::SampleUniform, Float, ScalarCast};

use crate::{Harness, HarnessConfig, Report};

mod common;
mod exponential;
mod geometric;
mod integer;
mod operators;
mod trig;

/// Element types the float suites are instantiated with.
pub trait TestFloat: Float + SampleUniform + EpsilonEq + ScalarCast<f64> {}

impl<T> TestFloat for T where T: Float + SampleUniform + EpsilonEq + ScalarCast<f64> {}

/// A named group of identities.
pub struct Suite {
    name: String,
    body: fn(&mut Harness),
}

impl Suite {
    pub fn new(name: impl Into<String>, body: fn(&mut Harness)) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks every identity of the suite with a generator derived from `config.seed` and
    /// `stream`.
    pub fn run(&self, config: &HarnessConfig, stream: u64) -> Report {
        let mut harness = Harness::new(&self.name, config, stream);
        (self.body)(&mut harness);
        let report = harness.finish();
        let failed = report.failed().count();
        if failed == 0 {
            log::info!("{}: {} identities ok", self.name, report.outcomes().len());
        } else {
            log::info!(
                "{}: {} of {} identities above threshold",
                self.name,
                failed,
                report.outcomes().len(),
            );
        }
        report
    }
}

/// Returns every suite instantiation, in a fixed order.
pub fn all() -> Vec<Suite> {
    let mut suites = Vec::new();

    macro_rules! register {
        ($($module:ident<$($t:ty),+>;)+) => {
            $($(
                register!(@dims $module, $t, 1, 2, 3, 4);
            )+)+
        };
        (@dims $module:ident, $t:ty, $($n:literal),+) => {
            $(
                suites.push(Suite::new(
                    format!("{}<{}, {}>", stringify!($module), stringify!($t), $n),
                    $module::run::<$t, $n>,
                ));
            )+
        };
    }

    register! {
        operators<f32, f64>;
        trig<f32, f64>;
        exponential<f32, f64>;
        common<f32, f64>;
        geometric<f32, f64>;
    }
    suites.push(Suite::new("cross<f32>", geometric::run_cross::<f32>));
    suites.push(Suite::new("cross<f64>", geometric::run_cross::<f64>));
    suites.push(Suite::new("integer<i32, 1>", integer::run::<1>));
    suites.push(Suite::new("integer<i32, 2>", integer::run::<2>));
    suites.push(Suite::new("integer<i32, 3>", integer::run::<3>));
    suites.push(Suite::new("integer<i32, 4>", integer::run::<4>));

    suites
}
