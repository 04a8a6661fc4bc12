use std::fmt;

use gmath::{
    approx::EpsilonEq,
    elementwise::Components,
    random::{sample, SampleUniform},
    Float,
};
use itertools::Itertools;

use crate::HarnessConfig;

/// Evaluates identities over randomly sampled operands and collects their [`Outcome`]s.
///
/// Each harness owns its generator, so harnesses can run on different threads without sharing
/// any state.
pub struct Harness {
    suite: String,
    config: HarnessConfig,
    rng: fastrand::Rng,
    outcomes: Vec<Outcome>,
}

impl Harness {
    /// Creates a harness for `suite`.
    ///
    /// The generator is seeded from `config.seed` and `stream`, so harnesses created with the
    /// same seed but different streams draw different operands.
    pub fn new(suite: impl Into<String>, config: &HarnessConfig, stream: u64) -> Self {
        let seed = config
            .seed
            .wrapping_add(stream.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            suite: suite.into(),
            config: *config,
            rng: fastrand::Rng::with_seed(seed),
            outcomes: Vec::new(),
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Runs `holds` once per trial and records how often it returned `false`.
    ///
    /// `holds` draws its operands from the [`Sampler`] it is passed.
    pub fn check<F>(&mut self, identity: &'static str, mut holds: F)
    where
        F: FnMut(&mut Sampler<'_>) -> bool,
    {
        let mut sampler = Sampler {
            rng: &mut self.rng,
            ulp: self.config.ulp,
        };
        let failures = (0..self.config.trials)
            .filter(|_| !holds(&mut sampler))
            .count() as u32;

        let outcome = Outcome {
            suite: self.suite.clone(),
            identity,
            trials: self.config.trials,
            failures,
        };
        if outcome.passed(self.config.max_fail_fraction) {
            log::debug!("{}: `{}` fails {:.3}", self.suite, identity, outcome.fail_fraction());
        } else {
            log::warn!(
                "{}: `{}` fails {:.3}, above the threshold of {}",
                self.suite,
                identity,
                outcome.fail_fraction(),
                self.config.max_fail_fraction,
            );
        }
        self.outcomes.push(outcome);
    }

    pub fn finish(self) -> Report {
        Report {
            max_fail_fraction: self.config.max_fail_fraction,
            outcomes: self.outcomes,
        }
    }
}

/// Source of operands for a single trial.
pub struct Sampler<'a> {
    rng: &'a mut fastrand::Rng,
    ulp: u32,
}

impl Sampler<'_> {
    /// Draws every component from `lower..upper`.
    pub fn range<C>(&mut self, lower: C::Scalar, upper: C::Scalar) -> C
    where
        C: Components,
        C::Scalar: SampleUniform,
    {
        sample(
            self.rng,
            C::splat_components(lower),
            C::splat_components(upper),
        )
    }

    /// Draws every component from `-1.0..1.0`.
    pub fn signed<C>(&mut self) -> C
    where
        C: Components,
        C::Scalar: Float + SampleUniform,
    {
        self.range(-<C::Scalar as gmath::One>::ONE, <C::Scalar as gmath::One>::ONE)
    }

    /// Draws every component from `0.0..1.0`.
    pub fn unit<C>(&mut self) -> C
    where
        C: Components,
        C::Scalar: Float + SampleUniform,
    {
        self.range(<C::Scalar as gmath::Zero>::ZERO, <C::Scalar as gmath::One>::ONE)
    }

    /// Draws every component from `lower..upper`, given as `f64`.
    pub fn between<C>(&mut self, lower: f64, upper: f64) -> C
    where
        C: Components,
        C::Scalar: Float + SampleUniform,
    {
        self.range(
            <C::Scalar as Float>::from_f64(lower),
            <C::Scalar as Float>::from_f64(upper),
        )
    }

    /// Approximate equality with the configured ULP factor.
    pub fn eq<C: EpsilonEq>(&self, a: &C, b: &C) -> bool {
        a.epsilon_eq(b, self.ulp)
    }

    /// Negation of [`Sampler::eq`].
    pub fn ne<C: EpsilonEq>(&self, a: &C, b: &C) -> bool {
        !self.eq(a, b)
    }
}

/// Result of checking one identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub suite: String,
    pub identity: &'static str,
    pub trials: u32,
    pub failures: u32,
}

impl Outcome {
    pub fn fail_fraction(&self) -> f64 {
        f64::from(self.failures) / f64::from(self.trials)
    }

    pub fn passed(&self, max_fail_fraction: f64) -> bool {
        self.fail_fraction() <= max_fail_fraction
    }
}

/// Collected [`Outcome`]s of one or more harnesses.
#[derive(Debug, Clone)]
pub struct Report {
    max_fail_fraction: f64,
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(max_fail_fraction: f64) -> Self {
        Self {
            max_fail_fraction,
            outcomes: Vec::new(),
        }
    }

    pub fn merge(&mut self, other: Report) {
        self.outcomes.extend(other.outcomes);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the outcomes whose failure fraction exceeds the threshold.
    pub fn failed(&self) -> impl Iterator<Item = &Outcome> + '_ {
        self.outcomes
            .iter()
            .filter(move |outcome| !outcome.passed(self.max_fail_fraction))
    }

    pub fn all_passed(&self) -> bool {
        self.failed().next().is_none()
    }
}

impl fmt::Display for Report {
    /// One line per outcome, grouped by suite.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .outcomes
            .iter()
            .map(|outcome| outcome.identity.len())
            .max()
            .unwrap_or(0);
        for (suite, outcomes) in &self.outcomes.iter().group_by(|outcome| outcome.suite.clone()) {
            writeln!(f, "{suite}")?;
            for outcome in outcomes {
                let status = if outcome.passed(self.max_fail_fraction) {
                    "ok"
                } else {
                    "FAILED"
                };
                writeln!(
                    f,
                    "  {:<width$}  {:>5.3}  {}",
                    outcome.identity,
                    outcome.fail_fraction(),
                    status,
                )?;
            }
        }
        Ok(())
    }
}
