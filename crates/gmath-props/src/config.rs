use std::{env, str::FromStr};

use anyhow::{ensure, Context};

/// Parameters of a harness run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarnessConfig {
    /// Number of randomized trials per identity.
    pub trials: u32,
    /// Largest failure fraction that still counts as a pass.
    pub max_fail_fraction: f64,
    /// ULP factor of the approximate float comparison.
    pub ulp: u32,
    /// Base seed. Every suite derives its own generator from this.
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            max_fail_fraction: 0.1,
            ulp: gmath::approx::DEFAULT_ULP,
            seed: fastrand::u64(..),
        }
    }
}

impl HarnessConfig {
    /// Reads the configuration from the environment.
    ///
    /// `GMATH_TRIALS`, `GMATH_MAX_FAIL`, `GMATH_ULP` and `GMATH_SEED` override the defaults. Unset
    /// variables keep their default, unparseable ones are an error.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(trials) = parse(&lookup, "GMATH_TRIALS")? {
            config.trials = trials;
        }
        if let Some(max_fail) = parse(&lookup, "GMATH_MAX_FAIL")? {
            config.max_fail_fraction = max_fail;
        }
        if let Some(ulp) = parse(&lookup, "GMATH_ULP")? {
            config.ulp = ulp;
        }
        if let Some(seed) = parse(&lookup, "GMATH_SEED")? {
            config.seed = seed;
        }

        ensure!(config.trials > 0, "GMATH_TRIALS must be at least 1");
        ensure!(
            (0.0..=1.0).contains(&config.max_fail_fraction),
            "GMATH_MAX_FAIL must be between 0 and 1, got {}",
            config.max_fail_fraction,
        );
        Ok(config)
    }
}

fn parse<T>(lookup: impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .with_context(|| format!("invalid value {value:?} for {name}"))
        })
        .transpose()
}
