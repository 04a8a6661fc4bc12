use std::env;

use anyhow::{anyhow, bail};
use gmath_props::{suites, HarnessConfig, Report};
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    gmath_props::init_logger!();

    let config = HarnessConfig::from_env()?;
    let filter = env::args_os()
        .nth(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("suite filter {arg:?} is not valid UTF-8"))
        })
        .transpose()?;

    let suites = suites::all()
        .into_iter()
        .filter(|suite| filter.as_deref().map_or(true, |f| suite.name().contains(f)))
        .collect::<Vec<_>>();
    if suites.is_empty() {
        bail!("no suite matches {:?}", filter.unwrap_or_default());
    }

    log::info!(
        "checking {} suites, {} trials per identity, seed {}",
        suites.len(),
        config.trials,
        config.seed,
    );

    let reports = suites
        .par_iter()
        .enumerate()
        .map(|(stream, suite)| suite.run(&config, stream as u64))
        .collect::<Vec<_>>();
    let mut report = Report::new(config.max_fail_fraction);
    for r in reports {
        report.merge(r);
    }

    print!("{report}");

    let failed = report.failed().count();
    if failed > 0 {
        bail!(
            "{failed} of {} identities fail more often than {} (seed {})",
            report.outcomes().len(),
            config.max_fail_fraction,
            config.seed,
        );
    }
    Ok(())
}
