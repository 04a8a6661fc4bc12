use gmath_props::{suites, HarnessConfig};

fn check_all(seed: u64) {
    gmath_props::init_logger!();

    let config = HarnessConfig {
        seed,
        ..HarnessConfig::default()
    };
    for (stream, suite) in suites::all().iter().enumerate() {
        let report = suite.run(&config, stream as u64);
        assert!(!report.outcomes().is_empty(), "{} checks nothing", suite.name());
        assert!(report.all_passed(), "seed {seed}:\n{report}");
    }
}

#[test]
fn identities_hold() {
    check_all(0x5eed);
}

#[test]
fn identities_hold_with_other_seed() {
    check_all(20231019);
}

#[test]
fn negated_identities_fail_when_asserted() {
    use gmath::{Vec3, Vec3f};
    use gmath_props::Harness;

    let config = HarnessConfig {
        seed: 1,
        ..HarnessConfig::default()
    };
    let mut harness = Harness::new("regressions", &config, 0);
    harness.check("a / (b + c) == a / b + a / c", |s| {
        let [a, b, c]: [Vec3f; 3] = [(); 3].map(|_| s.unit());
        s.eq(&(a / (b + c)), &(a / b + a / c))
    });
    harness.check("a - b - c == a - (b - c)", |s| {
        let [a, b, c]: [Vec3<f64>; 3] = [(); 3].map(|_| s.signed());
        s.eq(&(a - b - c), &(a - (b - c)))
    });
    let report = harness.finish();
    assert_eq!(report.failed().count(), 2, "{report}");
    assert!(report.outcomes().iter().all(|o| o.fail_fraction() > 0.99));
}
