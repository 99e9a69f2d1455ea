//! tests for the contract shared by every solver: entry checks,
//! configuration, result reporting
use approx::assert_abs_diff_eq;
use rootsolve::root_finding::algorithms::Algorithm;
use rootsolve::root_finding::bisection::bisection;
use rootsolve::root_finding::config::{SolverCfg, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use rootsolve::root_finding::errors::{ConfigError, RootFindingError};
use rootsolve::root_finding::secant::secant;

type TestResult = Result<(), RootFindingError>;

fn parabola(x: f64) -> f64 {
    -(x - 2.0) * (x - 2.0) + 1.0
}

#[test]
fn every_method_finds_3_on_parabola() -> TestResult {
    for algorithm in Algorithm::ALL {
        let res = algorithm.solve(parabola, 1.5, 4.0, SolverCfg::new())?;

        assert!(res.converged, "{algorithm} did not converge");
        assert_eq!(res.algorithm, algorithm);
        assert_abs_diff_eq!(res.root, 3.0, epsilon = 1e-8);
        assert_abs_diff_eq!(parabola(res.root), 0.0, epsilon = 1e-7);
    }
    Ok(())
}

#[test]
fn every_method_finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    for algorithm in Algorithm::ALL {
        let res = algorithm.solve(f, 0.0, 2.0, SolverCfg::new())?;

        assert!(res.converged, "{algorithm} did not converge");
        assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-8);
    }
    Ok(())
}

#[test]
fn invalid_bracket_evaluates_only_endpoints() {
    for algorithm in Algorithm::ALL {
        let mut calls = 0;
        let err = algorithm
            .solve(|_x: f64| { calls += 1; 1.0 }, 0.0, 1.0, SolverCfg::new())
            .unwrap_err();

        assert!(matches!(
            err,
            RootFindingError::InvalidBracket { fa, fb, .. } if fa == 1.0 && fb == 1.0
        ));
        assert_eq!(calls, 2, "{algorithm} kept evaluating");
    }
}

#[test]
fn identical_inputs_give_identical_results() -> TestResult {
    let f = |x: f64| x.exp() - 3.0;

    for algorithm in Algorithm::ALL {
        let first  = algorithm.solve(f, 0.0, 2.0, SolverCfg::new())?;
        let second = algorithm.solve(f, 0.0, 2.0, SolverCfg::new())?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn non_convergence_policies_differ() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new().set_tolerance(1e-12)?.set_max_iter(5)?;

    for algorithm in Algorithm::ALL {
        let res = algorithm.solve(f, 1.0, 2.0, cfg)?;
        assert!(!res.converged);

        match algorithm {
            Algorithm::Secant => assert_eq!(res.root, 0.0),
            _                 => assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 0.1),
        }
    }
    Ok(())
}

#[test]
fn verbose_does_not_change_results() -> TestResult {
    let quiet = SolverCfg::new();
    let loud  = SolverCfg::new().set_verbose(true);

    for algorithm in Algorithm::ALL {
        let a = algorithm.solve(parabola, 1.5, 4.0, quiet)?;
        let b = algorithm.solve(parabola, 1.5, 4.0, loud)?;
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn solvers_run_concurrently() -> TestResult {
    let expected = Algorithm::Brent.solve(parabola, 1.5, 4.0, SolverCfg::new())?;

    std::thread::scope(|s| -> TestResult {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| Algorithm::Brent.solve(parabola, 1.5, 4.0, SolverCfg::new())))
            .collect();
        for handle in handles {
            let res = handle.join().expect("solver thread panicked")?;
            assert_eq!(res, expected);
        }
        Ok(())
    })
}

#[test]
fn default_config() {
    let cfg = SolverCfg::default();

    assert_eq!(cfg.tolerance(), DEFAULT_TOLERANCE);
    assert_eq!(cfg.tolerance(), 1e-8);
    assert_eq!(cfg.max_iter(), DEFAULT_MAX_ITER);
    assert_eq!(cfg.max_iter(), 500);
    assert!(!cfg.verbose());
}

#[test]
fn invalid_tolerance() {
    for bad in [0.0, -1e-8, f64::NAN, f64::INFINITY] {
        let err = SolverCfg::new().set_tolerance(bad).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTolerance { .. }));
    }
}

#[test]
fn invalid_max_iter() {
    let err = SolverCfg::new().set_max_iter(0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidMaxIter { got: 0 });
}

#[test]
fn config_error_converts() {
    let err: RootFindingError = ConfigError::InvalidMaxIter { got: 0 }.into();

    assert!(matches!(err, RootFindingError::Config(ConfigError::InvalidMaxIter { got: 0 })));
    assert_eq!(err.to_string(), "invalid max_iter: must be >= 1. got max_iter=0");
}

#[test]
fn summary_formatting() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new().set_tolerance(1e-12)?.set_max_iter(5)?;
    let res = bisection(f, 1.0, 2.0, cfg)?;

    assert_eq!(
        res.to_string(),
        "Bisection method results:\n\
         \x20   Root: x = 1.406250000000\n\
         \x20   Iterations: 5\n\
         \x20   Error: 3.125e-2\n\
         \x20   Converged: false"
    );
    Ok(())
}

#[test]
fn secant_summary_reports_relative_error() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = secant(f, 0.0, 10.0, SolverCfg::new())?;
    let summary = res.to_string();

    assert!(summary.starts_with("Secant method results:"));
    assert!(summary.contains("Root: x = 3.000000000000"));
    assert!(summary.contains("Relative error: 0e0"));
    Ok(())
}
