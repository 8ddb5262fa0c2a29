use super::*;

use std::cell::Cell;

use approx::assert_relative_eq;

#[test]
fn finds_double_root_of_parabola() {
    let config = Config {
        tol: 1e-8,
        max_iters: 1000,
    };

    let solution = solve_unobserved(|x| (x - 2.0).powi(2), 1.0, &config).expect("should succeed");

    // A double root converges linearly; |f| <= 1e-8 only pins x to 1e-4.
    assert_eq!(solution.status, Status::Converged);
    assert!(solution.residual.abs() <= 1e-8);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-4);
    assert_eq!(solution.history.len(), 21);
    assert_eq!(solution.iters, 19);
}

#[test]
fn finds_simple_root_quickly() {
    let solution =
        solve_unobserved(|x| x * x - 4.0, 1.0, &Config::default()).expect("should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-12);
    assert_eq!(solution.iters, solution.history.len() - 2);
    assert!(solution.iters < 10);
}

#[test]
fn solves_transcendental_equation() {
    let solution =
        solve_unobserved(|x: f64| x.cos() - x, 1.0, &Config::default()).expect("should succeed");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-12);
}

#[test]
fn history_starts_with_both_seeds() {
    let solution =
        solve_unobserved(|x| x * x - 4.0, -3.0, &Config::default()).expect("should succeed");

    assert_relative_eq!(solution.history[0], -3.0);
    assert_relative_eq!(solution.history[1], -3.3);
    assert_relative_eq!(solution.x, -2.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x, *solution.history.last().expect("non-empty"));
}

#[test]
fn budget_counts_seeds() {
    let config = Config {
        max_iters: 4,
        ..Config::default()
    };

    let solution = solve_unobserved(|x| x * x - 4.0, 1.0, &config).expect("should succeed");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.history.len(), 4);
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.residual, solution.x * solution.x - 4.0);
}

#[test]
fn observer_sees_each_update_and_can_stop() {
    let mut seen = Vec::new();
    let observer = |event: &Event| {
        seen.push(event.iter);
        assert_relative_eq!(event.residual, event.x * event.x - 4.0);
        (event.iter == 2).then_some(Action::StopEarly)
    };

    let solution = solve(|x| x * x - 4.0, 1.0, &Config::default(), observer).expect("ok");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn zero_seed_is_rejected_before_evaluating() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        x
    };

    assert_eq!(
        solve_unobserved(f, 0.0, &Config::default()),
        Err(Error::InvalidSeed { x0: 0.0 })
    );
    assert!(matches!(
        solve_unobserved(f, f64::NAN, &Config::default()),
        Err(Error::InvalidSeed { .. })
    ));
    assert_eq!(calls.get(), 0);
}

#[test]
fn flat_function_reports_zero_denominator() {
    let result = solve_unobserved(|_| 1.0, 1.0, &Config::default());

    assert!(matches!(
        result,
        Err(Error::ZeroDenominator { residual, .. }) if residual == 1.0
    ));
}

#[test]
fn non_finite_residual_is_an_error() {
    let result = solve_unobserved(|x: f64| 1.0 / (x - 1.1), 1.0, &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
}

#[test]
fn invalid_config_is_rejected() {
    let config = Config {
        tol: 0.0,
        ..Config::default()
    };

    assert_eq!(
        solve_unobserved(|x| x, 1.0, &config),
        Err(Error::InvalidConfig(ConfigError::Tol))
    );
}
