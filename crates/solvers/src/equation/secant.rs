//! Secant method for scalar root finding.
//!
//! The solver seeds two iterates, `x0` and `1.1·x0`, and repeats the update
//!
//! ```text
//! x_i = x_{i−1} − f(x_{i−1})·(x_{i−1} − x_{i−2}) / (f(x_{i−1}) − f(x_{i−2}))
//! ```
//!
//! until `|f(x)| <= tol` or the iterate count reaches `max_iters`.
//! No derivative or bracket is required, but convergence is not guaranteed.

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use sextant_core::Observer;

/// Relative offset of the second seed from `x0`.
const SEED_OFFSET: f64 = 1.1;

/// Finds a root of `f` with the secant method, starting from `x0`.
///
/// Observers see each secant update and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns an error if the config is invalid, if `x0` is zero or non-finite,
/// if `f` returns a non-finite value, or if two consecutive residuals are
/// equal so the update is undefined.
pub fn solve<F, Obs>(f: F, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    #[allow(clippy::float_cmp)]
    if !x0.is_finite() || x0 == 0.0 {
        return Err(Error::InvalidSeed { x0 });
    }

    let x1 = SEED_OFFSET * x0;
    let mut prev_residual = evaluate(&f, x0)?;
    let mut residual = evaluate(&f, x1)?;
    let mut history = vec![x0, x1];

    let mut iters = 0;
    while residual.abs() > config.tol && history.len() < config.max_iters {
        let (x_prev, x) = (history[history.len() - 2], history[history.len() - 1]);

        let denominator = residual - prev_residual;
        #[allow(clippy::float_cmp)]
        if denominator == 0.0 {
            return Err(Error::ZeroDenominator { x, residual });
        }

        let next = x - residual * (x - x_prev) / denominator;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { x });
        }

        prev_residual = residual;
        residual = evaluate(&f, next)?;
        history.push(next);
        iters += 1;

        let event = Event {
            iter: iters,
            x: next,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, residual, iters, history));
        }
    }

    let status = if residual.abs() <= config.tol {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(finish(status, residual, iters, history))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, x0, config, ())
}

fn evaluate<F>(f: F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

fn finish(status: Status, residual: f64, iters: usize, history: Vec<f64>) -> Solution {
    // The history always holds both seeds.
    let x = history[history.len() - 1];
    Solution {
        status,
        x,
        residual,
        iters,
        history,
    }
}
