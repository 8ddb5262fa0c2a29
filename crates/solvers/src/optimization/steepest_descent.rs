//! Steepest descent for multivariate minimization.
//!
//! Each iteration estimates the gradient by forward differences, searches
//! along the negated gradient for a step length `α ∈ [0, 1]`, and moves:
//!
//! ```text
//! S = −∇f(X)
//! α = argmin f(X + α·S)   over [0, 1]
//! X ← X + α·S
//! ```
//!
//! The run converges once `|f(X)| < tol`. This is a test on the objective
//! value, so it suits objectives whose minimum is zero (least-squares
//! residuals, for example).
//!
//! The step length comes from [`golden_section::line_search`] with the same
//! `tol` as its relative tolerance. Finite-difference steps are resolved once
//! from the starting point, see [`StepSizes`].
//!
//! [`golden_section::line_search`]: super::golden_section::line_search

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, StepSizes};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use sextant_core::Observer;

use super::finite_difference::{forward_gradient, validate_steps};
use super::golden_section::line_search;

/// Minimizes `f` starting from `x0`.
///
/// # Algorithm
///
/// 1. Validate `x0`, resolve the finite-difference steps and evaluate `f(x0)`.
/// 2. For each iteration:
///    - Estimate the gradient at the current iterate.
///    - Line search along the negated gradient over `α ∈ [0, 1]`.
///    - Step to the new iterate and evaluate the objective.
///    - Emit an [`Event`] to the observer.
///    - Stop if the observer asks to, or if `|f| < tol`.
/// 3. If the budget runs out, return the last iterate with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if `x0` is empty or non-finite, if the resolved steps do
/// not match `x0` or contain a zero (a zero coordinate with relative steps),
/// or if the objective is not finite at an accepted iterate.
pub fn minimize<F, Obs>(
    f: F,
    x0: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(&[f64]) -> f64,
    Obs: Observer<Event, Action>,
{
    if x0.is_empty() {
        return Err(Error::EmptyPoint);
    }
    if let Some((index, &value)) = x0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFinitePoint { index, value });
    }

    let steps = config.steps().resolve(x0);
    validate_steps(x0, &steps)?;

    let mut x = x0.to_vec();
    let mut objective = evaluate(&f, &x, 0)?;
    let mut history = vec![objective];

    for iter in 1..=config.max_iters() {
        let gradient = forward_gradient(&f, &x, objective, &steps)?;

        let alpha = line_search(
            |alpha| f(&descend(&x, &gradient, alpha)),
            [0.0, 1.0],
            config.tol(),
        )?
        .x;

        x = descend(&x, &gradient, alpha);
        objective = evaluate(&f, &x, iter)?;
        history.push(objective);

        let event = Event {
            iter,
            x: x.clone(),
            objective,
            gradient,
            alpha,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                objective,
                iters: iter,
                history,
            });
        }

        if objective.abs() < config.tol() {
            return Ok(Solution {
                status: Status::Converged,
                x,
                objective,
                iters: iter,
                history,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        objective,
        iters: config.max_iters(),
        history,
    })
}

/// Minimizes `f` without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<F>(f: F, x0: &[f64], config: &Config) -> Result<Solution, Error>
where
    F: Fn(&[f64]) -> f64,
{
    minimize(f, x0, config, ())
}

/// Returns `x − α·gradient`.
fn descend(x: &[f64], gradient: &[f64], alpha: f64) -> Vec<f64> {
    x.iter()
        .zip(gradient)
        .map(|(xi, gi)| xi - alpha * gi)
        .collect()
}

fn evaluate<F>(f: F, x: &[f64], iter: usize) -> Result<f64, Error>
where
    F: Fn(&[f64]) -> f64,
{
    let objective = f(x);
    if objective.is_finite() {
        Ok(objective)
    } else {
        Err(Error::NonFiniteObjective { iter, objective })
    }
}
