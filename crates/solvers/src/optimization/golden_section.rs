//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It keeps two interior points a fraction
//! τ = 1 − 1/φ ≈ 0.382 in from each end, compares their objectives, and
//! discards the outer segment beyond the worse one. The surviving interior
//! point lands exactly on the golden section of the narrowed bracket, so each
//! step costs a single new evaluation.
//!
//! The number of steps is fixed before the search starts. With
//! `eps = tol / (upper − lower)` the solver takes
//! `ceil(ln(eps) / ln(1 − τ))` steps, which shrinks the bracket below `tol`.
//! The reported optimum is the mean of the final bounds and both interior
//! points.
//!
//! # When to Use
//!
//! - The objective function is unimodal (single optimum) on the bracket
//! - Derivative information is unavailable or expensive
//! - Function evaluations are relatively cheap
//!
//! # Line search
//!
//! [`line_search`] runs the same narrowing loop with a tolerance that is
//! already relative to the bracket width. [`steepest_descent`] uses it to
//! pick a step length along each descent direction.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per narrowing step. The two initial
//! interior evaluations are not reported. Observers can return
//! [`Action::StopEarly`] to halt immediately, or [`Action::AssumeWorse`] to
//! treat the new point as worse than `other` and steer the search away
//! from it.
//!
//! [`steepest_descent`]: super::steepest_descent

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use search::line_search;
pub use solution::{LineSearch, Solution, Status};

use sextant_core::Observer;

use search::search;

/// Finds the minimum of `f` on `bracket` using golden section search.
///
/// There is no starting guess: the search is determined entirely by
/// `bracket` and `config.tol()`.
///
/// The observer receives an [`Event`] after each narrowing step.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or its
/// width overflows, if `config.tol()` is not smaller than the bracket width
/// or is too small relative to it to reach, or if `f` returns NaN.
pub fn minimize<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, config, observer, |v| v)
}

/// Finds the minimum of `f` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    minimize(f, bracket, config, ())
}

/// Finds the maximum of `f` on `bracket` using golden section search.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn maximize<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, config, observer, |v| -v)
}

/// Finds the maximum of `f` without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn maximize_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    maximize(f, bracket, config, ())
}
