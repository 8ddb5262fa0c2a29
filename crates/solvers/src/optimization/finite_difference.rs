//! Forward-difference gradient estimates for vector objectives.
//!
//! [`forward_gradient`] perturbs one coordinate at a time and divides the
//! change in objective by the step:
//!
//! ```text
//! grad[i] = (f(x + steps[i]·eᵢ) − f(x)) / steps[i]
//! ```
//!
//! The caller supplies `f(x)`, so an `n`-dimensional gradient costs exactly
//! `n` evaluations. The truncation error is `O(steps[i])`.

use thiserror::Error;

/// Errors that can occur when estimating a gradient.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The point and step vectors have different lengths.
    #[error("point has {point} dimensions but {steps} steps were given")]
    DimensionMismatch { point: usize, steps: usize },

    /// A step is zero or non-finite, so the difference quotient is undefined.
    #[error("step {index} must be finite and non-zero, got {step}")]
    InvalidStep { index: usize, step: f64 },
}

/// Estimates the gradient of `f` at `x` by forward differences.
///
/// `fx` must equal `f(x)`; it is trusted and not re-evaluated.
///
/// # Errors
///
/// Returns an error if `steps` has a different length than `x` or contains a
/// zero or non-finite step. Validation happens before any evaluation.
pub fn forward_gradient<F>(f: F, x: &[f64], fx: f64, steps: &[f64]) -> Result<Vec<f64>, Error>
where
    F: Fn(&[f64]) -> f64,
{
    validate_steps(x, steps)?;

    let mut perturbed = x.to_vec();
    let gradient = steps
        .iter()
        .enumerate()
        .map(|(i, &step)| {
            perturbed[i] = x[i] + step;
            let f_step = f(&perturbed);
            perturbed[i] = x[i];
            (f_step - fx) / step
        })
        .collect();

    Ok(gradient)
}

/// Returns per-coordinate steps `x[i] / divisor`.
///
/// A zero coordinate yields a zero step, which [`forward_gradient`] rejects.
#[must_use]
pub fn relative_steps(x: &[f64], divisor: f64) -> Vec<f64> {
    x.iter().map(|xi| xi / divisor).collect()
}

/// Checks that `steps` matches `x` in length and every step is usable.
///
/// # Errors
///
/// Returns the first problem found, as described on [`forward_gradient`].
pub fn validate_steps(x: &[f64], steps: &[f64]) -> Result<(), Error> {
    if x.len() != steps.len() {
        return Err(Error::DimensionMismatch {
            point: x.len(),
            steps: steps.len(),
        });
    }

    match steps
        .iter()
        .enumerate()
        .find(|&(_, step)| !step.is_finite() || *step == 0.0)
    {
        Some((index, &step)) => Err(Error::InvalidStep { index, step }),
        None => Ok(()),
    }
}
