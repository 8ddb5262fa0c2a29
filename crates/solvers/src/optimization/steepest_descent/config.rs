use thiserror::Error;

use crate::optimization::finite_difference::relative_steps;

/// Default divisor for relative finite-difference steps.
const DEFAULT_STEP_DIVISOR: f64 = 2000.0;

/// How the finite-difference steps are chosen.
///
/// Steps are resolved once from the initial point and held fixed for the
/// whole run; they do not follow the iterate.
#[derive(Debug, Clone, PartialEq)]
pub enum StepSizes {
    /// Each step is `x0[i] / divisor`.
    Relative(f64),

    /// Explicit per-coordinate steps.
    Fixed(Vec<f64>),
}

impl Default for StepSizes {
    fn default() -> Self {
        Self::Relative(DEFAULT_STEP_DIVISOR)
    }
}

impl StepSizes {
    /// Resolves the step vector for a run starting at `x0`.
    pub(super) fn resolve(&self, x0: &[f64]) -> Vec<f64> {
        match self {
            Self::Relative(divisor) => relative_steps(x0, *divisor),
            Self::Fixed(steps) => steps.clone(),
        }
    }
}

/// Configuration for the steepest descent solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    steps: StepSizes,
}

/// Errors that can occur when validating a steepest descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The tolerance also serves as the line search's relative tolerance over
    /// the unit step interval, so it must lie strictly inside `(0, 1)`.
    #[error("tol must be finite and lie in (0, 1)")]
    Tol,

    #[error("relative step divisor must be finite and non-zero")]
    StepDivisor,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 1000).unwrap()
    }
}

impl Config {
    /// Creates a new config with relative finite-difference steps.
    ///
    /// The run converges once `|f(x)| < tol`. `tol` is also the relative
    /// tolerance of each line search over `α ∈ [0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-finite or outside `(0, 1)`.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 || tol >= 1.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self {
            tol,
            max_iters,
            steps: StepSizes::default(),
        })
    }

    /// Replaces the finite-difference step strategy.
    ///
    /// Fixed steps are checked against the initial point when the solver runs.
    ///
    /// # Errors
    ///
    /// Returns an error if a relative divisor is zero or non-finite.
    pub fn with_steps(mut self, steps: StepSizes) -> Result<Self, ConfigError> {
        if let StepSizes::Relative(divisor) = steps
            && (!divisor.is_finite() || divisor == 0.0)
        {
            return Err(ConfigError::StepDivisor);
        }

        self.steps = steps;
        Ok(self)
    }

    /// Returns the convergence tolerance on `|f(x)|`.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of descent iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the finite-difference step strategy.
    #[must_use]
    pub fn steps(&self) -> &StepSizes {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tol_must_lie_inside_unit_interval() {
        for tol in [0.0, -1e-6, 1.0, 3.0, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(tol, 10), Err(ConfigError::Tol), "tol = {tol}");
        }
        assert!(Config::new(0.5, 10).is_ok());
    }

    #[test]
    fn default_uses_relative_steps() {
        let config = Config::default();
        assert_eq!(config.steps(), &StepSizes::Relative(2000.0));

        let steps = config.steps().resolve(&[5.0, 2.2]);
        assert_relative_eq!(steps[0], 0.0025);
        assert_relative_eq!(steps[1], 0.0011);
    }

    #[test]
    fn fixed_steps_resolve_verbatim() {
        let config = Config::default()
            .with_steps(StepSizes::Fixed(vec![1e-7, 2e-7]))
            .expect("fixed steps are checked at solve time");

        assert_eq!(config.steps().resolve(&[5.0, 2.2]), vec![1e-7, 2e-7]);
    }

    #[test]
    fn rejects_degenerate_divisor() {
        assert_eq!(
            Config::default().with_steps(StepSizes::Relative(0.0)),
            Err(ConfigError::StepDivisor)
        );
        assert_eq!(
            Config::default().with_steps(StepSizes::Relative(f64::NAN)),
            Err(ConfigError::StepDivisor)
        );
    }
}
