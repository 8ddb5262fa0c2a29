use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// The solve converges once `|f(x)| <= tol`.
    pub tol: f64,

    /// Upper bound on the number of iterates, counting both seeds.
    pub max_iters: usize,
}

/// Errors that can occur when validating a secant config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-12,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Validates that the tolerance is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is zero, negative, or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_tolerances() {
        for tol in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                tol,
                ..Config::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::Tol), "tol = {tol}");
        }
    }
}
