use thiserror::Error;

/// Configuration for the golden section solver.
///
/// The search runs a fixed number of narrowing steps computed up front from
/// `tol` and the bracket width, so there is no separate iteration limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1e-8).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated absolute x tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-positive or non-finite.
    pub fn new(tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self { tol })
    }

    /// Returns the absolute tolerance on the final bracket width.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_or_non_finite_tol() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Tol));
        assert_eq!(Config::new(-1e-6), Err(ConfigError::Tol));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Tol));
        assert_eq!(Config::new(f64::INFINITY), Err(ConfigError::Tol));
    }

    #[test]
    fn accepts_positive_tol() {
        let config = Config::new(1e-6).expect("valid tol");
        assert!((config.tol() - 1e-6).abs() < f64::EPSILON);
    }
}
