use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during a secant solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The second seed is `1.1·x0`, which coincides with `x0` when it is zero.
    #[error("seed must be finite and non-zero, got {x0}")]
    InvalidSeed { x0: f64 },

    /// Two consecutive iterates produced the same residual.
    #[error("secant denominator is zero at x = {x} (residual {residual})")]
    ZeroDenominator { x: f64, residual: f64 },

    #[error("residual is not finite at x = {x}: {residual}")]
    NonFiniteResidual { x: f64, residual: f64 },

    /// The update overflowed even though the denominator was non-zero.
    #[error("secant update from x = {x} is not finite")]
    NonFiniteIterate { x: f64 },
}
