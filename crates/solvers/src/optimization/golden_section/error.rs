use thiserror::Error;

use super::BracketError;

/// Errors that can occur during golden section search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// The tolerance does not narrow the bracket at all.
    #[error("tolerance {tol} must be smaller than the bracket width {width}")]
    ToleranceExceedsBracket { tol: f64, width: f64 },

    /// The tolerance is so small relative to the bracket width that the
    /// ratio underflows to zero and no finite step count reaches it.
    #[error("tolerance {tol} is too small for the bracket width {width}")]
    ToleranceUnderflow { tol: f64, width: f64 },

    /// A relative tolerance passed to [`line_search`](super::line_search)
    /// lies outside `(0, 1)`.
    #[error("relative tolerance {eps} must lie in (0, 1)")]
    InvalidRelativeTolerance { eps: f64 },

    /// The objective returned NaN, so points cannot be compared.
    #[error("objective is NaN at x = {x}")]
    NanObjective { x: f64 },
}
