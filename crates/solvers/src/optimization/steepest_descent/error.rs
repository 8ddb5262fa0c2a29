use thiserror::Error;

use crate::optimization::{finite_difference, golden_section};

/// Errors that can occur during steepest descent.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial point has no coordinates")]
    EmptyPoint,

    #[error("initial point coordinate {index} is not finite: {value}")]
    NonFinitePoint { index: usize, value: f64 },

    #[error("invalid finite-difference steps: {0}")]
    Steps(#[from] finite_difference::Error),

    #[error("line search failed: {0}")]
    LineSearch(#[from] golden_section::Error),

    /// The objective was NaN or infinite at an accepted iterate.
    #[error("objective is not finite at iteration {iter}: {objective}")]
    NonFiniteObjective { iter: usize, objective: f64 },
}
