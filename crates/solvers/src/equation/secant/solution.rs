/// Indicates how the secant solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual reached `|f(x)| <= tol`.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a secant solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Latest iterate.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Number of secant updates performed.
    pub iters: usize,
    /// Every iterate in order, starting with both seeds.
    pub history: Vec<f64>,
}
