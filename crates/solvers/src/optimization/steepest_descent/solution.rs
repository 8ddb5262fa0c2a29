/// Indicates how the steepest descent run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached `|f(x)| < tol`.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a steepest descent run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Final iterate.
    pub x: Vec<f64>,

    /// Objective value at the final iterate.
    pub objective: f64,

    /// Number of descent iterations completed.
    pub iters: usize,

    /// Objective at the initial point followed by one value per iteration.
    pub history: Vec<f64>,
}
