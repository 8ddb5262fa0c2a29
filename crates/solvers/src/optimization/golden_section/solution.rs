/// Indicates how the golden section search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed every narrowing step required by the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Optimum estimate: the mean of the final bounds and interior points.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Outer bounds when the solver finished.
    pub bracket: [f64; 2],

    /// Number of narrowing steps taken.
    pub iters: usize,
}

/// The result of a [`line_search`](super::line_search).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    /// Step estimate: the mean of the final bounds and interior points.
    pub x: f64,

    /// Number of narrowing steps taken.
    pub iters: usize,
}
