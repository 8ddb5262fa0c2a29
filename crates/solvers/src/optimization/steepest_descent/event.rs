/// Event emitted after each steepest descent iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The updated iterate.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient estimate at the previous iterate.
    ///
    /// The step was taken along its negation.
    pub gradient: Vec<f64>,

    /// Step length chosen by the line search along `-gradient`.
    pub alpha: f64,
}
