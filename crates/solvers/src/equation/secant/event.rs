/// Event emitted after each secant update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Update counter (1-based). The two seeds are not reported.
    pub iter: usize,

    /// The new iterate.
    pub x: f64,

    /// Residual `f(x)` at the new iterate.
    pub residual: f64,
}
