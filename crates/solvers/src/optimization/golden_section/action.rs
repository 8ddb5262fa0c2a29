/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the estimate from the current bracket.
    StopEarly,

    /// Treat this point as having a worse objective than the other point.
    ///
    /// This causes the solver to shrink away from this point on the next
    /// step. Use it to steer the search away from a region the objective
    /// cannot describe well.
    AssumeWorse,
}
