//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIter`]: events that carry an iteration counter
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasObjective`]: events that carry an objective value
//! - [`Tracked`]: events summarized by one named value, for loggers and recorders
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use sextant_core::Observer;
//! use sextant_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use sextant_solvers::{
    equation::secant,
    optimization::{golden_section, steepest_descent},
};

/// An event that carries a 1-based iteration counter.
pub trait HasIter {
    /// Returns the iteration this event belongs to.
    fn iter(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event summarized by a single named value.
///
/// Optimization events track their objective and root-finding events track
/// their residual.
pub trait Tracked: HasIter {
    /// Name of the tracked quantity.
    const QUANTITY: &'static str;

    /// Returns the tracked value.
    fn value(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the other.
    fn assume_worse() -> Self;
}

// --- golden_section ---

impl HasIter for golden_section::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for golden_section::Event {
    fn objective(&self) -> f64 {
        self.point.objective
    }
}

impl Tracked for golden_section::Event {
    const QUANTITY: &'static str = "objective";

    fn value(&self) -> f64 {
        HasObjective::objective(self)
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

// --- steepest_descent ---

impl HasIter for steepest_descent::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for steepest_descent::Event {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl Tracked for steepest_descent::Event {
    const QUANTITY: &'static str = "objective";

    fn value(&self) -> f64 {
        self.objective
    }
}

impl CanStopEarly for steepest_descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- secant ---

impl HasIter for secant::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for secant::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl Tracked for secant::Event {
    const QUANTITY: &'static str = "residual";

    fn value(&self) -> f64 {
        self.residual
    }
}

impl CanStopEarly for secant::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
