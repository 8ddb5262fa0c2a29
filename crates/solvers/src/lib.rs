//! Numerical solvers for the Sextant toolkit.
//!
//! Every solver takes a plain closure as its objective. Any fixed parameters
//! the objective needs are captured by the closure rather than passed through
//! the solver.
//!
//! - [`optimization::golden_section`]: bracketed scalar minimization
//! - [`optimization::finite_difference`]: forward-difference gradients
//! - [`optimization::steepest_descent`]: multivariate minimization
//! - [`equation::secant`]: derivative-free scalar root finding
//!
//! Solvers report progress through a [`sextant_core::Observer`], and each one
//! returns a `Solution` whose `status` distinguishes convergence from an
//! exhausted iteration budget.

pub mod equation;
pub mod optimization;
