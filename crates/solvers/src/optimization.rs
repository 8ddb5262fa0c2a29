//! Solvers for optimization problems, minimizing or maximizing an objective.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search over a bracketed interval for
//!   unimodal functions; also provides the [`golden_section::line_search`]
//!   used by steepest descent
//! - [`finite_difference`]: one-sided gradient estimates for vector objectives
//! - [`steepest_descent`]: gradient descent with an exact golden section line
//!   search along each descent direction

pub mod finite_difference;
pub mod golden_section;
pub mod steepest_descent;
