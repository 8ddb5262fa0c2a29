//! Solvers for equation problems, finding roots of scalar functions.
//!
//! # Solvers
//!
//! - [`secant`]: derivative-free root finding from a single starting guess

pub mod secant;
