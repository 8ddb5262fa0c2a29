//! Reusable observers for the Sextant solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the golden section, steepest descent and secant solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIter`], [`HasResidual`], [`HasObjective`], [`Tracked`],
//!   [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`TracingObserver`] logs each iteration through `tracing`.
//! - [`History`] records each tracked value and can stop at a target.
//!
//! [`Observer`]: sextant_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`Tracked`]: traits::Tracked
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod history;
mod trace;

pub use history::History;
pub use trace::TracingObserver;
