//! Core traits shared by the Sextant solvers.
//!
//! Solvers in `sextant-solvers` accept plain closures as objectives and
//! report progress through an [`Observer`]. Keeping the observer contract in
//! its own crate lets `sextant-observers` (and user code) implement it
//! without depending on any particular solver.

mod observer;

pub use observer::Observer;
