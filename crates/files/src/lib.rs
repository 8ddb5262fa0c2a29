//! Text-file helpers for batch optimization runs.
//!
//! An external simulation is often driven by a templated input deck: the
//! objective substitutes trial values into the deck with [`replace_var`],
//! runs the simulation, and reads a result back with [`get_value`].
//!
//! Every helper reports failure as an [`Error`]; none of them panic or exit.

mod error;
mod fs;
mod read;
mod replace;

pub use error::{Error, Result};
pub use fs::{accessible, copy_file, make_dir};
pub use read::get_value;
pub use replace::{NumberFormat, Replaced, replace_var};
