use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors returned by the file helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not exist or cannot be inspected.
    #[error("{} is not accessible", .path.display())]
    NotAccessible { path: PathBuf },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("search token is empty")]
    EmptyToken,

    #[error("line {line} not found in {}", .path.display())]
    MissingLine { path: PathBuf, line: usize },

    #[error("line {line} of {} has {found} columns, column {column} requested", .path.display())]
    MissingColumn {
        path: PathBuf,
        line: usize,
        column: usize,
        found: usize,
    },

    #[error("cannot parse {token:?} at line {line}, column {column} of {}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for the file helpers.
pub type Result<T> = std::result::Result<T, Error>;
