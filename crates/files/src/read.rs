use std::{fmt::Display, fs, path::Path, str::FromStr};

use crate::{Error, Result};

/// Reads the whitespace-separated token at (`line`, `column`) and parses it.
///
/// Both indices are zero-based.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if it has no such line or
/// column, or if the token does not parse as `T`.
pub fn get_value<T>(path: impl AsRef<Path>, line: usize, column: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;

    let text = contents.lines().nth(line).ok_or_else(|| Error::MissingLine {
        path: path.to_path_buf(),
        line,
    })?;

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let token = tokens.get(column).ok_or_else(|| Error::MissingColumn {
        path: path.to_path_buf(),
        line,
        column,
        found: tokens.len(),
    })?;

    token.parse().map_err(|err: T::Err| Error::Parse {
        path: path.to_path_buf(),
        line,
        column,
        token: (*token).to_owned(),
        reason: err.to_string(),
    })
}
