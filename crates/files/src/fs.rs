use std::{fs, path::Path};

use crate::{Error, Result};

/// Returns true if `path` exists and its metadata can be read.
pub fn accessible(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Copies `src` to `dst`, returning the number of bytes copied.
///
/// # Errors
///
/// Returns [`Error::NotAccessible`] if `src` does not exist, or
/// [`Error::Io`] if the copy fails.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    if !accessible(src) {
        return Err(Error::NotAccessible {
            path: src.to_path_buf(),
        });
    }

    fs::copy(src, dst).map_err(|source| Error::io(dst, source))
}

/// Creates the directory `path` and any missing parents.
///
/// Returns `false` when the directory already existed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created, for example
/// because a file already occupies `path`.
pub fn make_dir(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();

    if path.is_dir() {
        tracing::debug!(path = %path.display(), "directory already exists");
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|source| Error::io(path, source))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scratch;

    #[test]
    fn copies_file_contents() {
        let dir = scratch::dir("copy");
        let (src, dst) = (dir.join("deck.in"), dir.join("run-1.in"));
        fs::write(&src, "mach = 0.8\n").expect("write");

        let bytes = copy_file(&src, &dst).expect("copy");

        assert_eq!(bytes, 11);
        assert_eq!(fs::read_to_string(&dst).expect("read"), "mach = 0.8\n");
    }

    #[test]
    fn copy_requires_existing_source() {
        let dir = scratch::dir("copy-missing");

        let result = copy_file(dir.join("nope"), dir.join("dst"));

        assert!(matches!(result, Err(Error::NotAccessible { .. })));
        assert!(!accessible(dir.join("dst")));
    }

    #[test]
    fn make_dir_creates_parents_once() {
        let dir = scratch::dir("mkdir");
        let nested = dir.join("case-1").join("output");

        assert!(!accessible(&nested));
        assert!(make_dir(&nested).expect("create"));
        assert!(nested.is_dir());
        assert!(!make_dir(&nested).expect("already exists"));
    }

    #[test]
    fn make_dir_fails_over_a_file() {
        let dir = scratch::dir("mkdir-file");
        let file = dir.join("taken");
        fs::write(&file, "").expect("write");

        assert!(matches!(make_dir(&file), Err(Error::Io { .. })));
    }
}
