use std::{fs, path::Path};

use crate::{Error, Result};

/// How a substituted number is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberFormat {
    /// Six digits after the decimal point, as in `0.800000`.
    #[default]
    Fixed,

    /// Scientific notation with six digits after the point and a signed,
    /// two-digit exponent, as in `8.000000e-01`.
    Scientific,
}

impl NumberFormat {
    fn format(self, value: f64) -> String {
        match self {
            Self::Fixed => format!("{value:.6}"),
            Self::Scientific => scientific(value),
        }
    }
}

/// Formats `value` the way C-family streams do: `1.250000e-04`, `3.000000e+00`.
fn scientific(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // Non-finite values have no exponent.
        None => formatted,
    }
}

/// Outcome of a [`replace_var`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replaced {
    /// The token was replaced this many times and the file was rewritten.
    Occurrences(usize),

    /// The token does not appear in the file, which was left untouched.
    NotFound,
}

/// Replaces every occurrence of `var` in the file at `path` with `value`.
///
/// Occurrences are found left to right without overlap, so a replacement
/// that itself contains `var` is not expanded again.
///
/// # Errors
///
/// Returns an error if `var` is empty or the file cannot be read or written.
pub fn replace_var(
    path: impl AsRef<Path>,
    var: &str,
    value: f64,
    format: NumberFormat,
) -> Result<Replaced> {
    let path = path.as_ref();
    if var.is_empty() {
        return Err(Error::EmptyToken);
    }

    let contents = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;

    let count = contents.matches(var).count();
    if count == 0 {
        tracing::warn!(var, path = %path.display(), "token not found, file left unchanged");
        return Ok(Replaced::NotFound);
    }

    let updated = contents.replace(var, &format.format(value));
    fs::write(path, updated).map_err(|source| Error::io(path, source))?;

    Ok(Replaced::Occurrences(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scratch;

    const DECK: &str = "\
&flow
  mach = MACH
  alpha = ALPHA
  beta = ALPHA
/
";

    fn deck(name: &str) -> (scratch::Scratch, std::path::PathBuf) {
        let dir = scratch::dir(name);
        let path = dir.join("input.nml");
        fs::write(&path, DECK).expect("write");
        (dir, path)
    }

    #[test]
    fn replaces_every_occurrence() {
        let (_dir, path) = deck("replace");

        let result = replace_var(&path, "ALPHA", 2.5, NumberFormat::Fixed).expect("ok");

        assert_eq!(result, Replaced::Occurrences(2));
        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("alpha = 2.500000\n"));
        assert!(contents.contains("beta = 2.500000\n"));
        assert!(contents.contains("mach = MACH\n"));
    }

    #[test]
    fn scientific_format() {
        let (_dir, path) = deck("replace-sci");

        replace_var(&path, "MACH", 0.000_125, NumberFormat::Scientific).expect("ok");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("mach = 1.250000e-04\n"), "{contents}");
    }

    #[test]
    fn scientific_exponent_is_signed_and_padded() {
        assert_eq!(scientific(3.0), "3.000000e+00");
        assert_eq!(scientific(-1.5e12), "-1.500000e+12");
        assert_eq!(scientific(2.0e-123), "2.000000e-123");
        assert_eq!(scientific(f64::INFINITY), "inf");
    }

    #[test]
    fn missing_token_leaves_file_untouched() {
        let (_dir, path) = deck("replace-missing");

        let result = replace_var(&path, "GAMMA", 1.4, NumberFormat::default()).expect("ok");

        assert_eq!(result, Replaced::NotFound);
        assert_eq!(fs::read_to_string(&path).expect("read"), DECK);
    }

    #[test]
    fn replacement_containing_token_is_not_expanded() {
        let dir = scratch::dir("replace-self");
        let path = dir.join("deck");
        fs::write(&path, "x = 1\n").expect("write");

        let result = replace_var(&path, "1", 1.0, NumberFormat::Fixed).expect("ok");

        assert_eq!(result, Replaced::Occurrences(1));
        assert_eq!(fs::read_to_string(&path).expect("read"), "x = 1.000000\n");
    }

    #[test]
    fn rejects_empty_token_and_missing_file() {
        let dir = scratch::dir("replace-errors");

        assert!(matches!(
            replace_var(dir.join("deck"), "", 1.0, NumberFormat::Fixed),
            Err(Error::EmptyToken)
        ));
        assert!(matches!(
            replace_var(dir.join("deck"), "X", 1.0, NumberFormat::Fixed),
            Err(Error::Io { .. })
        ));
    }
}
