//! Printable-ASCII validation for physical lines.
//!
//! The reflower indexes lines by byte, so every line must be pure printable
//! ASCII before it reaches the scan. One bad character anywhere aborts the
//! whole wrap operation.

use crate::error::{ReflowError, Result};

/// Inclusive printable range: space through tilde.
const PRINTABLE_MIN: char = ' ';
const PRINTABLE_MAX: char = '~';

/// Check that every character of `line` falls in [32, 126].
///
/// Returns the byte offset and value of the first offender. Positions before
/// the offender are guaranteed ASCII, so the reported offset is also the
/// character index.
pub fn validate_line(line: &str) -> Result<()> {
    for (position, ch) in line.char_indices() {
        if !(PRINTABLE_MIN..=PRINTABLE_MAX).contains(&ch) {
            return Err(ReflowError::InvalidCharacter { position, ch });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_line;
    use crate::error::ReflowError;

    #[test]
    fn accepts_empty_line() {
        assert!(validate_line("").is_ok());
    }

    #[test]
    fn accepts_full_printable_range() {
        let all: String = (32u8..=126).map(char::from).collect();
        assert!(validate_line(&all).is_ok());
    }

    #[test]
    fn rejects_tab() {
        let err = validate_line("before\tafter").unwrap_err();
        match err {
            ReflowError::InvalidCharacter { position, ch } => {
                assert_eq!(position, 6);
                assert_eq!(ch, '\t');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_del() {
        assert!(validate_line("\u{7f}").is_err());
    }

    #[test]
    fn rejects_non_ascii() {
        let err = validate_line("caf\u{e9}").unwrap_err();
        match err {
            ReflowError::InvalidCharacter { position, ch } => {
                assert_eq!(position, 3);
                assert_eq!(ch, '\u{e9}');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_first_offender_only() {
        let err = validate_line("a\nb\nc").unwrap_err();
        match err {
            ReflowError::InvalidCharacter { position, .. } => assert_eq!(position, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
