//! Paragraph pipeline: split, validate, reflow, reassemble.
//!
//! Paragraphs flow one way: raw paragraphs are split into physical lines on
//! [`BREAK_MARKER`], each line is validated and reflowed, and every per-line
//! result is flattened in order into one break-joined blob. The first
//! validation failure aborts the whole run with no output for any paragraph.

use smallvec::SmallVec;
use tracing::debug;

use crate::BREAK_MARKER;
use crate::charset::validate_line;
use crate::error::Result;
use crate::reflow::reflow_line;

/// Wrap an ordered sequence of paragraphs into a single break-joined result.
///
/// All-or-nothing: an invalid character in any physical line of any
/// paragraph fails the entire call.
pub fn wrap_paragraphs(paragraphs: &[String], indent: bool) -> Result<String> {
    debug!(paragraphs = paragraphs.len(), indent, "wrapping selection");

    let mut finished: Vec<String> = Vec::new();
    for paragraph in paragraphs {
        let mapped: SmallVec<[String; 8]> = paragraph
            .split(BREAK_MARKER)
            .map(|line| {
                validate_line(line)?;
                Ok(reflow_line(line, indent))
            })
            .collect::<Result<_>>()?;
        finished.extend(mapped);
    }

    let result = finished.join("\r");
    debug!(bytes = result.len(), "wrap result assembled");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::wrap_paragraphs;
    use crate::error::ReflowError;

    fn paragraphs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn short_paragraphs_pass_through() {
        let input = paragraphs(&["first paragraph", "second paragraph"]);
        let result = wrap_paragraphs(&input, false).unwrap();
        assert_eq!(result, "first paragraph\rsecond paragraph");
    }

    #[test]
    fn embedded_breaks_split_into_physical_lines() {
        let input = paragraphs(&["one\rtwo", "three"]);
        let result = wrap_paragraphs(&input, false).unwrap();
        assert_eq!(result, "one\rtwo\rthree");
    }

    #[test]
    fn long_line_is_reflowed_within_its_paragraph() {
        let long = "a".repeat(80);
        let input = paragraphs(&["before", &long, "after"]);
        let result = wrap_paragraphs(&input, false).unwrap();
        let expected = format!("before\r{}\ra\r\rafter", "a".repeat(79));
        assert_eq!(result, expected);
    }

    #[test]
    fn invalid_character_anywhere_aborts_everything() {
        let input = paragraphs(&["fine", "also fine", "bad\u{2014}dash"]);
        let err = wrap_paragraphs(&input, false).unwrap_err();
        assert!(matches!(err, ReflowError::InvalidCharacter { .. }));
    }

    #[test]
    fn invalid_character_in_second_physical_line_aborts() {
        let input = paragraphs(&["ok\rnot\tok"]);
        assert!(wrap_paragraphs(&input, false).is_err());
    }

    #[test]
    fn order_is_preserved_across_paragraphs() {
        let input = paragraphs(&["b", "a", "c"]);
        let result = wrap_paragraphs(&input, false).unwrap();
        assert_eq!(result, "b\ra\rc");
    }

    #[test]
    fn wrapping_an_already_wrapped_result_is_a_noop() {
        let long = format!("alpha beta {}", "gamma".repeat(25));
        let input = paragraphs(&[&long]);
        let once = wrap_paragraphs(&input, false).unwrap();
        let twice = wrap_paragraphs(&[once.clone()], false).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_paragraph_list_yields_empty_result() {
        let result = wrap_paragraphs(&[], false).unwrap();
        assert_eq!(result, "");
    }
}
