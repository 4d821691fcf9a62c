//! Single-pass line reflow.
//!
//! One physical line goes in, a break-joined group of output lines comes
//! out, each rendered no wider than [`MAX_WIDTH`] columns. Cuts land on a
//! word boundary when a space was seen within the last [`LOOKBACK`] scanned
//! characters, and mid-word otherwise. The lookback consults only the single
//! most recent space, not the space nearest the limit; that keeps the scan
//! strictly single-pass.

use tracing::trace;

use crate::{BREAK_MARKER, INDENT_WIDTH, LOOKBACK, MAX_WIDTH};

/// Scan state for one pass over a physical line.
#[derive(Debug, Clone, Copy)]
struct Scan {
    /// Start index of the output line currently being accumulated.
    position: usize,
    /// Current scan index.
    counter: usize,
    /// Index of the most recent space at or after `position`.
    space: usize,
    /// Columns already consumed by the continuation indent on this output
    /// line: 0 on the first line, [`INDENT_WIDTH`] afterwards when indenting.
    skip: usize,
}

/// Reflow one physical line to [`MAX_WIDTH`] columns.
///
/// `txt` must be validated printable ASCII with no embedded break markers
/// (see [`crate::charset::validate_line`]). A line that already fits is
/// returned unchanged with no marker appended. A line that wraps comes back
/// as its output segments each terminated by [`BREAK_MARKER`], including the
/// last one; the uniform trailing marker is what lets the pipeline flatten
/// reflowed groups with a plain join.
///
/// When `indent` is set, every output line after the first is prefixed with
/// [`INDENT_WIDTH`] spaces, and the prefix counts toward the width limit.
///
/// A word-boundary cut consumes the space it lands on; a mid-word cut
/// consumes nothing. No other character is added, dropped, or reordered.
#[must_use]
pub fn reflow_line(txt: &str, indent: bool) -> String {
    let len = txt.len();
    if len <= MAX_WIDTH {
        return txt.to_string();
    }

    let bytes = txt.as_bytes();
    let indent_txt = " ".repeat(INDENT_WIDTH);
    let mut result = String::with_capacity(len + len / MAX_WIDTH * (INDENT_WIDTH + 1));
    let mut s = Scan {
        position: 0,
        counter: 0,
        space: 0,
        skip: 0,
    };

    while s.counter < len {
        if s.position == s.counter {
            // Start of a new output line.
            if indent && s.counter != 0 {
                s.skip = INDENT_WIDTH;
                result.push_str(&indent_txt);
            } else {
                s.skip = 0;
            }
        }

        if bytes[s.counter] == b' ' {
            s.space = s.counter;
        }

        if s.skip + s.counter - s.position >= MAX_WIDTH {
            if s.counter - s.space < LOOKBACK {
                // A space sits within the lookback window: cut there and
                // consume it.
                trace!(
                    position = s.position,
                    counter = s.counter,
                    space = s.space,
                    "word-boundary cut"
                );
                result.push_str(&txt[s.position..s.space]);
                result.push(BREAK_MARKER);
                s.space += 1;
                s.position = s.space;
                s.counter = s.space;
            } else {
                // No usable space: hard cut mid-word. The stale space marker
                // must not survive into the next line's distance check.
                trace!(
                    position = s.position,
                    counter = s.counter,
                    space = s.space,
                    "mid-word cut"
                );
                result.push_str(&txt[s.position..s.counter]);
                result.push(BREAK_MARKER);
                s.position = s.counter;
                s.space = s.counter;
            }
            // Re-run the new-line handling before scanning further.
            continue;
        }

        s.counter += 1;
    }

    if s.position != s.counter {
        result.push_str(&txt[s.position..s.counter]);
        result.push(BREAK_MARKER);
    }

    result
}
