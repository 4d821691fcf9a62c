#![forbid(unsafe_code)]

//! Fixed-width paragraph reflow for printable ASCII text.
//!
//! The core is a single-pass line reflower: it rewraps one physical line so
//! that no output line exceeds [`MAX_WIDTH`] columns, cutting at a word
//! boundary when a space was seen within the last [`LOOKBACK`] characters and
//! mid-word otherwise. Around it sits a pipeline that splits paragraphs into
//! physical lines on [`BREAK_MARKER`], validates each line against the
//! printable ASCII range, reflows it, and joins everything back into a single
//! break-joined result.
//!
//! Where the text comes from and where the result goes are host concerns,
//! modeled by the [`TextSource`] and [`TextSink`] traits in [`session`].
//!
//! # Example
//! ```
//! use parwrap_core::{MAX_WIDTH, reflow_line};
//!
//! let long = "word ".repeat(40);
//! let wrapped = reflow_line(long.trim_end(), false);
//! for segment in wrapped.split('\r').filter(|s| !s.is_empty()) {
//!     assert!(segment.len() <= MAX_WIDTH);
//! }
//! ```

pub mod charset;
pub mod error;
pub mod pipeline;
pub mod reflow;
pub mod session;

pub use charset::validate_line;
pub use error::{ReflowError, Result};
pub use pipeline::wrap_paragraphs;
pub use reflow::reflow_line;
pub use session::{TextSink, TextSource, indent_wrap, wrap};

/// Maximum rendered width of any output line, in columns.
pub const MAX_WIDTH: usize = 79;

/// Width of the continuation indent prefixed to wrapped lines on request.
pub const INDENT_WIDTH: usize = 5;

/// How far behind the scan index a space may sit and still be used as a
/// word-boundary cut point.
pub const LOOKBACK: usize = 15;

/// Delimits physical lines inside a paragraph and joins output lines back
/// together in the wrap result.
pub const BREAK_MARKER: char = '\r';
