//! Host-document seams and the two named wrap operations.
//!
//! The core never touches the host document directly. A [`TextSource`]
//! supplies the selected paragraphs and a [`TextSink`] takes the finished
//! result back; both are injected so the pipeline can be exercised with
//! in-memory fakes. The operations are all-or-nothing: the sink sees either
//! the complete wrap result or nothing.

use crate::error::{ReflowError, Result};
use crate::pipeline::wrap_paragraphs;

/// Supplies the paragraphs to wrap, in document order.
pub trait TextSource {
    fn paragraphs(&mut self) -> Result<Vec<String>>;
}

/// Accepts the finished wrap result for writing back into the host document.
///
/// Presentation concerns (font, size, break-marker translation) belong to
/// the implementor.
pub trait TextSink {
    fn insert(&mut self, text: &str) -> Result<()>;
}

/// Reflow the source's paragraphs without continuation indents.
pub fn wrap(source: &mut impl TextSource, sink: &mut impl TextSink) -> Result<&'static str> {
    run(source, sink, false)?;
    Ok("All wrapped up.")
}

/// Reflow the source's paragraphs with a 5-space indent on continuation
/// lines.
pub fn indent_wrap(source: &mut impl TextSource, sink: &mut impl TextSink) -> Result<&'static str> {
    run(source, sink, true)?;
    Ok("All indent wrapped up.")
}

fn run(source: &mut impl TextSource, sink: &mut impl TextSink, indent: bool) -> Result<()> {
    let paragraphs = source.paragraphs()?;
    if paragraphs.iter().all(String::is_empty) {
        return Err(ReflowError::EmptySelection);
    }
    let result = wrap_paragraphs(&paragraphs, indent)?;
    sink.insert(&result)
}
