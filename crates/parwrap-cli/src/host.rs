//! Host-document adapters for the command line.
//!
//! The core speaks in paragraphs and break markers; the host speaks in files
//! and newlines. Each host line becomes one paragraph on the way in, and the
//! break-joined wrap result is translated back to newlines on the way out.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use parwrap_core::{BREAK_MARKER, Result, TextSink, TextSource};

/// A host document read up front, from a file or stdin.
pub struct DocumentSource {
    text: String,
}

impl DocumentSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            text: fs::read_to_string(path)?,
        })
    }

    pub fn from_stdin() -> Result<Self> {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(Self { text })
    }

    #[cfg(test)]
    fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for DocumentSource {
    fn paragraphs(&mut self) -> Result<Vec<String>> {
        Ok(self.text.lines().map(str::to_string).collect())
    }
}

/// Where the wrap result lands.
pub enum DocumentSink {
    Stdout,
    File(PathBuf),
}

impl TextSink for DocumentSink {
    fn insert(&mut self, text: &str) -> Result<()> {
        let rendered = render(text);
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(rendered.as_bytes())?;
                Ok(())
            }
            Self::File(path) => {
                fs::write(path, rendered.as_bytes())?;
                Ok(())
            }
        }
    }
}

/// Break markers become host newlines, and the output always ends with one.
fn render(text: &str) -> String {
    let mut rendered = text.replace(BREAK_MARKER, "\n");
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
