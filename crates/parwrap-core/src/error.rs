use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReflowError>;

/// Everything that can go wrong during a wrap operation.
///
/// Validation failure anywhere aborts the whole operation; no partially
/// wrapped result is ever produced.
#[derive(Debug, Error)]
pub enum ReflowError {
    /// A character outside the printable ASCII range [32, 126].
    #[error("unidentified ASCII character {ch:?} at position {position} in selected text")]
    InvalidCharacter { position: usize, ch: char },

    /// The text source yielded no text at all.
    #[error("please select some text")]
    EmptySelection,

    /// The text sink could not accept the wrap result.
    #[error("sink rejected the result: {0}")]
    Sink(String),

    /// I/O failure in a host adapter.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReflowError {
    /// Process exit code for CLI front ends.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptySelection => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::ReflowError;

    #[test]
    fn invalid_character_names_position_and_char() {
        let err = ReflowError::InvalidCharacter {
            position: 12,
            ch: '\u{e9}',
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("\u{e9}"));
    }

    #[test]
    fn empty_selection_uses_original_wording() {
        assert_eq!(
            ReflowError::EmptySelection.to_string(),
            "please select some text"
        );
    }

    #[test]
    fn sink_constructor_preserves_message() {
        let err = ReflowError::sink("can't insert text into an image");
        assert!(err.to_string().contains("image"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(ReflowError::EmptySelection.exit_code(), 2);
        assert_eq!(ReflowError::sink("x").exit_code(), 1);
        assert_eq!(
            ReflowError::InvalidCharacter {
                position: 0,
                ch: '\t'
            }
            .exit_code(),
            1
        );
    }
}
