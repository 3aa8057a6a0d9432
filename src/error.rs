//! Error types for parsing, configuration and file I/O

use std::fmt;
use thiserror::Error;

/// Result alias used by the file and stream helpers
pub type Result<T> = std::result::Result<T, CsvError>;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input text is not valid delimited data
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Rejected configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to obtain input text
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to emit output text
    #[error("Write error: {0}")]
    WriteError(String),
}

/// Kind of parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Content after a field is neither the separator nor the line terminator
    ExpectedFieldSeparator,
    /// Escape character is the last character of the input
    IncompleteEscape,
    /// Input ended inside a quoted field
    UnterminatedQuotedField,
    /// Parser reached a state it should never be in
    InvalidInternalState,
}

impl ParseErrorKind {
    fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::ExpectedFieldSeparator => {
                "unexpected end of field, expected field separator"
            }
            ParseErrorKind::IncompleteEscape => {
                "unexpected end of data during escape character processing"
            }
            ParseErrorKind::UnterminatedQuotedField => "unexpected end of data in quoted field",
            ParseErrorKind::InvalidInternalState => "parser reached an invalid internal state",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Parse failure with the input consumed up to the failure point
///
/// `consumed` is meant for rendering a pointer to the failure location:
///
/// ```
/// use csvforge::{parse, CsvConfig, ParseErrorKind};
///
/// let err = parse("a,\"open", &CsvConfig::DEFAULT).unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::UnterminatedQuotedField);
/// assert_eq!(err.consumed(), "a,\"open");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}\n>>> {consumed} <<< here")]
pub struct ParseError {
    kind: ParseErrorKind,
    consumed: String,
    position: usize,
}

impl ParseError {
    /// Build an error from the full input and the byte offset where consumption stopped
    pub(crate) fn new(kind: ParseErrorKind, text: &str, position: usize) -> Self {
        let end = position.min(text.len());
        ParseError {
            kind,
            consumed: text[..end].to_string(),
            position,
        }
    }

    /// Failure kind
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Input consumed before the failure
    pub fn consumed(&self) -> &str {
        &self.consumed
    }

    /// Byte offset of the failure in the input
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Which configured character a [`ConfigError`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRole {
    FieldSeparator,
    QuoteCharacter,
}

impl fmt::Display for ConfigRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigRole::FieldSeparator => f.write_str("field separator"),
            ConfigRole::QuoteCharacter => f.write_str("quote character"),
        }
    }
}

/// Configuration rejected at build time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field separator and quote character are both {0:?}")]
    SeparatorIsQuote(char),

    #[error("{role} {ch:?} is part of the line terminator")]
    ConflictsWithLineTerminator { role: ConfigRole, ch: char },

    #[error("{role} cannot be the escape character '\\'")]
    ConflictsWithEscape { role: ConfigRole },
}
