//! Field-level state machine

use super::resolve::{read_field_char, FieldChar, TerminatorPolicy};
use crate::config::CsvConfig;
use crate::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    ReadUnquoted,
    ReadQuoted,
    EndOfField,
}

/// One decoded field and the cursor just past it
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldRead {
    pub value: String,
    pub next: usize,
}

/// Reads single fields out of a text buffer
///
/// The value is accumulated in a caller-provided buffer so the allocation is
/// reused across fields and the result is materialized once per field.
pub(crate) struct FieldReader<'a> {
    text: &'a str,
    quote: char,
    unquoted_end: [char; 2],
    quoted_end: [char; 1],
}

impl<'a> FieldReader<'a> {
    pub fn new(text: &'a str, config: &CsvConfig) -> Self {
        Self {
            text,
            quote: config.quote_char(),
            unquoted_end: [config.field_separator(), config.terminator_start()],
            quoted_end: [config.quote_char()],
        }
    }

    /// Read the field starting at `start`
    ///
    /// The returned cursor excludes a following separator or line terminator
    /// and includes a closing quote.
    pub fn read(&self, start: usize, buf: &mut String) -> Result<FieldRead, ParseError> {
        let text = self.text;
        let mut pos = start;
        let mut state = FieldState::Start;
        buf.clear();

        while pos < text.len() {
            state = match state {
                FieldState::Start => {
                    if text[pos..].starts_with(self.quote) {
                        pos += self.quote.len_utf8();
                        FieldState::ReadQuoted
                    } else {
                        FieldState::ReadUnquoted
                    }
                }
                FieldState::ReadUnquoted => {
                    match self.step(pos, &self.unquoted_end, TerminatorPolicy::Leave)? {
                        FieldChar::Content { value, next } => {
                            buf.push(value);
                            pos = next;
                            FieldState::ReadUnquoted
                        }
                        FieldChar::End { next } => {
                            pos = next;
                            FieldState::EndOfField
                        }
                    }
                }
                FieldState::ReadQuoted => {
                    match self.step(pos, &self.quoted_end, TerminatorPolicy::Consume)? {
                        FieldChar::Content { value, next } => {
                            buf.push(value);
                            pos = next;
                            FieldState::ReadQuoted
                        }
                        FieldChar::End { next } => {
                            pos = next;
                            FieldState::EndOfField
                        }
                    }
                }
                FieldState::EndOfField => break,
            };
        }

        match state {
            // unquoted fields may be terminated by end of data
            FieldState::EndOfField | FieldState::ReadUnquoted => Ok(FieldRead {
                value: buf.as_str().to_owned(),
                next: pos,
            }),
            FieldState::ReadQuoted => Err(ParseError::new(
                ParseErrorKind::UnterminatedQuotedField,
                text,
                text.len(),
            )),
            FieldState::Start => Err(ParseError::new(
                ParseErrorKind::InvalidInternalState,
                text,
                pos,
            )),
        }
    }

    fn step(
        &self,
        pos: usize,
        terminators: &[char],
        policy: TerminatorPolicy,
    ) -> Result<FieldChar, ParseError> {
        read_field_char(self.text, pos, self.quote, terminators, policy).map_err(|kind| {
            let position = match kind {
                ParseErrorKind::IncompleteEscape => self.text.len(),
                _ => pos,
            };
            ParseError::new(kind, self.text, position)
        })
    }
}
