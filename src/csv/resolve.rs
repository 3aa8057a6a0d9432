//! Single-character resolution: backslash escapes and quote doubling

use crate::config::ESCAPE_CHAR;
use crate::error::ParseErrorKind;

/// How a character was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Taken as-is from the input
    Ordinary,
    /// Produced by a backslash escape or a doubled quote; never terminates a field
    Escaped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedChar {
    /// Character at the cursor before resolution
    pub raw: char,
    /// Character contributed to the field value
    pub value: char,
    pub class: CharClass,
    /// Byte offset just past the resolved input
    pub next: usize,
}

/// Whether a terminating character is part of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TerminatorPolicy {
    /// Closing quote belongs to the field
    Consume,
    /// Separator and line terminator belong to the row
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldChar {
    Content { value: char, next: usize },
    End { next: usize },
}

/// Resolve the character at `pos`
///
/// `pos` must be a char boundary strictly before the end of `text`.
pub(crate) fn resolve_char(
    text: &str,
    pos: usize,
    quote: char,
) -> Result<ResolvedChar, ParseErrorKind> {
    let mut chars = text[pos..].chars();
    let raw = chars.next().ok_or(ParseErrorKind::InvalidInternalState)?;
    let after = pos + raw.len_utf8();

    if raw == ESCAPE_CHAR {
        return match chars.next() {
            Some(escaped) => Ok(ResolvedChar {
                raw,
                value: escaped,
                class: CharClass::Escaped,
                next: after + escaped.len_utf8(),
            }),
            None => Err(ParseErrorKind::IncompleteEscape),
        };
    }

    if raw == quote && chars.next() == Some(quote) {
        return Ok(ResolvedChar {
            raw,
            value: quote,
            class: CharClass::Escaped,
            next: after + quote.len_utf8(),
        });
    }

    Ok(ResolvedChar {
        raw,
        value: raw,
        class: CharClass::Ordinary,
        next: after,
    })
}

/// Resolve one character and decide whether it ends the field
pub(crate) fn read_field_char(
    text: &str,
    pos: usize,
    quote: char,
    terminators: &[char],
    policy: TerminatorPolicy,
) -> Result<FieldChar, ParseErrorKind> {
    let resolved = resolve_char(text, pos, quote)?;

    if resolved.class == CharClass::Ordinary && terminators.contains(&resolved.raw) {
        let next = match policy {
            TerminatorPolicy::Consume => resolved.next,
            TerminatorPolicy::Leave => pos,
        };
        return Ok(FieldChar::End { next });
    }

    Ok(FieldChar::Content {
        value: resolved.value,
        next: resolved.next,
    })
}
