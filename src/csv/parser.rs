//! Row-level state machine turning delimited text into a table

use super::field::FieldReader;
use crate::config::CsvConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::{Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowState {
    StartOfRow,
    ReadField,
    AfterField,
    EndOfRow,
}

/// Parser for complete text buffers
///
/// Supports quoted fields containing separators and line breaks, quote
/// doubling, and backslash escapes of any character in quoted and unquoted
/// fields. Blank lines between rows are skipped. The last row does not need a
/// trailing line terminator.
///
/// # Examples
///
/// ```
/// use csvforge::{CsvConfig, CsvParser};
///
/// let parser = CsvParser::new(CsvConfig::DEFAULT);
/// let table = parser.parse("a,\"b,c\"\n1,2\\,5").unwrap();
/// assert_eq!(table, vec![vec!["a", "b,c"], vec!["1", "2,5"]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    config: CsvConfig,
}

impl CsvParser {
    /// Create a parser for the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Parse the whole text into rows
    pub fn parse(&self, text: &str) -> Result<Table, ParseError> {
        let result = self.parse_rows(text);
        match &result {
            Ok(table) => log::debug!(
                "parsed {} rows from {} bytes",
                table.len(),
                text.len()
            ),
            Err(e) => log::debug!("parse failed: {} at byte {}", e.kind(), e.position()),
        }
        result
    }

    fn parse_rows(&self, text: &str) -> Result<Table, ParseError> {
        let separator = self.config.field_separator();
        let terminator = self.config.line_terminator();
        let fields = FieldReader::new(text, &self.config);

        let mut table = Table::new();
        let mut row = Row::new();
        let mut value_buf = String::new();
        let mut pos = 0;
        let mut state = RowState::StartOfRow;

        while pos < text.len() {
            state = match state {
                RowState::StartOfRow => {
                    if text[pos..].starts_with(terminator) {
                        // blank line
                        pos += terminator.len();
                        RowState::StartOfRow
                    } else {
                        RowState::ReadField
                    }
                }
                RowState::ReadField => {
                    let field = fields.read(pos, &mut value_buf)?;
                    row.push(field.value);
                    pos = field.next;
                    RowState::AfterField
                }
                RowState::AfterField => {
                    let rest = &text[pos..];
                    if rest.starts_with(separator) {
                        pos += separator.len_utf8();
                        RowState::ReadField
                    } else if rest.starts_with(terminator) {
                        pos += terminator.len();
                        RowState::EndOfRow
                    } else {
                        return Err(ParseError::new(
                            ParseErrorKind::ExpectedFieldSeparator,
                            text,
                            pos,
                        ));
                    }
                }
                RowState::EndOfRow => {
                    log::trace!("row {} complete with {} fields", table.len(), row.len());
                    table.push(std::mem::take(&mut row));
                    RowState::StartOfRow
                }
            };
        }

        if !row.is_empty() {
            table.push(row);
        }

        Ok(table)
    }
}
