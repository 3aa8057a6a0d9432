//! Field quoting and row joining on write

use crate::config::CsvConfig;

/// Encoder producing delimited text with minimal quoting
///
/// A field is wrapped in quote characters, with inner quotes doubled, when it
/// contains the separator, the quote character or the start of the line
/// terminator, or when the configuration asks to quote all fields. Backslashes
/// are written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder {
    config: CsvConfig,
}

impl CsvEncoder {
    /// Create a new encoder for the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Encode every row, each followed by the line terminator
    ///
    /// An empty table yields a single line terminator.
    pub fn encode_table<I, R, S>(&self, rows: I) -> String
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terminator = self.config.line_terminator();
        let mut buffer = String::new();
        let mut row_count = 0usize;

        for row in rows {
            self.encode_row(row, &mut buffer);
            buffer.push_str(terminator);
            row_count += 1;
        }

        if row_count == 0 {
            buffer.push_str(terminator);
        }

        log::debug!("encoded {} rows into {} bytes", row_count, buffer.len());
        buffer
    }

    /// Encode entire row into buffer, without line terminator
    pub fn encode_row<I, S>(&self, fields: I, buffer: &mut String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                buffer.push(self.config.field_separator());
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    /// Encode single field with quote doubling where needed
    fn encode_field(&self, field: &str, buffer: &mut String) {
        if !self.needs_quoting(field) {
            buffer.push_str(field);
            return;
        }

        let quote = self.config.quote_char();
        buffer.reserve(field.len() + 2);
        buffer.push(quote);
        for ch in field.chars() {
            if ch == quote {
                buffer.push(quote);
            }
            buffer.push(ch);
        }
        buffer.push(quote);
    }

    fn needs_quoting(&self, field: &str) -> bool {
        if self.config.quote_all_fields() {
            return true;
        }
        let separator = self.config.field_separator();
        let quote = self.config.quote_char();
        let terminator_start = self.config.terminator_start();
        field
            .chars()
            .any(|c| c == separator || c == quote || c == terminator_start)
    }
}
