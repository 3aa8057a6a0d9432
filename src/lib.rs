//! # csvforge
//!
//! Parsing and writing of delimited text (CSV, TSV, semicolon separated)
//! with quoted fields, embedded separators and line breaks, quote doubling
//! and backslash escapes.
//!
//! Parsing is a pair of small state machines: one per row, one per field.
//! Writing applies minimal quoting. Both operate on in-memory text and share
//! a [`CsvConfig`].
//!
//! ## Quick Start
//!
//! ```
//! use csvforge::{parse, write, CsvConfig};
//!
//! let config = CsvConfig::DEFAULT;
//! let table = parse("name,comment\nAlice,\"says \"\"hi\"\"\"\nBob,a\\,b\n", &config).unwrap();
//! assert_eq!(table[1], vec!["Alice", "says \"hi\""]);
//! assert_eq!(table[2], vec!["Bob", "a,b"]);
//!
//! // backslash escapes are read but never written
//! let text = write(&table, &config);
//! assert_eq!(text, "name,comment\nAlice,\"says \"\"hi\"\"\"\nBob,\"a,b\"\n");
//! assert_eq!(parse(&text, &config).unwrap(), table);
//! ```
//!
//! ## Errors
//!
//! Parsing fails with a [`ParseError`] carrying a [`ParseErrorKind`] and the
//! input consumed before the failure. Writing never fails.

pub mod config;
pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod headers;
pub mod types;

pub use config::{CsvConfig, CsvConfigBuilder};
pub use csv::{CsvEncoder, CsvParser};
pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use error::{ConfigError, CsvError, ParseError, ParseErrorKind, Result};
pub use headers::{HeaderedTable, NamedRecord};
pub use types::{Row, Table};

/// Parse a complete text buffer into rows
pub fn parse(text: &str, config: &CsvConfig) -> std::result::Result<Table, ParseError> {
    CsvParser::new(*config).parse(text)
}

/// Serialize rows, each followed by the line terminator
pub fn write<I, R, S>(table: I, config: &CsvConfig) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CsvEncoder::new(*config).encode_table(table)
}
