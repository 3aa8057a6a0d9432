//! Reading delimited text from files and streams

use crate::config::CsvConfig;
use crate::csv::CsvParser;
use crate::error::{CsvError, Result};
use crate::headers::HeaderedTable;
use crate::types::{Row, Table};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads a complete text buffer and parses it
///
/// Parsing works on the whole buffer, so the source is read to the end
/// before the first row is produced.
///
/// # Examples
///
/// ```no_run
/// use csvforge::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row in reader.read_all().unwrap() {
///     println!("{:?}", row);
/// }
/// ```
///
/// # With Headers
///
/// ```no_run
/// use csvforge::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv")
///     .unwrap()
///     .has_header(true);
///
/// let rows = reader.read_all().unwrap();
/// if let Some(headers) = reader.headers() {
///     println!("Headers: {:?}", headers);
/// }
/// ```
pub struct CsvReader {
    source: String,
    config: CsvConfig,
    has_header: bool,
    headers: Row,
}

impl CsvReader {
    /// Open and read a file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            CsvError::ReadError(format!(
                "Failed to read CSV file {}: {}",
                path_ref.display(),
                e
            ))
        })?;
        log::debug!("read {} bytes from {}", source.len(), path_ref.display());
        Ok(Self::from_text(source))
    }

    /// Read a stream to its end
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|e| CsvError::ReadError(format!("Failed to read CSV input: {}", e)))?;
        Ok(Self::from_text(source))
    }

    /// Use text that is already in memory
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        CsvReader {
            source: text.into(),
            config: CsvConfig::DEFAULT,
            has_header: false,
            headers: Vec::new(),
        }
    }

    /// Set syntax configuration (builder pattern)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvforge::csv_reader::CsvReader;
    /// use csvforge::CsvConfig;
    ///
    /// let reader = CsvReader::open("data.csv")
    ///     .unwrap()
    ///     .config(CsvConfig::SEMICOLON);
    /// ```
    pub fn config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Indicate that the first row contains headers (builder pattern)
    ///
    /// When set, [`read_all`](Self::read_all) moves the first row into
    /// [`headers`](Self::headers) and returns only data rows.
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Header row, available after [`read_all`](Self::read_all)
    pub fn headers(&self) -> Option<&[String]> {
        if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        }
    }

    /// Parse all rows
    pub fn read_all(&mut self) -> Result<Table> {
        let mut rows = CsvParser::new(self.config).parse(&self.source)?;
        if self.has_header && !rows.is_empty() {
            self.headers = rows.remove(0);
        }
        Ok(rows)
    }

    /// Parse all rows and attach the first one as header
    pub fn into_headered(self) -> Result<Option<HeaderedTable>> {
        let rows = CsvParser::new(self.config).parse(&self.source)?;
        Ok(HeaderedTable::from_table(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_read_from_text() -> Result<()> {
        let mut reader = CsvReader::from_text("Name,Age\nAlice,30\n");
        let rows = reader.read_all()?;
        assert_eq!(rows, vec![vec!["Name", "Age"], vec!["Alice", "30"]]);
        assert_eq!(reader.headers(), None);
        Ok(())
    }

    #[test]
    fn test_read_with_headers() -> Result<()> {
        let mut reader = CsvReader::from_reader("ID;Name\n1;Alice\n2;Bob".as_bytes())?
            .config(CsvConfig::SEMICOLON)
            .has_header(true);
        assert_eq!(reader.headers(), None); // Not read yet

        let rows = reader.read_all()?;
        assert_eq!(
            reader.headers(),
            Some(&["ID".to_string(), "Name".to_string()][..])
        );
        assert_eq!(rows, vec![vec!["1", "Alice"], vec!["2", "Bob"]]);
        Ok(())
    }

    #[test]
    fn test_into_headered() -> Result<()> {
        let named = CsvReader::from_text("k,v\na,1\n").into_headered()?.unwrap();
        assert_eq!(named.record(0).unwrap().get("v"), Some("1"));
        assert!(CsvReader::from_text("").into_headered()?.is_none());
        Ok(())
    }

    #[test]
    fn test_parse_error_surfaces() {
        let err = CsvReader::from_text("a,\"b").read_all().unwrap_err();
        assert!(matches!(
            err,
            CsvError::Parse(ref e) if e.kind() == ParseErrorKind::UnterminatedQuotedField
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvReader::open("definitely/not/here.csv").err().unwrap();
        assert!(matches!(err, CsvError::ReadError(_)));
    }
}
