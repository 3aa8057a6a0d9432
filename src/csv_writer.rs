//! Writing delimited text to files and streams

use crate::config::CsvConfig;
use crate::csv::CsvEncoder;
use crate::error::{CsvError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Row-by-row writer
///
/// Each row is encoded into a reused buffer and followed by the line
/// terminator, so writing a non-empty table row by row produces the same
/// text as [`write`](crate::write).
///
/// # Examples
///
/// ```no_run
/// use csvforge::csv_writer::CsvWriter;
///
/// let mut writer = CsvWriter::new("output.csv").unwrap();
/// writer.write_row(["Name", "Age", "City"]).unwrap();
/// writer.write_row(["Alice", "30", "NYC"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter<W: Write> {
    output: W,
    encoder: CsvEncoder,
    row_count: u64,
    buffer: String,
}

impl CsvWriter<BufWriter<File>> {
    /// Create a buffered writer for a new file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())
            .map_err(|e| CsvError::WriteError(format!("Failed to create CSV file: {}", e)))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any writer
    pub fn from_writer(output: W) -> Self {
        CsvWriter {
            output,
            encoder: CsvEncoder::new(CsvConfig::DEFAULT),
            row_count: 0,
            buffer: String::with_capacity(4096),
        }
    }

    /// Set syntax configuration (builder pattern)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvforge::csv_writer::CsvWriter;
    /// use csvforge::CsvConfig;
    ///
    /// let mut writer = CsvWriter::new("data.csv")
    ///     .unwrap()
    ///     .config(CsvConfig::WINDOWS);
    /// ```
    pub fn config(mut self, config: CsvConfig) -> Self {
        self.encoder = CsvEncoder::new(config);
        self
    }

    /// Write a row of strings
    pub fn write_row<I, S>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Reuse buffer
        self.buffer.clear();
        self.encoder.encode_row(data, &mut self.buffer);
        self.buffer
            .push_str(self.encoder.config().line_terminator());

        self.output
            .write_all(self.buffer.as_bytes())
            .map_err(|e| CsvError::WriteError(format!("Failed to write row: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write multiple rows at once
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvforge::csv_writer::CsvWriter;
    ///
    /// let mut writer = CsvWriter::new("data.csv").unwrap();
    /// let rows = vec![
    ///     vec!["Alice", "30"],
    ///     vec!["Bob", "25"],
    /// ];
    /// writer.write_rows_batch(rows).unwrap();
    /// ```
    pub fn write_rows_batch<I, R, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row_data in rows {
            self.write_row(row_data)?;
        }
        Ok(())
    }

    /// Get the number of rows written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.output)
    }

    /// Flush all buffered output
    ///
    /// Consumes the writer.
    pub fn save(mut self) -> Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.output
            .flush()
            .map_err(|e| CsvError::WriteError(format!("Failed to flush output: {}", e)))?;
        log::debug!("flushed {} rows", self.row_count);
        Ok(())
    }
}
