//! Convert semicolon separated text on stdin to comma separated text on stdout
//!
//! Run with: cargo run --example convert < input.csv > output.csv

use csvforge::csv_reader::CsvReader;
use csvforge::csv_writer::CsvWriter;
use csvforge::CsvConfig;
use std::io;

fn main() -> csvforge::Result<()> {
    env_logger::init();

    let mut reader = CsvReader::from_reader(io::stdin().lock())?.config(CsvConfig::SEMICOLON);
    let rows = reader.read_all()?;

    let mut writer = CsvWriter::from_writer(io::stdout().lock()).config(CsvConfig::DEFAULT);
    writer.write_rows_batch(&rows)?;
    log::info!("converted {} rows", writer.row_count());
    writer.save()
}
