//! Delimited text parsing and encoding

mod encoder;
mod field;
mod parser;
mod resolve;

pub use encoder::CsvEncoder;
pub use parser::CsvParser;
