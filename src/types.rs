//! Row and table types produced by the parser and consumed by the encoder

/// One decoded record: field values in input order
pub type Row = Vec<String>;

/// All rows of one parse, in input order
pub type Table = Vec<Row>;
