mod json;
mod table;

pub use json::{parse_json, read_json};
pub use table::{parse_table, read_table};

use thiserror::Error;

/// Errors raised while reading assessment datafiles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatafileError {
    /// Error encountered while reading CSV data
    #[error("CSV error: {0}")]
    CSVError(String),
    /// Error encountered while reading JSON data
    #[error("JSON error: {0}")]
    JSONError(String),
    /// A cell that is neither a number nor a missing-value marker
    #[error("Column {column:?}, record {record}: cannot parse {value:?} as a number")]
    BadNumber {
        column: String,
        record: usize,
        value: String,
    },
    /// The datafile declares no columns
    #[error("Datafile has no columns")]
    EmptyTable,
    /// A matrix row with a different length than the first row
    #[error("Matrix {name:?} row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}
