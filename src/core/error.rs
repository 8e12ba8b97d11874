use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row {row} has no fields")]
    EmptyRow { row: usize },

    #[error("malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column {column} is out of range for a table with {width} columns")]
    ColumnOutOfRange { column: usize, width: usize },
}
