use crate::core::TableError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InductionError {
    #[error("entropy is undefined for an empty table")]
    EmptyTable,

    #[error("no attribute can split {rows} rows with classes [{}]", classes.join(", "))]
    NoUsableSplit { rows: usize, classes: Vec<String> },

    #[error(transparent)]
    Table(#[from] TableError),
}
