//! Error type shared by every module of the crate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("line {line}: cannot parse {column} value {value:?} as a number")]
    Parse {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("indicator period must be greater than zero")]
    InvalidPeriod,

    #[error("unknown interval {0:?}, expected one of 1D, 1W, 1Y, 5Y, Max")]
    UnknownInterval(String),
}
