use thiserror::Error;

use crate::subgraph::QueryError;

/// Validation errors for caller-supplied inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("date range start {start} is after date range end {end}")]
    InvalidRange { start: String, end: String },
    #[error("minimum TVL must be a finite decimal number: '{value}'")]
    InvalidThreshold { value: String },
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("unix timestamp {value} is outside the supported date range")]
    TimestampOutOfRange { value: i64 },
}

/// Errors that abort an in-progress pool fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not get pools: {0}")]
    Query(#[from] QueryError),

    #[error("could not parse {field} value '{value}' for pool {pool}")]
    Parse {
        field: &'static str,
        pool: String,
        value: String,
    },

    #[error("pagination cursor did not advance past '{cursor}'")]
    CursorStalled { cursor: String },
}
