//! Error types for the queens engine
//!
//! Search outcomes (solved or exhausted) are plain values and never appear here.
//! These errors only cover malformed input when building a [`crate::State`].

use thiserror::Error;

/// Errors raised while constructing a state from untrusted input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueensError {
    /// Wrong number of rows supplied
    #[error("Invalid state length: expected {expected} rows, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Row index outside the board
    #[error("Invalid row {row} in column {column} (must be 0-{max})")]
    RowOutOfRange { column: usize, row: usize, max: usize },

    /// Text token that is not a row number
    #[error("Invalid row token: {token:?}")]
    InvalidToken { token: String },
}

/// Result type alias for queens engine operations
pub type QueensResult<T> = Result<T, QueensError>;
