//! Errors used throughout the checkers engine.
//!
//! Rules-engine operations never fail; `CheckersError` covers the text and
//! I/O boundary: square/move parsing, board layouts, and console streams.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckersError {
    /// A square like `A3` could not be interpreted.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Move text did not have the `A3->B4` shape.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// A board layout string was malformed.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CheckersResult<T> = Result<T, CheckersError>;
