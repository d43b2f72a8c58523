//! Error types for parsing at the protocol boundary
//!
//! The core selector never fails once it holds a valid [`Board`]; every
//! error here is produced while decoding protocol input and is handled
//! (logged, command skipped) by the protocol loop.
//!
//! [`Board`]: crate::board::Board

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-range position string.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// Board state that does not decode to a square grid.
    #[error("invalid board state: {0}")]
    InvalidBoardState(String),

    /// Protocol line with too few or unusable tokens.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
