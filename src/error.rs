//! The crate's single error type. Every fallible public operation returns
//! `Result<_, ChessError>`; there is no panicking fallback path for bad
//! input (FEN strings, square indices, or moves), only for internal
//! invariant violations the generator itself is responsible for upholding.

use crate::core::sq::SQ;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ChessError {
    #[error("invalid FEN: {reason} (in: {fen:?})")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move: {from}{to} is not legal in the current position")]
    IllegalMove { from: SQ, to: SQ },

    #[error("square index {0} out of range 0..63")]
    InvalidSquare(u16),
}
