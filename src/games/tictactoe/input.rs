//! Turns a raw selection into a legal position.

use super::{Board, Position};
use derive_more::Display;
use tracing::instrument;

/// Why a raw selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SelectionError {
    /// Input is not an integer.
    #[display("'{}' is not a number", _0)]
    Malformed(String),

    /// Integer outside 1-9.
    #[display("{} is not on the board, choose 1-9", _0)]
    OutOfRange(i64),

    /// Cell already holds a token.
    #[display("Square {} is already taken", _0.number())]
    CellAlreadyTaken(Position),
}

impl std::error::Error for SelectionError {}

/// Validates a raw selection against the board.
///
/// Whitespace around the input is ignored.
///
/// # Errors
///
/// Returns the first reason the selection is not a legal move.
#[instrument(skip(board))]
pub fn validate(board: &Board, raw: &str) -> Result<Position, SelectionError> {
    let trimmed = raw.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::Malformed(trimmed.to_string()))?;

    let position = u8::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .ok_or(SelectionError::OutOfRange(number))?;

    if board.is_occupied_by_token(position) {
        return Err(SelectionError::CellAlreadyTaken(position));
    }

    Ok(position)
}
