//! Win detection logic for tic-tac-toe.
//!
//! Only the piece just placed can complete a line, so the check is local:
//! the row and column through the last move, plus both diagonals when the
//! move sits on one.

use super::super::{BOARD_SIZE, Board, Cell, Player, Position};
use tracing::instrument;

/// Returns true if `player` now owns a full line through `last_move`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_move: Position, player: Player) -> bool {
    let (row, col) = last_move.coords();
    let owns = |r: usize, c: usize| board.get_coords(r, c) == Some(Cell::Token(player));

    let row_complete = (0..BOARD_SIZE).all(|c| owns(row, c));
    let col_complete = (0..BOARD_SIZE).all(|r| owns(r, col));
    if row_complete || col_complete {
        return true;
    }

    if !last_move.on_diagonal() {
        return false;
    }
    let main = (0..BOARD_SIZE).all(|i| owns(i, i));
    let anti = (0..BOARD_SIZE).all(|i| owns(i, BOARD_SIZE - 1 - i));
    main || anti
}
