//! Text rendering of the board and prompts.

use crate::games::tictactoe::{BOARD_SIZE, Board, Position, SelectionError};

/// Formats the board as the boxed 3x3 grid shown between turns.
///
/// ```text
///    _________________
///   |     |     |     |
///   |  1  |  2  |  X  |
///   |_____|_____|_____|
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   _________________\n");
    for row in board.cells().chunks(BOARD_SIZE) {
        out.push_str("  |     |     |     |\n");
        out.push_str("  |");
        for cell in row {
            out.push_str(&format!("  {cell}  |"));
        }
        out.push('\n');
        out.push_str("  |_____|_____|_____|\n");
    }
    out
}

/// Lists the free position numbers, e.g. `1, 4, 9`.
pub fn free_positions(board: &Board) -> String {
    Position::valid_moves(board)
        .iter()
        .map(|pos| pos.number().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Re-prompt text for a refused selection.
pub fn rejection_message(error: &SelectionError, board: &Board) -> String {
    format!(
        "{error}. Please enter a number that is available on the game board ({}).",
        free_positions(board)
    )
}
