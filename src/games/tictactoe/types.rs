//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use tracing::instrument;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// Player 1, plays `X` and moves first.
    #[display("1")]
    One,
    /// Player 2, plays `O`.
    #[display("2")]
    Two,
}

impl Player {
    /// Numeric id shown to the players.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The mark this player puts on the board.
    pub fn token(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Content of a single cell.
///
/// An unclaimed cell shows its own position number, so placeholders are
/// unique across the board and no cell is ever blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Cell {
    /// Unclaimed; displays the position number.
    #[display("{}", _0.number())]
    Placeholder(Position),
    /// Claimed by a player.
    #[display("{}", _0.token())]
    Token(Player),
}

/// Attempted to address a cell outside 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Position number outside 1-9.
    #[display("Position {} is outside 1-9", _0)]
    OutOfRange(u8),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a board with every placeholder in place.
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(Cell::Placeholder),
        }
    }

    /// Returns the cell for a 1-based position number.
    #[instrument(skip(self))]
    pub fn cell_at(&self, number: u8) -> Result<Cell, BoardError> {
        Position::from_number(number)
            .map(|pos| self.get(pos))
            .ok_or(BoardError::OutOfRange(number))
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the cell at `(row, col)`, if on the board.
    pub fn get_coords(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Overwrites a cell with a player's token. Callers validate first.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, pos: Position, player: Player) {
        self.cells[pos.to_index()] = Cell::Token(player);
    }

    /// True once a player has claimed the cell.
    pub fn is_occupied_by_token(&self, pos: Position) -> bool {
        matches!(self.get(pos), Cell::Token(_))
    }

    /// Restores every placeholder.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot of all nine cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the game stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    /// Moves are still being made.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("Player {} has won!", _0)]
    Won(Player),
    /// The board filled up without a line.
    #[display("It's a draw! Better luck next time")]
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
