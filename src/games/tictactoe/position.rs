//! Cell positions and the number/coordinate mapping.

use super::types::Board;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A cell on the board, numbered 1-9 in row-major order.
///
/// ```text
///  1 | 2 | 3
///  4 | 5 | 6
///  7 | 8 | 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for this position.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Zero-based index into row-major storage.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The 1-based position number shown on the board.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates a position from its 1-based number.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Self::iter().nth(usize::from(number - 1)),
            _ => None,
        }
    }

    /// `(row, col)` of this cell: row = (n-1) div 3, col = (n-1) mod 3.
    pub fn coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Inverse of [`Position::coords`].
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::iter().nth(row * BOARD_SIZE + col)
    }

    /// True if the cell lies on either diagonal.
    pub fn on_diagonal(self) -> bool {
        let (row, col) = self.coords();
        row == col || row + col == BOARD_SIZE - 1
    }

    /// Positions whose cells still show a placeholder.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| !board.is_occupied_by_token(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}
