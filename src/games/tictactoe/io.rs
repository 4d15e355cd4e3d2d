//! Contracts for the collaborators a driver plugs into the engine.

use super::{Board, GameError, GameStatus, Player, SelectionError};

/// Where the game is shown.
pub trait DisplaySink {
    /// Draws the current board.
    fn render(&mut self, board: &Board) -> Result<(), GameError>;

    /// Asks `player` for a position.
    fn prompt(&mut self, player: Player) -> Result<(), GameError>;

    /// Explains why the last selection was refused.
    fn reject(&mut self, error: &SelectionError, board: &Board) -> Result<(), GameError>;

    /// Reports how a finished game ended.
    fn announce(&mut self, status: GameStatus) -> Result<(), GameError>;

    /// Tells the players the board is about to be reset.
    fn await_reset(&mut self) -> Result<(), GameError>;
}

/// Where selections come from.
pub trait InputSource {
    /// Blocks until the next raw selection is available.
    ///
    /// Returns [`GameError::InputClosed`] once nothing more can be read.
    fn read_selection(&mut self) -> Result<String, GameError>;

    /// Waits for the players to acknowledge the result.
    fn acknowledge(&mut self) -> Result<(), GameError> {
        self.read_selection().map(|_| ())
    }
}
