//! Errors surfaced by the game engine to its driver.

use derive_more::Display;

/// Failure while running a turn.
///
/// Bad selections never show up here; they are retried inside the turn.
#[derive(Debug, Display)]
pub enum GameError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The input source has no more selections.
    #[display("Input closed")]
    InputClosed,

    /// A turn was requested after the game ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::InputClosed | GameError::GameOver => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
