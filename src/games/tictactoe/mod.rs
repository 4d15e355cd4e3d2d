//! Two-player tic-tac-toe engine.

mod engine;
mod error;
mod input;
mod io;
mod position;
mod rules;
mod types;

pub use engine::{GameEngine, MAX_TURNS};
pub use error::GameError;
pub use input::{SelectionError, validate};
pub use io::{DisplaySink, InputSource};
pub use position::{BOARD_SIZE, Position};
pub use rules::evaluate;
pub use types::{Board, BoardError, Cell, GameStatus, Player};
