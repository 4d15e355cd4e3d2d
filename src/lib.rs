//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Engine**: board, win detection, selection validation and turn sequencing
//!   ([`GameEngine`])
//! - **Collaborators**: the engine draws through a [`DisplaySink`] and reads
//!   through an [`InputSource`]; [`ConsoleDisplay`] and [`ConsoleInput`] are the
//!   terminal implementations
//! - **Session**: the replay loop that reports outcomes and resets ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{ConsoleDisplay, ConsoleInput, GameConfig, GameSession, GameStatus, Player};
//!
//! let input = ConsoleInput::new(Cursor::new("1\n4\n2\n5\n3\n\n"));
//! let display = ConsoleDisplay::new(Vec::new(), false);
//! let mut session = GameSession::new(input, display, GameConfig::default());
//!
//! assert_eq!(session.play_game()?, GameStatus::Won(Player::One));
//! # Ok::<(), tictactoe_console::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod display;
mod games;
mod session;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal collaborators
pub use console::{ConsoleDisplay, ConsoleInput};

// Crate-level exports - Text rendering
pub use display::{free_positions, rejection_message, render_board};

// Crate-level exports - Session management
pub use session::{GameSession, Scoreboard};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardError, Cell, DisplaySink, GameEngine, GameError, GameStatus, InputSource,
    MAX_TURNS, Player, Position, SelectionError, evaluate, validate,
};
