//! Terminal collaborators: a line-based input source and a text display.

use crate::display::{rejection_message, render_board};
use crate::games::tictactoe::{Board, DisplaySink, GameError, GameStatus, InputSource, Player, SelectionError};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tracing::{instrument, trace};

/// Writes the game to any [`Write`] target, usually stdout.
#[derive(Debug)]
pub struct ConsoleDisplay<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a display. With `clear_screen`, each render starts on a blank terminal.
    #[instrument(skip(out))]
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn render(&mut self, board: &Board) -> Result<(), GameError> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.out, "{}", render_board(board))?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, player: Player) -> Result<(), GameError> {
        write!(self.out, "\nPlayer {} ({}): Choose your number! ", player, player.token())?;
        self.out.flush()?;
        Ok(())
    }

    fn reject(&mut self, error: &SelectionError, board: &Board) -> Result<(), GameError> {
        writeln!(self.out, "\n{}", rejection_message(error, board))?;
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<(), GameError> {
        writeln!(self.out, "\n{status}")?;
        Ok(())
    }

    fn await_reset(&mut self) -> Result<(), GameError> {
        write!(self.out, "Press Enter to reset the game")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Reads one selection per line from a buffered reader.
#[derive(Debug)]
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    /// Wraps a reader such as `std::io::stdin().lock()`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn read_selection(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        trace!(line = %line.trim_end(), "Read line");
        Ok(line.trim().to_string())
    }
}
