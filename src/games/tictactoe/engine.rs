//! Turn sequencing and game lifecycle.

use super::io::{DisplaySink, InputSource};
use super::rules;
use super::input::validate;
use super::{Board, GameError, GameStatus, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Number of turns that fill the board.
pub const MAX_TURNS: u8 = 9;

/// Tic-tac-toe game engine.
///
/// Owns the board and all turn state. A driver calls
/// [`GameEngine::advance_turn`] until [`GameEngine::status`] is terminal,
/// reports the outcome, then calls [`GameEngine::reset`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    player: Player,
    turns: u8,
    player_has_won: bool,
    draw_has_been_reached: bool,
    last_move: Option<Position>,
}

impl GameEngine {
    /// Creates an engine ready for player 1's first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player: Player::One,
            turns: 0,
            player_has_won: false,
            draw_has_been_reached: false,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the number of completed turns.
    pub fn turns(&self) -> u8 {
        self.turns
    }

    /// True once the last move completed a line.
    pub fn player_has_won(&self) -> bool {
        self.player_has_won
    }

    /// True once the ninth turn has been played.
    ///
    /// Can be set alongside [`GameEngine::player_has_won`]; use
    /// [`GameEngine::status`] to get the reported outcome.
    pub fn draw_has_been_reached(&self) -> bool {
        self.draw_has_been_reached
    }

    /// Returns the most recently claimed position.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Current outcome. A win on the final cell is a win, not a draw.
    pub fn status(&self) -> GameStatus {
        if self.player_has_won {
            GameStatus::Won(self.player)
        } else if self.draw_has_been_reached {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Plays one turn for the active player.
    ///
    /// Renders the board, prompts until the input source yields a legal
    /// selection, claims the cell and checks for a win. Rejected selections
    /// are reported to `display` and retried without leaving this call.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already ended; nothing changes.
    /// - [`GameError::InputClosed`] or [`GameError::Io`] from the collaborators;
    ///   the turn is abandoned and the board is left as it was.
    #[instrument(skip_all, fields(player = %self.player, turn = self.turns + 1))]
    pub fn advance_turn<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<GameStatus, GameError>
    where
        I: InputSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        if self.status().is_terminal() {
            warn!(status = ?self.status(), "Turn requested after game ended");
            return Err(GameError::GameOver);
        }

        display.render(&self.board)?;
        let position = self.request_selection(input, display)?;

        self.turns += 1;
        if self.turns == MAX_TURNS {
            self.draw_has_been_reached = true;
        }

        self.board.set_cell(position, self.player);
        self.last_move = Some(position);
        debug!(position = position.number(), "Cell claimed");

        if rules::evaluate(&self.board, position, self.player) {
            self.player_has_won = true;
            info!(winner = %self.player, turns = self.turns, "Player completed a line");
        } else {
            if self.draw_has_been_reached {
                info!("Board full, game drawn");
            }
            self.player = self.player.opponent();
        }

        Ok(self.status())
    }

    /// Prompts until a legal position is read.
    fn request_selection<I, D>(&self, input: &mut I, display: &mut D) -> Result<Position, GameError>
    where
        I: InputSource + ?Sized,
        D: DisplaySink + ?Sized,
    {
        loop {
            display.prompt(self.player)?;
            let raw = input.read_selection()?;
            match validate(&self.board, &raw) {
                Ok(position) => return Ok(position),
                Err(err) => {
                    debug!(raw = %raw.trim(), reason = %err, "Selection rejected");
                    display.reject(&err, &self.board)?;
                }
            }
        }
    }

    /// Restores a fresh game: placeholders back, flags cleared, player 1 to move.
    #[instrument(skip(self), fields(turns = self.turns))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.player = Player::One;
        self.turns = 0;
        self.player_has_won = false;
        self.draw_has_been_reached = false;
        self.last_move = None;
        info!("Game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
