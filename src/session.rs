//! The play loop around a [`GameEngine`].

use crate::config::GameConfig;
use crate::games::tictactoe::{DisplaySink, GameEngine, GameError, GameStatus, InputSource, Player};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Results of the games played in one session. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Games won by player 1.
    player_one_wins: u32,
    /// Games won by player 2.
    player_two_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Records a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::One) => self.player_one_wins += 1,
            GameStatus::Won(Player::Two) => self.player_two_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1: {}  Player 2: {}  Draws: {}",
            self.player_one_wins, self.player_two_wins, self.draws
        )
    }
}

/// Drives games between two people sharing one input source and display.
#[derive(Debug)]
pub struct GameSession<I, D> {
    engine: GameEngine,
    input: I,
    display: D,
    config: GameConfig,
    scoreboard: Scoreboard,
}

impl<I: InputSource, D: DisplaySink> GameSession<I, D> {
    /// Creates a session with a fresh engine.
    pub fn new(input: I, display: D, config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            input,
            display,
            config,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the results so far.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Plays one game to its end, reports it, waits for acknowledgement and resets.
    ///
    /// Returns the outcome of the finished game. The game is scored and the
    /// engine reset even if input closes while waiting for acknowledgement.
    #[instrument(skip(self), fields(game = self.scoreboard.games() + 1))]
    pub fn play_game(&mut self) -> Result<GameStatus, GameError> {
        let mut status = self.engine.status();
        while !status.is_terminal() {
            status = self.engine.advance_turn(&mut self.input, &mut self.display)?;
        }

        self.display.render(self.engine.board())?;
        self.display.announce(status)?;
        self.scoreboard.record(status);
        info!(%status, scoreboard = %self.scoreboard, "Game finished");

        self.display.await_reset()?;
        let acknowledged = self.input.acknowledge();
        self.engine.reset();
        acknowledged.map(|()| status)
    }

    /// Plays games until input runs out, or after one game in single-game mode.
    ///
    /// A game cut short by closed input before it ends is not scored.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard, GameError> {
        loop {
            match self.play_game() {
                Ok(_) if *self.config.single_game() => break,
                Ok(_) => {}
                Err(GameError::InputClosed) => {
                    debug!("Input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(self.scoreboard)
    }
}
