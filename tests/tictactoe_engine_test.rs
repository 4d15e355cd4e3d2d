//! Tests for turn sequencing in the game engine.

use std::collections::VecDeque;
use tictactoe_console::{
    Board, Cell, DisplaySink, GameEngine, GameError, GameStatus, InputSource, Player, Position, SelectionError,
};

/// Feeds a fixed list of selections, then reports closed input.
struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_selection(&mut self) -> Result<String, GameError> {
        self.lines.pop_front().ok_or(GameError::InputClosed)
    }
}

/// Records what the engine asked to show.
#[derive(Default)]
struct RecordingDisplay {
    renders: usize,
    prompts: Vec<Player>,
    rejections: Vec<SelectionError>,
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, _board: &Board) -> Result<(), GameError> {
        self.renders += 1;
        Ok(())
    }

    fn prompt(&mut self, player: Player) -> Result<(), GameError> {
        self.prompts.push(player);
        Ok(())
    }

    fn reject(&mut self, error: &SelectionError, _board: &Board) -> Result<(), GameError> {
        self.rejections.push(error.clone());
        Ok(())
    }

    fn announce(&mut self, _status: GameStatus) -> Result<(), GameError> {
        Ok(())
    }

    fn await_reset(&mut self) -> Result<(), GameError> {
        Ok(())
    }
}

/// Plays every scripted move, returning the status after the last one.
fn play(engine: &mut GameEngine, moves: &[&str]) -> GameStatus {
    let mut input = ScriptedInput::new(moves);
    let mut display = RecordingDisplay::default();
    let mut status = engine.status();
    for _ in moves {
        status = engine.advance_turn(&mut input, &mut display).expect("scripted move");
    }
    status
}

#[test]
fn test_new_engine_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.player(), Player::One);
    assert_eq!(engine.turns(), 0);
    assert!(!engine.player_has_won());
    assert!(!engine.draw_has_been_reached());
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.board(), &Board::new());
}

#[test]
fn test_alternating_players() {
    let mut engine = GameEngine::new();
    play(&mut engine, &["5"]);
    assert_eq!(engine.player(), Player::Two);
    assert_eq!(engine.board().get(Position::Center), Cell::Token(Player::One));

    play(&mut engine, &["1"]);
    assert_eq!(engine.player(), Player::One);
    assert_eq!(engine.board().get(Position::TopLeft), Cell::Token(Player::Two));
    assert_eq!(engine.turns(), 2);
    assert_eq!(engine.last_move(), Some(Position::TopLeft));
}

#[test]
fn test_win_keeps_winner_active() {
    let mut engine = GameEngine::new();
    let status = play(&mut engine, &["1", "4", "2", "5", "3"]);

    assert_eq!(status, GameStatus::Won(Player::One));
    assert!(engine.player_has_won());
    assert!(!engine.draw_has_been_reached());
    assert_eq!(engine.player(), Player::One);
}

#[test]
fn test_draw_after_nine_moves() {
    let mut engine = GameEngine::new();
    let status = play(&mut engine, &["1", "2", "3", "5", "4", "6", "8", "7", "9"]);

    assert_eq!(status, GameStatus::Draw);
    assert!(engine.draw_has_been_reached());
    assert!(!engine.player_has_won());
    assert_eq!(engine.turns(), 9);
}

#[test]
fn test_win_on_final_cell_beats_draw() {
    // X: 1 3 5 8 9, O: 2 4 6 7; X completes the 1-5-9 diagonal on turn nine.
    let mut engine = GameEngine::new();
    let status = play(&mut engine, &["1", "2", "3", "4", "5", "6", "8", "7", "9"]);

    assert!(engine.draw_has_been_reached());
    assert!(engine.player_has_won());
    assert_eq!(status, GameStatus::Won(Player::One));
}

#[test]
fn test_rejections_are_retried_within_the_turn() {
    let mut engine = GameEngine::new();
    play(&mut engine, &["5"]);

    let mut input = ScriptedInput::new(&["x", "0", "10", "5", "3"]);
    let mut display = RecordingDisplay::default();
    let status = engine.advance_turn(&mut input, &mut display).unwrap();

    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(
        display.rejections,
        vec![
            SelectionError::Malformed("x".to_string()),
            SelectionError::OutOfRange(0),
            SelectionError::OutOfRange(10),
            SelectionError::CellAlreadyTaken(Position::Center),
        ]
    );
    assert_eq!(display.prompts, vec![Player::Two; 5]);
    assert_eq!(display.renders, 1);
    assert_eq!(engine.board().get(Position::TopRight), Cell::Token(Player::Two));
    assert_eq!(engine.turns(), 2);
}

#[test]
fn test_terminal_state_refuses_turns() {
    let mut engine = GameEngine::new();
    play(&mut engine, &["1", "4", "2", "5", "3"]);
    let before = engine.clone();

    let mut input = ScriptedInput::new(&["9"]);
    let mut display = RecordingDisplay::default();
    let result = engine.advance_turn(&mut input, &mut display);

    assert!(matches!(result, Err(GameError::GameOver)));
    assert_eq!(engine.board(), before.board());
    assert_eq!(engine.turns(), before.turns());
    assert_eq!(display.renders, 0);
    assert_eq!(input.lines.len(), 1);
}

#[test]
fn test_closed_input_leaves_turn_unplayed() {
    let mut engine = GameEngine::new();
    play(&mut engine, &["5"]);

    let mut input = ScriptedInput::new(&["5"]);
    let mut display = RecordingDisplay::default();
    let result = engine.advance_turn(&mut input, &mut display);

    assert!(matches!(result, Err(GameError::InputClosed)));
    assert_eq!(engine.turns(), 1);
    assert_eq!(engine.player(), Player::Two);
    assert_eq!(Position::valid_moves(engine.board()).len(), 8);
}

#[test]
fn test_reset_restores_fresh_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &["1", "4", "2", "5", "3"]);
    engine.reset();

    for number in 1..=9u8 {
        let pos = Position::from_number(number).unwrap();
        assert_eq!(engine.board().cell_at(number), Ok(Cell::Placeholder(pos)));
    }
    assert!(!engine.player_has_won());
    assert!(!engine.draw_has_been_reached());
    assert_eq!(engine.player(), Player::One);
    assert_eq!(engine.turns(), 0);
    assert_eq!(engine.last_move(), None);
    assert_eq!(engine.status(), GameStatus::InProgress);
}
