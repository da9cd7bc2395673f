//! Game session owned by the caller
//!
//! Turn order, controls, move history and the last search result live here,
//! outside the engine. Every engine call receives a copy of the session's
//! board, so the engine itself stays stateless.

use chrono::Utc;
use log::info;
use serde::Serialize;

use crate::board::{Board, Mark, TOTAL_CELLS};
use crate::compare::{compare, ComparisonReport};
use crate::config::{Control, GameMode, SessionConfig};
use crate::engine::{best_move, SearchOutcome};
use crate::error::{EngineError, Result};
use crate::rules::{evaluate, TerminalResult};
use crate::search::Algorithm;

/// One move played in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    #[serde(rename = "player")]
    pub mark: Mark,
    pub position: usize,
    /// Milliseconds since the Unix epoch (UTC)
    pub timestamp: i64,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Winner(Mark),
    Draw,
}

/// Summary of the moves played so far
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_moves: usize,
    pub x_moves: usize,
    pub o_moves: usize,
    pub game_mode: GameMode,
    pub ai_performance: Option<SearchOutcome>,
}

/// Main game state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    board: Board,
    current_player: Mark,
    config: SessionConfig,
    game_mode: GameMode,
    outcome: Option<GameResult>,
    move_history: Vec<MoveRecord>,
    ai_performance: Option<SearchOutcome>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            game_mode: config.mode(),
            config,
            outcome: None,
            move_history: Vec::new(),
            ai_performance: None,
        }
    }

    /// Start a new game, keeping controls and algorithms
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.game_mode = self.config.mode();
        self.outcome = None;
        self.move_history.clear();
        self.ai_performance = None;
        info!("new game ({})", self.game_mode);
    }

    /// Switch to a mode preset and start a new game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config = self.config.clone().with_mode(mode);
        self.reset();
    }

    pub fn set_control(&mut self, mark: Mark, control: Control) {
        self.config.player_mut(mark).control = control;
        self.game_mode = self.config.mode();
    }

    pub fn set_algorithm(&mut self, mark: Mark, algorithm: Algorithm) {
        self.config.player_mut(mark).algorithm = algorithm;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Mark {
        self.current_player
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.game_mode
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// Result of the most recent AI move
    #[inline]
    pub fn last_search(&self) -> Option<&SearchOutcome> {
        self.ai_performance.as_ref()
    }

    /// Check if the side to move is human-controlled
    pub fn is_human_turn(&self) -> bool {
        self.config.player(self.current_player).control == Control::Human
    }

    /// Check if the side to move is AI-controlled
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Play a human move for the side to move.
    ///
    /// If the game continues and the next side is AI-controlled, the AI
    /// replies immediately.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if position >= TOTAL_CELLS {
            return Err(EngineError::invalid_input(format!(
                "position {position} is out of bounds (must be 0-8)"
            )));
        }
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(EngineError::PositionTaken { position });
        }
        if !self.is_human_turn() {
            return Err(EngineError::NotHumanTurn {
                mark: self.current_player,
            });
        }

        self.execute_move(position);

        if !self.is_over() && self.is_ai_turn() {
            self.ai_move()?;
        }
        Ok(())
    }

    /// Let the engine pick and play the move for the side to move, using
    /// that side's configured algorithm.
    pub fn ai_move(&mut self) -> Result<SearchOutcome> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let algorithm = self.config.player(self.current_player).algorithm;
        let snapshot = self.board;
        let outcome = best_move(&snapshot, self.current_player, algorithm)?;

        self.execute_move(outcome.best_move);
        self.ai_performance = Some(outcome.clone());
        Ok(outcome)
    }

    /// Compare both algorithms on the current position for the side to move
    pub fn compare(&self) -> Result<ComparisonReport> {
        if self.is_over() {
            return Err(EngineError::invalid_state(
                "cannot compare algorithms when game is over",
            ));
        }
        compare(&self.board, self.current_player)
    }

    pub fn stats(&self) -> GameStats {
        let count = |mark: Mark| self.move_history.iter().filter(|m| m.mark == mark).count();
        GameStats {
            total_moves: self.move_history.len(),
            x_moves: count(Mark::X),
            o_moves: count(Mark::O),
            game_mode: self.game_mode,
            ai_performance: self.ai_performance.clone(),
        }
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, position: usize) {
        let mark = self.current_player;
        self.board.place(position, mark);
        self.move_history.push(MoveRecord {
            mark,
            position,
            timestamp: Utc::now().timestamp_millis(),
        });
        info!("{mark} plays {position}");

        self.outcome = match evaluate(&self.board) {
            TerminalResult::InProgress => None,
            TerminalResult::Win(winner) => Some(GameResult::Winner(winner)),
            TerminalResult::Draw => Some(GameResult::Draw),
        };

        match self.outcome {
            Some(result) => info!("game over: {result:?}"),
            None => self.current_player = mark.opponent(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
