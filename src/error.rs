//! Error types for the tic-tac-toe engine

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Mark;

/// Errors reported by the engine and the game session
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    #[error("no legal move available")]
    NoLegalMove,

    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("game already over")]
    GameOver,

    #[error("position {position} is already taken")]
    PositionTaken { position: usize },

    #[error("player {mark} is AI-controlled")]
    NotHumanTurn { mark: Mark },

    #[error("failed to load config '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl EngineError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        EngineError::InvalidState {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the engine's error type
pub type Result<T> = std::result::Result<T, EngineError>;
