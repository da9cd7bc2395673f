//! Tic-tac-toe search engine
//!
//! An exhaustive adversarial search engine for 3x3 tic-tac-toe with two
//! interchangeable strategies:
//! - Full minimax over the remaining game tree
//! - Minimax with alpha-beta pruning
//!
//! Both report the nodes they visited and the wall-clock time they took, and
//! the comparator runs them side by side on the same position.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with 9-bit bitboards
//! - [`rules`]: Terminal evaluation (win, draw, in progress)
//! - [`search`]: Minimax and alpha-beta tree search
//! - [`engine`]: Move selection over one search variant
//! - [`compare`]: Minimax vs alpha-beta on the same position
//! - [`session`]: Game session for callers (turns, controls, history)
//! - [`config`]: Session configuration
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{best_move, compare, Algorithm, Board, Mark};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//!
//! let outcome = best_move(&board, Mark::X, Algorithm::Minimax).unwrap();
//! assert_eq!(outcome.best_move, 2);
//!
//! let report = compare(&board, Mark::X).unwrap();
//! assert!(report.alpha_beta.nodes_explored <= report.minimax.nodes_explored);
//! ```
//!
//! The engine keeps no state between calls. Every call works on its own
//! copy of the board and its own node counter, so concurrent callers need no
//! locking.

pub mod board;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, BOARD_SIZE, TOTAL_CELLS};
pub use compare::{compare, ComparisonReport, Improvement};
pub use config::{Control, GameMode, PlayerConfig, SessionConfig};
pub use engine::{best_move, SearchOutcome};
pub use error::{EngineError, Result};
pub use rules::{evaluate, TerminalResult};
pub use search::{Algorithm, Score};
pub use session::{GameResult, GameSession, GameStats, MoveRecord};
