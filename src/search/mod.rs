//! Search module for tic-tac-toe
//!
//! Contains:
//! - Per-search context: maximizing mark, node counter, terminal scoring
//! - Plain minimax over the full remaining tree
//! - Alpha-beta pruned minimax
//! - `Algorithm` selector used by the engine and the comparator

pub mod alphabeta;
pub mod context;
pub mod minimax;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::EngineError;

pub use alphabeta::alpha_beta;
pub use context::{Score, SearchContext, INFINITY, WIN_SCORE};
pub use minimax::minimax;

/// Depth at which the opponent's reply to a root candidate is searched
pub const REPLY_DEPTH: i32 = 1;

/// Tree-search variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Full minimax, no pruning
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        }
    }

    /// Score a root candidate already placed on `board`: the opponent replies
    /// next, so the search continues on the minimizing side.
    pub(crate) fn search_reply(self, ctx: &mut SearchContext, board: &mut Board) -> Score {
        match self {
            Algorithm::Minimax => minimax(ctx, board, REPLY_DEPTH, false),
            Algorithm::AlphaBeta => alpha_beta(ctx, board, REPLY_DEPTH, -INFINITY, INFINITY, false),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" | "ab" => Ok(Algorithm::AlphaBeta),
            other => Err(EngineError::invalid_input(format!(
                "unknown algorithm '{other}' (expected 'minimax' or 'alpha-beta')"
            ))),
        }
    }
}
