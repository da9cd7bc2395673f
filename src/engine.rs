//! Move selection over one tree-search variant
//!
//! For every empty cell, in ascending index order, the searching side's mark
//! is placed and the opponent's best reply is searched with the chosen
//! variant. The cell with the strictly greatest score wins, so among equal
//! scores the lowest index is kept.
//!
//! # Example
//!
//! ```
//! use tictactoe::{best_move, Algorithm, Board, Mark};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let outcome = best_move(&board, Mark::X, Algorithm::AlphaBeta).unwrap();
//! assert_eq!(outcome.best_move, 2);
//! println!("Nodes: {}, time: {}ms", outcome.nodes_explored, outcome.execution_time_ms);
//! ```

use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::board::{Board, Mark};
use crate::error::{EngineError, Result};
use crate::rules::evaluate;
use crate::search::{Algorithm, Score, SearchContext};

/// Result of a move search with its statistics.
///
/// Serializes to the `bestMove` / `nodesExplored` / `executionTime` /
/// `algorithm` shape callers consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Variant that produced this result
    pub algorithm: Algorithm,
    /// Mark the move was chosen for
    pub side: Mark,
    /// Chosen cell index (0-8)
    pub best_move: usize,
    /// Score of the chosen cell from `side`'s point of view
    pub score: Score,
    /// Search invocations across all candidate cells
    pub nodes_explored: u64,
    /// Wall-clock time of the whole search in milliseconds, two decimals
    #[serde(rename = "executionTime")]
    pub execution_time_ms: f64,
}

/// Choose the best move for `side` on `board`.
///
/// The search runs on a private copy of `board`.
///
/// # Errors
///
/// - [`EngineError::NoLegalMove`] when the board has no empty cell.
/// - [`EngineError::InvalidState`] when the board is already won.
pub fn best_move(board: &Board, side: Mark, algorithm: Algorithm) -> Result<SearchOutcome> {
    if board.is_full() {
        return Err(EngineError::NoLegalMove);
    }
    if let Some(winner) = evaluate(board).winner() {
        return Err(EngineError::invalid_state(format!(
            "game already won by {winner}"
        )));
    }

    let start = Instant::now();
    let mut scratch = *board;
    let mut ctx = SearchContext::new(side);
    let mut best: Option<(usize, Score)> = None;

    for idx in board.empty_cells() {
        scratch.place(idx, side);
        let score = algorithm.search_reply(&mut ctx, &mut scratch);
        scratch.clear(idx);

        // Strictly better than any move found so far
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((idx, score));
        }
    }

    let execution_time_ms = elapsed_ms(start);
    let (best_move, score) = best.ok_or(EngineError::NoLegalMove)?;

    debug!(
        "{algorithm} for {side}: move {best_move} score {score}, {} nodes in {execution_time_ms}ms",
        ctx.nodes()
    );

    Ok(SearchOutcome {
        algorithm,
        side,
        best_move,
        score,
        nodes_explored: ctx.nodes(),
        execution_time_ms,
    })
}

/// Round milliseconds to two decimals
#[inline]
pub(crate) fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    round_ms(start.elapsed().as_secs_f64() * 1000.0)
}
