//! Side-by-side run of both search variants on one position
//!
//! Minimax and alpha-beta each search their own copy of the board; the
//! report carries both outcomes and how much work pruning saved.

use log::{debug, warn};
use serde::Serialize;

use crate::board::{Board, Mark};
use crate::engine::{best_move, round_ms, SearchOutcome};
use crate::error::{EngineError, Result};
use crate::rules::evaluate;
use crate::search::Algorithm;

/// Savings of alpha-beta over minimax
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    /// Minimax nodes minus alpha-beta nodes, never negative
    pub nodes_reduced: i64,
    /// Minimax time minus alpha-beta time; negative when timing noise dominates
    #[serde(rename = "timeReduced")]
    pub time_reduced_ms: f64,
    /// `nodes_reduced` as a rounded percentage of the minimax node count
    pub percentage_improvement: i64,
}

impl Improvement {
    /// Compute the savings of `alpha_beta` relative to `minimax`
    pub fn between(minimax: &SearchOutcome, alpha_beta: &SearchOutcome) -> Self {
        let nodes_reduced = minimax.nodes_explored as i64 - alpha_beta.nodes_explored as i64;
        let time_reduced_ms = round_ms(minimax.execution_time_ms - alpha_beta.execution_time_ms);

        let percentage_improvement = if minimax.nodes_explored == 0 {
            warn!("minimax explored no nodes, percentage improvement undefined");
            0
        } else {
            (nodes_reduced as f64 / minimax.nodes_explored as f64 * 100.0).round() as i64
        };

        Self {
            nodes_reduced,
            time_reduced_ms,
            percentage_improvement,
        }
    }
}

/// Both outcomes for one position plus the improvement between them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub minimax: SearchOutcome,
    pub alpha_beta: SearchOutcome,
    pub improvement: Improvement,
}

/// Run minimax and alpha-beta for `side` on the same position.
///
/// # Errors
///
/// [`EngineError::InvalidState`] when the board is already won or drawn.
pub fn compare(board: &Board, side: Mark) -> Result<ComparisonReport> {
    if evaluate(board).is_terminal() {
        return Err(EngineError::invalid_state("cannot compare on a finished game"));
    }

    let minimax_board = *board;
    let alpha_beta_board = *board;
    let minimax = best_move(&minimax_board, side, Algorithm::Minimax)?;
    let alpha_beta = best_move(&alpha_beta_board, side, Algorithm::AlphaBeta)?;
    let improvement = Improvement::between(&minimax, &alpha_beta);

    debug!(
        "compare for {side}: {} -> {} nodes ({}% fewer), {}ms saved",
        minimax.nodes_explored,
        alpha_beta.nodes_explored,
        improvement.percentage_improvement,
        improvement.time_reduced_ms
    );

    Ok(ComparisonReport {
        minimax,
        alpha_beta,
        improvement,
    })
}
