//! Minimax with alpha-beta pruning
//!
//! Same recursion and scoring as [`minimax`](super::minimax::minimax), but
//! keeps an `[alpha, beta]` window and stops exploring siblings once
//! `beta <= alpha`. Returns exactly the minimax value for any position
//! searched with the full window while visiting no more nodes.

use crate::board::Board;
use crate::rules::evaluate;

use super::context::{Score, SearchContext, INFINITY};

/// Alpha-beta value of `board` with the maximizer from `ctx`.
///
/// Start with `alpha = -INFINITY` and `beta = INFINITY`. Trial marks are
/// removed again before returning.
pub fn alpha_beta(
    ctx: &mut SearchContext,
    board: &mut Board,
    depth: i32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Score {
    ctx.visit();

    if let Some(score) = ctx.terminal_score(evaluate(board), depth) {
        return score;
    }

    let mark = ctx.mark_to_move(maximizing);

    if maximizing {
        let mut best = -INFINITY;
        for idx in board.empty_cells() {
            board.place(idx, mark);
            let score = alpha_beta(ctx, board, depth + 1, alpha, beta, false);
            board.clear(idx);

            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // beta cutoff
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for idx in board.empty_cells() {
            board.place(idx, mark);
            let score = alpha_beta(ctx, board, depth + 1, alpha, beta, true);
            board.clear(idx);

            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break; // alpha cutoff
            }
        }
        best
    }
}
