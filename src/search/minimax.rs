//! Plain minimax over the full remaining game tree
//!
//! Visits every reachable node below the given position. Used as the
//! reference the pruned search is measured against.

use crate::board::Board;
use crate::rules::evaluate;

use super::context::{Score, SearchContext, INFINITY};

/// Minimax value of `board` with the maximizer from `ctx`.
///
/// Trial marks are placed on `board` and removed again before returning, so
/// the caller sees the board unchanged. Empty cells are tried in ascending
/// index order.
///
/// A non-terminal board without empty cells cannot occur; if it did, the
/// extremal sentinel (`-INFINITY` when maximizing, `INFINITY` otherwise) is
/// returned and must not be read as a real score.
pub fn minimax(ctx: &mut SearchContext, board: &mut Board, depth: i32, maximizing: bool) -> Score {
    ctx.visit();

    if let Some(score) = ctx.terminal_score(evaluate(board), depth) {
        return score;
    }

    let mark = ctx.mark_to_move(maximizing);
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for idx in board.empty_cells() {
        board.place(idx, mark);
        let score = minimax(ctx, board, depth + 1, !maximizing);
        board.clear(idx);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_minimax_full_tree_from_empty_board() {
        let mut ctx = SearchContext::new(Mark::X);
        let mut board = Board::new();
        let score = minimax(&mut ctx, &mut board, 0, true);
        assert_eq!(score, 0, "Perfect play from the empty board is a draw");
        assert_eq!(ctx.nodes(), 549_946);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_minimax_terminal_board_is_one_node() {
        let mut ctx = SearchContext::new(Mark::X);
        let mut board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&mut ctx, &mut board, 4, false), 6);
        assert_eq!(ctx.nodes(), 1);
    }

    #[test]
    fn test_minimax_finds_immediate_win() {
        let mut ctx = SearchContext::new(Mark::X);
        let mut board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(minimax(&mut ctx, &mut board, 0, true), 9);
        assert_eq!(ctx.nodes(), 157);
    }

    #[test]
    fn test_minimax_minimizing_side_wins_first() {
        let mut ctx = SearchContext::new(Mark::X);
        let mut board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(minimax(&mut ctx, &mut board, 0, false), -9);
        assert_eq!(ctx.nodes(), 145);
    }

    #[test]
    fn test_minimax_restores_board() {
        let original: Board = "X.O/.X./...".parse().unwrap();
        let mut board = original;
        let mut ctx = SearchContext::new(Mark::O);
        minimax(&mut ctx, &mut board, 0, true);
        assert_eq!(board, original);
    }

    #[test]
    fn test_minimax_full_board_scores_draw() {
        let mut ctx = SearchContext::new(Mark::X);
        let mut board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(minimax(&mut ctx, &mut board, 0, true), 0);
    }
}
