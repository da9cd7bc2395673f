//! Per-search bookkeeping shared by both tree-search variants

use crate::board::Mark;
use crate::rules::TerminalResult;

/// Score of a position from the maximizing side's point of view
pub type Score = i32;

/// Bound used for the alpha-beta window and for the initial best score.
/// Far outside every reachable depth-adjusted score.
pub const INFINITY: Score = 10_000;

/// Base score of a won position before depth adjustment
pub const WIN_SCORE: Score = 10;

/// State for one top-level search.
///
/// Holds the maximizing mark and the node counter that every recursive
/// invocation increments exactly once. A context is created per search and
/// never shared between concurrent searches.
#[derive(Debug, Clone)]
pub struct SearchContext {
    maximizer: Mark,
    nodes: u64,
}

impl SearchContext {
    pub fn new(maximizer: Mark) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    /// Nodes visited so far
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub(crate) fn visit(&mut self) {
        self.nodes += 1;
    }

    /// Mark placed by the side currently to move in the tree
    #[inline]
    pub fn mark_to_move(&self, maximizing: bool) -> Mark {
        if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        }
    }

    /// Depth-adjusted score of a terminal position, `None` while in progress.
    ///
    /// Quicker wins score higher and slower losses score less negative.
    #[inline]
    pub fn terminal_score(&self, result: TerminalResult, depth: i32) -> Option<Score> {
        match result {
            TerminalResult::InProgress => None,
            TerminalResult::Draw => Some(0),
            TerminalResult::Win(mark) if mark == self.maximizer => Some(WIN_SCORE - depth),
            TerminalResult::Win(_) => Some(depth - WIN_SCORE),
        }
    }
}
