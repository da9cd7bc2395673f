//! Game rules for tic-tac-toe
//!
//! Terminal-state detection: three in a row on any of the eight lines wins,
//! a full board without a line is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{evaluate, winning_line, TerminalResult, WIN_LINES};
