//! Terminal evaluator
//!
//! A board is won when one mark fills any of the eight lines, drawn when
//! every cell is occupied without a winning line, and in progress otherwise.

use serde::Serialize;

use crate::board::{Bitboard, Board, Mark};

/// Winning line indices on the 3x3 board, in evaluation order
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Bit masks for `WIN_LINES`, same order
const WIN_MASKS: [Bitboard; 8] = [
    Bitboard::from_cells(&WIN_LINES[0]),
    Bitboard::from_cells(&WIN_LINES[1]),
    Bitboard::from_cells(&WIN_LINES[2]),
    Bitboard::from_cells(&WIN_LINES[3]),
    Bitboard::from_cells(&WIN_LINES[4]),
    Bitboard::from_cells(&WIN_LINES[5]),
    Bitboard::from_cells(&WIN_LINES[6]),
    Bitboard::from_cells(&WIN_LINES[7]),
];

/// Status of a board, recomputed on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalResult {
    InProgress,
    Win(Mark),
    Draw,
}

impl TerminalResult {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TerminalResult::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            TerminalResult::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Evaluate a board.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// completed line decides the winner. Total over any board.
pub fn evaluate(board: &Board) -> TerminalResult {
    let (x, o) = (board.stones(Mark::X), board.stones(Mark::O));
    for mask in WIN_MASKS {
        if x.contains(mask) {
            return TerminalResult::Win(Mark::X);
        }
        if o.contains(mask) {
            return TerminalResult::Win(Mark::O);
        }
    }

    if board.is_full() {
        TerminalResult::Draw
    } else {
        TerminalResult::InProgress
    }
}

/// Index of the first completed line, if any
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let (x, o) = (board.stones(Mark::X), board.stones(Mark::O));
    WIN_MASKS
        .iter()
        .position(|&mask| x.contains(mask) || o.contains(mask))
        .map(|i| WIN_LINES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_masks_match_lines() {
        for (line, mask) in WIN_LINES.iter().zip(WIN_MASKS.iter()) {
            let cells: Vec<usize> = mask.iter_ones().collect();
            assert_eq!(cells, line.to_vec());
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), TerminalResult::InProgress);
        assert!(!evaluate(&Board::new()).is_terminal());
    }

    #[test]
    fn test_win_horizontal() {
        assert_eq!(evaluate(&board("XXX/OO./...")), TerminalResult::Win(Mark::X));
        assert_eq!(evaluate(&board("XX./OOO/X..")), TerminalResult::Win(Mark::O));
    }

    #[test]
    fn test_win_vertical() {
        assert_eq!(evaluate(&board("OX./OX./O.X")), TerminalResult::Win(Mark::O));
        assert_eq!(evaluate(&board("O.X/O.X/..X")), TerminalResult::Win(Mark::X));
    }

    #[test]
    fn test_win_diagonal() {
        assert_eq!(evaluate(&board("XO./OX./..X")), TerminalResult::Win(Mark::X));
        assert_eq!(evaluate(&board("X.O/XO./O..")), TerminalResult::Win(Mark::O));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let b = board("XOX/OXO/OXX");
        assert!(b.is_full());
        assert_eq!(evaluate(&b), TerminalResult::Win(Mark::X));
    }

    #[test]
    fn test_draw() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(evaluate(&b), TerminalResult::Draw);
        assert!(evaluate(&b).is_terminal());
        assert_eq!(evaluate(&b).winner(), None);
    }

    #[test]
    fn test_in_progress_two_in_a_row() {
        assert_eq!(evaluate(&board("XX./OO./...")), TerminalResult::InProgress);
    }

    #[test]
    fn test_first_line_wins_in_enumeration_order() {
        // Unreachable position: both marks complete a line. Rows come first.
        let b = board("XXX/.../OOO");
        assert_eq!(evaluate(&b), TerminalResult::Win(Mark::X));
        // Column 0 for O is checked before diagonal for X
        let b = board("OX./OX./O.X");
        assert_eq!(winning_line(&b), Some([0, 3, 6]));
    }

    #[test]
    fn test_winning_line() {
        assert_eq!(winning_line(&board("X.O/.XO/..X")), Some([0, 4, 8]));
        assert_eq!(winning_line(&board("X.O/.X./...")), None);
    }
}
