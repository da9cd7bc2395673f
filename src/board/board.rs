//! Board structure: one bitboard per mark

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bitboard::{Bitboard, BitboardIter};
use super::{cell_index, Mark, BOARD_SIZE, TOTAL_CELLS};
use crate::error::EngineError;

/// Game board.
///
/// The two bitboards are private so a cell never holds both marks; read
/// them through [`Board::stones`]. A plain `Copy` value, so every engine call works on its own snapshot.
/// Serialized as a JSON array of nine `"X"`, `"O"` or `null` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Mark>>", into = "Vec<Option<Mark>>")]
pub struct Board {
    /// X marks bitboard
    x: Bitboard,
    /// O marks bitboard
    o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Get the mark at a cell index
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Mark> {
        if self.x.get(idx) {
            Some(Mark::X)
        } else if self.o.get(idx) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Check if cell is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        !self.x.get(idx) && !self.o.get(idx)
    }

    /// Place a mark, replacing whatever was in the cell
    #[inline]
    pub fn place(&mut self, idx: usize, mark: Mark) {
        self.clear(idx);
        self.stones_mut(mark).set(idx);
    }

    /// Empty a cell
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.x.clear(idx);
        self.o.clear(idx);
    }

    /// Get bitboard for a mark
    #[inline]
    pub fn stones(&self, mark: Mark) -> Bitboard {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    #[inline]
    fn stones_mut(&mut self, mark: Mark) -> &mut Bitboard {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Occupied cells of either mark
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x | self.o
    }

    /// Empty cell indices in ascending order
    #[inline]
    pub fn empty_cells(&self) -> BitboardIter {
        self.occupied().complement().iter_ones()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == Bitboard::full()
    }

    /// Number of cells holding `mark`
    #[inline]
    pub fn count(&self, mark: Mark) -> u32 {
        self.stones(mark).count()
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Side to move assuming X opened: X when the counts are equal, O otherwise
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> [Option<Mark>; TOTAL_CELLS] {
        let mut cells = [None; TOTAL_CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = self.get(idx);
        }
        cells
    }

    /// Compact one-line form, e.g. `XO.......`
    pub fn to_compact(&self) -> String {
        self.cells()
            .iter()
            .map(|cell| cell.map_or('.', Mark::to_char))
            .collect()
    }
}

impl TryFrom<&[Option<Mark>]> for Board {
    type Error = EngineError;

    fn try_from(cells: &[Option<Mark>]) -> Result<Self, Self::Error> {
        if cells.len() != TOTAL_CELLS {
            return Err(EngineError::invalid_input(format!(
                "board must have {TOTAL_CELLS} cells, got {}",
                cells.len()
            )));
        }
        let mut board = Board::new();
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(mark) = cell {
                board.place(idx, *mark);
            }
        }
        Ok(board)
    }
}

impl TryFrom<Vec<Option<Mark>>> for Board {
    type Error = EngineError;

    fn try_from(cells: Vec<Option<Mark>>) -> Result<Self, Self::Error> {
        Board::try_from(cells.as_slice())
    }
}

impl From<Board> for Vec<Option<Mark>> {
    fn from(board: Board) -> Self {
        board.cells().to_vec()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse nine cell symbols: `X`, `O` or one of `.`, `-`, `_` for empty.
    /// Whitespace and the row separators `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(TOTAL_CELLS);
        for (position, c) in s.chars().enumerate() {
            if c.is_whitespace() || c == '/' || c == '|' {
                continue;
            }
            let cell = match c {
                '.' | '-' | '_' => None,
                other => Some(Mark::from_char(other).ok_or_else(|| {
                    EngineError::invalid_input(format!(
                        "invalid character '{other}' at position {position} in '{s}'"
                    ))
                })?),
            };
            cells.push(cell);
        }
        Board::try_from(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let symbols: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    self.get(cell_index(row, col))
                        .map_or('.', Mark::to_char)
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
