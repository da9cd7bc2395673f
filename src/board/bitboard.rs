//! Bitboard implementation for the 3x3 grid

use std::ops::{BitAnd, BitOr};

use super::TOTAL_CELLS;

/// Mask covering all nine cells
const FULL_MASK: u16 = (1 << TOTAL_CELLS) - 1;

/// One bit per cell, bit `i` is cell index `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a bitboard from raw bits; bits above cell 8 are dropped
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & FULL_MASK,
        }
    }

    /// Build a bitboard with the given cells set
    pub const fn from_cells(cells: &[usize]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < cells.len() {
            bits |= 1 << cells[i];
            i += 1;
        }
        Self::from_bits(bits)
    }

    /// Every cell set
    pub const fn full() -> Self {
        Self { bits: FULL_MASK }
    }

    /// Set a bit at cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits |= 1 << idx;
    }

    /// Clear a bit at cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits &= !(1 << idx);
    }

    /// Check if bit is set at cell index
    #[inline]
    pub fn get(self, idx: usize) -> bool {
        debug_assert!(idx < TOTAL_CELLS);
        (self.bits >> idx) & 1 == 1
    }

    /// Count set bits
    #[inline]
    pub fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// True when every cell set in `mask` is also set here
    #[inline]
    pub fn contains(self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// Cells not set in this bitboard
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard::from_bits(!self.bits)
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }
}
