//! Board structure with move validation and enumeration

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone};
use crate::rules::has_five_in_row;

/// Square game board. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Create an empty board of side `size`.
    ///
    /// The caller is responsible for `size >= MIN_BOARD_SIZE`. There is no
    /// upper bound here; the interactive game caps it in `GameConfig`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            black: Bitboard::new(size * size),
            white: Bitboard::new(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u16;
        Pos::new(c, c)
    }

    /// Check that signed coordinates fall on the board
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.in_bounds(row, col) {
            Some(self.get(Pos::new(row as u16, col as u16)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.size);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// True iff `(row, col)` is on the board and the cell is empty
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        self.get_at(row, col) == Some(Stone::Empty)
    }

    /// Place `stone` at `(row, col)` if the move is valid.
    ///
    /// Returns false and leaves the board untouched otherwise.
    pub fn make_move(&mut self, row: i32, col: i32, stone: Stone) -> bool {
        if stone == Stone::Empty || !self.is_valid_move(row, col) {
            return false;
        }
        self.place_stone(Pos::new(row as u16, col as u16), stone);
        true
    }

    /// Place a stone without validation.
    /// Use `make_move` for game moves
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.size);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Place `stone` at `pos`, run `f`, then reset the cell to empty.
    ///
    /// `pos` must be empty on entry; it is empty again on return.
    #[inline]
    pub fn with_stone<R>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert!(self.is_empty(pos));
        self.place_stone(pos, stone);
        let result = f(self);
        self.remove_stone(pos);
        result
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Iterate over the positions of one color in row-major order
    pub fn positions(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.stones(stone)
            .into_iter()
            .flat_map(|bb| bb.iter_ones())
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// All empty cells, row ascending then column ascending.
    ///
    /// Search relies on this order for tie-breaking.
    pub fn available_moves(&self) -> Vec<Pos> {
        let total = self.size * self.size;
        let mut moves = Vec::with_capacity(total - self.stone_count() as usize);
        for idx in 0..total {
            if !self.black.get(idx) && !self.white.get(idx) {
                moves.push(Pos::from_index(idx, self.size));
            }
        }
        moves
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// True iff `stone` has five or more in a row
    #[inline]
    pub fn check_winner(&self, stone: Stone) -> bool {
        has_five_in_row(self, stone)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:2} ")?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r:2} ")?;
            for c in 0..self.size {
                let stone = self.get(Pos::new(r as u16, c as u16));
                write!(f, "{:>2} ", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
