//! The solution grid built up by the solver

use super::axis::Axis;
use super::error::SolveError;
use crate::core::geometry::{CELL_COUNT, GRID_SIZE, POSITIONS};
use crate::core::{Board, CharBag, WORD_LEN, Word};
use std::fmt;

/// A partially or fully solved board
///
/// Holds at most one letter per active cell. A shared intersection is
/// written once and satisfies both of its words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    grid: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
}

impl Solution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter at (row, column), if solved
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.grid.get(row)?.get(col).copied().flatten()
    }

    /// Number of solved cells
    #[must_use]
    pub fn filled_count(&self) -> usize {
        POSITIONS
            .iter()
            .filter(|&&(row, col)| self.grid[row][col].is_some())
            .count()
    }

    /// Whether all 21 cells are solved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }

    /// Whether `word` agrees with every solved cell of `axis`
    #[must_use]
    pub fn agrees(&self, axis: Axis, word: &Word) -> bool {
        (0..WORD_LEN).all(|index| {
            let (row, col) = axis.position(index);
            self.grid[row][col].is_none_or(|known| known == word.char_at(index))
        })
    }

    /// Write `word` along `axis`, drawing each newly filled tile from `bag`
    ///
    /// Cells that are already solved must hold the same letter and draw
    /// nothing, so a shared tile is taken from the bag exactly once. Nothing
    /// is written or drawn when an error is returned.
    ///
    /// Returns the number of newly filled cells.
    ///
    /// # Errors
    /// `SolveError::Conflict` if a solved cell disagrees with `word`;
    /// `SolveError::LetterUnavailable` if the bag cannot supply a new tile.
    pub fn commit(&mut self, axis: Axis, word: &Word, bag: &mut CharBag) -> Result<usize, SolveError> {
        let mut fresh = Vec::with_capacity(WORD_LEN);
        for index in 0..WORD_LEN {
            let (row, col) = axis.position(index);
            let letter = word.char_at(index);
            match self.grid[row][col] {
                Some(existing) if existing != letter => {
                    return Err(SolveError::Conflict {
                        axis,
                        word: word.text().to_string(),
                        row,
                        col,
                        existing: existing as char,
                    });
                }
                Some(_) => {}
                None => fresh.push((row, col, letter)),
            }
        }

        let mut drawn = bag.clone();
        for &(_, _, letter) in &fresh {
            if !drawn.take(letter) {
                return Err(SolveError::LetterUnavailable {
                    axis,
                    word: word.text().to_string(),
                    letter: letter as char,
                });
            }
        }

        *bag = drawn;
        for &(row, col, letter) in &fresh {
            self.grid[row][col] = Some(letter);
        }
        Ok(fresh.len())
    }

    /// Letters in canonical index order, `.` for unsolved cells
    #[must_use]
    pub fn letters(&self) -> String {
        POSITIONS
            .iter()
            .map(|&(row, col)| self.grid[row][col].map_or('.', char::from))
            .collect()
    }

    /// Letters in canonical index order, once every cell is solved
    #[must_use]
    pub fn letter_bytes(&self) -> Option<[u8; CELL_COUNT]> {
        let mut bytes = [0u8; CELL_COUNT];
        for (slot, &(row, col)) in bytes.iter_mut().zip(&POSITIONS) {
            *slot = self.grid[row][col]?;
        }
        Some(bytes)
    }

    /// The solved layout as an all-green board
    #[must_use]
    pub fn to_board(&self) -> Option<Board> {
        self.letter_bytes().map(|bytes| Board::solved(&bytes))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row.iter().map(|cell| cell.map_or(' ', char::from)).collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
