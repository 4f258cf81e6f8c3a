//! Row-words and column-words
//!
//! An `Axis` names one of the six five-letter lines of the board. Rows and
//! columns share one contract and differ only in which coordinates they
//! select and which line crosses them.

use crate::core::geometry::{WORD_LINES, index_of, is_intersection};
use crate::core::{Board, Cell, Feedback, LetterSet, WORD_LEN};
use std::fmt;

/// One of the six word lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row(usize),
    Column(usize),
}

impl Axis {
    /// Every word line, in the order the solver visits them
    pub const ALL: [Self; 6] = [
        Self::Row(0),
        Self::Column(0),
        Self::Row(2),
        Self::Column(2),
        Self::Row(4),
        Self::Column(4),
    ];

    /// The row-word at `row`, if that row holds a full word
    #[must_use]
    pub fn row(row: usize) -> Option<Self> {
        WORD_LINES.contains(&row).then_some(Self::Row(row))
    }

    /// The column-word at `col`, if that column holds a full word
    #[must_use]
    pub fn column(col: usize) -> Option<Self> {
        WORD_LINES.contains(&col).then_some(Self::Column(col))
    }

    /// Row or column number of the line
    #[inline]
    #[must_use]
    pub const fn line(self) -> usize {
        match self {
            Self::Row(line) | Self::Column(line) => line,
        }
    }

    /// Position of this axis inside `Axis::ALL`
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::Row(line) => line,
            Self::Column(line) => line + 1,
        }
    }

    /// Grid coordinates of the letter at `index` within the word
    #[inline]
    #[must_use]
    pub const fn position(self, index: usize) -> (usize, usize) {
        match self {
            Self::Row(row) => (row, index),
            Self::Column(col) => (index, col),
        }
    }

    /// Canonical board indices of the word's cells, in word order
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..WORD_LEN).filter_map(move |index| {
            let (row, col) = self.position(index);
            index_of(row, col)
        })
    }

    /// Whether the cell at (row, column) lies on this line
    #[inline]
    #[must_use]
    pub const fn owns(self, row: usize, col: usize) -> bool {
        match self {
            Self::Row(line) => row == line,
            Self::Column(line) => col == line,
        }
    }

    /// The perpendicular word crossing this one at `index`
    ///
    /// Only indices 0, 2 and 4 are intersections.
    #[must_use]
    pub const fn crossing(self, index: usize) -> Option<Self> {
        let (row, col) = self.position(index);
        if !is_intersection(row, col) {
            return None;
        }
        Some(match self {
            Self::Row(_) => Self::Column(col),
            Self::Column(_) => Self::Row(row),
        })
    }

    /// Index at which `other` crosses this word
    #[must_use]
    pub const fn crossing_index(self, other: Self) -> Option<usize> {
        match (self, other) {
            (Self::Row(_), Self::Column(col)) => Some(col),
            (Self::Column(_), Self::Row(row)) => Some(row),
            _ => None,
        }
    }

    /// View this line over a board
    #[must_use]
    pub const fn on(self, board: &Board) -> AxisWord<'_> {
        AxisWord { axis: self, board }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row {row}"),
            Self::Column(col) => write!(f, "column {col}"),
        }
    }
}

/// The five cells of one line together with the rest of the board
#[derive(Debug, Clone, Copy)]
pub struct AxisWord<'a> {
    axis: Axis,
    board: &'a Board,
}

impl<'a> AxisWord<'a> {
    #[inline]
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    /// The cell at `index` within the word
    ///
    /// # Panics
    /// Panics if `index >= 5`
    #[must_use]
    pub fn cell(&self, index: usize) -> &'a Cell {
        let (row, col) = self.axis.position(index);
        self.board
            .cell(row, col)
            .unwrap_or_else(|| unreachable!("word lines only cover active cells"))
    }

    /// The five cells of the word in reading order
    #[must_use]
    pub fn cells(&self) -> [&'a Cell; WORD_LEN] {
        std::array::from_fn(|index| self.cell(index))
    }

    /// Cells of the board that do not lie on this line
    pub fn foreign_cells(&self) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let axis = self.axis;
        self.board
            .cells()
            .iter()
            .filter(move |cell| !axis.owns(cell.row, cell.col))
    }

    /// The perpendicular word crossing at `index`, if any
    #[must_use]
    pub fn crossing(&self, index: usize) -> Option<AxisWord<'a>> {
        self.axis.crossing(index).map(|axis| axis.on(self.board))
    }

    /// Letters of this word whose cell carries `feedback`
    #[must_use]
    pub fn letters_with(&self, feedback: Feedback) -> LetterSet {
        self.cells()
            .iter()
            .filter(|cell| cell.feedback == feedback)
            .map(|cell| cell.letter)
            .collect()
    }
}
