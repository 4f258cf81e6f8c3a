//! Board model
//!
//! A `Board` holds the 21 active cells of a gridle puzzle, each with a letter
//! and a feedback color. Boards are immutable: solving produces a new board.

use super::feedback::Feedback;
use super::geometry::{CELL_COUNT, GRID_SIZE, POSITIONS, index_of};
use super::letters::CharBag;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub letter: u8,
    pub feedback: Feedback,
}

/// Errors raised while reading a board description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} board lines, found {found}")]
    LineCount { expected: usize, found: usize },
    #[error("line {line}: expected `<letters> <feedback>`, found {found:?}")]
    MalformedLine { line: usize, found: String },
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },
    #[error("cell ({row}, {col}): {letter:?} is not a letter")]
    InvalidLetter { row: usize, col: usize, letter: char },
    #[error("cell ({row}, {col}): unknown feedback {feedback:?}")]
    InvalidFeedback {
        row: usize,
        col: usize,
        feedback: char,
    },
    #[error("cell ({row}, {col}) is a hole but holds {found:?}")]
    FilledHole { row: usize, col: usize, found: char },
}

/// An immutable 21-cell gridle board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Build a board from letters and feedback in canonical index order
    ///
    /// # Errors
    /// Returns `BoardError` if either sequence is not 21 characters long, a
    /// letter is not ASCII alphabetic, or a feedback character is unknown.
    ///
    /// # Examples
    /// ```
    /// use gridle_solver::core::{Board, Feedback};
    ///
    /// let board = Board::from_compact(
    ///     "ecrohslotvertaarhotbe",
    ///     "-YYYGY-G-GGGGYG-GGG-Y",
    /// ).unwrap();
    /// assert_eq!(board.letters(), "ecrohslotvertaarhotbe");
    /// assert_eq!(board.cell(0, 4).unwrap().feedback, Feedback::Green);
    /// ```
    pub fn from_compact(letters: &str, feedback: &str) -> Result<Self, BoardError> {
        let letters: Vec<char> = letters.chars().collect();
        let feedback: Vec<char> = feedback.chars().collect();

        for found in [letters.len(), feedback.len()] {
            if found != CELL_COUNT {
                return Err(BoardError::CellCount {
                    expected: CELL_COUNT,
                    found,
                });
            }
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (index, &(row, col)) in POSITIONS.iter().enumerate() {
            cells.push(parse_cell(row, col, letters[index], feedback[index])?);
        }

        Ok(Self::from_cells(cells))
    }

    /// A fully solved board: every cell green
    #[must_use]
    pub fn solved(letters: &[u8; CELL_COUNT]) -> Self {
        let cells = POSITIONS
            .iter()
            .zip(letters)
            .map(|(&(row, col), &letter)| Cell {
                row,
                col,
                letter: letter.to_ascii_lowercase(),
                feedback: Feedback::Green,
            })
            .collect();
        Self::from_cells(cells)
    }

    /// Build a board from already validated letters and colors
    #[must_use]
    pub fn from_parts(letters: &[u8; CELL_COUNT], feedback: &[Feedback; CELL_COUNT]) -> Self {
        let cells = POSITIONS
            .iter()
            .zip(letters.iter().zip(feedback))
            .map(|(&(row, col), (&letter, &feedback))| Cell {
                row,
                col,
                letter: letter.to_ascii_lowercase(),
                feedback,
            })
            .collect();
        Self::from_cells(cells)
    }

    fn from_cells(cells: Vec<Cell>) -> Self {
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .unwrap_or_else(|v: Vec<Cell>| unreachable!("built {} cells", v.len()));
        Self { cells }
    }

    /// All cells in canonical index order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The cell at (row, column), or `None` for holes and out-of-range positions
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        index_of(row, col).map(|index| &self.cells[index])
    }

    /// Letters in canonical index order
    #[must_use]
    pub fn letters(&self) -> String {
        self.cells.iter().map(|cell| cell.letter as char).collect()
    }

    /// Letters as a byte array in canonical index order
    #[must_use]
    pub fn letter_bytes(&self) -> [u8; CELL_COUNT] {
        let mut bytes = [0u8; CELL_COUNT];
        for (slot, cell) in bytes.iter_mut().zip(&self.cells) {
            *slot = cell.letter;
        }
        bytes
    }

    /// Feedback characters in canonical index order
    #[must_use]
    pub fn feedback_string(&self) -> String {
        self.cells.iter().map(|cell| cell.feedback.to_char()).collect()
    }

    /// The multiset of tiles on the board
    #[must_use]
    pub fn char_bag(&self) -> CharBag {
        CharBag::from_bytes(&self.letter_bytes())
    }

    /// Whether every cell is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.feedback.is_green())
    }

    /// Number of green cells
    #[must_use]
    pub fn green_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.feedback.is_green())
            .count()
    }
}

fn parse_cell(row: usize, col: usize, letter: char, feedback: char) -> Result<Cell, BoardError> {
    if !letter.is_ascii_alphabetic() {
        return Err(BoardError::InvalidLetter { row, col, letter });
    }
    let feedback =
        Feedback::from_char(feedback).ok_or(BoardError::InvalidFeedback { row, col, feedback })?;

    Ok(Cell {
        row,
        col,
        letter: letter.to_ascii_lowercase() as u8,
        feedback,
    })
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse the five-line board file format
    ///
    /// Each row is `<letters> <feedback>`, five characters each, with `.`
    /// in the holes of rows 1 and 3. Blank lines and `#` comments are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .map(|(n, line)| (n + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if lines.len() != GRID_SIZE {
            return Err(BoardError::LineCount {
                expected: GRID_SIZE,
                found: lines.len(),
            });
        }

        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (row, &(line_no, line)) in lines.iter().enumerate() {
            let malformed = || BoardError::MalformedLine {
                line: line_no,
                found: line.to_string(),
            };

            let mut fields = line.split_whitespace();
            let (Some(letters), Some(feedback), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(malformed());
            };

            let letters: Vec<char> = letters.chars().collect();
            let feedback: Vec<char> = feedback.chars().collect();
            if letters.len() != GRID_SIZE || feedback.len() != GRID_SIZE {
                return Err(malformed());
            }

            for col in 0..GRID_SIZE {
                if index_of(row, col).is_some() {
                    cells.push(parse_cell(row, col, letters[col], feedback[col])?);
                } else {
                    for found in [letters[col], feedback[col]] {
                        if found != '.' {
                            return Err(BoardError::FilledHole { row, col, found });
                        }
                    }
                }
            }
        }

        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Board {
    /// Writes the five-line board file format accepted by `FromStr`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            let mut letters = String::with_capacity(GRID_SIZE);
            let mut feedback = String::with_capacity(GRID_SIZE);
            for col in 0..GRID_SIZE {
                match self.cell(row, col) {
                    Some(cell) => {
                        letters.push(cell.letter as char);
                        feedback.push(cell.feedback.to_char());
                    }
                    None => {
                        letters.push('.');
                        feedback.push('.');
                    }
                }
            }
            writeln!(f, "{letters} {feedback}")?;
        }
        Ok(())
    }
}
