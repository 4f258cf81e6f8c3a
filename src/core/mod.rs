//! Core domain types for gridle boards
//!
//! Letters, feedback colors, the 21-cell board and its fixed geometry.
//! Everything here is pure data with no I/O.

mod board;
mod feedback;
pub mod geometry;
mod letters;
mod word;

pub use board::{Board, BoardError, Cell};
pub use feedback::Feedback;
pub use geometry::{CELL_COUNT, GRID_SIZE, ScreenLayout};
pub use letters::{CharBag, LetterSet};
pub use word::{WORD_LEN, Word, WordError};
