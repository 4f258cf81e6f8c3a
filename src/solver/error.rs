//! Solver errors
//!
//! Both variants mean the board cannot be the one the feedback describes,
//! usually because of a misread tile or a corpus gap upstream.

use super::axis::Axis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("{axis} commits {word:?} but cell ({row}, {col}) already holds {existing:?}")]
    Conflict {
        axis: Axis,
        word: String,
        row: usize,
        col: usize,
        existing: char,
    },
    #[error("{axis} commits {word:?} but no {letter:?} tile is left on the board")]
    LetterUnavailable {
        axis: Axis,
        word: String,
        letter: char,
    },
}
