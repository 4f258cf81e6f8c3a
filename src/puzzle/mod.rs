//! Puzzles with a known solution
//!
//! Used to exercise the solver without a device: grids are drawn from the
//! corpus, scrambled, and colored the way the game colors them.

pub mod generator;
pub mod scoring;

pub use generator::{GeneratorConfig, Puzzle, PuzzleGenerator, grid_words};
pub use scoring::score;
