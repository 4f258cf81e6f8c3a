//! Gridle Solver
//!
//! Solves gridle puzzles: six crossing five-letter words scrambled over a
//! 21-tile board. Feedback colors are propagated into a unique grid, then the
//! shortest sequence of tile swaps that unscrambles the board is planned.
//!
//! # Quick Start
//!
//! ```rust
//! use gridle_solver::core::Board;
//! use gridle_solver::solver::Solver;
//! use gridle_solver::swaps::SwapPlanner;
//! use gridle_solver::wordlists::{CORPUS_EN, loader::words_from_slice};
//!
//! let corpus = words_from_slice(CORPUS_EN);
//! let board = Board::from_compact("ecrohslotvertaarhotbe", "-YYYGY-G-GGGGYG-GGG-Y").unwrap();
//!
//! let outcome = Solver::new(&corpus).solve(&board).unwrap();
//! let target = outcome.solution.letter_bytes().unwrap();
//!
//! let plan = SwapPlanner::default().plan(&board.letter_bytes(), &target).unwrap();
//! println!("{} swaps", plan.len());
//! ```

// Board model
pub mod core;

// Propagation solver
pub mod solver;

// Minimum swap planning
pub mod swaps;

// Generated puzzles for testing and benchmarks
pub mod puzzle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
