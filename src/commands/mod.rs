//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod solve;
pub mod swaps;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, PuzzleOutcome, evaluate, run_benchmark};
pub use generate::{generate_puzzle, random_seed};
pub use solve::{SolveBoardError, SolveConfig, SolveResult, solve_board};
pub use swaps::plan_swaps;
