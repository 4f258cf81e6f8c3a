//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_puzzle, print_solution, print_solve_result,
    print_swap_plan,
};
