//! Board solving command
//!
//! Solves a scrambled board and, when every cell is known, plans the swaps
//! that turn the board into its solution.

use crate::core::{Board, Word};
use crate::solver::{SolveError, SolveOutcome, Solver};
use crate::swaps::{PlannerConfig, SwapError, SwapPlan, SwapPlanner};
use log::info;
use thiserror::Error;

/// Configuration for solving a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub plan_swaps: bool,
    pub planner: PlannerConfig,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            plan_swaps: true,
            planner: PlannerConfig::default(),
        }
    }
}

/// Why a board could not be turned into a swap plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveBoardError {
    #[error("board is infeasible: {0}")]
    Infeasible(#[from] SolveError),
    #[error("swap planning failed: {0}")]
    Planning(#[from] SwapError),
}

/// Result of solving a board
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub board: Board,
    pub outcome: SolveOutcome,
    /// Present when the board was fully solved and planning was requested
    pub plan: Option<SwapPlan>,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_complete()
    }
}

/// Solve `board` against `corpus`
///
/// An incomplete solution is reported through [`SolveResult::is_solved`]
/// and never planned.
///
/// # Errors
///
/// Returns an error if the board is infeasible or the swap search exceeds its
/// bound.
pub fn solve_board(
    board: &Board,
    corpus: &[Word],
    config: SolveConfig,
) -> Result<SolveResult, SolveBoardError> {
    let outcome = Solver::new(corpus).solve(board)?;
    info!(
        "solved {} of {} cells in {} passes",
        outcome.solution.filled_count(),
        crate::core::CELL_COUNT,
        outcome.passes
    );

    let plan = match outcome.solution.letter_bytes() {
        Some(target) if config.plan_swaps => {
            let planner = SwapPlanner::new(config.planner);
            Some(planner.plan(&board.letter_bytes(), &target)?)
        }
        _ => None,
    };

    Ok(SolveResult {
        board: board.clone(),
        outcome,
        plan,
    })
}
