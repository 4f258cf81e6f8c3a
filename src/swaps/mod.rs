//! Turning a scrambled board into its solution with as few swaps as possible

pub mod permutation;
pub mod planner;

pub use permutation::{Permutation, Swap, apply_swaps};
pub use planner::{DEFAULT_MAX_BIJECTIONS, PlannerConfig, SwapError, SwapPlan, SwapPlanner};
