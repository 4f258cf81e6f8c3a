//! Gridle solving
//!
//! Candidate generation per row and column, and the propagation loop that
//! narrows the six candidate lists down to a solution.

pub mod axis;
pub mod candidates;
mod engine;
mod error;
mod solution;

pub use axis::{Axis, AxisWord};
pub use candidates::CandidateGenerator;
pub use engine::{Commit, SolveOutcome, Solver};
pub use error::SolveError;
pub use solution::Solution;
