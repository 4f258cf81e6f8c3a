//! Minimum swap planning
//!
//! Duplicate letters make the tile-to-target assignment ambiguous. Every
//! consistent assignment is enumerated, the one with the most cycles wins,
//! and it is then unshuffled into transpositions.

use super::permutation::{Permutation, Swap, count_cycles};
use log::debug;
use thiserror::Error;

/// Upper bound on assignments enumerated before giving up
pub const DEFAULT_MAX_BIJECTIONS: usize = 250_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("sequences differ in length: {original} vs {target}")]
    LengthMismatch { original: usize, target: usize },
    #[error("target is not a rearrangement of the original tiles")]
    NotAPermutation,
    #[error("more than {limit} candidate assignments; raise the limit to continue")]
    SearchSpaceExceeded { limit: usize },
}

/// Planner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub max_bijections: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_bijections: DEFAULT_MAX_BIJECTIONS,
        }
    }
}

/// A shortest swap sequence and how much searching it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    pub swaps: Vec<Swap>,
    pub permutation: Permutation,
    pub bijections_explored: usize,
}

impl SwapPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwapPlanner {
    config: PlannerConfig,
}

impl SwapPlanner {
    #[must_use]
    pub const fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Shortest list of swaps turning `original` into `target`
    ///
    /// Among equally short plans the first assignment found wins, so the
    /// result is deterministic for a given input.
    ///
    /// # Errors
    /// Returns `SwapError` when the inputs are not rearrangements of each
    /// other or the assignment space exceeds the configured bound.
    ///
    /// # Examples
    /// ```
    /// use gridle_solver::swaps::{SwapPlanner, apply_swaps};
    ///
    /// let plan = SwapPlanner::default().plan(b"trace", b"crate").unwrap();
    /// assert_eq!(plan.len(), 1);
    /// assert_eq!(apply_swaps(b"trace", &plan.swaps), b"crate");
    /// ```
    pub fn plan<T: Ord>(&self, original: &[T], target: &[T]) -> Result<SwapPlan, SwapError> {
        if original.len() != target.len() {
            return Err(SwapError::LengthMismatch {
                original: original.len(),
                target: target.len(),
            });
        }
        if !same_multiset(original, target) {
            return Err(SwapError::NotAPermutation);
        }

        let options = target_options(original, target);
        let mut search = Search::new(&options, self.config.max_bijections);
        search.run(0)?;

        let explored = search.explored;
        let best = search.best.ok_or(SwapError::NotAPermutation)?;
        let permutation = Permutation::new(best).ok_or(SwapError::NotAPermutation)?;
        let swaps = permutation.to_swaps();
        debug!(
            "explored {explored} assignments, best has {} cycles, {} swaps",
            permutation.cycle_count(),
            swaps.len()
        );

        Ok(SwapPlan {
            swaps,
            permutation,
            bijections_explored: explored,
        })
    }
}

fn same_multiset<T: Ord>(a: &[T], b: &[T]) -> bool {
    let mut a: Vec<&T> = a.iter().collect();
    let mut b: Vec<&T> = b.iter().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Positions each tile may move to
///
/// A tile already in place stays there: keeping a fixed point never costs a
/// swap, so the optimum is unchanged while the search shrinks.
fn target_options<T: Ord>(original: &[T], target: &[T]) -> Vec<Vec<usize>> {
    let fixed: Vec<bool> = original.iter().zip(target).map(|(a, b)| a == b).collect();
    original
        .iter()
        .enumerate()
        .map(|(position, tile)| {
            if fixed[position] {
                return vec![position];
            }
            target
                .iter()
                .enumerate()
                .filter(|&(slot, letter)| !fixed[slot] && letter == tile)
                .map(|(slot, _)| slot)
                .collect()
        })
        .collect()
}

/// Depth-first enumeration of assignments keeping the one with most cycles
struct Search<'a> {
    options: &'a [Vec<usize>],
    limit: usize,
    assignment: Vec<usize>,
    used: Vec<bool>,
    explored: usize,
    best: Option<Vec<usize>>,
    best_cycles: usize,
}

impl<'a> Search<'a> {
    fn new(options: &'a [Vec<usize>], limit: usize) -> Self {
        Self {
            options,
            limit,
            assignment: Vec::with_capacity(options.len()),
            used: vec![false; options.len()],
            explored: 0,
            best: None,
            best_cycles: 0,
        }
    }

    fn run(&mut self, position: usize) -> Result<(), SwapError> {
        if position == self.options.len() {
            return self.record();
        }

        let options = self.options;
        for &slot in &options[position] {
            if self.used[slot] {
                continue;
            }
            self.used[slot] = true;
            self.assignment.push(slot);
            self.run(position + 1)?;
            self.assignment.pop();
            self.used[slot] = false;
        }
        Ok(())
    }

    fn record(&mut self) -> Result<(), SwapError> {
        self.explored += 1;
        if self.explored > self.limit {
            return Err(SwapError::SearchSpaceExceeded { limit: self.limit });
        }

        let cycles = count_cycles(&self.assignment);
        if self.best.is_none() || cycles > self.best_cycles {
            self.best_cycles = cycles;
            self.best = Some(self.assignment.clone());
        }
        Ok(())
    }
}
