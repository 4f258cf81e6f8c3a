//! Benchmark command
//!
//! Generates seeded puzzles and measures how many the solver handles.

use super::solve::{SolveBoardError, SolveConfig, solve_board};
use crate::core::Word;
use crate::puzzle::{GeneratorConfig, Puzzle, PuzzleGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub puzzles: usize,
    pub seed: u64,
    pub generator: GeneratorConfig,
    pub solve: SolveConfig,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            puzzles: 50,
            seed: 0,
            generator: GeneratorConfig::default(),
            solve: SolveConfig::default(),
            show_progress: false,
        }
    }
}

/// What happened to one generated puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleOutcome {
    /// Every cell deduced; `swaps` is the planned swap count
    Solved { swaps: usize, matches_generated: bool },
    /// The solver reached a fixed point with cells left open
    Partial { filled: usize },
    /// A commit contradicted the board
    Infeasible,
    /// The swap search exceeded its bound
    PlanningFailed,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub requested: usize,
    pub generated: usize,
    pub solved: usize,
    /// Solved boards whose solution differs from the generated grid
    pub alternate_solutions: usize,
    pub partial: usize,
    pub infeasible: usize,
    pub planning_failed: usize,
    pub average_swaps: f64,
    pub max_swaps: usize,
    pub swap_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.generated == 0 {
            0.0
        } else {
            self.solved as f64 / self.generated as f64
        }
    }
}

/// Generate `config.puzzles` boards and solve them in parallel
///
/// Generation is sequential from one seeded RNG, so a seed always yields the
/// same puzzle set regardless of thread count.
#[must_use]
pub fn run_benchmark(corpus: &[Word], config: &BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();

    let generator = PuzzleGenerator::new(corpus, config.generator);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let puzzles: Vec<Puzzle> = (0..config.puzzles)
        .filter_map(|_| generator.generate(&mut rng))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<PuzzleOutcome> = puzzles
        .par_iter()
        .map(|puzzle| {
            let outcome = evaluate(puzzle, corpus, config.solve);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(config.puzzles, &outcomes, start.elapsed())
}

/// Solve one puzzle and classify the result
#[must_use]
pub fn evaluate(puzzle: &Puzzle, corpus: &[Word], config: SolveConfig) -> PuzzleOutcome {
    match solve_board(&puzzle.board, corpus, config) {
        Ok(result) => match result.outcome.solution.letter_bytes() {
            Some(letters) => PuzzleOutcome::Solved {
                swaps: result.plan.map_or(0, |plan| plan.len()),
                matches_generated: letters == puzzle.solution,
            },
            None => PuzzleOutcome::Partial {
                filled: result.outcome.solution.filled_count(),
            },
        },
        Err(SolveBoardError::Infeasible(_)) => PuzzleOutcome::Infeasible,
        Err(SolveBoardError::Planning(_)) => PuzzleOutcome::PlanningFailed,
    }
}

fn summarize(requested: usize, outcomes: &[PuzzleOutcome], duration: Duration) -> BenchmarkResult {
    let mut solved = 0;
    let mut alternate_solutions = 0;
    let mut partial = 0;
    let mut infeasible = 0;
    let mut planning_failed = 0;
    let mut total_swaps = 0;
    let mut max_swaps = 0;
    let mut swap_distribution: HashMap<usize, usize> = HashMap::new();

    for outcome in outcomes {
        match *outcome {
            PuzzleOutcome::Solved {
                swaps,
                matches_generated,
            } => {
                solved += 1;
                if !matches_generated {
                    alternate_solutions += 1;
                }
                total_swaps += swaps;
                max_swaps = max_swaps.max(swaps);
                *swap_distribution.entry(swaps).or_insert(0) += 1;
            }
            PuzzleOutcome::Partial { .. } => partial += 1,
            PuzzleOutcome::Infeasible => infeasible += 1,
            PuzzleOutcome::PlanningFailed => planning_failed += 1,
        }
    }

    let generated = outcomes.len();
    BenchmarkResult {
        requested,
        generated,
        solved,
        alternate_solutions,
        partial,
        infeasible,
        planning_failed,
        average_swaps: if solved > 0 {
            total_swaps as f64 / solved as f64
        } else {
            0.0
        },
        max_swaps,
        swap_distribution,
        duration,
        puzzles_per_second: generated as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
