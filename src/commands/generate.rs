//! Puzzle generation command

use crate::core::Word;
use crate::puzzle::{GeneratorConfig, Puzzle, PuzzleGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Draw a seed for runs that did not ask for one
#[must_use]
pub fn random_seed() -> u64 {
    rand::random()
}

/// Generate one puzzle reproducibly from `seed`
#[must_use]
pub fn generate_puzzle(corpus: &[Word], config: GeneratorConfig, seed: u64) -> Option<Puzzle> {
    let mut rng = StdRng::seed_from_u64(seed);
    PuzzleGenerator::new(corpus, config).generate(&mut rng)
}
