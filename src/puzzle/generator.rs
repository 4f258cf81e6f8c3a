//! Random puzzle generation over a corpus

use super::scoring::score;
use crate::core::geometry::POSITIONS;
use crate::core::{Board, CELL_COUNT, Word};
use crate::solver::Axis;
use crate::swaps::Swap;
use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Random tile exchanges applied to the solved grid
    pub scramble_swaps: usize,
    /// Grid searches tried before giving up
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scramble_swaps: 10,
            max_attempts: 1000,
        }
    }
}

/// A scrambled board together with the grid it was scrambled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub solution: [u8; CELL_COUNT],
    pub board: Board,
    pub scramble: Vec<Swap>,
}

/// Builds valid six-word grids from a corpus and scrambles them
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'w> {
    corpus: &'w [Word],
    by_first_letter: FxHashMap<u8, Vec<&'w Word>>,
    config: GeneratorConfig,
}

impl<'w> PuzzleGenerator<'w> {
    #[must_use]
    pub fn new(corpus: &'w [Word], config: GeneratorConfig) -> Self {
        let mut by_first_letter: FxHashMap<u8, Vec<&'w Word>> = FxHashMap::default();
        for word in corpus {
            by_first_letter.entry(word.char_at(0)).or_default().push(word);
        }
        Self {
            corpus,
            by_first_letter,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a scrambled puzzle
    ///
    /// Returns `None` if no grid was found within `max_attempts` tries.
    ///
    /// # Examples
    /// ```
    /// use gridle_solver::puzzle::{GeneratorConfig, PuzzleGenerator};
    /// use gridle_solver::wordlists::{CORPUS_EN, loader::words_from_slice};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let corpus = words_from_slice(CORPUS_EN);
    /// let generator = PuzzleGenerator::new(&corpus, GeneratorConfig::default());
    /// let puzzle = generator.generate(&mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(puzzle.board.char_bag(), gridle_solver::core::CharBag::from_bytes(&puzzle.solution));
    /// ```
    #[must_use]
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Option<Puzzle> {
        let solution = self.grid(rng)?;

        let mut tiles = solution;
        let scramble: Vec<Swap> = (0..self.config.scramble_swaps)
            .map(|_| {
                let a = rng.random_range(0..CELL_COUNT);
                let mut b = rng.random_range(0..CELL_COUNT - 1);
                if b >= a {
                    b += 1;
                }
                tiles.swap(a, b);
                Swap::new(a.min(b), a.max(b))
            })
            .collect();

        Some(Puzzle {
            board: score(&solution, &tiles),
            solution,
            scramble,
        })
    }

    /// Search for a solved grid, letters in canonical index order
    #[must_use]
    pub fn grid<R: Rng>(&self, rng: &mut R) -> Option<[u8; CELL_COUNT]> {
        for attempt in 1..=self.config.max_attempts {
            if let Some(grid) = self.try_grid(rng) {
                debug!("found grid after {attempt} attempts");
                return Some(grid);
            }
        }
        debug!("no grid after {} attempts", self.config.max_attempts);
        None
    }

    fn try_grid<R: Rng>(&self, rng: &mut R) -> Option<[u8; CELL_COUNT]> {
        let top = self.corpus.choose(rng)?;

        let mut columns = Vec::with_capacity(3);
        for line in [0, 2, 4] {
            let options = self.by_first_letter.get(&top.char_at(line))?;
            columns.push(*options.choose(rng)?);
        }

        let mut rows = vec![top];
        for line in [2, 4] {
            let options: Vec<&Word> = self
                .by_first_letter
                .get(&columns[0].char_at(line))?
                .iter()
                .copied()
                .filter(|word| {
                    word.char_at(2) == columns[1].char_at(line)
                        && word.char_at(4) == columns[2].char_at(line)
                })
                .collect();
            rows.push(*options.choose(rng)?);
        }
        trace!(
            "grid rows {:?} columns {:?}",
            rows.iter().map(|w| w.text()).collect::<Vec<_>>(),
            columns.iter().map(|w| w.text()).collect::<Vec<_>>()
        );

        let mut grid = [0u8; CELL_COUNT];
        for (slot, &(row, col)) in grid.iter_mut().zip(&POSITIONS) {
            *slot = if row % 2 == 0 {
                rows[row / 2].char_at(col)
            } else {
                columns[col / 2].char_at(row)
            };
        }
        Some(grid)
    }
}

/// The six words of a solved grid, in `Axis::ALL` order
#[must_use]
pub fn grid_words(grid: &[u8; CELL_COUNT]) -> [String; 6] {
    Axis::ALL.map(|axis| {
        axis.indices().map(|index| char::from(grid[index])).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swaps::apply_swaps;
    use crate::wordlists::CORPUS_EN;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus() -> Vec<Word> {
        words_from_slice(CORPUS_EN)
    }

    #[test]
    fn generated_grid_is_made_of_corpus_words() {
        let corpus = corpus();
        let generator = PuzzleGenerator::new(&corpus, GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..5 {
            let grid = generator.grid(&mut rng).unwrap();
            for word in grid_words(&grid) {
                assert!(CORPUS_EN.contains(&word.as_str()), "{word} not in corpus");
            }
        }
    }

    #[test]
    fn puzzle_is_a_scored_scramble_of_its_solution() {
        let corpus = corpus();
        let generator = PuzzleGenerator::new(&corpus, GeneratorConfig::default());
        let puzzle = generator.generate(&mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(puzzle.scramble.len(), 10);
        assert!(puzzle.scramble.iter().all(|s| s.a < s.b));

        let tiles = puzzle.board.letter_bytes();
        assert_eq!(puzzle.board, score(&puzzle.solution, &tiles));

        // Undoing the scramble in reverse restores the solution
        let mut undo = puzzle.scramble.clone();
        undo.reverse();
        assert_eq!(apply_swaps(&tiles, &undo), puzzle.solution);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let corpus = corpus();
        let generator = PuzzleGenerator::new(&corpus, GeneratorConfig::default());
        let first = generator.generate(&mut StdRng::seed_from_u64(11));
        let second = generator.generate(&mut StdRng::seed_from_u64(11));
        assert_eq!(first, second);
    }

    #[test]
    fn unscrambled_puzzle_is_solved() {
        let corpus = corpus();
        let config = GeneratorConfig {
            scramble_swaps: 0,
            ..GeneratorConfig::default()
        };
        let puzzle = PuzzleGenerator::new(&corpus, config)
            .generate(&mut StdRng::seed_from_u64(5))
            .unwrap();
        assert!(puzzle.board.is_solved());
    }

    #[test]
    fn single_letter_corpus_always_fits() {
        let corpus = words_from_slice(&["aaaaa"]);
        let puzzle = PuzzleGenerator::new(&corpus, GeneratorConfig::default())
            .generate(&mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(puzzle.solution, [b'a'; CELL_COUNT]);
        assert!(puzzle.board.is_solved());
    }

    #[test]
    fn impossible_corpus_gives_up() {
        let corpus = words_from_slice(&["abcde", "bcdea"]);
        let config = GeneratorConfig {
            max_attempts: 20,
            ..GeneratorConfig::default()
        };
        let generator = PuzzleGenerator::new(&corpus, config);
        assert!(generator.generate(&mut StdRng::seed_from_u64(9)).is_none());
        assert!(PuzzleGenerator::new(&[], config).generate(&mut StdRng::seed_from_u64(9)).is_none());
    }

    #[test]
    fn grid_words_reads_rows_and_columns() {
        let words = grid_words(b"botchrroavertsaehotel");
        assert_eq!(words, ["botch", "brash", "avert", "treat", "hotel", "hotel"]);
    }
}
