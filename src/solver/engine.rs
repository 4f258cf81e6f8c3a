//! Propagation solver
//!
//! Repeats four steps until a whole pass changes nothing:
//! 1. drop candidates that disagree with solved cells
//! 2. drop candidates the board's tiles cannot spell
//! 3. drop candidates no crossing candidate supports (rows, then columns)
//! 4. commit every axis left with exactly one candidate
//!
//! There is no backtracking, so the result may be partial.

use super::axis::Axis;
use super::candidates::CandidateGenerator;
use super::error::SolveError;
use super::solution::Solution;
use crate::core::{Board, CharBag, WORD_LEN, Word};
use log::{debug, trace};

const AXES: usize = Axis::ALL.len();

/// A word fixed by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub axis: Axis,
    pub word: String,
    pub pass: usize,
}

/// What the solver managed to deduce
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solution: Solution,
    pub commits: Vec<Commit>,
    pub passes: usize,
    /// Candidates still open per axis at the fixed point, in `Axis::ALL` order
    pub remaining: [usize; AXES],
}

impl SolveOutcome {
    /// Whether every cell was deduced
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.solution.is_complete()
    }

    /// Axes that were never committed, with their open candidate counts
    pub fn unresolved(&self) -> impl Iterator<Item = (Axis, usize)> + '_ {
        Axis::ALL
            .into_iter()
            .filter(|axis| !self.commits.iter().any(|c| c.axis == *axis))
            .map(|axis| (axis, self.remaining[axis.slot()]))
    }
}

/// Main gridle solver
///
/// Deduces the six hidden words of a board from its feedback colors.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'w> {
    generator: CandidateGenerator<'w>,
}

impl<'w> Solver<'w> {
    /// Create a solver drawing candidates from `corpus`
    #[must_use]
    pub const fn new(corpus: &'w [Word]) -> Self {
        Self {
            generator: CandidateGenerator::new(corpus),
        }
    }

    /// Propagate constraints on `board` to a fixed point
    ///
    /// An incomplete solution is a normal outcome; check
    /// [`SolveOutcome::is_complete`].
    ///
    /// # Errors
    /// Returns `SolveError` when a commit contradicts an already solved cell
    /// or needs a tile the board no longer has.
    ///
    /// # Examples
    /// ```
    /// use gridle_solver::core::Board;
    /// use gridle_solver::solver::Solver;
    /// use gridle_solver::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["botch", "cloth", "brash", "clash", "crash", "avert", "treat", "hotel"]);
    /// let board = Board::from_compact("ecrohslotvertaarhotbe", "-YYYGY-G-GGGGYG-GGG-Y").unwrap();
    ///
    /// let outcome = Solver::new(&corpus).solve(&board).unwrap();
    /// assert!(outcome.is_complete());
    /// assert_eq!(outcome.solution.letters(), "botchrroavertsaehotel");
    /// ```
    pub fn solve(&self, board: &Board) -> Result<SolveOutcome, SolveError> {
        let mut state = Propagation::new(board, self.generator);
        let passes = state.run()?;

        Ok(SolveOutcome {
            remaining: state.counts(),
            solution: state.solution,
            commits: state.commits,
            passes,
        })
    }
}

/// Working state of one solve call
struct Propagation<'w> {
    candidates: [Vec<&'w Word>; AXES],
    solution: Solution,
    bag: CharBag,
    commits: Vec<Commit>,
}

impl<'w> Propagation<'w> {
    fn new(board: &Board, generator: CandidateGenerator<'w>) -> Self {
        let candidates = Axis::ALL.map(|axis| generator.generate(&axis.on(board)));
        debug!(
            "initial candidates: {:?}",
            candidates.iter().map(Vec::len).collect::<Vec<_>>()
        );

        Self {
            candidates,
            solution: Solution::new(),
            bag: board.char_bag(),
            commits: Vec::new(),
        }
    }

    /// Run passes until one changes nothing, returning the pass count
    fn run(&mut self) -> Result<usize, SolveError> {
        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = self.prune_known_letters();
            changed |= self.prune_unspellable();
            changed |= self.prune_unsupported();
            changed |= self.commit_unique(passes)?;

            debug!(
                "pass {passes}: {} cells solved, candidates {:?}",
                self.solution.filled_count(),
                self.counts()
            );

            if !changed {
                return Ok(passes);
            }
        }
    }

    fn counts(&self) -> [usize; AXES] {
        std::array::from_fn(|slot| self.candidates[slot].len())
    }

    /// Rebuild every list keeping only words accepted by `keep`
    fn retain(
        &mut self,
        axes: impl Iterator<Item = Axis>,
        keep: impl Fn(&Self, Axis, &Word) -> bool,
    ) -> bool {
        let mut changed = false;
        for axis in axes {
            let slot = axis.slot();
            let kept: Vec<&'w Word> = {
                let state: &Self = self;
                state.candidates[slot]
                    .iter()
                    .copied()
                    .filter(|word| keep(state, axis, word))
                    .collect()
            };
            let before = self.candidates[slot].len();
            if kept.len() != before {
                trace!("{axis}: {before} -> {} candidates", kept.len());
                changed = true;
            }
            self.candidates[slot] = kept;
        }
        changed
    }

    fn prune_known_letters(&mut self) -> bool {
        self.retain(Axis::ALL.into_iter(), |state, axis, word| {
            state.solution.agrees(axis, word)
        })
    }

    /// Solved cells already hold their tile, so only the letters a word
    /// would place on empty cells are drawn from the bag.
    fn prune_unspellable(&mut self) -> bool {
        self.retain(Axis::ALL.into_iter(), |state, axis, word| {
            let needed: Vec<u8> = (0..WORD_LEN)
                .filter(|&index| {
                    let (row, col) = axis.position(index);
                    state.solution.get(row, col).is_none()
                })
                .map(|index| word.char_at(index))
                .collect();
            state.bag.can_supply(&needed)
        })
    }

    /// Rows are checked against the column lists first, then columns against
    /// the already pruned row lists.
    fn prune_unsupported(&mut self) -> bool {
        let rows = Axis::ALL.into_iter().filter(|axis| matches!(axis, Axis::Row(_)));
        let columns = Axis::ALL.into_iter().filter(|axis| matches!(axis, Axis::Column(_)));

        let rows_changed = self.retain(rows, Self::supported);
        let columns_changed = self.retain(columns, Self::supported);
        rows_changed | columns_changed
    }

    /// Whether every crossing with open candidates offers the letter `word`
    /// puts at the shared cell
    fn supported(&self, axis: Axis, word: &Word) -> bool {
        (0..WORD_LEN).all(|index| {
            let Some(crossing) = axis.crossing(index) else {
                return true;
            };
            let Some(at) = crossing.crossing_index(axis) else {
                return true;
            };
            let others = &self.candidates[crossing.slot()];
            others.is_empty() || others.iter().any(|other| other.char_at(at) == word.char_at(index))
        })
    }

    fn commit_unique(&mut self, pass: usize) -> Result<bool, SolveError> {
        let mut changed = false;
        for axis in Axis::ALL {
            let slot = axis.slot();
            if self.candidates[slot].len() != 1 {
                continue;
            }
            let word = self.candidates[slot][0];

            let filled = self.solution.commit(axis, word, &mut self.bag)?;
            debug!("{axis}: committed {word} ({filled} new cells)");

            self.commits.push(Commit {
                axis,
                word: word.text().to_string(),
                pass,
            });
            self.candidates[slot] = Vec::new();
            changed = true;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::CORPUS_EN;
    use crate::wordlists::loader::words_from_slice;

    const LETTERS: &str = "ecrohslotvertaarhotbe";
    const FEEDBACK: &str = "-YYYGY-G-GGGGYG-GGG-Y";
    const SOLVED: &str = "botchrroavertsaehotel";

    fn corpus() -> Vec<Word> {
        words_from_slice(&[
            "botch", "cloth", "brash", "clash", "crash", "avert", "treat", "hotel", "crane",
            "slate",
        ])
    }

    fn board() -> Board {
        Board::from_compact(LETTERS, FEEDBACK).unwrap()
    }

    fn find<'w>(corpus: &'w [Word], text: &str) -> &'w Word {
        corpus.iter().find(|w| w.text() == text).unwrap()
    }

    #[test]
    fn solves_board_needing_propagation() {
        let corpus = corpus();
        let outcome = Solver::new(&corpus).solve(&board()).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution.letters(), SOLVED);
        assert_eq!(outcome.commits.len(), 6);
        assert_eq!(outcome.unresolved().count(), 0);
        // Row 0 and column 0 start ambiguous; crossing support settles them
        assert!(outcome.commits.iter().any(|c| c.word == "botch"));
        assert!(outcome.commits.iter().any(|c| c.word == "brash"));
        assert_eq!(outcome.passes, 2);
    }

    #[test]
    fn committed_letters_come_from_the_board() {
        let corpus = corpus();
        let board = board();
        let outcome = Solver::new(&corpus).solve(&board).unwrap();

        let solved = outcome.solution.letter_bytes().unwrap();
        assert_eq!(CharBag::from_bytes(&solved), board.char_bag());
    }

    #[test]
    fn missing_corpus_word_leaves_partial_solution() {
        let corpus: Vec<Word> = corpus().into_iter().filter(|w| w.text() != "hotel").collect();
        let outcome = Solver::new(&corpus).solve(&board()).unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.solution.letters(), "botchrr.avertsa.h.t..");
        let unresolved: Vec<_> = outcome.unresolved().collect();
        assert_eq!(unresolved, [(Axis::Row(4), 0), (Axis::Column(4), 0)]);
    }

    #[test]
    fn empty_corpus_solves_nothing() {
        let outcome = Solver::new(&[]).solve(&board()).unwrap();
        assert_eq!(outcome.solution.filled_count(), 0);
        assert!(outcome.commits.is_empty());
        assert_eq!(outcome.passes, 1);
    }

    #[test]
    fn all_green_board_is_returned_unchanged() {
        let corpus = corpus();
        let board = Board::solved(b"botchrroavertsaehotel");
        let outcome = Solver::new(&corpus).solve(&board).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution.to_board(), Some(board));
    }

    #[test]
    fn solving_a_solution_again_is_idempotent() {
        let corpus = corpus();
        let solver = Solver::new(&corpus);
        let first = solver.solve(&board()).unwrap();
        let solved_board = first.solution.to_board().unwrap();

        let second = solver.solve(&solved_board).unwrap();
        assert_eq!(second.solution, first.solution);
        assert_eq!(second.commits.len(), Axis::ALL.len());
        assert!(second.commits.iter().all(|c| c.pass == 1));
    }

    #[test]
    fn exhausted_tile_is_infeasible() {
        // Column 0 takes both p tiles for "paper", leaving none for "spend".
        let corpus = words_from_slice(&["laser", "paper", "spend", "radio", "crane"]);
        let board = Board::from_compact("dsearosadpaeeanirelip", "-YYYG-YGYG-GYYGGG--G-").unwrap();

        let err = Solver::new(&corpus).solve(&board).unwrap_err();
        assert_eq!(
            err,
            SolveError::LetterUnavailable {
                axis: Axis::Column(2),
                word: "spend".to_string(),
                letter: 'p',
            }
        );
    }

    #[test]
    fn shared_tiles_stay_available_to_an_open_crossing() {
        // hotel and hetel differ only on column 4's private cells
        let corpus = words_from_slice(&["botch", "brash", "avert", "treat", "hotel", "hetel"]);
        let board = Board::solved(b"botchrroavertsaehotel");
        let mut state = Propagation::new(&board, CandidateGenerator::new(&corpus));
        state.candidates[Axis::Column(4).slot()] = vec![find(&corpus, "hotel"), find(&corpus, "hetel")];

        let passes = state.run().unwrap();

        assert!(state.solution.is_complete());
        assert_eq!(state.solution.letters(), SOLVED);
        let column = state.commits.iter().find(|c| c.axis == Axis::Column(4)).unwrap();
        assert_eq!(column.word, "hotel");
        assert_eq!(column.pass, 2);
        assert_eq!(passes, 3);
    }

    #[test]
    fn column_settles_after_its_crossing_rows() {
        let corpus = words_from_slice(CORPUS_EN);
        let board = Board::from_compact("oeoelopgupseughrhtteo", "Y---YGG-GGGG-G--G-GGY").unwrap();
        let outcome = Solver::new(&corpus).solve(&board).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.solution.letters(), "roughopoupsetgeehotel");
        let pass_of = |axis: Axis| {
            outcome.commits.iter().find(|c| c.axis == axis).map(|c| c.pass)
        };
        assert_eq!(pass_of(Axis::Row(2)), Some(1));
        assert_eq!(pass_of(Axis::Row(4)), Some(1));
        assert_eq!(pass_of(Axis::Column(0)), Some(2));
        assert_eq!(outcome.passes, 3);
    }

    #[test]
    fn crossing_that_loses_support_empties_instead_of_conflicting() {
        // Rows 0 and 2 each keep a different column 0 word alive through the
        // row pass; the column pass then drops both words.
        let corpus = words_from_slice(&["botch", "overt", "brash", "shoot"]);
        let board = Board::solved(b"botchrroavertsaehotel");
        let mut state = Propagation::new(&board, CandidateGenerator::new(&corpus));
        state.candidates = [
            vec![find(&corpus, "botch")],
            vec![find(&corpus, "brash"), find(&corpus, "shoot")],
            vec![find(&corpus, "overt")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        ];

        let passes = state.run().unwrap();

        assert_eq!(passes, 2);
        assert_eq!(state.solution.letters(), "botch...overt........");
        let axes: Vec<Axis> = state.commits.iter().map(|c| c.axis).collect();
        assert_eq!(axes, [Axis::Row(0), Axis::Row(2)]);
        assert!(state.candidates[Axis::Column(0).slot()].is_empty());
    }
}
