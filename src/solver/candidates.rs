//! Candidate generation for a single row or column
//!
//! Feedback colors are turned into one character class per position and the
//! corpus is filtered positionally against those classes.

use super::axis::AxisWord;
use crate::core::{Feedback, LetterSet, WORD_LEN, Word};
use log::trace;

/// Filters a corpus down to the words that fit one axis of a board
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'w> {
    corpus: &'w [Word],
}

impl<'w> CandidateGenerator<'w> {
    #[must_use]
    pub const fn new(corpus: &'w [Word]) -> Self {
        Self { corpus }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'w [Word] {
        self.corpus
    }

    /// Corpus words consistent with the feedback around `word`
    ///
    /// Corpus order is preserved.
    #[must_use]
    pub fn generate(&self, word: &AxisWord<'_>) -> Vec<&'w Word> {
        let classes = position_classes(word);
        let required = required_letters(word);
        let greens: [bool; WORD_LEN] = word.cells().map(|cell| cell.feedback.is_green());

        trace!(
            "{}: classes {:?}, required {:?}",
            word.axis(),
            classes,
            required
        );

        self.corpus
            .iter()
            .filter(|candidate| candidate.matches(&classes))
            .filter(|candidate| contains_outside_greens(candidate, &greens, required))
            .collect()
    }
}

/// Character class for each position of `word`
///
/// A green cell pins its letter. Any other position may hold a letter that is
/// gray somewhere off this line or yellow on it, except the letter currently
/// there and the letters known to be absent from the word. Intersections also
/// admit every yellow of the two lines meeting there.
#[must_use]
pub fn position_classes(word: &AxisWord<'_>) -> [LetterSet; WORD_LEN] {
    let own_yellow = word.letters_with(Feedback::Yellow);
    let foreign_gray: LetterSet = word
        .foreign_cells()
        .filter(|cell| cell.feedback.is_gray())
        .map(|cell| cell.letter)
        .collect();
    let pool = foreign_gray.union(own_yellow);

    // A gray letter that is also yellow elsewhere in the word is still present.
    let absent = word.letters_with(Feedback::Gray).difference(own_yellow);

    let cells = word.cells();
    std::array::from_fn(|index| {
        let cell = cells[index];
        if cell.feedback.is_green() {
            return LetterSet::single(cell.letter);
        }

        let mut allowed = pool.difference(absent);
        allowed.remove(cell.letter);

        if let Some(crossing) = word.crossing(index) {
            allowed = allowed
                .union(own_yellow)
                .union(crossing.letters_with(Feedback::Yellow));
        }
        allowed
    })
}

/// Letters that must appear in the word: yellows on its two private cells
#[must_use]
pub fn required_letters(word: &AxisWord<'_>) -> LetterSet {
    word.cells()
        .iter()
        .enumerate()
        .filter(|&(index, cell)| word.crossing(index).is_none() && cell.feedback.is_yellow())
        .map(|(_, cell)| cell.letter)
        .collect()
}

fn contains_outside_greens(candidate: &Word, greens: &[bool; WORD_LEN], required: LetterSet) -> bool {
    let outside: LetterSet = candidate
        .chars()
        .iter()
        .zip(greens)
        .filter(|&(_, &green)| !green)
        .map(|(&ch, _)| ch)
        .collect();
    required.difference(outside).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::solver::axis::Axis;
    use crate::wordlists::loader::words_from_slice;

    const LETTERS: &str = "ecrohslotvertaarhotbe";
    const FEEDBACK: &str = "-YYYGY-G-GGGGYG-GGG-Y";

    fn corpus() -> Vec<Word> {
        words_from_slice(&[
            "botch", "cloth", "brash", "clash", "crash", "avert", "treat", "hotel", "crane",
            "slate",
        ])
    }

    fn board() -> Board {
        Board::from_compact(LETTERS, FEEDBACK).unwrap()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn green_positions_pin_their_letter() {
        let board = board();
        let classes = position_classes(&Axis::Row(2).on(&board));
        assert_eq!(classes[1], LetterSet::single(b'v'));
        assert_eq!(classes[4], LetterSet::single(b't'));
    }

    #[test]
    fn private_position_excludes_own_letter_and_absent_letters() {
        let board = board();
        // Row 0 is e c r o h with e gray, c r o yellow, h green.
        let classes = position_classes(&Axis::Row(0).on(&board));
        assert!(!classes[1].contains(b'c'));
        assert!(!classes[1].contains(b'e'));
        assert!(classes[1].contains(b'r'));
        assert!(classes[1].contains(b'o'));
    }

    #[test]
    fn intersection_admits_crossing_yellows() {
        let board = board();
        // Column 0 is e s t a h; s and a are yellow. Row 0 yellows are c r o.
        let classes = position_classes(&Axis::Row(0).on(&board));
        for letter in *b"sacro" {
            assert!(classes[0].contains(letter), "missing {}", letter as char);
        }
    }

    #[test]
    fn required_letters_come_from_private_yellows() {
        let board = board();
        assert_eq!(
            required_letters(&Axis::Row(0).on(&board)),
            LetterSet::from_bytes(b"co")
        );
        assert_eq!(
            required_letters(&Axis::Column(0).on(&board)),
            LetterSet::from_bytes(b"sa")
        );
        assert!(required_letters(&Axis::Row(2).on(&board)).is_empty());
    }

    #[test]
    fn generates_expected_candidates() {
        let board = board();
        let corpus = corpus();
        let generator = CandidateGenerator::new(&corpus);

        let expected: [(Axis, &[&str]); 6] = [
            (Axis::Row(0), &["botch", "cloth"]),
            (Axis::Column(0), &["brash", "clash", "crash"]),
            (Axis::Row(2), &["avert"]),
            (Axis::Column(2), &["treat"]),
            (Axis::Row(4), &["hotel"]),
            (Axis::Column(4), &["hotel"]),
        ];
        for (axis, words) in expected {
            assert_eq!(texts(&generator.generate(&axis.on(&board))), words, "{axis}");
        }
    }

    #[test]
    fn generation_does_not_touch_board() {
        let board = board();
        let corpus = corpus();
        let generator = CandidateGenerator::new(&corpus);
        let _ = generator.generate(&Axis::Column(2).on(&board));
        assert_eq!(board.letters(), LETTERS);
        assert_eq!(board.feedback_string(), FEEDBACK);
    }

    #[test]
    fn all_green_word_matches_itself_only() {
        let board = Board::solved(b"botchrroavertsaehotel");
        let corpus = corpus();
        let generator = CandidateGenerator::new(&corpus);
        assert_eq!(
            texts(&generator.generate(&Axis::Row(0).on(&board))),
            ["botch"]
        );
        assert_eq!(
            texts(&generator.generate(&Axis::Column(4).on(&board))),
            ["hotel"]
        );
    }
}
