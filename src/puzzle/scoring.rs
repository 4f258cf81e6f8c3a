//! Feedback for a scrambled board whose solution is known

use crate::core::{Board, CELL_COUNT, CharBag, Feedback};
use crate::solver::Axis;

/// Color every tile of `tiles` against `solution`
///
/// A tile is green when it already sits in its solved cell. Each line then
/// hands out yellows, scanning its cells in order, from the solution letters
/// of its non-green cells; a tile is yellow when any line crossing it marked
/// it, gray otherwise.
///
/// # Examples
/// ```
/// use gridle_solver::puzzle::score;
///
/// let board = score(b"botchrroavertsaehotel", b"ecrohslotvertaarhotbe");
/// assert_eq!(board.feedback_string(), "-YYYGY-G-GGGGYG-GGG-Y");
/// ```
#[must_use]
pub fn score(solution: &[u8; CELL_COUNT], tiles: &[u8; CELL_COUNT]) -> Board {
    let mut feedback = [Feedback::Gray; CELL_COUNT];
    for (slot, (solved, tile)) in feedback.iter_mut().zip(solution.iter().zip(tiles)) {
        if solved == tile {
            *slot = Feedback::Green;
        }
    }

    let mut yellow = [false; CELL_COUNT];
    for axis in Axis::ALL {
        let open: Vec<usize> = axis
            .indices()
            .filter(|&index| !feedback[index].is_green())
            .collect();
        let missing: Vec<u8> = open.iter().map(|&index| solution[index]).collect();
        let mut bag = CharBag::from_bytes(&missing);
        for &index in &open {
            if bag.take(tiles[index]) {
                yellow[index] = true;
            }
        }
    }

    for (slot, marked) in feedback.iter_mut().zip(yellow) {
        if marked && !slot.is_green() {
            *slot = Feedback::Yellow;
        }
    }

    Board::from_parts(tiles, &feedback)
}
