//! Formatting utilities for terminal output

use crate::core::geometry::{GRID_SIZE, position_of};
use crate::core::{Board, ScreenLayout};
use crate::swaps::Swap;

/// Draw a 5x5 box grid, filling each cell with `content(row, col)`
///
/// `content` returns the text for an active cell (already padded and
/// colored as the caller wants) or `None` for a hole.
#[must_use]
pub fn box_grid<F>(content: F) -> String
where
    F: Fn(usize, usize) -> Option<String>,
{
    let border = |left: &str, mid: &str, right: &str| {
        format!("{left}───{}{right}\n", format!("{mid}───").repeat(GRID_SIZE - 1))
    };

    let mut out = border("┌", "┬", "┐");
    for row in 0..GRID_SIZE {
        out.push('│');
        for col in 0..GRID_SIZE {
            match content(row, col) {
                Some(text) => out.push_str(&text),
                None => out.push_str("   "),
            }
            out.push('│');
        }
        out.push('\n');
        if row + 1 < GRID_SIZE {
            out.push_str(&border("├", "┼", "┤"));
        }
    }
    out.push_str(&border("└", "┴", "┘"));
    out
}

/// Feedback of each board row as emoji, holes left blank
#[must_use]
pub fn feedback_rows(board: &Board) -> Vec<String> {
    (0..GRID_SIZE)
        .map(|row| {
            (0..GRID_SIZE)
                .map(|col| {
                    board
                        .cell(row, col)
                        .map_or_else(|| "  ".to_string(), |cell| cell.feedback.to_emoji().to_string())
                })
                .collect()
        })
        .collect()
}

/// Describe a swap by grid coordinates, plus the swipe when a layout is known
#[must_use]
pub fn describe_swap(swap: Swap, layout: Option<&ScreenLayout>) -> String {
    let coords = |index: usize| {
        position_of(index).map_or_else(|| format!("#{index}"), |(row, col)| format!("({row},{col})"))
    };
    let mut text = format!("{} ↔ {}", coords(swap.a), coords(swap.b));
    if let Some(((x1, y1), (x2, y2))) = layout.and_then(|l| l.swipe(swap.a, swap.b)) {
        text.push_str(&format!("  swipe {x1},{y1} → {x2},{y2}"));
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_grid_draws_holes_and_cells() {
        let grid = box_grid(|row, col| {
            crate::core::geometry::is_active(row, col).then(|| " x ".to_string())
        });
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "┌───┬───┬───┬───┬───┐");
        assert_eq!(lines[1], "│ x │ x │ x │ x │ x │");
        assert_eq!(lines[3], "│ x │   │ x │   │ x │");
        assert_eq!(lines[10], "└───┴───┴───┴───┴───┘");
    }

    #[test]
    fn feedback_rows_render_emoji() {
        let board =
            Board::from_compact("ecrohslotvertaarhotbe", "-YYYGY-G-GGGGYG-GGG-Y").unwrap();
        let rows = feedback_rows(&board);
        assert_eq!(rows[0], "⬜🟨🟨🟨🟩");
        assert_eq!(rows[1], "🟨  ⬜  🟩");
    }

    #[test]
    fn describe_swap_with_and_without_layout() {
        let swap = Swap::new(0, 20);
        assert_eq!(describe_swap(swap, None), "(0,0) ↔ (4,4)");

        let layout = ScreenLayout::new((100, 200), 50);
        assert_eq!(
            describe_swap(swap, Some(&layout)),
            "(0,0) ↔ (4,4)  swipe 100,200 → 300,400"
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
