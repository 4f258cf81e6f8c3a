//! Swap planning command
//!
//! Plans the swaps between two tile sequences given as text.

use crate::swaps::{PlannerConfig, SwapError, SwapPlan, SwapPlanner};

/// Plan swaps turning `original` into `target`
///
/// Letters are compared case-insensitively; whitespace and `.` holes are
/// ignored so either compact or grid-shaped input works.
///
/// # Errors
///
/// Returns `SwapError` if the sequences are not rearrangements of each other
/// or the search exceeds `config.max_bijections`.
pub fn plan_swaps(original: &str, target: &str, config: PlannerConfig) -> Result<SwapPlan, SwapError> {
    let original = tiles(original);
    let target = tiles(target);
    SwapPlanner::new(config).plan(&original, &target)
}

fn tiles(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b'.')
        .map(|b| b.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_and_grid_input_agree() {
        let compact = plan_swaps(
            "ecrohslotvertaarhotbe",
            "botchrroavertsaehotel",
            PlannerConfig::default(),
        )
        .unwrap();
        let grid = plan_swaps(
            "ECROH s.l.o tvert a.a.r hotbe",
            "botch r.r.o avert s.a.e hotel",
            PlannerConfig::default(),
        )
        .unwrap();
        assert_eq!(compact, grid);
        assert_eq!(compact.len(), 7);
    }

    #[test]
    fn mismatched_tiles_are_rejected() {
        let err = plan_swaps("abc", "abz", PlannerConfig::default()).unwrap_err();
        assert_eq!(err, SwapError::NotAPermutation);
    }
}
