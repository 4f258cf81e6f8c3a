//! Permutations of tile positions and their transposition cost

use std::fmt;

/// An exchange of the tiles at two board positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Swap {
    pub a: usize,
    pub b: usize,
}

impl Swap {
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.a, self.b)
    }
}

/// Apply `swaps` in order to a copy of `sequence`
///
/// # Panics
/// Panics if a swap index is out of range.
///
/// # Examples
/// ```
/// use gridle_solver::swaps::{Swap, apply_swaps};
///
/// let result = apply_swaps(b"cab", &[Swap::new(0, 1), Swap::new(1, 2)]);
/// assert_eq!(result, b"abc");
/// ```
#[must_use]
pub fn apply_swaps<T: Clone>(sequence: &[T], swaps: &[Swap]) -> Vec<T> {
    let mut result = sequence.to_vec();
    for swap in swaps {
        result.swap(swap.a, swap.b);
    }
    result
}

/// A bijection sending the tile at position `i` to position `targets[i]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    targets: Vec<usize>,
}

impl Permutation {
    /// Wrap a target list, checking that it is a bijection on `0..len`
    #[must_use]
    pub fn new(targets: Vec<usize>) -> Option<Self> {
        let mut seen = vec![false; targets.len()];
        for &target in &targets {
            match seen.get_mut(target) {
                Some(slot) if !*slot => *slot = true,
                _ => return None,
            }
        }
        Some(Self { targets })
    }

    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            targets: (0..len).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Number of disjoint cycles, fixed points included
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        count_cycles(&self.targets)
    }

    /// Transpositions needed to realise the permutation
    #[must_use]
    pub fn swap_cost(&self) -> usize {
        self.len() - self.cycle_count()
    }

    /// Disjoint cycles, each starting from its smallest position
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut position = start;
            while !visited[position] {
                visited[position] = true;
                cycle.push(position);
                position = self.targets[position];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Swaps that move every tile to its target
    ///
    /// Each position is settled in turn by exchanging its tile with the one
    /// sitting where that tile belongs, so a cycle of length `k` costs `k - 1`
    /// swaps and every swap has `a < b`.
    #[must_use]
    pub fn to_swaps(&self) -> Vec<Swap> {
        let mut targets = self.targets.clone();
        let mut swaps = Vec::with_capacity(self.swap_cost());
        for position in 0..targets.len() {
            let mut target = targets[position];
            while target != position {
                targets.swap(position, target);
                swaps.push(Swap::new(position, target));
                target = targets[position];
            }
        }
        swaps
    }
}

pub(crate) fn count_cycles(targets: &[usize]) -> usize {
    let mut visited = vec![false; targets.len()];
    let mut cycles = 0;
    for start in 0..targets.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut position = start;
        while !visited[position] {
            visited[position] = true;
            position = targets[position];
        }
    }
    cycles
}
