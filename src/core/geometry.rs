//! Board geometry
//!
//! The board is a 5×5 grid with four structural holes at (1,1), (1,3),
//! (3,1) and (3,3). The 21 active cells are numbered row by row; that
//! canonical order is used for tile sequences and swap indices everywhere.

/// Side length of the square grid
pub const GRID_SIZE: usize = 5;

/// Number of active cells
pub const CELL_COUNT: usize = 21;

/// Rows and columns that hold a full five-letter word
pub const WORD_LINES: [usize; 3] = [0, 2, 4];

/// Canonical index → (row, column)
pub const POSITIONS: [(usize, usize); CELL_COUNT] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 0),
    (1, 2),
    (1, 4),
    (2, 0),
    (2, 1),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 0),
    (3, 2),
    (3, 4),
    (4, 0),
    (4, 1),
    (4, 2),
    (4, 3),
    (4, 4),
];

/// Whether (row, column) is an active cell rather than a hole
#[inline]
#[must_use]
pub const fn is_active(row: usize, col: usize) -> bool {
    row < GRID_SIZE && col < GRID_SIZE && (row % 2 == 0 || col % 2 == 0)
}

/// Whether (row, column) is shared by a row-word and a column-word
#[inline]
#[must_use]
pub const fn is_intersection(row: usize, col: usize) -> bool {
    row < GRID_SIZE && col < GRID_SIZE && row % 2 == 0 && col % 2 == 0
}

/// Grid coordinates of a canonical index
#[inline]
#[must_use]
pub fn position_of(index: usize) -> Option<(usize, usize)> {
    POSITIONS.get(index).copied()
}

/// Canonical index of an active cell
///
/// # Examples
/// ```
/// use gridle_solver::core::geometry::index_of;
///
/// assert_eq!(index_of(0, 0), Some(0));
/// assert_eq!(index_of(1, 2), Some(6));
/// assert_eq!(index_of(4, 4), Some(20));
/// assert_eq!(index_of(1, 1), None);
/// ```
#[must_use]
pub const fn index_of(row: usize, col: usize) -> Option<usize> {
    if !is_active(row, col) {
        return None;
    }
    // Each full row holds 5 cells, each sparse row 3.
    let before = (row / 2) * 8 + (row % 2) * 5;
    let offset = if row % 2 == 0 { col } else { col / 2 };
    Some(before + offset)
}

/// Pixel placement of the board on a device screen
///
/// Used by automation layers to turn an index swap into a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Centre of the top-left tile
    pub origin: (u32, u32),
    /// Distance between the centres of adjacent tiles
    pub pitch: u32,
}

impl ScreenLayout {
    #[must_use]
    pub const fn new(origin: (u32, u32), pitch: u32) -> Self {
        Self { origin, pitch }
    }

    /// Pixel centre of the tile at a canonical index
    #[must_use]
    pub fn centre(&self, index: usize) -> Option<(u32, u32)> {
        let (row, col) = position_of(index)?;
        Some((
            self.origin.0 + col as u32 * self.pitch,
            self.origin.1 + row as u32 * self.pitch,
        ))
    }

    /// Start and end points of the swipe exchanging two tiles
    #[must_use]
    pub fn swipe(&self, a: usize, b: usize) -> Option<((u32, u32), (u32, u32))> {
        Some((self.centre(a)?, self.centre(b)?))
    }
}
