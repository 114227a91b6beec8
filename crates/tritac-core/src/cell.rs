//! Cells of the 3x3 grid, indexed row-major.

use std::fmt;

/// A cell on the grid, encoded as a `u8` in row-major order.
///
/// Index = row * 3 + col, so the grid reads:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Total number of cells.
    pub const COUNT: usize = 9;

    /// All cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell(0),
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
        Cell(8),
    ];

    /// Create a cell from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Cell> {
        if index < 9 {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    /// Create a cell from a row and column.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `row < 3` and `col < 3`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Cell {
        debug_assert!(row < 3 && col < 3);
        Cell(row * 3 + col)
    }

    /// Return the zero-based index (0..9).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row of this cell (0..3, top to bottom).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Return the column of this cell (0..3, left to right).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

impl fmt::Display for Cell {
    /// Displays the 1-based number shown to the player.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}
