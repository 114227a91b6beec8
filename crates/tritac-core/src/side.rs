//! Player sides (marks).

use std::fmt;
use std::ops::Not;

/// A player's mark: X or O.
///
/// X always moves first from the empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    X = 0,
    O = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::X, Side::O];

    /// Return the index (0 for X, 1 for O).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Return the mark character used in board rendering and notation.
    #[inline]
    pub const fn mark(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}
