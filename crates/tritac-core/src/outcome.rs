//! Game outcome states.

use std::fmt;

use crate::side::Side;

/// The state of a game: still running, won, or drawn.
///
/// `Ongoing` is the initial state; `Won` and `Drawn` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game continues; more moves are available.
    Ongoing,
    /// The given side completed a line of three.
    Won(Side),
    /// All nine cells are filled with no line of three.
    Drawn,
}

impl Outcome {
    /// Return `true` if no further moves are meaningful.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Return the winning side, if any.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Won(side) => write!(f, "{side} wins"),
            Outcome::Drawn => write!(f, "draw"),
        }
    }
}
