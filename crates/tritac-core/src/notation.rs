//! Compact position notation: 9 placement characters plus the side to move.
//!
//! Cells are listed in index order with `X`, `O`, or `.` for empty, then a
//! space and the side to move, e.g. `"X...O.... O"`. Like FEN, the notation
//! carries no move history, so boards parsed from it cannot be undone past
//! the parse point.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::NotationError;
use crate::side::Side;

/// Notation for the empty starting position.
pub const STARTING_NOTATION: &str = "......... X";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::ALL {
            let c = match self.cell_at(cell) {
                Some(side) => side.mark(),
                None => '.',
            };
            write!(f, "{c}")?;
        }
        write!(f, " {}", self.side_to_move())
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(NotationError::WrongFieldCount { found: fields.len() });
        }

        let placement = fields[0];
        if placement.chars().count() != Cell::COUNT {
            return Err(NotationError::WrongPlacementLength {
                found: placement.chars().count(),
            });
        }

        let mut cells = [None; Cell::COUNT];
        for (i, c) in placement.chars().enumerate() {
            cells[i] = match c {
                'X' => Some(Side::X),
                'O' => Some(Side::O),
                '.' => None,
                _ => return Err(NotationError::InvalidMarkChar { character: c }),
            };
        }

        let side_to_move = match fields[1] {
            "X" => Side::X,
            "O" => Side::O,
            other => {
                return Err(NotationError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };

        Ok(Board::from_raw(cells, side_to_move))
    }
}
