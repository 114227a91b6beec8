//! Core game types: board representation, move application, and rules.

mod board;
mod cell;
mod error;
mod notation;
mod outcome;
mod side;

pub use board::{Board, LegalMoves, MoveOutcome, PrettyBoard};
pub use cell::Cell;
pub use error::{BoardError, EmptyHistory, NotationError};
pub use notation::STARTING_NOTATION;
pub use outcome::Outcome;
pub use side::Side;
