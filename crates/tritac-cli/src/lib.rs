//! Console shell for tritac.

pub mod error;
pub mod game;

pub use error::CliError;
pub use game::{Game, MoveInput, parse_move_input};
