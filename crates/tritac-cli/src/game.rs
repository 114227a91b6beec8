//! The console game loop: render, read a move, let the engine answer.

use std::io::{self, BufRead};

use tracing::{debug, info, warn};

use tritac_core::{Board, MoveOutcome, Outcome, Side};
use tritac_engine::best_move;

use crate::error::CliError;

/// Result of interpreting one line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// A zero-based cell index in range.
    Index(usize),
    /// A number outside 1-9; the caller re-prompts.
    OutOfRange,
}

/// Interpret a line of human input as a 1-based cell number.
///
/// Numbers outside 1-9 are recoverable (the human is re-prompted, like an
/// occupied cell); anything non-numeric aborts the session.
pub fn parse_move_input(line: &str) -> Result<MoveInput, CliError> {
    let trimmed = line.trim();
    let value: i64 = trimmed.parse().map_err(|_| CliError::MalformedInput {
        input: trimmed.to_string(),
    })?;
    if (1..=9).contains(&value) {
        Ok(MoveInput::Index(value as usize - 1))
    } else {
        Ok(MoveInput::OutOfRange)
    }
}

/// A console game session: one human side against the engine.
pub struct Game {
    board: Board,
    human: Side,
}

impl Game {
    /// Create a game from the empty board with the given human side.
    ///
    /// X moves first, so picking O hands the opening move to the engine.
    pub fn new(human: Side) -> Self {
        Self {
            board: Board::new(),
            human,
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the game loop on stdin until the game ends.
    pub fn run(self) -> Result<(), CliError> {
        let stdin = io::stdin();
        self.run_with(stdin.lock())
    }

    /// Run the game loop, reading human moves from the given reader.
    pub fn run_with(mut self, reader: impl BufRead) -> Result<(), CliError> {
        let mut lines = reader.lines();

        loop {
            println!("{}", self.board.pretty());
            println!();

            if self.board.side_to_move() == self.human {
                println!("Enter your move (1-9)");
                let Some(line) = lines.next() else {
                    return Err(CliError::InputClosed);
                };
                let line = line?;
                debug!(input = %line.trim(), "received move input");

                let index = match parse_move_input(&line)? {
                    MoveInput::Index(index) => index,
                    MoveInput::OutOfRange => {
                        println!("Box already occupied");
                        continue;
                    }
                };
                if self.board.apply_index(index) == MoveOutcome::Rejected {
                    println!("Box already occupied");
                    continue;
                }
            } else {
                let Some(mv) = best_move(&self.board, self.board.side_to_move()) else {
                    warn!("no engine move for an ongoing position");
                    return Err(CliError::NoMove);
                };
                println!("Engine plays {mv}");
                let applied = self.board.apply_move(mv);
                debug_assert_eq!(applied, MoveOutcome::Applied);
            }

            match self.board.outcome() {
                Outcome::Ongoing => {}
                Outcome::Won(side) => {
                    println!("{}", self.board.pretty());
                    println!();
                    println!("{side} wins the game!");
                    info!(winner = %side, "game over");
                    return Ok(());
                }
                Outcome::Drawn => {
                    println!("{}", self.board.pretty());
                    println!();
                    println!("Draw!");
                    info!("game over: draw");
                    return Ok(());
                }
            }
        }
    }
}
