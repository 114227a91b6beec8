//! Error types for board validation, undo, and notation parsing.

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The mark counts cannot arise from alternating play.
    #[error("mark counts cannot alternate: {x} X marks vs {o} O marks")]
    MarkCountMismatch {
        /// Number of X marks on the board.
        x: u32,
        /// Number of O marks on the board.
        o: u32,
    },
    /// A history entry points at an empty cell.
    #[error("history references empty cell {index}")]
    HistoryCellEmpty {
        /// Zero-based index of the offending cell.
        index: usize,
    },
    /// The same cell appears twice in the move history.
    #[error("cell {index} appears twice in history")]
    DuplicateHistoryCell {
        /// Zero-based index of the offending cell.
        index: usize,
    },
    /// The stored outcome does not match the cells.
    #[error("stored outcome is stale")]
    StaleOutcome,
}

/// Error returned by [`Board::undo_last_move`](crate::board::Board::undo_last_move)
/// when no moves have been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no moves to undo")]
pub struct EmptyHistory;

/// Errors that occur when parsing a position notation string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The string does not have exactly 2 space-separated fields.
    #[error("expected 2 notation fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement field does not describe exactly 9 cells.
    #[error("placement describes {found} cells, expected 9")]
    WrongPlacementLength {
        /// Number of cells described.
        found: usize,
    },
    /// An unrecognized character appeared in the placement field.
    #[error("invalid placement character: '{character}'")]
    InvalidMarkChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "X" or "O".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid side string.
        found: String,
    },
}
