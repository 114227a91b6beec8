//! The game board: cell contents, side to move, move history, and outcome.

use std::fmt;

use crate::cell::Cell;
use crate::error::{BoardError, EmptyHistory};
use crate::outcome::Outcome;
use crate::side::Side;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Placeholder for unused history slots, so that equal positions
/// compare equal regardless of how they were reached.
const HISTORY_FILL: Cell = Cell::ALL[0];

/// Result of attempting to apply a move.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and the turn passed to the opponent.
    Applied,
    /// The index was out of range or the cell occupied; nothing changed.
    Rejected,
}

/// Complete game position state.
///
/// A cheap `Copy` value: search explores continuations on its own copy
/// without affecting the caller's board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Contents of each cell, indexed by [`Cell::index()`].
    cells: [Option<Side>; Cell::COUNT],
    /// Which side moves next.
    side_to_move: Side,
    /// Cells played so far, oldest first. Slots at `history_len` and
    /// beyond always hold [`HISTORY_FILL`].
    history: [Cell; Cell::COUNT],
    /// Number of live entries in `history`.
    history_len: u8,
    /// Derived terminal state, recomputed eagerly after every mutation.
    outcome: Outcome,
}

impl Board {
    /// Return the empty starting position with X to move.
    pub fn new() -> Board {
        Board {
            cells: [None; Cell::COUNT],
            side_to_move: Side::X,
            history: [HISTORY_FILL; Cell::COUNT],
            history_len: 0,
            outcome: Outcome::Ongoing,
        }
    }

    /// Construct a board from raw cell contents. Used by notation parsing.
    ///
    /// The history starts empty, so [`Board::undo_last_move`] is unavailable
    /// until moves are applied. The outcome is recomputed from the cells.
    pub(crate) fn from_raw(cells: [Option<Side>; Cell::COUNT], side_to_move: Side) -> Board {
        let mut board = Board {
            cells,
            side_to_move,
            history: [HISTORY_FILL; Cell::COUNT],
            history_len: 0,
            outcome: Outcome::Ongoing,
        };
        board.recompute_outcome();
        board
    }

    /// Play a move for the side to move.
    ///
    /// Rejects occupied cells with no side effects. On success the cell is
    /// marked, the move is recorded, the outcome is recomputed, and the
    /// turn passes to the opponent.
    pub fn apply_move(&mut self, cell: Cell) -> MoveOutcome {
        if self.cells[cell.index()].is_some() {
            return MoveOutcome::Rejected;
        }
        self.cells[cell.index()] = Some(self.side_to_move);
        self.history[self.history_len as usize] = cell;
        self.history_len += 1;
        self.recompute_outcome();
        self.side_to_move = self.side_to_move.flip();
        MoveOutcome::Applied
    }

    /// Play a move given a raw zero-based index.
    ///
    /// Out-of-range indices and occupied cells are both surfaced as
    /// [`MoveOutcome::Rejected`]; the caller simply retries.
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Cell::from_index(index) {
            Some(cell) => self.apply_move(cell),
            None => MoveOutcome::Rejected,
        }
    }

    /// Take back the most recent move, returning the cell it occupied.
    ///
    /// Restores the position exactly as it was before the corresponding
    /// [`Board::apply_move`]: cells, side to move, history, and outcome.
    pub fn undo_last_move(&mut self) -> Result<Cell, EmptyHistory> {
        if self.history_len == 0 {
            return Err(EmptyHistory);
        }
        self.history_len -= 1;
        let cell = self.history[self.history_len as usize];
        self.history[self.history_len as usize] = HISTORY_FILL;
        self.cells[cell.index()] = None;
        self.recompute_outcome();
        self.side_to_move = self.side_to_move.flip();
        Ok(cell)
    }

    /// Enumerate the empty cells in ascending index order.
    ///
    /// The iterator owns a snapshot of the cells, so the board may be
    /// mutated while iterating; call again for a fresh enumeration.
    pub fn legal_moves(&self) -> LegalMoves {
        LegalMoves {
            cells: self.cells,
            next: 0,
        }
    }

    /// Return the mark in the given cell, if any.
    #[inline]
    pub fn cell_at(&self, cell: Cell) -> Option<Side> {
        self.cells[cell.index()]
    }

    /// Return `true` if the given cell holds a mark.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_some()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Return the current outcome.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Return the winning side, if the game has been won.
    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }

    /// Return the moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Cell] {
        &self.history[..self.history_len as usize]
    }

    /// Return the number of moves played.
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.history_len as usize
    }

    /// Recompute the outcome from the cells.
    ///
    /// The line scan is side-agnostic, so the outcome is correct after
    /// undo as well as after apply: whichever side holds a completed line
    /// is the winner, a full board with no line is drawn, anything else
    /// is ongoing.
    fn recompute_outcome(&mut self) {
        self.outcome = match self.line_winner() {
            Some(side) => Outcome::Won(side),
            None if self.cells.iter().all(Option::is_some) => Outcome::Drawn,
            None => Outcome::Ongoing,
        };
    }

    /// Return the side holding a completed line, if any.
    fn line_winner(&self) -> Option<Side> {
        for line in LINES {
            if let Some(side) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(side) && self.cells[line[2]] == Some(side) {
                    return Some(side);
                }
            }
        }
        None
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        // Alternating play keeps the mark counts within one of each other
        let mut counts = [0u32; Side::COUNT];
        for side in self.cells.iter().flatten() {
            counts[side.index()] += 1;
        }
        let (x, o) = (counts[Side::X.index()], counts[Side::O.index()]);
        if x.abs_diff(o) > 1 {
            return Err(BoardError::MarkCountMismatch { x, o });
        }

        // History entries must point at occupied cells, each at most once
        let mut seen = [false; Cell::COUNT];
        for &cell in self.history() {
            if self.cells[cell.index()].is_none() {
                return Err(BoardError::HistoryCellEmpty { index: cell.index() });
            }
            if seen[cell.index()] {
                return Err(BoardError::DuplicateHistoryCell { index: cell.index() });
            }
            seen[cell.index()] = true;
        }

        // The stored outcome must never be stale
        let mut fresh = *self;
        fresh.recompute_outcome();
        if fresh.outcome != self.outcome {
            return Err(BoardError::StaleOutcome);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Owned enumeration of empty cells, ascending by index.
#[derive(Debug, Clone)]
pub struct LegalMoves {
    cells: [Option<Side>; Cell::COUNT],
    next: u8,
}

impl Iterator for LegalMoves {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while (self.next as usize) < Cell::COUNT {
            let cell = Cell::ALL[self.next as usize];
            self.next += 1;
            if self.cells[cell.index()].is_none() {
                return Some(cell);
            }
        }
        None
    }
}

/// Wrapper for pretty-printing a board as a 3x3 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..3 {
            for col in 0u8..3 {
                let cell = Cell::new(row, col);
                let c = match board.cell_at(cell) {
                    Some(side) => side.mark(),
                    None => '.',
                };
                if col < 2 {
                    write!(f, " {c} |")?;
                } else {
                    write!(f, " {c}")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, MoveOutcome};
    use crate::cell::Cell;
    use crate::error::EmptyHistory;
    use crate::outcome::Outcome;
    use crate::side::Side;

    fn cell(index: usize) -> Cell {
        Cell::from_index(index).unwrap()
    }

    /// Apply a sequence of moves, asserting each is accepted.
    fn play(board: &mut Board, indices: &[usize]) {
        for &i in indices {
            assert_eq!(board.apply_move(cell(i)), MoveOutcome::Applied);
        }
    }

    #[test]
    fn new_board_is_empty_with_x_to_move() {
        let board = Board::new();
        assert_eq!(board.side_to_move(), Side::X);
        assert_eq!(board.outcome(), Outcome::Ongoing);
        assert_eq!(board.moves_played(), 0);
        assert_eq!(board.legal_moves().count(), 9);
        board.validate().unwrap();
    }

    #[test]
    fn apply_alternates_sides() {
        let mut board = Board::new();
        play(&mut board, &[4, 0]);
        assert_eq!(board.cell_at(cell(4)), Some(Side::X));
        assert_eq!(board.cell_at(cell(0)), Some(Side::O));
        assert_eq!(board.side_to_move(), Side::X);
        assert_eq!(board.history(), &[cell(4), cell(0)]);
        board.validate().unwrap();
    }

    #[test]
    fn apply_occupied_cell_rejects_without_side_effects() {
        let mut board = Board::new();
        play(&mut board, &[4]);
        let snapshot = board;
        assert_eq!(board.apply_move(cell(4)), MoveOutcome::Rejected);
        assert_eq!(board, snapshot);
        assert_eq!(board.side_to_move(), Side::O);
        assert_eq!(board.moves_played(), 1);
    }

    #[test]
    fn apply_index_rejects_out_of_range() {
        let mut board = Board::new();
        let snapshot = board;
        assert_eq!(board.apply_index(9), MoveOutcome::Rejected);
        assert_eq!(board.apply_index(usize::MAX), MoveOutcome::Rejected);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let mut board = Board::new();
        assert_eq!(board.undo_last_move(), Err(EmptyHistory));
    }

    #[test]
    fn apply_undo_roundtrip_restores_exact_state() {
        // X0 O3 X1 — every prefix checked, including through a win
        let sequences: [&[usize]; 3] = [&[4], &[0, 3, 1, 4, 2], &[0, 1, 3, 4, 6]];
        for seq in sequences {
            let mut board = Board::new();
            for &i in seq {
                let snapshot = board;
                assert_eq!(board.apply_move(cell(i)), MoveOutcome::Applied);
                let mut undone = board;
                assert_eq!(undone.undo_last_move(), Ok(cell(i)));
                assert_eq!(undone, snapshot);
            }
        }
    }

    #[test]
    fn legal_moves_plus_occupied_is_nine() {
        let mut board = Board::new();
        for (played, &i) in [4, 0, 8, 2, 6].iter().enumerate() {
            assert_eq!(board.legal_moves().count() + played, 9);
            play(&mut board, &[i]);
        }
    }

    #[test]
    fn legal_moves_ascending_and_restartable() {
        let mut board = Board::new();
        play(&mut board, &[4, 0]);
        let first: Vec<usize> = board.legal_moves().map(|c| c.index()).collect();
        let second: Vec<usize> = board.legal_moves().map(|c| c.index()).collect();
        assert_eq!(first, vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(first, second);
    }

    #[test]
    fn row_win_detected() {
        let mut board = Board::new();
        play(&mut board, &[0, 3, 1, 4, 2]);
        assert_eq!(board.outcome(), Outcome::Won(Side::X));
        assert_eq!(board.winner(), Some(Side::X));
    }

    #[test]
    fn column_win_detected() {
        let mut board = Board::new();
        play(&mut board, &[0, 1, 3, 2, 8, 4, 5, 7]);
        // O completes the middle column: 1, 4, 7
        assert_eq!(board.outcome(), Outcome::Won(Side::O));
    }

    #[test]
    fn diagonal_win_detected() {
        let mut board = Board::new();
        play(&mut board, &[0, 1, 4, 2, 8]);
        assert_eq!(board.outcome(), Outcome::Won(Side::X));
    }

    #[test]
    fn full_board_without_line_is_drawn() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        play(&mut board, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(board.outcome(), Outcome::Drawn);
        assert_eq!(board.legal_moves().count(), 0);
    }

    #[test]
    fn undo_clears_win() {
        let mut board = Board::new();
        play(&mut board, &[0, 3, 1, 4, 2]);
        assert_eq!(board.outcome(), Outcome::Won(Side::X));
        assert_eq!(board.undo_last_move(), Ok(cell(2)));
        assert_eq!(board.outcome(), Outcome::Ongoing);
        assert_eq!(board.side_to_move(), Side::X);
        board.validate().unwrap();
    }

    #[test]
    fn pretty_print() {
        let mut board = Board::new();
        play(&mut board, &[4, 0]);
        let output = format!("{}", board.pretty());
        assert_eq!(output, " O | . | .\n-----------\n . | X | .\n-----------\n . | . | .");
    }

    #[test]
    fn equal_positions_compare_equal_regardless_of_detours() {
        let mut direct = Board::new();
        play(&mut direct, &[4]);

        let mut detour = Board::new();
        play(&mut detour, &[8]);
        detour.undo_last_move().unwrap();
        play(&mut detour, &[4]);

        assert_eq!(direct, detour);
    }
}
