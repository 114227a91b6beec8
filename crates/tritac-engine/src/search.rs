//! Exhaustive depth-aware minimax over the full game tree.
//!
//! No pruning and no caching: the tree is bounded by 9! leaves from the
//! empty board, which is small enough to search to the end every time.

use tracing::debug;

use tritac_core::{Board, Cell, MoveOutcome, Outcome, Side};

/// Score for an immediate win. A win after `d` plies scores `10 - d` and a
/// loss scores `d - 10`, so the search prefers the fastest win and the
/// slowest loss. A draw scores 0.
pub const WIN_SCORE: i32 = 10;

/// Bound below every reachable score.
const NEG_INF: i32 = -100;

/// Bound above every reachable score.
const POS_INF: i32 = 100;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The optimal move for the perspective side, or `None` if the
    /// position is terminal.
    pub best_move: Option<Cell>,
    /// Minimax score of the position from the perspective side's view.
    pub score: i32,
    /// Positions evaluated during the search.
    pub nodes: u64,
}

/// Return the optimal move for `perspective`, assuming the opponent also
/// plays optimally, or `None` if the position is terminal.
pub fn best_move(board: &Board, perspective: Side) -> Option<Cell> {
    search(board, perspective).best_move
}

/// Search the full game tree from `board` on behalf of `perspective`.
///
/// The caller's board is never mutated: the search works on its own copy,
/// and every explored branch is undone before the next is tried. Ties
/// between equally scored moves keep the first seen, which together with
/// the ascending enumeration order makes the result deterministic.
pub fn search(board: &Board, perspective: Side) -> SearchResult {
    match board.outcome() {
        Outcome::Won(winner) => {
            return SearchResult {
                best_move: None,
                score: won_score(winner, perspective, 0),
                nodes: 0,
            };
        }
        Outcome::Drawn => {
            return SearchResult {
                best_move: None,
                score: 0,
                nodes: 0,
            };
        }
        Outcome::Ongoing => {}
    }

    let mut scratch = *board;
    let mut nodes = 0u64;
    let mut best: Option<Cell> = None;
    let mut best_score = NEG_INF;

    for mv in scratch.legal_moves() {
        apply(&mut scratch, mv);
        let score = minimize(&mut scratch, perspective, 0, &mut nodes);
        undo(&mut scratch);

        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    debug!(
        side = %perspective,
        best = ?best,
        score = best_score,
        nodes,
        "search complete"
    );

    SearchResult {
        best_move: best,
        score: best_score,
        nodes,
    }
}

/// Best score the perspective side can force from `board`, with the
/// perspective side to move.
fn maximize(board: &mut Board, perspective: Side, depth: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;
    match board.outcome() {
        Outcome::Won(winner) => return won_score(winner, perspective, depth),
        Outcome::Drawn => return 0,
        Outcome::Ongoing => {}
    }

    let mut best_score = NEG_INF;
    for mv in board.legal_moves() {
        apply(board, mv);
        let score = minimize(board, perspective, depth + 1, nodes);
        undo(board);

        if score > best_score {
            best_score = score;
        }
    }
    best_score
}

/// Worst score the opponent can force on the perspective side from
/// `board`, with the opponent to move.
fn minimize(board: &mut Board, perspective: Side, depth: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;
    match board.outcome() {
        Outcome::Won(winner) => return won_score(winner, perspective, depth),
        Outcome::Drawn => return 0,
        Outcome::Ongoing => {}
    }

    let mut best_score = POS_INF;
    for mv in board.legal_moves() {
        apply(board, mv);
        let score = maximize(board, perspective, depth + 1, nodes);
        undo(board);

        if score < best_score {
            best_score = score;
        }
    }
    best_score
}

/// Terminal score for a won position, biased by depth.
#[inline]
fn won_score(winner: Side, perspective: Side, depth: i32) -> i32 {
    if winner == perspective {
        WIN_SCORE - depth
    } else {
        depth - WIN_SCORE
    }
}

/// Apply a move produced by `legal_moves`; the target cell is empty.
#[inline]
fn apply(board: &mut Board, mv: Cell) {
    let outcome = board.apply_move(mv);
    debug_assert_eq!(outcome, MoveOutcome::Applied);
}

/// Undo the move applied on the current branch.
#[inline]
fn undo(board: &mut Board) {
    board
        .undo_last_move()
        .expect("every undo is paired with a prior apply");
}

#[cfg(test)]
mod tests {
    use super::{WIN_SCORE, best_move, search};
    use tritac_core::{Board, Cell, MoveOutcome, Outcome, Side};

    fn cell(index: usize) -> Cell {
        Cell::from_index(index).unwrap()
    }

    #[test]
    fn takes_immediate_win() {
        // Top row two-in-a-row, cell 2 open
        let board: Board = "XX....... X".parse().unwrap();
        let result = search(&board, Side::X);
        assert_eq!(result.best_move, Some(cell(2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn takes_immediate_win_for_o() {
        let board: Board = "OO....... O".parse().unwrap();
        let result = search(&board, Side::O);
        assert_eq!(result.best_move, Some(cell(2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn blocks_opponent_threat() {
        // O threatens 3-4-5; X must block at 5
        let board: Board = "...OO.... X".parse().unwrap();
        assert_eq!(best_move(&board, Side::X), Some(cell(5)));
    }

    #[test]
    fn blocks_opponent_threat_from_played_position() {
        let mut board = Board::new();
        for i in [0, 3, 8, 4] {
            assert_eq!(board.apply_index(i), MoveOutcome::Applied);
        }
        // X holds 0 and 8, O threatens 3-4-5
        assert_eq!(best_move(&board, Side::X), Some(cell(5)));
    }

    #[test]
    fn prefers_fastest_win_over_deferred_one() {
        // X can win at 2 now, or dawdle and win later; the depth bias
        // makes the immediate win score strictly higher
        let board: Board = "XX.O.O... X".parse().unwrap();
        let result = search(&board, Side::X);
        assert_eq!(result.best_move, Some(cell(2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn never_returns_occupied_cell_and_never_mutates() {
        let positions = ["......... X", "X...O.... X", "XOX.O..X. O", "XX.OO.... O"];
        for notation in positions {
            let board: Board = notation.parse().unwrap();
            let snapshot = board;
            let mv = best_move(&board, board.side_to_move());
            assert_eq!(board, snapshot, "search mutated {notation}");
            let mv = mv.expect("non-terminal position must yield a move");
            assert!(!board.is_occupied(mv), "occupied cell from {notation}");
        }
    }

    #[test]
    fn terminal_positions_yield_no_move() {
        let won: Board = "XXX...OO. O".parse().unwrap();
        let result = search(&won, Side::O);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(search(&won, Side::X).score, WIN_SCORE);

        let drawn: Board = "XOXXOOOXX X".parse().unwrap();
        assert_eq!(search(&drawn, Side::X).best_move, None);
        assert_eq!(search(&drawn, Side::X).score, 0);
    }

    #[test]
    fn optimal_play_from_empty_board_draws() {
        let mut board = Board::new();
        while !board.outcome().is_terminal() {
            let mv = best_move(&board, board.side_to_move())
                .expect("ongoing position must yield a move");
            assert_eq!(board.apply_move(mv), MoveOutcome::Applied);
        }
        assert_eq!(board.outcome(), Outcome::Drawn);
    }

    #[test]
    fn node_count_is_stable() {
        let board: Board = "XX....... X".parse().unwrap();
        let a = search(&board, Side::X);
        let b = search(&board, Side::X);
        assert_eq!(a, b);
        assert!(a.nodes > 0);
    }
}
