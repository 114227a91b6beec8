//! Search for tritac: exhaustive minimax move selection.

pub mod search;

pub use search::{SearchResult, WIN_SCORE, best_move, search};
