//! Search: iterative deepening minimax with alpha-beta pruning.

mod alphabeta;
mod ordering;
mod searcher;
mod types;

pub use searcher::Searcher;
pub use types::{INFINITY, MATE_SCORE, SearchStats, TIME_BUDGET};
