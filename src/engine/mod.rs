//! Engine components
//!
//! This module contains the thinking half of the crate:
//! - Static evaluation
//! - Alpha-beta search
//! - Transposition table

pub mod eval;
pub mod search;
pub mod tt;

pub use eval::evaluate;
pub use search::{INFINITY, MATE_SCORE, SearchStats, Searcher};
pub use tt::{TTEntry, TranspositionTable};
