//! Searcher: iterative deepening driver and search entry point.

use std::time::Instant;

use crate::core::board::{Board, Side};
use crate::core::moves::Move;
use crate::engine::tt::TranspositionTable;

use super::ordering::KillerMoves;
use super::types::{INFINITY, SearchStats, TIME_BUDGET};

/// One side's engine. The transposition table persists across calls,
/// so knowledge accumulates over a game.
pub struct Searcher {
    max_depth: u8,
    pub(super) tt: TranspositionTable,
    pub(super) killers: KillerMoves,
    pub(super) stats: SearchStats,
}

impl Searcher {
    pub fn new(max_depth: u8) -> Self {
        Searcher {
            max_depth,
            tt: TranspositionTable::default(),
            killers: KillerMoves::new(max_depth),
            stats: SearchStats::default(),
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Counters from the most recent `select_move` call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick a move for `side`, which must be the side to move. Deepens
    /// from 1 to the configured depth, keeping the best move of the
    /// deepest finished iteration; the time budget is checked before
    /// each iteration starts. Returns None only when the side has no
    /// legal move.
    pub fn select_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.stats = SearchStats::default();
        let start = Instant::now();
        let mut best = None;

        for depth in 1..=self.max_depth {
            if start.elapsed() > TIME_BUDGET {
                log::debug!("time budget spent, stopping before depth {depth}");
                break;
            }
            self.killers.clear_depth(depth);
            let (score, mv) = self.minimax(board, depth, -INFINITY, INFINITY, side);
            if mv.is_some() {
                best = mv;
            }
            log::debug!(
                "depth {depth}: score {score}, best {:?}, {} nodes, {} tt hits, {:.0?} elapsed",
                best,
                self.stats.nodes,
                self.stats.tt_hits,
                start.elapsed()
            );
        }

        if let Some(mv) = best {
            log::info!(
                "{side} plays {mv} after {} nodes in {:.0?}",
                self.stats.nodes,
                start.elapsed()
            );
        }
        best
    }
}
