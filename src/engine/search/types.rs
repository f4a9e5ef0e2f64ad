//! Search stats and score constants.

use std::time::Duration;

/// Counters accumulated over one `select_move` call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Leaf evaluations performed.
    pub nodes: u64,
    /// Probes answered by the transposition table.
    pub tt_hits: u64,
}

/// Sentinel bounds for the alpha-beta window. Far outside any finite
/// evaluation but well inside i32, so negation and comparisons never
/// overflow.
pub const INFINITY: i32 = 3_000_000;
/// Score of a won position. Every finite evaluation stays below this.
pub const MATE_SCORE: i32 = 2_900_000;

/// Wall-clock budget for one move selection. Checked between deepening
/// iterations only; an iteration in flight runs to completion.
pub const TIME_BUDGET: Duration = Duration::from_secs(5);
