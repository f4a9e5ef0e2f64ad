//! Move ordering: killer moves and the static ordering heuristic.

use crate::core::board::{Board, PieceKind, Side};
use crate::core::moves::Move;

/// Killer moves indexed by remaining depth, at most two per depth.
/// Entries arrive first-come and are never displaced within one
/// deepening iteration.
pub(super) struct KillerMoves {
    moves: Vec<Vec<Move>>,
}

impl KillerMoves {
    pub(super) fn new(max_depth: u8) -> Self {
        KillerMoves {
            moves: vec![Vec::new(); max_depth as usize + 1],
        }
    }

    pub(super) fn record(&mut self, depth: u8, mv: Move) {
        let slot = &mut self.moves[depth as usize];
        if slot.len() < 2 && !slot.contains(&mv) {
            slot.push(mv);
        }
    }

    pub(super) fn at(&self, depth: u8) -> &[Move] {
        &self.moves[depth as usize]
    }

    /// Forget the killers recorded for one depth. Called when a new
    /// deepening iteration starts searching at that depth.
    pub(super) fn clear_depth(&mut self, depth: u8) {
        self.moves[depth as usize].clear();
    }
}

/// Order candidate moves for the side to move: killers recorded at this
/// depth come first (when they are still candidates), the rest follow
/// in descending heuristic score. The sort is stable, so equally scored
/// moves keep generation order.
pub(super) fn order_moves(
    board: &Board,
    moves: Vec<Move>,
    side: Side,
    depth: u8,
    killers: &KillerMoves,
) -> Vec<Move> {
    let mut ordered: Vec<Move> = Vec::with_capacity(moves.len());
    for killer in killers.at(depth) {
        if moves.contains(killer) && !ordered.contains(killer) {
            ordered.push(*killer);
        }
    }
    let mut rest: Vec<(Move, i32)> = moves
        .iter()
        .copied()
        .filter(|mv| !ordered.contains(mv))
        .map(|mv| (mv, heuristic_score(board, mv, side)))
        .collect();
    rest.sort_by(|a, b| b.1.cmp(&a.1));
    ordered.extend(rest.into_iter().map(|(mv, _)| mv));
    ordered
}

/// Static promise of a move: capture value, check and mate probes on a
/// scratch board, promotion, and a small nudge toward the center.
fn heuristic_score(board: &Board, mv: Move, side: Side) -> i32 {
    let mut score = 0;

    if let Some(target) = board.piece_at(mv.to()) {
        if target.side != side {
            score += target.value() * 100;
        }
    }

    let mut probe = board.clone();
    probe.apply_move(mv);
    let opponent = side.opponent();
    if probe.is_in_check(opponent) {
        score += 70;
    }
    if probe.is_checkmate(opponent) {
        score += 10_000;
    }

    if let Some(piece) = board.piece_at(mv.from()) {
        if piece.kind == PieceKind::Pawn && mv.to().row() == side.promotion_rank() {
            score += 900;
        }
    }

    if (1..=4).contains(&mv.to().row()) && (1..=3).contains(&mv.to().col()) {
        score += 15;
    }

    score
}
