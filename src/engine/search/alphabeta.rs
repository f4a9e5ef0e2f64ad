//! Minimax recursion with alpha-beta pruning.

use crate::core::board::{Board, Side};
use crate::core::moves::Move;
use crate::engine::eval::evaluate;

use super::ordering;
use super::searcher::Searcher;
use super::types::INFINITY;

impl Searcher {
    /// Fixed-depth minimax from `root_side`'s point of view. The side
    /// to move maximizes when it is the root side and minimizes
    /// otherwise; scores always read as "good for the root side".
    ///
    /// Returns the score together with the move that achieved it, or
    /// None at leaves and in positions without a legal move.
    pub(super) fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        root_side: Side,
    ) -> (i32, Option<Move>) {
        let key = board.hash();
        if let Some(entry) = self.tt.probe(key, depth) {
            self.stats.tt_hits += 1;
            return (entry.score, entry.best);
        }

        if depth == 0 || board.game_over() {
            self.stats.nodes += 1;
            let score = evaluate(board, root_side);
            self.tt.store(key, depth, score, None);
            return (score, None);
        }

        let to_move = board.turn();
        let moves = board.all_legal_moves(to_move);
        let moves = ordering::order_moves(board, moves, to_move, depth, &self.killers);

        let mut best_move = None;
        if to_move == root_side {
            let mut best = -INFINITY;
            for mv in moves {
                let mut child = board.clone();
                child.apply_move(mv);
                let (score, _) = self.minimax(&child, depth - 1, alpha, beta, root_side);
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.killers.record(depth, mv);
                    break;
                }
            }
            self.tt.store(key, depth, best, best_move);
            (best, best_move)
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let mut child = board.clone();
                child.apply_move(mv);
                let (score, _) = self.minimax(&child, depth - 1, alpha, beta, root_side);
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    self.killers.record(depth, mv);
                    break;
                }
            }
            self.tt.store(key, depth, best, best_move);
            (best, best_move)
        }
    }
}
