//! Static position evaluation
//!
//! Scores a position from the point of view of one side, in units of
//! a hundredth of a pawn. The function is antisymmetric: swapping the
//! perspective negates the score. Terminal positions short-circuit to
//! the mate and stalemate sentinels before any term is summed.

use crate::core::board::{Board, COLS, Outcome, PieceKind, ROWS, Side, Square};
use crate::engine::search::MATE_SCORE;

/// Zone bonus for standing inside the extended center (rows 1-4,
/// columns 1-3) versus the rim.
const INNER_ZONE_BONUS: i32 = 15;
const OUTER_ZONE_BONUS: i32 = 5;
const ADVANCE_BONUS: i32 = 20;
const MOBILITY_BONUS: i32 = 15;
const DOUBLED_PENALTY: i32 = -60;
const ISOLATED_PENALTY: i32 = -40;
const SHIELD_BONUS: i32 = 30;
const OPEN_KING_FILE_PENALTY: i32 = -40;
const CHECK_BONUS: i32 = 70;

/// Evaluate the position for `perspective`. Higher is better for that
/// side. Finite scores stay far below `MATE_SCORE`.
pub fn evaluate(board: &Board, perspective: Side) -> i32 {
    if let Some(outcome) = board.outcome() {
        return match outcome {
            Outcome::Checkmate { winner } if winner == perspective => MATE_SCORE,
            Outcome::Checkmate { .. } => -MATE_SCORE,
            Outcome::Stalemate => 0,
        };
    }

    let mut score = 0i32;
    let mut kings = [None; 2];
    let mut pawn_files = [[0i32; COLS]; 2];

    for row in 0..ROWS as u8 {
        for col in 0..COLS as u8 {
            let sq = Square::new(row, col);
            let piece = match board.piece_at(sq) {
                Some(p) => p,
                None => continue,
            };
            let sign = if piece.side == perspective { 1 } else { -1 };
            score += sign * piece.value() * 100;

            match piece.kind {
                PieceKind::King => kings[piece.side.index()] = Some(sq),
                PieceKind::Pawn => {
                    pawn_files[piece.side.index()][col as usize] += 1;
                    let advance = (row as i32 - piece.side.back_rank() as i32).abs();
                    score += sign * ADVANCE_BONUS * advance;
                }
                PieceKind::Knight => {
                    // Manhattan distance from the board center, doubled
                    // to stay in integers.
                    let dist2 = (5 - 2 * col as i32).abs() + (5 - 2 * row as i32).abs();
                    score += sign * (30 - 5 * dist2);
                }
                _ => {}
            }

            score += sign * zone_bonus(row, col);
            score += sign * MOBILITY_BONUS * board.legal_moves(sq).len() as i32;
        }
    }

    for side in [Side::White, Side::Black] {
        let sign = if side == perspective { 1 } else { -1 };
        let files = &pawn_files[side.index()];
        for col in 0..COLS {
            if files[col] > 1 {
                score += sign * DOUBLED_PENALTY;
            }
            if files[col] > 0 && neighbor_files_empty(files, col) {
                score += sign * ISOLATED_PENALTY;
            }
        }
    }

    if let (Some(white_king), Some(black_king)) = (kings[0], kings[1]) {
        for (side, king) in [(Side::White, white_king), (Side::Black, black_king)] {
            let sign = if side == perspective { 1 } else { -1 };
            score += sign * king_safety(board, side, king);
        }
    }

    if board.is_in_check(perspective.opponent()) {
        score += CHECK_BONUS;
    } else if board.is_in_check(perspective) {
        score -= CHECK_BONUS;
    }

    score
}

#[inline]
fn zone_bonus(row: u8, col: u8) -> i32 {
    if (1..=4).contains(&row) && (1..=3).contains(&col) {
        INNER_ZONE_BONUS
    } else {
        OUTER_ZONE_BONUS
    }
}

fn neighbor_files_empty(files: &[i32; COLS], col: usize) -> bool {
    let left = col == 0 || files[col - 1] == 0;
    let right = col + 1 >= COLS || files[col + 1] == 0;
    left && right
}

/// Pawn shield around the king plus a penalty for standing on a file
/// with no friendly pawn.
fn king_safety(board: &Board, side: Side, king: Square) -> i32 {
    let mut score = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if let Some(sq) = king.offset(dr, dc) {
                if let Some(piece) = board.piece_at(sq) {
                    if piece.kind == PieceKind::Pawn && piece.side == side {
                        score += SHIELD_BONUS;
                    }
                }
            }
        }
    }
    let file_has_pawn = (0..ROWS as u8).any(|row| {
        board
            .piece_at(Square::new(row, king.col()))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.side == side)
    });
    if !file_has_pawn {
        score += OPEN_KING_FILE_PENALTY;
    }
    score
}
