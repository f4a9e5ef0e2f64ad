//! Board Tests
//!
//! Tests for squares, move encoding, move generation, check detection,
//! game-over detection, and zobrist hashing on the 6x5 board.

use minichess::core::board::{Board, COLS, Outcome, Piece, PieceKind, ROWS, Side, Square};
use minichess::core::moves::Move;
use std::collections::HashSet;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}

fn dests(board: &Board, from: (u8, u8)) -> Vec<Square> {
    board
        .legal_moves(sq(from.0, from.1))
        .iter()
        .map(|m| m.to())
        .collect()
}

// ============================================================================
// Square and Move Encoding Tests
// ============================================================================

#[test]
fn test_square_roundtrip() {
    let mut seen = HashSet::new();
    for row in 0..ROWS as u8 {
        for col in 0..COLS as u8 {
            let s = Square::new(row, col);
            assert_eq!(s.row(), row);
            assert_eq!(s.col(), col);
            assert_eq!(Square::from_index(s.index() as u8), s);
            assert!(seen.insert(s.index()));
        }
    }
    assert_eq!(seen.len(), ROWS * COLS);
}

#[test]
fn test_square_try_new_bounds() {
    assert!(Square::try_new(5, 4).is_some());
    assert!(Square::try_new(6, 0).is_none());
    assert!(Square::try_new(0, 5).is_none());
    assert!(Square::try_new(200, 200).is_none());
}

#[test]
fn test_square_offset() {
    let s = sq(3, 2);
    assert_eq!(s.offset(-1, 1), Some(sq(2, 3)));
    assert_eq!(s.offset(2, -2), Some(sq(5, 0)));
    assert_eq!(sq(0, 0).offset(-1, 0), None);
    assert_eq!(sq(5, 4).offset(0, 1), None);
}

#[test]
fn test_square_algebraic() {
    assert_eq!(Square::from_algebraic("a1"), Some(sq(5, 0)));
    assert_eq!(Square::from_algebraic("e6"), Some(sq(0, 4)));
    assert_eq!(Square::from_algebraic("c3"), Some(sq(3, 2)));
    assert_eq!(Square::from_algebraic("f1"), None);
    assert_eq!(Square::from_algebraic("a7"), None);
    assert_eq!(Square::from_algebraic("a0"), None);
    assert_eq!(Square::from_algebraic(""), None);
    assert_eq!(Square::from_algebraic("a10"), None);

    for row in 0..ROWS as u8 {
        for col in 0..COLS as u8 {
            let s = Square::new(row, col);
            assert_eq!(Square::from_algebraic(&s.to_algebraic()), Some(s));
        }
    }
}

#[test]
fn test_move_encoding() {
    let m = mv((5, 0), (3, 0));
    assert_eq!(m.from(), sq(5, 0));
    assert_eq!(m.to(), sq(3, 0));

    let parsed = Move::from_text("b2b3").unwrap();
    assert_eq!(parsed, Move::new(sq(4, 1), sq(3, 1)));
    assert_eq!(format!("{}", parsed), "b2b3");

    assert!(Move::from_text("b2").is_none());
    assert!(Move::from_text("b2b9").is_none());
    assert!(Move::from_text("z2b3").is_none());
}

// ============================================================================
// Starting Position Tests
// ============================================================================

#[test]
fn test_initial_position() {
    let board = Board::new();

    assert_eq!(board.turn(), Side::White);
    assert!(!board.game_over());
    assert!(board.last_move().is_none());
    assert!(!board.check_flag(Side::White));
    assert!(!board.check_flag(Side::Black));

    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Rook,
    ];
    for (col, kind) in back.iter().enumerate() {
        let black = board.piece_at(sq(0, col as u8)).unwrap();
        assert_eq!(black.side, Side::Black);
        assert_eq!(black.kind, *kind);
        assert!(!black.moved);

        let white = board.piece_at(sq(5, col as u8)).unwrap();
        assert_eq!(white.side, Side::White);
        assert_eq!(white.kind, *kind);
        assert!(!white.moved);
    }
    for col in 0..COLS as u8 {
        assert_eq!(
            board.piece_at(sq(1, col)),
            Some(Piece::new(Side::Black, PieceKind::Pawn))
        );
        assert_eq!(
            board.piece_at(sq(4, col)),
            Some(Piece::new(Side::White, PieceKind::Pawn))
        );
        assert!(board.piece_at(sq(2, col)).is_none());
        assert!(board.piece_at(sq(3, col)).is_none());
    }

    assert_eq!(board.king_square(Side::White), Some(sq(5, 2)));
    assert_eq!(board.king_square(Side::Black), Some(sq(0, 2)));
}

#[test]
fn test_initial_move_counts() {
    let board = Board::new();
    // Five pawns with push + double push, plus two knight hops per side.
    assert_eq!(board.all_legal_moves(Side::White).len(), 12);
    assert_eq!(board.all_legal_moves(Side::Black).len(), 12);
}

// ============================================================================
// Pawn Move Tests
// ============================================================================

#[test]
fn test_pawn_single_and_double_push() {
    let board = Board::new();
    assert_eq!(dests(&board, (4, 1)), vec![sq(3, 1), sq(2, 1)]);
    assert_eq!(dests(&board, (1, 3)), vec![sq(2, 3), sq(3, 3)]);
}

#[test]
fn test_pawn_push_blocked() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 2), Piece::new(Side::White, PieceKind::Pawn));
    board.put_piece(sq(2, 2), Piece::new(Side::Black, PieceKind::Pawn));

    // Blocked straight ahead and nothing to capture.
    assert!(dests(&board, (3, 2)).is_empty());
}

#[test]
fn test_pawn_double_push_blocked_midway() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(4, 2), Piece::new(Side::White, PieceKind::Pawn));
    board.put_piece(sq(2, 2), Piece::new(Side::Black, PieceKind::Rook));

    // Single push is open, the double push lands on the rook.
    assert_eq!(dests(&board, (4, 2)), vec![sq(3, 2)]);

    // A blocker directly ahead kills both pushes, and the pawn
    // cannot capture it straight on.
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(4, 2), Piece::new(Side::White, PieceKind::Pawn));
    board.put_piece(sq(3, 2), Piece::new(Side::Black, PieceKind::Rook));
    assert!(dests(&board, (4, 2)).is_empty());
}

#[test]
fn test_pawn_captures_diagonally() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 4), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 1), Piece::new(Side::White, PieceKind::Pawn));
    board.put_piece(sq(2, 0), Piece::new(Side::Black, PieceKind::Pawn));
    board.put_piece(sq(2, 1), Piece::new(Side::Black, PieceKind::Pawn));
    board.put_piece(sq(2, 2), Piece::new(Side::Black, PieceKind::Pawn));

    assert_eq!(dests(&board, (3, 1)), vec![sq(2, 0), sq(2, 2)]);
}

#[test]
fn test_pawn_no_double_push_off_start_rank() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 4), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 1), Piece::new(Side::White, PieceKind::Pawn));

    assert_eq!(dests(&board, (3, 1)), vec![sq(2, 1)]);
}

// ============================================================================
// Knight, King, and Slider Tests
// ============================================================================

#[test]
fn test_knight_moves_center() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 2), Piece::new(Side::White, PieceKind::Knight));

    assert_eq!(
        dests(&board, (3, 2)),
        vec![
            sq(1, 1),
            sq(1, 3),
            sq(2, 0),
            sq(2, 4),
            sq(4, 0),
            sq(4, 4),
            sq(5, 1),
            sq(5, 3),
        ]
    );
}

#[test]
fn test_knight_moves_corner() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::Knight));

    assert_eq!(dests(&board, (0, 0)), vec![sq(1, 2), sq(2, 1)]);
}

#[test]
fn test_knight_own_vs_enemy_target() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 2), Piece::new(Side::White, PieceKind::Knight));
    board.put_piece(sq(1, 1), Piece::new(Side::White, PieceKind::Pawn));
    board.put_piece(sq(1, 3), Piece::new(Side::Black, PieceKind::Pawn));

    let moves = dests(&board, (3, 2));
    assert_eq!(moves.len(), 7);
    assert!(moves.contains(&sq(1, 3)));
    assert!(!moves.contains(&sq(1, 1)));
}

#[test]
fn test_bishop_rays_and_blockers() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 2), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 2), Piece::new(Side::White, PieceKind::Bishop));
    board.put_piece(sq(1, 0), Piece::new(Side::White, PieceKind::Pawn));
    board.put_piece(sq(1, 4), Piece::new(Side::Black, PieceKind::Pawn));

    // Rays stop before an own piece and on an enemy piece.
    assert_eq!(
        dests(&board, (3, 2)),
        vec![
            sq(2, 1),
            sq(2, 3),
            sq(1, 4),
            sq(4, 1),
            sq(5, 0),
            sq(4, 3),
            sq(5, 4),
        ]
    );
}

#[test]
fn test_rook_rays_and_blockers() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(2, 2), Piece::new(Side::White, PieceKind::Rook));
    board.put_piece(sq(2, 4), Piece::new(Side::Black, PieceKind::Pawn));
    board.put_piece(sq(4, 2), Piece::new(Side::White, PieceKind::Pawn));

    assert_eq!(
        dests(&board, (2, 2)),
        vec![
            sq(2, 1),
            sq(2, 0),
            sq(2, 3),
            sq(2, 4),
            sq(1, 2),
            sq(0, 2),
            sq(3, 2),
        ]
    );
}

#[test]
fn test_queen_covers_both_ray_sets() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 1), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(2, 2), Piece::new(Side::White, PieceKind::Queen));

    let moves = dests(&board, (2, 2));
    assert_eq!(moves.len(), 17);
    // Diagonal rays come out first.
    assert_eq!(moves[0], sq(1, 1));
    assert!(moves.contains(&sq(5, 2)));
    assert!(moves.contains(&sq(2, 4)));
}

#[test]
fn test_king_moves_at_edge() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));

    assert_eq!(dests(&board, (5, 0)), vec![sq(4, 0), sq(4, 1), sq(5, 1)]);
}

// ============================================================================
// Check Detection Tests
// ============================================================================

#[test]
fn test_rook_check_and_blocked_line() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(0, 2), Piece::new(Side::Black, PieceKind::Rook));

    assert!(board.is_in_check(Side::White));
    assert!(!board.is_in_check(Side::Black));

    board.put_piece(sq(3, 2), Piece::new(Side::White, PieceKind::Pawn));
    assert!(!board.is_in_check(Side::White));
}

#[test]
fn test_pawn_checks_diagonally_not_forward() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));

    board.put_piece(sq(4, 1), Piece::new(Side::Black, PieceKind::Pawn));
    assert!(board.is_in_check(Side::White));

    board.remove_piece(sq(4, 1));
    board.put_piece(sq(4, 2), Piece::new(Side::Black, PieceKind::Pawn));
    assert!(!board.is_in_check(Side::White));
}

#[test]
fn test_knight_check() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 1), Piece::new(Side::Black, PieceKind::Knight));

    assert!(board.is_in_check(Side::White));
}

#[test]
fn test_kingless_side_is_never_in_check() {
    let board = Board::empty();
    assert!(!board.is_in_check(Side::White));
    assert!(!board.is_in_check(Side::Black));
    assert!(board.king_square(Side::White).is_none());
}

// ============================================================================
// Legality Filter Tests
// ============================================================================

#[test]
fn test_pinned_rook_stays_on_line() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 2), Piece::new(Side::White, PieceKind::Rook));
    board.put_piece(sq(0, 2), Piece::new(Side::Black, PieceKind::Rook));

    // Moving off the file would expose the king.
    assert_eq!(
        dests(&board, (3, 2)),
        vec![sq(2, 2), sq(1, 2), sq(0, 2), sq(4, 2)]
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(4, 0), Piece::new(Side::Black, PieceKind::Rook));

    assert_eq!(dests(&board, (5, 2)), vec![sq(5, 1), sq(5, 3)]);
}

#[test]
fn test_check_must_be_resolved() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(2, 2), Piece::new(Side::Black, PieceKind::Rook));
    board.put_piece(sq(4, 1), Piece::new(Side::White, PieceKind::Rook));

    // Only the blocking move survives for the rook.
    assert_eq!(dests(&board, (4, 1)), vec![sq(4, 2)]);
    // The king may only step off the attacked file.
    assert_eq!(dests(&board, (5, 2)), vec![sq(4, 3), sq(5, 1), sq(5, 3)]);
    assert_eq!(board.all_legal_moves(Side::White).len(), 4);
}

#[test]
fn test_legal_moves_never_leave_own_king_in_check() {
    let mut board = Board::new();
    for _ in 0..10 {
        let side = board.turn();
        let moves = board.all_legal_moves(side);
        if moves.is_empty() {
            break;
        }
        for m in &moves {
            let mut probe = board.clone();
            assert!(probe.apply_move(*m));
            assert!(!probe.is_in_check(side));
        }
        board.apply_move(moves[0]);
    }
}

// ============================================================================
// Game Over Tests
// ============================================================================

#[test]
fn test_checkmate_detection() {
    let mut board = Board::empty();
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(1, 1), Piece::new(Side::White, PieceKind::Queen));
    board.put_piece(sq(2, 2), Piece::new(Side::White, PieceKind::King));
    board.set_turn(Side::Black);

    assert!(board.is_in_check(Side::Black));
    assert!(board.is_checkmate(Side::Black));
    assert!(!board.is_stalemate(Side::Black));
    assert!(!board.is_checkmate(Side::White));
}

#[test]
fn test_stalemate_detection() {
    let mut board = Board::empty();
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(2, 1), Piece::new(Side::White, PieceKind::Queen));
    board.put_piece(sq(5, 4), Piece::new(Side::White, PieceKind::King));
    board.set_turn(Side::Black);

    assert!(!board.is_in_check(Side::Black));
    assert!(board.is_stalemate(Side::Black));
    assert!(!board.is_checkmate(Side::Black));
}

#[test]
fn test_apply_move_sets_checkmate_outcome() {
    let mut board = Board::empty();
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(1, 3), Piece::new(Side::White, PieceKind::Queen));
    board.put_piece(sq(2, 2), Piece::new(Side::White, PieceKind::King));

    assert!(board.apply_move(mv((1, 3), (1, 1))));
    assert_eq!(
        board.outcome(),
        Some(Outcome::Checkmate {
            winner: Side::White
        })
    );
    assert!(board.game_over());
    assert!(board.check_flag(Side::Black));

    // Once the game is over no further move is accepted.
    let frozen = board.clone();
    assert!(!board.apply_move(mv((0, 0), (0, 1))));
    assert_eq!(board, frozen);
}

#[test]
fn test_apply_move_sets_stalemate_outcome() {
    let mut board = Board::empty();
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(2, 3), Piece::new(Side::White, PieceKind::Queen));
    board.put_piece(sq(5, 4), Piece::new(Side::White, PieceKind::King));

    assert!(board.apply_move(mv((2, 3), (2, 1))));
    assert_eq!(board.outcome(), Some(Outcome::Stalemate));
    assert!(board.game_over());
    assert!(!board.check_flag(Side::Black));
    assert!(!board.check_flag(Side::White));
}

// ============================================================================
// Move Application Tests
// ============================================================================

#[test]
fn test_apply_move_basics() {
    let mut board = Board::new();
    assert!(board.apply_move(mv((4, 1), (3, 1))));

    assert!(board.piece_at(sq(4, 1)).is_none());
    let pawn = board.piece_at(sq(3, 1)).unwrap();
    assert_eq!(pawn.side, Side::White);
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert!(pawn.moved);

    assert_eq!(board.turn(), Side::Black);
    assert_eq!(board.last_move(), Some((sq(4, 1), sq(3, 1))));
    assert!(!board.game_over());
}

#[test]
fn test_apply_move_from_empty_square_fails() {
    let mut board = Board::new();
    let frozen = board.clone();
    assert!(!board.apply_move(mv((3, 3), (2, 3))));
    assert_eq!(board, frozen);
}

#[test]
fn test_apply_move_capture() {
    let mut board = Board::empty();
    board.put_piece(sq(5, 2), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 2), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(3, 0), Piece::new(Side::White, PieceKind::Rook));
    board.put_piece(sq(3, 3), Piece::new(Side::Black, PieceKind::Pawn));

    assert!(board.apply_move(mv((3, 0), (3, 3))));
    let rook = board.piece_at(sq(3, 3)).unwrap();
    assert_eq!(rook.side, Side::White);
    assert_eq!(rook.kind, PieceKind::Rook);
    assert_eq!(board.hash(), board.calculate_hash());
}

#[test]
fn test_promotion_creates_fresh_queen() {
    let mut board = Board::empty();
    board.put_piece(sq(3, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(1, 3), Piece::new(Side::White, PieceKind::Pawn));

    assert!(board.apply_move(mv((1, 3), (0, 3))));
    let queen = board.piece_at(sq(0, 3)).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.side, Side::White);
    assert!(!queen.moved);
    assert_eq!(board.hash(), board.calculate_hash());
}

#[test]
fn test_black_promotion() {
    let mut board = Board::empty();
    board.put_piece(sq(3, 0), Piece::new(Side::White, PieceKind::King));
    board.put_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
    board.put_piece(sq(4, 3), Piece::new(Side::Black, PieceKind::Pawn));
    board.set_turn(Side::Black);

    assert!(board.apply_move(mv((4, 3), (5, 3))));
    let queen = board.piece_at(sq(5, 3)).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.side, Side::Black);
    assert!(!queen.moved);
}

// ============================================================================
// Zobrist Hashing Tests
// ============================================================================

#[test]
fn test_hash_matches_recompute_along_game() {
    let mut board = Board::new();
    assert_eq!(board.hash(), board.calculate_hash());

    let mut hashes = HashSet::new();
    hashes.insert(board.hash());
    let line = [
        mv((4, 1), (3, 1)),
        mv((1, 3), (2, 3)),
        mv((5, 1), (3, 2)),
        mv((0, 1), (2, 0)),
    ];
    for m in line {
        assert!(board.apply_move(m));
        assert_eq!(board.hash(), board.calculate_hash());
        assert!(hashes.insert(board.hash()));
    }
}

#[test]
fn test_hash_depends_on_side_to_move() {
    let baseline = Board::new();
    let mut board = Board::new();

    board.set_turn(Side::Black);
    assert_ne!(board.hash(), baseline.hash());
    board.set_turn(Side::White);
    assert_eq!(board.hash(), baseline.hash());
}

#[test]
fn test_hash_restored_by_put_and_remove() {
    let baseline = Board::new();
    let mut board = Board::new();

    let pawn = board.remove_piece(sq(4, 0)).unwrap();
    assert_ne!(board.hash(), baseline.hash());
    board.put_piece(sq(4, 0), pawn);
    assert_eq!(board.hash(), baseline.hash());
}

#[test]
fn test_same_position_same_hash() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.apply_move(mv((4, 1), (3, 1)));
    b.apply_move(mv((4, 1), (3, 1)));
    assert_eq!(a, b);
    assert_eq!(a.hash(), b.hash());
}
