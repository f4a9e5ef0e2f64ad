//! Legal move generation
//!
//! Pseudo-legal moves come from per-piece geometry; each candidate is
//! then simulated on a scratch board and dropped if it leaves the
//! mover's own king attacked.

use super::board::{
    BISHOP_DIRS, Board, COLS, KING_OFFSETS, KNIGHT_OFFSETS, PieceKind, ROOK_DIRS, ROWS, Side,
    Square,
};
use super::moves::Move;

impl Board {
    /// All legal moves for the piece on `from`. Empty when the square
    /// is empty. The owner of the piece moves regardless of whose turn
    /// it is, which lets the evaluator measure mobility for both sides.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return Vec::new(),
        };
        let mut moves = Vec::with_capacity(16);
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece.side, &mut moves),
            PieceKind::Knight => self.leaper_moves(from, piece.side, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => self.slider_moves(from, piece.side, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => self.slider_moves(from, piece.side, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => {
                self.slider_moves(from, piece.side, &BISHOP_DIRS, &mut moves);
                self.slider_moves(from, piece.side, &ROOK_DIRS, &mut moves);
            }
            PieceKind::King => self.leaper_moves(from, piece.side, &KING_OFFSETS, &mut moves),
        }
        moves.retain(|mv| !self.move_exposes_king(*mv, piece.side));
        moves
    }

    /// All legal moves for one side, scanning squares in row-major order.
    pub fn all_legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                let sq = Square::new(row, col);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.side == side {
                        moves.extend(self.legal_moves(sq));
                    }
                }
            }
        }
        moves
    }

    /// Does this side have at least one legal move? Stops at the first
    /// square that yields one.
    pub(crate) fn has_any_legal_move(&self, side: Side) -> bool {
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                let sq = Square::new(row, col);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.side == side && !self.legal_moves(sq).is_empty() {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Simulate the bare relocation on a scratch board and test whether
    /// the mover's king ends up attacked. Promotion and flag updates are
    /// irrelevant to the attack scan and skipped.
    fn move_exposes_king(&self, mv: Move, side: Side) -> bool {
        let mut scratch = self.clone();
        let piece = scratch.grid[mv.from().row() as usize][mv.from().col() as usize].take();
        scratch.grid[mv.to().row() as usize][mv.to().col() as usize] = piece;
        match scratch.king_square(side) {
            Some(king) => scratch.square_attacked(king, side.opponent()),
            None => false,
        }
    }

    /// Pawn pushes, the initial double push and diagonal captures, in
    /// that order.
    fn pawn_moves(&self, from: Square, side: Side, out: &mut Vec<Move>) {
        let dir = side.pawn_dir();
        if let Some(ahead) = from.offset(dir, 0) {
            if self.piece_at(ahead).is_none() {
                out.push(Move::new(from, ahead));
                if from.row() == side.pawn_rank() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.piece_at(two).is_none() {
                            out.push(Move::new(from, two));
                        }
                    }
                }
            }
        }
        for dc in [-1, 1] {
            if let Some(diag) = from.offset(dir, dc) {
                if let Some(target) = self.piece_at(diag) {
                    if target.side != side {
                        out.push(Move::new(from, diag));
                    }
                }
            }
        }
    }

    /// Fixed-offset movers (knight, king).
    fn leaper_moves(&self, from: Square, side: Side, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                match self.piece_at(to) {
                    Some(target) if target.side == side => {}
                    _ => out.push(Move::new(from, to)),
                }
            }
        }
    }

    /// Ray movers (bishop, rook, and queen as their union). Each ray
    /// extends until it hits a piece; an enemy piece is a capture and
    /// ends the ray.
    fn slider_moves(&self, from: Square, side: Side, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
        for &(dr, dc) in dirs {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => {
                        out.push(Move::new(from, to));
                        cursor = to.offset(dr, dc);
                    }
                    Some(target) => {
                        if target.side != side {
                            out.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }
}
