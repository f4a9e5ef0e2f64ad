//! Board representation for the 6x5 variant
//!
//! The board is a row-major grid: row 0 is Black's back rank at the top,
//! row 5 is White's back rank at the bottom. Columns run left to right.

use super::moves::Move;
use super::zobrist::ZobristKeys;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows on the board.
pub const ROWS: usize = 6;
/// Number of columns on the board.
pub const COLS: usize = 5;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Back rank layout, left to right: rook, knight, king, bishop, rook.
const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Rook,
];

/// Square on the 6x5 board (0-29, row-major from the top-left corner)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Square(row * COLS as u8 + col)
    }

    /// Build a square from coordinates, rejecting anything off the board.
    #[inline]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < ROWS as u8 && col < COLS as u8 {
            Some(Square::new(row, col))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Square(index)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / COLS as u8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % COLS as u8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a (row, column) delta, returning None when the result
    /// leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row >= 0 && row < ROWS as i8 && col >= 0 && col < COLS as i8 {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parse a square from algebraic notation (e.g., "b2").
    /// Files are a-e left to right, ranks 1-6 from White's side up.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        let bytes = s.as_bytes();
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if col < COLS as u8 && rank < ROWS as u8 {
            Some(Square::new(ROWS as u8 - 1 - rank, col))
        } else {
            None
        }
    }

    /// Convert to algebraic notation
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'1' + (ROWS as u8 - 1 - self.row())) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Side to move / piece owner
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta for a pawn push (-1 for White, +1 for Black)
    #[inline]
    pub const fn pawn_dir(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row holding this side's pawns at the start, where the double
    /// push is still available.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 4,
            Side::Black => 1,
        }
    }

    /// Row holding this side's pieces at the start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 5,
            Side::Black => 0,
        }
    }

    /// Row where this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 5,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Material value in pawn units. The king's value is a sentinel
    /// large enough to dominate every other term.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// Get the character representation of the piece kind
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece on the board
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    pub moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece {
            side,
            kind,
            moved: false,
        }
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// Get the character representation (uppercase for White, lowercase for Black)
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

/// How a finished game ended
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Checkmate { winner: Side },
    Stalemate,
}

/// Full game position: piece grid plus turn, check and termination state
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; COLS]; ROWS],
    pub(crate) turn: Side,
    pub(crate) last_move: Option<(Square, Square)>,
    pub(crate) check: [bool; 2],
    pub(crate) outcome: Option<Outcome>,
    pub(crate) hash: u64,
}

impl Board {
    /// Create an empty board with White to move
    pub fn empty() -> Self {
        Board {
            grid: [[None; COLS]; ROWS],
            turn: Side::White,
            last_move: None,
            check: [false; 2],
            outcome: None,
            hash: 0,
        }
    }

    /// Create a board in the starting position
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.put_piece(
                Square::new(Side::Black.back_rank(), col as u8),
                Piece::new(Side::Black, kind),
            );
            board.put_piece(
                Square::new(Side::White.back_rank(), col as u8),
                Piece::new(Side::White, kind),
            );
        }
        for col in 0..COLS as u8 {
            board.put_piece(
                Square::new(Side::Black.pawn_rank(), col),
                Piece::new(Side::Black, PieceKind::Pawn),
            );
            board.put_piece(
                Square::new(Side::White.pawn_rank(), col),
                Piece::new(Side::White, PieceKind::Pawn),
            );
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check flag recorded when the last move was applied.
    #[inline]
    pub fn check_flag(&self, side: Side) -> bool {
        self.check[side.index()]
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Place a piece, replacing whatever occupied the square. The hash
    /// is kept incrementally consistent.
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        let keys = ZobristKeys::instance();
        let cell = &mut self.grid[sq.row() as usize][sq.col() as usize];
        if let Some(old) = *cell {
            self.hash ^= keys.piece(old, sq);
        }
        *cell = Some(piece);
        self.hash ^= keys.piece(piece, sq);
    }

    /// Remove and return the piece on a square, if any.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.grid[sq.row() as usize][sq.col() as usize].take();
        if let Some(p) = piece {
            self.hash ^= ZobristKeys::instance().piece(p, sq);
        }
        piece
    }

    /// Hand the move to the given side, updating the hash.
    pub fn set_turn(&mut self, side: Side) {
        if side != self.turn {
            self.hash ^= ZobristKeys::instance().side_to_move();
        }
        self.turn = side;
    }

    /// Locate the king of the given side.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                let sq = Square::new(row, col);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.kind == PieceKind::King && piece.side == side {
                        return Some(sq);
                    }
                }
            }
        }
        None
    }

    /// Is any piece of `by` attacking `target`?
    pub fn square_attacked(&self, target: Square, by: Side) -> bool {
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                let from = Square::new(row, col);
                if let Some(piece) = self.piece_at(from) {
                    if piece.side == by && self.attacks_square(from, piece, target) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Is this side's king currently attacked? A board with no king is
    /// never in check.
    pub fn is_in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(king) => self.square_attacked(king, side.opponent()),
            None => false,
        }
    }

    /// Checkmate: the given side is in check with no legal reply.
    pub fn is_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    /// Stalemate: no legal reply while not in check.
    pub fn is_stalemate(&self, side: Side) -> bool {
        !self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    /// Apply a move and advance the turn. Returns false without touching
    /// the position when the game is over or the source square is empty.
    ///
    /// The move is trusted to be legal otherwise; legality filtering
    /// happens in move generation.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if self.game_over() {
            return false;
        }
        let from = mv.from();
        let to = mv.to();
        let mut piece = match self.remove_piece(from) {
            Some(p) => p,
            None => return false,
        };
        let mover = piece.side;
        piece.moved = true;
        if piece.kind == PieceKind::Pawn && to.row() == mover.promotion_rank() {
            piece = Piece::new(mover, PieceKind::Queen);
        }
        self.put_piece(to, piece);
        debug_assert!(
            self.king_square(mover).is_some(),
            "moving side lost its king"
        );
        self.last_move = Some((from, to));
        self.check = [
            self.is_in_check(Side::White),
            self.is_in_check(Side::Black),
        ];
        self.set_turn(mover.opponent());
        let next = self.turn;
        if self.is_checkmate(next) {
            self.outcome = Some(Outcome::Checkmate { winner: mover });
        } else if self.is_stalemate(next) {
            self.outcome = Some(Outcome::Stalemate);
        }
        true
    }

    /// Recompute the position hash from scratch. Used to cross-check the
    /// incrementally maintained value.
    pub fn calculate_hash(&self) -> u64 {
        let keys = ZobristKeys::instance();
        let mut hash = 0u64;
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                let sq = Square::new(row, col);
                if let Some(piece) = self.piece_at(sq) {
                    hash ^= keys.piece(piece, sq);
                }
            }
        }
        if self.turn == Side::Black {
            hash ^= keys.side_to_move();
        }
        hash
    }

    fn attacks_square(&self, from: Square, piece: Piece, target: Square) -> bool {
        let dr = target.row() as i8 - from.row() as i8;
        let dc = target.col() as i8 - from.col() as i8;
        match piece.kind {
            PieceKind::Pawn => dr == piece.side.pawn_dir() && dc.abs() == 1,
            PieceKind::Knight => KNIGHT_OFFSETS.contains(&(dr, dc)),
            PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
            PieceKind::Rook => self.clear_line(from, dr, dc, false),
            PieceKind::Bishop => self.clear_line(from, dr, dc, true),
            PieceKind::Queen => {
                self.clear_line(from, dr, dc, false) || self.clear_line(from, dr, dc, true)
            }
        }
    }

    /// Straight or diagonal line from `from` spanning (dr, dc), with no
    /// piece strictly between the endpoints.
    fn clear_line(&self, from: Square, dr: i8, dc: i8, diagonal: bool) -> bool {
        if diagonal {
            if dr.abs() != dc.abs() || dr == 0 {
                return false;
            }
        } else if (dr == 0) == (dc == 0) {
            return false;
        }
        let steps = dr.abs().max(dc.abs());
        let (sr, sc) = (dr.signum(), dc.signum());
        for i in 1..steps {
            let row = (from.row() as i8 + sr * i) as usize;
            let col = (from.col() as i8 + sc * i) as usize;
            if self.grid[row][col].is_some() {
                return false;
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS as u8 {
            write!(f, "{} ", ROWS as u8 - row)?;
            for col in 0..COLS as u8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => write!(f, " {}", piece.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e")?;
        write!(f, "{} to move", self.turn)
    }
}
