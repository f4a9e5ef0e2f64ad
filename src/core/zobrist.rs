//! Zobrist hashing for position identification
//!
//! Random bitstrings XOR'd together give every position a 64-bit key.
//! Only the piece placement and the side to move feed the hash; the
//! moved flags and the last-move record do not.

use super::board::{COLS, Piece, ROWS, Square};
use std::sync::OnceLock;

/// Zobrist random keys
pub struct ZobristKeys {
    /// Keys for each piece on each square, indexed [side * 6 + kind][square]
    pieces: [[u64; ROWS * COLS]; 12],
    /// Key for Black to move
    side: u64,
}

impl ZobristKeys {
    /// Get the global Zobrist keys instance
    pub fn instance() -> &'static ZobristKeys {
        static KEYS: OnceLock<ZobristKeys> = OnceLock::new();
        KEYS.get_or_init(ZobristKeys::new)
    }

    /// Generate the keys from a fixed seed so hashes are stable
    /// across runs.
    fn new() -> Self {
        let mut seed = 0xF00D_F00D_DEAD_BEEF;
        let mut pieces = [[0u64; ROWS * COLS]; 12];
        for piece_keys in pieces.iter_mut() {
            for sq_key in piece_keys.iter_mut() {
                seed = splitmix64(seed);
                *sq_key = seed;
            }
        }
        let side = splitmix64(seed);
        ZobristKeys { pieces, side }
    }

    /// Get the key for a piece on a square
    #[inline]
    pub fn piece(&self, piece: Piece, sq: Square) -> u64 {
        let idx = piece.side.index() * 6 + piece.kind.index();
        self.pieces[idx][sq.index()]
    }

    /// Get the side to move key
    #[inline]
    pub fn side_to_move(&self) -> u64 {
        self.side
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
