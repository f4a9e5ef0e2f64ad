//! Move representation
//!
//! Moves are encoded in a compact 16-bit format:
//! - bits 0-4: from square (0-29)
//! - bits 5-9: to square (0-29)
//!
//! Promotion carries no payload here: a pawn arriving on the far rank
//! always becomes a queen, so the destination row implies it.

use super::board::Square;
use std::fmt;

/// A move encoded in 16 bits
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u16);

impl Move {
    const SQUARE_MASK: u16 = 0x1F;
    const TO_SHIFT: u16 = 5;

    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << Self::TO_SHIFT))
    }

    /// Get the source square
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & Self::SQUARE_MASK) as u8)
    }

    /// Get the destination square
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> Self::TO_SHIFT) & Self::SQUARE_MASK) as u8)
    }

    /// Parse a move from coordinate text such as "b2b3".
    pub fn from_text(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        let from = Square::from_algebraic(s.get(0..2)?)?;
        let to = Square::from_algebraic(s.get(2..4)?)?;
        Some(Move::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}
