//! Core game types and rules
//!
//! This module contains the fundamental building blocks of the variant:
//! - Board state and geometry
//! - Move encoding
//! - Legal move generation
//! - Zobrist hashing

pub mod board;
pub mod movegen;
pub mod moves;
pub mod zobrist;

pub use board::{Board, COLS, Outcome, Piece, PieceKind, ROWS, Side, Square};
pub use moves::Move;
pub use zobrist::ZobristKeys;
