pub mod core;
pub mod engine;
pub mod game;

pub use crate::core::board::{Board, COLS, Outcome, Piece, PieceKind, ROWS, Side, Square};
pub use crate::core::moves::Move;
pub use engine::eval::evaluate;
pub use engine::search::Searcher;
pub use game::{GameSession, Mode, StateSnapshot};
