//! Wire-format snapshots of session state
//!
//! Everything a client needs to render the game, produced after every
//! operation. The layout matches the grid orientation: `board[0]` is the
//! top row, Black's back rank.

use serde::{Deserialize, Serialize};
use crate::core::board::{Board, COLS, Piece, PieceKind, ROWS, Side, Square};

/// One occupied cell of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub team: Side,
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub value: i32,
    pub has_moved: bool,
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        PieceSnapshot {
            team: piece.side,
            kind: piece.kind,
            value: piece.value(),
            has_moved: piece.moved,
        }
    }
}

/// Check flags for both sides, as recorded on the last applied move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CheckFlags {
    pub white: bool,
    pub black: bool,
}

/// Full state of the session after an operation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub board: Vec<Vec<Option<PieceSnapshot>>>,
    pub turn: Side,
    pub selected_piece: Option<(u8, u8)>,
    pub valid_moves: Vec<(u8, u8)>,
    pub last_move: Option<((u8, u8), (u8, u8))>,
    pub game_over: bool,
    pub message: String,
    pub ai_thinking: bool,
    pub check: CheckFlags,
    /// Leaf evaluations of the automated move that produced this
    /// snapshot; absent on every other operation.
    #[serde(default)]
    pub nodes_evaluated: Option<u64>,
}

impl StateSnapshot {
    /// Render the board grid in wire form.
    pub(super) fn grid_of(board: &Board) -> Vec<Vec<Option<PieceSnapshot>>> {
        (0..ROWS as u8)
            .map(|row| {
                (0..COLS as u8)
                    .map(|col| {
                        board
                            .piece_at(Square::new(row, col))
                            .map(PieceSnapshot::from)
                    })
                    .collect()
            })
            .collect()
    }
}
