//! Game session: the operations a client drives the game through
//!
//! Every operation returns a full [`StateSnapshot`]. Rejected requests
//! never change the position; they only set the snapshot message, so a
//! client can always render whatever comes back.

use thiserror::Error;

use crate::core::board::{Board, Outcome, Side, Square};
use crate::core::moves::Move;
use crate::engine::search::Searcher;

use super::snapshot::{CheckFlags, StateSnapshot};

/// Default search depth for a freshly created engine side.
const DEFAULT_DEPTH: u8 = 2;

/// Which sides are played by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum Mode {
    /// Engine plays Black, a human plays White.
    Ai,
    /// Both sides are driven by `request_ai_move`.
    AiVsAi,
    /// No engine; both sides move manually.
    Human,
}

/// Why a request was rejected. The display strings are the messages
/// clients see in the snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Rejection {
    #[error("Invalid piece selection")]
    InvalidSelection,
    #[error("Invalid move: Game is processing or over")]
    Unavailable,
    #[error("Piece not selected")]
    NothingSelected,
    #[error("Invalid move")]
    IllegalMove,
    #[error("Invalid move: Not your turn")]
    WrongSide,
    #[error("Invalid AI move request")]
    AutomationUnavailable,
}

/// A running game plus its engine sides and selection state.
pub struct GameSession {
    board: Board,
    selected: Option<Square>,
    valid_moves: Vec<Square>,
    message: String,
    ai_thinking: bool,
    white_ai: Option<Searcher>,
    black_ai: Option<Searcher>,
}

impl GameSession {
    /// Fresh session in the default mode: engine plays Black.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            selected: None,
            valid_moves: Vec::new(),
            message: String::new(),
            ai_thinking: false,
            white_ai: None,
            black_ai: Some(Searcher::new(DEFAULT_DEPTH)),
        }
    }

    /// Reset to the starting position and install engines per `mode`.
    /// Existing engines are discarded along with their caches.
    pub fn new_game(&mut self, mode: Mode, white_depth: u8, black_depth: u8) -> StateSnapshot {
        (self.white_ai, self.black_ai) = match mode {
            Mode::Ai => (None, Some(Searcher::new(black_depth))),
            Mode::AiVsAi => (
                Some(Searcher::new(white_depth)),
                Some(Searcher::new(black_depth)),
            ),
            Mode::Human => (None, None),
        };
        self.board = Board::new();
        self.selected = None;
        self.valid_moves.clear();
        self.message.clear();
        self.ai_thinking = false;
        log::info!("new game: mode {mode:?}, depths {white_depth}/{black_depth}");
        self.snapshot(None)
    }

    /// Select one of the side-to-move's pieces and compute its legal
    /// destinations. A rejected selection keeps the previous one.
    pub fn select_square(&mut self, row: u8, col: u8) -> StateSnapshot {
        if let Err(rejection) = self.try_select(row, col) {
            self.message = rejection.to_string();
        }
        self.snapshot(None)
    }

    /// Move from the currently selected square to a destination that
    /// was offered for it.
    pub fn make_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> StateSnapshot {
        if let Err(rejection) = self.try_move(from_row, from_col, to_row, to_col) {
            self.message = rejection.to_string();
        }
        self.snapshot(None)
    }

    /// Let the engine configured for the side to move pick and play a
    /// move. The snapshot reports how many nodes the search evaluated.
    pub fn request_ai_move(&mut self) -> StateSnapshot {
        match self.try_ai_move() {
            Ok(nodes) => self.snapshot(Some(nodes)),
            Err(rejection) => {
                self.message = rejection.to_string();
                self.snapshot(None)
            }
        }
    }

    /// Current state without changing anything.
    pub fn state(&self) -> StateSnapshot {
        self.snapshot(None)
    }

    /// Read access to the underlying position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the position, clearing the selection. Setup hook for
    /// analysis and tests; the engines and their caches stay.
    pub fn set_position(&mut self, board: Board) {
        self.board = board;
        self.selected = None;
        self.valid_moves.clear();
    }

    fn try_select(&mut self, row: u8, col: u8) -> Result<(), Rejection> {
        let square = Square::try_new(row, col).ok_or(Rejection::InvalidSelection)?;
        let piece = self
            .board
            .piece_at(square)
            .ok_or(Rejection::InvalidSelection)?;
        if piece.side != self.board.turn() {
            return Err(Rejection::InvalidSelection);
        }
        self.selected = Some(square);
        self.valid_moves = self
            .board
            .legal_moves(square)
            .iter()
            .map(|mv| mv.to())
            .collect();
        Ok(())
    }

    fn try_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<(), Rejection> {
        if self.ai_thinking || self.board.game_over() {
            return Err(Rejection::Unavailable);
        }
        let from = Square::try_new(from_row, from_col).ok_or(Rejection::NothingSelected)?;
        if self.selected != Some(from) {
            return Err(Rejection::NothingSelected);
        }
        let to = Square::try_new(to_row, to_col).ok_or(Rejection::IllegalMove)?;
        if !self.valid_moves.contains(&to) {
            return Err(Rejection::IllegalMove);
        }
        let piece = self.board.piece_at(from).ok_or(Rejection::WrongSide)?;
        if piece.side != self.board.turn() {
            return Err(Rejection::WrongSide);
        }
        self.play(Move::new(from, to));
        Ok(())
    }

    fn try_ai_move(&mut self) -> Result<u64, Rejection> {
        if self.ai_thinking || self.board.game_over() {
            return Err(Rejection::AutomationUnavailable);
        }
        let side = self.board.turn();
        let searcher = match side {
            Side::White => self.white_ai.as_mut(),
            Side::Black => self.black_ai.as_mut(),
        }
        .ok_or(Rejection::AutomationUnavailable)?;

        self.ai_thinking = true;
        let chosen = searcher.select_move(&self.board, side);
        let nodes = searcher.stats().nodes;
        if let Some(mv) = chosen {
            self.play(mv);
        }
        self.ai_thinking = false;
        Ok(nodes)
    }

    /// Apply a validated move and record the terminal message when the
    /// game ends on it.
    fn play(&mut self, mv: Move) {
        self.board.apply_move(mv);
        self.selected = None;
        self.valid_moves.clear();
        if let Some(outcome) = self.board.outcome() {
            self.message = match outcome {
                Outcome::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
                Outcome::Stalemate => "Stalemate! Game is a draw.".to_string(),
            };
        }
    }

    fn snapshot(&self, nodes: Option<u64>) -> StateSnapshot {
        StateSnapshot {
            board: StateSnapshot::grid_of(&self.board),
            turn: self.board.turn(),
            selected_piece: self.selected.map(|sq| (sq.row(), sq.col())),
            valid_moves: self
                .valid_moves
                .iter()
                .map(|sq| (sq.row(), sq.col()))
                .collect(),
            last_move: self
                .board
                .last_move()
                .map(|(from, to)| ((from.row(), from.col()), (to.row(), to.col()))),
            game_over: self.board.game_over(),
            message: self.message.clone(),
            ai_thinking: self.ai_thinking,
            check: CheckFlags {
                white: self.board.check_flag(Side::White),
                black: self.board.check_flag(Side::Black),
            },
            nodes_evaluated: nodes,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
