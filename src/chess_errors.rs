//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type for the crate. Rule violations
//! (`InvalidMove`, `EmptyHistory`, `InvalidPromotionChoice`) leave the
//! position untouched; parsing variants carry the offending text.
//!
//! Out-of-range square access is not represented here. Every square is bounded
//! by construction, so reaching one is a bug and panics.

use crate::game_state::chess_types::PieceKind;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The move is not in the most recently generated legal move list.
    #[error("move {0} is not legal in the current position")]
    InvalidMove(String),

    #[error("no move to undo")]
    EmptyHistory,

    /// Raised by callers that must produce a move from a terminal position.
    #[error("no legal moves: the game is over")]
    NoLegalMoves,

    /// The promotion provider returned a kind a pawn cannot become.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionChoice(PieceKind),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid board snapshot: {0}")]
    InvalidSnapshot(String),

    /// Position violates the one-king-per-side invariant.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
