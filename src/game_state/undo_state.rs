use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record pushed by `make_move` and popped by `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    /// The applied move, carrying the resolved promotion choice.
    pub mv: Move,
    /// Includes a pawn taken en passant, which was not on the destination.
    pub captured_piece: Option<Piece>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,

    // Cached terminal flags; cleared while the move is on the board.
    pub prev_checkmate: bool,
    pub prev_stalemate: bool,
}
