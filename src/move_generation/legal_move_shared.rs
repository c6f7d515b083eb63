//! Pseudo-legal generation entry point and helpers shared by the per-piece
//! generators.
//!
//! Generation never includes castling; see `legal_moves_castling`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// All pseudo-legal moves for `side`, regardless of whose turn it is.
///
/// Squares are visited row by row, then column by column; each piece emits in
/// its own direction order.
pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color, out: &mut Vec<Move>) {
    for (from, piece) in game_state.pieces() {
        if piece.color == side {
            generate_piece_moves(game_state, from, piece, out);
        }
    }
}

#[inline]
pub fn generate_piece_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

/// Emits a plain move or capture unless `to` holds a friendly piece.
#[inline]
pub fn push_step_move(game_state: &GameState, from: Square, to: Square, piece: Piece, out: &mut Vec<Move>) {
    match game_state.piece_at(to) {
        Some(occupant) if occupant.color == piece.color => {}
        occupant => out.push(Move::new(from, to, piece, occupant, 0)),
    }
}

/// Casts each ray until it leaves the board, stopping on (and including) the
/// first enemy piece and before the first friendly piece.
pub fn push_sliding_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(Move::new(from, to, piece, None, 0)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(Move::new(from, to, piece, Some(occupant), 0));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
