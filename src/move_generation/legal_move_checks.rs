//! Attack and check detection.
//!
//! The attacking color is always passed explicitly; nothing here reads or
//! flips the side to move.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_pseudo_legal_moves;

/// True iff some pseudo-legal move of `attacker` lands on `square`.
///
/// Castling is never part of that move set. Pawn pushes count; pawn diagonals
/// only count onto an enemy piece or the en-passant target.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Color) -> bool {
    let mut moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, attacker, &mut moves);
    moves.iter().any(|mv| mv.to == square)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// Whether the side to move is in check.
#[inline]
pub fn in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move())
}
