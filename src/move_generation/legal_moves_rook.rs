//! Pseudo-legal rook moves: four orthogonal rays.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, rook: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(game_state, from, rook, &ROOK_DIRECTIONS, out);
}
