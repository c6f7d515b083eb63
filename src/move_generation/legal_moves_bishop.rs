use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, bishop: Piece, out: &mut Vec<Move>) {
    push_sliding_moves(game_state, from, bishop, &BISHOP_DIRECTIONS, out);
}
