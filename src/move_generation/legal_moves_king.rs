//! Pseudo-legal king steps. Castling is generated separately so that attack
//! detection, which runs this generator, never recurses into castling.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        push_step_move(game_state, from, to, king, out);
    }
}
