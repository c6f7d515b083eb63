//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves plus castling, simulates each candidate with
//! make/undo, drops those that leave the mover's king attacked, and refreshes
//! the cached checkmate/stalemate flags.

use log::trace;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::generate_pseudo_legal_moves;
use crate::move_generation::legal_moves_castling::generate_castling_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>> {
        generate_legal_moves(game_state)
    }
}

pub fn generate_legal_moves(game_state: &mut GameState) -> MoveGenResult<Vec<Move>> {
    // Restored wholesale at the end, independent of per-move undo.
    let saved_en_passant = game_state.en_passant_square;
    let saved_castling_rights = game_state.castling_rights;

    let side = game_state.side_to_move;
    let mut candidates = Vec::<Move>::with_capacity(64);
    generate_pseudo_legal_moves(game_state, side, &mut candidates);
    generate_castling_moves(game_state, side, &mut candidates);

    let mut legal = Vec::<Move>::with_capacity(candidates.len());
    for mv in candidates {
        game_state.make_move(&mv, None);
        let exposes_king = is_king_in_check(game_state, side);
        game_state.undo_move()?;

        if !exposes_king {
            legal.push(mv);
        }
    }

    let in_check = is_king_in_check(game_state, side);
    game_state.checkmate = legal.is_empty() && in_check;
    game_state.stalemate = legal.is_empty() && !in_check;
    if legal.is_empty() {
        trace!(
            "{side} has no legal moves ({})",
            if in_check { "checkmate" } else { "stalemate" }
        );
    }

    game_state.en_passant_square = saved_en_passant;
    game_state.castling_rights = saved_castling_rights;

    Ok(legal)
}
