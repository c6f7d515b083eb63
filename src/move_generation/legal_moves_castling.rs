//! Castling generation.
//!
//! Depends on attack detection, which in turn runs only the non-castling
//! generator, so the two never recurse into each other.

use crate::game_state::chess_rules::{king_home, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::{Move, FLAG_CASTLING};

pub fn generate_castling_moves(game_state: &GameState, side: Color, out: &mut Vec<Move>) {
    let rights = game_state.castling_rights();
    if !rights.kingside(side) && !rights.queenside(side) {
        return;
    }

    let king_from = game_state.king_square(side);
    if king_from != king_home(side) {
        return;
    }

    let enemy = side.opposite();
    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let row = king_from.row;
    let king = Piece::new(side, PieceKind::King);
    let empty = |cols: &[u8]| {
        cols.iter()
            .all(|col| game_state.piece_at(Square::new(row, *col)).is_none())
    };
    let safe = |cols: &[u8]| {
        cols.iter()
            .all(|col| !is_square_attacked(game_state, Square::new(row, *col), enemy))
    };

    if rights.kingside(side)
        && rook_at_home(game_state, side, Square::new(row, KINGSIDE_ROOK_COL))
        && empty(&[5, 6])
        && safe(&[5, 6])
    {
        out.push(Move::new(king_from, Square::new(row, 6), king, None, FLAG_CASTLING));
    }

    // b-file must be empty but may be attacked; only the king's path matters.
    if rights.queenside(side)
        && rook_at_home(game_state, side, Square::new(row, QUEENSIDE_ROOK_COL))
        && empty(&[1, 2, 3])
        && safe(&[3, 2])
    {
        out.push(Move::new(king_from, Square::new(row, 2), king, None, FLAG_CASTLING));
    }
}

fn rook_at_home(game_state: &GameState, side: Color, corner: Square) -> bool {
    game_state.piece_at(corner) == Some(Piece::new(side, PieceKind::Rook))
}
