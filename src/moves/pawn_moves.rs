use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Square};

/// Column deltas for diagonal captures, left then right.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

#[inline]
pub fn pawn_push_target(color: Color, square: Square) -> Option<Square> {
    square.offset(pawn_direction(color), 0)
}

#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(color);
    PAWN_CAPTURE_COLS
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}
