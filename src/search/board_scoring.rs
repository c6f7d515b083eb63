//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer`. Scores are oriented so
//! that positive favors White and negative favors Black.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Worst case for the side being scored; also the king's material value.
pub const CHECKMATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

pub trait BoardScorer {
    /// White-positive score of the position.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => CHECKMATE_SCORE,
        }
    }
}

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, game_state: &GameState) -> i32 {
        material_score(game_state.board())
    }
}

/// Signed material sum over the whole board, White positive.
pub fn material_score(board: &Board) -> i32 {
    board
        .iter()
        .flatten()
        .flatten()
        .map(|piece| piece.color.sign() * MaterialScorer::piece_value(piece.kind))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&GameState::new_game()), 0);
    }

    #[test]
    fn material_scorer_is_white_positive() {
        // White: queen. Black: rook + knight.
        let game = GameState::from_fen("4k3/8/8/8/8/8/6rn/4K1Q1 b - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&game), 9 - 5 - 3);
    }

    #[test]
    fn kings_cancel_out() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(material_score(game.board()), 0);
    }
}
