//! Pseudo-legal pawn moves.
//!
//! Pushes, the initial double push, diagonal captures and en-passant captures.
//! Moves onto the far row carry `FLAG_PROMOTION`; the promoted kind is chosen
//! when the move is applied.

use crate::game_state::chess_rules::{pawn_start_row, promotion_row};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, FLAG_EN_PASSANT, FLAG_PROMOTION};
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_push_target};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let side = pawn.color;
    let promotion_flag = |to: Square| {
        if to.row == promotion_row(side) {
            FLAG_PROMOTION
        } else {
            0
        }
    };

    if let Some(one_step) = pawn_push_target(side, from) {
        if game_state.piece_at(one_step).is_none() {
            out.push(Move::new(from, one_step, pawn, None, promotion_flag(one_step)));

            if from.row == pawn_start_row(side) {
                if let Some(two_step) = pawn_push_target(side, one_step) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(Move::new(from, two_step, pawn, None, 0));
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        match game_state.piece_at(to) {
            Some(target) if target.color != side => {
                out.push(Move::new(from, to, pawn, Some(target), promotion_flag(to)));
            }
            None if game_state.en_passant_square() == Some(to) => {
                let victim = Piece::new(side.opposite(), PieceKind::Pawn);
                out.push(Move::new(from, to, pawn, Some(victim), FLAG_EN_PASSANT));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str, from: Square) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let pawn = game.piece_at(from).expect("pawn should be on square");
        let mut moves = Vec::new();
        generate_pawn_moves(&game, from, pawn, &mut moves);
        moves
    }

    #[test]
    fn start_row_pawn_has_single_and_double_push() {
        let moves = pawn_moves(crate::game_state::chess_rules::STARTING_POSITION_FEN, Square::new(6, 4));
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // White pawn e2, black knight e3.
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", Square::new(6, 4));
        assert!(moves.is_empty());
    }

    #[test]
    fn en_passant_target_produces_flagged_capture() {
        // Black just played d7-d5; white pawn on e5.
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", Square::new(3, 4));
        let ep = moves
            .iter()
            .find(|mv| mv.is_en_passant())
            .expect("en passant capture should be generated");
        assert_eq!(ep.to, Square::new(2, 3));
        assert_eq!(ep.captured_piece, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    }

    #[test]
    fn far_row_moves_are_flagged_once_each() {
        // White pawn b7 with a black rook on a8 to capture.
        let moves = pawn_moves("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1", Square::new(1, 1));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
    }
}
