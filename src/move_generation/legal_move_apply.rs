//! Reversible move application.
//!
//! `make_move` mutates the position in place and pushes an `UndoState`;
//! `undo_move` pops it and restores the exact prior position. Every caller that
//! makes a move must undo it exactly once before returning.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_row, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

impl GameState {
    /// Applies a generator-produced move.
    ///
    /// `promotion` is only read for promoting moves; `None` promotes to a queen.
    pub fn make_move(&mut self, mv: &Move, promotion: Option<PromotionPiece>) {
        let mover = mv.moved_piece;
        let prev_castling_rights = self.castling_rights;
        let prev_en_passant_square = self.en_passant_square;

        let captured_square = if mv.is_en_passant() {
            Square::new(mv.from.row, mv.to.col)
        } else {
            mv.to
        };
        let captured_piece = self.piece_at(captured_square);

        let mut recorded = *mv;
        let placed = if mv.is_promotion() {
            let choice = promotion.unwrap_or_default();
            recorded = recorded.with_promotion(choice);
            Piece::new(mover.color, choice.kind())
        } else {
            mover
        };

        self.set_piece(mv.from, None);
        self.set_piece(captured_square, None);
        self.set_piece(mv.to, Some(placed));

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        if mover.kind == PieceKind::King {
            self.king_squares[mover.color.index()] = mv.to;
        }

        self.castling_rights = castling_rights_after(self.castling_rights, mv);

        self.en_passant_square = if mv.is_double_pawn_push() {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

        self.undo_stack.push(UndoState {
            mv: recorded,
            captured_piece,
            prev_castling_rights,
            prev_en_passant_square,
            prev_checkmate: self.checkmate,
            prev_stalemate: self.stalemate,
        });

        self.checkmate = false;
        self.stalemate = false;
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Reverses the most recent `make_move` and returns the move it undid.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let undo = self.undo_stack.pop().ok_or(ChessError::EmptyHistory)?;
        let mv = undo.mv;

        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(mv.moved_piece));
        if mv.is_en_passant() {
            self.set_piece(Square::new(mv.from.row, mv.to.col), undo.captured_piece);
        } else {
            self.set_piece(mv.to, undo.captured_piece);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        if mv.moved_piece.kind == PieceKind::King {
            self.king_squares[mv.moved_piece.color.index()] = mv.from;
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.checkmate = undo.prev_checkmate;
        self.stalemate = undo.prev_stalemate;
        self.side_to_move = self.side_to_move.opposite();

        Ok(mv)
    }
}

/// Rook origin and destination for a castling king move.
pub(crate) fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.to.row;
    if mv.to.col > mv.from.col {
        (Square::new(row, KINGSIDE_ROOK_COL), Square::new(row, mv.to.col - 1))
    } else {
        (Square::new(row, QUEENSIDE_ROOK_COL), Square::new(row, mv.to.col + 1))
    }
}

/// Rights after `mv`, depending only on the mover and its source square.
///
/// A king move clears both of its color's rights; a rook leaving its home
/// corner clears that corner's right. Captures of a rook clear nothing.
pub fn castling_rights_after(rights: CastlingRights, mv: &Move) -> CastlingRights {
    let mut next = rights;
    let mover = mv.moved_piece;
    match mover.kind {
        PieceKind::King => next.clear_color(mover.color),
        PieceKind::Rook if mv.from.row == back_row(mover.color) => {
            match (mover.color, mv.from.col) {
                (Color::White, QUEENSIDE_ROOK_COL) => next.white_queenside = false,
                (Color::White, KINGSIDE_ROOK_COL) => next.white_kingside = false,
                (Color::Black, QUEENSIDE_ROOK_COL) => next.black_queenside = false,
                (Color::Black, KINGSIDE_ROOK_COL) => next.black_kingside = false,
                _ => {}
            }
        }
        _ => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    fn find_move(game: &mut GameState, from: Square, to: Square) -> Move {
        generate_legal_moves(game)
            .expect("move generation should succeed")
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .expect("move should be legal")
    }

    #[test]
    fn undo_on_fresh_position_is_rejected() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(game.undo_move(), Err(ChessError::EmptyHistory));
        assert_eq!(game, before);
    }

    #[test]
    fn double_push_sets_and_next_move_clears_en_passant_target() {
        let mut game = GameState::new_game();
        let e4 = find_move(&mut game, Square::new(6, 4), Square::new(4, 4));
        game.make_move(&e4, None);
        assert_eq!(game.en_passant_square(), Some(Square::new(5, 4)));
        assert_eq!(game.side_to_move(), Color::Black);

        let nf6 = find_move(&mut game, Square::new(0, 6), Square::new(2, 5));
        game.make_move(&nf6, None);
        assert_eq!(game.en_passant_square(), None);
    }

    #[test]
    fn en_passant_removes_pawn_beside_destination() {
        let mut game =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let before = game.clone();
        let ep = find_move(&mut game, Square::new(3, 4), Square::new(2, 3));
        assert!(ep.is_en_passant());

        game.make_move(&ep, None);
        assert_eq!(game.piece_at(Square::new(3, 3)), None, "captured pawn removed from d5");
        assert_eq!(
            game.piece_at(Square::new(2, 3)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            game.history().last().map(|undo| undo.captured_piece),
            Some(Some(Piece::new(Color::Black, PieceKind::Pawn)))
        );

        game.undo_move().expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn castling_moves_rook_and_undo_restores_it() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let before = game.clone();
        let castle = find_move(&mut game, Square::new(7, 4), Square::new(7, 2));
        assert!(castle.is_castle());

        game.make_move(&castle, None);
        assert_eq!(
            game.piece_at(Square::new(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(game.piece_at(Square::new(7, 0)), None);
        assert_eq!(game.king_square(Color::White), Square::new(7, 2));
        assert!(!game.castling_rights().white_kingside);
        assert!(!game.castling_rights().white_queenside);
        assert!(game.castling_rights().black_kingside);

        game.undo_move().expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn rook_move_clears_only_its_own_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let rook_lift = find_move(&mut game, Square::new(7, 7), Square::new(6, 7));
        game.make_move(&rook_lift, None);
        let rights = game.castling_rights();
        assert!(!rights.white_kingside);
        assert!(rights.white_queenside);
    }

    #[test]
    fn capturing_a_rook_does_not_clear_its_right() {
        // White rook a1 takes black rook a8.
        let mut game =
            GameState::from_fen("r3k3/8/8/8/8/8/8/R3K3 w Qq - 0 1").expect("FEN should parse");
        let capture = find_move(&mut game, Square::new(7, 0), Square::new(0, 0));
        game.make_move(&capture, None);
        let rights = game.castling_rights();
        assert!(!rights.white_queenside, "moving rook clears its own right");
        assert!(rights.black_queenside, "captured rook's right is untouched");
    }

    #[test]
    fn promotion_places_chosen_piece_and_undo_restores_pawn() {
        let mut game =
            GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();
        let push = find_move(&mut game, Square::new(1, 0), Square::new(0, 0));
        assert!(push.is_promotion());

        game.make_move(&push, Some(PromotionPiece::Knight));
        assert_eq!(
            game.piece_at(Square::new(0, 0)),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(game.piece_at(Square::new(1, 0)), None);
        assert_eq!(
            game.history().last().and_then(|undo| undo.mv.promotion()),
            Some(PromotionPiece::Knight)
        );

        game.undo_move().expect("undo should succeed");
        assert_eq!(game, before);
    }
}
