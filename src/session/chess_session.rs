//! Front-end facing game session.
//!
//! `ChessSession` owns the position, the promotion provider and the legal move
//! list for the side to move. Moves are only accepted when they belong to that
//! list, and the list is recomputed after every apply and undo.

use log::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Board, Color, PromotionPiece};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::session::promotion::PromotionProvider;
use crate::utils::render_game_state::render_snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// In check with at least one legal move.
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

pub struct ChessSession {
    game_state: GameState,
    promotion_provider: Box<dyn PromotionProvider>,
    legal_moves: Vec<Move>,
}

impl ChessSession {
    /// Standard start position with the given provider.
    pub fn new(promotion_provider: Box<dyn PromotionProvider>) -> ChessResult<Self> {
        Self::from_game_state(GameState::new_game(), promotion_provider)
    }

    pub fn from_fen(fen: &str, promotion_provider: Box<dyn PromotionProvider>) -> ChessResult<Self> {
        Self::from_game_state(GameState::from_fen(fen)?, promotion_provider)
    }

    pub fn from_game_state(
        game_state: GameState,
        promotion_provider: Box<dyn PromotionProvider>,
    ) -> ChessResult<Self> {
        let mut session = Self {
            game_state,
            promotion_provider,
            legal_moves: Vec::new(),
        };
        session.refresh_legal_moves()?;
        Ok(session)
    }

    fn refresh_legal_moves(&mut self) -> ChessResult<()> {
        self.legal_moves = generate_legal_moves(&mut self.game_state)?;
        Ok(())
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Applies `mv` if it is in the current legal move list.
    ///
    /// Promoting moves ask the provider once. A rejected move or promotion
    /// choice leaves the session untouched.
    pub fn apply_move(&mut self, mv: &Move) -> ChessResult<()> {
        let legal = self
            .legal_moves
            .iter()
            .find(|candidate| *candidate == mv)
            .copied()
            .ok_or_else(|| ChessError::InvalidMove(mv.notation()))?;

        let promotion = if legal.is_promotion() {
            let color = legal.moved_piece.color;
            let kind = self.promotion_provider.choose_promotion(color);
            let piece = PromotionPiece::try_from(kind).map_err(|kind| {
                warn!("rejected promotion to {kind:?} for {color}");
                ChessError::InvalidPromotionChoice(kind)
            })?;
            Some(piece)
        } else {
            None
        };

        self.game_state.make_move(&legal, promotion);
        debug!("applied {} -> {}", legal.notation(), self.game_state.get_fen());
        self.refresh_legal_moves()
    }

    /// Takes back the most recent move and returns it.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let undone = self.game_state.undo_move()?;
        self.refresh_legal_moves()?;
        Ok(undone)
    }

    /// Lets `engine` pick a move and applies it. `None` when the game is over.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<Option<Move>> {
        if self.status().is_terminal() {
            return Ok(None);
        }
        let output = engine.choose_move(&mut self.game_state)?;
        let mv = output.best_move.ok_or(ChessError::NoLegalMoves)?;
        self.apply_move(&mv)?;
        Ok(Some(mv))
    }

    pub fn status(&self) -> GameStatus {
        if self.game_state.is_checkmate() {
            GameStatus::Checkmate
        } else if self.game_state.is_stalemate() {
            GameStatus::Stalemate
        } else if self.is_in_check() {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.game_state.board()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move()
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        in_check(&self.game_state)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.game_state.is_checkmate()
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.game_state.is_stalemate()
    }

    #[inline]
    pub fn notation(&self, mv: &Move) -> String {
        mv.notation()
    }

    /// Applied moves in order.
    pub fn move_log(&self) -> Vec<String> {
        self.game_state
            .history()
            .iter()
            .map(|undo| undo.mv.notation())
            .collect()
    }

    pub fn snapshot(&self) -> String {
        render_snapshot(&self.game_state)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};
    use crate::session::promotion::{FixedPromotion, PromotionFn};
    use crate::utils::algebraic::algebraic_to_square;

    fn queen_session(fen: &str) -> ChessSession {
        ChessSession::from_fen(fen, Box::new(FixedPromotion::default())).expect("FEN should parse")
    }

    fn new_session() -> ChessSession {
        ChessSession::new(Box::new(FixedPromotion::default())).expect("start position should generate")
    }

    fn find(session: &ChessSession, from: &str, to: &str) -> Move {
        let from = algebraic_to_square(from).expect("valid square");
        let to = algebraic_to_square(to).expect("valid square");
        session
            .legal_moves()
            .iter()
            .find(|mv| mv.from == from && mv.to == to)
            .copied()
            .expect("move should be legal")
    }

    fn play(session: &mut ChessSession, from: &str, to: &str) {
        let mv = find(session, from, to);
        session.apply_move(&mv).expect("legal move should apply");
    }

    #[test]
    fn new_session_has_twenty_moves() {
        let session = new_session();
        assert_eq!(session.legal_moves().len(), 20);
        assert_eq!(session.status(), GameStatus::Ongoing);
        assert_eq!(session.side_to_move(), Color::White);
    }

    #[test]
    fn move_outside_legal_list_is_rejected() {
        let mut session = new_session();
        let before = session.game_state().clone();
        let leap = Move::new(
            Square::new(6, 4),
            Square::new(3, 4),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
            0,
        );
        assert!(matches!(session.apply_move(&leap), Err(ChessError::InvalidMove(_))));
        assert_eq!(session.game_state(), &before);
        assert_eq!(session.legal_moves().len(), 20);
    }

    #[test]
    fn undo_without_history_is_rejected() {
        let mut session = new_session();
        let before = session.snapshot();
        assert_eq!(session.undo_move(), Err(ChessError::EmptyHistory));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn apply_then_undo_restores_position_and_moves() {
        let mut session = new_session();
        let before = session.game_state().clone();
        let before_moves = session.legal_moves().to_vec();

        play(&mut session, "e2", "e4");
        assert_eq!(session.side_to_move(), Color::Black);

        let undone = session.undo_move().expect("undo should succeed");
        assert_eq!(undone.notation(), "e4");
        assert_eq!(session.game_state(), &before);
        assert_eq!(session.legal_moves(), before_moves.as_slice());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut session = new_session();
        play(&mut session, "f2", "f3");
        play(&mut session, "e7", "e5");
        play(&mut session, "g2", "g4");
        play(&mut session, "d8", "h4");

        assert_eq!(session.status(), GameStatus::Checkmate);
        assert!(session.is_checkmate());
        assert!(session.legal_moves().is_empty());
        assert_eq!(session.move_log(), ["f3", "e5", "g4", "Qh4"]);
    }

    #[test]
    fn stalemate_is_reported() {
        let session = queen_session("k7/2Q5/2K5/8/8/8/8/8 b - - 0 1");
        assert_eq!(session.status(), GameStatus::Stalemate);
        assert!(!session.is_in_check());
    }

    #[test]
    fn promotion_asks_provider_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let provider = PromotionFn(move |_color| {
            counter.set(counter.get() + 1);
            PieceKind::Queen
        });
        let mut session =
            ChessSession::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", Box::new(provider))
                .expect("FEN should parse");

        play(&mut session, "a7", "a8");

        assert_eq!(calls.get(), 1);
        assert_eq!(
            session.game_state().piece_at(Square::new(0, 0)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(session.game_state().piece_at(Square::new(1, 0)), None);
        assert_eq!(session.status(), GameStatus::Check);
    }

    #[test]
    fn non_promotable_choice_is_rejected() {
        let mut session = ChessSession::from_fen(
            "4k3/P7/8/8/8/8/8/4K3 w - - 0 1",
            Box::new(FixedPromotion(PieceKind::King)),
        )
        .expect("FEN should parse");
        let before = session.game_state().clone();
        let push = find(&session, "a7", "a8");

        assert_eq!(
            session.apply_move(&push),
            Err(ChessError::InvalidPromotionChoice(PieceKind::King))
        );
        assert_eq!(session.game_state(), &before);
    }

    #[test]
    fn castling_through_attacked_square_is_not_offered() {
        // Black rook on f8 covers f1.
        let session = queen_session("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let king_from = Square::new(7, 4);
        let castles: Vec<_> = session
            .legal_moves()
            .iter()
            .filter(|mv| mv.from == king_from && mv.is_castle())
            .collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].to, Square::new(7, 2));
    }

    #[test]
    fn en_passant_through_session() {
        let mut session = queen_session("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        play(&mut session, "e5", "d6");
        assert_eq!(session.game_state().piece_at(Square::new(3, 3)), None);
        assert_eq!(
            session.game_state().piece_at(Square::new(2, 3)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }
}
