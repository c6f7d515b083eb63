//! Half-move descriptions.
//!
//! A `Move` records source, destination, the piece moved and captured, and the
//! special-move flags. Identity is `(from, to, flags)`; the promotion choice is
//! filled in when the move is applied and does not take part in equality.

use crate::game_state::chess_types::{Piece, PieceKind, PromotionPiece, Square};
use crate::utils::algebraic::square_to_algebraic;

pub const FLAG_EN_PASSANT: u8 = 1 << 0;
pub const FLAG_CASTLING: u8 = 1 << 1;
pub const FLAG_PROMOTION: u8 = 1 << 2;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// For en passant this is the pawn beside the destination, not the (empty)
    /// destination square.
    pub captured_piece: Option<Piece>,
    flags: u8,
    promotion: Option<PromotionPiece>,
}

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        moved_piece: Piece,
        captured_piece: Option<Piece>,
        flags: u8,
    ) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            flags,
            promotion: None,
        }
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.flags & FLAG_CASTLING != 0
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Set only on moves taken from the history stack.
    #[inline]
    pub const fn promotion(&self) -> Option<PromotionPiece> {
        self.promotion
    }

    #[inline]
    pub fn with_promotion(mut self, promotion: PromotionPiece) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved_piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }

    /// Pawn moves render as the destination (`e4`); others prefix the piece
    /// letter (`Nf3`).
    pub fn notation(&self) -> String {
        let destination = square_to_algebraic(self.to);
        match self.moved_piece.kind {
            PieceKind::Pawn => destination,
            kind => format!("{}{}", kind.code(), destination),
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.flags == other.flags
    }
}

impl Eq for Move {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn pawn_push() -> Move {
        Move::new(
            Square::new(6, 4),
            Square::new(4, 4),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
            0,
        )
    }

    #[test]
    fn pawn_notation_is_destination_only() {
        assert_eq!(pawn_push().notation(), "e4");
        assert!(pawn_push().is_double_pawn_push());
    }

    #[test]
    fn piece_notation_has_letter_prefix() {
        let knight = Move::new(
            Square::new(7, 6),
            Square::new(5, 5),
            Piece::new(Color::White, PieceKind::Knight),
            None,
            0,
        );
        assert_eq!(knight.notation(), "Nf3");
    }

    #[test]
    fn promotion_choice_does_not_affect_identity() {
        let push = Move::new(
            Square::new(1, 0),
            Square::new(0, 0),
            Piece::new(Color::White, PieceKind::Pawn),
            None,
            FLAG_PROMOTION,
        );
        assert_eq!(push, push.with_promotion(PromotionPiece::Knight));
        assert_ne!(push, Move::new(push.from, push.to, push.moved_piece, None, 0));
    }
}
