//! Promotion choice injection.
//!
//! A session asks its provider exactly once per promoting move. Providers are
//! synchronous; anything interactive has to be wrapped outside the core.

use crate::game_state::chess_types::{Color, PieceKind};

pub trait PromotionProvider {
    /// Expected to return Knight, Bishop, Rook or Queen. Other kinds make the
    /// session reject the move.
    fn choose_promotion(&mut self, color: Color) -> PieceKind;
}

/// Always answers with the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPromotion(pub PieceKind);

impl Default for FixedPromotion {
    fn default() -> Self {
        Self(PieceKind::Queen)
    }
}

impl PromotionProvider for FixedPromotion {
    #[inline]
    fn choose_promotion(&mut self, _color: Color) -> PieceKind {
        self.0
    }
}

/// Adapts a closure into a provider.
pub struct PromotionFn<F>(pub F);

impl<F: FnMut(Color) -> PieceKind> PromotionProvider for PromotionFn<F> {
    #[inline]
    fn choose_promotion(&mut self, color: Color) -> PieceKind {
        (self.0)(color)
    }
}
