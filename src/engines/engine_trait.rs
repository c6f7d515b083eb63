//! Engine abstraction layer used by the session and the match harness.
//!
//! Defines the common output payload so different move-selection strategies
//! can be swapped at runtime behind a single trait object.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move.
    ///
    /// The position is borrowed mutably for make/undo simulation and is
    /// returned unchanged.
    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput>;
}
