use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = ChessResult<T>;

/// Produces the legal moves for the side to move.
///
/// Implementations may make and undo moves on `game_state` while filtering but
/// must leave it as they found it, apart from the cached terminal flags.
pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> MoveGenResult<Vec<Move>>;
}
