//! Greedy one-ply engine.
//!
//! Runs the two-half-move material search and falls back to a uniformly random
//! legal move when no candidate beats the search sentinel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::engines::engine_random::choose_random_move;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::one_ply_search::{find_greedy_move, SearchConfig};

pub struct GreedyEngine<S = MaterialScorer, R = StdRng> {
    move_generator: LegalMoveGenerator,
    scorer: S,
    config: SearchConfig,
    rng: R,
}

impl GreedyEngine<MaterialScorer, StdRng> {
    pub fn seeded(seed: u64, config: SearchConfig) -> Self {
        Self::new(MaterialScorer, config, StdRng::seed_from_u64(seed))
    }
}

impl<S: BoardScorer, R: Rng> GreedyEngine<S, R> {
    pub fn new(scorer: S, config: SearchConfig, rng: R) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer,
            config,
            rng,
        }
    }
}

impl<S: BoardScorer, R: Rng> Engine for GreedyEngine<S, R> {
    fn name(&self) -> &str {
        "PlyChess Greedy"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let outcome = find_greedy_move(
            game_state,
            &self.move_generator,
            &self.scorer,
            &legal_moves,
            &self.config,
            &mut self.rng,
        )?;

        out.best_move = match outcome.best_move {
            Some(mv) => {
                out.info_lines.push(format!(
                    "info string greedy_engine opponent_best_reply {}",
                    outcome.opponent_best_reply
                ));
                Some(mv)
            }
            None => {
                out.info_lines
                    .push("info string greedy_engine fallback random".to_owned());
                choose_random_move(&legal_moves, &mut self.rng)
            }
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Square};

    #[test]
    fn captures_free_material() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/r7/R3K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();
        let mut engine = GreedyEngine::seeded(5, SearchConfig::default());

        let out = engine.choose_move(&mut game).expect("engine should succeed");
        let best = out.best_move.expect("a move should be chosen");

        assert_eq!(best.to, Square::new(6, 0));
        assert_eq!(best.captured_piece.map(|piece| piece.kind), Some(PieceKind::Rook));
        assert_eq!(game, before);
    }

    #[test]
    fn checkmated_side_gets_no_move() {
        let mut game = GameState::from_fen("7k/6Q1/5K2/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = GreedyEngine::seeded(0, SearchConfig::default())
            .choose_move(&mut game)
            .expect("engine should succeed");
        assert_eq!(out.best_move, None);
        assert!(game.is_checkmate());
    }

    #[test]
    fn seeded_engines_agree() {
        let mut game = GameState::new_game();
        let first = GreedyEngine::seeded(3, SearchConfig::default())
            .choose_move(&mut game)
            .expect("engine should succeed");
        let second = GreedyEngine::seeded(3, SearchConfig::default())
            .choose_move(&mut game)
            .expect("engine should succeed");
        assert_eq!(first.best_move, second.best_move);
    }
}
