//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves. Used for diagnostics, self-play
//! testing, and as the fallback when the greedy search finds nothing better
//! than its sentinel.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

pub struct RandomEngine<R = StdRng> {
    move_generator: LegalMoveGenerator,
    rng: R,
}

impl RandomEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng,
        }
    }
}

/// `None` for an empty list.
#[inline]
pub fn choose_random_move<R: Rng + ?Sized>(legal_moves: &[Move], rng: &mut R) -> Option<Move> {
    legal_moves.choose(rng).copied()
}

impl<R: Rng> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "PlyChess Random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let legal_moves = self.move_generator.generate_legal_moves(game_state)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = choose_random_move(&legal_moves, &mut self.rng);
        Ok(out)
    }
}
