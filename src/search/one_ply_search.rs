//! Greedy two-half-move search.
//!
//! For every candidate (in shuffled order) the opponent's best material reply
//! is found, and the candidate that minimizes it wins. The search does not
//! recurse any deeper and leaves the position exactly as it found it.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, CHECKMATE_SCORE, STALEMATE_SCORE};

/// How positions reached after the opponent's reply are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalScoring {
    /// Material only, even when the reply mates or stalemates.
    #[default]
    MaterialOnly,
    /// A mating reply scores `CHECKMATE_SCORE` for the opponent and a
    /// stalemating reply scores `STALEMATE_SCORE`.
    ExtremeScores,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    pub terminal_scoring: TerminalScoring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when no candidate beat the sentinel or there were no candidates.
    pub best_move: Option<Move>,
    /// The opponent's best reply score against `best_move`, from the
    /// opponent's point of view.
    pub opponent_best_reply: i32,
    pub candidates_examined: usize,
}

pub fn find_greedy_move<G, S, R>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    legal_moves: &[Move],
    config: &SearchConfig,
    rng: &mut R,
) -> MoveGenResult<SearchOutcome>
where
    G: MoveGenerator,
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let mut outcome = SearchOutcome {
        best_move: None,
        opponent_best_reply: CHECKMATE_SCORE,
        candidates_examined: 0,
    };
    if legal_moves.is_empty() || game_state.is_checkmate() || game_state.is_stalemate() {
        return Ok(outcome);
    }

    let turn_multiplier = game_state.side_to_move().sign();

    let mut candidates = legal_moves.to_vec();
    candidates.shuffle(rng);

    for mv in &candidates {
        game_state.make_move(mv, None);
        let reply = opponent_best_reply(game_state, generator, scorer, config, turn_multiplier);
        game_state.undo_move()?;
        let opponent_max = reply?;

        outcome.candidates_examined += 1;
        if opponent_max < outcome.opponent_best_reply {
            outcome.opponent_best_reply = opponent_max;
            outcome.best_move = Some(*mv);
        }
    }

    debug!(
        "greedy search examined {} candidates, best {:?} (opponent reply {})",
        outcome.candidates_examined,
        outcome.best_move.map(|mv| mv.notation()),
        outcome.opponent_best_reply
    );
    Ok(outcome)
}

/// Highest score the side to move can reach with one reply; `-CHECKMATE_SCORE`
/// when it has no replies at all.
fn opponent_best_reply<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
    turn_multiplier: i32,
) -> MoveGenResult<i32> {
    let replies = generator.generate_legal_moves(game_state)?;
    let mut opponent_max = -CHECKMATE_SCORE;

    for reply in &replies {
        game_state.make_move(reply, None);
        let score = score_after_reply(game_state, generator, scorer, config, turn_multiplier);
        game_state.undo_move()?;
        opponent_max = opponent_max.max(score?);
    }

    Ok(opponent_max)
}

fn score_after_reply<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
    turn_multiplier: i32,
) -> MoveGenResult<i32> {
    if config.terminal_scoring == TerminalScoring::ExtremeScores {
        generator.generate_legal_moves(game_state)?;
        if game_state.is_checkmate() {
            return Ok(CHECKMATE_SCORE);
        }
        if game_state.is_stalemate() {
            return Ok(STALEMATE_SCORE);
        }
    }

    Ok(scorer.score(game_state) * -turn_multiplier)
}
