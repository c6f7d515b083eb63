//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from the standard
//! start position. Engines are seeded from the match configuration, so a
//! series is reproducible.

use std::time::Instant;

use log::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::one_ply_search::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    /// PGN result tag.
    pub const fn result_tag(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Random,
    Greedy,
}

impl EngineKind {
    pub fn build(self, seed: u64, search: SearchConfig) -> Box<dyn Engine> {
        match self {
            EngineKind::Random => Box::new(RandomEngine::seeded(seed)),
            EngineKind::Greedy => Box::new(GreedyEngine::seeded(seed, search)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<Move>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn move_notations(&self) -> Vec<String> {
        self.played_moves.iter().map(Move::notation).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl MatchSeriesStats {
    fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::WhiteWinCheckmate => self.white_wins += 1,
            MatchOutcome::BlackWinCheckmate => self.black_wins += 1,
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => self.draws += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} draws={}",
            self.games, self.white_wins, self.black_wins, self.draws
        )
    }
}

/// Builds both engines from `config.seed` and plays one game.
pub fn play_match(white: EngineKind, black: EngineKind, config: &MatchConfig) -> ChessResult<MatchResult> {
    let mut engine_white = white.build(config.seed, config.search);
    let mut engine_black = black.build(config.seed.wrapping_add(1), config.search);
    play_engine_match(engine_white.as_mut(), engine_black.as_mut(), config)
}

/// Plays `games` matches; game `i` is seeded with `config.seed + 2 * i`.
pub fn play_match_series(
    white: EngineKind,
    black: EngineKind,
    games: u16,
    config: &MatchConfig,
) -> ChessResult<MatchSeriesStats> {
    let mut stats = MatchSeriesStats {
        games,
        ..MatchSeriesStats::default()
    };

    for i in 0..games {
        let game_config = MatchConfig {
            seed: config.seed.wrapping_add(u64::from(i) * 2),
            ..*config
        };
        let result = play_match(white, black, &game_config)?;
        info!(
            "game {}/{} seed={} outcome={:?} plies={}",
            i + 1,
            games,
            game_config.seed,
            result.outcome,
            result.played_moves.len()
        );
        stats.record(result.outcome);
    }

    Ok(stats)
}

/// Plays one game from the start position. `engine_white` moves first.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = GameState::new_game();
    let mut played_moves = Vec::<Move>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..=config.max_plies {
        let legal_moves = generate_legal_moves(&mut state)?;
        if legal_moves.is_empty() {
            outcome = terminal_outcome(&state);
            break;
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&mut state)?,
            Color::Black => engine_black.choose_move(&mut state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(ChessError::NoLegalMoves)?;
        let chosen = legal_moves
            .iter()
            .find(|mv| **mv == chosen)
            .copied()
            .ok_or_else(|| ChessError::InvalidMove(chosen.notation()))?;

        debug!("{mover} plays {}", chosen.notation());
        state.make_move(&chosen, None);
        played_moves.push(chosen);
    }

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Outcome for a side to move with no legal moves.
fn terminal_outcome(state: &GameState) -> MatchOutcome {
    if state.is_checkmate() {
        match state.side_to_move() {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }
    } else {
        MatchOutcome::DrawStalemate
    }
}
