//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --games 10 --white greedy --black random`

use clap::{Parser, ValueEnum};
use log::info;

use ply_chess::chess_errors::ChessResult;
use ply_chess::game_state::game_state::GameState;
use ply_chess::search::one_ply_search::{SearchConfig, TerminalScoring};
use ply_chess::utils::engine_match_harness::{
    play_match, play_match_series, EngineKind, MatchConfig,
};
use ply_chess::utils::pgn::write_pgn;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum EngineArg {
    Random,
    Greedy,
}

impl From<EngineArg> for EngineKind {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Random => EngineKind::Random,
            EngineArg::Greedy => EngineKind::Greedy,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a seeded series of engine-vs-engine games")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u16,

    /// Base seed; each game derives its own seeds from it
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Ply cap per game before it is scored as a draw
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Score mating and stalemating replies as extremes instead of by material
    #[arg(long)]
    extreme_terminal_scores: bool,

    #[arg(long, value_enum, default_value_t = EngineArg::Greedy)]
    white: EngineArg,

    #[arg(long, value_enum, default_value_t = EngineArg::Random)]
    black: EngineArg,

    /// Print the PGN of the first game after the series
    #[arg(long)]
    pgn: bool,
}

fn main() -> ChessResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let terminal_scoring = if cli.extreme_terminal_scores {
        TerminalScoring::ExtremeScores
    } else {
        TerminalScoring::MaterialOnly
    };
    let config = MatchConfig {
        max_plies: cli.max_plies,
        seed: cli.seed,
        search: SearchConfig { terminal_scoring },
    };

    info!(
        "series: {} games, white={:?} black={:?} seed={} max_plies={} scoring={:?}",
        cli.games, cli.white, cli.black, cli.seed, cli.max_plies, terminal_scoring
    );

    let stats = play_match_series(cli.white.into(), cli.black.into(), cli.games, &config)?;
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);

    if cli.pgn {
        let first = play_match(cli.white.into(), cli.black.into(), &config)?;
        print!(
            "{}",
            write_pgn(&GameState::new_game(), &first.played_moves, first.outcome.result_tag())
        );
    }

    Ok(())
}
