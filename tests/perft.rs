use ply_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use ply_chess::game_state::game_state::GameState;
use ply_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use ply_chess::move_generation::perft::{perft, perft_divide, PerftCounts};

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn run(fen: &str, depth: u8) -> PerftCounts {
    let mut game = GameState::from_fen(fen).expect("FEN should parse");
    let before = game.clone();
    let counts = perft(&LegalMoveGenerator, &mut game, depth).expect("perft should run");
    assert_eq!(game, before, "perft must leave the position untouched");
    counts
}

#[test]
fn start_position_reference_counts() {
    assert_eq!(run(STARTING_POSITION_FEN, 1).nodes, 20);
    assert_eq!(run(STARTING_POSITION_FEN, 2).nodes, 400);

    let depth3 = run(STARTING_POSITION_FEN, 3);
    assert_eq!(depth3.nodes, 8902);
    assert_eq!(depth3.captures, 34);
    assert_eq!(depth3.en_passant, 0);
    assert_eq!(depth3.castles, 0);
}

#[test]
fn kiwipete_reference_counts() {
    let depth1 = run(KIWIPETE_FEN, 1);
    assert_eq!(depth1.nodes, 48);
    assert_eq!(depth1.captures, 8);
    assert_eq!(depth1.castles, 2);

    let depth2 = run(KIWIPETE_FEN, 2);
    assert_eq!(depth2.nodes, 2039);
    assert_eq!(depth2.captures, 351);
    assert_eq!(depth2.en_passant, 1);
    assert_eq!(depth2.castles, 91);
}

#[test]
fn position_3_reference_counts() {
    let expected = [(1, 14, 1, 0), (2, 191, 14, 0), (3, 2812, 209, 2)];
    for (depth, nodes, captures, en_passant) in expected {
        let counts = run(POSITION_3_FEN, depth);
        assert_eq!(counts.nodes, nodes, "nodes at depth {depth}");
        assert_eq!(counts.captures, captures, "captures at depth {depth}");
        assert_eq!(counts.en_passant, en_passant, "en passant at depth {depth}");
    }
}

#[test]
fn divide_sums_to_total() {
    let mut game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
    let divided = perft_divide(&LegalMoveGenerator, &mut game, 2).expect("divide should run");

    assert_eq!(divided.len(), 48);
    let total: u64 = divided.iter().map(|(_, counts)| counts.nodes).sum();
    assert_eq!(total, 2039);
}
