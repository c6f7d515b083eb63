//! Exhaustive move-count oracle for the generator and legality filter.
//!
//! Promotions are emitted once per destination (the piece is chosen when the
//! move is applied), so positions with promotions inside the horizon count
//! fewer nodes than the published four-way-promotion tables.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn record(&mut self, mv: &Move) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
    }

    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    perft_recurse(generator, game_state, depth, &mut counts)?;
    Ok(counts)
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> MoveGenResult<Vec<(Move, PerftCounts)>> {
    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut out = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut counts = PerftCounts::default();
        if depth <= 1 {
            counts.record(&mv);
        } else {
            game_state.make_move(&mv, None);
            let result = perft_recurse(generator, game_state, depth - 1, &mut counts);
            game_state.undo_move()?;
            result?;
        }
        out.push((mv, counts));
    }

    Ok(out)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;

    if depth == 1 {
        for mv in &moves {
            counts.record(mv);
        }
        return Ok(());
    }

    for mv in &moves {
        game_state.make_move(mv, None);
        let mut child = PerftCounts::default();
        let result = perft_recurse(generator, game_state, depth - 1, &mut child);
        game_state.undo_move()?;
        result?;
        counts.merge(child);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &mut game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_startpos_depth_one_and_two() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 2).expect("perft should run").nodes, 400);
        assert_eq!(game, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &mut game, 2).expect("divide should run");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, counts)| counts.nodes == 20));
        let total: u64 = divided.iter().map(|(_, counts)| counts.nodes).sum();
        assert_eq!(total, 400);
    }
}
