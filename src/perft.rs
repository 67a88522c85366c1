//! Performance test (perft): the canonical correctness oracle for a move
//! generator. `perft(game, depth)` counts leaf positions reached by playing
//! every legal move at every ply down to `depth`; mismatches against known
//! counts for a fixture FEN point at a missing, spurious, or mis-filtered
//! move somewhere in the generator.
//!
//! Grounded on the teacher's own `board/perft.rs` (`PerftNodes`/`perft`/
//! `perft_all` shape), adapted to build new [`crate::game::Game`] values
//! instead of mutating a `Board` in place via `apply_move`/`undo_move`,
//! since this crate's `Game` has no undo stack to unwind.

use crate::game::Game;
use crate::movegen;

/// Counts leaf nodes of the legal-move tree rooted at `game`, `depth` plies
/// deep. `perft(_, 0) == 1` (the root itself is the one leaf).
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = movegen::legal_moves(game);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves.iter() {
        let next = game.make_move(*mv).expect("legal_moves only emits legal moves");
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Per-root-move breakdown of `perft(game, depth - 1)`, in the traditional
/// `uci_move: count` shape used to diff against a reference engine and find
/// exactly which root move disagrees.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    movegen::legal_moves(game)
        .iter()
        .map(|mv| {
            let next = game.make_move(*mv).expect("legal_moves only emits legal moves");
            (mv.to_uci(), perft(&next, depth - 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::SAMPLE_FENS;

    #[test]
    fn starting_position_perft_one_through_four() {
        let game = Game::new();
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
        assert_eq!(perft(&game, 3), 8_902);
        assert_eq!(perft(&game, 4), 197_281);
    }

    #[test]
    fn kiwipete_perft_one_through_three() {
        let game = Game::from_fen(SAMPLE_FENS[1]).unwrap();
        assert_eq!(perft(&game, 1), 48);
        assert_eq!(perft(&game, 2), 2_039);
        assert_eq!(perft(&game, 3), 97_862);
    }

    #[test]
    fn divide_sums_to_full_perft() {
        let game = Game::new();
        let breakdown = perft_divide(&game, 3);
        let total: u64 = breakdown.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&game, 3));
        assert_eq!(breakdown.len(), 20);
    }
}
