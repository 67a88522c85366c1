extern crate chess_rules;

use chess_rules::board::castle_rights::Castling;
use chess_rules::game::Game;
use chess_rules::movegen::legal_moves;
use chess_rules::{PieceKind, SQ};

#[test]
fn castling_through_an_attacked_square_is_illegal() {
    // Black rook on f8 rakes the f-file down to f1, which the white king
    // must cross to reach g1.
    let game = Game::from_fen("5r1k/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    for mv in legal_moves(&game).iter() {
        assert!(!mv.is_castle(), "castling through an attacked square must not be offered: {mv}");
    }
}

#[test]
fn castling_is_legal_once_the_attacked_square_is_blocked() {
    let game = Game::from_fen("5r1k/8/8/8/8/5P2/8/4K2R w K - 0 1").unwrap();
    assert!(legal_moves(&game).iter().any(|mv| mv.is_castle()), "f3 blocks the rook's ray, so g1 is reachable");
}

#[test]
fn capturing_a_rook_on_its_home_square_clears_that_castling_right() {
    let game = Game::from_fen("r3k3/8/8/8/8/8/8/R3K2R b KQ - 0 1").unwrap();
    let mv = legal_moves(&game)
        .iter()
        .find(|mv| mv.from() == SQ::A8 && mv.to() == SQ::A1)
        .copied()
        .expect("Ra8xa1 must be legal");
    let next = game.make_move(mv).unwrap();
    assert_eq!(next.castling(), Castling::WHITE_K);
}

#[test]
fn promotion_places_the_chosen_piece_kind_on_the_board() {
    let game = Game::from_fen("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = legal_moves(&game)
        .iter()
        .find(|mv| mv.from() == SQ::E7 && mv.to() == SQ::E8 && mv.promo() == Some(PieceKind::Rook))
        .copied()
        .expect("e7e8=R must be legal");
    let next = game.make_move(mv).unwrap();
    assert_eq!(next.board().at(SQ::E8), Some(chess_rules::Piece::new(chess_rules::Color::White, PieceKind::Rook)));
}
