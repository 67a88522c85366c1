use criterion::{black_box, criterion_group, Criterion};

use chess_rules::core::piece_move::Move;
use chess_rules::core::sq::SQ;
use chess_rules::{Board, Color};

const RAND_BOARD_FENS: [&str; 6] = [
    "rn2k3/pp1qPppr/5n2/1b2B3/8/4NP2/3NP1PP/R2K1B1R b q - 0 23",
    "r1bqkbnr/ppp2ppp/2np4/4p3/4PQ2/2NP4/PPP1NPPP/R1B1KB1R w KQkq e6 0 8",
    "r1bqkb1r/pp2pp2/2p2n2/6Q1/7p/2N4P/PP1B1PP1/R3KBNR w KQkq - 0 14",
    "3k4/6b1/1p5p/4p3/5rP1/6K1/8/8 w - - 0 40",
    "1k6/1p1n4/p6p/4P3/2P5/1R6/5K1P/4R3 b - - 2 33",
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
];

fn boards() -> Vec<Board> {
    RAND_BOARD_FENS
        .iter()
        .map(|fen| chess_rules::game::Game::from_fen(fen).unwrap().board().clone())
        .collect()
}

fn board_operations(c: &mut Criterion) {
    let boards = boards();

    c.bench_function("king_square_lookup", |b| {
        b.iter(|| {
            for board in boards.iter() {
                black_box(board.king_square(Color::Black));
            }
        })
    });

    c.bench_function("attackers_to_center", |b| {
        b.iter(|| {
            for board in boards.iter() {
                black_box(board.attackers_to(SQ::E4, board.occ_all()));
            }
        })
    });

    c.bench_function("apply_quiet_move", |b| {
        let start = Board::start_pos();
        let mv = Move::quiet(SQ::E2, SQ::E4);
        b.iter(|| {
            black_box(start.apply_move(black_box(mv), Color::White));
        })
    });
}

criterion_group!(board_benches, board_operations);
