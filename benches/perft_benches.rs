use criterion::{black_box, criterion_group, Criterion};

use chess_rules::game::Game;
use chess_rules::perft::perft;

fn boards() -> Vec<Game> {
    RAND_BOARDS_ALL.iter().map(|fen| Game::from_fen(fen).unwrap()).collect()
}

fn perft_benchmarks(c: &mut Criterion) {
    let games = boards();

    c.bench_function("perft depth 3, six positions", |b| {
        b.iter(|| {
            for game in games.iter() {
                black_box(perft(game, 3));
            }
        })
    });

    c.bench_function("perft depth 4, starting position", |b| {
        let start = Game::new();
        b.iter(|| black_box(perft(&start, 4)))
    });
}

criterion_group!(perft_benches, perft_benchmarks);

static RAND_BOARDS_ALL: [&str; 6] = [
    "rn2k3/pp1qPppr/5n2/1b2B3/8/4NP2/3NP1PP/R2K1B1R b q - 0 23",
    "r1bqkbnr/ppp2ppp/2np4/4p3/4PQ2/2NP4/PPP1NPPP/R1B1KB1R w KQkq e6 0 8",
    "r1bqkb1r/pp2pp2/2p2n2/6Q1/7p/2N4P/PP1B1PP1/R3KBNR w KQkq - 0 14",
    "3k4/6b1/1p5p/4p3/5rP1/6K1/8/8 w - - 0 40",
    "1k6/1p1n4/p6p/4P3/2P5/1R6/5K1P/4R3 b - - 2 33",
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
];
