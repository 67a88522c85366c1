use criterion::{black_box, criterion_group, Criterion};

use chess_rules::core::bit_twiddles::*;
use chess_rules::BitBoard;

fn dense_bitboards() -> Vec<BitBoard> {
    // Not uniformly random (no RNG crate in the dependency stack) but
    // spread enough across the board to keep the lookup tables cold.
    (0u64..1000)
        .map(|seed| BitBoard(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1))
        .collect()
}

fn bit_twiddling(c: &mut Criterion) {
    let boards = dense_bitboards();

    c.bench_function("popcount_1000", |b| {
        b.iter(|| {
            for bb in boards.iter() {
                black_box(popcount64(black_box(bb.0)));
            }
        })
    });

    c.bench_function("bit_scan_forward_1000", |b| {
        b.iter(|| {
            for bb in boards.iter() {
                black_box(bit_scan_forward(black_box(bb.0)));
            }
        })
    });

    c.bench_function("bit_scan_reverse_1000", |b| {
        b.iter(|| {
            for bb in boards.iter() {
                black_box(bit_scan_reverse(black_box(bb.0)));
            }
        })
    });
}

criterion_group!(bit_benches, bit_twiddling);
