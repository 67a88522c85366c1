//! Single binary aggregating every benchmark group, the way criterion's
//! `harness = false` entry point is meant to be structured: one compiled
//! crate, one `main`, many named groups.

extern crate chess_rules;
extern crate criterion;

mod bit_benches;
mod board_benches;
mod perft_benches;

criterion::criterion_main! {
    bit_benches::bit_benches,
    board_benches::board_benches,
    lookup_benches::lookup_benches,
    move_gen_benches::move_gen_benches,
    perft_benches::perft_benches,
}
