//! Statically initialized lookup tables: magic sliding-piece attacks,
//! knight/king/pawn attack sets, `between`/`line` geometry, and the
//! Zobrist key table.
//!
//! The teacher guarded these behind an explicit `Helper::new()` that had to
//! be called (at least once, cheaply) before any lookup was safe, because
//! its tables lived in `static mut` arrays populated by `unsafe` `init_*()`
//! functions. Here every table is built behind `lazy_static!`, so first
//! access initializes it and no caller needs to remember to trigger
//! anything up front.

pub mod boards;
pub mod magic;
pub mod zobrist;
