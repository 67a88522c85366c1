//! Small supporting utilities. The only one a pure rules engine still needs
//! is [`prng`], which seeds both magic-number search and the Zobrist key
//! table; the teacher's search-only tools (`eval`, `pawn_table`, `timer`,
//! `pleco_arc`, prefetch hints) have no caller here and are dropped.

pub mod prng;
