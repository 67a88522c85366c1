//! Zobrist hash key table: 768 piece-square keys, 16 precomputed
//! castling-rights XOR combinations, 8 en-passant file keys, and one
//! side-to-move key. Grounded on the teacher's own `ZOBRIST_SEED`-driven
//! construction and its castling-combination technique (XOR-combine four
//! base keys per bit pattern), ported to a `lazy_static` bundle.

use crate::core::masks::{ALL_CASTLING_RIGHTS, FILE_CNT, PLAYER_CNT, SQ_CNT};
use crate::core::sq::SQ;
use crate::core::{Color, PieceKind};
use crate::tools::prng::PRNG;

/// Seed for the Zobrist key PRNG. Fixed so the same binary always produces
/// the same table (repetition/hash-consistency depends on determinism, not
/// on any particular key values).
const ZOBRIST_SEED: u64 = 23_081;

const PIECE_KIND_CNT: usize = 6;

struct ZobristKeys {
    piece_square: [[[u64; SQ_CNT]; PIECE_KIND_CNT]; PLAYER_CNT],
    castling: [u64; ALL_CASTLING_RIGHTS],
    en_passant: [u64; FILE_CNT],
    side: u64,
}

lazy_static! {
    static ref KEYS: ZobristKeys = build_keys();
}

#[inline]
pub fn piece_square_key(color: Color, kind: PieceKind, sq: SQ) -> u64 {
    KEYS.piece_square[color as usize][kind as usize][sq.0 as usize]
}

#[inline]
pub fn en_passant_key(sq: SQ) -> u64 {
    KEYS.en_passant[sq.file_idx_of_sq() as usize]
}

#[inline]
pub fn castling_key(rights: u8) -> u64 {
    debug_assert!((rights as usize) < ALL_CASTLING_RIGHTS);
    KEYS.castling[rights as usize]
}

#[inline]
pub fn side_to_move_key() -> u64 {
    KEYS.side
}

#[cold]
fn build_keys() -> ZobristKeys {
    let mut rng = PRNG::init(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; SQ_CNT]; PIECE_KIND_CNT]; PLAYER_CNT];
    for color in piece_square.iter_mut() {
        for kind in color.iter_mut() {
            for key in kind.iter_mut() {
                *key = rng.rand();
            }
        }
    }

    let mut en_passant = [0u64; FILE_CNT];
    for key in en_passant.iter_mut() {
        *key = rng.rand();
    }

    // One base key per castling-right bit; `castling[cr]` is the XOR of the
    // base keys of every bit set in `cr`, so incremental updates can XOR in
    // `castling[old ^ new]` directly rather than recomputing from scratch.
    let mut base = [0u64; 4];
    for key in base.iter_mut() {
        *key = rng.rand();
    }
    let mut castling = [0u64; ALL_CASTLING_RIGHTS];
    for (cr, slot) in castling.iter_mut().enumerate() {
        let mut combined = 0u64;
        for (bit, key) in base.iter().enumerate() {
            if cr & (1 << bit) != 0 {
                combined ^= key;
            }
        }
        *slot = combined;
    }

    let side = rng.rand();

    ZobristKeys { piece_square, castling, en_passant, side }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_square_keys_are_distinct() {
        let a = piece_square_key(Color::White, PieceKind::Pawn, SQ::E2);
        let b = piece_square_key(Color::White, PieceKind::Pawn, SQ::E3);
        let c = piece_square_key(Color::Black, PieceKind::Pawn, SQ::E2);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn castling_combined_matches_xor_of_bits() {
        let all = castling_key(0b1111);
        let a = castling_key(0b0001);
        let b = castling_key(0b0010);
        let c = castling_key(0b0100);
        let d = castling_key(0b1000);
        assert_eq!(all, a ^ b ^ c ^ d);
        assert_eq!(castling_key(0), 0);
    }

    #[test]
    fn en_passant_keys_depend_only_on_file() {
        assert_eq!(en_passant_key(SQ::E2), en_passant_key(SQ::E7));
        assert_ne!(en_passant_key(SQ::E2), en_passant_key(SQ::D2));
    }
}
