//! Castling rights, kept as a four-bit `bitflags` set.
//!
//! A bit records only that the relevant king and rook have not yet moved
//! from their home squares; it does not by itself mean castling is legal in
//! the current position (path-empty and not-through-check are checked by
//! the move generator). Grounded on the teacher's own `Castling` type,
//! adapted from `Player` to this crate's `Color`.

use crate::core::masks::{C_BLACK_K_MASK, C_BLACK_Q_MASK, C_WHITE_K_MASK, C_WHITE_Q_MASK};
use crate::core::sq::SQ;
use crate::core::{CastleSide, Color};
use std::fmt;

bitflags! {
    pub struct Castling: u8 {
        const WHITE_K   = C_WHITE_K_MASK;
        const WHITE_Q   = C_WHITE_Q_MASK;
        const BLACK_K   = C_BLACK_K_MASK;
        const BLACK_Q   = C_BLACK_Q_MASK;
        const WHITE_ALL = Self::WHITE_K.bits | Self::WHITE_Q.bits;
        const BLACK_ALL = Self::BLACK_K.bits | Self::BLACK_Q.bits;
    }
}

impl Castling {
    #[inline]
    pub const fn empty_set() -> Self {
        Castling { bits: 0 }
    }

    #[inline]
    pub const fn all_castling() -> Self {
        Castling { bits: 0b0000_1111 }
    }

    /// Whether `color` still has the right to castle on `side`.
    #[inline]
    pub fn can_castle(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.contains(Self::WHITE_K),
            (Color::White, CastleSide::QueenSide) => self.contains(Self::WHITE_Q),
            (Color::Black, CastleSide::KingSide) => self.contains(Self::BLACK_K),
            (Color::Black, CastleSide::QueenSide) => self.contains(Self::BLACK_Q),
        }
    }

    #[inline]
    pub fn no_castling(self) -> bool {
        self.bits == 0
    }

    /// Clears whichever rights are implicated by a move touching `from` and
    /// `to` (king or rook leaving its home square, or a rook being
    /// captured on its home square), returning the rights that were lost.
    #[inline]
    pub fn update_castling(&mut self, from: SQ, to: SQ) -> u8 {
        let mask_change = from.castle_rights_mask() | to.castle_rights_mask();
        let lost = self.bits & mask_change;
        self.bits &= !mask_change;
        lost
    }

    /// Adds a single right from its FEN character (`K`, `Q`, `k`, `q`, or
    /// `-` for none).
    pub fn add_castling_char(&mut self, c: char) -> Result<(), char> {
        self.bits |= match c {
            'K' => Self::WHITE_K.bits,
            'Q' => Self::WHITE_Q.bits,
            'k' => Self::BLACK_K.bits,
            'q' => Self::BLACK_Q.bits,
            '-' => 0,
            other => return Err(other),
        };
        Ok(())
    }

    /// Renders the FEN castling field: `K`/`Q`/`k`/`q` in that order, or
    /// `-` if nothing remains.
    pub fn pretty_string(self) -> String {
        if self.no_castling() {
            return "-".to_owned();
        }
        let mut s = String::with_capacity(4);
        if self.contains(Self::WHITE_K) {
            s.push('K');
        }
        if self.contains(Self::WHITE_Q) {
            s.push('Q');
        }
        if self.contains(Self::BLACK_K) {
            s.push('k');
        }
        if self.contains(Self::BLACK_Q) {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}
