//! Contains the representation of a chessboard's square.
//!
//! Internally, a `SQ` is just a `u8`. Square `0` is `a8` and square `63` is `h1`:
//! the index increases left-to-right, top-to-bottom when the board is drawn with
//! rank 8 on top, matching how a FEN's piece-placement field is read.
//!
//! ```md,ignore
//! 8 | 0  1  2  3  4  5  6  7
//! 7 | 8  9  10 11 12 13 14 15
//! 6 | 16 17 18 19 20 21 22 23
//! 5 | 24 25 26 27 28 29 30 31
//! 4 | 32 33 34 35 36 37 38 39
//! 3 | 40 41 42 43 44 45 46 47
//! 2 | 48 49 50 51 52 53 54 55
//! 1 | 56 57 58 59 60 61 62 63
//!   -------------------------
//!      a  b  c  d  e  f  g  h
//! ```
//!
//! # Use of `NO_SQ`
//!
//! `NO_SQ` signifies the lack of a legal square — a lazy stand-in for
//! `Option<SQ>` whose value is `None`, used for the en-passant square slot
//! when no en-passant is available.

use super::bit_twiddles::diff;
use super::bitboard::BitBoard;
use super::masks::*;
use super::*;

use std::fmt;
use std::mem::transmute;
use std::ops::*;

/// Represents a singular square of a chessboard.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Eq, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

impl_bit_ops!(SQ, u8);

/// `SQ` representing no square available.
pub const NO_SQ: SQ = SQ(64);

impl SQ {
    /// A square that isn't on the board. Equivalent to `Option<SQ>` where the
    /// value is `None`.
    pub const NONE: SQ = NO_SQ;

    /// Returns whether a `SQ` is within the legal bounds of a square, which is
    /// inclusively between 0 and 63.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.0 < 64
    }

    /// Returns the distance between this square and another, in squares (not
    /// algebraic difference).
    #[inline]
    pub fn distance(self, sq_other: SQ) -> u8 {
        let x = diff(self.rank_idx_of_sq(), sq_other.rank_idx_of_sq());
        let y = diff(self.file_idx_of_sq(), sq_other.file_idx_of_sq());
        if x > y {
            x
        } else {
            y
        }
    }

    /// Converts a `SQ` to its `BitBoard` equivalent: exactly one bit set, at
    /// this square's index.
    #[inline(always)]
    pub fn to_bb(self) -> BitBoard {
        debug_assert!(self.is_okay());
        BitBoard(1) << self
    }

    /// Returns the `Rank` that a `SQ` lies on.
    #[inline(always)]
    pub fn rank(self) -> Rank {
        unsafe { transmute::<u8, Rank>((self.0 >> 3) & 0b0000_0111) }
    }

    /// Returns the `BitBoard` representation of a `Rank` that a `SQ` lies on.
    #[inline(always)]
    pub fn rank_bb(self) -> BitBoard {
        BitBoard(RANK_BB[self.rank() as usize])
    }

    /// Returns the rank index (0 = chess rank 8, 7 = chess rank 1) of a `SQ`.
    #[inline(always)]
    pub const fn rank_idx_of_sq(self) -> u8 {
        self.0 >> 3
    }

    /// Returns the `File` that a `SQ` lies on.
    #[inline(always)]
    pub fn file(self) -> File {
        unsafe { transmute::<u8, File>(self.0 & 0b0000_0111) }
    }

    /// Returns the `BitBoard` representation of a `File` that a `SQ` lies on.
    #[inline(always)]
    pub fn file_bb(self) -> BitBoard {
        BitBoard(FILE_BB[self.file() as usize])
    }

    /// Returns the file index (0 = file a, 7 = file h) of a `SQ`.
    #[inline(always)]
    pub const fn file_idx_of_sq(self) -> u8 {
        self.0 & 0b0000_0111
    }

    /// Returns the castle-rights mask to clear when a move touches this
    /// square (as either its `from` or its `to`). Zero if the square has no
    /// castling significance.
    #[inline]
    pub fn castle_rights_mask(self) -> u8 {
        match self.0 {
            ROOK_WHITE_KSIDE_START => C_WHITE_K_MASK,
            ROOK_WHITE_QSIDE_START => C_WHITE_Q_MASK,
            ROOK_BLACK_KSIDE_START => C_BLACK_K_MASK,
            ROOK_BLACK_QSIDE_START => C_BLACK_Q_MASK,
            WHITE_KING_START => C_WHITE_K_MASK | C_WHITE_Q_MASK,
            BLACK_KING_START => C_BLACK_K_MASK | C_BLACK_Q_MASK,
            _ => 0,
        }
    }

    /// Creates a `SQ` from the designated file and rank.
    #[inline(always)]
    pub fn make(file: File, rank: Rank) -> SQ {
        SQ(((rank as u8).wrapping_shl(3) + (file as u8)) as u8)
    }

    /// Returns whether the `SQ` is a dark square.
    #[inline(always)]
    pub fn on_dark_square(self) -> bool {
        (self.to_bb() & BitBoard::DARK_SQUARES).is_not_empty()
    }

    /// Returns whether the `SQ` is a light square.
    #[inline(always)]
    pub fn on_light_square(self) -> bool {
        (self.to_bb() & BitBoard::DARK_SQUARES).is_empty()
    }

    /// Flips the square's rank, so `SQ::A1` becomes `SQ::A8`.
    #[inline(always)]
    pub fn flip(self) -> SQ {
        SQ(self.0 ^ 0b111000)
    }

    /// Determines if two squares are on opposite colors.
    #[inline(always)]
    pub fn opposite_colors(self, other: SQ) -> bool {
        let s: u8 = self.0 ^ other.0;
        ((s >> 3) ^ s) & 1 != 0
    }
}

// Named constants, generated for the a8=0 .. h1=63 numbering.
impl SQ {
    #[doc(hidden)]
    pub const A8: SQ = SQ(0);
    #[doc(hidden)]
    pub const B8: SQ = SQ(1);
    #[doc(hidden)]
    pub const C8: SQ = SQ(2);
    #[doc(hidden)]
    pub const D8: SQ = SQ(3);
    #[doc(hidden)]
    pub const E8: SQ = SQ(4);
    #[doc(hidden)]
    pub const F8: SQ = SQ(5);
    #[doc(hidden)]
    pub const G8: SQ = SQ(6);
    #[doc(hidden)]
    pub const H8: SQ = SQ(7);
    #[doc(hidden)]
    pub const A7: SQ = SQ(8);
    #[doc(hidden)]
    pub const B7: SQ = SQ(9);
    #[doc(hidden)]
    pub const C7: SQ = SQ(10);
    #[doc(hidden)]
    pub const D7: SQ = SQ(11);
    #[doc(hidden)]
    pub const E7: SQ = SQ(12);
    #[doc(hidden)]
    pub const F7: SQ = SQ(13);
    #[doc(hidden)]
    pub const G7: SQ = SQ(14);
    #[doc(hidden)]
    pub const H7: SQ = SQ(15);
    #[doc(hidden)]
    pub const A6: SQ = SQ(16);
    #[doc(hidden)]
    pub const B6: SQ = SQ(17);
    #[doc(hidden)]
    pub const C6: SQ = SQ(18);
    #[doc(hidden)]
    pub const D6: SQ = SQ(19);
    #[doc(hidden)]
    pub const E6: SQ = SQ(20);
    #[doc(hidden)]
    pub const F6: SQ = SQ(21);
    #[doc(hidden)]
    pub const G6: SQ = SQ(22);
    #[doc(hidden)]
    pub const H6: SQ = SQ(23);
    #[doc(hidden)]
    pub const A5: SQ = SQ(24);
    #[doc(hidden)]
    pub const B5: SQ = SQ(25);
    #[doc(hidden)]
    pub const C5: SQ = SQ(26);
    #[doc(hidden)]
    pub const D5: SQ = SQ(27);
    #[doc(hidden)]
    pub const E5: SQ = SQ(28);
    #[doc(hidden)]
    pub const F5: SQ = SQ(29);
    #[doc(hidden)]
    pub const G5: SQ = SQ(30);
    #[doc(hidden)]
    pub const H5: SQ = SQ(31);
    #[doc(hidden)]
    pub const A4: SQ = SQ(32);
    #[doc(hidden)]
    pub const B4: SQ = SQ(33);
    #[doc(hidden)]
    pub const C4: SQ = SQ(34);
    #[doc(hidden)]
    pub const D4: SQ = SQ(35);
    #[doc(hidden)]
    pub const E4: SQ = SQ(36);
    #[doc(hidden)]
    pub const F4: SQ = SQ(37);
    #[doc(hidden)]
    pub const G4: SQ = SQ(38);
    #[doc(hidden)]
    pub const H4: SQ = SQ(39);
    #[doc(hidden)]
    pub const A3: SQ = SQ(40);
    #[doc(hidden)]
    pub const B3: SQ = SQ(41);
    #[doc(hidden)]
    pub const C3: SQ = SQ(42);
    #[doc(hidden)]
    pub const D3: SQ = SQ(43);
    #[doc(hidden)]
    pub const E3: SQ = SQ(44);
    #[doc(hidden)]
    pub const F3: SQ = SQ(45);
    #[doc(hidden)]
    pub const G3: SQ = SQ(46);
    #[doc(hidden)]
    pub const H3: SQ = SQ(47);
    #[doc(hidden)]
    pub const A2: SQ = SQ(48);
    #[doc(hidden)]
    pub const B2: SQ = SQ(49);
    #[doc(hidden)]
    pub const C2: SQ = SQ(50);
    #[doc(hidden)]
    pub const D2: SQ = SQ(51);
    #[doc(hidden)]
    pub const E2: SQ = SQ(52);
    #[doc(hidden)]
    pub const F2: SQ = SQ(53);
    #[doc(hidden)]
    pub const G2: SQ = SQ(54);
    #[doc(hidden)]
    pub const H2: SQ = SQ(55);
    #[doc(hidden)]
    pub const A1: SQ = SQ(56);
    #[doc(hidden)]
    pub const B1: SQ = SQ(57);
    #[doc(hidden)]
    pub const C1: SQ = SQ(58);
    #[doc(hidden)]
    pub const D1: SQ = SQ(59);
    #[doc(hidden)]
    pub const E1: SQ = SQ(60);
    #[doc(hidden)]
    pub const F1: SQ = SQ(61);
    #[doc(hidden)]
    pub const G1: SQ = SQ(62);
    #[doc(hidden)]
    pub const H1: SQ = SQ(63);
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            write!(f, "{}{}", FILE_DISPLAYS[self.file_idx_of_sq() as usize], 8 - self.rank_idx_of_sq())
        } else {
            write!(f, "-")
        }
    }
}
