//! Parsing and formatting of a FEN string's piece-placement field (the part
//! before the first space). The remaining fields (side to move, castling,
//! en passant, clocks) describe game state rather than piece placement, so
//! [`crate::game`] reads them directly and only delegates this field here.
//!
//! Grounded on the teacher's `board/fen.rs` field-by-field validation style
//! (a dedicated error variant per malformed field), re-expressed through
//! [`ChessError::InvalidFen`] instead of the teacher's `failure`-derived
//! `FenBuildError`.

use super::Board;
use crate::core::sq::SQ;
use crate::core::{Piece, PieceKind, Rank};
use crate::error::ChessError;

/// The FEN of the standard starting position.
pub const OPENING_POS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A handful of fixture FENs exercised by this crate's own test suite: the
/// Kiwipete perft position, a mid-game tactical position, and a late
/// endgame with few pieces. The teacher ships a much larger fixture bank
/// (tablebase and mate-search positions) this crate's tests don't need.
pub static SAMPLE_FENS: [&str; 3] = [
    OPENING_POS_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 10",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 11",
];

/// Parses a FEN's piece-placement field (e.g.
/// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`) into a [`Board`].
pub fn parse_placement(field: &str, fen: &str) -> Result<Board, ChessError> {
    let mut board = Board::empty();
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen {
            fen: fen.to_owned(),
            reason: format!("piece placement must have 8 ranks, found {}", ranks.len()),
        });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = crate::core::ALL_RANKS[rank_idx];
        let mut file_idx = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file_idx += skip as u8;
            } else {
                let (color, kind) = PieceKind::from_fen_char(c).ok_or_else(|| ChessError::InvalidFen {
                    fen: fen.to_owned(),
                    reason: format!("unrecognized piece character '{c}'"),
                })?;
                if file_idx > 7 {
                    return Err(ChessError::InvalidFen {
                        fen: fen.to_owned(),
                        reason: format!("rank {} overflows past file h", rank_idx + 1),
                    });
                }
                let sq = SQ::make(crate::core::ALL_FILES[file_idx as usize], rank);
                board.set_piece(Piece::new(color, kind), sq);
                file_idx += 1;
            }
        }
        if file_idx != 8 {
            return Err(ChessError::InvalidFen {
                fen: fen.to_owned(),
                reason: format!("rank {} does not sum to 8 files", rank_idx + 1),
            });
        }
    }

    if (board.piece_bb(crate::core::Color::White, PieceKind::Pawn)
        | board.piece_bb(crate::core::Color::Black, PieceKind::Pawn))
        & (Rank::R1.bb() | Rank::R8.bb())
        != crate::core::bitboard::BitBoard::EMPTY
    {
        return Err(ChessError::InvalidFen {
            fen: fen.to_owned(),
            reason: "pawns cannot stand on the first or eighth rank".to_owned(),
        });
    }

    for color in crate::core::ALL_COLORS {
        if board.piece_bb(color, PieceKind::King).count_bits() != 1 {
            return Err(ChessError::InvalidFen {
                fen: fen.to_owned(),
                reason: format!("{color} must have exactly one king"),
            });
        }
    }

    Ok(board)
}

/// Renders a [`Board`]'s piece placement back into FEN's slash-separated,
/// run-length-encoded form.
pub fn placement_to_string(board: &Board) -> String {
    let mut out = String::new();
    for (rank_idx, &rank) in crate::core::ALL_RANKS.iter().enumerate() {
        let mut empty_run = 0u8;
        for &file in crate::core::ALL_FILES.iter() {
            let sq = SQ::make(file, rank);
            match board.at(sq) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece.char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if rank_idx != 7 {
            out.push('/');
        }
    }
    out
}
