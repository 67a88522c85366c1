//! A complete position: piece placement plus everything [`crate::board::Board`]
//! deliberately does not track — side to move, castling rights, the
//! en-passant target, the two move counters, a cached king square per color,
//! and the incremental Zobrist hash together with enough history to answer
//! a repetition claim.
//!
//! `make_move` never mutates `self`; it returns a new `Game`; the
//! `hash_history` chain is shared structurally between the old and new
//! value via `Arc` (grounded on the teacher's own `BoardState.prev:
//! Option<Arc<BoardState>>` undo-chain) so producing a new position is O(1)
//! regardless of how many plies have been played.

use std::sync::Arc;

use crate::board::castle_rights::Castling;
use crate::board::fen;
use crate::board::Board;
use crate::core::bitboard::BitBoard;
use crate::core::masks::CASTLING_ROOK_START;
use crate::core::move_list::MoveList;
use crate::core::piece_move::{Move, Special};
use crate::core::sq::SQ;
use crate::core::{CastleSide, Color, PieceKind, Rank, ALL_COLORS, ALL_FILES, ALL_PIECE_KINDS, ALL_RANKS};
use crate::error::ChessError;
use crate::helper::zobrist::{castling_key, en_passant_key, piece_square_key, side_to_move_key};
use crate::movegen;

/// One link in the position-hash chain, used to answer a repetition claim
/// without keeping a growing `Vec` around on every `Game`.
struct HashNode {
    hash: u64,
    prev: Option<Arc<HashNode>>,
}

/// The outcome of [`Game::status`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Active,
    Checkmate,
    Stalemate,
    Draw,
}

/// A full chess position plus enough history to detect a repetition draw.
#[derive(Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: Castling,
    pub(crate) en_passant: Option<SQ>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) king_square: [SQ; 2],
    pub(crate) zobrist_hash: u64,
    hash_history: Option<Arc<HashNode>>,
}

impl Game {
    /// The standard starting position.
    pub fn new() -> Game {
        let board = Board::start_pos();
        let castling = Castling::all_castling();
        let hash = full_hash(&board, castling, None, Color::White);
        Game {
            board,
            side_to_move: Color::White,
            castling,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_square: [SQ::E1, SQ::E8],
            zobrist_hash: hash,
            hash_history: None,
        }
    }

    /// Parses a full six-field FEN string into a `Game`.
    pub fn from_fen(fen_str: &str) -> Result<Game, ChessError> {
        let fields: Vec<&str> = fen_str.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ChessError::InvalidFen {
                fen: fen_str.to_owned(),
                reason: format!("expected 6 space-separated fields, found {}", fields.len()),
            });
        }

        let board = fen::parse_placement(fields[0], fen_str)?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidFen {
                    fen: fen_str.to_owned(),
                    reason: format!("side to move must be 'w' or 'b', found {other:?}"),
                })
            }
        };

        let mut castling = Castling::empty_set();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                castling.add_castling_char(c).map_err(|bad| ChessError::InvalidFen {
                    fen: fen_str.to_owned(),
                    reason: format!("invalid castling character '{bad}'"),
                })?;
            }
        }

        let en_passant = if fields[3] == "-" {
            None
        } else {
            let sq = parse_algebraic_square(fields[3]).ok_or_else(|| ChessError::InvalidFen {
                fen: fen_str.to_owned(),
                reason: format!("invalid en passant square {:?}", fields[3]),
            })?;
            if sq.rank() != Rank::R3 && sq.rank() != Rank::R6 {
                return Err(ChessError::InvalidFen {
                    fen: fen_str.to_owned(),
                    reason: format!("en passant square {:?} must be on rank 3 or 6", fields[3]),
                });
            }
            Some(sq)
        };

        let halfmove_clock: u32 = fields[4].parse().map_err(|_| ChessError::InvalidFen {
            fen: fen_str.to_owned(),
            reason: "halfmove clock must be a non-negative integer".to_owned(),
        })?;
        let fullmove_number: u32 = fields[5].parse().map_err(|_| ChessError::InvalidFen {
            fen: fen_str.to_owned(),
            reason: "fullmove number must be a non-negative integer".to_owned(),
        })?;
        if fullmove_number == 0 {
            return Err(ChessError::InvalidFen {
                fen: fen_str.to_owned(),
                reason: "fullmove number must be a positive integer".to_owned(),
            });
        }

        let king_square = [board.king_square(Color::White), board.king_square(Color::Black)];
        let zobrist_hash = full_hash(&board, castling, en_passant, side_to_move);

        Ok(Game {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            king_square,
            zobrist_hash,
            hash_history: None,
        })
    }

    /// Renders this position as a full six-field FEN string.
    pub fn fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            fen::placement_to_string(&self.board),
            if self.side_to_move == Color::White { "w" } else { "b" },
            self.castling.pretty_string(),
            self.en_passant.map(|sq| sq.to_string()).unwrap_or_else(|| "-".to_owned()),
            self.halfmove_clock,
            self.fullmove_number,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self) -> Castling {
        self.castling
    }

    pub fn en_passant(&self) -> Option<SQ> {
        self.en_passant
    }

    pub fn zobrist_hash(&self) -> u64 {
        self.zobrist_hash
    }

    /// Whether the side to move's king is currently attacked.
    pub fn in_check(&self) -> bool {
        self.board.attacked_by(self.king_square[self.side_to_move as usize], self.side_to_move.other())
    }

    pub fn checkmate(&self) -> bool {
        self.in_check() && !movegen::has_any_legal_move(self)
    }

    pub fn stalemate(&self) -> bool {
        !self.in_check() && !movegen::has_any_legal_move(self)
    }

    /// Whether the current position is drawn by the fifty-move rule,
    /// threefold repetition, or insufficient material.
    pub fn draw(&self) -> bool {
        self.halfmove_clock >= 100 || self.is_repetition_draw() || self.insufficient_material()
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate() {
            GameStatus::Checkmate
        } else if self.stalemate() {
            GameStatus::Stalemate
        } else if self.draw() {
            GameStatus::Draw
        } else {
            GameStatus::Active
        }
    }

    /// Plays `mv`, which must be one of `legal_moves(self)`'s own outputs.
    pub fn make_move(&self, mv: Move) -> Result<Game, ChessError> {
        if !movegen::legal_moves(self).contains(mv) {
            return Err(ChessError::IllegalMove { from: mv.from(), to: mv.to() });
        }
        Ok(self.apply_legal_move(mv))
    }

    /// Finds and plays the legal move from `from` to `to` (with `promotion`
    /// if it is a promoting pawn move).
    pub fn make_move_uci(
        &self,
        from: SQ,
        to: SQ,
        promotion: Option<PieceKind>,
    ) -> Result<Game, ChessError> {
        let moves = movegen::legal_moves(self);
        let mv = moves
            .iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promo() == promotion)
            .copied()
            .ok_or(ChessError::IllegalMove { from, to })?;
        Ok(self.apply_legal_move(mv))
    }

    /// The raw-index entry point named in this crate's public API contract:
    /// validates `from`/`to` are on-board before doing anything else, then
    /// delegates to [`Game::make_move_uci`]. Unlike that method, which takes
    /// a caller-trusted [`SQ`], this one is the boundary a host language
    /// binding actually calls across, so out-of-range indices get their own
    /// error instead of silently missing every legal move.
    pub fn make_move_indices(
        &self,
        from: u8,
        to: u8,
        promotion: Option<PieceKind>,
    ) -> Result<Game, ChessError> {
        let from_sq = SQ(from);
        let to_sq = SQ(to);
        if !from_sq.is_okay() {
            return Err(ChessError::InvalidSquare(from as u16));
        }
        if !to_sq.is_okay() {
            return Err(ChessError::InvalidSquare(to as u16));
        }
        self.make_move_uci(from_sq, to_sq, promotion)
    }

    fn apply_legal_move(&self, mv: Move) -> Game {
        let mover = self.side_to_move;
        let them = mover.other();
        let from = mv.from();
        let to = mv.to();
        let piece = self.board.at(from).expect("legal move always has a piece on its from-square");
        let is_pawn_move = piece.kind == PieceKind::Pawn;
        let is_capture = match mv.special() {
            Special::EnPassant => true,
            Special::None => self.board.at(to).is_some(),
            Special::KingsideCastle | Special::QueensideCastle => false,
        };

        let mut hash = self.zobrist_hash;
        hash ^= piece_square_key(mover, piece.kind, from);
        let final_kind = mv.promo().unwrap_or(piece.kind);
        hash ^= piece_square_key(mover, final_kind, to);

        match mv.special() {
            Special::EnPassant => {
                let captured_sq = SQ::make(to.file(), from.rank());
                hash ^= piece_square_key(them, PieceKind::Pawn, captured_sq);
            }
            Special::KingsideCastle | Special::QueensideCastle => {
                let side =
                    if mv.is_kingside_castle() { CastleSide::KingSide } else { CastleSide::QueenSide };
                let rook_from = SQ(CASTLING_ROOK_START[mover as usize][side as usize]);
                let rook_to = match (mover, side) {
                    (Color::White, CastleSide::KingSide) => SQ::F1,
                    (Color::White, CastleSide::QueenSide) => SQ::D1,
                    (Color::Black, CastleSide::KingSide) => SQ::F8,
                    (Color::Black, CastleSide::QueenSide) => SQ::D8,
                };
                hash ^= piece_square_key(mover, PieceKind::Rook, rook_from);
                hash ^= piece_square_key(mover, PieceKind::Rook, rook_to);
            }
            Special::None => {
                if let Some(captured) = self.board.at(to) {
                    hash ^= piece_square_key(them, captured.kind, to);
                }
            }
        }

        let new_board = self.board.apply_move(mv, mover);

        let mut new_castling = self.castling;
        new_castling.update_castling(from, to);
        hash ^= castling_key(self.castling.bits() ^ new_castling.bits());

        if let Some(old_ep) = self.en_passant {
            hash ^= en_passant_key(old_ep);
        }
        let new_en_passant = if is_pawn_move && from.rank_idx_of_sq().abs_diff(to.rank_idx_of_sq()) == 2 {
            let mid_rank_idx = (from.rank_idx_of_sq() + to.rank_idx_of_sq()) / 2;
            Some(SQ::make(from.file(), ALL_RANKS[mid_rank_idx as usize]))
        } else {
            None
        };
        if let Some(new_ep) = new_en_passant {
            hash ^= en_passant_key(new_ep);
        }

        hash ^= side_to_move_key();

        let mut king_square = self.king_square;
        if piece.kind == PieceKind::King {
            king_square[mover as usize] = to;
        }

        Game {
            board: new_board,
            side_to_move: them,
            castling: new_castling,
            en_passant: new_en_passant,
            halfmove_clock: if is_capture || is_pawn_move { 0 } else { self.halfmove_clock + 1 },
            fullmove_number: if mover == Color::Black { self.fullmove_number + 1 } else { self.fullmove_number },
            king_square,
            zobrist_hash: hash,
            hash_history: Some(Arc::new(HashNode {
                hash: self.zobrist_hash,
                prev: self.hash_history.clone(),
            })),
        }
    }

    /// Number of times this exact position (by hash) has occurred,
    /// including the current one, scanning back at most `halfmove_clock`
    /// plies (an irreversible move — a capture or a pawn push — bounds how
    /// far back a repeated position could possibly be).
    fn repetition_count(&self) -> u32 {
        let mut count = 1;
        let mut node = self.hash_history.clone();
        let mut steps = 0u32;
        while let Some(n) = node {
            if steps >= self.halfmove_clock {
                break;
            }
            if n.hash == self.zobrist_hash {
                count += 1;
            }
            node = n.prev.clone();
            steps += 1;
        }
        count
    }

    /// Claimable two-fold: drawn once the current position has occurred
    /// three times in total (two prior occurrences plus the current one).
    fn is_repetition_draw(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Draw by insufficient material: king vs king, king+minor vs king, or
    /// king+bishop vs king+bishop with both bishops on the same square color.
    fn insufficient_material(&self) -> bool {
        match self.board.piece_count() {
            2 => true,
            3 => ALL_COLORS.iter().any(|&color| {
                (self.board.piece_bb(color, PieceKind::Knight) | self.board.piece_bb(color, PieceKind::Bishop))
                    .count_bits()
                    == 1
            }),
            4 => {
                let white_bishops = self.board.piece_bb(Color::White, PieceKind::Bishop);
                let black_bishops = self.board.piece_bb(Color::Black, PieceKind::Bishop);
                white_bishops.count_bits() == 1
                    && black_bishops.count_bits() == 1
                    && !white_bishops.to_sq().opposite_colors(black_bishops.to_sq())
            }
            _ => false,
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

fn parse_algebraic_square(s: &str) -> Option<SQ> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file_char = (bytes[0] as char).to_ascii_lowercase();
    if !('a'..='h').contains(&file_char) {
        return None;
    }
    let file = ALL_FILES[(file_char as u8 - b'a') as usize];
    let rank = Rank::from_fen_char(bytes[1] as char)?;
    Some(SQ::make(file, rank))
}

fn full_hash(board: &Board, castling: Castling, en_passant: Option<SQ>, side_to_move: Color) -> u64 {
    let mut hash = 0u64;
    for &color in ALL_COLORS.iter() {
        for &kind in ALL_PIECE_KINDS.iter() {
            for sq in BitBoard(board.piece_bb(color, kind).0) {
                hash ^= piece_square_key(color, kind, sq);
            }
        }
    }
    hash ^= castling_key(castling.bits());
    if let Some(ep) = en_passant {
        hash ^= en_passant_key(ep);
    }
    if side_to_move == Color::Black {
        hash ^= side_to_move_key();
    }
    hash
}

/// Returns the standard starting position.
pub fn new_game() -> Game {
    Game::new()
}

/// Parses a FEN string into a `Game`.
pub fn new_game_from_fen(fen_str: &str) -> Result<Game, ChessError> {
    Game::from_fen(fen_str)
}

/// Returns every legal move in `game`'s position.
pub fn legal_moves(game: &Game) -> MoveList {
    movegen::legal_moves(game)
}

/// Returns every legal move in `game`'s position as raw packed bits.
pub fn legal_moves_packed(game: &Game) -> Vec<u32> {
    movegen::legal_moves_packed(game)
}

/// Plays `mv` (which must be legal in `game`'s position) and returns the
/// resulting position.
pub fn make_move(game: &Game, mv: Move) -> Result<Game, ChessError> {
    game.make_move(mv)
}

/// Finds and plays the legal move from `from` to `to` (with `promotion` for
/// a promoting pawn move).
pub fn make_move_uci(
    game: &Game,
    from: SQ,
    to: SQ,
    promotion: Option<PieceKind>,
) -> Result<Game, ChessError> {
    game.make_move_uci(from, to, promotion)
}

/// Finds and plays the legal move from `from` to `to` (with `promotion` for
/// a promoting pawn move), validating that both indices are on-board first.
pub fn make_move_indices(
    game: &Game,
    from: u8,
    to: u8,
    promotion: Option<PieceKind>,
) -> Result<Game, ChessError> {
    game.make_move_indices(from, to, promotion)
}

/// Classifies `game`'s position as active, checkmate, stalemate, or drawn.
pub fn status(game: &Game) -> GameStatus {
    game.status()
}

/// Renders `game` as a full FEN string.
pub fn fen_of(game: &Game) -> String {
    game.fen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::{OPENING_POS_FEN, SAMPLE_FENS};

    #[test]
    fn new_game_round_trips_opening_fen() {
        let game = Game::new();
        assert_eq!(game.fen(), OPENING_POS_FEN);
    }

    #[test]
    fn from_fen_round_trips_kiwipete() {
        let fen = SAMPLE_FENS[1];
        let game = Game::from_fen(fen).unwrap();
        assert_eq!(game.fen(), fen);
    }

    #[test]
    fn double_pawn_push_sets_en_passant_square() {
        let game = Game::new();
        let mv = Move::quiet(SQ::E2, SQ::E4);
        let next = game.make_move(mv).unwrap();
        assert_eq!(next.en_passant, Some(SQ::E3));
    }

    #[test]
    fn capture_and_pawn_move_reset_halfmove_clock() {
        let game = Game::new();
        let next = game.make_move(Move::quiet(SQ::E2, SQ::E4)).unwrap();
        assert_eq!(next.halfmove_clock, 0);
        let next2 = next.make_move(Move::quiet(SQ::B8, SQ::C6)).unwrap();
        assert_eq!(next2.halfmove_clock, 1);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let game = Game::new();
        let bogus = Move::quiet(SQ::E2, SQ::E5);
        assert!(game.make_move(bogus).is_err());
    }

    #[test]
    fn zero_fullmove_number_is_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0";
        assert!(Game::from_fen(fen).is_err());
    }

    #[test]
    fn en_passant_square_off_rank_3_or_6_is_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e4 0 1";
        assert!(Game::from_fen(fen).is_err());
    }

    #[test]
    fn bare_kings_are_insufficient_material() {
        let game = Game::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").unwrap();
        assert!(game.insufficient_material());
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn same_color_bishops_are_insufficient_material() {
        let game = Game::from_fen("8/8/4k3/6b1/8/3K4/2B5/8 w - - 0 1").unwrap();
        assert!(game.insufficient_material());
    }

    #[test]
    fn opposite_color_bishops_are_not_insufficient_material() {
        let game = Game::from_fen("8/8/4k3/7b/8/3K4/2B5/8 w - - 0 1").unwrap();
        assert!(!game.insufficient_material());
    }

    #[test]
    fn twofold_repetition_is_not_yet_a_draw() {
        let mut game = Game::new();
        let shuffle =
            [(SQ::G1, SQ::F3), (SQ::G8, SQ::F6), (SQ::F3, SQ::G1), (SQ::F6, SQ::G8)];
        for (from, to) in shuffle {
            game = game.make_move_uci(from, to, None).unwrap();
        }
        assert!(!game.draw());
    }

    #[test]
    fn threefold_repetition_is_a_draw() {
        let mut game = Game::new();
        let shuffle = [
            (SQ::G1, SQ::F3),
            (SQ::G8, SQ::F6),
            (SQ::F3, SQ::G1),
            (SQ::F6, SQ::G8),
            (SQ::G1, SQ::F3),
            (SQ::G8, SQ::F6),
            (SQ::F3, SQ::G1),
            (SQ::F6, SQ::G8),
        ];
        for (from, to) in shuffle {
            game = game.make_move_uci(from, to, None).unwrap();
        }
        assert!(game.draw());
    }

    #[test]
    fn make_move_indices_accepts_on_board_squares() {
        let game = Game::new();
        let next = game.make_move_indices(SQ::E2.0, SQ::E4.0, None).unwrap();
        assert_eq!(next.en_passant, Some(SQ::E3));
    }

    #[test]
    fn make_move_indices_rejects_out_of_range_square() {
        let game = Game::new();
        let err = game.make_move_indices(SQ::E2.0, 64, None).unwrap_err();
        assert_eq!(err, ChessError::InvalidSquare(64));
    }
}
