//! Legal-move generation.
//!
//! Unlike the teacher's `board/movegen.rs`, which generates pseudo-legal
//! moves per piece type and then filters each one post-hoc through
//! `legal_move()`, this generator is legal-by-construction: it first works
//! out the check mask and a per-square pin mask, then ANDs every piece's
//! raw attack set against them before a move is ever built. No move this
//! module produces is ever thrown away by a later legality check.
//!
//! The algorithm, piece by piece:
//! 1. Find the checkers: every enemy piece attacking the king.
//! 2. Compute every square the enemy attacks with the king removed from
//!    occupancy (so a slider's ray through the king's square still "sees"
//!    past it) — these are the squares the king may not step to.
//! 3. Two or more checkers: only king moves are legal, nothing else can
//!    resolve a double check.
//! 4. One checker: moves must land on `check_mask`, the squares between the
//!    king and the checker plus the checker's own square. No checker: every
//!    square is fair game.
//! 5. Pin mask: X-ray each of the king's rook/bishop rays through the
//!    board's own pieces (but not the enemy's) to find a potential pinner
//!    on the far side of exactly one friendly piece; that piece may only
//!    move along the pinning ray.
//! 6. Every piece's destination set is `raw_attacks & !own_occupancy &
//!    check_mask & pin_mask[from]`.

use crate::board::castle_rights::Castling;
use crate::board::Board;
use crate::core::bitboard::BitBoard;
use crate::core::mono_traits::ColorTrait;
use crate::core::move_list::MoveList;
use crate::core::piece_move::Move;
use crate::core::sq::SQ;
use crate::core::{Color, PieceKind, Rank};
use crate::game::Game;
use crate::helper::boards::{between_bb, king_moves, knight_moves, pawn_attacks_from};
use crate::helper::magic::{bishop_attacks, queen_attacks, rook_attacks};

/// Where generated moves go. `MoveList` collects everything; `FirstMoveOnly`
/// stops the walk the instant one move is offered, which is all
/// [`has_any_legal_move`] needs to answer checkmate/stalemate without
/// paying for a full move list every time.
trait MoveSink {
    /// Offers `mv` to the sink. Returns whether generation should continue.
    fn offer(&mut self, mv: Move) -> bool;
}

impl MoveSink for MoveList {
    #[inline]
    fn offer(&mut self, mv: Move) -> bool {
        self.push(mv);
        true
    }
}

#[derive(Default)]
struct FirstMoveOnly {
    found: bool,
}

impl MoveSink for FirstMoveOnly {
    #[inline]
    fn offer(&mut self, _mv: Move) -> bool {
        self.found = true;
        false
    }
}

/// Returns every legal move in `game`'s position.
pub fn legal_moves(game: &Game) -> MoveList {
    let mut list = MoveList::default();
    match game.side_to_move {
        Color::White => generate::<crate::core::mono_traits::WhiteType, _>(game, &mut list),
        Color::Black => generate::<crate::core::mono_traits::BlackType, _>(game, &mut list),
    }
    list
}

/// Returns every legal move in `game`'s position as raw packed bits, for
/// callers outside this crate that don't want to depend on [`Move`]'s type.
pub fn legal_moves_packed(game: &Game) -> Vec<u32> {
    legal_moves(game).iter().map(|mv| mv.to_bits()).collect()
}

/// Whether `game`'s side to move has at least one legal move, without
/// materializing the full list. Used by [`crate::game::Game::checkmate`]
/// and [`crate::game::Game::stalemate`], which only ever need a yes/no.
pub fn has_any_legal_move(game: &Game) -> bool {
    let mut sink = FirstMoveOnly::default();
    match game.side_to_move {
        Color::White => generate::<crate::core::mono_traits::WhiteType, _>(game, &mut sink),
        Color::Black => generate::<crate::core::mono_traits::BlackType, _>(game, &mut sink),
    }
    sink.found
}

fn generate<C: ColorTrait, S: MoveSink>(game: &Game, sink: &mut S) {
    let board = &game.board;
    let us = C::color();
    let them = C::opp_color();
    let own_occ = board.occ(us).0;
    let their_occ = board.occ(them).0;
    let all_occ = board.occ_all().0;
    let king_sq = board.king_square(us);

    let checkers = board.attackers_to(king_sq, BitBoard(all_occ)).0 & their_occ;
    let num_checkers = BitBoard(checkers).count_bits();

    let occ_without_king = all_occ & !king_sq.to_bb().0;
    let danger = danger_squares(board, them, occ_without_king);

    let king_targets = king_moves(king_sq) & !own_occ & !danger;
    for to in BitBoard(king_targets) {
        if !sink.offer(Move::quiet(king_sq, to)) {
            return;
        }
    }

    if num_checkers >= 2 {
        // Double check: only the king can move.
        return;
    }

    let check_mask: u64 = if num_checkers == 1 {
        let checker_sq = BitBoard(checkers).to_sq();
        between_bb(king_sq, checker_sq) | checker_sq.to_bb().0
    } else {
        !0u64
    };

    let pin_mask = compute_pin_mask(board, us, them, king_sq, own_occ, their_occ);

    // Knights: a pinned knight never has a legal move along its own pin ray,
    // since none of its jumps stay on that ray.
    for from in BitBoard(board.piece_bb(us, PieceKind::Knight).0) {
        if pin_mask[from.0 as usize] != !0u64 {
            continue;
        }
        let targets = knight_moves(from) & !own_occ & check_mask;
        if !offer_all(sink, from, targets) {
            return;
        }
    }

    for from in BitBoard(board.piece_bb(us, PieceKind::Bishop).0) {
        let targets = bishop_attacks(all_occ, from.0) & !own_occ & check_mask & pin_mask[from.0 as usize];
        if !offer_all(sink, from, targets) {
            return;
        }
    }
    for from in BitBoard(board.piece_bb(us, PieceKind::Rook).0) {
        let targets = rook_attacks(all_occ, from.0) & !own_occ & check_mask & pin_mask[from.0 as usize];
        if !offer_all(sink, from, targets) {
            return;
        }
    }
    for from in BitBoard(board.piece_bb(us, PieceKind::Queen).0) {
        let targets = queen_attacks(all_occ, from.0) & !own_occ & check_mask & pin_mask[from.0 as usize];
        if !offer_all(sink, from, targets) {
            return;
        }
    }

    if !generate_pawn_moves::<C, S>(board, us, all_occ, their_occ, check_mask, &pin_mask, sink) {
        return;
    }

    if let Some(ep_sq) = game.en_passant {
        if !generate_en_passant::<C, S>(board, us, them, king_sq, all_occ, check_mask, &pin_mask, ep_sq, sink)
        {
            return;
        }
    }

    if num_checkers == 0 {
        generate_castling::<S>(board, game.castling, us, BitBoard(danger), BitBoard(all_occ), sink);
    }
}

/// Pushes one move per set bit of `targets`, stopping (and reporting it
/// upstream) the moment the sink asks to stop.
fn offer_all<S: MoveSink>(sink: &mut S, from: SQ, targets: u64) -> bool {
    for to in BitBoard(targets) {
        if !sink.offer(Move::quiet(from, to)) {
            return false;
        }
    }
    true
}

/// Every square `by` attacks, with `occ` as the occupancy a slider's ray is
/// cast against (the caller removes the defending king from it so the ray
/// doesn't stop short at the square the king is trying to flee).
fn danger_squares(board: &Board, by: Color, occ: u64) -> u64 {
    let mut danger = 0u64;
    for from in BitBoard(board.piece_bb(by, PieceKind::Pawn).0) {
        danger |= pawn_attacks_from(from, by);
    }
    for from in BitBoard(board.piece_bb(by, PieceKind::Knight).0) {
        danger |= knight_moves(from);
    }
    for from in BitBoard(board.piece_bb(by, PieceKind::Bishop).0) {
        danger |= bishop_attacks(occ, from.0);
    }
    for from in BitBoard(board.piece_bb(by, PieceKind::Rook).0) {
        danger |= rook_attacks(occ, from.0);
    }
    for from in BitBoard(board.piece_bb(by, PieceKind::Queen).0) {
        danger |= queen_attacks(occ, from.0);
    }
    for from in BitBoard(board.piece_bb(by, PieceKind::King).0) {
        danger |= king_moves(from);
    }
    danger
}

/// Builds the per-square pin mask: `pin_mask[sq] == !0` if the piece at `sq`
/// is not pinned (free to move anywhere else allows), otherwise a bitboard
/// of the squares along the pinning ray (the segment between king and
/// pinner, plus the pinner's own square) that it may still move to.
fn compute_pin_mask(
    board: &Board,
    us: Color,
    them: Color,
    king_sq: SQ,
    own_occ: u64,
    their_occ: u64,
) -> [u64; 64] {
    let mut pin_mask = [!0u64; 64];

    let enemy_rook_queen =
        board.piece_bb(them, PieceKind::Rook).0 | board.piece_bb(them, PieceKind::Queen).0;
    let enemy_bishop_queen =
        board.piece_bb(them, PieceKind::Bishop).0 | board.piece_bb(them, PieceKind::Queen).0;

    // Casting the king's ray through only the enemy's occupancy lets it
    // pass straight through our own pieces, so a pinner standing beyond one
    // of them is still found; any other enemy piece blocking first still
    // stops the ray, which is correct since it can't be a pinner itself.
    let rook_candidates = rook_attacks(their_occ, king_sq.0) & enemy_rook_queen;
    let bishop_candidates = bishop_attacks(their_occ, king_sq.0) & enemy_bishop_queen;

    for pinner in BitBoard(rook_candidates | bishop_candidates) {
        let between = between_bb(king_sq, pinner);
        let blockers = between & own_occ;
        if BitBoard(blockers).count_bits() == 1 {
            let pinned_sq = BitBoard(blockers).to_sq();
            pin_mask[pinned_sq.0 as usize] = between | pinner.to_bb().0;
        }
    }

    pin_mask
}

fn promotion_rank_bb(us: Color) -> u64 {
    us.promotion_rank().bb().0
}

fn single_push_rank(us: Color) -> Rank {
    match us {
        Color::White => Rank::R3,
        Color::Black => Rank::R6,
    }
}

fn push_pawn_destination<S: MoveSink>(sink: &mut S, from: SQ, to: SQ, us: Color) -> bool {
    if to.to_bb().0 & promotion_rank_bb(us) != 0 {
        for &kind in &[PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
            if !sink.offer(Move::promotion(from, to, kind)) {
                return false;
            }
        }
        true
    } else {
        sink.offer(Move::quiet(from, to))
    }
}

fn generate_pawn_moves<C: ColorTrait, S: MoveSink>(
    board: &Board,
    us: Color,
    all_occ: u64,
    their_occ: u64,
    check_mask: u64,
    pin_mask: &[u64; 64],
    sink: &mut S,
) -> bool {
    let pawns = board.piece_bb(us, PieceKind::Pawn).0;
    let empty = !all_occ;

    let single_push_targets = C::shift_up(BitBoard(pawns)).0 & empty;
    for to in BitBoard(single_push_targets) {
        let from = C::down(to);
        if check_mask & pin_mask[from.0 as usize] & to.to_bb().0 == 0 {
            continue;
        }
        if !push_pawn_destination(sink, from, to, us) {
            return false;
        }
    }

    let double_push_origin = single_push_targets & single_push_rank(us).bb().0;
    let double_push_targets = C::shift_up(BitBoard(double_push_origin)).0 & empty;
    for to in BitBoard(double_push_targets) {
        let from = C::down(C::down(to));
        if check_mask & pin_mask[from.0 as usize] & to.to_bb().0 == 0 {
            continue;
        }
        if !sink.offer(Move::quiet(from, to)) {
            return false;
        }
    }

    for from in BitBoard(pawns) {
        let targets =
            pawn_attacks_from(from, us) & their_occ & check_mask & pin_mask[from.0 as usize];
        for to in BitBoard(targets) {
            if !push_pawn_destination(sink, from, to, us) {
                return false;
            }
        }
    }

    true
}

/// En-passant capture, gated by the three-part guard: the capture must
/// resolve any existing check, must not move a pinned pawn off its ray, and
/// must not expose the king to a rook/queen along the rank once both the
/// capturing pawn and the captured pawn leave it (the "horizontal
/// discovery" case — a king and two pawns on the same rank as an enemy
/// rook, where removing both pawns in one move opens a check no ordinary
/// pin check would catch since neither pawn alone was pinned).
fn generate_en_passant<C: ColorTrait, S: MoveSink>(
    board: &Board,
    us: Color,
    them: Color,
    king_sq: SQ,
    all_occ: u64,
    check_mask: u64,
    pin_mask: &[u64; 64],
    ep_sq: SQ,
    sink: &mut S,
) -> bool {
    let captured_sq = C::down(ep_sq);
    let from_candidates = pawn_attacks_from(ep_sq, them) & board.piece_bb(us, PieceKind::Pawn).0;

    for from in BitBoard(from_candidates) {
        if check_mask & (ep_sq.to_bb().0 | captured_sq.to_bb().0) == 0 {
            continue;
        }
        if pin_mask[from.0 as usize] & ep_sq.to_bb().0 == 0 {
            continue;
        }
        let occ_after = (all_occ & !from.to_bb().0 & !captured_sq.to_bb().0) | ep_sq.to_bb().0;
        let enemy_rook_queen =
            board.piece_bb(them, PieceKind::Rook).0 | board.piece_bb(them, PieceKind::Queen).0;
        if rook_attacks(occ_after, king_sq.0) & enemy_rook_queen != 0 {
            continue;
        }
        if !sink.offer(Move::en_passant(from, ep_sq)) {
            return false;
        }
    }
    true
}

fn generate_castling<S: MoveSink>(
    board: &Board,
    castling: Castling,
    us: Color,
    danger: BitBoard,
    all_occ: BitBoard,
    sink: &mut S,
) {
    use crate::core::masks::{CASTLING_KING_PATH, CASTLING_PATH};
    use crate::core::CastleSide;

    let king_from = board.king_square(us);
    for &(side, king_side) in &[(CastleSide::KingSide, true), (CastleSide::QueenSide, false)] {
        if !castling.can_castle(us, side) {
            continue;
        }
        let path_mask = CASTLING_PATH[us as usize][side as usize];
        if all_occ.0 & path_mask != 0 {
            continue;
        }
        let king_path_mask = CASTLING_KING_PATH[us as usize][side as usize];
        if danger.0 & king_path_mask != 0 {
            continue;
        }
        let king_to = match (us, side) {
            (Color::White, CastleSide::KingSide) => SQ::G1,
            (Color::White, CastleSide::QueenSide) => SQ::C1,
            (Color::Black, CastleSide::KingSide) => SQ::G8,
            (Color::Black, CastleSide::QueenSide) => SQ::C8,
        };
        if !sink.offer(Move::castle(king_from, king_to, king_side)) {
            return;
        }
    }
}
