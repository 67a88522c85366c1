//! A bitboard chess rules engine: legal move generation via the check-mask
//! and pin-mask technique, incremental position state, Zobrist hashing, and
//! FEN support.
//!
//! This crate is deliberately narrow. It enumerates legal moves, applies
//! them, and classifies terminal game states; it does not search, evaluate,
//! or speak any engine-to-engine protocol.
//!
//! # Examples
//!
//! You can create a [`Game`] with the starting position like so:
//!
//! ```
//! use chess_rules::Game;
//! let game = Game::new();
//! ```
//!
//! Generating the list of legal moves (contained inside a [`MoveList`]) can
//! be done with:
//!
//! ```
//! use chess_rules::Game;
//! use chess_rules::movegen::legal_moves;
//!
//! let game = Game::new();
//! let list = legal_moves(&game);
//! assert_eq!(list.len(), 20);
//! ```
//!
//! Applying a move returns a new, independent [`Game`] rather than mutating
//! in place:
//!
//! ```
//! use chess_rules::Game;
//! use chess_rules::movegen::legal_moves;
//!
//! let game = Game::new();
//! let list = legal_moves(&game);
//! let next = game.make_move(list[0]).unwrap();
//! assert_ne!(next.zobrist_hash(), game.zobrist_hash());
//! ```
//!
//! Using FEN strings is also supported:
//!
//! ```
//! use chess_rules::Game;
//! let start_position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let game = Game::from_fen(start_position).unwrap();
//! ```
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Game`]: game/struct.Game.html

#![deny(unused_must_use)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod helper;
pub mod movegen;
pub mod perft;
pub mod tools;

pub use board::Board;
pub use core::bitboard::BitBoard;
pub use core::move_list::MoveList;
pub use core::piece_move::{Move, Special};
pub use core::sq::SQ;
pub use core::{Color, Piece, PieceKind};
pub use error::ChessError;
pub use game::{
    fen_of, legal_moves, legal_moves_packed, make_move, make_move_indices, make_move_uci, new_game,
    new_game_from_fen, status, Game, GameStatus,
};
