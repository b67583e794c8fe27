//! # Checkers board and move generation
//!
//! This crate models an 8×8 checkers board on bitboards and generates moves for a single piece,
//! including chains of captures. The moves are returned as a [`MoveNode`] tree: each branch is one
//! step, and a capture which can be continued owns the subtree of the following captures.
//!
//! # Example
//!
//! ```
//! use checkers::{Board, Color, Kind, Piece, Square};
//!
//! let mut b = Board::initial();
//! b.remove(Square::new(6, 2));
//! b.set(Square::new(3, 3), Piece::new(Color::Dark, Kind::Man));
//!
//! let moves = b.get_moves(Square::new(2, 2), false);
//! assert_eq!(moves.to_string(), "(3,1)\n(4,4) -> (6,2)\n");
//!
//! let b = b.make_move(Square::new(2, 2), &[Square::new(4, 4), Square::new(6, 2)]).unwrap();
//! assert_eq!(b.count(Color::Dark), 10);
//! ```
//!
//! Kings don't move by default. To pick a king variant, pass [`Rules`] to
//! [`Board::get_moves_with()`].

pub use checkers_base::{bitboard, bitboard_consts, geometry, types};

pub mod between;
pub mod board;
pub mod movegen;
pub mod moves;
pub mod rules;
pub mod tree;

pub use bitboard::Bitboard;
pub use board::Board;
pub use moves::MoveError;
pub use rules::{KingRule, Rules, RulesArgsError};
pub use tree::{Branch, MoveNode};
pub use types::{Color, Kind, Piece, Square};
