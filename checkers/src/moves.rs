//! Applying moves to the board

use crate::board::Board;
use crate::rules::Rules;
use crate::types::{Kind, Square};
use crate::{between, bitboard_consts, geometry};

use log::debug;
use thiserror::Error;

/// Error applying a move
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// There is no piece on the origin square
    #[error("no piece on {0}")]
    EmptyOrigin(Square),
    /// The path contains no squares
    #[error("empty path")]
    EmptyPath,
    /// The path is not a complete move from the move tree
    #[error("path is not a legal move")]
    NotLegal,
}

/// Moves the piece on `origin` along `path` and returns the resulting board
///
/// `path` lists the squares the piece visits, not including `origin`. It must be a complete move,
/// i.e. lead from the root of the tree returned by [`Board::get_moves_with()`] to one of its
/// leaves. All the pieces jumped over are removed. A man which finishes its move on the farthest
/// row is crowned.
///
/// The original board is not modified.
///
/// # Example
///
/// ```
/// # use checkers::{Board, Color, Kind, Piece, Square};
/// #
/// let mut b = Board::initial();
/// b.remove(Square::new(6, 2));
/// b.set(Square::new(3, 3), Piece::new(Color::Dark, Kind::Man));
///
/// let res = b.make_move(Square::new(2, 2), &[Square::new(4, 4), Square::new(6, 2)]).unwrap();
/// assert_eq!(res.count(Color::Dark), 10);
/// assert_eq!(res.get(Square::new(6, 2)), Some(Piece::new(Color::Light, Kind::Man)));
/// assert!(res.is_empty(Square::new(2, 2)));
///
/// assert!(b.make_move(Square::new(2, 2), &[Square::new(4, 4)]).is_err());
/// ```
pub fn make_path(
    b: &Board,
    rules: &Rules,
    origin: Square,
    path: &[Square],
) -> Result<Board, MoveError> {
    let piece = b.get(origin).ok_or(MoveError::EmptyOrigin(origin))?;
    let dst = *path.last().ok_or(MoveError::EmptyPath)?;
    if !b.get_moves_with(rules, origin, false).contains(path) {
        return Err(MoveError::NotLegal);
    }

    let mut res = *b;
    let mut captured = 0;
    let mut cur = origin;
    for &next in path {
        let jumped = between::diag_strict(cur, next) & res.color(piece.color.inv());
        for sq in jumped {
            res.remove(sq);
            captured += 1;
        }
        cur = next;
    }
    res.remove(origin);

    let crown = bitboard_consts::row(geometry::crown_row(piece.color));
    let piece = if piece.kind == Kind::Man && crown.has(dst) {
        piece.crowned()
    } else {
        piece
    };
    res.set(dst, piece);

    debug!("moved {} from {} to {}, captured {}", piece, origin, dst, captured);
    Ok(res)
}
