//! Board and related things

use crate::bitboard::Bitboard;
use crate::moves::{self, MoveError};
use crate::rules::Rules;
use crate::tree::MoveNode;
use crate::types::{Color, Kind, Piece, Square, BOARD_SIZE};
use crate::{bitboard_consts, movegen};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing [`Board`] from its text form
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum BoardParseError {
    /// Row is too long
    #[error("too many items in row {0}")]
    RowOverflow(usize),
    /// Row is too short
    #[error("not enough items in row {0}")]
    RowUnderflow(usize),
    /// Too many rows
    #[error("too many rows")]
    Overflow,
    /// Not enough rows
    #[error("not enough rows")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Checkers board
///
/// The board keeps three bitboards: squares with light pieces, squares with dark pieces, and
/// squares with kings. Light and dark squares never intersect, and each king square is occupied by
/// a piece of exactly one color. All the mutating functions preserve this.
///
/// The board is `Copy`, so making a modified copy for a hypothetical move is cheap and never
/// affects the original.
///
/// # Example
///
/// ```
/// # use checkers::{Board, Color, Kind, Piece, Square};
/// #
/// let mut b = Board::initial();
/// assert_eq!(b.get(Square::new(2, 2)), Some(Piece::new(Color::Light, Kind::Man)));
/// assert!(b.is_empty(Square::new(3, 3)));
///
/// b.remove(Square::new(2, 2));
/// b.set(Square::new(3, 3), Piece::new(Color::Dark, Kind::King));
///
/// let res = r#"
/// .b.b.b.b
/// b.b.b.b.
/// .b.b.b.b
/// ........
/// ...B....
/// w...w.w.
/// .w.w.w.w
/// w.w.w.w.
/// "#;
/// assert_eq!(b.to_display_string(), res.trim_start());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    light: Bitboard,
    dark: Bitboard,
    kings: Bitboard,
}

impl Board {
    /// Returns a board without pieces
    #[inline]
    pub const fn empty() -> Board {
        Board {
            light: Bitboard::EMPTY,
            dark: Bitboard::EMPTY,
            kings: Bitboard::EMPTY,
        }
    }

    /// Returns a board with the initial position
    #[inline]
    pub const fn initial() -> Board {
        Board {
            light: bitboard_consts::LIGHT_START,
            dark: bitboard_consts::DARK_START,
            kings: Bitboard::EMPTY,
        }
    }

    /// Parses a board from its text form
    ///
    /// Does the same as [`Board::from_str`]. The expected format is the one produced by
    /// [`Board::to_display_string()`].
    pub fn from_text(s: &str) -> Result<Board, BoardParseError> {
        Board::from_str(s)
    }

    /// Returns the piece on the square `sq`
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        let color = if self.light.has(sq) {
            Color::Light
        } else if self.dark.has(sq) {
            Color::Dark
        } else {
            return None;
        };
        let kind = if self.kings.has(sq) {
            Kind::King
        } else {
            Kind::Man
        };
        Some(Piece::new(color, kind))
    }

    /// Returns `true` if there is no piece on the square `sq`
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.light.has(sq) && !self.dark.has(sq)
    }

    /// Puts `piece` to the square `sq`, replacing whatever was there before
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        match piece.color {
            Color::Light => {
                self.light.set(sq);
                self.dark.unset(sq);
            }
            Color::Dark => {
                self.dark.set(sq);
                self.light.unset(sq);
            }
        }
        match piece.kind {
            Kind::King => self.kings.set(sq),
            Kind::Man => self.kings.unset(sq),
        }
    }

    /// Removes the piece from the square `sq`
    ///
    /// Does nothing if the square is already empty.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.light.unset(sq);
        self.dark.unset(sq);
        self.kings.unset(sq);
    }

    /// Returns the bitboard over all the pieces with color `c`
    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        match c {
            Color::Light => self.light,
            Color::Dark => self.dark,
        }
    }

    /// Returns the bitboard over all the kings of both colors
    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.kings
    }

    /// Returns the bitboard over all the occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.light | self.dark
    }

    /// Returns the number of pieces with color `c`
    #[inline]
    pub fn count(&self, c: Color) -> u32 {
        self.color(c).popcount()
    }

    /// Returns the number of pieces with color `c` and kind `k`
    #[inline]
    pub fn count_kind(&self, c: Color, k: Kind) -> u32 {
        match k {
            Kind::King => (self.color(c) & self.kings).popcount(),
            Kind::Man => (self.color(c) & !self.kings).popcount(),
        }
    }

    /// Generates the move tree for the piece on `origin` with the default [`Rules`]
    ///
    /// If `must_jump` is `true`, only captures are generated. This is used for the continuation of
    /// a capture chain.
    ///
    /// Returns an empty tree if `origin` is empty. See [`movegen::gen_moves`] for details.
    #[inline]
    pub fn get_moves(&self, origin: Square, must_jump: bool) -> MoveNode {
        movegen::gen_moves(self, &Rules::default(), origin, must_jump)
    }

    /// Generates the move tree for the piece on `origin` with the given `rules`
    #[inline]
    pub fn get_moves_with(&self, rules: &Rules, origin: Square, must_jump: bool) -> MoveNode {
        movegen::gen_moves(self, rules, origin, must_jump)
    }

    /// Moves the piece on `origin` along `path` with the default [`Rules`]
    ///
    /// See [`moves::make_path`] for details.
    #[inline]
    pub fn make_move(&self, origin: Square, path: &[Square]) -> Result<Board, MoveError> {
        moves::make_path(self, &Rules::default(), origin, path)
    }

    /// Moves the piece on `origin` along `path` with the given `rules`
    #[inline]
    pub fn make_move_with(
        &self,
        rules: &Rules,
        origin: Square,
        path: &[Square],
    ) -> Result<Board, MoveError> {
        moves::make_path(self, rules, origin, path)
    }

    /// Renders the board as text
    ///
    /// Does the same as `Board::to_string()`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Wraps the board to allow pretty-printing with row and column numbers
    ///
    /// # Example
    ///
    /// ```
    /// # use checkers::Board;
    /// #
    /// let res = r#"
    /// 7|.b.b.b.b
    /// 6|b.b.b.b.
    /// 5|.b.b.b.b
    /// 4|........
    /// 3|........
    /// 2|w.w.w.w.
    /// 1|.w.w.w.w
    /// 0|w.w.w.w.
    /// -+--------
    ///  |01234567
    /// "#;
    /// let pretty = Board::initial().pretty().to_string();
    /// assert_eq!(pretty.trim_matches('\n'), res.trim_matches('\n'));
    /// ```
    #[inline]
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty { board: self }
    }

    fn fmt_row(&self, f: &mut fmt::Formatter<'_>, row: usize) -> Result<(), fmt::Error> {
        for col in 0..BOARD_SIZE {
            match self.get(Square::new(row, col)) {
                Some(piece) => write!(f, "{}", piece)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (0..BOARD_SIZE).rev() {
            self.fmt_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        type Error = BoardParseError;

        let mut res = Board::empty();
        let mut rows = 0;
        for line in s.lines() {
            if rows == BOARD_SIZE {
                return Err(Error::Overflow);
            }
            let row = BOARD_SIZE - 1 - rows;
            let mut col = 0;
            for ch in line.chars() {
                if col == BOARD_SIZE {
                    return Err(Error::RowOverflow(row));
                }
                if ch != '.' {
                    let piece = Piece::from_char(ch).ok_or(Error::UnexpectedChar(ch))?;
                    res.set(Square::new(row, col), piece);
                }
                col += 1;
            }
            if col < BOARD_SIZE {
                return Err(Error::RowUnderflow(row));
            }
            rows += 1;
        }
        if rows < BOARD_SIZE {
            return Err(Error::Underflow);
        }
        Ok(res)
    }
}

/// Wrapper to pretty-print the board
///
/// See [`Board::pretty()`] for details.
pub struct Pretty<'a> {
    board: &'a Board,
}

impl<'a> fmt::Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{}|", row)?;
            self.board.fmt_row(f, row)?;
            writeln!(f)?;
        }
        writeln!(f, "-+--------")?;
        writeln!(f, " |01234567")?;
        Ok(())
    }
}
