use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 8;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("expected square in parentheses")]
    NoParens,
    #[error("expected comma between row and column")]
    NoComma,
    #[error("bad row number")]
    BadRow,
    #[error("bad column number")]
    BadCol,
    #[error("row {0} is out of board")]
    RowOutOfRange(usize),
    #[error("column {0} is out of board")]
    ColOutOfRange(usize),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Square on the board
///
/// Rows and columns are numbered from 0 to 7. Row 0 is the home row of [`Color::Light`], row 7 is
/// the home row of [`Color::Dark`]. The flat index of a square is `row * 8 + col`, and it is used
/// as the bit position in a [`Bitboard`](crate::bitboard::Bitboard).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from its row and column
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` doesn't lie in `0..8`.
    pub const fn new(row: usize, col: usize) -> Square {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square coordinates must be between 0 and 7"
        );
        Square((row * BOARD_SIZE + col) as u8)
    }

    /// Creates a square from signed coordinates, returning `None` if it is off the board
    pub const fn try_new(row: isize, col: isize) -> Option<Square> {
        if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
            return None;
        }
        Some(Square::new(row as usize, col as usize))
    }

    pub const fn from_index(val: usize) -> Square {
        assert!(val < 64, "square index must be between 0 and 63");
        Square(val as u8)
    }

    pub(crate) const fn from_index_unchecked(val: u8) -> Square {
        Square(val)
    }

    pub const fn row(&self) -> usize {
        (self.0 >> 3) as usize
    }

    pub const fn col(&self) -> usize {
        (self.0 & 7) as usize
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Moves the square by the given deltas
    ///
    /// The arithmetic is done on signed values, so stepping off any edge of the board yields `None`
    /// instead of wrapping to the opposite edge.
    pub const fn try_shift(self, delta_row: isize, delta_col: isize) -> Option<Square> {
        Square::try_new(
            self.row() as isize + delta_row,
            self.col() as isize + delta_col,
        )
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Square{}", self);
        }
        write!(f, "Square(?{:?})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "({},{})", self.row(), self.col())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type Error = SquareParseError;
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or(Error::NoParens)?;
        let (row, col) = inner.split_once(',').ok_or(Error::NoComma)?;
        let row: usize = row.trim().parse().map_err(|_| Error::BadRow)?;
        let col: usize = col.trim().parse().map_err(|_| Error::BadCol)?;
        if row >= BOARD_SIZE {
            return Err(Error::RowOutOfRange(row));
        }
        if col >= BOARD_SIZE {
            return Err(Error::ColOutOfRange(col));
        }
        Ok(Square::new(row, col))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Man = 0,
    King = 1,
}

/// Piece on the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    pub const fn new(color: Color, kind: Kind) -> Piece {
        Piece { color, kind }
    }

    pub const fn is_king(&self) -> bool {
        matches!(self.kind, Kind::King)
    }

    /// Returns the same piece promoted to a king
    pub const fn crowned(self) -> Piece {
        Piece::new(self.color, Kind::King)
    }

    pub fn as_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::Light, Kind::Man) => 'w',
            (Color::Light, Kind::King) => 'W',
            (Color::Dark, Kind::Man) => 'b',
            (Color::Dark, Kind::King) => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let color = match c.to_ascii_lowercase() {
            'w' => Color::Light,
            'b' => Color::Dark,
            _ => return None,
        };
        let kind = if c.is_ascii_uppercase() {
            Kind::King
        } else {
            Kind::Man
        };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Piece::from_char(ch).ok_or(PieceParseError::UnexpectedChar(ch)),
            _ => Err(PieceParseError::BadLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let mut squares = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col);
                assert_eq!(sq.row(), row);
                assert_eq!(sq.col(), col);
                assert_eq!(sq.index(), row * 8 + col);
                squares.push(sq);
            }
        }
        assert_eq!(squares, Square::iter().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic]
    fn test_square_out_of_range() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn test_shift() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.try_shift(-1, 1), None);
        assert_eq!(sq.try_shift(1, -1), None);
        assert_eq!(sq.try_shift(1, 1), Some(Square::new(1, 1)));

        let sq = Square::new(3, 7);
        assert_eq!(sq.try_shift(1, 1), None);
        assert_eq!(sq.try_shift(-1, -1), Some(Square::new(2, 6)));
        assert_eq!(sq.try_shift(2, -2), Some(Square::new(5, 5)));

        let sq = Square::new(7, 4);
        assert_eq!(sq.try_shift(1, 1), None);
        assert_eq!(sq.try_shift(-7, -4), Some(Square::new(0, 0)));

        assert_eq!(Square::try_new(-1, 3), None);
        assert_eq!(Square::try_new(3, 8), None);
        assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
    }

    #[test]
    fn test_square_str() {
        assert_eq!(Square::new(2, 5).to_string(), "(2,5)");
        assert_eq!(format!("{:?}", Square::new(0, 7)), "Square(0,7)");
        assert_eq!(Square::from_str("(2,5)"), Ok(Square::new(2, 5)));
        assert_eq!(Square::from_str(" ( 7 , 0 ) "), Ok(Square::new(7, 0)));
        assert_eq!(Square::from_str("2,5"), Err(SquareParseError::NoParens));
        assert_eq!(Square::from_str("(25)"), Err(SquareParseError::NoComma));
        assert_eq!(Square::from_str("(x,5)"), Err(SquareParseError::BadRow));
        assert_eq!(Square::from_str("(1,-5)"), Err(SquareParseError::BadCol));
        assert_eq!(
            Square::from_str("(8,5)"),
            Err(SquareParseError::RowOutOfRange(8))
        );
        assert_eq!(
            Square::from_str("(1,9)"),
            Err(SquareParseError::ColOutOfRange(9))
        );
    }

    #[test]
    fn test_piece() {
        for color in [Color::Light, Color::Dark] {
            for kind in [Kind::Man, Kind::King] {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_char(piece.as_char()), Some(piece));
                assert_eq!(Piece::from_str(&piece.to_string()), Ok(piece));
                assert_eq!(piece.is_king(), kind == Kind::King);
                assert!(piece.crowned().is_king());
                assert_eq!(piece.crowned().color, color);
            }
        }
        assert_eq!(Piece::from_char('.'), None);
        assert_eq!(Piece::from_str("x"), Err(PieceParseError::UnexpectedChar('x')));
        assert_eq!(Piece::from_str("wb"), Err(PieceParseError::BadLength));
        assert_eq!(Piece::from_str(""), Err(PieceParseError::BadLength));
    }

    #[test]
    fn test_color() {
        assert_eq!(Color::Light.inv(), Color::Dark);
        assert_eq!(Color::Dark.inv(), Color::Light);
        assert_eq!(Color::Light.as_char(), 'w');
        assert_eq!(Color::Dark.as_char(), 'b');
    }
}
