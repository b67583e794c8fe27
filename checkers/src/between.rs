use crate::bitboard::Bitboard;
use crate::types::Square;

/// Returns the squares strictly between `src` and `dst`
///
/// If `src` and `dst` don't lie on one diagonal, the result is empty.
pub fn diag_strict(src: Square, dst: Square) -> Bitboard {
    let d_row = dst.row() as isize - src.row() as isize;
    let d_col = dst.col() as isize - src.col() as isize;
    if d_row.abs() != d_col.abs() {
        return Bitboard::EMPTY;
    }
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut res = Bitboard::EMPTY;
    let mut cur = src;
    while let Some(next) = cur.try_shift(step_row, step_col) {
        if next == dst {
            break;
        }
        res.set(next);
        cur = next;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diag() {
        let res = Bitboard::EMPTY
            .with(Square::new(3, 3))
            .with(Square::new(4, 4));
        assert_eq!(diag_strict(Square::new(2, 2), Square::new(5, 5)), res);
        assert_eq!(diag_strict(Square::new(5, 5), Square::new(2, 2)), res);

        let res = Bitboard::EMPTY.with(Square::new(5, 1));
        assert_eq!(diag_strict(Square::new(6, 0), Square::new(4, 2)), res);
        assert_eq!(diag_strict(Square::new(4, 2), Square::new(6, 0)), res);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(
            diag_strict(Square::new(2, 2), Square::new(3, 3)),
            Bitboard::EMPTY
        );
        assert_eq!(
            diag_strict(Square::new(2, 2), Square::new(2, 2)),
            Bitboard::EMPTY
        );
        assert_eq!(
            diag_strict(Square::new(2, 2), Square::new(2, 6)),
            Bitboard::EMPTY
        );
        assert_eq!(
            diag_strict(Square::new(0, 0), Square::new(3, 5)),
            Bitboard::EMPTY
        );
    }
}
