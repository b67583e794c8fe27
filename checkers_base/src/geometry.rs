use crate::types::Color;

/// Diagonal direction as a pair of row and column deltas
pub type Direction = (isize, isize);

pub const fn forward_delta(c: Color) -> isize {
    match c {
        Color::Light => 1,
        Color::Dark => -1,
    }
}

/// Row on which a man of color `c` gets crowned
pub const fn crown_row(c: Color) -> usize {
    match c {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Forward diagonals for a man, left one first
pub const fn man_directions(c: Color) -> [Direction; 2] {
    let dr = forward_delta(c);
    [(dr, -1), (dr, 1)]
}

/// All four diagonals: forward-left, forward-right, backward-left, backward-right
pub const fn king_directions(c: Color) -> [Direction; 4] {
    let dr = forward_delta(c);
    [(dr, -1), (dr, 1), (-dr, -1), (-dr, 1)]
}
