use crate::bitboard::Bitboard;

const ROW: [Bitboard; 8] = [
    Bitboard::from_raw(0x00000000000000ff),
    Bitboard::from_raw(0x000000000000ff00),
    Bitboard::from_raw(0x0000000000ff0000),
    Bitboard::from_raw(0x00000000ff000000),
    Bitboard::from_raw(0x000000ff00000000),
    Bitboard::from_raw(0x0000ff0000000000),
    Bitboard::from_raw(0x00ff000000000000),
    Bitboard::from_raw(0xff00000000000000),
];

pub const fn row(r: usize) -> Bitboard {
    ROW[r]
}

/// Squares the pieces stand on in the standard game
pub const PLAYABLE: Bitboard = Bitboard::from_raw(0xaa55aa55aa55aa55);

pub const LIGHT_START: Bitboard = Bitboard::from_raw(0x000000000055aa55);
pub const DARK_START: Bitboard = Bitboard::from_raw(0xaa55aa0000000000);
