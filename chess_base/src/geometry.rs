use crate::types::Color;

/// Row delta of a single pawn step
pub const fn pawn_direction(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Row from which a pawn may advance by two squares
pub const fn pawn_start_row(c: Color) -> u8 {
    match c {
        Color::White => 2,
        Color::Black => 7,
    }
}

/// Row on which a pawn of color `c` is promoted
pub const fn promote_row(c: Color) -> u8 {
    match c {
        Color::White => 8,
        Color::Black => 1,
    }
}

pub const fn home_row(c: Color) -> u8 {
    match c {
        Color::White => 1,
        Color::Black => 8,
    }
}

// Offsets are `(d_row, d_col)`.

pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
