use derive_more::Display;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Square on the board, addressed by 1-based row and column
///
/// Row 1 is White's home rank, column 1 is the `a` file. The type itself does not
/// validate its range; use [`Position::is_valid()`] or [`Position::try_shift()`] when
/// the coordinates come from arithmetic.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    pub const fn is_valid(&self) -> bool {
        self.row >= 1 && self.row <= 8 && self.col >= 1 && self.col <= 8
    }

    /// Index of the square in a row-major 64-cell array, starting from `a1`
    ///
    /// Meaningful only for valid positions.
    pub const fn index(&self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }

    pub const fn from_index(val: usize) -> Position {
        assert!(val < 64, "index must be between 0 and 63");
        Position {
            row: (val / 8) as u8 + 1,
            col: (val % 8) as u8 + 1,
        }
    }

    /// Returns the square shifted by the given deltas, or `None` if it falls off the board
    ///
    /// Always returns `None` if the square itself lies outside the board.
    pub fn try_shift(self, d_row: i8, d_col: i8) -> Option<Position> {
        if !self.is_valid() {
            return None;
        }
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if !(1..=8).contains(&row) || !(1..=8).contains(&col) {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..64).map(Position::from_index)
    }

    pub fn file_char(&self) -> char {
        b'a'.wrapping_add(self.col.wrapping_sub(1)) as char
    }

    pub fn rank_char(&self) -> char {
        b'0'.wrapping_add(self.row) as char
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.is_valid() {
            return write!(f, "Position({})", self);
        }
        write!(f, "Position(?{},{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.is_ascii() {
            return Err(PositionParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a' + 1,
            b => return Err(PositionParseError::UnexpectedFileChar(b as char)),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => b - b'0',
            b => return Err(PositionParseError::UnexpectedRankChar(b as char)),
        };
        Ok(Position::new(row, col))
    }
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch)),
            _ => Err(ColorParseError::BadLength),
        }
    }
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    #[display(fmt = "king")]
    King,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "pawn")]
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// Lowercase letter used in placement strings
    pub fn as_char(&self) -> char {
        match *self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'r' => Some(PieceKind::Rook),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// Chess piece, i.e. a pair of color and kind
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn as_char(&self) -> char {
        match self.color {
            Color::White => self.kind.as_char().to_ascii_uppercase(),
            Color::Black => self.kind.as_char(),
        }
    }

    pub fn as_utf8_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Piece({})", self.as_char())
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
    fn test_position() {
        let mut positions = Vec::new();
        for row in 1..=8 {
            for col in 1..=8 {
                let pos = Position::new(row, col);
                assert!(pos.is_valid());
                assert_eq!(Position::from_index(pos.index()), pos);
                positions.push(pos);
            }
        }
        assert_eq!(positions, Position::iter().collect::<Vec<_>>());

        assert!(!Position::new(0, 4).is_valid());
        assert!(!Position::new(5, 9).is_valid());
    }

    #[test]
    fn test_shift() {
        let a1 = Position::new(1, 1);
        assert_eq!(a1.try_shift(1, 2), Some(Position::new(2, 3)));
        assert_eq!(a1.try_shift(-1, 0), None);
        assert_eq!(a1.try_shift(0, -1), None);
        assert_eq!(Position::new(8, 8).try_shift(1, 1), None);
        assert_eq!(Position::new(8, 8).try_shift(-7, -7), Some(a1));
        assert_eq!(a1.try_shift(i8::MAX, i8::MAX), None);
        assert_eq!(Position::new(8, 8).try_shift(i8::MIN, 0), None);
        assert_eq!(Position::new(200, 3).try_shift(-1, 0), None);
        assert_eq!(Position::new(0, 0).try_shift(1, 1), None);
    }

    #[test]
    fn test_position_str() {
        assert_eq!(Position::new(4, 2).to_string(), "b4");
        assert_eq!(Position::new(1, 1).to_string(), "a1");
        assert_eq!(Position::new(8, 8).to_string(), "h8");
        assert_eq!(Position::from_str("a1"), Ok(Position::new(1, 1)));
        assert_eq!(Position::from_str("e4"), Ok(Position::new(4, 5)));
        assert_eq!(
            Position::from_str("h9"),
            Err(PositionParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(
            Position::from_str("i4"),
            Err(PositionParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(Position::from_str("a10"), Err(PositionParseError::BadLength));
        assert_eq!(format!("{:?}", Position::new(0, 3)), "Position(?0,3)");
    }

    #[test]
    fn test_piece() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(Piece::from_str(&piece.to_string()), Ok(piece));
            }
        }
        assert_eq!(
            Piece::new(Color::White, PieceKind::Knight),
            Piece::new(Color::White, PieceKind::Knight)
        );
        assert_ne!(
            Piece::new(Color::White, PieceKind::Knight),
            Piece::new(Color::Black, PieceKind::Knight)
        );
        assert_eq!(Piece::from_str("x"), Err(PieceParseError::UnexpectedChar('x')));
        assert_eq!(Piece::from_str(""), Err(PieceParseError::BadLength));
    }

    #[test]
    fn test_color() {
        assert_eq!(Color::White.inv(), Color::Black);
        assert_eq!(Color::Black.inv(), Color::White);
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::from_str("b"), Ok(Color::Black));
        assert_eq!(Color::from_str("x"), Err(ColorParseError::UnexpectedChar('x')));
        assert_eq!(Color::from_str("wb"), Err(ColorParseError::BadLength));
        assert_eq!(PieceKind::Knight.to_string(), "knight");
    }
}
