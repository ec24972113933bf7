//! Board and related things

use crate::geometry;
use crate::types::{Color, Piece, PieceKind, Position};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the piece placement (i.e. the first part of FEN)
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum PlacementParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(u8),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(u8),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board
///
/// Board is a plain storage of 64 cells, each of them either empty or holding exactly one piece.
/// It knows nothing about the rules: any piece can be put anywhere, and no validation is performed.
/// Legality is the business of [`Game`](crate::game::Game) and [`legal`](crate::legal).
///
/// # Example
///
/// ```
/// # use chessrules::{Board, Color, Piece, PieceKind, Position};
/// #
/// let mut b = Board::new();
/// b.put(Position::new(2, 2), Some(Piece::new(Color::White, PieceKind::King)));
/// b.put(Position::new(5, 4), Some(Piece::new(Color::Black, PieceKind::King)));
///
/// assert_eq!(b.as_placement(), "8/8/8/3k4/8/8/1K6/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Returns an empty board
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn new() -> Board {
        Board { cells: [None; 64] }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::new();
        res.reset();
        res
    }

    /// Builds a board from raw cells, indexed as in [`Position::index()`]
    #[inline]
    pub const fn from_cells(cells: [Option<Piece>; 64]) -> Board {
        Board { cells }
    }

    /// Returns a copy of the raw cells, indexed as in [`Position::index()`]
    #[inline]
    pub const fn to_cells(&self) -> [Option<Piece>; 64] {
        self.cells
    }

    /// Removes all the pieces from the board
    pub fn clear(&mut self) {
        self.cells = [None; 64];
    }

    /// Clears the board and lays out the initial position
    pub fn reset(&mut self) {
        self.clear();
        for color in [Color::White, Color::Black] {
            let home = geometry::home_row(color);
            let pawns = geometry::pawn_start_row(color);
            for (col, kind) in (1..=8).zip(BACK_RANK) {
                self.put(Position::new(home, col), Some(Piece::new(color, kind)));
                self.put(
                    Position::new(pawns, col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
    }

    /// Parses a board from the piece placement part of FEN
    ///
    /// Does the same as [`Board::from_str`].
    #[inline]
    pub fn from_placement(s: &str) -> Result<Board, PlacementParseError> {
        Board::from_str(s)
    }

    /// Returns the contents of the square `pos`
    ///
    /// Squares outside the board are always empty.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.cells[pos.index()]
    }

    /// Puts `piece` to the square `pos`, overwriting its previous contents
    ///
    /// Passing `None` removes the piece from the square.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    #[inline]
    pub fn put(&mut self, pos: Position, piece: Option<Piece>) {
        assert!(pos.is_valid(), "position {:?} is outside the board", pos);
        self.cells[pos.index()] = piece;
    }

    /// Returns `true` if the square `pos` holds no piece
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Iterates over all the occupied squares, from `a1` to `h8` row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|p| (Position::from_index(idx), p)))
    }

    /// Returns the position of the king of color `c`, or `None` if there is no such king
    ///
    /// If there are several kings, the first one in [`Board::pieces()`] order is returned.
    pub fn king_pos(&self, c: Color) -> Option<Position> {
        let king = Piece::new(c, PieceKind::King);
        self.pieces()
            .find_map(|(pos, p)| (p == king).then_some(pos))
    }

    /// Wraps the board to allow pretty-printing with the given style
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use chessrules::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            board: self,
            side: None,
            style,
        }
    }

    /// Converts the board into the piece placement part of FEN
    ///
    /// Does the same as `Board::to_string()`.
    #[inline]
    pub fn as_placement(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::new()
    }
}

impl FromStr for Board {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        type Error = PlacementParseError;

        let mut col = 0_u8;
        let mut row = 8_u8;
        let mut board = Board::new();
        for b in s.bytes() {
            match b {
                b'1'..=b'8' => {
                    let add = b - b'0';
                    if col + add > 8 {
                        return Err(Error::RankOverflow(row));
                    }
                    col += add;
                }
                b'/' => {
                    if col < 8 {
                        return Err(Error::RankUnderflow(row));
                    }
                    if row == 1 {
                        return Err(Error::Overflow);
                    }
                    row -= 1;
                    col = 0;
                }
                _ => {
                    if col >= 8 {
                        return Err(Error::RankOverflow(row));
                    }
                    let piece =
                        Piece::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                    col += 1;
                    board.put(Position::new(row, col), Some(piece));
                }
            };
        }

        if col < 8 {
            return Err(Error::RankUnderflow(row));
        }
        if row > 1 {
            return Err(Error::Underflow);
        }

        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (1..=8).rev() {
            if row != 8 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for col in 1..=8 {
                let piece = match self.get(Position::new(row, col)) {
                    Some(p) => p,
                    None => {
                        empty += 1;
                        continue;
                    }
                };
                if empty != 0 {
                    write!(f, "{}", empty)?;
                    empty = 0;
                }
                write!(f, "{}", piece)?;
            }
            if empty != 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}

/// Style for [`Board::pretty()`] and [`Game::pretty()`](crate::game::Game::pretty)
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    pub(crate) board: &'a Board,
    pub(crate) side: Option<Color>,
    pub(crate) style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const WHITE_INDICATOR: char;
    const BLACK_INDICATOR: char;
    const EMPTY: char = '.';

    fn piece(p: Piece) -> char;

    fn indicator(c: Option<Color>) -> char {
        match c {
            Some(Color::White) => Self::WHITE_INDICATOR,
            Some(Color::Black) => Self::BLACK_INDICATOR,
            None => ' ',
        }
    }

    fn fmt(b: &Board, side: Option<Color>, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (1..=8).rev() {
            write!(f, "{}{}", row, Self::VERT_FRAME)?;
            for col in 1..=8 {
                let c = b
                    .get(Position::new(row, col))
                    .map_or(Self::EMPTY, Self::piece);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in 1..=8 {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, "{}{}", Self::indicator(side), Self::VERT_FRAME)?;
        for col in 1..=8 {
            write!(f, "{}", Position::new(1, col).file_char())?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const WHITE_INDICATOR: char = 'W';
    const BLACK_INDICATOR: char = 'B';

    fn piece(p: Piece) -> char {
        p.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const WHITE_INDICATOR: char = '○';
    const BLACK_INDICATOR: char = '●';

    fn piece(p: Piece) -> char {
        p.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, self.side, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, self.side, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INI_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(b.to_string(), INI_PLACEMENT);
        assert_eq!(Board::from_placement(INI_PLACEMENT), Ok(b));
        assert_eq!(b.pieces().count(), 32);

        assert_eq!(
            b.get(Position::new(1, 5)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            b.get(Position::new(8, 4)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        for col in 1..=8 {
            assert_eq!(
                b.get(Position::new(2, col)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(
                b.get(Position::new(7, col)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            for row in 3..=6 {
                assert!(b.is_free(Position::new(row, col)));
            }
        }
    }

    #[test]
    fn test_put_get() {
        let mut b = Board::new();
        assert_eq!(b, Board::default());
        assert_eq!(b.pieces().count(), 0);

        let e4 = Position::new(4, 5);
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        b.put(e4, Some(knight));
        assert_eq!(b.get(e4), Some(knight));

        let rook = Piece::new(Color::White, PieceKind::Rook);
        b.put(e4, Some(rook));
        assert_eq!(b.get(e4), Some(rook));

        b.put(e4, None);
        assert_eq!(b.get(e4), None);
        assert_eq!(b, Board::new());

        assert_eq!(b.get(Position::new(0, 1)), None);
        assert_eq!(b.get(Position::new(9, 9)), None);
    }

    #[test]
    #[should_panic]
    fn test_put_outside() {
        Board::new().put(Position::new(9, 1), None);
    }

    #[test]
    fn test_reset() {
        let mut b = Board::from_placement("8/8/3k4/8/8/8/1K6/8").unwrap();
        b.reset();
        assert_eq!(b, Board::initial());
        b.clear();
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_king_pos() {
        let b = Board::initial();
        assert_eq!(b.king_pos(Color::White), Some(Position::new(1, 5)));
        assert_eq!(b.king_pos(Color::Black), Some(Position::new(8, 5)));

        let b = Board::from_placement("8/8/3k4/8/8/8/8/8").unwrap();
        assert_eq!(b.king_pos(Color::White), None);
        assert_eq!(b.king_pos(Color::Black), Some(Position::new(6, 4)));
    }

    #[test]
    fn test_cells() {
        let b = Board::initial();
        let cells = b.to_cells();
        assert_eq!(
            cells[0],
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            cells[63],
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(Board::from_cells(cells), b);
    }

    #[test]
    fn test_bad_placement() {
        type Error = PlacementParseError;

        assert_eq!(
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP"),
            Err(Error::Underflow)
        );
        assert_eq!(
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8"),
            Err(Error::Overflow)
        );
        assert_eq!(
            Board::from_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(Error::RankOverflow(8))
        );
        assert_eq!(
            Board::from_placement("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(Error::RankUnderflow(7))
        );
        assert_eq!(
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/4x3/PPPPPPPP/RNBQKBNR"),
            Err(Error::UnexpectedChar('x'))
        );
    }

    #[test]
    fn test_pretty() {
        let b = Board::from_placement("8/8/3k4/8/8/8/1K6/8").unwrap();
        let res = r#"
8│........
7│........
6│...♚....
5│........
4│........
3│........
2│.♔......
1│........
─┼────────
 │abcdefgh
"#;
        assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    }
}
