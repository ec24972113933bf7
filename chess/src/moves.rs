//! Moves and their text representation

use crate::types::{PieceKind, Position, PositionParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Target piece for promotion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PromotePiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotePiece {
    /// All the promotion targets, in the order in which move generation emits them
    pub const ALL: [PromotePiece; 4] = [
        PromotePiece::Queen,
        PromotePiece::Rook,
        PromotePiece::Bishop,
        PromotePiece::Knight,
    ];

    pub fn as_char(&self) -> char {
        PieceKind::from(*self).as_char()
    }

    pub fn from_char(c: char) -> Option<PromotePiece> {
        PieceKind::from_char(c)?.try_into().ok()
    }
}

impl From<PromotePiece> for PieceKind {
    #[inline]
    fn from(p: PromotePiece) -> Self {
        match p {
            PromotePiece::Queen => PieceKind::Queen,
            PromotePiece::Rook => PieceKind::Rook,
            PromotePiece::Bishop => PieceKind::Bishop,
            PromotePiece::Knight => PieceKind::Knight,
        }
    }
}

impl TryFrom<PieceKind> for PromotePiece {
    type Error = ();

    #[inline]
    fn try_from(p: PieceKind) -> Result<Self, Self::Error> {
        match p {
            PieceKind::Queen => Ok(PromotePiece::Queen),
            PieceKind::Rook => Ok(PromotePiece::Rook),
            PieceKind::Bishop => Ok(PromotePiece::Bishop),
            PieceKind::Knight => Ok(PromotePiece::Knight),
            PieceKind::King | PieceKind::Pawn => Err(()),
        }
    }
}

/// Error parsing a move from its text form
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(PositionParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(PositionParseError),
    /// Bad promote character
    #[error("bad promote char {0:?}")]
    BadPromote(char),
}

/// Chess move
///
/// A move is just a pair of squares plus an optional promotion target. It doesn't know which piece
/// is moving, so it carries no guarantee of being valid in any position. Validity is checked by
/// [`Game::make_move()`](crate::game::Game::make_move).
///
/// Two moves are equal only if all three fields are equal, so a plain pawn move and a promotion
/// to the same square are distinct moves.
///
/// In text form, a move is written as its source and destination squares followed by the
/// promotion letter, if any, e.g. `e2e4` or `a7a8q`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Position,
    dst: Position,
    promote: Option<PromotePiece>,
}

impl Move {
    /// Creates a move without promotion
    #[inline]
    pub const fn new(src: Position, dst: Position) -> Move {
        Move {
            src,
            dst,
            promote: None,
        }
    }

    /// Creates a pawn move which ends with promotion to `promote`
    #[inline]
    pub const fn with_promote(src: Position, dst: Position, promote: PromotePiece) -> Move {
        Move {
            src,
            dst,
            promote: Some(promote),
        }
    }

    /// Returns the move source square
    #[inline]
    pub const fn src(&self) -> Position {
        self.src
    }

    /// Returns the move destination square
    #[inline]
    pub const fn dst(&self) -> Position {
        self.dst
    }

    /// Returns the promotion target, if any
    #[inline]
    pub const fn promote(&self) -> Option<PromotePiece> {
        self.promote
    }

    /// Returns `true` if both endpoints lie on the board
    #[inline]
    pub const fn is_well_formed(&self) -> bool {
        self.src().is_valid() && self.dst().is_valid()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src(), self.dst())?;
        if let Some(p) = self.promote {
            write!(f, "{}", p.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !matches!(s.len(), 4 | 5) || !s.is_ascii() {
            return Err(MoveParseError::BadLength);
        }
        let src = Position::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Position::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        match s.as_bytes().get(4) {
            Some(&b) => {
                let c = b as char;
                let promote = PromotePiece::from_char(c).ok_or(MoveParseError::BadPromote(c))?;
                Ok(Move::with_promote(src, dst, promote))
            }
            None => Ok(Move::new(src, dst)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        let a7 = Position::new(7, 1);
        let a8 = Position::new(8, 1);
        assert_eq!(Move::new(a7, a8), Move::new(a7, a8));
        assert_ne!(
            Move::new(a7, a8),
            Move::with_promote(a7, a8, PromotePiece::Queen)
        );
        assert_ne!(
            Move::with_promote(a7, a8, PromotePiece::Rook),
            Move::with_promote(a7, a8, PromotePiece::Queen)
        );
        assert_ne!(Move::new(a7, a8), Move::new(a8, a7));
    }

    #[test]
    fn test_str() {
        let mv = Move::new(Position::new(2, 5), Position::new(4, 5));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(Move::from_str("e2e4"), Ok(mv));

        let mv = Move::with_promote(Position::new(7, 1), Position::new(8, 2), PromotePiece::Knight);
        assert_eq!(mv.to_string(), "a7b8n");
        assert_eq!(Move::from_str("a7b8n"), Ok(mv));
        assert_eq!(mv.promote().map(PieceKind::from), Some(PieceKind::Knight));

        assert_eq!(Move::from_str("e2e"), Err(MoveParseError::BadLength));
        assert_eq!(Move::from_str("e2e4qq"), Err(MoveParseError::BadLength));
        assert_eq!(
            Move::from_str("e9e4"),
            Err(MoveParseError::BadSrc(PositionParseError::UnexpectedRankChar('9')))
        );
        assert_eq!(
            Move::from_str("e2z4"),
            Err(MoveParseError::BadDst(PositionParseError::UnexpectedFileChar('z')))
        );
        assert_eq!(Move::from_str("e7e8k"), Err(MoveParseError::BadPromote('k')));
    }

    #[test]
    fn test_well_formed() {
        assert!(Move::new(Position::new(1, 1), Position::new(8, 8)).is_well_formed());
        assert!(!Move::new(Position::new(0, 1), Position::new(8, 8)).is_well_formed());
        assert!(!Move::new(Position::new(1, 1), Position::new(8, 9)).is_well_formed());
    }

    #[test]
    fn test_promote_piece() {
        for p in PromotePiece::ALL {
            assert_eq!(PromotePiece::try_from(PieceKind::from(p)), Ok(p));
            assert_eq!(PromotePiece::from_char(p.as_char()), Some(p));
        }
        assert_eq!(PromotePiece::try_from(PieceKind::King), Err(()));
        assert_eq!(PromotePiece::try_from(PieceKind::Pawn), Err(()));
    }
}
