//! Raw move generation
//!
//! Moves generated here follow the movement rules of each piece, but don't take the safety of the
//! mover's king into account. See [`legal`](crate::legal) for the filtered version.

use crate::board::Board;
use crate::geometry;
use crate::moves::{Move, PromotePiece};
use crate::types::{Color, Piece, PieceKind, Position};

use std::convert::Infallible;
use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

pub(crate) trait MaybeMovePush {
    type Err;

    fn push(&mut self, m: Move) -> Result<(), Self::Err>;
}

/// List of moves
///
/// The capacity is enough to hold all the moves from any square in any position.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 64>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, 64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, 64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Sink for generated moves
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl<const N: usize> MovePush for ArrayVec<Move, N> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl<T: MovePush> MaybeMovePush for T {
    type Err = Infallible;

    fn push(&mut self, m: Move) -> Result<(), Self::Err> {
        <Self as MovePush>::push(self, m);
        Ok(())
    }
}

/// Stops the generation as soon as a move lands on `target`
struct HitTarget(Position);

impl MaybeMovePush for HitTarget {
    type Err = ();

    fn push(&mut self, mv: Move) -> Result<(), ()> {
        if mv.dst() == self.0 {
            Err(())
        } else {
            Ok(())
        }
    }
}

pub(crate) struct MoveGenImpl<'a, P> {
    board: &'a Board,
    dst: &'a mut P,
    piece: Piece,
    src: Position,
}

impl<'a, P: MaybeMovePush> MoveGenImpl<'a, P> {
    pub(crate) fn new(board: &'a Board, dst: &'a mut P, piece: Piece, src: Position) -> Self {
        MoveGenImpl {
            board,
            dst,
            piece,
            src,
        }
    }

    fn is_own(&self, pos: Position) -> bool {
        matches!(self.board.get(pos), Some(p) if p.color() == self.piece.color())
    }

    fn is_enemy(&self, pos: Position) -> bool {
        matches!(self.board.get(pos), Some(p) if p.color() != self.piece.color())
    }

    fn add_move(&mut self, dst: Position) -> Result<(), P::Err> {
        self.dst.push(Move::new(self.src, dst))
    }

    fn add_pawn_move(&mut self, dst: Position) -> Result<(), P::Err> {
        if dst.row() != geometry::promote_row(self.piece.color()) {
            return self.add_move(dst);
        }
        for promote in PromotePiece::ALL {
            self.dst.push(Move::with_promote(self.src, dst, promote))?;
        }
        Ok(())
    }

    fn gen_steps(&mut self, steps: &[(i8, i8)]) -> Result<(), P::Err> {
        for &(d_row, d_col) in steps {
            if let Some(dst) = self.src.try_shift(d_row, d_col) {
                if !self.is_own(dst) {
                    self.add_move(dst)?;
                }
            }
        }
        Ok(())
    }

    fn gen_rays(&mut self, rays: &[(i8, i8)]) -> Result<(), P::Err> {
        for &(d_row, d_col) in rays {
            let mut cur = self.src;
            while let Some(dst) = cur.try_shift(d_row, d_col) {
                match self.board.get(dst) {
                    None => self.add_move(dst)?,
                    Some(p) => {
                        if p.color() != self.piece.color() {
                            self.add_move(dst)?;
                        }
                        break;
                    }
                }
                cur = dst;
            }
        }
        Ok(())
    }

    fn gen_pawn(&mut self) -> Result<(), P::Err> {
        let color = self.piece.color();
        let dir = geometry::pawn_direction(color);

        if let Some(single) = self.src.try_shift(dir, 0) {
            if self.board.is_free(single) {
                self.add_pawn_move(single)?;
                if self.src.row() == geometry::pawn_start_row(color) {
                    if let Some(double) = self.src.try_shift(2 * dir, 0) {
                        if self.board.is_free(double) {
                            self.add_pawn_move(double)?;
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(dst) = self.src.try_shift(dir, d_col) {
                if self.is_enemy(dst) {
                    self.add_pawn_move(dst)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn gen(&mut self) -> Result<(), P::Err> {
        match self.piece.kind() {
            PieceKind::King => self.gen_steps(&geometry::KING_STEPS),
            PieceKind::Knight => self.gen_steps(&geometry::KNIGHT_STEPS),
            PieceKind::Rook => self.gen_rays(&geometry::ROOK_RAYS),
            PieceKind::Bishop => self.gen_rays(&geometry::BISHOP_RAYS),
            PieceKind::Queen => self.gen_rays(&geometry::QUEEN_RAYS),
            PieceKind::Pawn => self.gen_pawn(),
        }
    }
}

/// Generates raw moves of `piece` standing on `src` and pushes them into `dst`
///
/// The board is not required to actually hold `piece` on `src`.
pub fn piece_moves_into<P: MovePush>(b: &Board, piece: Piece, src: Position, dst: &mut P) {
    let _ = MoveGenImpl::new(b, dst, piece, src).gen();
}

/// Returns the raw moves of `piece` standing on `src`
pub fn piece_moves(b: &Board, piece: Piece, src: Position) -> MoveList {
    let mut res = MoveList::new();
    piece_moves_into(b, piece, src, &mut res);
    res
}

/// Returns the raw moves of the piece standing on `src`, or `None` if the square is empty
pub fn raw_moves(b: &Board, src: Position) -> Option<MoveList> {
    let piece = b.get(src)?;
    Some(piece_moves(b, piece, src))
}

/// Returns `true` if some piece of color `by` has a raw move landing on `pos`
pub fn is_cell_attacked(b: &Board, pos: Position, by: Color) -> bool {
    b.pieces().filter(|(_, p)| p.color() == by).any(|(src, p)| {
        MoveGenImpl::new(b, &mut HitTarget(pos), p, src)
            .gen()
            .is_err()
    })
}
