//! King safety: move simulation and legality filtering

use crate::board::Board;
use crate::movegen::{self, MoveList};
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind, Position};

use std::mem;
use std::ops::Deref;

/// Move applied to a board for the duration of a scope
///
/// Creating a simulation moves the piece on the borrowed board (replacing a pawn with the
/// promoted piece if the move says so), and dropping it puts everything back exactly as it was,
/// including the captured piece. While the simulation is alive, the post-move board is available
/// through [`Deref`].
///
/// # Example
///
/// ```
/// # use chessrules::{Board, Move, legal::Simulation};
/// # use std::str::FromStr;
/// #
/// let mut b = Board::initial();
/// let before = b;
/// {
///     let sim = Simulation::new(&mut b, Move::from_str("e2e4").unwrap()).unwrap();
///     assert!(sim.is_free("e2".parse().unwrap()));
/// }
/// assert_eq!(b, before);
/// ```
pub struct Simulation<'a> {
    board: &'a mut Board,
    mv: Move,
    moved: Piece,
    captured: Option<Piece>,
}

impl<'a> Simulation<'a> {
    /// Applies `mv` to `board`
    ///
    /// Returns `None` and leaves the board untouched if the move is not well-formed or its source
    /// square is empty. No other validation is performed.
    pub fn new(board: &'a mut Board, mv: Move) -> Option<Simulation<'a>> {
        if !mv.is_well_formed() {
            return None;
        }
        let moved = board.get(mv.src())?;
        let captured = board.get(mv.dst());
        board.put(mv.src(), None);
        board.put(mv.dst(), Some(landing_piece(moved, mv)));
        Some(Simulation {
            board,
            mv,
            moved,
            captured,
        })
    }

    /// Returns the piece that made the move, as it was before promotion
    pub fn moved(&self) -> Piece {
        self.moved
    }

    /// Returns the piece that stood on the destination square, if any
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Keeps the move applied instead of undoing it
    pub fn commit(self) {
        mem::forget(self);
    }
}

impl<'a> Deref for Simulation<'a> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl<'a> Drop for Simulation<'a> {
    fn drop(&mut self) {
        self.board.put(self.mv.dst(), self.captured);
        self.board.put(self.mv.src(), Some(self.moved));
    }
}

fn landing_piece(moved: Piece, mv: Move) -> Piece {
    match mv.promote() {
        Some(p) if moved.kind() == PieceKind::Pawn => Piece::new(moved.color(), p.into()),
        _ => moved,
    }
}

/// Returns `true` if the king of color `c` is attacked by the opponent's raw moves
///
/// If there is no such king on the board, returns `false`.
pub fn is_in_check(b: &Board, c: Color) -> bool {
    match b.king_pos(c) {
        Some(king) => movegen::is_cell_attacked(b, king, c.inv()),
        None => false,
    }
}

/// Returns `true` if making `mv` doesn't leave the mover's king in check
///
/// The move itself is not validated against the rules of piece movement. Returns `false` if the
/// source square is empty. The board is restored before returning.
pub fn is_safe(b: &mut Board, mv: Move) -> bool {
    match Simulation::new(b, mv) {
        Some(sim) => !is_in_check(&sim, sim.moved().color()),
        None => false,
    }
}

/// Returns the moves of the piece on `src` which don't leave its king in check
///
/// Returns `None` if the square is empty. The board is mutated while each candidate is being
/// checked, but it is identical to its original state when the function returns.
pub fn valid_moves(b: &mut Board, src: Position) -> Option<MoveList> {
    let raw = movegen::raw_moves(b, src)?;
    let mut res = MoveList::new();
    for mv in raw {
        if is_safe(b, mv) {
            res.push(mv);
        }
    }
    Some(res)
}

/// Returns `true` if any piece of color `c` has at least one valid move
pub fn has_valid_moves(b: &mut Board, c: Color) -> bool {
    for src in Position::iter() {
        if !matches!(b.get(src), Some(p) if p.color() == c) {
            continue;
        }
        let raw = match movegen::raw_moves(b, src) {
            Some(raw) => raw,
            None => continue,
        };
        if raw.into_iter().any(|mv| is_safe(b, mv)) {
            return true;
        }
    }
    false
}
