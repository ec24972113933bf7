//! Game state: the board together with the side to move

use crate::board::{Board, PlacementParseError, Pretty, PrettyStyle};
use crate::legal;
use crate::movegen::MoveList;
use crate::moves::Move;
use crate::types::{Color, ColorParseError, Piece, Position};

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use thiserror::Error;

/// Error returned when [`Game::make_move()`] rejects a move
///
/// The game is never modified if this error is returned.
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// One of the move endpoints lies outside the board
    #[error("move {0:?} goes outside the board")]
    OffBoard(Move),
    /// Source square is empty
    #[error("no piece on {0}")]
    NoPiece(Position),
    /// Piece on the source square doesn't belong to the side to move
    #[error("piece on {pos} cannot move, it is {side}'s turn")]
    WrongSide { pos: Position, side: Color },
    /// The piece cannot make this move, or the move leaves its king in check
    #[error("move {0} is not legal")]
    NotLegal(Move),
}

/// Error parsing [`Game`] from its text form
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GameParseError {
    /// String contains non-ASCII characters
    #[error("non-ASCII data")]
    NonAscii,
    /// Error parsing piece placement
    #[error("bad placement: {0}")]
    Placement(#[from] PlacementParseError),
    /// No side to move
    #[error("no move side")]
    NoMoveSide,
    /// Error parsing side to move
    #[error("bad move side: {0}")]
    MoveSide(#[from] ColorParseError),
    /// String contains extra data
    #[error("extra data")]
    ExtraData,
}

/// Terminal state of the game for one side
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side is in check and has no valid moves
    Checkmate { winner: Color },
    /// The side is not in check, but has no valid moves
    Stalemate,
}

impl Outcome {
    /// Returns the winning side, or `None` for a draw
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Outcome::Checkmate { winner } => write!(f, "{} wins by checkmate", winner),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
        }
    }
}

/// Plain data form of [`Game`]
///
/// Contains everything needed to rebuild the game: the contents of all 64 squares and the side to
/// move. Cells are indexed as in [`Position::index()`], i.e. `(row - 1) * 8 + (col - 1)`.
///
/// # Example
///
/// ```
/// # use chessrules::{Game, RawGame, Color, Piece, PieceKind, Position};
/// #
/// let mut raw = RawGame::from(&Game::new());
/// raw.cells[Position::new(2, 5).index()] = None;
/// raw.cells[Position::new(4, 5).index()] = Some(Piece::new(Color::White, PieceKind::Pawn));
/// raw.side = Color::Black;
///
/// let game = Game::from(raw);
/// assert_eq!(game.to_string(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RawGame {
    /// Contents of the squares
    pub cells: [Option<Piece>; 64],
    /// Side to move
    pub side: Color,
}

impl From<&Game> for RawGame {
    fn from(game: &Game) -> RawGame {
        RawGame {
            cells: game.board.to_cells(),
            side: game.side,
        }
    }
}

impl From<RawGame> for Game {
    fn from(raw: RawGame) -> Game {
        Game::from_board(Board::from_cells(raw.cells), raw.side)
    }
}

/// Chess game
///
/// Owns the board and tracks which side is to move. All the rules are enforced here:
/// [`Game::make_move()`] accepts only the moves returned by [`Game::valid_moves()`].
///
/// The game doesn't store its outcome. Checkmate and stalemate are computed on each call to
/// [`Game::outcome()`] and friends, and they don't prevent further moves.
///
/// Castling and en passant are not supported.
///
/// # Example
///
/// ```
/// # use chessrules::{Game, Color, Outcome};
/// #
/// let mut game = Game::new();
/// for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
///     game.make_move(mv.parse().unwrap()).unwrap();
/// }
/// assert!(game.is_in_checkmate(Color::White));
/// assert_eq!(
///     game.outcome(Color::White),
///     Some(Outcome::Checkmate { winner: Color::Black })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    side: Color,
}

impl Game {
    /// Creates a game with the initial position and White to move
    pub fn new() -> Game {
        Game::from_board(Board::initial(), Color::White)
    }

    /// Creates a game from an arbitrary position
    ///
    /// The position is not validated, so it may have any number of kings (including zero).
    pub fn from_board(board: Board, side: Color) -> Game {
        Game { board, side }
    }

    /// Returns the current board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    /// Replaces the board, keeping the side to move
    pub fn set_board(&mut self, board: Board) {
        debug!("board replaced with {}", board);
        self.board = board;
    }

    /// Sets the side to move
    pub fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    /// Resets the game to the initial position with White to move
    pub fn reset(&mut self) {
        debug!("game reset");
        self.board.reset();
        self.side = Color::White;
    }

    /// Returns the valid moves of the piece on `pos`
    ///
    /// Returns `None` if the square is empty. The piece doesn't need to belong to the side to move.
    pub fn valid_moves(&self, pos: Position) -> Option<MoveList> {
        let mut scratch = self.board;
        legal::valid_moves(&mut scratch, pos)
    }

    /// Returns all the valid moves for the side to move
    pub fn moves(&self) -> Vec<Move> {
        let mut scratch = self.board;
        let mut res = Vec::new();
        for (pos, p) in self.board.pieces() {
            if p.color() != self.side {
                continue;
            }
            if let Some(ml) = legal::valid_moves(&mut scratch, pos) {
                res.extend(ml);
            }
        }
        res
    }

    /// Returns `true` if the king of color `c` is under attack
    ///
    /// If `c` has no king on the board, returns `false`.
    pub fn is_in_check(&self, c: Color) -> bool {
        legal::is_in_check(&self.board, c)
    }

    /// Returns `true` if `c` is in check and has no valid moves
    pub fn is_in_checkmate(&self, c: Color) -> bool {
        self.is_in_check(c) && !self.has_valid_moves(c)
    }

    /// Returns `true` if `c` is not in check, but has no valid moves
    pub fn is_in_stalemate(&self, c: Color) -> bool {
        !self.is_in_check(c) && !self.has_valid_moves(c)
    }

    /// Returns the outcome for side `c`, or `None` if `c` still has valid moves
    pub fn outcome(&self, c: Color) -> Option<Outcome> {
        if self.has_valid_moves(c) {
            return None;
        }
        if self.is_in_check(c) {
            Some(Outcome::Checkmate { winner: c.inv() })
        } else {
            Some(Outcome::Stalemate)
        }
    }

    fn has_valid_moves(&self, c: Color) -> bool {
        let mut scratch = self.board;
        legal::has_valid_moves(&mut scratch, c)
    }

    fn validate(&self, mv: Move) -> Result<Piece, MoveError> {
        if !mv.is_well_formed() {
            return Err(MoveError::OffBoard(mv));
        }
        let piece = self.board.get(mv.src()).ok_or(MoveError::NoPiece(mv.src()))?;
        if piece.color() != self.side {
            return Err(MoveError::WrongSide {
                pos: mv.src(),
                side: self.side,
            });
        }
        match self.valid_moves(mv.src()) {
            Some(ml) if ml.contains(&mv) => Ok(piece),
            _ => Err(MoveError::NotLegal(mv)),
        }
    }

    /// Makes the move `mv` and passes the turn to the other side
    ///
    /// The move must be one of [`Game::valid_moves()`] for a piece of the side to move. If the move
    /// promotes a pawn, the pawn is replaced with the promoted piece.
    ///
    /// On error, the game is left unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self.validate(mv).map_err(|e| {
            trace!("rejected move: {}", e);
            e
        })?;
        match legal::Simulation::new(&mut self.board, mv) {
            Some(sim) => sim.commit(),
            None => return Err(MoveError::NoPiece(mv.src())),
        }
        self.side = self.side.inv();
        debug!("{} played {} with {:?}, {} to move", piece.color(), mv, piece, self.side);
        Ok(())
    }

    /// Wraps the game to allow pretty-printing with the given style
    ///
    /// Unlike [`Board::pretty()`], the side to move is shown in the bottom left corner.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            board: &self.board,
            side: Some(self.side),
            style,
        }
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Game {
        Game::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.board, self.side.as_char())
    }
}

impl FromStr for Game {
    type Err = GameParseError;

    /// Parses the game from the placement and side to move, separated by space
    ///
    /// This is the same as the first two fields of FEN. Other FEN fields are not accepted.
    fn from_str(s: &str) -> Result<Game, Self::Err> {
        type Error = GameParseError;

        if !s.is_ascii() {
            return Err(Error::NonAscii);
        }
        let mut iter = s.split(' ').fuse();
        let board = Board::from_placement(iter.next().unwrap_or_default())?;
        let side = Color::from_str(iter.next().ok_or(Error::NoMoveSide)?)?;
        if iter.next().is_some() {
            return Err(Error::ExtraData);
        }
        Ok(Game::from_board(board, side))
    }
}
