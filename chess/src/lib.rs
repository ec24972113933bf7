//! # Chess rules engine
//!
//! This crate keeps a chess position, generates moves for its pieces, and enforces the rules:
//! only the moves which don't leave the mover's king in check are accepted. It also answers
//! whether a side is in check, checkmated or stalemated.
//!
//! The ruleset is deliberately small. Pieces move as usual, and pawns promote on the last rank,
//! but castling and en passant are not supported. There is no move history either, so draws by
//! repetition or by the fifty-move rule are never detected.
//!
//! # Example
//!
//! ```
//! use chessrules::{Color, Game, Move, Position};
//!
//! let mut game = Game::new();
//!
//! // Each pawn can advance one or two squares from its initial position
//! let e2 = Position::new(2, 5);
//! assert_eq!(game.valid_moves(e2).unwrap().len(), 2);
//!
//! game.make_move(Move::new(e2, Position::new(4, 5))).unwrap();
//! assert_eq!(game.side(), Color::Black);
//!
//! // Moves can also be parsed from their text form
//! game.make_move("e7e5".parse().unwrap()).unwrap();
//! assert_eq!(
//!     game.to_string(),
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w"
//! );
//! ```

pub mod board;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;

pub use chessrules_base::{geometry, types};

pub use board::Board;
pub use game::{Game, MoveError, Outcome, RawGame};
pub use movegen::MoveList;
pub use moves::{Move, PromotePiece};
pub use types::{Color, Piece, PieceKind, Position};
