//! Two-player console games: Chess and Tic-Tac-Toe.
//!
//! Chess moves are pseudo-legal.  Every piece follows its movement pattern and stays on the
//! board, but nobody checks whether a move leaves the mover's own king attacked.  There is no
//! castling and no en passant, and a game of chess ends when a king is captured.
//!
//! ```
//! use games::{Board, ChessMove, MoveGen};
//!
//! let board = Board::default();
//! assert_eq!(MoveGen::new_pseudo_legal(&board).len(), 20);
//!
//! let board = board.make_move_new("e2e4".parse::<ChessMove>().unwrap());
//! assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");
//! ```

mod board;
pub use crate::board::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod config;
pub use crate::config::*;

mod console;
pub use crate::console::*;

mod error;
pub use crate::error::*;

mod fen;

mod file;
pub use crate::file::*;

mod game;
pub use crate::game::*;

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;

mod tictactoe;
pub use crate::tictactoe::*;
