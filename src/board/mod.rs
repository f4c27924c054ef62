//! Chess board representation and rules.
//!
//! The position lives on an 8x8 array grid (row 0 is rank 8, column 0 is file a).
//! Legal moves are found by generating candidates from movement templates and dropping
//! any candidate that leaves the mover's king attacked. Moves are applied and undone
//! through an explicit history stack.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod classify;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, SquareError};
pub use state::{Board, BoardSnapshot};
pub use types::{
    decode_piece_code, piece_code, CastlingRights, Color, Move, MoveFlags, MoveList,
    MoveListIntoIter, MoveTemplate, Piece, Square,
};

pub(crate) use classify::terminal_flag;
pub(crate) use types::{KNIGHT_OFFSETS, PROMOTION_PIECES, QUEEN_DIRECTIONS};
