//! Core chess types.
//!
//! This module contains the value types shared by the board engine:
//! - `Piece` and `Color` - piece kinds, colors and movement templates
//! - `Square` - validated (row, column) coordinate
//! - `Move`, `MoveFlags` and `MoveList` - movement targets and their classification
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveFlags, MoveList, MoveListIntoIter};
pub use piece::{decode_piece_code, piece_code, Color, MoveTemplate, Piece};
pub use square::Square;

pub(crate) use piece::{KNIGHT_OFFSETS, PROMOTION_PIECES, QUEEN_DIRECTIONS};
