//! Fluent builder for constructing chess positions.
//!
//! This is how an already-decoded placement and its game-state flags enter the engine.
//!
//! # Example
//! ```
//! use chess_rules::{BoardBuilder, Color, Piece, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black), Some(e8));
//! ```

use super::error::BoardError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = Square::ALL
            .iter()
            .filter_map(|&sq| board.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .collect();
        BoardBuilder {
            pieces,
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever was on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target, or clear it with `None`.
    #[must_use]
    pub const fn en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the board.
    ///
    /// Fails when a color has more than one king.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            if piece == Piece::King && board.king_square(color).is_some() {
                crate::log_at!(warn, "rejecting second {} king on {}", color, square);
                return Err(BoardError::DuplicateKing { color, square });
            }
            board.put_piece(square, color, piece);
        }

        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;

        Ok(board)
    }
}
