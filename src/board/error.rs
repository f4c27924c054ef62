//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for out-of-range or malformed coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Array row outside 0-7
    RowOutOfBounds { row: usize },
    /// Array column outside 0-7
    ColumnOutOfBounds { column: usize },
    /// File letter outside a-h
    FileOutOfBounds { file: char },
    /// Rank number outside 1-8
    RankOutOfBounds { rank: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File '{file}' out of bounds (must be a-h)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board construction and queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Moves or piece info were requested for an unoccupied square
    EmptySquare { square: Square },
    /// A second king of the same color was placed
    DuplicateKing { color: Color, square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptySquare { square } => {
                write!(f, "No piece on square {square}")
            }
            BoardError::DuplicateKing { color, square } => {
                write!(f, "{color} already has a king, cannot place another on {square}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for FEN decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Placement field does not describe exactly 8 ranks
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than 8 files
    InvalidRankWidth { rank: usize, files: usize },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { found: String },
    /// The decoded placement violates a board invariant
    Board(BoardError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::Board(err) => write!(f, "Invalid position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(err: BoardError) -> Self {
        FenError::Board(err)
    }
}
