//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orthogonal then diagonal unit vectors as (row delta, column delta).
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// How a non-pawn piece moves: a set of direction vectors walked up to `max_distance` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTemplate {
    pub directions: &'static [(i8, i8)],
    pub max_distance: u8,
}

const KNIGHT_TEMPLATE: MoveTemplate = MoveTemplate {
    directions: &KNIGHT_OFFSETS,
    max_distance: 1,
};
const BISHOP_TEMPLATE: MoveTemplate = MoveTemplate {
    directions: &BISHOP_DIRECTIONS,
    max_distance: 7,
};
const ROOK_TEMPLATE: MoveTemplate = MoveTemplate {
    directions: &ROOK_DIRECTIONS,
    max_distance: 7,
};
const QUEEN_TEMPLATE: MoveTemplate = MoveTemplate {
    directions: &QUEEN_DIRECTIONS,
    max_distance: 7,
};
const KING_TEMPLATE: MoveTemplate = MoveTemplate {
    directions: &QUEEN_DIRECTIONS,
    max_distance: 1,
};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in rank order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Relative weight, pawn = 1 through king = 6. This is the magnitude of the
    /// signed square code, not an evaluation score.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight => 2,
            Piece::Bishop => 3,
            Piece::Rook => 4,
            Piece::Queen => 5,
            Piece::King => 6,
        }
    }

    #[must_use]
    pub const fn from_rank(rank: i8) -> Option<Piece> {
        match rank {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Knight),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Rook),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Movement template for every piece except the pawn, whose moves depend on color.
    #[must_use]
    pub const fn template(self) -> Option<MoveTemplate> {
        match self {
            Piece::Pawn => None,
            Piece::Knight => Some(KNIGHT_TEMPLATE),
            Piece::Bishop => Some(BISHOP_TEMPLATE),
            Piece::Rook => Some(ROOK_TEMPLATE),
            Piece::Queen => Some(QUEEN_TEMPLATE),
            Piece::King => Some(KING_TEMPLATE),
        }
    }

    /// Parse a piece from a character of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Notation letter, uppercase for White
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Promotion choices, queen first
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign of this color's square codes
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this color's king and rooks at the start
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a forward pawn step (White moves toward row 0)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Signed square code: magnitude is the piece rank, positive for White.
#[inline]
#[must_use]
pub fn piece_code(color: Color, piece: Piece) -> i8 {
    color.sign() * piece.rank()
}

/// Inverse of [`piece_code`]; `0` and out-of-range values decode to `None`.
#[must_use]
pub fn decode_piece_code(code: i8) -> Option<(Color, Piece)> {
    let color = if code > 0 { Color::White } else { Color::Black };
    Piece::from_rank(code.checked_abs()?).map(|piece| (color, piece))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_codes_round_trip() {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let code = piece_code(color, piece);
                assert_eq!(decode_piece_code(code), Some((color, piece)));
            }
        }
        assert_eq!(piece_code(Color::Black, Piece::King), -6);
        assert_eq!(decode_piece_code(0), None);
        assert_eq!(decode_piece_code(7), None);
    }

    #[test]
    fn test_templates() {
        assert!(Piece::Pawn.template().is_none());
        assert_eq!(Piece::King.template().unwrap().max_distance, 1);
        assert_eq!(Piece::Knight.template().unwrap().directions.len(), 8);
        assert_eq!(Piece::Rook.template().unwrap().max_distance, 7);
        assert_eq!(Piece::Bishop.template().unwrap().directions.len(), 4);
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(Piece::Knight.to_fen_char(Color::White), 'N');
        assert_eq!(Piece::Knight.to_fen_char(Color::Black), 'n');
        assert_eq!(Piece::from_char('Q'), Some(Piece::Queen));
        assert_eq!(Piece::from_char('x'), None);
    }
}
