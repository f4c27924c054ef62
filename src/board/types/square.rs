//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as an array (row, column).
///
/// Row 0 is the eighth rank and column 0 is the a-file, so `squares[row][column]`
/// reads the grid the way a diagram is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u8,
    column: u8,
}

const fn build_all() -> [Square; 64] {
    let mut all = [Square { row: 0, column: 0 }; 64];
    let mut idx = 0;
    while idx < 64 {
        all[idx] = Square {
            row: (idx / 8) as u8,
            column: (idx % 8) as u8,
        };
        idx += 1;
    }
    all
}

impl Square {
    /// Every square, indexed by `row * 8 + column`.
    pub const ALL: [Square; 64] = build_all();

    /// Create a square from array coordinates.
    pub fn new(row: usize, column: usize) -> Result<Self, SquareError> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if column >= 8 {
            return Err(SquareError::ColumnOutOfBounds { column });
        }
        Ok(Self::ALL[row * 8 + column])
    }

    /// Create a square from a file letter (`a`..=`h`) and a rank number (1..=8).
    pub fn from_file_rank(file: char, rank: u8) -> Result<Self, SquareError> {
        if !('a'..='h').contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        let column = file as usize - 'a' as usize;
        let row = 8 - rank as usize;
        Ok(Self::ALL[row * 8 + column])
    }

    #[inline]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Self::ALL[idx]
    }

    /// Array row (0 = eighth rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Array column (0 = a-file)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.column as usize
    }

    /// File letter, `a` through `h`
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.column) as char
    }

    /// Rank number, 1 through 8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        8 - self.row
    }

    /// Index into a 64-entry table (a8 = 0, h1 = 63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.column as usize
    }

    /// Algebraic notation, e.g. `"e4"`.
    #[must_use]
    pub fn notation(self) -> String {
        self.to_string()
    }

    /// The square reached by stepping `(dr, dc)`, or `None` when it leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let column = self.column as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Self::ALL[row as usize * 8 + column as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, column)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = rank.to_digit(10).ok_or_else(invalid)?;
        Square::from_file_rank(file, rank as u8).map_err(|_| invalid())
    }
}
