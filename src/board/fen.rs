//! FEN adapter. Text is decoded into a `BoardBuilder`; the engine itself never parses strings.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, BoardBuilder, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The half-move clock and full-move number fields are optional and default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = BoardBuilder::new();

        // Placement: first rank listed is rank 8, which is row 0.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut column = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    column += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if column >= 8 {
                    return Err(FenError::InvalidRankWidth {
                        rank: 8 - row,
                        files: column + 1,
                    });
                }
                builder = builder.piece(Square::ALL[row * 8 + column], color, piece);
                column += 1;
            }
            if column != 8 {
                return Err(FenError::InvalidRankWidth {
                    rank: 8 - row,
                    files: column,
                });
            }
        }

        builder = match parts[1] {
            "w" => builder.side_to_move(Color::White),
            "b" => builder.side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            builder = match c {
                'K' => builder.castle_kingside(Color::White),
                'Q' => builder.castle_queenside(Color::White),
                'k' => builder.castle_kingside(Color::Black),
                'q' => builder.castle_queenside(Color::Black),
                '-' => builder,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            let target: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(target)
        };
        builder = builder.en_passant(en_passant);

        if let Some(field) = parts.get(4) {
            builder = builder.halfmove_clock(parse_counter(field)?);
        }
        if let Some(field) = parts.get(5) {
            builder = builder.fullmove_number(parse_counter(field)?);
        }

        Ok(builder.build()?)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for column in 0..8 {
                match self.squares[row][column] {
                    Some((color, piece)) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
