use super::history::History;
use super::{piece_code, CastlingRights, Color, Piece, Square};

/// The 8x8 placement grid, indexed `[row][column]`.
pub(crate) type Grid = [[Option<(Color, Piece)>; 8]; 8];

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Board position plus the undo history of every move applied to it.
///
/// A `Board` is single-owner mutable state: generation, application and undo all go
/// through `&mut self`, so parallel callers work on clones.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) history: History,
}

/// Every observable field of a position, without the undo history.
///
/// Two boards describe the same position exactly when their snapshots are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    /// Signed piece codes, `[row][column]`, 0 for empty
    pub squares: [[i8; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// King squares, White then Black
    pub kings: [Option<Square>; 2],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let white_back = Color::White.back_row();
        let black_back = Color::Black.back_row();
        for (column, &piece) in BACK_RANK.iter().enumerate() {
            board.put_piece(Square::ALL[white_back * 8 + column], Color::White, piece);
            board.put_piece(Square::ALL[black_back * 8 + column], Color::Black, piece);
            board.put_piece(
                Square::ALL[Color::White.pawn_start_row() * 8 + column],
                Color::White,
                Piece::Pawn,
            );
            board.put_piece(
                Square::ALL[Color::Black.pawn_start_row() * 8 + column],
                Color::Black,
                Piece::Pawn,
            );
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// An empty grid, White to move, no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [None, None],
            history: History::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.column()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Signed code of the square's content, 0 when empty.
    #[must_use]
    pub fn code_at(&self, sq: Square) -> i8 {
        self.piece_at(sq)
            .map_or(0, |(color, piece)| piece_code(color, piece))
    }

    /// Notation letter of the piece on `sq`, uppercase for White.
    #[must_use]
    pub fn piece_letter(&self, sq: Square) -> Option<char> {
        self.piece_at(sq)
            .map(|(color, piece)| piece.to_fen_char(color))
    }

    /// Place a piece, keeping the king cache in step.
    pub(crate) fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.row()][sq.column()] = Some((color, piece));
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
    }

    /// Empty a square and return what stood there.
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let taken = self.squares[sq.row()][sq.column()].take();
        if let Some((color, Piece::King)) = taken {
            if self.kings[color.index()] == Some(sq) {
                self.kings[color.index()] = None;
            }
        }
        taken
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Half-moves since the last pawn move or capture. Callers apply the fifty-move rule.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Number of applied moves that can still be undone.
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Iterate over every occupied square of one color.
    pub(crate) fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL.iter().filter_map(move |&sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut squares = [[0i8; 8]; 8];
        for sq in Square::ALL {
            squares[sq.row()][sq.column()] = self.code_at(sq);
        }
        BoardSnapshot {
            squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            kings: self.kings,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::new();
        assert_eq!(board.piece_at(sq("e1")), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(sq("d8")), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(sq("a2")), Some((Color::White, Piece::Pawn)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_codes_and_letters() {
        let board = Board::new();
        assert_eq!(board.code_at(sq("e1")), 6);
        assert_eq!(board.code_at(sq("b8")), -2);
        assert_eq!(board.code_at(sq("e5")), 0);
        assert_eq!(board.piece_letter(sq("g1")), Some('N'));
        assert_eq!(board.piece_letter(sq("c7")), Some('p'));
        assert_eq!(board.piece_letter(sq("c4")), None);
    }

    #[test]
    fn test_king_cache_follows_put_and_take() {
        let mut board = Board::empty();
        board.put_piece(sq("e4"), Color::White, Piece::King);
        assert_eq!(board.king_square(Color::White), Some(sq("e4")));
        assert_eq!(board.take_piece(sq("e4")), Some((Color::White, Piece::King)));
        assert_eq!(board.king_square(Color::White), None);
    }

    #[test]
    fn test_snapshot_grid() {
        let snapshot = Board::new().snapshot();
        assert_eq!(snapshot.squares[7][4], 6);
        assert_eq!(snapshot.squares[0][4], -6);
        assert_eq!(snapshot.squares[4], [0; 8]);
        assert_eq!(snapshot, Board::default().snapshot());
    }
}
