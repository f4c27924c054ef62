//! Legal move generation.
//!
//! Candidates come from the per-piece generators (templates for pieces, dedicated logic for
//! pawns and castling). Each candidate is then played on the grid, the mover's king is
//! tested with the attack detector, and the grid is restored. Pins and check evasions need
//! no special handling: any candidate that leaves the king attacked is simply dropped.

mod kings;
mod pawns;
mod templates;

use super::error::BoardError;
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
            _ => self.generate_template_moves(from, color, piece, moves),
        }
    }

    fn generate_pseudo_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces_of(color) {
            self.generate_piece_moves(from, color, piece, &mut moves);
        }
        moves
    }

    /// Play `mv` on the grid only, test the mover's king, and put the grid back.
    ///
    /// Auxiliary state (rights, clocks, en passant) is untouched since king safety
    /// depends on placement alone.
    pub(crate) fn leaves_king_safe(&mut self, mv: Move) -> bool {
        let color = self.side_to_move;
        let king = if mv.piece() == Piece::King {
            Some(mv.to())
        } else {
            self.kings[color.index()]
        };
        let Some(king) = king else {
            return true;
        };

        let saved = self.squares;
        let capture_square = mv.en_passant_capture().unwrap_or(mv.to());
        self.squares[capture_square.row()][capture_square.column()] = None;
        self.squares[mv.from().row()][mv.from().column()] = None;
        self.squares[mv.to().row()][mv.to().column()] = Some((color, mv.result_piece()));
        if let Some((rook_from, rook_to)) = mv.castling_rook() {
            self.squares[rook_from.row()][rook_from.column()] = None;
            self.squares[rook_to.row()][rook_to.column()] = Some((color, Piece::Rook));
        }

        let safe = !self.is_square_attacked(king, color.opponent());
        self.squares = saved;
        safe
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = self.generate_pseudo_moves();
        moves.retain(|mv| self.leaves_king_safe(mv));
        moves
    }

    /// Legal moves of the piece on `square`.
    ///
    /// A piece of the side not to move has no legal moves and yields an empty list.
    pub fn legal_moves_from(&mut self, square: Square) -> Result<MoveList, BoardError> {
        let (color, piece) = self
            .piece_at(square)
            .ok_or(BoardError::EmptySquare { square })?;
        let mut moves = MoveList::new();
        if color == self.side_to_move {
            self.generate_piece_moves(square, color, piece, &mut moves);
            moves.retain(|mv| self.leaves_king_safe(mv));
        }
        Ok(moves)
    }

    /// Does the side to move have at least one legal move? Stops at the first one found.
    pub(crate) fn has_legal_move(&mut self) -> bool {
        let color = self.side_to_move;
        let mut moves = MoveList::new();
        for from in Square::ALL {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            moves.clear();
            self.generate_piece_moves(from, color, piece, &mut moves);
            if moves.iter().any(|mv| self.leaves_king_safe(mv)) {
                return true;
            }
        }
        false
    }

    /// Look up the legal move matching origin, destination and promotion piece.
    pub fn find_legal_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Option<Move> {
        let moves = self.legal_moves_from(from).ok()?;
        moves
            .into_iter()
            .find(|mv| mv.to() == to && mv.promotion() == promotion)
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_attacked(self.side_to_move)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && !self.has_legal_move()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardError, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn destinations(board: &mut Board, from: &str) -> Vec<String> {
        let mut out: Vec<String> = board
            .legal_moves_from(sq(from))
            .unwrap()
            .iter()
            .map(|m| m.to().to_string())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves().len(), 20);
    }

    #[test]
    fn test_empty_square_is_an_error() {
        let mut board = Board::new();
        assert_eq!(
            board.legal_moves_from(sq("e4")).unwrap_err(),
            BoardError::EmptySquare { square: sq("e4") }
        );
    }

    #[test]
    fn test_opponent_piece_has_no_moves() {
        let mut board = Board::new();
        assert!(board.legal_moves_from(sq("e7")).unwrap().is_empty());
    }

    #[test]
    fn test_pinned_rook_keeps_only_pin_line() {
        // rook e4 pinned by the queen on e8 against the king on e1
        let mut board = Board::from_fen("4q2k/8/8/8/4R3/8/8/4K3 w - - 0 1");
        assert_eq!(
            destinations(&mut board, "e4"),
            vec!["e2", "e3", "e5", "e6", "e7", "e8"]
        );
    }

    #[test]
    fn test_pinned_knight_cannot_move() {
        let mut board = Board::from_fen("4r2k/8/8/8/4N3/8/8/4K3 w - - 0 1");
        assert!(destinations(&mut board, "e4").is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = Board::from_fen("3r3k/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(destinations(&mut board, "e1"), vec!["e2", "f1", "f2"]);
    }

    #[test]
    fn test_king_cannot_retreat_along_checking_ray() {
        let mut board = Board::from_fen("7k/8/8/8/4r3/8/8/4K3 w - - 0 1");
        assert_eq!(destinations(&mut board, "e1"), vec!["d1", "d2", "f1", "f2"]);
    }

    #[test]
    fn test_en_passant_exposing_king_is_illegal() {
        // capturing d5 would clear the fifth rank between the king and the rook
        let mut board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 2");
        assert_eq!(destinations(&mut board, "e5"), vec!["e6"]);
    }

    #[test]
    fn test_lone_pawn_promotion_count() {
        let mut board = Board::from_fen("8/4P3/8/8/8/8/8/8 w - - 0 1");
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to() == sq("e8") && m.is_promotion()));
    }

    #[test]
    fn test_find_legal_move() {
        let mut board = Board::from_fen("8/4P3/8/8/8/8/8/8 w - - 0 1");
        let mv = board
            .find_legal_move(sq("e7"), sq("e8"), Some(Piece::Knight))
            .unwrap();
        assert_eq!(mv.to_string(), "e7e8n");
        assert!(board.find_legal_move(sq("e7"), sq("e8"), None).is_none());
        assert!(board.find_legal_move(sq("d4"), sq("d5"), None).is_none());
        assert!(board.find_legal_move(sq("e7"), sq("d8"), Some(Piece::Queen)).is_none());
    }

    #[test]
    fn test_has_legal_move_agrees_with_generation() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1",
            "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1",
            // boxed-in king, only the last pawn on the board can move
            "k7/2Q5/8/8/8/8/7p/1K6 b - - 0 1",
        ] {
            let mut board = Board::from_fen(fen);
            let expected = !board.legal_moves().is_empty();
            assert_eq!(board.has_legal_move(), expected, "{fen}");
        }
        let mut boxed = Board::from_fen("k7/2Q5/8/8/8/8/7p/1K6 b - - 0 1");
        assert_eq!(boxed.legal_moves().len(), 4);
        assert!(!boxed.is_stalemate());
    }

    #[test]
    fn test_checkmate_and_stalemate() {
        let mut mate = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(mate.is_in_check());
        assert!(mate.is_checkmate());
        assert!(!mate.is_stalemate());

        let mut stale = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!stale.is_in_check());
        assert!(stale.is_stalemate());
        assert!(stale.legal_moves().is_empty());
    }
}
