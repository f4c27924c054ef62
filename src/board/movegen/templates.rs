use super::super::{Board, Color, Move, MoveFlags, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves of a templated piece (everything but the pawn).
    ///
    /// Each direction is walked up to the template's distance; the walk stops at the first
    /// occupied square, which is included only when it holds an enemy piece.
    pub(crate) fn generate_template_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        let Some(template) = piece.template() else {
            return;
        };
        for &(dr, dc) in template.directions {
            let mut current = from;
            for _ in 0..template.max_distance {
                let Some(to) = current.offset(dr, dc) else {
                    break;
                };
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, MoveFlags::NONE)),
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::new(from, to, piece, MoveFlags::CAPTURE));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, MoveList, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn targets(board: &Board, from: &str, piece: Piece) -> Vec<String> {
        let mut moves = MoveList::new();
        let (color, _) = board.piece_at(sq(from)).unwrap();
        board.generate_template_moves(sq(from), color, piece, &mut moves);
        let mut out: Vec<String> = moves.iter().map(|m| m.to().to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_rook_stops_at_first_occupant() {
        let board = Board::from_fen("4k3/8/8/8/1p1R2P1/8/8/4K3 w - - 0 1");
        let got = targets(&board, "d4", Piece::Rook);
        assert_eq!(
            got,
            vec!["b4", "c4", "d1", "d2", "d3", "d5", "d6", "d7", "d8", "e4", "f4"]
        );
    }

    #[test]
    fn test_knight_in_corner() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        assert_eq!(targets(&board, "a1", Piece::Knight), vec!["b3", "c2"]);
    }

    #[test]
    fn test_king_steps_once() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            targets(&board, "e1", Piece::King),
            vec!["d1", "d2", "e2", "f1", "f2"]
        );
    }

    #[test]
    fn test_capture_flag_set() {
        let board = Board::from_fen("4k3/8/8/8/8/2p5/8/B3K3 w - - 0 1");
        let mut moves = MoveList::new();
        board.generate_template_moves(sq("a1"), Color::White, Piece::Bishop, &mut moves);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), sq("c3"));
        assert_eq!(moves.len(), 2);
    }
}
