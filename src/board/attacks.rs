//! Attack detection.
//!
//! Scans outward from the attacked square: knight jumps, then the eight queen rays
//! (stopping at the first occupant of each), then the two pawn diagonals.

use std::ops::ControlFlow;

use super::attack_tables::{is_orthogonal, KNIGHT_TARGETS, RAYS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Visit each square holding a piece of `by` that attacks `target`.
    ///
    /// Stops as soon as `visit` breaks.
    fn scan_attackers(
        &self,
        target: Square,
        by: Color,
        mut visit: impl FnMut(Square) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for &sq in &KNIGHT_TARGETS[target.index()] {
            if self.piece_at(sq) == Some((by, Piece::Knight)) {
                visit(sq)?;
            }
        }

        for (direction, ray) in RAYS[target.index()].iter().enumerate() {
            let orthogonal = is_orthogonal(direction);
            for (distance, &sq) in ray.iter().enumerate() {
                let Some((color, piece)) = self.piece_at(sq) else {
                    continue;
                };
                let attacks = color == by
                    && match piece {
                        Piece::Queen => true,
                        Piece::Rook => orthogonal,
                        Piece::Bishop => !orthogonal,
                        Piece::King => distance == 0,
                        Piece::Pawn | Piece::Knight => false,
                    };
                if attacks {
                    visit(sq)?;
                }
                break;
            }
        }

        // A pawn of `by` attacks one row ahead of itself, so it sits one row behind the target.
        let behind = -by.pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = target.offset(behind, dc) {
                if self.piece_at(sq) == Some((by, Piece::Pawn)) {
                    visit(sq)?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Is `square` attacked by any piece of `by`?
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.scan_attackers(square, by, |_| ControlFlow::Break(()))
            .is_break()
    }

    /// Every square holding a piece of `by` that attacks `square`.
    #[must_use]
    pub fn attackers(&self, square: Square, by: Color) -> Vec<Square> {
        let mut found = Vec::new();
        let _ = self.scan_attackers(square, by, |sq| {
            found.push(sq);
            ControlFlow::Continue(())
        });
        found
    }

    /// Is the king of `color` attacked? A side without a king is never in check.
    #[must_use]
    pub(crate) fn king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_attacks() {
        let board = Board::new();
        assert!(board.is_square_attacked(sq("f3"), Color::White));
        assert!(board.is_square_attacked(sq("d3"), Color::White));
        assert!(!board.is_square_attacked(sq("e4"), Color::White));
        assert!(board.is_square_attacked(sq("f6"), Color::Black));
        assert!(!board.is_square_attacked(sq("e5"), Color::Black));
    }

    #[test]
    fn test_slider_blocked_by_first_occupant() {
        let board = Board::from_fen("4k3/8/8/8/r1P4K/8/8/8 w - - 0 1");
        assert!(board.is_square_attacked(sq("b4"), Color::Black));
        assert!(board.is_square_attacked(sq("c4"), Color::Black));
        assert!(!board.is_square_attacked(sq("d4"), Color::Black));
        assert!(!board.is_square_attacked(sq("h4"), Color::Black));
    }

    #[test]
    fn test_rook_does_not_attack_diagonally() {
        let board = Board::from_fen("4k3/8/8/8/3r4/8/8/4K3 w - - 0 1");
        assert!(!board.is_square_attacked(sq("e5"), Color::Black));
        assert!(board.is_square_attacked(sq("d1"), Color::Black));
    }

    #[test]
    fn test_pawn_attacks_follow_color() {
        let board = Board::from_fen("4k3/8/8/3p4/8/8/3P4/4K3 w - - 0 1");
        // white pawn d2 attacks c3 and e3, never backwards
        assert!(board.is_square_attacked(sq("c3"), Color::White));
        assert!(board.is_square_attacked(sq("e3"), Color::White));
        assert!(!board.is_square_attacked(sq("c1"), Color::White));
        // black pawn d5 attacks c4 and e4
        assert!(board.is_square_attacked(sq("c4"), Color::Black));
        assert!(!board.is_square_attacked(sq("c6"), Color::Black));
        assert!(!board.is_square_attacked(sq("d4"), Color::Black));
    }

    #[test]
    fn test_king_attacks_adjacent_only() {
        let board = Board::from_fen("8/8/8/8/3k4/8/8/K7 w - - 0 1");
        assert!(board.is_square_attacked(sq("e5"), Color::Black));
        assert!(!board.is_square_attacked(sq("f6"), Color::Black));
    }

    #[test]
    fn test_attackers_lists_every_checker() {
        let board = Board::from_fen("4k3/8/3N4/8/8/8/8/4R1K1 b - - 0 1");
        let mut attackers = board.attackers(sq("e8"), Color::White);
        attackers.sort();
        assert_eq!(attackers, vec![sq("d6"), sq("e1")]);
    }
}
