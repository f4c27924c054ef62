use super::super::{Board, Color, Move, MoveFlags, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_row = color.pawn_promotion_row();

        let Some(forward_sq) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward_sq) {
            push_pawn_move(moves, from, forward_sq, promotion_row, MoveFlags::NONE);
            if from.row() == color.pawn_start_row() {
                if let Some(double_sq) = forward_sq.offset(dir, 0) {
                    if self.is_empty(double_sq) {
                        moves.push(Move::new(from, double_sq, Piece::Pawn, MoveFlags::NONE));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target_sq) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target_sq) {
                Some((target_color, _)) if target_color != color => {
                    push_pawn_move(moves, from, target_sq, promotion_row, MoveFlags::CAPTURE);
                }
                None if Some(target_sq) == self.en_passant_target => {
                    // the captured pawn stands beside `from`, on the target's column
                    let captured = Square::ALL[from.row() * 8 + target_sq.column()];
                    if self.piece_at(captured) == Some((color.opponent(), Piece::Pawn)) {
                        moves.push(Move::en_passant(from, target_sq, captured));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Push a pawn move, expanding it into the four promotions on the far row.
fn push_pawn_move(
    moves: &mut MoveList,
    from: Square,
    to: Square,
    promotion_row: usize,
    flags: MoveFlags,
) {
    if to.row() == promotion_row {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promotion_to(from, to, promo, flags));
        }
    } else {
        moves.push(Move::new(from, to, Piece::Pawn, flags));
    }
}
