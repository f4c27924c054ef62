use super::super::{Board, Color, Move, MoveFlags, MoveList, Piece, Square};

const KING_COLUMN: usize = 4;

/// Castling geometry for one side: the rook's column, the squares that must be empty,
/// and the squares the king crosses (which must not be attacked).
struct CastlingSide {
    kingside: bool,
    rook_column: usize,
    between: &'static [usize],
    king_path: [usize; 3],
}

const CASTLING_SIDES: [CastlingSide; 2] = [
    CastlingSide {
        kingside: true,
        rook_column: 7,
        between: &[5, 6],
        king_path: [4, 5, 6],
    },
    CastlingSide {
        kingside: false,
        rook_column: 0,
        between: &[1, 2, 3],
        king_path: [4, 3, 2],
    },
];

impl Board {
    /// King steps plus any castling move whose preconditions hold.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_template_moves(from, color, Piece::King, moves);
        self.generate_castling_moves(from, color, moves);
    }

    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let back_row = color.back_row();
        if from != Square::ALL[back_row * 8 + KING_COLUMN] {
            return;
        }
        let at = |column: usize| Square::ALL[back_row * 8 + column];
        let opponent = color.opponent();

        for side in &CASTLING_SIDES {
            if !self.castling_rights.has(color, side.kingside) {
                continue;
            }
            if self.piece_at(at(side.rook_column)) != Some((color, Piece::Rook)) {
                continue;
            }
            if !side.between.iter().all(|&column| self.is_empty(at(column))) {
                continue;
            }
            if side
                .king_path
                .iter()
                .any(|&column| self.is_square_attacked(at(column), opponent))
            {
                continue;
            }
            moves.push(Move::new(
                from,
                at(side.king_path[2]),
                Piece::King,
                MoveFlags::CASTLING,
            ));
        }
    }
}
