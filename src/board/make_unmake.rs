use super::history::UndoFrame;
use super::{Board, Color, Move, Piece, Square};

/// Clear the castling right tied to a rook's home corner, if `sq` is one.
fn clear_corner_right(board: &mut Board, color: Color, sq: Square) {
    if sq.row() != color.back_row() {
        return;
    }
    match sq.column() {
        0 => board.castling_rights.remove(color, false),
        7 => board.castling_rights.remove(color, true),
        _ => {}
    }
}

impl Board {
    /// Play a legal move, recording an undo frame.
    ///
    /// `mv` must come from this position's legal move list; applying anything else
    /// leaves the board in an unspecified state.
    pub fn apply_move(&mut self, mv: Move) {
        let color = self.side_to_move;
        debug_assert_eq!(
            self.piece_at(mv.from()),
            Some((color, mv.piece())),
            "apply_move {mv} does not match the board"
        );

        let mut frame = UndoFrame {
            mv,
            captured: None,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_king: None,
            rook: None,
        };

        if !mv.is_castling() {
            let capture_square = mv.en_passant_capture().unwrap_or(mv.to());
            if let Some(captured) = self.take_piece(capture_square) {
                frame.captured = Some((captured, capture_square));
            }
        }

        self.take_piece(mv.from());
        self.put_piece(mv.to(), color, mv.result_piece());

        if let Some((rook_from, rook_to)) = mv.castling_rook() {
            self.take_piece(rook_from);
            self.put_piece(rook_to, color, Piece::Rook);
            frame.rook = Some((rook_from, rook_to));
        }

        match mv.piece() {
            Piece::King => {
                frame.previous_king = Some(mv.from());
                self.castling_rights.remove_color(color);
            }
            Piece::Rook => clear_corner_right(self, color, mv.from()),
            _ => {}
        }
        if let Some(((captured_color, Piece::Rook), square)) = frame.captured {
            clear_corner_right(self, captured_color, square);
        }

        if mv.piece() == Piece::Pawn || frame.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.en_passant_target = None;
        if mv.piece() == Piece::Pawn && mv.from().row().abs_diff(mv.to().row()) == 2 {
            let mid_row = (mv.from().row() + mv.to().row()) / 2;
            self.en_passant_target = Some(Square::ALL[mid_row * 8 + mv.from().column()]);
        }

        self.side_to_move = color.opponent();
        self.history.push(frame);
    }

    /// Undo the most recent `apply_move` and return the move that was undone.
    ///
    /// # Panics
    /// Panics when there is no applied move left to undo. Unpaired undo means the caller
    /// broke the apply/undo discipline, and continuing would corrupt the position.
    pub fn undo_move(&mut self) -> Move {
        let Some(frame) = self.history.pop() else {
            panic!("undo_move called with no applied move to undo");
        };
        let mv = frame.mv;
        let color = self.side_to_move.opponent();
        self.side_to_move = color;

        if let Some((rook_from, rook_to)) = frame.rook {
            self.take_piece(rook_to);
            self.put_piece(rook_from, color, Piece::Rook);
        }

        self.take_piece(mv.to());
        self.put_piece(mv.from(), color, mv.piece());
        if let Some(previous_king) = frame.previous_king {
            self.kings[color.index()] = Some(previous_king);
        }

        if let Some(((captured_color, captured_piece), square)) = frame.captured {
            self.put_piece(square, captured_color, captured_piece);
        }

        self.castling_rights = frame.previous_castling_rights;
        self.en_passant_target = frame.previous_en_passant_target;
        self.halfmove_clock = frame.previous_halfmove_clock;
        self.fullmove_number = frame.previous_fullmove_number;

        mv
    }

    /// The move `undo_move` would take back next.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last_move()
    }
}
