use super::{CastlingRights, Color, Move, Piece, Square};

/// Everything `apply_move` overwrites, so `undo_move` can put it back.
#[derive(Clone, Debug)]
pub(crate) struct UndoFrame {
    pub(crate) mv: Move,
    /// Captured piece and the square it stood on (differs from `mv.to()` for en passant)
    pub(crate) captured: Option<((Color, Piece), Square)>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    /// King square before the move, if the king moved
    pub(crate) previous_king: Option<Square>,
    /// Rook origin and destination, if the move castled
    pub(crate) rook: Option<(Square, Square)>,
}

/// Strict LIFO stack of undo frames.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    frames: Vec<UndoFrame>,
}

impl History {
    pub(crate) fn new() -> Self {
        History { frames: Vec::new() }
    }

    pub(crate) fn push(&mut self, frame: UndoFrame) {
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<UndoFrame> {
        self.frames.pop()
    }

    pub(crate) fn last_move(&self) -> Option<Move> {
        self.frames.last().map(|frame| frame.mv)
    }

    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }
}
