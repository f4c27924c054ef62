//! Post-move classification: check, discovered check, double check, mate, stalemate.
//!
//! These flags need the move played and, for the terminal flags, a pass over the
//! opponent's replies, so they are computed on request rather than during generation.

use super::{Board, Move, MoveFlags, MoveList};

impl Board {
    /// Check-related flags for `mv`, which must be the move just applied.
    ///
    /// Returns the flags and whether the side now to move is in check.
    pub(crate) fn check_flags(&self, mv: Move) -> (MoveFlags, bool) {
        let mover = self.side_to_move.opponent();
        let mut flags = mv.flags().structural();

        let Some(king) = self.king_square(self.side_to_move) else {
            return (flags, false);
        };
        let attackers = self.attackers(king, mover);
        if attackers.is_empty() {
            return (flags, false);
        }

        flags |= MoveFlags::CHECK;
        let rook_to = mv.castling_rook().map(|(_, to)| to);
        let direct = attackers
            .iter()
            .any(|&sq| sq == mv.to() || Some(sq) == rook_to);
        // Double check pairs the moved piece's own check with an unmasked one.
        if !direct {
            flags |= MoveFlags::DISCOVERY_CHECK;
        } else if attackers.len() >= 2 {
            flags |= MoveFlags::DOUBLE_CHECK;
        }
        (flags, true)
    }

    /// Full flags for `mv`, which must be the move just applied.
    pub(crate) fn classify_applied(&mut self, mv: Move) -> MoveFlags {
        let (mut flags, in_check) = self.check_flags(mv);
        if !self.has_legal_move() {
            flags |= terminal_flag(in_check);
        }
        flags
    }

    /// Classify a legal move without changing the position.
    pub fn classify(&mut self, mv: Move) -> MoveFlags {
        self.apply_move(mv);
        let flags = self.classify_applied(mv);
        self.undo_move();
        flags
    }

    /// Legal moves with every flag filled in.
    pub fn legal_moves_classified(&mut self) -> MoveList {
        let moves = self.legal_moves();
        let mut classified = MoveList::new();
        for mv in moves {
            let flags = self.classify(mv);
            classified.push(mv.with_flags(flags));
        }
        classified
    }
}

/// The flag for a side with no legal replies.
#[inline]
pub(crate) fn terminal_flag(in_check: bool) -> MoveFlags {
    if in_check {
        MoveFlags::CHECKMATE
    } else {
        MoveFlags::STALEMATE
    }
}
