//! Move types, movement flags and move list.

use std::fmt;
use std::ops::{BitOr, BitOrAssign, Index};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// Movement classification bitset.
///
/// The first four flags are known at generation time. The check-related flags and the
/// terminal flags are filled in by the classifier, which needs the move applied.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u16);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 1);
    pub const CASTLING: MoveFlags = MoveFlags(1 << 2);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 3);
    pub const CHECK: MoveFlags = MoveFlags(1 << 4);
    pub const DISCOVERY_CHECK: MoveFlags = MoveFlags(1 << 5);
    pub const DOUBLE_CHECK: MoveFlags = MoveFlags(1 << 6);
    pub const CHECKMATE: MoveFlags = MoveFlags(1 << 7);
    pub const STALEMATE: MoveFlags = MoveFlags(1 << 8);

    const CLASSIFIED: u16 = Self::CHECK.0
        | Self::DISCOVERY_CHECK.0
        | Self::DOUBLE_CHECK.0
        | Self::CHECKMATE.0
        | Self::STALEMATE.0;

    #[inline]
    #[must_use]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: MoveFlags) {
        self.0 |= other.0;
    }

    /// The generation-time flags only, with any classification removed.
    #[inline]
    #[must_use]
    pub(crate) const fn structural(self) -> MoveFlags {
        MoveFlags(self.0 & !Self::CLASSIFIED)
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.contains(Self::CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.contains(Self::EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.contains(Self::CASTLING)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.contains(Self::PROMOTION)
    }

    #[inline]
    #[must_use]
    pub const fn is_check(self) -> bool {
        self.contains(Self::CHECK)
    }

    #[inline]
    #[must_use]
    pub const fn is_discovery_check(self) -> bool {
        self.contains(Self::DISCOVERY_CHECK)
    }

    #[inline]
    #[must_use]
    pub const fn is_double_check(self) -> bool {
        self.contains(Self::DOUBLE_CHECK)
    }

    #[inline]
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        self.contains(Self::CHECKMATE)
    }

    #[inline]
    #[must_use]
    pub const fn is_stalemate(self) -> bool {
        self.contains(Self::STALEMATE)
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveFlags {
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MoveFlags, &str); 9] = [
            (MoveFlags::CAPTURE, "capture"),
            (MoveFlags::EN_PASSANT, "ep"),
            (MoveFlags::CASTLING, "castle"),
            (MoveFlags::PROMOTION, "promo"),
            (MoveFlags::CHECK, "check"),
            (MoveFlags::DISCOVERY_CHECK, "discovery"),
            (MoveFlags::DOUBLE_CHECK, "double"),
            (MoveFlags::CHECKMATE, "mate"),
            (MoveFlags::STALEMATE, "stalemate"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "MoveFlags({})", names.join("|"))
    }
}

/// A movement target: origin, destination, resulting piece and flags.
///
/// Castling is recorded as the king's move; the rook's relocation is implied by the
/// destination column. En passant carries the square of the pawn it removes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    promotion: Option<Piece>,
    en_passant_capture: Option<Square>,
    flags: MoveFlags,
}

impl Move {
    pub(crate) const fn new(from: Square, to: Square, piece: Piece, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            piece,
            promotion: None,
            en_passant_capture: None,
            flags,
        }
    }

    pub(crate) const fn promotion_to(
        from: Square,
        to: Square,
        promotion: Piece,
        flags: MoveFlags,
    ) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            promotion: Some(promotion),
            en_passant_capture: None,
            flags: MoveFlags(flags.0 | MoveFlags::PROMOTION.0),
        }
    }

    pub(crate) const fn en_passant(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            promotion: None,
            en_passant_capture: Some(captured),
            flags: MoveFlags(MoveFlags::CAPTURE.0 | MoveFlags::EN_PASSANT.0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that moves
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The piece standing on the destination afterwards
    #[inline]
    #[must_use]
    pub const fn result_piece(self) -> Piece {
        match self.promotion {
            Some(piece) => piece,
            None => self.piece,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Square of the pawn removed by an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant_capture(self) -> Option<Square> {
        self.en_passant_capture
    }

    #[inline]
    #[must_use]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags.is_capture()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags.is_en_passant()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags.is_castling()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flags.is_promotion()
    }

    /// Rook origin and destination for a castling move.
    #[must_use]
    pub fn castling_rook(self) -> Option<(Square, Square)> {
        if !self.is_castling() {
            return None;
        }
        let row = self.to.row();
        let (rook_from, rook_to) = if self.to.column() == 6 { (7, 5) } else { (0, 3) };
        Some((Square::ALL[row * 8 + rook_from], Square::ALL[row * 8 + rook_to]))
    }

    /// Same move with its classification replaced.
    #[inline]
    #[must_use]
    pub(crate) const fn with_flags(self, flags: MoveFlags) -> Self {
        Move { flags, ..self }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, " {:?})", self.flags)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Option<Move>; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [None; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = Some(mv);
        self.len += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves[..self.len].iter().flatten().copied()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            self.moves[idx]
        } else {
            None
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Move> {
        self.iter().collect()
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            if let Some(mv) = self.moves[read] {
                if keep(mv) {
                    self.moves[write] = Some(mv);
                    write += 1;
                }
            }
        }
        for slot in &mut self.moves[write..self.len] {
            *slot = None;
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            mv
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        match &self.moves[idx] {
            Some(mv) => mv,
            None => unreachable!("slots below len are always filled"),
        }
    }
}
