//! Per-square lookup tables, built once on first use.

use once_cell::sync::Lazy;

use super::{Square, KNIGHT_OFFSETS, QUEEN_DIRECTIONS};

/// Squares a knight on each square jumps to.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
});

/// Rays from each square in the eight queen directions, nearest square first.
///
/// Directions follow `QUEEN_DIRECTIONS`: the first four are orthogonal, the last four
/// diagonal.
pub(crate) static RAYS: Lazy<[[Vec<Square>; 8]; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        std::array::from_fn(|dir| {
            let (dr, dc) = QUEEN_DIRECTIONS[dir];
            let mut ray = Vec::with_capacity(7);
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                ray.push(next);
                current = next;
            }
            ray
        })
    })
});

#[inline]
pub(crate) const fn is_orthogonal(direction: usize) -> bool {
    direction < 4
}
