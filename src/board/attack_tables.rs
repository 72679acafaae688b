use once_cell::sync::Lazy;

use super::types::{Square, BOARD_SIZE};

const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// King step offsets in generation order (row-major around the king).
pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Queen ray directions in generation order: orthogonals, then diagonals.
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// On-board king steps from every square, in `KING_DELTAS` order.
pub(crate) static KING_STEPS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    (0..SQUARES)
        .map(|idx| {
            let from = Square::from_index(idx);
            KING_DELTAS
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        })
        .collect()
});

/// Empty-board rays from every square, one per `QUEEN_DIRECTIONS` entry,
/// each ordered nearest square first.
pub(crate) static QUEEN_RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    (0..SQUARES)
        .map(|idx| {
            let from = Square::from_index(idx);
            QUEEN_DIRECTIONS.map(|(dr, dc)| {
                let mut ray = Vec::new();
                let mut cur = from;
                while let Some(next) = cur.offset(dr, dc) {
                    ray.push(next);
                    cur = next;
                }
                ray
            })
        })
        .collect()
});

#[inline]
pub(crate) fn king_steps(from: Square) -> &'static [Square] {
    &KING_STEPS[from.as_index()]
}

#[inline]
pub(crate) fn queen_rays(from: Square) -> &'static [Vec<Square>; 8] {
    &QUEEN_RAYS[from.as_index()]
}
