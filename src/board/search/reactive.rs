//! One-ply rule-based mover.
//!
//! Rules, first match wins:
//! 1. Before promotion, push the pawn if it stays next to the black king.
//! 2. After promotion, move the queen as close to the white king as it can.
//! 3. Otherwise step the black king towards the pawn, never more than one
//!    step further away than it already is.

use crate::board::types::{manhattan, Move, Piece};
use crate::board::State;

#[must_use]
pub fn reactive_move(state: &State) -> Option<Move> {
    if state.promoted {
        let closest = state
            .playable_queen_moves()
            .iter()
            .copied()
            .min_by_key(|&to| manhattan(to, state.white_king));
        if let Some(to) = closest {
            return Some(Move::new(Piece::Queen, to));
        }
    } else if let Some(to) = state.guarded_pawn_moves().first() {
        return Some(Move::new(Piece::Pawn, to));
    }

    let current = manhattan(state.black_king, state.pawn);
    state
        .black_king_moves()
        .iter()
        .copied()
        .filter(|&to| manhattan(to, state.pawn) <= current + 1)
        .min_by_key(|&to| manhattan(to, state.pawn))
        .map(|to| Move::new(Piece::BlackKing, to))
}
