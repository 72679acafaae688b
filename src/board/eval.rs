use super::types::{manhattan, same_position};
use super::State;

/// Score for the engine losing its pawn.
pub const PAWN_LOST_SCORE: i32 = -1000;
/// Penalty per step the black king stands beyond arm's length of its pawn.
pub const KING_DISTANCE_PENALTY: i32 = -20;
/// Penalty for the pawn/queen sitting within one step of the white king.
pub const DANGER_PENALTY: i32 = -30;
pub const PROMOTION_BONUS: i32 = 10;

/// Heuristic score of `state`, positive favouring the engine (black).
///
/// Static only; there is no lookahead and no term rewarding white.
#[must_use]
pub fn evaluate(state: &State) -> i32 {
    if !state.promoted && same_position(state.pawn, state.white_king) {
        return PAWN_LOST_SCORE;
    }

    let distance = manhattan(state.black_king, state.pawn) as i32;
    let distance_penalty = if distance > 1 {
        KING_DISTANCE_PENALTY * (distance - 1)
    } else {
        0
    };

    let danger_penalty = if manhattan(state.pawn, state.white_king) <= 1 {
        DANGER_PENALTY
    } else {
        0
    };

    let promotion_bonus = if state.promoted { PROMOTION_BONUS } else { 0 };

    distance_penalty + danger_penalty + promotion_bonus
}

impl State {
    #[inline]
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        evaluate(self)
    }
}
