use super::super::types::{same_position, SquareList};
use super::super::State;

impl State {
    /// Pawn destinations: one step forward onto a free square, plus a
    /// diagonal-forward capture when the white king stands there.
    ///
    /// Promotion is not applied here; `make_move` sets it when the pawn
    /// lands on the last row.
    #[must_use]
    pub fn pawn_moves(&self) -> SquareList {
        let mut moves = SquareList::new();
        if let Some(forward) = self.pawn.offset(1, 0) {
            if self.is_square_free(forward) {
                moves.push(forward);
            }
        }
        for to in self.pawn_attack_squares().iter() {
            if same_position(*to, self.white_king) {
                moves.push(*to);
            }
        }
        moves
    }

    /// The on-board diagonal-forward squares the pawn attacks.
    #[must_use]
    pub(crate) fn pawn_attack_squares(&self) -> SquareList {
        let mut squares = SquareList::new();
        for dc in [-1, 1] {
            if let Some(sq) = self.pawn.offset(1, dc) {
                squares.push(sq);
            }
        }
        squares
    }
}
