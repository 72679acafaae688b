use super::super::attack_tables::queen_rays;
use super::super::types::{same_position, Square, SquareList};
use super::super::State;

/// True if `target` shares a row, column or diagonal with `queen`.
///
/// Deliberately ignores pieces in between.
#[inline]
#[must_use]
pub fn queen_attacks(target: Square, queen: Square) -> bool {
    target.0 == queen.0
        || target.1 == queen.1
        || target.0.abs_diff(queen.0) == target.1.abs_diff(queen.1)
}

impl State {
    /// Queen destinations along the eight rays from the pawn's square.
    ///
    /// A ray stops at the first occupied square; that square is included
    /// when it holds either king.
    #[must_use]
    pub fn queen_moves(&self) -> SquareList {
        let mut moves = SquareList::new();
        for ray in queen_rays(self.pawn) {
            for &to in ray {
                if same_position(to, self.white_king) || same_position(to, self.black_king) {
                    moves.push(to);
                    break;
                }
                if !self.is_square_free(to) {
                    break;
                }
                moves.push(to);
            }
        }
        moves
    }
}
