use super::super::attack_tables::king_steps;
use super::super::types::{adjacent, same_position, Square, SquareList};
use super::super::State;

impl State {
    /// Destinations for the human's king.
    ///
    /// Rejects squares next to the black king, the king's own square, the
    /// pawn's square while the black king guards it, and any square the
    /// black side attacks (see [`State::is_in_check`]).
    #[must_use]
    pub fn white_king_moves(&self) -> SquareList {
        let mut moves = SquareList::new();
        for &to in king_steps(self.white_king) {
            if adjacent(to, self.black_king) {
                continue;
            }
            if same_position(to, self.white_king) {
                continue;
            }
            if same_position(to, self.pawn) && adjacent(self.pawn, self.black_king) {
                continue;
            }
            if self.is_in_check(to) {
                continue;
            }
            moves.push(to);
        }
        moves
    }

    /// Destinations for the engine's king: empty squares out of reach of the
    /// white king.
    #[must_use]
    pub fn black_king_moves(&self) -> SquareList {
        let mut moves = SquareList::new();
        for &to in king_steps(self.black_king) {
            if same_position(to, self.pawn) || same_position(to, self.white_king) {
                continue;
            }
            if adjacent(to, self.white_king) {
                continue;
            }
            moves.push(to);
        }
        moves
    }

    /// True if a white king standing on `sq` would be attacked.
    ///
    /// The queen attacks its whole row, column and diagonals with no
    /// blocking; the pawn attacks its two forward diagonals; the black king
    /// attacks its neighbours.
    #[must_use]
    pub fn is_in_check(&self, sq: Square) -> bool {
        if self.promoted && super::queen_attacks(sq, self.pawn) {
            return true;
        }
        if !self.promoted && self.pawn_attack_squares().contains(sq) {
            return true;
        }
        adjacent(sq, self.black_king)
    }
}
