//! Game-over detection.
//!
//! `winner` only looks at piece placement, never at whose turn it is, so the
//! search can call it on hypothetical states.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::movegen::queen_attacks;
use super::types::{same_position, Color};
use super::State;

/// How a game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WinReason {
    /// The white king took the unpromoted pawn
    PawnCaptured,
    /// The pawn or queen landed on the white king
    KingCapturedByPawn,
    /// The black king landed on the white king
    KingCapturedByKing,
    /// The queen has the white king on one of its lines
    QueenAttack,
}

/// End-of-game result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The human (white) side won
    WhiteWins(WinReason),
    /// The automated (black) side won
    BlackWins(WinReason),
    /// The side to move has no legal move
    NoMoves(Color),
}

impl Outcome {
    /// The winning side, if the game has one.
    #[must_use]
    pub const fn winning_side(self) -> Option<Color> {
        match self {
            Outcome::WhiteWins(_) => Some(Color::White),
            Outcome::BlackWins(_) => Some(Color::Black),
            Outcome::NoMoves(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins(_) => write!(f, "White king captured the pawn, player wins"),
            Outcome::BlackWins(WinReason::KingCapturedByPawn) => {
                write!(f, "Black pawn captured the white king, computer wins")
            }
            Outcome::BlackWins(WinReason::KingCapturedByKing) => {
                write!(f, "Black king captured the white king, computer wins")
            }
            Outcome::BlackWins(_) => write!(f, "Black queen attacks the white king, computer wins"),
            Outcome::NoMoves(side) => write!(f, "No legal move for {side}, game drawn"),
        }
    }
}

/// Decide whether `state` ends the game. Checks run in a fixed order; the
/// first match wins.
#[must_use]
pub fn winner(state: &State) -> Option<Outcome> {
    if !state.promoted && same_position(state.white_king, state.pawn) {
        return Some(Outcome::WhiteWins(WinReason::PawnCaptured));
    }
    if same_position(state.pawn, state.white_king) {
        return Some(Outcome::BlackWins(WinReason::KingCapturedByPawn));
    }
    if same_position(state.black_king, state.white_king) {
        return Some(Outcome::BlackWins(WinReason::KingCapturedByKing));
    }
    if state.promoted && queen_attacks(state.white_king, state.pawn) {
        return Some(Outcome::BlackWins(WinReason::QueenAttack));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn king_on_unpromoted_pawn_is_a_player_win() {
        let s = State::new(Square(2, 2), Square(0, 0), Square(2, 2), false);
        assert_eq!(winner(&s), Some(Outcome::WhiteWins(WinReason::PawnCaptured)));
        assert_eq!(winner(&s).and_then(Outcome::winning_side), Some(Color::White));
    }

    #[test]
    fn queen_on_king_square_is_a_computer_win() {
        let s = State::new(Square(2, 2), Square(0, 0), Square(2, 2), true);
        assert_eq!(
            winner(&s),
            Some(Outcome::BlackWins(WinReason::KingCapturedByPawn))
        );
    }

    #[test]
    fn black_king_capture_is_a_computer_win() {
        let s = State::new(Square(4, 4), Square(4, 4), Square(1, 1), false);
        assert_eq!(
            winner(&s),
            Some(Outcome::BlackWins(WinReason::KingCapturedByKing))
        );
    }

    #[test]
    fn queen_diagonal_ignores_blockers() {
        // black king stands between queen and white king on the diagonal
        let s = State::new(Square(5, 5), Square(4, 4), Square(2, 2), true);
        assert_eq!(winner(&s), Some(Outcome::BlackWins(WinReason::QueenAttack)));
    }

    #[test]
    fn outcome_messages_name_the_winner() {
        assert!(Outcome::WhiteWins(WinReason::PawnCaptured)
            .to_string()
            .contains("player wins"));
        assert!(Outcome::BlackWins(WinReason::QueenAttack)
            .to_string()
            .contains("computer wins"));
        assert!(Outcome::NoMoves(Color::White).to_string().contains("white"));
    }
}
