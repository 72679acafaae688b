use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::outcome::winner;
use super::types::{adjacent, same_position, Move, Piece, Square, BOARD_SIZE};

/// Row the pawn promotes on.
pub const PROMOTION_ROW: usize = BOARD_SIZE - 1;

/// Complete game snapshot.
///
/// A value type: every move produces a new `State`, nothing is mutated in
/// place. `pawn` holds the queen's square once `promoted` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    pub white_king: Square,
    pub black_king: Square,
    pub pawn: Square,
    pub promoted: bool,
}

impl Default for State {
    fn default() -> Self {
        State::initial()
    }
}

/// The fixed starting position: white king e1, black king e8, pawn d7.
#[must_use]
pub fn initial_state() -> State {
    State::initial()
}

impl State {
    #[must_use]
    pub const fn initial() -> Self {
        State {
            white_king: Square(7, 4),
            black_king: Square(0, 4),
            pawn: Square(1, 3),
            promoted: false,
        }
    }

    #[must_use]
    pub const fn new(white_king: Square, black_king: Square, pawn: Square, promoted: bool) -> Self {
        State {
            white_king,
            black_king,
            pawn,
            promoted,
        }
    }

    /// The kind the pawn/queen piece currently moves as.
    #[inline]
    #[must_use]
    pub const fn runner(&self) -> Piece {
        Piece::black_runner(self.promoted)
    }

    /// Square of the given piece, or `None` for the pawn/queen kind that is
    /// not on the board in this state.
    #[must_use]
    pub fn square_of(&self, piece: Piece) -> Option<Square> {
        match piece {
            Piece::WhiteKing => Some(self.white_king),
            Piece::BlackKing => Some(self.black_king),
            Piece::Pawn | Piece::Queen if piece == self.runner() => Some(self.pawn),
            Piece::Pawn | Piece::Queen => None,
        }
    }

    /// Piece standing on `sq`. The black king shadows the others, then the
    /// pawn/queen, so a capture reads as the capturing piece.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if same_position(sq, self.black_king) {
            Some(Piece::BlackKing)
        } else if same_position(sq, self.pawn) {
            Some(self.runner())
        } else if same_position(sq, self.white_king) {
            Some(Piece::WhiteKing)
        } else {
            None
        }
    }

    /// Free = not occupied by any of the three pieces.
    #[inline]
    #[must_use]
    pub fn is_square_free(&self, sq: Square) -> bool {
        !(same_position(sq, self.white_king)
            || same_position(sq, self.black_king)
            || same_position(sq, self.pawn))
    }

    /// Check the board invariants: every piece on the board, no two pieces
    /// on one square.
    pub fn validate(&self) -> Result<(), StateError> {
        let runner = self.runner();
        let placed = [
            (Piece::WhiteKing, self.white_king),
            (Piece::BlackKing, self.black_king),
            (runner, self.pawn),
        ];

        for (piece, square) in placed {
            if !square.is_valid() {
                return Err(StateError::OffBoard { piece, square });
            }
        }

        for (i, &(first, a)) in placed.iter().enumerate() {
            for &(second, b) in &placed[i + 1..] {
                if same_position(a, b) {
                    return Err(StateError::Overlap {
                        first,
                        second,
                        square: a,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply a move without legality checks.
    ///
    /// Moves the named piece and sets `promoted` when a pawn lands on the
    /// promotion row. Captures leave two pieces on one square; the
    /// game-over oracle reads that as the end of the game.
    #[must_use]
    pub(crate) fn make_move(&self, mv: Move) -> State {
        let mut next = *self;
        match mv.piece {
            Piece::WhiteKing => next.white_king = mv.to,
            Piece::BlackKing => next.black_king = mv.to,
            Piece::Pawn => {
                next.pawn = mv.to;
                if mv.to.row() == PROMOTION_ROW {
                    next.promoted = true;
                }
            }
            Piece::Queen => next.pawn = mv.to,
        }
        next
    }

    /// A random valid, undecided state with an unpromoted pawn and the kings
    /// apart.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> State {
        loop {
            let mut pick = || Square(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE));
            let white_king = pick();
            let black_king = pick();
            let pawn = Square(rng.gen_range(1..PROMOTION_ROW), rng.gen_range(0..BOARD_SIZE));
            let state = State::new(white_king, black_king, pawn, false);
            if state.validate().is_ok()
                && !adjacent(white_king, black_king)
                && winner(&state).is_none()
            {
                return state;
            }
        }
    }
}
