//! Fluent builder for constructing game states.
//!
//! Allows describing a position piece by piece and validating it once.
//!
//! # Example
//! ```
//! use mini_chess::board::{Square, StateBuilder};
//!
//! let state = StateBuilder::new()
//!     .white_king(Square(7, 0))
//!     .black_king(Square(0, 7))
//!     .queen(Square(3, 3))
//!     .build()
//!     .unwrap();
//! assert!(state.promoted);
//! ```

use super::error::StateError;
use super::{Square, State};

/// A fluent builder for constructing `State` values.
///
/// Starts from the initial position; every setter overrides one piece.
#[derive(Clone, Debug)]
pub struct StateBuilder {
    state: State,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateBuilder {
    /// Create a builder seeded with the initial position.
    #[must_use]
    pub const fn new() -> Self {
        StateBuilder {
            state: State::initial(),
        }
    }

    #[must_use]
    pub const fn white_king(mut self, square: Square) -> Self {
        self.state.white_king = square;
        self
    }

    #[must_use]
    pub const fn black_king(mut self, square: Square) -> Self {
        self.state.black_king = square;
        self
    }

    /// Place the unpromoted pawn.
    #[must_use]
    pub const fn pawn(mut self, square: Square) -> Self {
        self.state.pawn = square;
        self.state.promoted = false;
        self
    }

    /// Place the promoted queen.
    #[must_use]
    pub const fn queen(mut self, square: Square) -> Self {
        self.state.pawn = square;
        self.state.promoted = true;
        self
    }

    /// Build the state, checking every piece is on the board and no two
    /// pieces share a square.
    pub fn build(self) -> Result<State, StateError> {
        self.state.validate()?;
        Ok(self.state)
    }

    /// Build without validation, for deliberately malformed test inputs.
    #[must_use]
    pub const fn build_unchecked(self) -> State {
        self.state
    }
}
