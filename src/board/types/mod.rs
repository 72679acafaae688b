//! Core board types.
//!
//! - `Square` - (row, col) board coordinate plus the geometry predicates
//! - `Piece` and `Color` - the four movable piece kinds and the two sides
//! - `Move`, `SquareList`, `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, SquareList};
pub use piece::{Color, Piece};
pub use square::{adjacent, chebyshev, inside_board, manhattan, same_position, Square, BOARD_SIZE};
