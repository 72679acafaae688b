pub mod board;
pub mod engine;
pub mod protocol;

pub use board::{Color, Move, Outcome, Piece, Square, State};
pub use engine::GameController;
