//! Board model, move generation, evaluation and search for the
//! king-and-pawn endgame.
//!
//! Three pieces share an 8x8 board: the human's white king, and the
//! engine's black king and black pawn (which promotes to a queen on the
//! last row). Every operation takes an explicit [`State`] and returns new
//! values; nothing here keeps hidden game state.
//!
//! # Example
//! ```
//! use mini_chess::board::{best_move, initial_state, legal_moves_for, winner, Piece};
//!
//! let state = initial_state();
//! assert!(winner(&state).is_none());
//! let moves = legal_moves_for(Piece::WhiteKing, &state).unwrap();
//! println!("White king has {} moves", moves.len());
//! let reply = best_move(&state, 3);
//! assert!(reply.is_some());
//! ```

mod attack_tables;
mod builder;
mod error;
mod eval;
mod movegen;
mod outcome;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::StateBuilder;
pub use error::{MoveError, SquareError, StateError};
pub use state::{initial_state, State, PROMOTION_ROW};
pub use types::{
    adjacent, chebyshev, inside_board, manhattan, same_position, Color, Move, MoveList, Piece,
    Square, SquareList, BOARD_SIZE,
};

// Public API - rules, evaluation and search
pub use eval::{evaluate, DANGER_PENALTY, KING_DISTANCE_PENALTY, PAWN_LOST_SCORE, PROMOTION_BONUS};
pub use movegen::{apply_move, legal_moves_for, queen_attacks};
pub use outcome::{winner, Outcome, WinReason};
pub use search::{
    best_move, find_best_move, minimax, SearchParams, SearchReport, SearchResult, SearchStats,
    Strategy,
};
