//! Per-piece move generation.
//!
//! Every generator reads an explicit `State`, so the same code serves live
//! play and hypothetical search states. Destination order is generation
//! order and decides search ties.

mod kings;
mod pawns;
mod sliders;

pub use sliders::queen_attacks;

use super::error::MoveError;
use super::types::{adjacent, same_position, Color, Move, MoveList, Piece, Square, SquareList};
use super::State;

impl State {
    /// Raw destinations for `piece`, without checking that the piece is on
    /// the board in this state.
    #[must_use]
    pub fn generate_piece_moves(&self, piece: Piece) -> SquareList {
        match piece {
            Piece::WhiteKing => self.white_king_moves(),
            Piece::BlackKing => self.black_king_moves(),
            Piece::Pawn => self.pawn_moves(),
            Piece::Queen => self.playable_queen_moves(),
        }
    }

    /// Queen destinations minus the black king's own square.
    pub(crate) fn playable_queen_moves(&self) -> SquareList {
        let black_king = self.black_king;
        self.queen_moves().filtered(|sq| !same_position(sq, black_king))
    }

    /// Pawn moves the engine considers: only those landing next to its king.
    pub(crate) fn guarded_pawn_moves(&self) -> SquareList {
        let black_king = self.black_king;
        self.pawn_moves().filtered(|sq| adjacent(sq, black_king))
    }

    /// Candidate moves for the engine, in search order: guarded pawn moves
    /// (before promotion) or queen moves (after), then black king moves.
    #[must_use]
    pub fn black_candidates(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.promoted {
            moves.extend_from(Piece::Queen, &self.playable_queen_moves());
        } else {
            moves.extend_from(Piece::Pawn, &self.guarded_pawn_moves());
        }
        moves.extend_from(Piece::BlackKing, &self.black_king_moves());
        moves
    }

    /// Candidate moves for the human: every legal white king move.
    #[must_use]
    pub fn white_candidates(&self) -> MoveList {
        let mut moves = MoveList::new();
        moves.extend_from(Piece::WhiteKing, &self.white_king_moves());
        moves
    }

    #[must_use]
    pub fn candidates_for(&self, side: Color) -> MoveList {
        match side {
            Color::White => self.white_candidates(),
            Color::Black => self.black_candidates(),
        }
    }
}

/// Legal destinations for `piece` in `state`.
///
/// Rejects malformed states and a pawn/queen kind that does not match the
/// promotion flag.
pub fn legal_moves_for(piece: Piece, state: &State) -> Result<SquareList, MoveError> {
    state.validate()?;
    if state.square_of(piece).is_none() {
        return Err(MoveError::PieceUnavailable {
            piece,
            promoted: state.promoted,
        });
    }
    Ok(state.generate_piece_moves(piece))
}

/// Apply `piece` to `to` on `state`, returning the new state.
///
/// The move must be among `legal_moves_for(piece, state)`. Promotion is
/// set when a pawn reaches the last row.
pub fn apply_move(state: &State, piece: Piece, to: Square) -> Result<State, MoveError> {
    let legal = legal_moves_for(piece, state)?;
    if !legal.contains(to) {
        return Err(MoveError::IllegalDestination { piece, to });
    }
    Ok(state.make_move(Move::new(piece, to)))
}
