//! Error types for board operations.

use std::fmt;

use super::{Piece, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A `State` that breaks the board invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A piece sits outside the 8x8 board
    OffBoard { piece: Piece, square: Square },
    /// Two pieces share a square
    Overlap {
        first: Piece,
        second: Piece,
        square: Square,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::OffBoard { piece, square } => {
                write!(f, "The {piece} is off the board at {square}")
            }
            StateError::Overlap {
                first,
                second,
                square,
            } => {
                write!(f, "The {first} and the {second} both occupy {square}")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Error type for move requests rejected at the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The state the move was requested against is malformed
    InvalidState(StateError),
    /// Pawn asked for after promotion, or queen before it
    PieceUnavailable { piece: Piece, promoted: bool },
    /// Destination is not among the piece's legal moves
    IllegalDestination { piece: Piece, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidState(e) => write!(f, "Invalid state: {e}"),
            MoveError::PieceUnavailable { piece, promoted } => {
                if *promoted {
                    write!(f, "The {piece} is not on the board after promotion")
                } else {
                    write!(f, "The {piece} is not on the board before promotion")
                }
            }
            MoveError::IllegalDestination { piece, to } => {
                write!(f, "The {piece} cannot move to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidState(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StateError> for MoveError {
    fn from(e: StateError) -> Self {
        MoveError::InvalidState(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_state_error_names_square() {
        let err = StateError::Overlap {
            first: Piece::BlackKing,
            second: Piece::Pawn,
            square: Square(1, 3),
        };
        let msg = err.to_string();
        assert!(msg.contains("black king"));
        assert!(msg.contains("d7"));
    }

    #[test]
    fn test_move_error_wraps_state_error() {
        let inner = StateError::OffBoard {
            piece: Piece::WhiteKing,
            square: Square(8, 0),
        };
        let err: MoveError = inner.clone().into();
        assert_eq!(err, MoveError::InvalidState(inner));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_move_error_illegal_destination() {
        let err = MoveError::IllegalDestination {
            piece: Piece::WhiteKing,
            to: Square(6, 4),
        };
        assert!(err.to_string().contains("e2"));
    }
}
