//! Move representation and fixed-capacity lists of destinations and moves.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Piece, Square};
use crate::board::error::SquareError;

/// A move: which piece goes where.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: Piece,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(piece: Piece, to: Square) -> Self {
        Move { piece, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.to_char(), self.to)
    }
}

impl FromStr for Move {
    type Err = SquareError;

    /// Parses `<piece letter><square>`, e.g. `pd6` or `Ke2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let piece = chars.next().and_then(Piece::from_char).ok_or_else(invalid)?;
        let to = chars.as_str().parse::<Square>()?;
        Ok(Move { piece, to })
    }
}

/// Upper bound on destinations for one piece (a queen sees at most 27).
pub(crate) const MAX_TARGETS: usize = 32;
/// Upper bound on candidate moves for one side.
pub(crate) const MAX_MOVES: usize = 48;

const EMPTY_SQUARE: Square = Square(0, 0);
const EMPTY_MOVE: Move = Move::new(Piece::WhiteKing, EMPTY_SQUARE);

/// Ordered destinations for one piece, with a fixed-size backing array.
///
/// Order is generation order and is significant for search tie-breaking.
#[derive(Clone, Copy, Debug)]
pub struct SquareList {
    squares: [Square; MAX_TARGETS],
    len: usize,
}

impl SquareList {
    #[must_use]
    pub(crate) const fn new() -> Self {
        SquareList {
            squares: [EMPTY_SQUARE; MAX_TARGETS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[must_use]
    pub fn first(&self) -> Option<Square> {
        self.as_slice().first().copied()
    }

    /// Keep only destinations matching `keep`, preserving order.
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(Square) -> bool) -> SquareList {
        let mut out = SquareList::new();
        for &sq in self {
            if keep(sq) {
                out.push(sq);
            }
        }
        out
    }
}

impl Default for SquareList {
    fn default() -> Self {
        SquareList::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "SquareList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}

/// Ordered candidate moves for one side, with a fixed-size backing array.
#[derive(Clone, Copy, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub(crate) const fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Append one move per destination for `piece`.
    pub(crate) fn extend_from(&mut self, piece: Piece, targets: &SquareList) {
        for &to in targets {
            self.push(Move::new(piece, to));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.as_slice().first().copied()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
