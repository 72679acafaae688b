//! Square type and board geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, col).
///
/// Row 0 is the black side of the board (rank 8), row 7 the white side
/// (rank 1). The black pawn advances towards increasing rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True if both coordinates are on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Get the square's index (0-63, row-major)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// The square reached by stepping `(dr, dc)`, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let r = self.0 as isize + dr;
        let c = self.1 as isize + dc;
        if inside_board(r, c) {
            Some(Square(r as usize, c as usize))
        } else {
            None
        }
    }
}

/// True iff both coordinates lie in `[0, 8)`.
#[inline]
#[must_use]
pub fn inside_board(r: isize, c: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&r) && (0..BOARD_SIZE as isize).contains(&c)
}

/// King-move (Chebyshev) distance between two squares.
#[inline]
#[must_use]
pub fn chebyshev(a: Square, b: Square) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

/// Manhattan distance between two squares.
#[inline]
#[must_use]
pub fn manhattan(a: Square, b: Square) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// True iff `a` and `b` are exactly one king step apart (never for `a == b`).
#[inline]
#[must_use]
pub fn adjacent(a: Square, b: Square) -> bool {
    chebyshev(a, b) == 1
}

#[inline]
#[must_use]
pub fn same_position(a: Square, b: Square) -> bool {
    a.0 == b.0 && a.1 == b.1
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
        } else {
            write!(f, "({},{})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => BOARD_SIZE - (r - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
