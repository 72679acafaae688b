//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of the board. White is played by the human, Black by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Parse a side from `w`/`b` (or `white`/`black`)
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Color> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Some(Color::White),
            "b" | "black" => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// The piece kinds that can be moved.
///
/// `Pawn` and `Queen` name the same physical piece before and after
/// promotion; exactly one of them is available in any state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    WhiteKing,
    BlackKing,
    Pawn,
    Queen,
}

impl Piece {
    pub const ALL: [Piece; 4] = [Piece::WhiteKing, Piece::BlackKing, Piece::Pawn, Piece::Queen];

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Piece::WhiteKing => Color::White,
            Piece::BlackKing | Piece::Pawn | Piece::Queen => Color::Black,
        }
    }

    /// Parse a piece letter: `K` white king, `k` black king, `p` pawn, `q` queen.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'K' => Some(Piece::WhiteKing),
            'k' => Some(Piece::BlackKing),
            'p' | 'P' => Some(Piece::Pawn),
            'q' | 'Q' => Some(Piece::Queen),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::WhiteKing => 'K',
            Piece::BlackKing => 'k',
            Piece::Pawn => 'p',
            Piece::Queen => 'q',
        }
    }

    /// The kind the black pawn/queen piece moves as, given the promotion flag.
    #[inline]
    #[must_use]
    pub const fn black_runner(promoted: bool) -> Piece {
        if promoted {
            Piece::Queen
        } else {
            Piece::Pawn
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::WhiteKing => "white king",
            Piece::BlackKing => "black king",
            Piece::Pawn => "pawn",
            Piece::Queen => "queen",
        };
        f.write_str(name)
    }
}
