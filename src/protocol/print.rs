use std::fmt::Write as _;

use crate::board::{Move, Square, SquareList, State, BOARD_SIZE};

/// ASCII diagram of `state`, rank 8 at the top.
#[must_use]
pub fn format_board(state: &State) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{} ", BOARD_SIZE - row);
        for col in 0..BOARD_SIZE {
            let c = state
                .piece_at(Square(row, col))
                .map_or('.', |piece| piece.to_char());
            out.push(c);
            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

#[must_use]
pub fn format_legal(moves: &SquareList) -> String {
    let mut line = String::from("legal");
    for sq in moves {
        let _ = write!(line, " {sq}");
    }
    line
}

#[must_use]
pub fn format_bestmove(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => format!("bestmove {mv}"),
        None => "bestmove (none)".to_string(),
    }
}
