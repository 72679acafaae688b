//! Edge case tests for promotion, captures and game-ending positions.

use crate::board::{
    apply_move, initial_state, legal_moves_for, winner, MoveError, Outcome, Piece, Square, State,
    WinReason,
};

#[test]
fn start_position_is_undecided() {
    assert_eq!(winner(&initial_state()), None);
}

#[test]
fn pawn_push_to_last_row_promotes() {
    let s = State::new(Square(7, 0), Square(6, 4), Square(6, 3), false);
    let next = apply_move(&s, Piece::Pawn, Square(7, 3)).unwrap();
    assert!(next.promoted);
    assert!(matches!(
        legal_moves_for(Piece::Pawn, &next),
        Err(MoveError::PieceUnavailable { .. })
    ));
    assert!(legal_moves_for(Piece::Queen, &next).is_ok());
}

#[test]
fn pawn_capturing_the_king_wins() {
    let s = State::new(Square(7, 4), Square(5, 2), Square(6, 3), false);
    let next = apply_move(&s, Piece::Pawn, Square(7, 4)).unwrap();
    assert!(next.promoted);
    assert_eq!(
        winner(&next),
        Some(Outcome::BlackWins(WinReason::KingCapturedByPawn))
    );
}

#[test]
fn pawn_capture_short_of_last_row() {
    let s = State::new(Square(4, 4), Square(0, 0), Square(3, 3), false);
    let next = apply_move(&s, Piece::Pawn, Square(4, 4)).unwrap();
    assert!(!next.promoted);
    // the white king and the pawn share a square; the capture by the
    // white king is checked first
    assert_eq!(
        winner(&next),
        Some(Outcome::WhiteWins(WinReason::PawnCaptured))
    );
}

#[test]
fn queen_on_same_row_wins_even_when_blocked() {
    let s = State::new(Square(3, 6), Square(3, 4), Square(3, 3), true);
    assert_eq!(
        winner(&s),
        Some(Outcome::BlackWins(WinReason::QueenAttack))
    );
}

#[test]
fn white_king_takes_loose_pawn_and_wins() {
    let s = State::new(Square(3, 3), Square(0, 7), Square(2, 3), false);
    let next = apply_move(&s, Piece::WhiteKing, Square(2, 3)).unwrap();
    assert_eq!(
        winner(&next),
        Some(Outcome::WhiteWins(WinReason::PawnCaptured))
    );
}

#[test]
fn apply_move_refuses_finished_capture_state() {
    let captured = State::new(Square(2, 3), Square(0, 7), Square(2, 3), false);
    assert!(matches!(
        apply_move(&captured, Piece::BlackKing, Square(0, 6)),
        Err(MoveError::InvalidState(_))
    ));
}

#[test]
fn corner_kings_have_few_moves() {
    let s = State::new(Square(7, 7), Square(0, 0), Square(3, 3), false);
    assert_eq!(s.black_king_moves().len(), 3);
    assert_eq!(s.white_king_moves().len(), 3);
}
