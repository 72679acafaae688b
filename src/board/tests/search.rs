//! Minimax search tests.

use crate::board::search::{leaf_score, SearchContext, INFINITY, WIN_SCORE};
use crate::board::{
    best_move, evaluate, find_best_move, initial_state, minimax, winner, Move, Outcome, Piece,
    SearchParams, Square, State, Strategy, PAWN_LOST_SCORE,
};

#[test]
fn depth_zero_is_static_evaluation() {
    let s = initial_state();
    let result = minimax(&s, 0, true);
    assert_eq!(result.score, evaluate(&s));
    assert_eq!(result.best_move, None);
}

#[test]
fn decided_state_is_a_leaf() {
    let s = State::new(Square(3, 6), Square(0, 0), Square(3, 3), true);
    let result = minimax(&s, 3, true);
    assert_eq!(result.score, WIN_SCORE);
    assert_eq!(result.best_move, None);
}

#[test]
fn queen_move_that_attacks_the_king_wins_at_depth_one() {
    let s = State::new(Square(7, 1), Square(0, 7), Square(3, 3), true);
    assert!(winner(&s).is_none());

    let result = minimax(&s, 1, true);
    assert_eq!(result.score, WIN_SCORE);
    // first attacking destination in ray order: down the d-file to d3
    assert_eq!(result.best_move, Some(Move::new(Piece::Queen, Square(5, 3))));

    let next = s.make_move(Move::new(Piece::Queen, Square(5, 3)));
    assert!(matches!(winner(&next), Some(Outcome::BlackWins(_))));
}

#[test]
fn minimizing_side_takes_loose_pawn() {
    let s = State::new(Square(3, 3), Square(0, 7), Square(2, 3), false);
    let result = minimax(&s, 1, false);
    assert_eq!(result.score, PAWN_LOST_SCORE);
    assert_eq!(
        result.best_move,
        Some(Move::new(Piece::WhiteKing, Square(2, 3)))
    );
}

#[test]
fn engine_defends_attacked_pawn() {
    // white king e5 attacks the pawn on d5; only Kc6 guards it
    let s = State::new(Square(3, 4), Square(1, 1), Square(3, 3), false);
    let defend = Some(Move::new(Piece::BlackKing, Square(2, 2)));
    assert_eq!(best_move(&s, 2), defend);
    assert_eq!(best_move(&s, 3), defend);
}

#[test]
fn ties_keep_first_generated_move() {
    let s = State::new(Square(7, 7), Square(3, 3), Square(1, 0), false);
    let result = minimax(&s, 1, true);

    let mut expected: Option<(i32, Move)> = None;
    for &mv in &s.black_candidates() {
        let score = leaf_score(&s.make_move(mv));
        if expected.map_or(true, |(best, _)| score > best) {
            expected = Some((score, mv));
        }
    }
    let (score, mv) = expected.unwrap();
    assert_eq!(result.score, score);
    assert_eq!(result.best_move, Some(mv));
}

#[test]
fn stuck_white_king_scores_infinity() {
    // queen b3 covers b8; black king b6 covers a7 and b7
    let s = State::new(Square(0, 0), Square(2, 1), Square(5, 1), true);
    assert!(winner(&s).is_none());
    assert!(s.white_king_moves().is_empty());

    let result = minimax(&s, 2, false);
    assert_eq!(result.score, INFINITY);
    assert_eq!(result.best_move, None);
}

#[test]
fn search_leaves_input_untouched() {
    let s = initial_state();
    let copy = s;
    let _ = minimax(&s, 3, true);
    assert_eq!(s, copy);
}

#[test]
fn node_count_at_depth_one() {
    let s = initial_state();
    let mut ctx = SearchContext::new();
    let _ = ctx.minimax(&s, 1, true);
    let children = s.black_candidates().len() as u64;
    assert_eq!(ctx.stats.nodes, 1 + children);
    assert_eq!(ctx.stats.leaves, children);
}

#[test]
fn find_best_move_matches_best_move() {
    let s = initial_state();
    let report = find_best_move(&s, &SearchParams::default());
    assert_eq!(report.result.best_move, best_move(&s, 3));
    assert_eq!(report.depth, 3);
    assert!(report.stats.nodes > 1);
    let info = report.info();
    assert_eq!(info.nodes, report.stats.nodes);
}

#[test]
fn reactive_strategy_reports_one_ply() {
    let s = initial_state();
    let params = SearchParams::default().with_strategy(Strategy::Reactive);
    let report = find_best_move(&s, &params);
    assert_eq!(report.depth, 1);
    let mv = report.result.best_move.unwrap();
    assert_eq!(report.result.score, leaf_score(&s.make_move(mv)));
}
