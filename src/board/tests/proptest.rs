//! Property-based tests using proptest.

use crate::board::{
    adjacent, apply_move, best_move, evaluate, legal_moves_for, winner, Color, Piece, Square,
    State,
};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8usize, 0..8usize).prop_map(|(r, c)| Square(r, c))
}

/// Play random legal moves from a random start, handing each intermediate
/// state to `check` along with the side to move. Every third black move
/// comes from a depth-1 search so promoted positions show up.
fn random_playout(seed: u64, plies: usize, mut check: impl FnMut(&State, &State, Color)) {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = State::random(&mut rng);
    let mut side = Color::White;

    for ply in 0..plies {
        if winner(&state).is_some() {
            break;
        }
        let candidates = state.candidates_for(side);
        if candidates.is_empty() {
            break;
        }
        let mv = if side == Color::Black && ply % 3 == 0 {
            best_move(&state, 1).expect("candidates exist")
        } else {
            candidates.as_slice()[rng.gen_range(0..candidates.len())]
        };
        let next = apply_move(&state, mv.piece, mv.to).expect("generated move is legal");
        check(&state, &next, side);
        state = next;
        side = side.opponent();
    }
}

proptest! {
    /// Property: undecided states never have two pieces on one square
    #[test]
    fn prop_positions_stay_distinct(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut ok = true;
        random_playout(seed, plies, |_, next, _| {
            if winner(next).is_none() {
                ok &= next.validate().is_ok();
            }
        });
        prop_assert!(ok);
    }

    /// Property: promotion never reverts
    #[test]
    fn prop_promotion_is_monotonic(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut ok = true;
        random_playout(seed, plies, |prev, next, _| {
            ok &= !prev.promoted || next.promoted;
        });
        prop_assert!(ok);
    }

    /// Property: the white king never steps next to the black king
    #[test]
    fn prop_white_king_keeps_distance(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut ok = true;
        random_playout(seed, plies, |prev, _, side| {
            if side == Color::White {
                ok &= prev.white_king_moves().iter().all(|&sq| !adjacent(sq, prev.black_king));
            }
        });
        prop_assert!(ok);
    }

    /// Property: queen rays include a king at the first occupied square and
    /// nothing past the first occupied square
    #[test]
    fn prop_queen_rays_stop_at_first_piece(
        wk in square_strategy(),
        bk in square_strategy(),
        q in square_strategy(),
    ) {
        let state = State::new(wk, bk, q, true);
        prop_assume!(state.validate().is_ok());
        let moves = state.queen_moves();

        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)] {
            let mut cur = q;
            let mut blocked = false;
            while let Some(next) = cur.offset(dr, dc) {
                if blocked {
                    prop_assert!(!moves.contains(next), "{next} lies past a blocker");
                } else if !state.is_square_free(next) {
                    prop_assert!(moves.contains(next), "king on {next} should be capturable");
                    blocked = true;
                } else {
                    prop_assert!(moves.contains(next));
                }
                cur = next;
            }
        }
    }

    /// Property: evaluate is a pure function of the state
    #[test]
    fn prop_evaluate_is_pure(seed in seed_strategy()) {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(seed);
        let state = State::random(&mut rng);
        let copy = state;
        prop_assert_eq!(evaluate(&state), evaluate(&copy));
        prop_assert_eq!(evaluate(&state), evaluate(&state));
    }

    /// Property: legal_moves_for agrees with the per-piece generators on
    /// valid states
    #[test]
    fn prop_legal_moves_match_generators(seed in seed_strategy()) {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(seed);
        let state = State::random(&mut rng);
        prop_assert_eq!(legal_moves_for(Piece::WhiteKing, &state).unwrap(), state.white_king_moves());
        prop_assert_eq!(legal_moves_for(Piece::BlackKing, &state).unwrap(), state.black_king_moves());
        prop_assert_eq!(legal_moves_for(Piece::Pawn, &state).unwrap(), state.pawn_moves());
    }
}
