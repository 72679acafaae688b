//! Fixed-depth minimax search.
//!
//! Plain depth-first minimax with no pruning, move ordering or
//! transposition table: the tree is small enough to walk in full every
//! turn. Black (the engine) maximizes, White minimizes. Ties keep the move
//! generated first.

mod constants;
mod log;
mod params;
mod reactive;

use std::time::{Duration, Instant};

pub use self::log::{format_info, SearchInfo, SearchLogger};
pub use constants::{DEFAULT_DEPTH, INFINITY, MAX_DEPTH, WIN_SCORE};
pub use params::{SearchParams, Strategy};
pub use reactive::reactive_move;

use super::eval::{evaluate, PAWN_LOST_SCORE};
use super::outcome::{winner, Outcome};
use super::{Move, State};

/// Score and chosen move of one search node.
///
/// `best_move` is `None` at leaves and at nodes with no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchResult {
    const fn leaf(score: i32) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every state visited, root included
    pub nodes: u64,
    /// States scored without expansion
    pub leaves: u64,
}

/// Search context for a single search
#[derive(Debug, Default)]
pub struct SearchContext {
    pub stats: SearchStats,
}

impl SearchContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies below `state`. Each child is a fresh copy, so
    /// sibling branches never see each other's moves.
    pub fn minimax(&mut self, state: &State, depth: u32, maximizing: bool) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || winner(state).is_some() {
            self.stats.leaves += 1;
            return SearchResult::leaf(leaf_score(state));
        }

        if maximizing {
            let mut best = SearchResult::leaf(-INFINITY);
            for &mv in &state.black_candidates() {
                let child = state.make_move(mv);
                let score = self.minimax(&child, depth - 1, false).score;
                if best.best_move.is_none() || score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
            }
            best
        } else {
            let mut best = SearchResult::leaf(INFINITY);
            for &mv in &state.white_candidates() {
                let child = state.make_move(mv);
                let score = self.minimax(&child, depth - 1, true).score;
                if best.best_move.is_none() || score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
            }
            best
        }
    }
}

/// Score of a state the search does not expand.
///
/// Decided games score as wins or losses for the engine; everything else
/// falls back to the static evaluation.
#[must_use]
pub fn leaf_score(state: &State) -> i32 {
    match winner(state) {
        Some(Outcome::BlackWins(_)) => WIN_SCORE,
        Some(Outcome::WhiteWins(_)) => PAWN_LOST_SCORE,
        _ => evaluate(state),
    }
}

/// Run minimax from `state` with a fresh context.
#[must_use]
pub fn minimax(state: &State, depth: u32, maximizing: bool) -> SearchResult {
    SearchContext::new().minimax(state, depth, maximizing)
}

/// Engine move for `state` at `depth` plies, or `None` if it has no move.
#[must_use]
pub fn best_move(state: &State, depth: u32) -> Option<Move> {
    minimax(state, depth, true).best_move
}

/// Everything one engine decision produced.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    pub result: SearchResult,
    pub stats: SearchStats,
    pub depth: u32,
    pub elapsed: Duration,
}

impl SearchReport {
    #[must_use]
    pub fn info(&self) -> SearchInfo {
        SearchInfo {
            depth: self.depth,
            score: self.result.score,
            nodes: self.stats.nodes,
            time_ms: self.elapsed.as_millis(),
            best_move: self.result.best_move,
        }
    }
}

/// Pick the engine's move according to `params`.
#[must_use]
pub fn find_best_move(state: &State, params: &SearchParams) -> SearchReport {
    let start = Instant::now();
    let (result, stats, depth) = match params.strategy {
        Strategy::Minimax => {
            let mut ctx = SearchContext::new();
            let result = ctx.minimax(state, params.depth, true);
            (result, ctx.stats, params.depth)
        }
        Strategy::Reactive => {
            let best_move = reactive_move(state);
            let score = best_move.map_or(-INFINITY, |mv| leaf_score(&state.make_move(mv)));
            let stats = SearchStats {
                nodes: 1,
                leaves: 1,
            };
            (SearchResult { score, best_move }, stats, 1)
        }
    };
    let elapsed = start.elapsed();

    #[cfg(feature = "logging")]
    ::log::debug!(
        "{} search depth {} picked {} score {} nodes {} in {:?}",
        params.strategy,
        depth,
        result
            .best_move
            .map_or_else(|| "(none)".to_string(), |mv| mv.to_string()),
        result.score,
        stats.nodes,
        elapsed
    );

    SearchReport {
        result,
        stats,
        depth,
        elapsed,
    }
}
