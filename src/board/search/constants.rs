//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Score of a state the engine has already won.
pub const WIN_SCORE: i32 = 1000;

/// Bound above every reachable score; a node with no moves reports it
/// (negated at maximizing nodes).
pub const INFINITY: i32 = 1_000_000;

// ============================================================================
// DEPTH LIMITS
// ============================================================================

/// Reference search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Deepest search accepted from configuration. No pruning is done, so the
/// tree grows with the full branching factor per ply.
pub const MAX_DEPTH: u32 = 6;
