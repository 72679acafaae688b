use std::fmt;
use std::str::FromStr;

use super::constants::{DEFAULT_DEPTH, MAX_DEPTH};

/// How the engine picks its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fixed-depth minimax over the full tree
    #[default]
    Minimax,
    /// One-ply rule-based mover
    Reactive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => f.write_str("minimax"),
            Strategy::Reactive => f.write_str("reactive"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "reactive" => Ok(Strategy::Reactive),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u32,
    pub strategy: Strategy,
}

impl SearchParams {
    /// Set the depth, clamped to `1..=MAX_DEPTH`.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.clamp(1, MAX_DEPTH);
        self
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            strategy: Strategy::Minimax,
        }
    }
}
