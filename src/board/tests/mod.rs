//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and the boundary checks
//! - `eval.rs` - Static evaluation terms
//! - `search.rs` - Minimax scoring, tie-breaking and the engine entry points
//! - `edge_cases.rs` - Promotion, captures and stuck pieces
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod proptest;
mod search;
