//! Game controller and protocol plumbing.
//!
//! The controller owns the canonical game state and whose turn it is; the
//! protocol trait describes a line-oriented front end driving it.

mod controller;
mod protocol;

pub use controller::{GameController, GameError};
pub use protocol::{CommandResult, Protocol};
