//! Testing infrastructure for medidata integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured CLI command
//! - `assertions`: checks against the JSON view-model envelope
//! - `fixtures`: sample rosters, deep field maps and pinned clocks

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
