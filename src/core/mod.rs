//! Core engine types: players, configuration, match state, errors.
//!
//! These are the building blocks the game engine and classifier share.
//! The presentation layer constructs a `Roster` and a `MatchConfig` here,
//! hands them to `engine::GameEngine`, and reads back snapshots.

pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use config::MatchConfig;
pub use error::SelectorError;
pub use player::{Player, PlayerId, PlayerMap, Roster};
pub use state::MatchState;
