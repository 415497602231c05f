//! # darts-zone
//!
//! A local-multiplayer zone-capture darts engine.
//!
//! Two to four players take turns throwing at the board; every zone can
//! be captured, neutralized, or (in steal mode) taken over, and the
//! engine keeps score across 10 rounds of 3 throws. The crate is the
//! rules core only: screens, input widgets, and rendering live in the
//! presentation layer, which feeds the engine resolved throws and draws
//! from the snapshots it gets back.
//!
//! ## Design Principles
//!
//! 1. **Pure classification**: Mapping a button press or a board tap to a
//!    zone is a stateless function, identical for every match.
//!
//! 2. **One state owner**: All mutable match state lives in `GameEngine`
//!    and changes only through `register_throw` and `undo`.
//!
//! 3. **Snapshot undo**: Every throw pushes a full-state snapshot before
//!    mutating. Persistent data structures (`im`) make the snapshot an
//!    O(1) structural share with no aliasing between current and
//!    historical state.
//!
//! ## Modules
//!
//! - `core`: Players, roster, configuration, match state, errors
//! - `zones`: Zone identifiers, point values, classification, ownership
//! - `engine`: The transactional game engine and its reports

pub mod core;
pub mod engine;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    MatchConfig, MatchState, Player, PlayerId, PlayerMap, Roster, SelectorError,
};

pub use crate::zones::{
    classify_point, classify_selector, Band, OwnershipMap, ThrowOutcome, ZoneId, WEDGE_ORDER,
};

pub use crate::engine::{GameEngine, ThrowReport};
