//! The transactional game engine.
//!
//! One `GameEngine` instance owns the state of one match. The engine has
//! exactly two mutating operations, both synchronous and total:
//!
//! - `register_throw`: apply one resolved throw (snapshot, ownership
//!   transition, turn/round bookkeeping).
//! - `undo`: pop the newest snapshot and restore it wholesale.
//!
//! ## Key Types
//!
//! - `GameEngine`: State owner and the two operations
//! - `ThrowReport`: Plain-data snapshot handed back after every operation

pub mod game;

pub use game::{GameEngine, ThrowReport};
