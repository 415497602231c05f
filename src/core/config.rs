//! Match configuration.
//!
//! One mode is implemented: zone capture. The only rule toggle is steal
//! mode, fixed for the whole match. Round and throw counts default to the
//! standard 10 rounds of 3 throws but are exposed as knobs so short test
//! matches don't need 60 throws.

use serde::{Deserialize, Serialize};

/// Configuration for one match, fixed at construction.
///
/// ## Example
///
/// ```
/// use darts_zone::core::MatchConfig;
///
/// let config = MatchConfig::default().with_steal_mode(true);
/// assert!(config.steal_mode);
/// assert_eq!(config.max_rounds, 10);
/// assert_eq!(config.throws_per_turn, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Capturing an opponent's zone transfers its value to the thrower
    /// instead of neutralizing the zone.
    pub steal_mode: bool,

    /// Rounds each player gets before their seat is skipped.
    pub max_rounds: u32,

    /// Throws per turn.
    pub throws_per_turn: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            steal_mode: false,
            max_rounds: 10,
            throws_per_turn: 3,
        }
    }
}

impl MatchConfig {
    /// Set steal mode.
    #[must_use]
    pub fn with_steal_mode(mut self, steal: bool) -> Self {
        self.steal_mode = steal;
        self
    }

    /// Set the round limit. Panics if zero.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Round limit must be at least 1");
        self.max_rounds = rounds;
        self
    }

    /// Set throws per turn. Panics if zero.
    #[must_use]
    pub fn with_throws_per_turn(mut self, throws: u8) -> Self {
        assert!(throws > 0, "Throws per turn must be at least 1");
        self.throws_per_turn = throws;
        self
    }
}
