//! Match state: the full mutable state of one game.
//!
//! ## MatchState
//!
//! Everything the engine mutates lives here:
//! - Sparse zone ownership (absent entry = unowned)
//! - Per-player scores (signed, may go negative)
//! - Turn position: current player and throws left
//! - Per-player completed-round counters
//! - The match-over flag
//!
//! ## Snapshots
//!
//! `MatchState` is also the undo snapshot type: `clone()` is the snapshot
//! operation. The ownership map is an `im` persistent structure, so a
//! clone is an O(1) structural share and the current and historical states
//! never alias mutable data. The history stack itself lives in the engine,
//! not here, so snapshots never nest.

use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::player::{PlayerId, PlayerMap};
use crate::zones::OwnershipMap;

/// Complete mutable state of one match.
///
/// Created once per match by `GameEngine::new` and mutated exclusively
/// through `register_throw` and `undo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Sparse zone ownership. Absent entry means unowned/neutral.
    pub ownership: OwnershipMap,

    /// Per-player scores. Neutralization and steals subtract without a
    /// floor, so scores can go negative.
    pub scores: PlayerMap<i64>,

    /// Whose turn it is.
    pub current: PlayerId,

    /// Throws remaining in the current turn.
    pub throws_left: u8,

    /// Round each player is currently on (starts at 1). A player whose
    /// counter exceeds the round limit is done for the match.
    pub rounds: PlayerMap<u32>,

    /// Set once every player has finished their last round.
    pub over: bool,
}

impl MatchState {
    /// Fresh state for a match with `player_count` players: empty board,
    /// all scores 0, everyone on round 1, player 0 up with a full turn.
    #[must_use]
    pub fn new(player_count: usize, config: &MatchConfig) -> Self {
        Self {
            ownership: OwnershipMap::new(),
            scores: PlayerMap::with_value(player_count, 0),
            current: PlayerId::new(0),
            throws_left: config.throws_per_turn,
            rounds: PlayerMap::with_value(player_count, 1),
            over: false,
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.scores.player_count()
    }

    /// Sum of all player scores. Useful for conservation checks: a normal
    /// mode neutralization destroys points, a steal merely moves them.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.scores.iter().map(|(_, s)| *s).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::{Band, ZoneId};

    #[test]
    fn test_fresh_state() {
        let config = MatchConfig::default();
        let state = MatchState::new(3, &config);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current, PlayerId::new(0));
        assert_eq!(state.throws_left, 3);
        assert!(!state.over);
        assert_eq!(state.total_score(), 0);
        assert!(state.ownership.is_empty());
        for (_, round) in state.rounds.iter() {
            assert_eq!(*round, 1);
        }
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, &config);
        let snapshot = state.clone();

        state
            .ownership
            .capture(ZoneId::sector(20, Band::Triple), PlayerId::new(0));
        state.scores[PlayerId::new(0)] += 60;

        assert!(snapshot.ownership.is_empty());
        assert_eq!(snapshot.scores[PlayerId::new(0)], 0);
        assert_eq!(state.scores[PlayerId::new(0)], 60);
    }

    #[test]
    fn test_state_serialization() {
        let config = MatchConfig::default();
        let mut state = MatchState::new(2, &config);
        state
            .ownership
            .capture(ZoneId::BullInner, PlayerId::new(1));
        state.scores[PlayerId::new(1)] = 50;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
