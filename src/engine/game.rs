//! The zone-capture game engine.
//!
//! Owns the whole `MatchState` and exposes exactly two mutating
//! operations: `register_throw` and `undo`. Everything else is read-only.
//!
//! ## Turn structure
//!
//! Each player gets `throws_per_turn` throws (3 by default), then play
//! passes to the next seat. When a player completes their last permitted
//! round their seat is skipped on every later lap; once all seats are
//! done the match is over. A miss consumes a throw like any other
//! outcome, including the final throw of a final round.
//!
//! ## Undo
//!
//! Every `register_throw` pushes a full-state snapshot before mutating
//! anything, so undo is a plain stack pop. Snapshots are cheap: the
//! ownership map shares structure and the rest of the state is a few
//! small vectors.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, MatchState, Player, PlayerId, Roster};
use crate::zones::{OwnershipMap, ThrowOutcome, ZoneId};

/// Snapshot of the observable match state, returned after every
/// operation. Plain data: the presentation layer renders straight from
/// this without reaching into the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThrowReport {
    /// Current score per player.
    pub scores: FxHashMap<PlayerId, i64>,

    /// Who owns which zone. Zones absent here are unowned.
    pub ownership: OwnershipMap,

    /// Whose turn is active. Unchanged by the throw that ends the match.
    pub current_player: PlayerId,

    /// Throws remaining in the active turn.
    pub throws_left: u8,

    /// Round each player is on.
    pub rounds: FxHashMap<PlayerId, u32>,

    /// True once every player has finished their final round.
    pub match_over: bool,
}

/// Turn-based zone-capture engine for one match.
///
/// Single-threaded and synchronous: each operation runs to completion,
/// and state is exclusively owned by one engine instance per match.
///
/// ## Example
///
/// ```
/// use darts_zone::core::{MatchConfig, PlayerId, Roster};
/// use darts_zone::engine::GameEngine;
/// use darts_zone::zones::{classify_selector, Band};
///
/// let roster = Roster::new([("A", "#4ECDC4"), ("B", "#FFE66D")]);
/// let mut engine = GameEngine::new(roster, MatchConfig::default());
///
/// let outcome = classify_selector(20, Band::Triple).unwrap();
/// let report = engine.register_throw(outcome);
///
/// assert_eq!(report.scores[&PlayerId::new(0)], 60);
/// assert_eq!(report.throws_left, 2);
/// ```
pub struct GameEngine {
    roster: Roster,
    config: MatchConfig,
    state: MatchState,
    history: Vec<MatchState>,
}

impl GameEngine {
    /// Start a fresh match for `roster` under `config`.
    #[must_use]
    pub fn new(roster: Roster, config: MatchConfig) -> Self {
        let state = MatchState::new(roster.player_count(), &config);
        Self {
            roster,
            config,
            state,
            history: Vec::new(),
        }
    }

    /// Register one resolved throw.
    ///
    /// Pushes an undo snapshot first (misses included), applies the
    /// ownership transition, consumes a throw, and advances the turn or
    /// ends the match when the turn is spent. On a finished match this is
    /// a benign no-op: the terminal state absorbs further input.
    pub fn register_throw(&mut self, outcome: ThrowOutcome) -> ThrowReport {
        if self.state.over {
            return self.report();
        }

        self.history.push(self.state.clone());

        if let ThrowOutcome::Hit(zone) = outcome {
            self.apply_hit(zone);
        }

        self.state.throws_left -= 1;
        if self.state.throws_left == 0 {
            self.end_turn();
        }

        self.report()
    }

    /// Rewind to the state before the most recent throw.
    ///
    /// Returns `None` when there is nothing to undo. Undo crosses turn,
    /// round, and even match-over boundaries freely, and never pushes a
    /// snapshot of its own.
    pub fn undo(&mut self) -> Option<ThrowReport> {
        let snapshot = self.history.pop()?;
        self.state = snapshot;
        Some(self.report())
    }

    fn apply_hit(&mut self, zone: ZoneId) {
        let value = zone.value();
        let thrower = self.state.current;

        match self.state.ownership.owner(zone) {
            None => {
                self.state.ownership.capture(zone, thrower);
                self.state.scores[thrower] += value;
            }
            // Re-hitting your own zone scores nothing.
            Some(owner) if owner == thrower => {}
            Some(owner) => {
                self.state.scores[owner] -= value;
                if self.config.steal_mode {
                    self.state.scores[thrower] += value;
                    self.state.ownership.capture(zone, thrower);
                } else {
                    self.state.ownership.clear(zone);
                }
            }
        }
    }

    /// Close the current turn: bump the round counter and hand the board
    /// to the next seat still inside the round limit. The scan is bounded
    /// to one lap of the roster.
    fn end_turn(&mut self) {
        let finished = self.state.current;
        self.state.rounds[finished] += 1;

        let player_count = self.roster.player_count();
        let mut next = self.roster.next_after(finished);
        let mut scanned = 0;
        while self.state.rounds[next] > self.config.max_rounds && scanned < player_count {
            next = self.roster.next_after(next);
            scanned += 1;
        }

        let all_done = self
            .roster
            .player_ids()
            .all(|p| self.state.rounds[p] > self.config.max_rounds);

        if all_done {
            self.state.over = true;
        } else {
            self.state.current = next;
            self.state.throws_left = self.config.throws_per_turn;
        }
    }

    /// Snapshot the observable state.
    #[must_use]
    pub fn report(&self) -> ThrowReport {
        ThrowReport {
            scores: self.state.scores.iter().map(|(p, &s)| (p, s)).collect(),
            ownership: self.state.ownership.clone(),
            current_player: self.state.current,
            throws_left: self.state.throws_left,
            rounds: self.state.rounds.iter().map(|(p, &r)| (p, r)).collect(),
            match_over: self.state.over,
        }
    }

    /// Players ranked by descending score. The sort is stable, so equal
    /// scores keep roster order; ties are not otherwise broken.
    #[must_use]
    pub fn rankings(&self) -> Vec<(PlayerId, i64)> {
        let mut ranked: Vec<(PlayerId, i64)> = self
            .roster
            .player_ids()
            .map(|p| (p, self.state.scores[p]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The player currently leading, first in roster order on a tie.
    #[must_use]
    pub fn leader(&self) -> &Player {
        let (id, _) = self.rankings()[0];
        self.roster.get(id)
    }

    // === Read-only accessors ===

    /// The match roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The full current state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The player whose turn is active.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.roster.get(self.state.current)
    }

    /// Throws remaining in the active turn.
    #[must_use]
    pub fn throws_left(&self) -> u8 {
        self.state.throws_left
    }

    /// The round `player` is on.
    #[must_use]
    pub fn rounds_of(&self, player: PlayerId) -> u32 {
        self.state.rounds[player]
    }

    /// Current score of `player`.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> i64 {
        self.state.scores[player]
    }

    /// Owner of `zone`, `None` if unowned.
    #[must_use]
    pub fn owner_of(&self, zone: ZoneId) -> Option<PlayerId> {
        self.state.ownership.owner(zone)
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Number of throws that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Band;

    fn engine_2p(config: MatchConfig) -> GameEngine {
        GameEngine::new(Roster::new([("A", "#1"), ("B", "#2")]), config)
    }

    fn hit(number: u8, band: Band) -> ThrowOutcome {
        ThrowOutcome::Hit(ZoneId::sector(number, band))
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_capture_unowned_zone() {
        let mut engine = engine_2p(MatchConfig::default());

        let report = engine.register_throw(hit(20, Band::Triple));

        assert_eq!(report.scores[&P0], 60);
        assert_eq!(
            report.ownership.owner(ZoneId::sector(20, Band::Triple)),
            Some(P0)
        );
        assert_eq!(report.throws_left, 2);
        assert!(!report.match_over);
    }

    #[test]
    fn test_own_zone_rehit_is_noop() {
        let mut engine = engine_2p(MatchConfig::default());

        engine.register_throw(hit(20, Band::Triple));
        let report = engine.register_throw(hit(20, Band::Triple));

        assert_eq!(report.scores[&P0], 60);
        assert_eq!(engine.owner_of(ZoneId::sector(20, Band::Triple)), Some(P0));
        assert_eq!(report.throws_left, 1);
    }

    #[test]
    fn test_normal_mode_neutralizes() {
        let mut engine = engine_2p(MatchConfig::default());

        // A takes T20 and burns the rest of the turn.
        engine.register_throw(hit(20, Band::Triple));
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);

        // B hits the same zone: A loses 60, zone goes neutral, B gains nothing.
        let report = engine.register_throw(hit(20, Band::Triple));

        assert_eq!(report.scores[&P0], 0);
        assert_eq!(report.scores[&P1], 0);
        assert_eq!(report.ownership.owner(ZoneId::sector(20, Band::Triple)), None);
    }

    #[test]
    fn test_steal_mode_transfers() {
        let mut engine = engine_2p(MatchConfig::default().with_steal_mode(true));

        engine.register_throw(hit(20, Band::Triple));
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);

        let report = engine.register_throw(hit(20, Band::Triple));

        assert_eq!(report.scores[&P0], 0);
        assert_eq!(report.scores[&P1], 60);
        assert_eq!(
            report.ownership.owner(ZoneId::sector(20, Band::Triple)),
            Some(P1)
        );
    }

    #[test]
    fn test_normal_mode_destroys_points() {
        let mut engine = engine_2p(MatchConfig::default());

        engine.register_throw(hit(19, Band::Triple));
        engine.register_throw(ThrowOutcome::Hit(ZoneId::BullOuter));
        engine.register_throw(ThrowOutcome::Miss);
        assert_eq!(engine.state().total_score(), 57 + 25);

        // B neutralizes T19: the 57 points leave the match entirely.
        engine.register_throw(hit(19, Band::Triple));

        assert_eq!(engine.state().total_score(), 25);
        assert_eq!(engine.score_of(P1), 0);
    }

    #[test]
    fn test_steal_mode_conserves_points() {
        let mut engine = engine_2p(MatchConfig::default().with_steal_mode(true));

        engine.register_throw(hit(19, Band::Triple));
        engine.register_throw(ThrowOutcome::Hit(ZoneId::BullOuter));
        engine.register_throw(ThrowOutcome::Miss);
        let total = engine.state().total_score();

        engine.register_throw(hit(19, Band::Triple));
        engine.register_throw(ThrowOutcome::Hit(ZoneId::BullOuter));

        assert_eq!(engine.state().total_score(), total);
        assert_eq!(engine.score_of(P0), 0);
        assert_eq!(engine.score_of(P1), 82);
    }

    #[test]
    fn test_turn_advances_after_three_throws() {
        let mut engine = engine_2p(MatchConfig::default());

        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);
        assert_eq!(engine.current_player().id, P0);

        let report = engine.register_throw(ThrowOutcome::Miss);

        assert_eq!(report.current_player, P1);
        assert_eq!(report.throws_left, 3);
        assert_eq!(report.rounds[&P0], 2);
        assert_eq!(report.rounds[&P1], 1);
    }

    #[test]
    fn test_undo_restores_everything() {
        let mut engine = engine_2p(MatchConfig::default());

        engine.register_throw(hit(20, Band::Triple));
        engine.register_throw(ThrowOutcome::Miss);
        let before = engine.state().clone();

        engine.register_throw(hit(19, Band::Double));
        let report = engine.undo().expect("history should not be empty");

        assert_eq!(engine.state(), &before);
        assert_eq!(report.scores[&P0], 60);
        assert_eq!(report.throws_left, 1);
        assert_eq!(engine.owner_of(ZoneId::sector(19, Band::Double)), None);
    }

    #[test]
    fn test_undo_crosses_turn_boundary() {
        let mut engine = engine_2p(MatchConfig::default());

        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);
        assert_eq!(engine.current_player().id, P1);

        let report = engine.undo().unwrap();

        assert_eq!(report.current_player, P0);
        assert_eq!(report.throws_left, 1);
        assert_eq!(report.rounds[&P0], 1);
    }

    #[test]
    fn test_undo_empty_history_is_benign() {
        let mut engine = engine_2p(MatchConfig::default());
        assert!(engine.undo().is_none());

        engine.register_throw(ThrowOutcome::Miss);
        assert!(engine.undo().is_some());
        assert!(engine.undo().is_none());
    }

    #[test]
    fn test_match_ends_when_all_rounds_spent() {
        let config = MatchConfig::default().with_max_rounds(1);
        let mut engine = engine_2p(config);

        for _ in 0..3 {
            engine.register_throw(ThrowOutcome::Miss);
        }
        assert!(!engine.is_over());
        assert_eq!(engine.current_player().id, P1);

        for _ in 0..2 {
            engine.register_throw(ThrowOutcome::Miss);
        }
        let report = engine.register_throw(ThrowOutcome::Miss);

        assert!(report.match_over);
        assert!(engine.is_over());
    }

    #[test]
    fn test_throw_after_match_over_is_noop() {
        let config = MatchConfig::default().with_max_rounds(1);
        let mut engine = engine_2p(config);

        for _ in 0..6 {
            engine.register_throw(ThrowOutcome::Miss);
        }
        assert!(engine.is_over());
        let depth = engine.history_len();
        let before = engine.report();

        let after = engine.register_throw(hit(20, Band::Triple));

        assert_eq!(after, before);
        assert_eq!(engine.history_len(), depth);
    }

    #[test]
    fn test_undo_rewinds_past_match_over() {
        let config = MatchConfig::default().with_max_rounds(1);
        let mut engine = engine_2p(config);

        for _ in 0..6 {
            engine.register_throw(ThrowOutcome::Miss);
        }
        assert!(engine.is_over());

        let report = engine.undo().unwrap();

        assert!(!report.match_over);
        assert_eq!(report.current_player, P1);
        assert_eq!(report.throws_left, 1);
    }

    #[test]
    fn test_rankings_stable_on_ties() {
        let mut engine = GameEngine::new(
            Roster::new([("A", "#1"), ("B", "#2"), ("C", "#3")]),
            MatchConfig::default(),
        );

        // A scores 40, B scores 60, C scores 40.
        engine.register_throw(hit(20, Band::Double));
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(hit(20, Band::Triple));
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(ThrowOutcome::Miss);
        engine.register_throw(hit(10, Band::Double));
        engine.register_throw(hit(20, Band::SingleOuter));
        engine.register_throw(ThrowOutcome::Miss);

        let ranked = engine.rankings();
        assert_eq!(ranked[0], (PlayerId::new(1), 60));
        // A and C tie at 40; roster order breaks the tie.
        assert_eq!(ranked[1], (PlayerId::new(0), 40));
        assert_eq!(ranked[2], (PlayerId::new(2), 40));
        assert_eq!(engine.leader().name, "B");
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let mut engine = engine_2p(MatchConfig::default());
        engine.register_throw(hit(20, Band::Triple));
        engine.register_throw(ThrowOutcome::Hit(ZoneId::BullOuter));

        let report = engine.report();
        let json = serde_json::to_string(&report).unwrap();
        let back: ThrowReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
