//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Indices are 0-based positions in the
//! match roster, which fixes the turn order.
//!
//! ## Roster
//!
//! The ordered list of players for one match (2-4 seats). Built once at
//! match setup from whatever the presentation layer collected; immutable
//! for the match duration.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! The engine keeps scores and round counters in these.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Player identifier: a 0-based roster position.
///
/// Roster order is turn order, so `PlayerId(0)` always throws first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    ///
    /// ```
    /// use darts_zone::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player in the match roster.
///
/// `color` is an opaque ownership tag (the hex string the UI picked); the
/// engine never interprets it, it only hands it back so captured zones can
/// be painted in their owner's color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Roster position, assigned by `Roster::new`.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Opaque color tag, not interpreted by the engine.
    pub color: String,
}

/// Ordered match roster: 2-4 players, fixed for the match.
///
/// Seat order is turn order. The roster assigns `PlayerId`s by position,
/// so ids are dense and stable for the whole match.
///
/// ## Example
///
/// ```
/// use darts_zone::core::{PlayerId, Roster};
///
/// let roster = Roster::new([("Maxence", "#4ECDC4"), ("Gabin", "#FFE66D")]);
/// assert_eq!(roster.player_count(), 2);
/// assert_eq!(roster[PlayerId::new(0)].name, "Maxence");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; 4]>,
}

impl Roster {
    /// Build a roster from `(name, color)` seats in turn order.
    ///
    /// Panics if the seat count is outside 2-4.
    pub fn new<N, C>(seats: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        let players: SmallVec<[Player; 4]> = seats
            .into_iter()
            .enumerate()
            .map(|(i, (name, color))| Player {
                id: PlayerId::new(i as u8),
                name: name.into(),
                color: color.into(),
            })
            .collect();

        assert!(
            (2..=4).contains(&players.len()),
            "Roster must have 2-4 players, got {}",
            players.len()
        );

        Self { players }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Iterate over players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over all player IDs in turn order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// The seat after `player` in turn order, wrapping around.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        PlayerId::new(((player.index() + 1) % self.players.len()) as u8)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player. The engine uses this
/// for scores (`PlayerMap<i64>`) and completed-round counters
/// (`PlayerMap<u32>`).
///
/// ## Example
///
/// ```
/// use darts_zone::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i64> = PlayerMap::with_value(3, 0);
///
/// scores[PlayerId::new(1)] += 60;
/// assert_eq!(scores[PlayerId::new(1)], 60);
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_seats() -> Roster {
        Roster::new([("A", "#111111"), ("B", "#222222")])
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_roster_assigns_ids_in_order() {
        let roster = Roster::new([("A", "#1"), ("B", "#2"), ("C", "#3")]);

        assert_eq!(roster.player_count(), 3);
        assert_eq!(roster[PlayerId::new(0)].name, "A");
        assert_eq!(roster[PlayerId::new(2)].name, "C");
        assert_eq!(roster[PlayerId::new(1)].id, PlayerId::new(1));
    }

    #[test]
    fn test_roster_next_after_wraps() {
        let roster = two_seats();

        assert_eq!(roster.next_after(PlayerId::new(0)), PlayerId::new(1));
        assert_eq!(roster.next_after(PlayerId::new(1)), PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "Roster must have 2-4 players")]
    fn test_roster_rejects_single_player() {
        let _ = Roster::new([("Solo", "#1")]);
    }

    #[test]
    #[should_panic(expected = "Roster must have 2-4 players")]
    fn test_roster_rejects_five_players() {
        let _ = Roster::new([
            ("A", "#1"),
            ("B", "#2"),
            ("C", "#3"),
            ("D", "#4"),
            ("E", "#5"),
        ]);
    }

    #[test]
    fn test_player_map_with_value() {
        let map: PlayerMap<i64> = PlayerMap::with_value(3, 0);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 0);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i64> = PlayerMap::with_value(2, 0);

        map[PlayerId::new(0)] += 25;
        map[PlayerId::new(1)] -= 50;

        assert_eq!(map[PlayerId::new(0)], 25);
        assert_eq!(map[PlayerId::new(1)], -50);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 + 1);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &1));
        assert_eq!(pairs[2], (PlayerId::new(2), &3));
    }

    #[test]
    fn test_roster_serialization() {
        let roster = two_seats();
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i64> = PlayerMap::with_value(0, 0);
    }
}
