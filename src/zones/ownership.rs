//! Sparse zone ownership tracking.
//!
//! Only zones somebody has captured are present; an absent entry means
//! the zone is unowned/neutral. Backed by an `im::HashMap` so cloning the
//! map for an undo snapshot is an O(1) structural share.
//!
//! Serialized as a list of `(zone, owner)` pairs sorted by zone, since
//! `ZoneId` is not a string-like map key.

use im::HashMap as ImHashMap;
use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::ZoneId;

/// Sparse mapping from zone to owning player.
///
/// ## Usage
///
/// ```
/// use darts_zone::core::PlayerId;
/// use darts_zone::zones::{Band, OwnershipMap, ZoneId};
///
/// let mut ownership = OwnershipMap::new();
/// let t20 = ZoneId::sector(20, Band::Triple);
///
/// assert_eq!(ownership.owner(t20), None);
/// ownership.capture(t20, PlayerId::new(1));
/// assert_eq!(ownership.owner(t20), Some(PlayerId::new(1)));
///
/// ownership.clear(t20);
/// assert_eq!(ownership.owner(t20), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnershipMap {
    owners: ImHashMap<ZoneId, PlayerId>,
}

impl OwnershipMap {
    /// Create an empty map (every zone unowned).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current owner of a zone, `None` if unowned.
    #[must_use]
    pub fn owner(&self, zone: ZoneId) -> Option<PlayerId> {
        self.owners.get(&zone).copied()
    }

    /// Give a zone to a player, replacing any previous owner.
    pub fn capture(&mut self, zone: ZoneId, player: PlayerId) {
        self.owners.insert(zone, player);
    }

    /// Neutralize a zone. Returns the previous owner, if any.
    pub fn clear(&mut self, zone: ZoneId) -> Option<PlayerId> {
        self.owners.remove(&zone)
    }

    /// Check whether `player` owns `zone`.
    #[must_use]
    pub fn is_owned_by(&self, zone: ZoneId, player: PlayerId) -> bool {
        self.owner(zone) == Some(player)
    }

    /// Iterate over all owned zones.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, PlayerId)> + '_ {
        self.owners.iter().map(|(&z, &p)| (z, p))
    }

    /// Iterate over the zones a player owns.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = ZoneId> + '_ {
        self.owners
            .iter()
            .filter(move |(_, &p)| p == player)
            .map(|(&z, _)| z)
    }

    /// Number of owned zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// True when no zone is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl Serialize for OwnershipMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pairs: Vec<(ZoneId, PlayerId)> = self.iter().collect();
        pairs.sort_by_key(|&(zone, _)| zone);

        let mut seq = serializer.serialize_seq(Some(pairs.len()))?;
        for pair in pairs {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for OwnershipMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OwnershipMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a sequence of (zone, owner) pairs")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut map = OwnershipMap::new();
                while let Some((zone, player)) = seq.next_element::<(ZoneId, PlayerId)>()? {
                    map.capture(zone, player);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_seq(PairsVisitor)
    }
}
