//! Board zones: identifiers, point values, classification, ownership.
//!
//! A standard board has 20 numbered wedges, each crossed with four radial
//! bands (single outer, triple, single inner, double), plus the two bull
//! regions in the center. That makes 82 addressable zones, each worth
//! `number x multiplier` points (bulls are flat 25/50).
//!
//! ## Key Types
//!
//! - `ZoneId`: Canonical zone identifier (wedge + band, or a bull)
//! - `Band`: Radial category of a numbered zone
//! - `ThrowOutcome`: What a throw resolved to (a zone, or a miss)
//! - `OwnershipMap`: Sparse zone -> owner mapping
//! - `classify`: Selector- and point-based zone resolution

pub mod classify;
pub mod ownership;

pub use classify::{classify_point, classify_selector};
pub use ownership::OwnershipMap;

use serde::{Deserialize, Serialize};

/// Wedge numbers in clockwise board order, starting at 12 o'clock.
///
/// Index i covers the 18-degree arc `[i * 18, (i + 1) * 18)` measured
/// clockwise from the top.
pub const WEDGE_ORDER: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Radial band of a numbered wedge, listed from the center outward as
/// they appear on the board: single inner, triple, single outer, double.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Wide single between the triple ring and the bull.
    SingleInner,
    /// Thin ring at 3x value.
    Triple,
    /// Wide single between the double and triple rings.
    SingleOuter,
    /// Outermost thin ring at 2x value.
    Double,
}

impl Band {
    /// Score multiplier for this band.
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        match self {
            Band::SingleInner | Band::SingleOuter => 1,
            Band::Double => 2,
            Band::Triple => 3,
        }
    }

    /// All four bands.
    pub fn all() -> impl Iterator<Item = Band> {
        [
            Band::SingleInner,
            Band::Triple,
            Band::SingleOuter,
            Band::Double,
        ]
        .into_iter()
    }
}

/// Canonical identifier for one addressable zone on the board.
///
/// A numbered wedge crossed with a band, or one of the two bull regions.
/// 82 distinct values in total.
///
/// ## Example
///
/// ```
/// use darts_zone::zones::{Band, ZoneId};
///
/// let t20 = ZoneId::sector(20, Band::Triple);
/// assert_eq!(t20.value(), 60);
/// assert_eq!(ZoneId::BullInner.value(), 50);
/// assert_eq!(format!("{}", t20), "T20");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    /// A numbered wedge (1-20) crossed with a band.
    Sector {
        /// Wedge number, 1-20.
        number: u8,
        /// Radial band.
        band: Band,
    },
    /// The 25-point ring around the center.
    BullOuter,
    /// The 50-point center.
    BullInner,
}

impl ZoneId {
    /// Create a numbered sector zone.
    ///
    /// Panics if `number` is outside 1-20; use `classify_selector` for
    /// unvalidated UI input.
    #[must_use]
    pub fn sector(number: u8, band: Band) -> Self {
        assert!(
            (1..=20).contains(&number),
            "Sector number must be 1-20, got {}",
            number
        );
        Self::Sector { number, band }
    }

    /// Point value of this zone: `number x multiplier`, or the flat bull
    /// values 25 and 50.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            ZoneId::Sector { number, band } => i64::from(number) * band.multiplier(),
            ZoneId::BullOuter => 25,
            ZoneId::BullInner => 50,
        }
    }

    /// Iterate over all 82 zones on the board.
    pub fn all() -> impl Iterator<Item = ZoneId> {
        WEDGE_ORDER
            .into_iter()
            .flat_map(|number| Band::all().map(move |band| ZoneId::Sector { number, band }))
            .chain([ZoneId::BullOuter, ZoneId::BullInner])
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneId::Sector { number, band } => match band {
                Band::SingleOuter => write!(f, "{}", number),
                Band::SingleInner => write!(f, "{} (inner)", number),
                Band::Double => write!(f, "D{}", number),
                Band::Triple => write!(f, "T{}", number),
            },
            ZoneId::BullOuter => write!(f, "Bull"),
            ZoneId::BullInner => write!(f, "Bullseye"),
        }
    }
}

/// What a resolved throw amounted to: a concrete zone, or a miss.
///
/// A miss still consumes one of the turn's throws; it just touches no
/// zone. This is the engine's entire input alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrowOutcome {
    /// Off the board, or the 0 button.
    Miss,
    /// A dart in a zone.
    Hit(ZoneId),
}

impl ThrowOutcome {
    /// Raw point value: the zone value for a hit, 0 for a miss.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            ThrowOutcome::Miss => 0,
            ThrowOutcome::Hit(zone) => zone.value(),
        }
    }
}
