//! Zone classification: raw input to canonical zone identifier.
//!
//! Two pure entry points, no state:
//!
//! - `classify_selector`: number + band from the button panel.
//! - `classify_point`: Cartesian point from the touch board.
//!
//! Both resolve to the same `ZoneId` space, so a match plays identically
//! whichever input mode the UI is in.
//!
//! ## Board geometry
//!
//! Radii are in board units, matching the rendered 400x400 target whose
//! playable edge sits at radius 170 inside a 195 backdrop circle. Band
//! boundaries are inclusive on the inner edge: a dart at exactly 107 is a
//! triple, at exactly 170 a double.

use crate::core::SelectorError;

use super::{Band, ThrowOutcome, ZoneId, WEDGE_ORDER};

/// Bullseye radius (50 points).
pub const BULL_INNER_RADIUS: f64 = 12.0;
/// Outer bull radius (25 points).
pub const BULL_OUTER_RADIUS: f64 = 30.0;
/// Outer edge of the inner single band / inner edge of the triple ring.
pub const TRIPLE_INNER_RADIUS: f64 = 95.0;
/// Outer edge of the triple ring.
pub const TRIPLE_OUTER_RADIUS: f64 = 107.0;
/// Inner edge of the double ring.
pub const DOUBLE_INNER_RADIUS: f64 = 160.0;
/// Outer edge of the double ring; beyond this is off the board.
pub const BOARD_RADIUS: f64 = 170.0;
/// Backdrop circle radius, rendering only.
pub const RENDERED_RADIUS: f64 = 195.0;

/// Arc covered by one wedge, in degrees.
const WEDGE_ANGLE: f64 = 360.0 / 20.0;

/// Resolve a button-panel selection to a throw outcome.
///
/// - `0` is a miss (the band is ignored).
/// - `25` is the bull: `Band::Double` hits the bullseye, either single
///   band the outer bull. The bull has no triple ring, so `Band::Triple`
///   is rejected.
/// - `1..=20` selects the wedge directly.
///
/// Any other number is a caller-contract violation: the UI is expected to
/// only offer buttons that exist on the board.
///
/// ```
/// use darts_zone::zones::{classify_selector, Band, ThrowOutcome, ZoneId};
///
/// let outcome = classify_selector(20, Band::Triple).unwrap();
/// assert_eq!(outcome, ThrowOutcome::Hit(ZoneId::sector(20, Band::Triple)));
///
/// assert_eq!(classify_selector(0, Band::SingleOuter).unwrap(), ThrowOutcome::Miss);
/// assert!(classify_selector(25, Band::Triple).is_err());
/// ```
pub fn classify_selector(number: u8, band: Band) -> Result<ThrowOutcome, SelectorError> {
    match number {
        0 => Ok(ThrowOutcome::Miss),
        25 => match band {
            Band::Double => Ok(ThrowOutcome::Hit(ZoneId::BullInner)),
            Band::Triple => Err(SelectorError::BullBand(band)),
            Band::SingleInner | Band::SingleOuter => Ok(ThrowOutcome::Hit(ZoneId::BullOuter)),
        },
        1..=20 => Ok(ThrowOutcome::Hit(ZoneId::Sector { number, band })),
        n => Err(SelectorError::Number(n)),
    }
}

/// Resolve a Cartesian point to a zone.
///
/// `(dx, dy)` is relative to the board center in screen coordinates (y
/// axis pointing down), as delivered by the touch layer. Returns `None`
/// for points beyond the playable edge; the caller decides whether an
/// off-board tap counts as a miss or is ignored.
///
/// The exact center is well-defined: distance 0 is the bullseye.
///
/// ```
/// use darts_zone::zones::{classify_point, Band, ZoneId};
///
/// // Straight up from center, mid single band: the 20 wedge.
/// assert_eq!(
///     classify_point(0.0, -130.0),
///     Some(ZoneId::sector(20, Band::SingleOuter))
/// );
/// assert_eq!(classify_point(0.0, 0.0), Some(ZoneId::BullInner));
/// assert_eq!(classify_point(500.0, 0.0), None);
/// ```
#[must_use]
pub fn classify_point(dx: f64, dy: f64) -> Option<ZoneId> {
    let distance = (dx * dx + dy * dy).sqrt();

    if distance <= BULL_INNER_RADIUS {
        return Some(ZoneId::BullInner);
    }
    if distance <= BULL_OUTER_RADIUS {
        return Some(ZoneId::BullOuter);
    }
    if distance > BOARD_RADIUS {
        return None;
    }

    // Clockwise angle from 12 o'clock in [0, 360). atan2 measures from the
    // +x axis; +90 rotates the origin to the top, rem_euclid folds the
    // negative half-plane.
    let angle = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
    let wedge = ((angle / WEDGE_ANGLE) as usize).min(WEDGE_ORDER.len() - 1);
    let number = WEDGE_ORDER[wedge];

    let band = if distance <= TRIPLE_INNER_RADIUS {
        Band::SingleInner
    } else if distance <= TRIPLE_OUTER_RADIUS {
        Band::Triple
    } else if distance <= DOUBLE_INNER_RADIUS {
        Band::SingleOuter
    } else {
        Band::Double
    };

    Some(ZoneId::Sector { number, band })
}
