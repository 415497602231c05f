//! Caller-contract errors.
//!
//! The engine itself has no fallible operations: once input is a valid
//! `ThrowOutcome`, every transition is total. The only errors come from
//! the selector path of the classifier, where a UI could hand over a
//! number or band combination that does not exist on the board. Those
//! fail fast here rather than being coerced to some nearby zone.
//!
//! Operational no-ops (undo with empty history) are not errors; they are
//! reported as `None` by the engine.

use thiserror::Error;

use crate::zones::Band;

/// Invalid zone selector handed to the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Number outside 0, 1-20, 25.
    #[error("{0} is not a dartboard number (expected 0 for a miss, 1-20, or 25 for the bull)")]
    Number(u8),

    /// The bull has no triple ring.
    #[error("the bull cannot be hit as a {0:?}: it only has single and double rings")]
    BullBand(Band),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = SelectorError::Number(21);
        assert!(err.to_string().contains("21"));

        let err = SelectorError::BullBand(Band::Triple);
        assert!(err.to_string().contains("bull"));
    }
}
