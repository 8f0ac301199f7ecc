//! Measurement activity state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a measurement is currently in progress.
///
/// Exactly one value holds at any time. Transitions happen only inside the
/// measurement state machine's tap handler: `Deactive` → `Active` when a
/// start point is captured, `Active` → `Deactive` when the end point is
/// captured.
///
/// # Example
///
/// ```
/// use measure_types::MeasureState;
///
/// let state = MeasureState::default();
/// assert!(!state.is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasureState {
    /// No measurement in progress; the next tap captures a start point.
    #[default]
    Deactive,

    /// A start point has been captured; the next tap captures the end point.
    Active,
}

impl MeasureState {
    /// Returns true if a measurement is in progress.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_deactive() {
        assert_eq!(MeasureState::default(), MeasureState::Deactive);
        assert!(!MeasureState::default().is_active());
    }

    #[test]
    fn active_is_active() {
        assert!(MeasureState::Active.is_active());
    }
}
