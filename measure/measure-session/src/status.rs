//! Advisory status and distance readout values.

use std::fmt;

use measure_types::Color;

/// Advisory tracking status shown while no measurement is in progress.
///
/// Emitted on every idle tick so the host can tell the user whether a tap
/// would capture a point right now. Purely informational; it never gates
/// the tap handler.
///
/// # Example
///
/// ```
/// use measure_session::TrackingStatus;
///
/// assert_eq!(TrackingStatus::Ready.to_string(), "ready to measure");
/// assert_eq!(
///     TrackingStatus::Preparing.to_string(),
///     "preparing to measure...",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    /// Tracking has a confident surface estimate at the crosshair.
    Ready,

    /// Tracking has not converged at the crosshair yet.
    Preparing,
}

impl TrackingStatus {
    /// Returns true if a tap would capture a point right now.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Tint for the status label and crosshair border: green when ready,
    /// red while preparing.
    #[must_use]
    pub const fn indicator(self) -> Color {
        match self {
            Self::Ready => Color::GREEN,
            Self::Preparing => Color::RED,
        }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready to measure"),
            Self::Preparing => write!(f, "preparing to measure..."),
        }
    }
}

/// A measured distance, rendered for display in centimeters.
///
/// # Example
///
/// ```
/// use measure_session::DistanceReading;
///
/// let reading = DistanceReading::from_meters(0.234);
/// assert_eq!(reading.to_string(), "approx 23.4 cm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DistanceReading {
    meters: f64,
}

impl DistanceReading {
    /// Creates a reading from a distance in meters.
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    /// The distance in meters.
    #[must_use]
    pub const fn meters(self) -> f64 {
        self.meters
    }

    /// The distance in centimeters.
    #[must_use]
    pub fn centimeters(self) -> f64 {
        self.meters * 100.0
    }
}

impl fmt::Display for DistanceReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approx {:.1} cm", self.centimeters())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn status_strings() {
        assert_eq!(TrackingStatus::Ready.to_string(), "ready to measure");
        assert_eq!(
            TrackingStatus::Preparing.to_string(),
            "preparing to measure...",
        );
    }

    #[test]
    fn status_indicators() {
        assert_eq!(TrackingStatus::Ready.indicator(), Color::GREEN);
        assert_eq!(TrackingStatus::Preparing.indicator(), Color::RED);
        assert!(TrackingStatus::Ready.is_ready());
        assert!(!TrackingStatus::Preparing.is_ready());
    }

    #[test]
    fn reading_renders_one_decimal() {
        assert_eq!(DistanceReading::from_meters(0.1).to_string(), "approx 10.0 cm");
        assert_eq!(
            DistanceReading::from_meters(0.234).to_string(),
            "approx 23.4 cm",
        );
    }

    #[test]
    fn reading_units() {
        let reading = DistanceReading::from_meters(1.5);
        assert_eq!(reading.meters(), 1.5);
        assert_eq!(reading.centimeters(), 150.0);
    }
}
