//! Screen-space sampling location.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The screen-space point at which world samples are taken.
///
/// The measurement flow samples at a single fixed anchor, the crosshair
/// drawn at the center of the host viewport. Coordinates are in the host
/// view's coordinate space.
///
/// # Example
///
/// ```
/// use measure_types::ScreenAnchor;
///
/// let anchor = ScreenAnchor::center_of(640.0, 480.0);
/// assert!((anchor.x - 320.0).abs() < 1e-9);
/// assert!((anchor.y - 240.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenAnchor {
    /// Horizontal coordinate in view space.
    pub x: f64,
    /// Vertical coordinate in view space.
    pub y: f64,
}

impl ScreenAnchor {
    /// Creates an anchor at the given view coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates an anchor at the center of a viewport of the given size.
    #[must_use]
    pub fn center_of(width: f64, height: f64) -> Self {
        Self::new(width / 2.0, height / 2.0)
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_viewport() {
        let anchor = ScreenAnchor::center_of(375.0, 812.0);
        assert!((anchor.x - 187.5).abs() < 1e-9);
        assert!((anchor.y - 406.0).abs() < 1e-9);
    }

    #[test]
    fn finite_check() {
        assert!(ScreenAnchor::new(0.0, 0.0).is_finite());
        assert!(!ScreenAnchor::new(f64::NAN, 0.0).is_finite());
        assert!(!ScreenAnchor::new(0.0, f64::INFINITY).is_finite());
    }
}
