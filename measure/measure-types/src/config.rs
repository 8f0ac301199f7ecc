//! Measurement session configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::Color;

/// The fixed interval at which the host ticker drives the state machine.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Radii, colors, and timing for a measurement session.
///
/// Defaults match the reference overlay: 5 mm sphere markers, a 1 mm
/// yellow preview cylinder at half transparency, red endpoint markers, an
/// orange midpoint marker, a white connecting line, and a 10 Hz tick.
///
/// # Example
///
/// ```
/// use measure_types::MeasureConfig;
///
/// let config = MeasureConfig::default();
/// assert!(config.validate().is_ok());
/// assert!((config.sphere_radius - 0.005).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasureConfig {
    /// Radius of endpoint and midpoint sphere markers, meters.
    pub sphere_radius: f64,

    /// Radius of the preview cylinder, meters.
    pub cylinder_radius: f64,

    /// Transparency of the preview cylinder, in `[0, 1]`. Carried through
    /// to the cylinder descriptor; the reference behavior applies no alpha
    /// blending.
    pub cylinder_transparency: f64,

    /// Color of the start and end sphere markers.
    pub marker_color: Color,

    /// Color of the midpoint sphere marker.
    pub midpoint_color: Color,

    /// Color of the connecting line.
    pub line_color: Color,

    /// Color of the preview cylinder.
    pub cylinder_color: Color,

    /// Interval at which the host ticker fires.
    pub tick_interval: Duration,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            sphere_radius: 0.005,
            cylinder_radius: 0.001,
            cylinder_transparency: 0.5,
            marker_color: Color::RED,
            midpoint_color: Color::ORANGE,
            line_color: Color::WHITE,
            cylinder_color: Color::YELLOW,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl MeasureConfig {
    /// Checks that radii are positive and finite, transparency is within
    /// `[0, 1]`, and the tick interval is non-zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(ConfigError::invalid_radius(
                "sphere_radius",
                self.sphere_radius,
            ));
        }
        if !(self.cylinder_radius.is_finite() && self.cylinder_radius > 0.0) {
            return Err(ConfigError::invalid_radius(
                "cylinder_radius",
                self.cylinder_radius,
            ));
        }
        if !(self.cylinder_transparency.is_finite()
            && (0.0..=1.0).contains(&self.cylinder_transparency))
        {
            return Err(ConfigError::invalid_transparency(
                self.cylinder_transparency,
            ));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        assert!(MeasureConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_sphere_radius() {
        let config = MeasureConfig {
            sphere_radius: 0.0,
            ..MeasureConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MeasureConfig {
            sphere_radius: f64::NAN,
            ..MeasureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_cylinder_radius() {
        let config = MeasureConfig {
            cylinder_radius: -0.001,
            ..MeasureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_transparency() {
        let config = MeasureConfig {
            cylinder_transparency: 1.5,
            ..MeasureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTransparency(_))
        ));
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let config = MeasureConfig {
            tick_interval: Duration::ZERO,
            ..MeasureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroTickInterval)
        ));
    }
}
