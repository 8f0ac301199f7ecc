//! Error types for measurement configuration.
//!
//! Absence of a world sample is never an error in this system; it is a
//! policy-handled `Option`. The only fallible operation is configuration
//! validation.

use thiserror::Error;

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by [`MeasureConfig::validate`](crate::MeasureConfig::validate).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A radius is non-positive or non-finite.
    #[error("{name} must be positive and finite, got {value}")]
    InvalidRadius {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Transparency is outside `[0, 1]` or non-finite.
    #[error("transparency must be in [0, 1], got {0}")]
    InvalidTransparency(f64),

    /// The tick interval is zero.
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

impl ConfigError {
    /// Creates an invalid radius error.
    #[must_use]
    pub const fn invalid_radius(name: &'static str, value: f64) -> Self {
        Self::InvalidRadius { name, value }
    }

    /// Creates an invalid transparency error.
    #[must_use]
    pub const fn invalid_transparency(value: f64) -> Self {
        Self::InvalidTransparency(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::invalid_radius("sphere_radius", -1.0);
        assert!(format!("{err}").contains("sphere_radius"));

        let err = ConfigError::invalid_transparency(2.0);
        assert!(format!("{err}").contains("transparency"));

        let err = ConfigError::ZeroTickInterval;
        assert!(format!("{err}").contains("tick interval"));
    }
}
