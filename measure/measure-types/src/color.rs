//! Linear RGBA color for primitive descriptors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A linear RGBA color with `f32` components in `[0, 1]`.
///
/// Named constants cover the palette used by the measurement overlay:
/// red endpoint markers, an orange midpoint marker, a white connecting
/// line, a yellow preview cylinder, and the green/red advisory indicator.
///
/// # Example
///
/// ```
/// use measure_types::Color;
///
/// let faint = Color::YELLOW.with_alpha(0.5);
/// assert!((faint.a - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component (1.0 = opaque).
    pub a: f32,
}

impl Color {
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque orange.
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Creates an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with a replaced alpha component.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_opaque() {
        for color in [
            Color::RED,
            Color::ORANGE,
            Color::WHITE,
            Color::YELLOW,
            Color::GREEN,
        ] {
            assert_eq!(color.a, 1.0);
        }
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::ORANGE.with_alpha(0.25);
        assert_eq!(c.r, Color::ORANGE.r);
        assert_eq!(c.g, Color::ORANGE.g);
        assert_eq!(c.b, Color::ORANGE.b);
        assert_eq!(c.a, 0.25);
    }
}
