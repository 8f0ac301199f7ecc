//! Renderable primitive descriptions and scene node handles.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// Opaque identifier for a node owned by the host scene.
///
/// Issued by the scene graph when a primitive is added and passed back to
/// remove it. The measurement core holds at most one handle persistently:
/// the live preview cylinder, which is replaced on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeHandle(u64);

impl NodeHandle {
    /// Creates a handle from a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A renderable geometric shape description.
///
/// Descriptors are plain data; ownership of the resulting scene node
/// belongs to the host scene graph once added. Coordinates are world-space
/// meters.
///
/// # Example
///
/// ```
/// use measure_types::{Color, Point3, RenderPrimitive};
///
/// let line = RenderPrimitive::Line {
///     start: Point3::origin(),
///     end: Point3::new(0.1, 0.0, 0.0),
///     color: Color::WHITE,
/// };
/// assert!(!line.is_cylinder());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderPrimitive {
    /// A sphere marker.
    Sphere {
        /// Center of the sphere.
        center: Point3<f64>,
        /// Radius in meters.
        radius: f64,
        /// Surface color.
        color: Color,
    },

    /// A two-vertex line segment. Zero-length segments are permitted.
    Line {
        /// First vertex.
        start: Point3<f64>,
        /// Second vertex.
        end: Point3<f64>,
        /// Line color.
        color: Color,
    },

    /// A cylinder connecting two points.
    ///
    /// `root` and `target` already encode the orientation of the assembly:
    /// the host models a vertical cylinder of height `|target - root|` with
    /// its base at `root`, then rotates the assembly so its forward axis
    /// points at `target` (yaw/pitch constrained, roll free).
    Cylinder {
        /// Local origin of the cylinder assembly.
        root: Point3<f64>,
        /// Point the assembly is aimed at.
        target: Point3<f64>,
        /// Radius in meters.
        radius: f64,
        /// Surface color.
        color: Color,
        /// Carried for interface compatibility; the reference behavior
        /// applies no alpha blending.
        transparency: f64,
    },
}

impl RenderPrimitive {
    /// Returns the primitive's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Sphere { color, .. } | Self::Line { color, .. } | Self::Cylinder { color, .. } => {
                *color
            }
        }
    }

    /// Returns true if this is a cylinder primitive.
    #[must_use]
    pub const fn is_cylinder(&self) -> bool {
        matches!(self, Self::Cylinder { .. })
    }

    /// Returns the cylinder's height (root-to-target distance), or `None`
    /// for non-cylinder primitives.
    #[must_use]
    pub fn cylinder_height(&self) -> Option<f64> {
        match self {
            Self::Cylinder { root, target, .. } => Some((target - root).norm()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trip() {
        let handle = NodeHandle::new(42);
        assert_eq!(handle.raw(), 42);
        assert_eq!(handle, NodeHandle::new(42));
    }

    #[test]
    fn primitive_color() {
        let sphere = RenderPrimitive::Sphere {
            center: Point3::origin(),
            radius: 0.005,
            color: Color::RED,
        };
        assert_eq!(sphere.color(), Color::RED);
        assert!(!sphere.is_cylinder());
    }

    #[test]
    fn cylinder_height_from_endpoints() {
        let cylinder = RenderPrimitive::Cylinder {
            root: Point3::origin(),
            target: Point3::new(0.0, 0.0, 2.0),
            radius: 0.001,
            color: Color::YELLOW,
            transparency: 0.5,
        };
        assert!((cylinder.cylinder_height().unwrap() - 2.0).abs() < 1e-12);

        let line = RenderPrimitive::Line {
            start: Point3::origin(),
            end: Point3::origin(),
            color: Color::WHITE,
        };
        assert!(line.cylinder_height().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn primitive_serialization() {
        let sphere = RenderPrimitive::Sphere {
            center: Point3::new(1.0, 2.0, 3.0),
            radius: 0.005,
            color: Color::RED,
        };
        let json = serde_json::to_string(&sphere).ok();
        assert!(json.is_some());
    }
}
