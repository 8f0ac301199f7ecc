//! Builders for renderable measurement primitives.

use measure_types::{Color, Point3, RenderPrimitive, Vector3};
use nalgebra::UnitQuaternion;

/// Build a sphere marker at a point.
#[must_use]
pub fn sphere(center: Point3<f64>, color: Color, radius: f64) -> RenderPrimitive {
    RenderPrimitive::Sphere {
        center,
        radius,
        color,
    }
}

/// Build a two-vertex line segment between two points.
///
/// A zero-length segment is permitted; the host renders it as degenerate.
#[must_use]
pub fn line(start: Point3<f64>, end: Point3<f64>, color: Color) -> RenderPrimitive {
    RenderPrimitive::Line { start, end, color }
}

/// Build a cylinder connecting two points.
///
/// The assembly is a vertical cylinder of height `distance(a, b)` with its
/// base at the root, rotated to aim at the opposite endpoint (see
/// [`look_at_orientation`]).
///
/// When the segment straddles the viewer-facing plane with `a.z < 0` and
/// `b.z > 0`, the root is placed at `b` and aimed at `a`; otherwise the
/// root is at `a` and aimed at `b`. The asymmetry avoids a near-plane seam
/// artifact in the reference renderer and is reproduced for visual parity.
///
/// `transparency` is carried through the descriptor; the reference
/// behavior applies no alpha blending.
///
/// # Example
///
/// ```
/// use measure_geometry::cylinder;
/// use measure_types::{Color, Point3, RenderPrimitive};
///
/// let prim = cylinder(
///     Point3::origin(),
///     Point3::new(0.0, 0.0, -1.0),
///     0.001,
///     Color::YELLOW,
///     0.5,
/// );
/// assert!((prim.cylinder_height().unwrap() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cylinder(
    a: Point3<f64>,
    b: Point3<f64>,
    radius: f64,
    color: Color,
    transparency: f64,
) -> RenderPrimitive {
    let (root, target) = if a.z < 0.0 && b.z > 0.0 {
        (b, a)
    } else {
        (a, b)
    };
    RenderPrimitive::Cylinder {
        root,
        target,
        radius,
        color,
        transparency,
    }
}

/// Rotation aiming a cylinder assembly's local −Z axis from `root` at
/// `target`. Yaw and pitch are constrained; roll is free.
///
/// Degenerate inputs stay finite: a zero-length direction yields the
/// identity, and a direction parallel to the world up axis falls back to
/// the X axis as up.
#[must_use]
pub fn look_at_orientation(root: Point3<f64>, target: Point3<f64>) -> UnitQuaternion<f64> {
    let dir = target - root;
    if dir.norm_squared() < f64::EPSILON {
        return UnitQuaternion::identity();
    }
    let forward = dir.normalize();
    let up = if forward.cross(&Vector3::y()).norm_squared() < 1e-12 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    // face_towards points local +Z at its argument; the look-at convention
    // points -Z at the target.
    UnitQuaternion::face_towards(&-forward, &up)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::span::distance;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_descriptor() {
        let p = Point3::new(0.1, 0.2, -0.3);
        let prim = sphere(p, Color::RED, 0.005);
        match prim {
            RenderPrimitive::Sphere {
                center,
                radius,
                color,
            } => {
                assert_relative_eq!(center, p);
                assert_relative_eq!(radius, 0.005);
                assert_eq!(color, Color::RED);
            }
            other => panic!("expected sphere, got {other:?}"),
        }
    }

    #[test]
    fn line_descriptor_allows_degenerate() {
        let p = Point3::origin();
        let prim = line(p, p, Color::WHITE);
        match prim {
            RenderPrimitive::Line { start, end, .. } => {
                assert_relative_eq!(start, end);
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn cylinder_straddling_near_plane_roots_at_b() {
        let a = Point3::new(0.0, 0.0, -1.0);
        let b = Point3::new(0.0, 0.0, 1.0);
        match cylinder(a, b, 0.001, Color::YELLOW, 0.5) {
            RenderPrimitive::Cylinder { root, target, .. } => {
                assert_relative_eq!(root, b);
                assert_relative_eq!(target, a);
            }
            other => panic!("expected cylinder, got {other:?}"),
        }
    }

    #[test]
    fn cylinder_reversed_straddle_roots_at_a() {
        let a = Point3::new(0.0, 0.0, 1.0);
        let b = Point3::new(0.0, 0.0, -1.0);
        match cylinder(a, b, 0.001, Color::YELLOW, 0.5) {
            RenderPrimitive::Cylinder { root, target, .. } => {
                assert_relative_eq!(root, a);
                assert_relative_eq!(target, b);
            }
            other => panic!("expected cylinder, got {other:?}"),
        }
    }

    #[test]
    fn cylinder_height_matches_span() {
        let a = Point3::new(0.0, -0.5, -0.2);
        let b = Point3::new(0.3, 0.1, -0.8);
        let prim = cylinder(a, b, 0.001, Color::YELLOW, 0.5);
        assert_relative_eq!(prim.cylinder_height().unwrap(), distance(a, b));
    }

    #[test]
    fn look_at_points_negative_z_at_target() {
        let root = Point3::origin();
        let target = Point3::new(0.3, -0.1, -0.7);
        let rotation = look_at_orientation(root, target);

        let aimed = rotation * -Vector3::z();
        let expected = (target - root).normalize();
        assert_relative_eq!(aimed, expected, epsilon = 1e-10);
    }

    #[test]
    fn look_at_degenerate_is_identity() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(look_at_orientation(p, p), UnitQuaternion::identity());
    }

    #[test]
    fn look_at_straight_up_is_finite() {
        let rotation = look_at_orientation(Point3::origin(), Point3::new(0.0, 1.0, 0.0));
        let aimed = rotation * -Vector3::z();
        assert_relative_eq!(aimed, Vector3::y(), epsilon = 1e-10);
        assert!(rotation.coords.iter().all(|c| c.is_finite()));
    }
}
