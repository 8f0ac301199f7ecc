//! Span measurement between two world points.

use measure_types::{Point3, Vector3};

/// Measurement result for the span between two points.
///
/// # Example
///
/// ```
/// use measure_geometry::measure_span;
/// use measure_types::Point3;
///
/// let span = measure_span(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
/// assert!((span.distance - 5.0).abs() < 1e-10); // 3-4-5 triangle
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanMeasurement {
    /// Start point.
    pub start: Point3<f64>,
    /// End point.
    pub end: Point3<f64>,
    /// Euclidean distance.
    pub distance: f64,
    /// Absolute distance along X axis.
    pub dx: f64,
    /// Absolute distance along Y axis.
    pub dy: f64,
    /// Absolute distance along Z axis.
    pub dz: f64,
}

impl SpanMeasurement {
    /// Get the displacement vector (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// Get the normalized direction vector.
    ///
    /// Returns `None` if the span has zero length.
    #[must_use]
    pub fn direction_normalized(&self) -> Option<Vector3<f64>> {
        if self.distance.abs() < f64::EPSILON {
            None
        } else {
            Some(self.direction() / self.distance)
        }
    }

    /// Get the midpoint of the span.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        midpoint(self.start, self.end)
    }
}

/// Measure the span between two points.
///
/// # Example
///
/// ```
/// use measure_geometry::measure_span;
/// use measure_types::Point3;
///
/// let span = measure_span(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.1, 0.0, 0.0),
/// );
///
/// assert!((span.distance - 0.1).abs() < 1e-12);
/// assert!((span.dx - 0.1).abs() < 1e-12);
/// assert!(span.dy.abs() < 1e-12);
/// ```
#[must_use]
pub fn measure_span(start: Point3<f64>, end: Point3<f64>) -> SpanMeasurement {
    let diff = end - start;
    SpanMeasurement {
        start,
        end,
        distance: diff.norm(),
        dx: diff.x.abs(),
        dy: diff.y.abs(),
        dz: diff.z.abs(),
    }
}

/// Euclidean distance between two points, meters.
#[must_use]
pub fn distance(a: Point3<f64>, b: Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Component-wise midpoint of two points.
#[must_use]
pub fn midpoint(a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    Point3::from((a.coords + b.coords) / 2.0)
}
