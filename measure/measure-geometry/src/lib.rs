//! Pure geometry for AR distance measurement.
//!
//! This crate provides the stateless math behind the measurement overlay:
//!
//! # Span Measurement
//!
//! - [`measure_span`] - Distance and per-axis deltas between two points
//! - [`distance`] / [`midpoint`] - Free-standing helpers
//!
//! # Primitive Builders
//!
//! - [`sphere`] - Sphere marker at a point
//! - [`line`] - Two-vertex segment between points
//! - [`cylinder`] - Oriented cylinder connecting two points
//! - [`look_at_orientation`] - Aiming rotation for the cylinder assembly
//!
//! # Headless Crate
//!
//! This crate has **zero renderer dependencies**. Builders produce
//! [`RenderPrimitive`](measure_types::RenderPrimitive) descriptors that a
//! host engine turns into scene nodes.
//!
//! # Example
//!
//! ```
//! use measure_geometry::{distance, midpoint};
//! use measure_types::Point3;
//!
//! let a = Point3::origin();
//! let b = Point3::new(0.1, 0.0, 0.0);
//!
//! assert!((distance(a, b) - 0.1).abs() < 1e-12);
//! let mid = midpoint(a, b);
//! assert!((mid.x - 0.05).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod span;

// Re-export builder functions
pub use builder::{cylinder, line, look_at_orientation, sphere};

// Re-export span measurement
pub use span::{distance, measure_span, midpoint, SpanMeasurement};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        cylinder, distance, line, look_at_orientation, measure_span, midpoint, sphere,
        SpanMeasurement,
    };
}
