//! Core value types for AR distance measurement.
//!
//! This crate provides the foundational types shared by the measurement
//! pipeline:
//!
//! - [`MeasureState`] - Idle/active state of a measurement
//! - [`Color`] - Linear RGBA color for primitive descriptors
//! - [`ScreenAnchor`] - Screen-space sampling location (the crosshair)
//! - [`NodeHandle`] - Opaque identifier for a host-owned scene node
//! - [`RenderPrimitive`] - Renderable shape descriptions (sphere, line, cylinder)
//! - [`MeasureConfig`] - Radii, colors, and tick interval for a session
//!
//! # Headless Crate
//!
//! This crate has **zero renderer dependencies**. Primitive descriptors are
//! plain data; a host engine (`SceneKit`, Bevy, a web view) turns them into
//! actual scene nodes.
//!
//! # Units
//!
//! All world coordinates are `f64` meters. Screen coordinates are `f64`
//! points in the host view's coordinate space.
//!
//! # Example
//!
//! ```
//! use measure_types::{Color, MeasureState, Point3, RenderPrimitive};
//!
//! let marker = RenderPrimitive::Sphere {
//!     center: Point3::new(0.0, -0.2, -0.5),
//!     radius: 0.005,
//!     color: Color::RED,
//! };
//!
//! assert_eq!(marker.color(), Color::RED);
//! assert_eq!(MeasureState::default(), MeasureState::Deactive);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod anchor;
mod color;
mod config;
mod error;
mod primitive;
mod state;

// Re-export anchor types
pub use anchor::ScreenAnchor;

// Re-export color types
pub use color::Color;

// Re-export configuration types
pub use config::{MeasureConfig, TICK_INTERVAL};

// Re-export primitive types
pub use primitive::{NodeHandle, RenderPrimitive};

// Re-export state types
pub use state::MeasureState;

// Re-export error types
pub use error::{ConfigError, ConfigResult};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        Color, ConfigError, MeasureConfig, MeasureState, NodeHandle, Point3, RenderPrimitive,
        ScreenAnchor, TICK_INTERVAL, Vector3,
    };
}
