//! Tap- and tick-driven state machine for AR distance measurement.
//!
//! This crate owns the measurement flow: a user aims a crosshair at a real
//! surface, taps once to capture a start point, watches a live preview
//! cylinder and distance readout while moving the device, and taps again to
//! finalize the measurement with permanent markers.
//!
//! # Components
//!
//! - [`Measurer`] - The state machine; consumes taps and ticks
//! - [`WorldSampler`] / [`SceneGraph`] - Host collaborator boundaries
//! - [`TrackingStatus`] / [`DistanceReading`] - Advisory and readout values
//! - [`TapOutcome`] / [`TickUpdate`] - Per-event results
//!
//! # Event Model
//!
//! Two external event sources feed one single-threaded machine: discrete
//! taps, and a fixed-rate host ticker at [`TICK_INTERVAL`] (10 Hz). If the
//! host delivers taps and ticks on different execution contexts it must
//! serialize them before calling in. When the measuring view disappears the
//! host stops its ticker and may simply drop the machine.
//!
//! Missing world samples are a normal, frequent outcome and are absorbed by
//! policy; nothing in this crate raises an error for them.
//!
//! # Headless Crate
//!
//! This crate has **zero renderer dependencies**. The host implements the
//! boundaries on whatever engine it renders with.
//!
//! # Example
//!
//! ```
//! use measure_session::{Measurer, SceneGraph, TapOutcome, WorldSampler};
//! use measure_types::{NodeHandle, Point3, RenderPrimitive, ScreenAnchor};
//!
//! struct FlatFloor;
//!
//! impl WorldSampler for FlatFloor {
//!     fn sample(&mut self, _anchor: ScreenAnchor) -> Option<Point3<f64>> {
//!         Some(Point3::new(0.0, -1.0, -0.5))
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Scene {
//!     nodes: Vec<RenderPrimitive>,
//!     next: u64,
//! }
//!
//! impl SceneGraph for Scene {
//!     fn add(&mut self, primitive: RenderPrimitive) -> NodeHandle {
//!         self.nodes.push(primitive);
//!         self.next += 1;
//!         NodeHandle::new(self.next)
//!     }
//!     fn remove(&mut self, _handle: NodeHandle) {}
//!     fn clear(&mut self) {
//!         self.nodes.clear();
//!     }
//! }
//!
//! let mut measurer = Measurer::new(ScreenAnchor::center_of(640.0, 480.0));
//! let mut sampler = FlatFloor;
//! let mut scene = Scene::default();
//!
//! let outcome = measurer.handle_tap(&mut sampler, &mut scene);
//! assert_eq!(outcome, TapOutcome::Started);
//! assert!(measurer.state().is_active());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod boundary;
mod machine;
mod status;

// Re-export boundary traits
pub use boundary::{SceneGraph, WorldSampler};

// Re-export the state machine and its event results
pub use machine::{Measurer, TapOutcome, TickUpdate};

// Re-export status and readout types
pub use status::{DistanceReading, TrackingStatus};

// Re-export the tick interval hosts should drive the machine at
pub use measure_types::TICK_INTERVAL;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        DistanceReading, Measurer, SceneGraph, TapOutcome, TickUpdate, TrackingStatus,
        WorldSampler, TICK_INTERVAL,
    };
}
