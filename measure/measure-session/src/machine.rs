//! The measurement state machine.

use measure_geometry::{cylinder, distance, line, midpoint, sphere};
use measure_types::{
    ConfigError, MeasureConfig, MeasureState, NodeHandle, Point3, ScreenAnchor,
};
use tracing::{debug, trace};

use crate::boundary::{SceneGraph, WorldSampler};
use crate::status::{DistanceReading, TrackingStatus};

/// Result of a tap event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// A start point was captured; the machine is now active.
    Started,

    /// An end point was captured; permanent markers were placed and the
    /// finalized reading is ready for the host's results log.
    Completed(DistanceReading),

    /// Tracking had no confident estimate at the crosshair; nothing
    /// changed. The user taps again once tracking converges.
    NoSample,
}

/// Result of a tick event.
///
/// While idle, `status` carries the advisory indicator and `reading` is
/// `None`. While active, `status` is `None` (the indicator is cleared
/// during a measurement) and `reading` carries the live distance when a
/// sample was available this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickUpdate {
    /// Advisory tracking status, idle ticks only.
    pub status: Option<TrackingStatus>,

    /// Live distance readout, active ticks with a valid sample only.
    pub reading: Option<DistanceReading>,
}

/// Tap- and tick-driven state machine producing measurement geometry.
///
/// Owns the measurement state, the captured start position, and the handle
/// of the live preview cylinder. Collaborators are passed per call, keeping
/// the machine single-threaded and trivially testable.
///
/// # Lifecycle
///
/// 1. Idle (`Deactive`): ticks report whether tracking is ready.
/// 2. First tap with a valid sample: the scene is cleared, a red marker is
///    placed at the start point, the machine goes `Active`.
/// 3. Active ticks: each valid sample refreshes the preview cylinder and
///    yields a live [`DistanceReading`].
/// 4. Second tap with a valid sample: end and midpoint markers plus the
///    connecting line are placed permanently, the cylinder is refreshed a
///    final time, and the machine returns to idle with
///    [`TapOutcome::Completed`].
///
/// The permanent markers stay on screen until the next session's clear.
pub struct Measurer {
    config: MeasureConfig,
    anchor: ScreenAnchor,
    state: MeasureState,
    start_position: Option<Point3<f64>>,
    live_cylinder: Option<NodeHandle>,
}

impl Measurer {
    /// Creates a machine sampling at `anchor` with the default
    /// configuration.
    #[must_use]
    pub fn new(anchor: ScreenAnchor) -> Self {
        Self {
            config: MeasureConfig::default(),
            anchor,
            state: MeasureState::Deactive,
            start_position: None,
            live_cylinder: None,
        }
    }

    /// Creates a machine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn with_config(anchor: ScreenAnchor, config: MeasureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(anchor)
        })
    }

    /// Current measurement state.
    #[must_use]
    pub const fn state(&self) -> MeasureState {
        self.state
    }

    /// The fixed screen anchor samples are taken at.
    #[must_use]
    pub const fn anchor(&self) -> ScreenAnchor {
        self.anchor
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MeasureConfig {
        &self.config
    }

    /// The captured start position. `Some` iff the machine is active.
    #[must_use]
    pub const fn start_position(&self) -> Option<Point3<f64>> {
        self.start_position
    }

    /// Handles a tap: begins a measurement while idle, finalizes one while
    /// active.
    pub fn handle_tap<S, G>(&mut self, sampler: &mut S, scene: &mut G) -> TapOutcome
    where
        S: WorldSampler,
        G: SceneGraph,
    {
        match self.state {
            MeasureState::Deactive => self.begin_measure(sampler, scene),
            MeasureState::Active => self.end_measure(sampler, scene),
        }
    }

    /// Handles a ticker fire.
    ///
    /// Idle: samples and reports the advisory status, touching no geometry.
    /// Active: samples; a missing sample skips the refresh for this tick,
    /// a valid one refreshes the preview cylinder and yields the live
    /// reading.
    pub fn handle_tick<S, G>(&mut self, sampler: &mut S, scene: &mut G) -> TickUpdate
    where
        S: WorldSampler,
        G: SceneGraph,
    {
        match self.state {
            MeasureState::Deactive => {
                let status = if sampler.sample(self.anchor).is_some() {
                    TrackingStatus::Ready
                } else {
                    TrackingStatus::Preparing
                };
                TickUpdate {
                    status: Some(status),
                    reading: None,
                }
            }
            MeasureState::Active => {
                let reading = self.start_position.and_then(|start| {
                    let end = sampler.sample(self.anchor)?;
                    let reading = DistanceReading::from_meters(distance(start, end));
                    self.refresh_cylinder(start, end, scene);
                    trace!(meters = reading.meters(), "preview refreshed");
                    Some(reading)
                });
                TickUpdate {
                    status: None,
                    reading,
                }
            }
        }
    }

    fn begin_measure<S, G>(&mut self, sampler: &mut S, scene: &mut G) -> TapOutcome
    where
        S: WorldSampler,
        G: SceneGraph,
    {
        let Some(start) = sampler.sample(self.anchor) else {
            return TapOutcome::NoSample;
        };

        // Full reset: no stale geometry from a prior session survives, and
        // the clear invalidates any handle still held.
        scene.clear();
        self.live_cylinder = None;

        self.start_position = Some(start);
        self.state = MeasureState::Active;
        scene.add(sphere(start, self.config.marker_color, self.config.sphere_radius));

        debug!(x = start.x, y = start.y, z = start.z, "measurement started");
        TapOutcome::Started
    }

    fn end_measure<S, G>(&mut self, sampler: &mut S, scene: &mut G) -> TapOutcome
    where
        S: WorldSampler,
        G: SceneGraph,
    {
        // Invariant: start_position is Some whenever the machine is active.
        let Some(start) = self.start_position else {
            return TapOutcome::NoSample;
        };
        // A missing sample keeps the machine active; the user retries.
        let Some(end) = sampler.sample(self.anchor) else {
            return TapOutcome::NoSample;
        };

        scene.add(sphere(end, self.config.marker_color, self.config.sphere_radius));
        scene.add(sphere(
            midpoint(start, end),
            self.config.midpoint_color,
            self.config.sphere_radius,
        ));
        scene.add(line(start, end, self.config.line_color));
        self.refresh_cylinder(start, end, scene);

        self.state = MeasureState::Deactive;
        self.start_position = None;

        let reading = DistanceReading::from_meters(distance(start, end));
        debug!(meters = reading.meters(), "measurement completed");
        TapOutcome::Completed(reading)
    }

    /// Replaces the live preview cylinder. The previous handle is removed
    /// before the new node is added, so at most one cylinder is ever live.
    fn refresh_cylinder<G: SceneGraph>(
        &mut self,
        start: Point3<f64>,
        end: Point3<f64>,
        scene: &mut G,
    ) {
        if let Some(handle) = self.live_cylinder.take() {
            scene.remove(handle);
        }
        let primitive = cylinder(
            start,
            end,
            self.config.cylinder_radius,
            self.config.cylinder_color,
            self.config.cylinder_transparency,
        );
        self.live_cylinder = Some(scene.add(primitive));
    }
}
