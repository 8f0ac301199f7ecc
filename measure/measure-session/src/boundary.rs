//! Host collaborator boundaries.

use measure_types::{NodeHandle, Point3, RenderPrimitive, ScreenAnchor};

/// Source of 3D world coordinates from live camera/sensor tracking.
///
/// Implemented by the host's world-tracking subsystem (hit-testing against
/// tracked feature points, a depth map, a simulation). The machine queries
/// it fresh on every tap and every tick at a single fixed anchor; results
/// are never cached.
pub trait WorldSampler {
    /// Returns the estimated world coordinate of the real surface under
    /// `anchor`, or `None` if tracking has no confident estimate there
    /// right now. `None` is a normal, frequent outcome.
    fn sample(&mut self, anchor: ScreenAnchor) -> Option<Point3<f64>>;
}

/// Mutable scene owning the rendered measurement nodes.
///
/// The machine treats the scene as an opaque sink: it adds primitive
/// descriptors, holds the returned handle only for the live preview
/// cylinder, and clears everything at the start of each session.
pub trait SceneGraph {
    /// Adds a primitive to the scene and returns a handle to the created
    /// node.
    fn add(&mut self, primitive: RenderPrimitive) -> NodeHandle;

    /// Removes the node identified by `handle`. Removing an unknown or
    /// stale handle must be a no-op.
    fn remove(&mut self, handle: NodeHandle);

    /// Removes every node from the scene, invalidating all previously
    /// issued handles.
    fn clear(&mut self);
}
