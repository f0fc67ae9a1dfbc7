//! Recomputes anchor screen positions on the render lifecycle.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::anchor::OverlayAnchor;
use crate::camera::{project, CameraSource};
use crate::graph::EntityKey;
use crate::host::OverlayLayer;

/// Maintains the `cluster_id -> screen position` map for the overlay
/// layer.
///
/// The post-render signal is the sole recompute trigger: the camera is
/// read exactly once per signal, so however many camera mutations land
/// between two signals, the overlay recomputes once, from the state as of
/// the second signal — never from an intermediate one. Initial positions
/// are computed eagerly when anchors are supplied, so overlays are
/// present on the first paint rather than appearing on the first camera
/// move.
#[derive(Debug, Default)]
pub struct OverlaySynchronizer {
    anchors: Vec<OverlayAnchor>,
    positions: FxHashMap<EntityKey, Vec2>,
}

impl OverlaySynchronizer {
    /// Synchronizer with no anchors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the anchor set and eagerly compute initial positions from
    /// the current camera.
    ///
    /// Anchors with non-finite world coordinates are dropped here with a
    /// warning rather than ever reaching the position map.
    pub fn set_anchors(
        &mut self,
        anchors: Vec<OverlayAnchor>,
        source: &impl CameraSource,
    ) {
        self.anchors = anchors
            .into_iter()
            .filter(|a| {
                let finite = a.world.is_finite();
                if !finite {
                    log::warn!(
                        "anchor {:?} has non-finite world position; dropped",
                        a.cluster_id
                    );
                }
                finite
            })
            .collect();
        self.recompute(source);
    }

    /// Drop all anchors and published positions (view unmount).
    pub fn clear(&mut self) {
        self.anchors.clear();
        self.positions.clear();
    }

    /// The current anchor set.
    #[must_use]
    pub fn anchors(&self) -> &[OverlayAnchor] {
        &self.anchors
    }

    /// The last computed screen positions.
    #[must_use]
    pub fn positions(&self) -> &FxHashMap<EntityKey, Vec2> {
        &self.positions
    }

    /// React to the engine's post-render signal: recompute every anchor
    /// position from the camera as of now.
    pub fn on_post_render(&mut self, source: &impl CameraSource) {
        self.recompute(source);
    }

    /// Hand the position map and anchor metadata to the overlay layer.
    pub fn publish_to(&self, layer: &mut dyn OverlayLayer) {
        layer.publish(&self.anchors, &self.positions);
    }

    /// One camera read, one position per anchor.
    fn recompute(&mut self, source: &impl CameraSource) {
        let camera = source.camera();
        let viewport = source.viewport();
        self.positions.clear();
        if !camera.is_valid() {
            log::warn!("camera state {camera:?} unusable; overlay positions withheld");
            return;
        }
        for anchor in &self.anchors {
            let screen = project(&camera, viewport, anchor.world);
            if screen.is_finite() {
                let _ = self
                    .positions
                    .insert(anchor.cluster_id.clone(), screen);
            } else {
                log::warn!(
                    "anchor {:?} projected to non-finite position; skipped",
                    anchor.cluster_id
                );
            }
        }
    }
}
