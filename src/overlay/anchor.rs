//! World-space anchor points for overlay annotations.

use glam::Vec2;

use crate::graph::EntityKey;
use crate::util::color::Color;

/// A world-space point carrying overlay annotation content.
///
/// Anchors are built once when clusters are computed at data-load time
/// and read every frame by the [`OverlaySynchronizer`](super::OverlaySynchronizer);
/// the overlay layer owns all visual styling.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayAnchor {
    /// Cluster this anchor annotates; also its key in the position map.
    pub cluster_id: EntityKey,
    /// World-space anchor position.
    pub world: Vec2,
    /// Annotation accent color.
    pub color: Color,
    /// Annotation label text.
    pub label: String,
}

impl OverlayAnchor {
    /// Anchor at an explicit world position.
    #[must_use]
    pub fn new(
        cluster_id: impl Into<EntityKey>,
        world: Vec2,
        color: Color,
        label: impl Into<String>,
    ) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            world,
            color,
            label: label.into(),
        }
    }

    /// Anchor at the centroid of a cluster's member positions.
    ///
    /// Returns `None` for an empty cluster — there is no meaningful
    /// centroid, and an anchor must never be published with invalid
    /// coordinates.
    #[must_use]
    pub fn from_cluster(
        cluster_id: impl Into<EntityKey>,
        members: &[Vec2],
        color: Color,
        label: impl Into<String>,
    ) -> Option<Self> {
        if members.is_empty() {
            let cluster_id = cluster_id.into();
            log::debug!("cluster {cluster_id:?} has no members; anchor skipped");
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let centroid =
            members.iter().copied().sum::<Vec2>() / members.len() as f32;
        Some(Self::new(cluster_id, centroid, color, label))
    }
}
