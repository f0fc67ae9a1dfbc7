//! Seams to the external rendering engine and overlay layer.
//!
//! The engine owns the draw pipeline, the camera, hit testing, and paint
//! scheduling. This crate reaches it through [`RenderHost`]: a narrow
//! surface of replace-semantics registration calls plus camera access.
//! Every `replace_*` call fully replaces the previous registration — the
//! engine never accumulates handlers or stylers across remounts, and
//! passing `None` uninstalls deterministically on teardown.

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::camera::{CameraSource, CameraState};
use crate::graph::{
    EdgeAttributes, EdgeDisplay, EntityKey, NodeAttributes, NodeDisplay,
};
use crate::input::{PointerEvent, Refresh};
use crate::overlay::OverlayAnchor;

/// Handler the engine invokes for each pointer event.
pub type InputHandler = Box<dyn FnMut(PointerEvent) -> Refresh>;

/// Style function the engine invokes per node at paint time.
pub type NodeStyler = Box<dyn Fn(&str, &NodeAttributes) -> NodeDisplay>;

/// Style function the engine invokes per edge at paint time.
pub type EdgeStyler = Box<dyn Fn(&str, &EdgeAttributes) -> EdgeDisplay>;

/// The rendering engine, as seen by this crate.
pub trait RenderHost: CameraSource {
    /// Install (or with `None`, uninstall) the pointer event handler.
    ///
    /// A full replace: the previous handler, if any, is dropped.
    fn replace_input_handler(&mut self, handler: Option<InputHandler>);

    /// Install (or uninstall) the node style function. A full replace.
    fn replace_node_styler(&mut self, styler: Option<NodeStyler>);

    /// Install (or uninstall) the edge style function. A full replace.
    fn replace_edge_styler(&mut self, styler: Option<EdgeStyler>);

    /// Write the camera state (the tween path's single writer seat).
    fn write_camera(&mut self, camera: CameraState);
}

/// The external overlay rendering layer.
///
/// Receives the anchor metadata and the freshly computed screen position
/// map after each recompute; owns every visual concern of the rendered
/// annotations.
pub trait OverlayLayer {
    /// Consume the current anchor set and their screen positions.
    ///
    /// An anchor missing from `positions` was skipped this frame and must
    /// not be rendered.
    fn publish(
        &mut self,
        anchors: &[OverlayAnchor],
        positions: &FxHashMap<EntityKey, Vec2>,
    );
}
