//! Wires every component onto a rendering engine host.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use web_time::Instant;

use crate::camera::{center_on, fit_to_positions, CameraSource, CameraTween};
use crate::graph::GraphRead;
use crate::host::{OverlayLayer, RenderHost};
use crate::input::EventDispatcher;
use crate::interaction::InteractionTracker;
use crate::options::{Options, StyleOptions};
use crate::overlay::{OverlayAnchor, OverlaySynchronizer};
use crate::reducer::StylePipeline;

/// One graph view bound to one rendering engine host.
///
/// Owns the interaction tracker, the style pipeline configuration, the
/// overlay synchronizer, and the camera tween, and installs the first
/// two into the host at [`mount`](Self::mount). The host drives the view
/// with pointer events (through the installed handler) and one
/// [`on_post_render`](Self::on_post_render) call per paint.
pub struct GraphView<G: GraphRead> {
    graph: Rc<RefCell<G>>,
    tracker: InteractionTracker,
    options: Options,
    style: Rc<StyleOptions>,
    overlay: OverlaySynchronizer,
    tween: CameraTween,
    mounted: bool,
}

impl<G: GraphRead + 'static> GraphView<G> {
    /// View over a shared graph store.
    #[must_use]
    pub fn new(graph: Rc<RefCell<G>>, options: Options) -> Self {
        let style = Rc::new(options.style.clone());
        Self {
            graph,
            tracker: InteractionTracker::new(),
            options,
            style,
            overlay: OverlaySynchronizer::new(),
            tween: CameraTween::new(),
            mounted: false,
        }
    }

    /// The shared graph handle.
    #[must_use]
    pub fn graph(&self) -> &Rc<RefCell<G>> {
        &self.graph
    }

    /// A handle onto this view's interaction state.
    #[must_use]
    pub fn tracker(&self) -> InteractionTracker {
        self.tracker.clone()
    }

    /// The view's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the view is currently mounted on a host.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Install the input handler and the node/edge stylers into the host.
    ///
    /// Every installation is a full replace, so mounting twice (or
    /// remounting after a teardown the host survived) leaves exactly one
    /// handler and one styler pair registered — never a stack.
    pub fn mount(&mut self, host: &mut impl RenderHost) {
        if self.mounted {
            log::debug!("view remounted; host registrations replaced");
        }
        host.replace_input_handler(Some(EventDispatcher::handler(
            Rc::clone(&self.graph),
            self.tracker.clone(),
        )));
        StylePipeline::new(
            Rc::clone(&self.graph),
            self.tracker.clone(),
            Rc::clone(&self.style),
        )
        .install(host);
        self.mounted = true;
    }

    /// Uninstall everything from the host and drop per-view state.
    pub fn unmount(&mut self, host: &mut impl RenderHost) {
        host.replace_input_handler(None);
        host.replace_node_styler(None);
        host.replace_edge_styler(None);
        self.overlay.clear();
        self.tween.cancel();
        let _ = self.tracker.clear();
        self.mounted = false;
    }

    /// Supply the overlay anchors, eagerly computing initial positions
    /// from the current camera so overlays are present on the first
    /// paint.
    pub fn set_cluster_anchors(
        &mut self,
        anchors: Vec<OverlayAnchor>,
        host: &impl CameraSource,
    ) {
        self.overlay.set_anchors(anchors, host);
    }

    /// The overlay synchronizer (for hosts that pull positions instead of
    /// receiving them through an [`OverlayLayer`]).
    #[must_use]
    pub fn overlay(&self) -> &OverlaySynchronizer {
        &self.overlay
    }

    /// React to the engine's post-render signal.
    ///
    /// Order matters: the camera tween writes first (it is the only
    /// camera writer in this crate), then overlay positions are
    /// recomputed from the camera as of this signal and published.
    pub fn on_post_render(
        &mut self,
        host: &mut impl RenderHost,
        layer: Option<&mut dyn OverlayLayer>,
        now: Instant,
    ) {
        if let Some(state) = self.tween.sample(now) {
            host.write_camera(state);
        }
        self.overlay.on_post_render(&*host);
        if let Some(layer) = layer {
            self.overlay.publish_to(layer);
        }
    }

    /// Animate the camera to center on a node.
    ///
    /// Replaces any in-flight camera animation. Returns `false` (leaving
    /// any running tween untouched) when the node is unknown.
    pub fn center_camera_on(
        &mut self,
        host: &impl CameraSource,
        key: &str,
        now: Instant,
    ) -> bool {
        let Some(position) = self
            .graph
            .borrow()
            .node_attributes(key)
            .map(|attrs| attrs.position)
        else {
            log::debug!("center request on unknown node {key:?}; ignored");
            return false;
        };
        let camera = host.camera();
        self.tween.start(
            camera,
            center_on(camera, position),
            self.options.camera.tween_duration(),
            self.options.camera.easing.to_function(),
            now,
        );
        true
    }

    /// Animate the camera to fit every node in the store.
    ///
    /// Replaces any in-flight camera animation. Returns `false` for an
    /// empty store.
    pub fn fit_camera_to_graph(
        &mut self,
        host: &impl CameraSource,
        now: Instant,
    ) -> bool {
        let mut positions = Vec::new();
        self.graph.borrow().visit_nodes(&mut |_, attrs| {
            positions.push(attrs.position);
        });
        let Some(mut target) = fit_to_positions(
            &positions,
            host.viewport(),
            self.options.camera.fit_padding,
        ) else {
            log::debug!("fit request on empty store; ignored");
            return false;
        };
        target.ratio = self.options.camera.clamp_ratio(target.ratio);
        self.tween.start(
            host.camera(),
            target,
            self.options.camera.tween_duration(),
            self.options.camera.easing.to_function(),
            now,
        );
        true
    }

    /// Whether a camera animation is in flight.
    #[must_use]
    pub fn camera_animating(&self) -> bool {
        self.tween.is_active()
    }

    /// Positions of nodes, for callers composing their own camera moves.
    #[must_use]
    pub fn node_positions(&self) -> Vec<Vec2> {
        let mut positions = Vec::new();
        self.graph.borrow().visit_nodes(&mut |_, attrs| {
            positions.push(attrs.position);
        });
        positions
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rustc_hash::FxHashMap;
    use web_time::{Duration, Instant};

    use super::*;
    use crate::camera::{CameraState, Viewport};
    use crate::graph::{
        EdgeAttributes, EntityKey, MemoryGraph, NodeAttributes,
    };
    use crate::host::{EdgeStyler, InputHandler, NodeStyler};
    use crate::input::{PointerEvent, Refresh};
    use crate::util::color::Color;

    /// Minimal engine double: stores registrations, camera, and writes.
    struct MockHost {
        camera: CameraState,
        input: Option<InputHandler>,
        node_styler: Option<NodeStyler>,
        edge_styler: Option<EdgeStyler>,
        camera_writes: Vec<CameraState>,
    }

    impl MockHost {
        fn new() -> Self {
            Self {
                camera: CameraState::default(),
                input: None,
                node_styler: None,
                edge_styler: None,
                camera_writes: Vec::new(),
            }
        }

        fn dispatch(&mut self, event: PointerEvent) -> Refresh {
            self.input
                .as_mut()
                .map_or(Refresh::None, |handler| handler(event))
        }
    }

    impl CameraSource for MockHost {
        fn camera(&self) -> CameraState {
            self.camera
        }

        fn viewport(&self) -> Viewport {
            Viewport::new(800.0, 600.0)
        }
    }

    impl RenderHost for MockHost {
        fn replace_input_handler(&mut self, handler: Option<InputHandler>) {
            self.input = handler;
        }

        fn replace_node_styler(&mut self, styler: Option<NodeStyler>) {
            self.node_styler = styler;
        }

        fn replace_edge_styler(&mut self, styler: Option<EdgeStyler>) {
            self.edge_styler = styler;
        }

        fn write_camera(&mut self, camera: CameraState) {
            self.camera = camera;
            self.camera_writes.push(camera);
        }
    }

    /// Overlay layer double counting publishes.
    #[derive(Default)]
    struct CountingLayer {
        publishes: u32,
        last_positions: FxHashMap<EntityKey, Vec2>,
    }

    impl OverlayLayer for CountingLayer {
        fn publish(
            &mut self,
            _anchors: &[OverlayAnchor],
            positions: &FxHashMap<EntityKey, Vec2>,
        ) {
            self.publishes += 1;
            self.last_positions = positions.clone();
        }
    }

    fn labeled(label: &str, x: f32, y: f32) -> NodeAttributes {
        NodeAttributes {
            position: Vec2::new(x, y),
            label: Some(label.to_owned()),
            color: Color::rgb(0x1f, 0x77, 0xb4),
            ..NodeAttributes::default()
        }
    }

    fn view_fixture() -> GraphView<MemoryGraph> {
        let mut g = MemoryGraph::new();
        g.insert_node("a", labeled("Alice", 0.0, 0.0));
        g.insert_node("b", labeled("Bob", 10.0, 0.0));
        g.insert_node("c", labeled("Carol", 0.0, 10.0));
        assert!(g.insert_edge("ab", "a", "b", EdgeAttributes::default()));
        GraphView::new(Rc::new(RefCell::new(g)), Options::default())
    }

    #[test]
    fn mount_installs_handler_and_stylers() {
        let mut view = view_fixture();
        let mut host = MockHost::new();
        view.mount(&mut host);
        assert!(host.input.is_some());
        assert!(host.node_styler.is_some());
        assert!(host.edge_styler.is_some());
        assert!(view.is_mounted());
    }

    #[test]
    fn remount_replaces_rather_than_stacks() {
        let mut view = view_fixture();
        let mut host = MockHost::new();
        view.mount(&mut host);
        view.mount(&mut host);

        // A single dispatch flows through a single handler: one state
        // change, and the repeated event is a no-op (a stacked stale
        // handler could not produce that).
        assert_eq!(
            host.dispatch(PointerEvent::EnterNode {
                key: "a".to_owned()
            }),
            Refresh::Style
        );
        assert_eq!(
            host.dispatch(PointerEvent::EnterNode {
                key: "a".to_owned()
            }),
            Refresh::None
        );
    }

    #[test]
    fn unmount_uninstalls_everything() {
        let mut view = view_fixture();
        let mut host = MockHost::new();
        view.mount(&mut host);
        view.unmount(&mut host);
        assert!(host.input.is_none());
        assert!(host.node_styler.is_none());
        assert!(host.edge_styler.is_none());
        assert!(!view.is_mounted());
        assert!(view.tracker().snapshot().is_idle());
    }

    #[test]
    fn events_flow_into_installed_styles() {
        // End to end: pointer event -> tracker -> styler output.
        let mut view = view_fixture();
        let mut host = MockHost::new();
        view.mount(&mut host);

        assert_eq!(
            host.dispatch(PointerEvent::EnterNode {
                key: "a".to_owned()
            }),
            Refresh::Style
        );

        // c is not adjacent to a: the installed styler dims it.
        let styler = host.node_styler.take();
        let base = labeled("Carol", 0.0, 10.0);
        let display = styler
            .as_ref()
            .map(|f| f("c", &base));
        assert!(display.is_some_and(|d| d.label.is_none()));

        // b is adjacent: untouched.
        let base = labeled("Bob", 10.0, 0.0);
        let display = styler.as_ref().map(|f| f("b", &base));
        assert!(display.is_some_and(|d| d.label.is_some()));
    }

    #[test]
    fn post_render_drives_tween_then_overlay() {
        let mut view = view_fixture();
        let mut host = MockHost::new();
        view.mount(&mut host);
        view.set_cluster_anchors(
            vec![OverlayAnchor::new(
                "c0",
                Vec2::new(10.0, 10.0),
                Color::rgb(0, 0, 0),
                "Cluster",
            )],
            &host,
        );

        let start = Instant::now();
        assert!(view.center_camera_on(&host, "b", start));
        assert!(view.camera_animating());

        let mut layer = CountingLayer::default();
        view.on_post_render(
            &mut host,
            Some(&mut layer),
            start + Duration::from_secs(5),
        );

        // Tween finished: camera centered on b, exactly one write.
        assert_eq!(host.camera.x, 10.0);
        assert_eq!(host.camera.y, 0.0);
        assert!(!view.camera_animating());

        // Overlay recomputed from the post-write camera and published.
        assert_eq!(layer.publishes, 1);
        let screen = layer.last_positions["c0"];
        assert!((screen - Vec2::new(400.0, 310.0)).length() < 1e-3);
    }

    #[test]
    fn anchors_have_positions_before_any_render_signal() {
        let mut view = view_fixture();
        let host = MockHost::new();
        view.set_cluster_anchors(
            vec![OverlayAnchor::new(
                "c0",
                Vec2::new(0.0, 0.0),
                Color::rgb(0, 0, 0),
                "Cluster",
            )],
            &host,
        );
        assert_eq!(view.overlay().positions().len(), 1);
    }

    #[test]
    fn new_camera_move_replaces_the_old_one() {
        let mut view = view_fixture();
        let host = MockHost::new();
        let now = Instant::now();
        assert!(view.center_camera_on(&host, "b", now));
        assert!(view.fit_camera_to_graph(&host, now));

        // Only the fit target survives; finishing the tween lands on the
        // centroid of a/b/c, not on b.
        let mut host = host;
        view.on_post_render(&mut host, None, now + Duration::from_secs(5));
        assert_eq!(host.camera_writes.len(), 1);
        assert!((host.camera.x - 10.0 / 3.0).abs() < 1e-3);
        assert!((host.camera.y - 10.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn centering_on_unknown_node_is_ignored() {
        let mut view = view_fixture();
        let host = MockHost::new();
        assert!(!view.center_camera_on(&host, "ghost", Instant::now()));
        assert!(!view.camera_animating());
    }

    #[test]
    fn fit_on_empty_store_is_ignored() {
        let graph = Rc::new(RefCell::new(MemoryGraph::new()));
        let mut view = GraphView::new(graph, Options::default());
        let host = MockHost::new();
        assert!(!view.fit_camera_to_graph(&host, Instant::now()));
    }
}
