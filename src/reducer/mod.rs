//! The ordered attribute-override pipeline.
//!
//! Final display attributes are derived by one explicit rule list
//! evaluated top to bottom, later rules overriding earlier ones:
//!
//! 1. seed from base attributes;
//! 2. hover dimming of everything outside the hovered neighborhood;
//! 3. selection highlight (wins over dimming);
//! 4. search emphasis — matches get forced labels, the rest dim.
//!
//! The precedence lives *only* here. Call sites never re-derive it.
//!
//! The pipeline is pure: for an unchanged (store, snapshot, options)
//! triple, output is value-identical across invocations, which is what
//! lets the engine treat interaction changes as style-only repaints and
//! skip spatial re-indexing.

mod edge;
mod node;

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::graph::{
    EdgeAttributes, EdgeDisplay, EntityKey, GraphRead, NodeAttributes,
    NodeDisplay,
};
use crate::host::RenderHost;
use crate::interaction::{InteractionState, InteractionTracker};
use crate::options::StyleOptions;

/// Interaction snapshot with stale references resolved against the store.
///
/// A hovered or selected key that has left the store behaves exactly as
/// if that axis were unset — including the hovered key's neighbor set,
/// which is only exposed while the hover itself is live.
pub(crate) struct ResolvedState<'a> {
    hovered: Option<&'a str>,
    selected: Option<&'a str>,
    neighbors: Option<&'a FxHashSet<EntityKey>>,
    suggestions: &'a FxHashSet<EntityKey>,
}

impl<'a> ResolvedState<'a> {
    fn resolve(state: &'a InteractionState, graph: &impl GraphRead) -> Self {
        let live = |axis: &'a Option<EntityKey>| {
            axis.as_deref().filter(|&key| {
                let known = graph.contains_node(key);
                if !known {
                    log::debug!("stale interaction reference {key:?}; treated as unset");
                }
                known
            })
        };
        let hovered = live(&state.hovered);
        Self {
            hovered,
            selected: live(&state.selected),
            neighbors: hovered.is_some().then_some(&state.neighbors),
            suggestions: &state.suggestions,
        }
    }

    /// Whether hover dimming applies this frame.
    fn dimming(&self) -> bool {
        self.neighbors.is_some_and(|n| !n.is_empty())
    }

    /// Whether search emphasis applies this frame.
    fn searching(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Whether `key` is the hovered node or one of its neighbors.
    fn in_hover_neighborhood(&self, key: &str) -> bool {
        self.hovered == Some(key)
            || self.neighbors.is_some_and(|n| n.contains(key))
    }

    fn suggested(&self, key: &str) -> bool {
        self.suggestions.contains(key)
    }
}

/// Binds the rule list to a graph handle, tracker handle, and style
/// options, and installs itself into a host as the node/edge stylers.
///
/// The installed closures read the tracker's current snapshot on every
/// call — the pipeline is built once at mount and never reinstalled on
/// interaction changes.
pub struct StylePipeline<G: GraphRead> {
    graph: Rc<RefCell<G>>,
    tracker: InteractionTracker,
    style: Rc<StyleOptions>,
}

impl<G: GraphRead> Clone for StylePipeline<G> {
    fn clone(&self) -> Self {
        Self {
            graph: Rc::clone(&self.graph),
            tracker: self.tracker.clone(),
            style: Rc::clone(&self.style),
        }
    }
}

impl<G: GraphRead + 'static> StylePipeline<G> {
    /// Pipeline over shared graph/tracker/options handles.
    #[must_use]
    pub fn new(
        graph: Rc<RefCell<G>>,
        tracker: InteractionTracker,
        style: Rc<StyleOptions>,
    ) -> Self {
        Self {
            graph,
            tracker,
            style,
        }
    }

    /// Final display attributes for one node.
    #[must_use]
    pub fn node_display(&self, key: &str, base: &NodeAttributes) -> NodeDisplay {
        let snapshot = self.tracker.snapshot();
        let graph = self.graph.borrow();
        let resolved = ResolvedState::resolve(&snapshot, &*graph);
        node::reduce(key, base, &resolved, &self.style)
    }

    /// Final display attributes for one edge.
    ///
    /// An edge whose record has vanished from the store mid-frame is
    /// hidden and logged; the rest of the paint proceeds.
    #[must_use]
    pub fn edge_display(&self, key: &str, base: &EdgeAttributes) -> EdgeDisplay {
        let snapshot = self.tracker.snapshot();
        let graph = self.graph.borrow();
        let Some((source, target)) = graph.edge_endpoints(key) else {
            log::warn!("edge {key:?} has no endpoints in store; hidden for this paint");
            let mut display = EdgeDisplay::from_base(base);
            display.hidden = true;
            return display;
        };
        let resolved = ResolvedState::resolve(&snapshot, &*graph);
        edge::reduce(source, target, base, &resolved)
    }

    /// Install this pipeline's node and edge stylers into the host.
    ///
    /// Each registration fully replaces whatever styler was installed
    /// before.
    pub fn install(&self, host: &mut impl RenderHost) {
        let nodes = self.clone();
        host.replace_node_styler(Some(Box::new(
            move |key: &str, base: &NodeAttributes| nodes.node_display(key, base),
        )));
        let edges = self.clone();
        host.replace_edge_styler(Some(Box::new(
            move |key: &str, base: &EdgeAttributes| edges.edge_display(key, base),
        )));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::graph::MemoryGraph;
    use crate::util::color::Color;

    fn node(label: &str, color: &str) -> NodeAttributes {
        NodeAttributes {
            position: Vec2::ZERO,
            label: Some(label.to_owned()),
            color: Color::from_hex(color).unwrap_or(Color::rgb(0, 0, 0)),
            ..NodeAttributes::default()
        }
    }

    /// a - b - c path plus a separate d - e edge.
    fn fixture() -> (Rc<RefCell<MemoryGraph>>, InteractionTracker, StylePipeline<MemoryGraph>)
    {
        let mut g = MemoryGraph::new();
        g.insert_node("a", node("Alice", "#1f77b4"));
        g.insert_node("b", node("Bob", "#ff7f0e"));
        g.insert_node("c", node("Alan", "#2ca02c"));
        g.insert_node("d", node("Dora", "#d62728"));
        g.insert_node("e", node("Evan", "#9467bd"));
        assert!(g.insert_edge("ab", "a", "b", EdgeAttributes::default()));
        assert!(g.insert_edge("bc", "b", "c", EdgeAttributes::default()));
        assert!(g.insert_edge("de", "d", "e", EdgeAttributes::default()));

        let graph = Rc::new(RefCell::new(g));
        let tracker = InteractionTracker::new();
        let pipeline = StylePipeline::new(
            Rc::clone(&graph),
            tracker.clone(),
            Rc::new(StyleOptions::default()),
        );
        (graph, tracker, pipeline)
    }

    fn base_of(graph: &Rc<RefCell<MemoryGraph>>, key: &str) -> NodeAttributes {
        graph
            .borrow()
            .node_attributes(key)
            .cloned()
            .unwrap_or_default()
    }

    fn edge_base() -> EdgeAttributes {
        EdgeAttributes::default()
    }

    #[test]
    fn idle_state_passes_base_attributes_through() {
        let (graph, _tracker, pipeline) = fixture();
        let base = base_of(&graph, "a");
        let display = pipeline.node_display("a", &base);
        assert_eq!(display, NodeDisplay::from_base(&base));
    }

    #[test]
    fn invoking_twice_yields_identical_output() {
        // Same store, same snapshot: output must be value-identical.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_hover(&*graph.borrow(), Some("b")));
        assert!(tracker.set_selection(Some("d")));
        for key in ["a", "b", "c", "d", "e"] {
            let base = base_of(&graph, key);
            assert_eq!(
                pipeline.node_display(key, &base),
                pipeline.node_display(key, &base),
                "{key}"
            );
        }
        assert_eq!(
            pipeline.edge_display("ab", &edge_base()),
            pipeline.edge_display("ab", &edge_base())
        );
    }

    #[test]
    fn hovering_dims_everything_outside_the_neighborhood() {
        // Hover b in the a-b-c path.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_hover(&*graph.borrow(), Some("b")));

        // a and c keep their base style.
        for key in ["a", "c"] {
            let base = base_of(&graph, key);
            let display = pipeline.node_display(key, &base);
            assert_eq!(display.color, base.color, "{key}");
            assert_eq!(display.label, base.label, "{key}");
        }
        // b keeps its own style too (it is the hover target, not dimmed).
        let base = base_of(&graph, "b");
        let display = pipeline.node_display("b", &base);
        assert_eq!(display.color, base.color);

        // d is outside the neighborhood: label gone, color desaturated.
        let base = base_of(&graph, "d");
        let display = pipeline.node_display("d", &base);
        assert_eq!(display.label, None);
        assert_ne!(display.color, base.color);

        // Both path edges stay visible; the unrelated edge hides.
        assert!(!pipeline.edge_display("ab", &edge_base()).hidden);
        assert!(!pipeline.edge_display("bc", &edge_base()).hidden);
        assert!(pipeline.edge_display("de", &edge_base()).hidden);
    }

    #[test]
    fn selection_survives_hover_dimming() {
        // hovered = a, selected = d, d not a neighbor of a.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_hover(&*graph.borrow(), Some("a")));
        assert!(tracker.set_selection(Some("d")));

        let base = base_of(&graph, "d");
        let display = pipeline.node_display("d", &base);
        assert!(display.highlighted);
        // Dimming is overridden entirely, not just flagged over.
        assert_eq!(display.color, base.color);
        assert_eq!(display.label, base.label);
    }

    #[test]
    fn search_forces_labels_on_matches_and_dims_the_rest() {
        // "al" matches Alice and Alan, not Bob.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_search_query(&*graph.borrow(), "al"));

        for key in ["a", "c"] {
            let base = base_of(&graph, key);
            let display = pipeline.node_display(key, &base);
            assert_eq!(display.label, base.label, "{key}");
            assert_eq!(display.color, base.color, "{key}");
        }
        let base = base_of(&graph, "b");
        let display = pipeline.node_display("b", &base);
        assert_eq!(display.label, None);
        assert_ne!(display.color, base.color);

        // Edges with an endpoint outside the suggestion set hide.
        assert!(pipeline.edge_display("ab", &edge_base()).hidden);
        assert!(pipeline.edge_display("de", &edge_base()).hidden);
    }

    #[test]
    fn search_edge_survives_when_both_endpoints_match() {
        let (graph, tracker, pipeline) = fixture();
        // "o" matches Bob and Dora — no edge between them, but checks the
        // both-endpoints rule via ab (Alice unmatched) vs de (Evan
        // unmatched).
        assert!(tracker.set_search_query(&*graph.borrow(), "a"));
        // "a" matches Alice, Alan, Dora, Evan — every node except Bob.
        assert!(!pipeline.edge_display("de", &edge_base()).hidden);
        assert!(pipeline.edge_display("ab", &edge_base()).hidden);
    }

    #[test]
    fn selection_skips_search_treatment() {
        // Rule 4 is the else-branch of rule 3: a selected non-match is
        // highlighted, not dimmed.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_search_query(&*graph.borrow(), "al"));
        assert!(tracker.set_selection(Some("b")));

        let base = base_of(&graph, "b");
        let display = pipeline.node_display("b", &base);
        assert!(display.highlighted);
        assert_eq!(display.label, base.label);
        assert_eq!(display.color, base.color);
    }

    #[test]
    fn hover_and_search_compose_left_to_right() {
        // A search match outside the hover neighborhood: dimmed color from
        // rule 2, label restored by rule 4.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_hover(&*graph.borrow(), Some("d")));
        assert!(tracker.set_search_query(&*graph.borrow(), "al"));

        let base = base_of(&graph, "a");
        let display = pipeline.node_display("a", &base);
        assert_eq!(display.label, base.label);
        assert_ne!(display.color, base.color);
    }

    #[test]
    fn stale_hover_behaves_as_cleared() {
        // Remove the hovered node from the store, then reduce.
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_hover(&*graph.borrow(), Some("b")));
        assert!(graph.borrow_mut().remove_node("b"));

        let base = base_of(&graph, "d");
        let display = pipeline.node_display("d", &base);
        // No dimming: the hover reference is dead.
        assert_eq!(display.color, base.color);
        assert_eq!(display.label, base.label);

        // Unrelated edges are back too.
        assert!(!pipeline.edge_display("de", &edge_base()).hidden);
    }

    #[test]
    fn stale_selection_behaves_as_cleared() {
        let (graph, tracker, pipeline) = fixture();
        assert!(tracker.set_selection(Some("d")));
        assert!(graph.borrow_mut().remove_node("d"));

        let base = base_of(&graph, "a");
        let display = pipeline.node_display("a", &base);
        assert!(!display.highlighted);
    }

    #[test]
    fn vanished_edge_is_hidden_not_fatal() {
        let (graph, tracker, pipeline) = fixture();
        let _ = tracker;
        assert!(graph.borrow_mut().remove_edge("ab"));
        let display = pipeline.edge_display("ab", &edge_base());
        assert!(display.hidden);
    }

    #[test]
    fn hovered_isolated_node_hides_foreign_edges_without_dimming() {
        // An isolated node has an empty neighbor set: rule 2 does not
        // fire, but the edge rule still hides edges it has no part in.
        let (graph, tracker, pipeline) = fixture();
        graph
            .borrow_mut()
            .insert_node("lone", node("Lone", "#333333"));
        assert!(tracker.set_hover(&*graph.borrow(), Some("lone")));

        let base = base_of(&graph, "a");
        assert_eq!(pipeline.node_display("a", &base).color, base.color);
        assert!(pipeline.edge_display("ab", &edge_base()).hidden);
    }
}
