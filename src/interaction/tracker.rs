//! The canonical owner of the interaction snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use super::state::InteractionState;
use crate::graph::{EntityKey, GraphRead};

/// Owns the canonical [`InteractionState`] and the label index behind
/// search suggestions.
///
/// The tracker is a handle: cloning it is cheap and every clone points at
/// the same state. The installed style closures and the event dispatcher
/// each hold a clone and call [`snapshot`](Self::snapshot) when they need
/// the current state, so a state change is visible to the reducer before
/// the next paint without reinstalling anything.
///
/// All operations are synchronous and swap in a complete new snapshot.
#[derive(Clone, Default)]
pub struct InteractionTracker {
    inner: Rc<RefCell<TrackerInner>>,
}

#[derive(Default)]
struct TrackerInner {
    snapshot: Rc<InteractionState>,
    /// `(key, lowercased label)` pairs for suggestion matching.
    label_index: Vec<(EntityKey, String)>,
    /// Store revision the label index was built from.
    indexed_revision: Option<u64>,
}

impl InteractionTracker {
    /// Tracker with an idle snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Rc<InteractionState> {
        Rc::clone(&self.inner.borrow().snapshot)
    }

    /// Set or clear the hovered node.
    ///
    /// The neighbor set is recomputed from the store in the same snapshot
    /// swap. Hovering a key the store does not know is treated as
    /// clearing the hover. Returns whether the snapshot changed.
    pub fn set_hover(&self, graph: &impl GraphRead, key: Option<&str>) -> bool {
        let resolved = key.filter(|&k| {
            let known = graph.contains_node(k);
            if !known {
                log::debug!("hover target {k:?} not in store; treating as clear");
            }
            known
        });

        let mut inner = self.inner.borrow_mut();
        if inner.snapshot.hovered.as_deref() == resolved {
            return false;
        }

        let neighbors = resolved
            .map(|k| graph.neighbors(k))
            .unwrap_or_default();
        inner.swap(|state| {
            state.hovered = resolved.map(|k| k.to_owned());
            state.neighbors = neighbors;
        });
        true
    }

    /// Set or clear the selected node. Returns whether the snapshot
    /// changed.
    ///
    /// The key is not validated against the store here; a selection that
    /// goes stale is resolved to "unset" by the style pipeline at read
    /// time.
    pub fn set_selection(&self, key: Option<&str>) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.snapshot.selected.as_deref() == key {
            return false;
        }
        inner.swap(|state| {
            state.selected = key.map(|k| k.to_owned());
        });
        true
    }

    /// Set the search query, recomputing the suggestion set.
    ///
    /// Matching is a case-insensitive substring test against node labels.
    /// The empty query yields the empty suggestion set, not "all nodes".
    /// Returns whether the snapshot changed.
    pub fn set_search_query(&self, graph: &impl GraphRead, query: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.snapshot.search_query == query {
            return false;
        }
        inner.ensure_label_index(graph);

        let needle = query.to_lowercase();
        let suggestions: FxHashSet<EntityKey> = if needle.is_empty() {
            FxHashSet::default()
        } else {
            inner
                .label_index
                .iter()
                .filter(|(_, label)| label.contains(&needle))
                .map(|(key, _)| key.clone())
                .collect()
        };

        inner.swap(|state| {
            state.search_query = query.to_owned();
            state.suggestions = suggestions;
        });
        true
    }

    /// Reset every axis to idle. Returns whether the snapshot changed.
    pub fn clear(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.snapshot.is_idle() {
            return false;
        }
        inner.snapshot = Rc::new(InteractionState::default());
        true
    }
}

impl TrackerInner {
    /// Swap in a new snapshot built by mutating a copy of the current one.
    fn swap(&mut self, update: impl FnOnce(&mut InteractionState)) {
        let mut next = (*self.snapshot).clone();
        update(&mut next);
        self.snapshot = Rc::new(next);
    }

    /// Rebuild the label index when the store has mutated since the last
    /// build.
    fn ensure_label_index(&mut self, graph: &impl GraphRead) {
        let revision = graph.revision();
        if self.indexed_revision == Some(revision) {
            return;
        }
        self.label_index.clear();
        graph.visit_nodes(&mut |key, attrs| {
            if let Some(label) = &attrs.label {
                self.label_index.push((key.to_owned(), label.to_lowercase()));
            }
        });
        self.indexed_revision = Some(revision);
        log::debug!(
            "label index rebuilt: {} labeled nodes at revision {revision}",
            self.label_index.len()
        );
    }
}
