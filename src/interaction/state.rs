//! The immutable interaction snapshot.

use rustc_hash::FxHashSet;

use crate::graph::EntityKey;

/// One complete snapshot of transient UI state.
///
/// Snapshots are replaced wholesale and never mutated in place: a reader
/// holding an `Rc<InteractionState>` can never observe a partial update,
/// and `neighbors` is always the set derived from `hovered` in the same
/// swap — a hover change can never leave a stale neighbor set behind.
///
/// Hover, selection, and search are independent axes; clearing one never
/// touches the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Node currently under the cursor, if any.
    pub hovered: Option<EntityKey>,
    /// Node currently selected, if any.
    pub selected: Option<EntityKey>,
    /// Current search query text.
    pub search_query: String,
    /// Nodes whose label matches `search_query` (case-insensitive
    /// substring). Empty when the query is empty.
    pub suggestions: FxHashSet<EntityKey>,
    /// Direct neighbors of `hovered`. Empty when nothing is hovered.
    pub neighbors: FxHashSet<EntityKey>,
}

impl InteractionState {
    /// Whether no interaction axis is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.hovered.is_none()
            && self.selected.is_none()
            && self.search_query.is_empty()
    }
}
