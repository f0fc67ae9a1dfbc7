//! The store read seam and an in-memory reference implementation.

use rustc_hash::{FxHashMap, FxHashSet};

use super::attributes::{EdgeAttributes, EntityKey, NodeAttributes};

/// Read access to a graph data store.
///
/// The store itself is an external collaborator with a single assumed
/// writer; this core only ever reads through this trait. Implementations
/// must keep `revision` monotonically increasing across mutations so
/// derived indexes (e.g. the tracker's label index) can invalidate
/// themselves without a callback channel.
pub trait GraphRead {
    /// Whether a node with this key exists.
    fn contains_node(&self, key: &str) -> bool;

    /// Base attributes of a node, if present.
    fn node_attributes(&self, key: &str) -> Option<&NodeAttributes>;

    /// Source and target keys of an edge, if present.
    fn edge_endpoints(&self, key: &str) -> Option<(&str, &str)>;

    /// Base attributes of an edge, if present.
    fn edge_attributes(&self, key: &str) -> Option<&EdgeAttributes>;

    /// The set of nodes adjacent to `key`.
    ///
    /// Returns an owned set: callers store it in interaction snapshots
    /// that outlive the borrow.
    fn neighbors(&self, key: &str) -> FxHashSet<EntityKey>;

    /// Visit every node with its base attributes.
    fn visit_nodes(&self, visit: &mut dyn FnMut(&str, &NodeAttributes));

    /// Visit every edge as `(key, source, target, attributes)`.
    fn visit_edges(
        &self,
        visit: &mut dyn FnMut(&str, &str, &str, &EdgeAttributes),
    );

    /// Number of nodes in the store.
    fn node_count(&self) -> usize;

    /// Monotonic mutation counter.
    fn revision(&self) -> u64;
}

/// An edge with its endpoints.
#[derive(Debug, Clone)]
struct EdgeRecord {
    source: EntityKey,
    target: EntityKey,
    attrs: EdgeAttributes,
}

/// In-memory graph store with an adjacency index.
///
/// Insertion order is not an API guarantee; iteration follows hash order.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    nodes: FxHashMap<EntityKey, NodeAttributes>,
    edges: FxHashMap<EntityKey, EdgeRecord>,
    adjacency: FxHashMap<EntityKey, FxHashSet<EntityKey>>,
    revision: u64,
}

impl MemoryGraph {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node.
    pub fn insert_node(&mut self, key: impl Into<EntityKey>, attrs: NodeAttributes) {
        let _ = self.nodes.insert(key.into(), attrs);
        self.revision += 1;
    }

    /// Insert or replace an edge between two existing nodes.
    ///
    /// Returns `false` (and leaves the store untouched) when either
    /// endpoint is missing.
    pub fn insert_edge(
        &mut self,
        key: impl Into<EntityKey>,
        source: impl Into<EntityKey>,
        target: impl Into<EntityKey>,
        attrs: EdgeAttributes,
    ) -> bool {
        let (key, source, target) = (key.into(), source.into(), target.into());
        if !self.nodes.contains_key(&source) || !self.nodes.contains_key(&target)
        {
            log::warn!(
                "edge {key:?} references missing endpoint ({source:?} -> {target:?}); dropped"
            );
            return false;
        }
        let _ = self
            .adjacency
            .entry(source.clone())
            .or_default()
            .insert(target.clone());
        let _ = self
            .adjacency
            .entry(target.clone())
            .or_default()
            .insert(source.clone());
        let _ = self.edges.insert(
            key,
            EdgeRecord {
                source,
                target,
                attrs,
            },
        );
        self.revision += 1;
        true
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Returns `false` when no such node exists.
    pub fn remove_node(&mut self, key: &str) -> bool {
        if self.nodes.remove(key).is_none() {
            return false;
        }
        let incident: Vec<EntityKey> = self
            .edges
            .iter()
            .filter(|(_, e)| e.source == key || e.target == key)
            .map(|(k, _)| k.clone())
            .collect();
        for edge_key in &incident {
            let _ = self.remove_edge(edge_key);
        }
        let _ = self.adjacency.remove(key);
        self.revision += 1;
        true
    }

    /// Remove an edge, keeping the adjacency index consistent.
    ///
    /// Returns `false` when no such edge exists.
    pub fn remove_edge(&mut self, key: &str) -> bool {
        let Some(record) = self.edges.remove(key) else {
            return false;
        };
        self.unlink(&record.source, &record.target);
        self.unlink(&record.target, &record.source);
        self.revision += 1;
        true
    }

    /// Drop the adjacency entry `from -> to` unless another edge still
    /// connects the pair.
    fn unlink(&mut self, from: &str, to: &str) {
        let still_connected = self.edges.values().any(|e| {
            (e.source == from && e.target == to)
                || (e.source == to && e.target == from)
        });
        if still_connected {
            return;
        }
        if let Some(set) = self.adjacency.get_mut(from) {
            let _ = set.remove(to);
            if set.is_empty() {
                let _ = self.adjacency.remove(from);
            }
        }
    }

    /// Number of edges in the store.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Scoped initialization guard: run `loader` only when the store holds
    /// no nodes.
    ///
    /// This replaces process-global "already loaded" flags — the guard is
    /// the store's own entity count, so a remounted view over a populated
    /// store never double-loads, and a fresh store always loads.
    /// Returns whether the loader ran.
    pub fn populate_if_empty(&mut self, loader: impl FnOnce(&mut Self)) -> bool {
        if self.nodes.is_empty() {
            loader(self);
            log::debug!(
                "store populated: {} nodes, {} edges",
                self.nodes.len(),
                self.edges.len()
            );
            true
        } else {
            log::debug!(
                "store already holds {} nodes; load skipped",
                self.nodes.len()
            );
            false
        }
    }
}

impl GraphRead for MemoryGraph {
    fn contains_node(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    fn node_attributes(&self, key: &str) -> Option<&NodeAttributes> {
        self.nodes.get(key)
    }

    fn edge_endpoints(&self, key: &str) -> Option<(&str, &str)> {
        self.edges
            .get(key)
            .map(|e| (e.source.as_str(), e.target.as_str()))
    }

    fn edge_attributes(&self, key: &str) -> Option<&EdgeAttributes> {
        self.edges.get(key).map(|e| &e.attrs)
    }

    fn neighbors(&self, key: &str) -> FxHashSet<EntityKey> {
        self.adjacency.get(key).cloned().unwrap_or_default()
    }

    fn visit_nodes(&self, visit: &mut dyn FnMut(&str, &NodeAttributes)) {
        for (key, attrs) in &self.nodes {
            visit(key, attrs);
        }
    }

    fn visit_edges(
        &self,
        visit: &mut dyn FnMut(&str, &str, &str, &EdgeAttributes),
    ) {
        for (key, e) in &self.edges {
            visit(key, &e.source, &e.target, &e.attrs);
        }
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
