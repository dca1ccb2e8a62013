use super::{TraversalResult, traverse};
use crate::flow::FlowDefinition;
use ahash::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::Arc;

/// Fixed hasher seeds so fingerprints are stable across cache instances
/// within one build.
const FINGERPRINT_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// Structural fingerprint of a flow snapshot.
///
/// Covers node identities (id + kind tag) and edge topology (source, target,
/// source handle). Positions, labels, and node payloads are deliberately
/// excluded: they cannot change connectivity, so dragging a node or editing
/// an agent prompt keeps the cached traversal valid.
pub fn flow_fingerprint(flow: &FlowDefinition) -> u64 {
    let state = RandomState::with_seeds(
        FINGERPRINT_SEEDS.0,
        FINGERPRINT_SEEDS.1,
        FINGERPRINT_SEEDS.2,
        FINGERPRINT_SEEDS.3,
    );
    let mut hasher = state.build_hasher();

    flow.nodes.len().hash(&mut hasher);
    for node in &flow.nodes {
        node.id.hash(&mut hasher);
        node.kind.tag().as_str().hash(&mut hasher);
    }
    flow.edges.len().hash(&mut hasher);
    for edge in &flow.edges {
        edge.source.hash(&mut hasher);
        edge.target.hash(&mut hasher);
        edge.source_handle.hash(&mut hasher);
    }

    hasher.finish()
}

/// A bounded, most-recently-used cache of traversal results keyed by
/// [`flow_fingerprint`].
///
/// The UI calls the engine on every re-render; an unchanged graph must come
/// back without re-traversing. Entries are shared as `Arc`s, so callers hold
/// read-only views and a recompute replaces rather than mutates. The cache
/// is a plain owned object: a multi-threaded host wraps it in its own lock.
#[derive(Debug)]
pub struct TraversalCache {
    /// Most recent first.
    entries: Vec<(u64, Arc<TraversalResult>)>,
    capacity: usize,
}

impl TraversalCache {
    pub const DEFAULT_CAPACITY: usize = 8;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Retention is a performance knob only; correctness never depends on
    /// what is still cached. Capacity 0 is clamped to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Returns the cached traversal for this snapshot's fingerprint, or
    /// traverses and caches.
    pub fn get_or_compute(&mut self, flow: &FlowDefinition) -> Arc<TraversalResult> {
        let fingerprint = flow_fingerprint(flow);

        if let Some(index) = self
            .entries
            .iter()
            .position(|(key, _)| *key == fingerprint)
        {
            tracing::debug!(fingerprint, "traversal cache hit");
            let entry = self.entries.remove(index);
            let result = entry.1.clone();
            self.entries.insert(0, entry);
            return result;
        }

        tracing::debug!(
            fingerprint,
            nodes = flow.nodes.len(),
            edges = flow.edges.len(),
            "traversal cache miss, recomputing"
        );
        let result = Arc::new(traverse(flow));
        self.entries.insert(0, (fingerprint, result.clone()));
        self.entries.truncate(self.capacity);
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for TraversalCache {
    fn default() -> Self {
        Self::new()
    }
}
