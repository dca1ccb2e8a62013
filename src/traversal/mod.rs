//! The reachability engine.
//!
//! [`traverse`] computes, for every node in a snapshot, whether it is
//! forward-reachable from the start node and whether it can reach the end
//! node, tolerating cycles, dangling edges, and missing roots. The result
//! also carries the composite `has_valid_flow` verdict that gates execution.
//!
//! [`TraversalEngine`] wraps the pure function with a fingerprint-keyed
//! cache ([`TraversalCache`]) so the repeated queries a UI makes against an
//! unchanged graph are O(1).

mod cache;
pub mod reach;

pub use cache::{TraversalCache, flow_fingerprint};
pub use reach::{ReachSet, can_reach};

use crate::flow::{FlowDefinition, FlowEdge, IfBranches, NodeKindTag};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use std::sync::Arc;

/// Connectivity of one node, both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeConnectivity {
    pub is_connected_to_start: bool,
    pub is_connected_to_end: bool,
}

impl NodeConnectivity {
    /// On the valid core path: reachable from start and reaching end.
    pub fn is_fully_connected(self) -> bool {
        self.is_connected_to_start && self.is_connected_to_end
    }
}

/// The derived connectivity summary for one flow snapshot.
///
/// Owned by the cache and handed out as a read-only view; a changed snapshot
/// produces a fresh result rather than mutating this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraversalResult {
    connectivity: AHashMap<String, NodeConnectivity>,
    /// True iff start and end exist, every process node is fully connected,
    /// and every start-connected conditional node has a sound, end-reaching
    /// branch pair.
    pub has_valid_flow: bool,
    /// Process nodes failing either connectivity direction, in node order.
    pub disconnected_process_nodes: Vec<String>,
}

impl TraversalResult {
    /// Connectivity for a node id. Unknown ids are unreachable in both
    /// directions, which is the tolerant answer for dangling references.
    pub fn connectivity(&self, node_id: &str) -> NodeConnectivity {
        self.connectivity.get(node_id).copied().unwrap_or_default()
    }

    pub fn is_fully_connected(&self, node_id: &str) -> bool {
        self.connectivity(node_id).is_fully_connected()
    }
}

/// The set of node ids forward-reachable from `start_id`, following edge
/// direction. The dual of [`ReachSet`]; same visited-set discipline.
fn forward_reachable(start_id: &str, edges: &[FlowEdge]) -> AHashSet<String> {
    let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        outgoing
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut visited = AHashSet::new();
    visited.insert(start_id.to_string());
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        let Some(targets) = outgoing.get(current) else {
            continue;
        };
        for &target in targets {
            if visited.insert(target.to_string()) {
                queue.push_back(target);
            }
        }
    }

    visited
}

/// Every start-connected conditional node must have exactly one true and one
/// false branch, each reaching the end node. Conditional nodes that are not
/// start-connected are already accounted for by the disconnected set.
fn if_branches_valid(
    flow: &FlowDefinition,
    forward: &AHashSet<String>,
    reaches_end: &dyn Fn(&str) -> bool,
) -> bool {
    for node in flow.nodes_of_kind(NodeKindTag::If) {
        if !forward.contains(&node.id) {
            continue;
        }
        let branches = IfBranches::partition(flow, &node.id);
        if !branches.is_complete() {
            return false;
        }
        let both_reach_end = branches
            .true_edges
            .iter()
            .chain(&branches.false_edges)
            .all(|edge| reaches_end(&edge.target));
        if !both_reach_end {
            return false;
        }
    }
    true
}

/// Computes connectivity for every node in the snapshot.
///
/// Pure and total: missing start or end nodes mark everything unreachable in
/// that direction instead of failing, and malformed input (duplicate ids,
/// dangling edge endpoints) is characterized rather than rejected.
pub fn traverse(flow: &FlowDefinition) -> TraversalResult {
    let start = flow.start_node();
    let end = flow.end_node();

    let forward = match start {
        Some(node) => forward_reachable(&node.id, &flow.edges),
        None => AHashSet::new(),
    };
    let backward = end.map(|node| ReachSet::compute(&node.id, &flow.edges));
    let reaches_end = |id: &str| backward.as_ref().is_some_and(|set| set.contains(id));

    let mut connectivity = AHashMap::with_capacity(flow.nodes.len());
    for node in &flow.nodes {
        connectivity.insert(
            node.id.clone(),
            NodeConnectivity {
                is_connected_to_start: forward.contains(&node.id),
                is_connected_to_end: reaches_end(&node.id),
            },
        );
    }

    let mut disconnected_process_nodes = Vec::new();
    let mut seen = AHashSet::new();
    for node in flow.process_nodes() {
        let fully_connected = forward.contains(&node.id) && reaches_end(&node.id);
        if !fully_connected && seen.insert(node.id.clone()) {
            disconnected_process_nodes.push(node.id.clone());
        }
    }

    let has_valid_flow = start.is_some()
        && end.is_some()
        && disconnected_process_nodes.is_empty()
        && if_branches_valid(flow, &forward, &reaches_end);

    TraversalResult {
        connectivity,
        has_valid_flow,
        disconnected_process_nodes,
    }
}

/// The caching front door to [`traverse`].
///
/// The cache is injectable so a host can share one across panels or size it
/// to its navigation patterns.
#[derive(Debug, Default)]
pub struct TraversalEngine {
    cache: TraversalCache,
}

impl TraversalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: TraversalCache) -> Self {
        Self { cache }
    }

    /// Cached traversal of one snapshot. Two calls against an unchanged
    /// graph return the same `Arc`.
    pub fn traverse(&mut self, flow: &FlowDefinition) -> Arc<TraversalResult> {
        self.cache.get_or_compute(flow)
    }

    pub fn cache(&self) -> &TraversalCache {
        &self.cache
    }
}
