use crate::flow::FlowEdge;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// The set of node ids that can reach one target node by following edges
/// forward.
///
/// Built with a single reverse breadth-first walk from the target, so a
/// validation pass that asks "does X reach the end node" for many different
/// X pays O(V + E) once instead of per question. The visited set doubles as
/// the membership answer and guarantees termination on cyclic graphs.
#[derive(Debug, Clone)]
pub struct ReachSet {
    target: String,
    members: AHashSet<String>,
}

impl ReachSet {
    /// Computes the reach set for `target_id` over `edges`.
    ///
    /// Dangling edge endpoints are harmless: an id that names no node simply
    /// becomes a member nothing ever asks about.
    pub fn compute(target_id: &str, edges: &[FlowEdge]) -> Self {
        let mut incoming: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in edges {
            incoming
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        let mut members = AHashSet::new();
        members.insert(target_id.to_string());
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(target_id);

        while let Some(current) = queue.pop_front() {
            let Some(sources) = incoming.get(current) else {
                continue;
            };
            for &source in sources {
                // Enqueue each node at most once, cycles included.
                if members.insert(source.to_string()) {
                    queue.push_back(source);
                }
            }
        }

        Self {
            target: target_id.to_string(),
            members,
        }
    }

    /// The target this set was computed for.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether `node_id` can reach the target. The target reaches itself.
    pub fn contains(&self, node_id: &str) -> bool {
        self.members.contains(node_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One-shot answer to "can `node_id` reach `target_id`".
///
/// Prefer holding a [`ReachSet`] when asking about many nodes against the
/// same target; this recomputes the set every call.
pub fn can_reach(node_id: &str, target_id: &str, edges: &[FlowEdge]) -> bool {
    ReachSet::compute(target_id, edges).contains(node_id)
}
