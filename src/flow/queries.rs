use super::{BranchHandle, FlowDefinition, FlowEdge, FlowNode, NodeKindTag};

/// Structural queries over a snapshot. All of these are total: an empty
/// answer is a valid answer (a flow with no start node yields `None`, not
/// an error), and duplicate ids resolve to the first match in node order.
impl FlowDefinition {
    /// Looks up a node by id. First match wins when ids are duplicated.
    pub fn node(&self, node_id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|node| node.id == node_id)
    }

    /// All nodes of one kind, in node order.
    pub fn nodes_of_kind(&self, tag: NodeKindTag) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(move |node| node.kind.tag() == tag)
    }

    /// The first start node, if any.
    pub fn start_node(&self) -> Option<&FlowNode> {
        self.nodes_of_kind(NodeKindTag::Start).next()
    }

    /// The first end node, if any.
    pub fn end_node(&self) -> Option<&FlowNode> {
        self.nodes_of_kind(NodeKindTag::End).next()
    }

    /// Every agent, conditional, and data-store node, in node order.
    pub fn process_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(|node| node.kind.is_process())
    }

    /// All edges leaving a node.
    pub fn edges_from<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> {
        self.edges.iter().filter(move |edge| edge.source == node_id)
    }

    /// All edges entering a node.
    pub fn edges_to<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> {
        self.edges.iter().filter(move |edge| edge.target == node_id)
    }
}

/// The outgoing edges of a conditional node, split by branch handle.
#[derive(Debug, Default)]
pub struct IfBranches<'a> {
    pub true_edges: Vec<&'a FlowEdge>,
    pub false_edges: Vec<&'a FlowEdge>,
    /// Outgoing edges whose handle is absent or not a branch literal.
    pub unlabeled: Vec<&'a FlowEdge>,
}

impl<'a> IfBranches<'a> {
    /// Partitions the outgoing edges of `node_id` by `sourceHandle`.
    pub fn partition(flow: &'a FlowDefinition, node_id: &str) -> Self {
        let mut branches = IfBranches::default();
        for edge in &flow.edges {
            if edge.source != node_id {
                continue;
            }
            match edge.branch_handle() {
                Some(BranchHandle::True) => branches.true_edges.push(edge),
                Some(BranchHandle::False) => branches.false_edges.push(edge),
                None => branches.unlabeled.push(edge),
            }
        }
        branches
    }

    pub fn outgoing_count(&self) -> usize {
        self.true_edges.len() + self.false_edges.len() + self.unlabeled.len()
    }

    /// More than one edge on the same branch handle is a structural defect.
    pub fn has_duplicates(&self) -> bool {
        self.true_edges.len() > 1 || self.false_edges.len() > 1
    }

    /// The single edge for a branch, when exactly that many exist.
    pub fn edge_for(&self, handle: BranchHandle) -> Option<&'a FlowEdge> {
        let edges = match handle {
            BranchHandle::True => &self.true_edges,
            BranchHandle::False => &self.false_edges,
        };
        match edges.as_slice() {
            &[edge] => Some(edge),
            _ => None,
        }
    }

    /// Branch handles with no edge at all, in true-then-false order.
    pub fn missing(&self) -> Vec<BranchHandle> {
        let mut missing = Vec::new();
        if self.true_edges.is_empty() {
            missing.push(BranchHandle::True);
        }
        if self.false_edges.is_empty() {
            missing.push(BranchHandle::False);
        }
        missing
    }

    /// True when the branch structure itself is sound: exactly one edge per
    /// branch handle. Whether the branches reach the end node is a separate,
    /// reachability-level question.
    pub fn is_complete(&self) -> bool {
        self.true_edges.len() == 1 && self.false_edges.len() == 1
    }
}
