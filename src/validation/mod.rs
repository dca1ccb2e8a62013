//! The structural validator.
//!
//! [`FlowValidator::validate`] turns a snapshot's topological defects into
//! an ordered list of typed [`ValidationIssue`]s. It never fails: a
//! malformed flow yields more issues, not an error, and it is re-entrant
//! enough to run on every keystroke-scale UI change.

mod issue;

pub use issue::*;

use crate::flow::{BranchHandle, FlowDefinition, FlowNode, IfBranches, NodeKind, NodeKindTag};
use crate::traversal::{ReachSet, TraversalCache, TraversalEngine, TraversalResult};
use itertools::Itertools;
use serde_json::json;

/// Validates flow snapshots, reusing one traversal cache across calls.
///
/// Apart from that cache the validator owns no state between calls; each
/// `validate` recomputes the full issue list from the snapshot alone.
#[derive(Debug, Default)]
pub struct FlowValidator {
    engine: TraversalEngine,
}

impl FlowValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: TraversalCache) -> Self {
        Self {
            engine: TraversalEngine::with_cache(cache),
        }
    }

    /// Produces the complete, ordered issue list for one snapshot.
    ///
    /// Top-level diagnoses are mutually exclusive, checked in priority
    /// order: missing start, missing end, conditional branch defects,
    /// disconnected process nodes, then a generic catch-all. Warnings are
    /// cumulative and appended even when the flow is otherwise valid.
    pub fn validate(&mut self, flow: &FlowDefinition) -> Vec<ValidationIssue> {
        if flow.start_node().is_none() {
            return vec![missing_start_issue()];
        }
        let Some(end) = flow.end_node() else {
            return vec![missing_end_issue()];
        };
        let end_id = end.id.clone();

        let result = self.engine.traverse(flow);

        let mut issues = Vec::new();
        if !result.has_valid_flow {
            // One reach set serves every branch check in this pass.
            let reach_end = ReachSet::compute(&end_id, &flow.edges);
            let branch_issues = if_branch_issues(flow, &result, &reach_end);
            if !branch_issues.is_empty() {
                issues.extend(branch_issues);
            } else if !result.disconnected_process_nodes.is_empty() {
                issues.push(disconnected_nodes_issue(flow, &result));
            } else {
                tracing::warn!("structural validation fell through to the generic diagnosis");
                issues.push(generic_invalid_issue());
            }
        }

        issues.extend(fanout_warnings(flow));
        issues
    }
}

/// One-shot validation without a shared cache.
pub fn validate_flow(flow: &FlowDefinition) -> Vec<ValidationIssue> {
    FlowValidator::new().validate(flow)
}

fn missing_start_issue() -> ValidationIssue {
    ValidationIssue::error(
        ValidationIssueCode::InvalidFlowStructure,
        "no_start",
        "Flow has no start node",
        "Every flow needs a start node so the engine knows where a chat turn begins.",
        "Add a start node and connect it to your first process node.",
    )
}

fn missing_end_issue() -> ValidationIssue {
    ValidationIssue::error(
        ValidationIssueCode::InvalidFlowStructure,
        "no_end",
        "Flow has no end node",
        "Every flow needs an end node so the engine knows when a chat turn is complete.",
        "Add an end node and connect your last process node to it.",
    )
}

/// Branch defects for every start-connected conditional node. A conditional
/// node that is not start-connected is skipped here; its dangling branches
/// are covered by the disconnection diagnosis alone.
fn if_branch_issues(
    flow: &FlowDefinition,
    result: &TraversalResult,
    reach_end: &ReachSet,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for node in flow.nodes_of_kind(NodeKindTag::If) {
        if !result.connectivity(&node.id).is_connected_to_start {
            continue;
        }

        let branches = IfBranches::partition(flow, &node.id);
        if branches.has_duplicates() {
            issues.push(duplicate_branches_issue(node, &branches));
            continue;
        }

        let missing = branches.missing();
        if !missing.is_empty() {
            issues.push(missing_branches_issue(node, &missing));
            continue;
        }

        for handle in [BranchHandle::True, BranchHandle::False] {
            let Some(edge) = branches.edge_for(handle) else {
                continue;
            };
            if !reach_end.contains(&edge.target) {
                issues.push(branch_not_reaching_end_issue(node, handle));
            }
        }
    }
    issues
}

fn duplicate_branches_issue(node: &FlowNode, branches: &IfBranches<'_>) -> ValidationIssue {
    let label = node.display_label();
    ValidationIssue::error(
        ValidationIssueCode::InvalidFlowStructure,
        &format!("duplicate_branches.{}", node.id),
        "Condition branch is connected more than once",
        format!(
            "The condition node '{label}' has more than one edge on the same branch handle, \
             so the branch to follow is ambiguous."
        ),
        "Remove the extra connections so each branch has exactly one edge.",
    )
    .with_metadata(json!({
        "nodeId": node.id,
        "trueEdges": branches.true_edges.len(),
        "falseEdges": branches.false_edges.len(),
    }))
}

fn missing_branches_issue(node: &FlowNode, missing: &[BranchHandle]) -> ValidationIssue {
    let label = node.display_label();
    let (discriminator, description) = match missing {
        [handle] => (
            format!("{}.{}", node.id, handle),
            format!("The condition node '{label}' is missing its {handle} branch."),
        ),
        _ => (
            format!("{}.both", node.id),
            format!(
                "The condition node '{label}' has no outgoing branches; \
                 both the true and the false branch are unconnected."
            ),
        ),
    };
    ValidationIssue::error(
        ValidationIssueCode::IfNodeMissingBranches,
        &discriminator,
        "Condition node is missing branches",
        description,
        "Connect both the true and the false output of this condition node.",
    )
    .with_metadata(json!({
        "nodeId": node.id,
        "missingBranches": missing.iter().map(|handle| handle.as_str()).collect::<Vec<_>>(),
    }))
}

fn branch_not_reaching_end_issue(node: &FlowNode, handle: BranchHandle) -> ValidationIssue {
    let label = node.display_label();
    ValidationIssue::error(
        ValidationIssueCode::IfNodeBranchNotReachingEnd,
        &format!("{}.{}", node.id, handle),
        "Condition branch never reaches the end node",
        format!("The {handle} branch of condition node '{label}' never reaches the end node."),
        format!(
            "Connect the {handle} branch, directly or through other nodes, to the end node."
        ),
    )
    .with_metadata(json!({ "nodeId": node.id, "branch": handle.as_str() }))
}

fn disconnected_nodes_issue(flow: &FlowDefinition, result: &TraversalResult) -> ValidationIssue {
    let labels = result
        .disconnected_process_nodes
        .iter()
        .map(|id| flow.node(id).map_or(id.as_str(), |node| node.display_label()))
        .join(", ");
    ValidationIssue::error(
        ValidationIssueCode::InvalidFlowStructure,
        "disconnected_nodes",
        "Flow has disconnected nodes",
        format!("These nodes are not on a path from start to end: {labels}."),
        "Connect every process node so it is reachable from start and reaches end.",
    )
    .with_metadata(json!({ "nodeIds": result.disconnected_process_nodes }))
}

fn generic_invalid_issue() -> ValidationIssue {
    ValidationIssue::error(
        ValidationIssueCode::InvalidFlowStructure,
        "unknown",
        "Flow structure is invalid",
        "The flow failed validation but no specific cause could be identified.",
        "Review the connections between your nodes.",
    )
}

/// Fan-out from non-condition nodes is tolerated by the reachability rules
/// but leaves the execution order ambiguous, so it is surfaced as a warning
/// even on otherwise valid flows.
fn fanout_warnings(flow: &FlowDefinition) -> Vec<ValidationIssue> {
    let outgoing_counts = flow.edges.iter().counts_by(|edge| edge.source.as_str());

    let mut warnings = Vec::new();
    for node in &flow.nodes {
        if matches!(node.kind, NodeKind::If(_)) {
            continue;
        }
        let count = outgoing_counts.get(node.id.as_str()).copied().unwrap_or(0);
        if count <= 1 {
            continue;
        }
        let label = node.display_label();
        let mut warning = ValidationIssue::warning(
            ValidationIssueCode::InvalidFlowStructure,
            &format!("ambiguous_fanout.{}", node.id),
            "Node has multiple outgoing connections",
            format!(
                "'{label}' has {count} outgoing connections; only condition nodes branch, \
                 so the execution order here is ambiguous."
            ),
            "Keep a single outgoing connection on non-condition nodes.",
        )
        .with_metadata(json!({ "nodeId": node.id, "outgoingEdges": count }));
        if let NodeKind::Agent(data) = &node.kind {
            if let Some(name) = data.name.clone().or_else(|| data.label.clone()) {
                warning = warning.with_agent(node.id.clone(), name);
            }
        }
        warnings.push(warning);
    }
    warnings
}
