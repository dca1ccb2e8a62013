//! Unit tests for the model vocabulary: displays, labels, branch handles,
//! and structural queries.
mod common;
use common::*;
use flowgate::prelude::*;

#[test]
fn test_node_kind_tag_wire_literals() {
    assert_eq!(NodeKindTag::Start.as_str(), "start");
    assert_eq!(NodeKindTag::End.as_str(), "end");
    assert_eq!(NodeKindTag::Agent.as_str(), "agent");
    assert_eq!(NodeKindTag::If.as_str(), "if");
    assert_eq!(format!("{}", NodeKindTag::DataStore), "dataStore");
}

#[test]
fn test_branch_handle_parsing_is_case_sensitive() {
    assert_eq!(BranchHandle::from_handle("true"), Some(BranchHandle::True));
    assert_eq!(BranchHandle::from_handle("false"), Some(BranchHandle::False));
    assert_eq!(BranchHandle::from_handle("True"), None);
    assert_eq!(BranchHandle::from_handle("output-0"), None);
    assert_eq!(BranchHandle::True.complement(), BranchHandle::False);
}

#[test]
fn test_display_label_fallbacks() {
    let named = agent("a1", "Summarizer");
    assert_eq!(named.display_label(), "Summarizer");

    let labeled = node(
        "a2",
        NodeKind::Agent(AgentData {
            label: Some("Friendly label".to_string()),
            name: Some("internal".to_string()),
            config: serde_json::Value::Null,
        }),
    );
    assert_eq!(labeled.display_label(), "Friendly label");

    let blank = node(
        "a3",
        NodeKind::Agent(AgentData {
            label: Some(String::new()),
            name: None,
            config: serde_json::Value::Null,
        }),
    );
    assert_eq!(blank.display_label(), "a3");

    assert_eq!(start("s").display_label(), "s");
}

#[test]
fn test_structural_queries() {
    let flow = branching_flow();

    assert_eq!(flow.start_node().unwrap().id, "start");
    assert_eq!(flow.end_node().unwrap().id, "end");
    assert_eq!(flow.nodes_of_kind(NodeKindTag::Agent).count(), 2);
    assert_eq!(flow.process_nodes().count(), 3);
    assert_eq!(flow.edges_from("router").count(), 2);
    assert_eq!(flow.edges_to("end").count(), 2);
    assert!(flow.node("missing").is_none());

    // Empty answers are valid answers.
    let empty = FlowDefinition::default();
    assert!(empty.start_node().is_none());
    assert_eq!(empty.nodes_of_kind(NodeKindTag::If).count(), 0);
}

#[test]
fn test_if_branch_partition() {
    let flow = branching_flow();
    let branches = IfBranches::partition(&flow, "router");

    assert!(branches.is_complete());
    assert!(!branches.has_duplicates());
    assert!(branches.missing().is_empty());
    assert_eq!(branches.outgoing_count(), 2);
    assert_eq!(branches.edge_for(BranchHandle::True).unwrap().target, "escalation");
    assert_eq!(branches.edge_for(BranchHandle::False).unwrap().target, "end");
}

#[test]
fn test_unlabeled_edges_do_not_count_as_branches() {
    let flow = FlowDefinition {
        nodes: vec![start("start"), if_node("router", "Router"), end("end")],
        edges: vec![
            edge("e1", "start", "router"),
            edge("e2", "router", "end"),
        ],
    };

    let branches = IfBranches::partition(&flow, "router");
    assert_eq!(branches.unlabeled.len(), 1);
    assert!(!branches.is_complete());
    assert_eq!(
        branches.missing(),
        vec![BranchHandle::True, BranchHandle::False]
    );
}

#[test]
fn test_node_kind_serde_shape() {
    let rendered = serde_json::to_value(&agent("a", "A")).unwrap();
    assert_eq!(rendered["kind"], "agent");
    assert_eq!(rendered["data"]["name"], "A");

    let rendered = serde_json::to_value(&start("s")).unwrap();
    assert_eq!(rendered["kind"], "start");
}

#[test]
fn test_issue_display_and_ids() {
    assert_eq!(
        ValidationIssue::deterministic_id(ValidationIssueCode::IfNodeMissingBranches, "n1.true"),
        "if_node_missing_branches.n1.true"
    );

    let issue = ValidationIssue::error(
        ValidationIssueCode::InvalidFlowStructure,
        "no_start",
        "Flow has no start node",
        "desc",
        "fix",
    );
    let rendered = issue.to_string();
    assert!(rendered.contains("error"));
    assert!(rendered.contains("INVALID_FLOW_STRUCTURE"));
    assert!(rendered.contains("Flow has no start node"));
}

#[test]
fn test_conversion_error_display() {
    let err = FlowConversionError::UnknownNodeKind {
        node_id: "n7".to_string(),
        kind: "webhook".to_string(),
    };
    assert!(err.to_string().contains("n7"));
    assert!(err.to_string().contains("webhook"));
}
