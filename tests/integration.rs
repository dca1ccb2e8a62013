//! End-to-end scenario: a realistic flow through conversion, traversal,
//! and validation, then a topology mutation that breaks one branch.
mod common;
use common::*;
use flowgate::prelude::*;

/// Start -> A (agent) -> If -> [true: B (agent) -> End, false: End].
fn scenario_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![
            start("start"),
            agent("a", "A"),
            if_node("if", "If"),
            agent("b", "B"),
            end("end"),
        ],
        edges: vec![
            edge("e1", "start", "a"),
            edge("e2", "a", "if"),
            branch_edge("e3", "if", "b", "true"),
            edge("e4", "b", "end"),
            branch_edge("e5", "if", "end", "false"),
        ],
    }
}

#[test]
fn test_scenario_is_valid() {
    let flow = scenario_flow();

    let result = traverse(&flow);
    assert!(result.has_valid_flow);
    assert!(result.disconnected_process_nodes.is_empty());

    assert!(validate_flow(&flow).is_empty());
}

#[test]
fn test_rerouting_false_branch_into_dead_end() {
    let mut flow = scenario_flow();
    flow.nodes.push(agent("c", "C"));
    flow.edges.retain(|edge| edge.id != "e5");
    flow.edges.push(branch_edge("e5", "if", "c", "false"));

    let result = traverse(&flow);
    assert!(!result.has_valid_flow);
    // C is reached through the if node but never reaches end, so the
    // both-directions rule still counts it as disconnected.
    assert!(result.connectivity("c").is_connected_to_start);
    assert!(!result.connectivity("c").is_connected_to_end);
    assert_eq!(result.disconnected_process_nodes, vec!["c"]);

    let issues = validate_flow(&flow);
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].code,
        ValidationIssueCode::IfNodeBranchNotReachingEnd
    );
    assert_eq!(issues[0].id, "if_node_branch_not_reaching_end.if.false");
}

#[test]
fn test_ui_json_round_trip() {
    let flow_json = r#"{
        "nodes": [
            { "id": "start", "type": "start", "position": { "x": 0, "y": 0 }, "data": {} },
            { "id": "a", "type": "agent", "position": { "x": 200, "y": 0 },
              "data": { "name": "A", "model": "sonnet" } },
            { "id": "if", "type": "if", "position": { "x": 400, "y": 0 },
              "data": {
                "label": "If",
                "logicOperator": "or",
                "conditions": [{
                  "id": "c1",
                  "dataType": "boolean",
                  "operator": "boolean_is_true",
                  "value1": "{{a.done}}"
                }]
              } },
            { "id": "b", "type": "agent", "position": { "x": 600, "y": -80 },
              "data": { "name": "B" } },
            { "id": "store", "type": "dataStore", "position": { "x": 600, "y": 80 },
              "data": { "name": "Notes" } },
            { "id": "end", "type": "end", "position": { "x": 800, "y": 0 }, "data": {} }
        ],
        "edges": [
            { "id": "e1", "source": "start", "target": "a" },
            { "id": "e2", "source": "a", "target": "if" },
            { "id": "e3", "source": "if", "target": "b", "sourceHandle": "true" },
            { "id": "e4", "source": "b", "target": "end" },
            { "id": "e5", "source": "if", "target": "store", "sourceHandle": "false" },
            { "id": "e6", "source": "store", "target": "end" }
        ]
    }"#;

    let flow = UiFlow::from_json(flow_json).unwrap().into_flow().unwrap();
    assert_eq!(flow.nodes.len(), 6);

    // Kind-specific payloads landed in the right variants.
    let if_payload = match &flow.node("if").unwrap().kind {
        NodeKind::If(data) => data,
        other => panic!("expected an if node, got {:?}", other.tag()),
    };
    assert_eq!(if_payload.logic_operator, LogicOperator::Or);
    assert_eq!(if_payload.conditions.len(), 1);
    assert!(if_payload.conditions[0].is_well_formed());

    let agent_payload = match &flow.node("a").unwrap().kind {
        NodeKind::Agent(data) => data,
        other => panic!("expected an agent node, got {:?}", other.tag()),
    };
    assert_eq!(agent_payload.config["model"], "sonnet");

    assert!(traverse(&flow).has_valid_flow);
    assert!(validate_flow(&flow).is_empty());
}

#[test]
fn test_unknown_node_kind_is_a_conversion_error() {
    let flow_json = r#"{
        "nodes": [{ "id": "x", "type": "email", "data": {} }],
        "edges": []
    }"#;

    let err = UiFlow::from_json(flow_json)
        .unwrap()
        .into_flow()
        .unwrap_err();
    match err {
        FlowConversionError::UnknownNodeKind { node_id, kind } => {
            assert_eq!(node_id, "x");
            assert_eq!(kind, "email");
        }
        other => panic!("expected UnknownNodeKind, got {other}"),
    }
}
