//! Common test utilities for building flow definitions.
use flowgate::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind,
        position: Position::default(),
        deletable: None,
    }
}

#[allow(dead_code)]
pub fn start(id: &str) -> FlowNode {
    node(id, NodeKind::Start)
}

#[allow(dead_code)]
pub fn end(id: &str) -> FlowNode {
    node(id, NodeKind::End)
}

#[allow(dead_code)]
pub fn agent(id: &str, name: &str) -> FlowNode {
    node(
        id,
        NodeKind::Agent(AgentData {
            label: None,
            name: Some(name.to_string()),
            config: serde_json::Value::Null,
        }),
    )
}

#[allow(dead_code)]
pub fn if_node(id: &str, label: &str) -> FlowNode {
    node(
        id,
        NodeKind::If(IfData {
            label: Some(label.to_string()),
            conditions: vec![],
            logic_operator: LogicOperator::And,
        }),
    )
}

#[allow(dead_code)]
pub fn data_store(id: &str, name: &str) -> FlowNode {
    node(
        id,
        NodeKind::DataStore(DataStoreData {
            label: None,
            name: Some(name.to_string()),
            config: serde_json::Value::Null,
        }),
    )
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        target_handle: None,
        label: None,
    }
}

#[allow(dead_code)]
pub fn branch_edge(id: &str, source: &str, target: &str, handle: &str) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: Some(handle.to_string()),
        target_handle: None,
        label: None,
    }
}

/// Start -> Summarize (agent) -> End.
#[allow(dead_code)]
pub fn linear_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![start("start"), agent("summarize", "Summarize"), end("end")],
        edges: vec![
            edge("e1", "start", "summarize"),
            edge("e2", "summarize", "end"),
        ],
    }
}

/// Start -> Triage (agent) -> Router (if) with a true branch through an
/// escalation agent and a false branch straight to End.
#[allow(dead_code)]
pub fn branching_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![
            start("start"),
            agent("triage", "Triage"),
            if_node("router", "Needs escalation?"),
            agent("escalation", "Escalation"),
            end("end"),
        ],
        edges: vec![
            edge("e1", "start", "triage"),
            edge("e2", "triage", "router"),
            branch_edge("e3", "router", "escalation", "true"),
            edge("e4", "escalation", "end"),
            branch_edge("e5", "router", "end", "false"),
        ],
    }
}
