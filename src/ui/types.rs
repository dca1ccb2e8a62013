use crate::condition::{Condition, LogicOperator};
use crate::error::FlowConversionError;
use crate::flow::{
    AgentData, DataStoreData, FlowDefinition, FlowEdge, FlowNode, IfData, IntoFlow, NodeKind,
    Position,
};
use serde::Deserialize;

/// Editor node data bag. Kind-specific fields are all optional here; the
/// conversion picks out what the declared kind needs and keeps the rest as
/// an opaque payload.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiNodeData {
    pub label: Option<String>,
    pub name: Option<String>,
    pub conditions: Option<Vec<Condition>>,
    #[serde(alias = "logicOperator")]
    pub logic_operator: Option<LogicOperator>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// UI node with id, kind string, and data bag.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: UiNodeData,
    #[serde(default)]
    pub deletable: Option<bool>,
}

/// UI edge connecting nodes, branch handle included.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Complete editor flow structure.
#[derive(Debug, Deserialize)]
pub struct UiFlow {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl UiFlow {
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        serde_json::from_str(json)
            .map_err(|err| FlowConversionError::JsonParseError(err.to_string()))
    }
}

impl IntoFlow for UiFlow {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(ui_node_into_flow_node)
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|edge| FlowEdge {
                id: edge.id,
                source: edge.source,
                target: edge.target,
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
                label: edge.label,
            })
            .collect();

        Ok(FlowDefinition { nodes, edges })
    }
}

fn ui_node_into_flow_node(node: UiNode) -> Result<FlowNode, FlowConversionError> {
    let UiNode {
        id,
        kind,
        position,
        data,
        deletable,
    } = node;

    let kind = match kind.as_str() {
        "start" => NodeKind::Start,
        "end" => NodeKind::End,
        "agent" => NodeKind::Agent(AgentData {
            label: data.label,
            name: data.name,
            config: serde_json::Value::Object(data.extra),
        }),
        "if" => NodeKind::If(IfData {
            label: data.label,
            conditions: data.conditions.unwrap_or_default(),
            logic_operator: data.logic_operator.unwrap_or_default(),
        }),
        "dataStore" => NodeKind::DataStore(DataStoreData {
            label: data.label,
            name: data.name,
            config: serde_json::Value::Object(data.extra),
        }),
        other => {
            return Err(FlowConversionError::UnknownNodeKind {
                node_id: id,
                kind: other.to_string(),
            });
        }
    };

    Ok(FlowNode {
        id,
        kind,
        position,
        deletable,
    })
}
