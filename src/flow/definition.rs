use crate::condition::{Condition, LogicOperator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete, canonical definition of a chat-turn flow, ready for
/// traversal and validation. The engine never mutates a snapshot; edits
/// produce a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// A single node in the flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletable: Option<bool>,
}

impl FlowNode {
    /// Best-effort display label: the payload's `label`, then `name`, then
    /// the raw node id.
    pub fn display_label(&self) -> &str {
        let from_data = match &self.kind {
            NodeKind::Agent(data) => data.label.as_deref().or(data.name.as_deref()),
            NodeKind::If(data) => data.label.as_deref(),
            NodeKind::DataStore(data) => data.label.as_deref().or(data.name.as_deref()),
            NodeKind::Start | NodeKind::End => None,
        };
        from_data.filter(|label| !label.is_empty()).unwrap_or(&self.id)
    }
}

/// 2-D layout position. Rendering only, irrelevant to connectivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The node kind together with its kind-specific payload.
///
/// A sum type rather than a kind string plus untyped bag, so every place
/// that switches on kind is checked for exhaustiveness and the branch
/// validator can only ever see [`IfData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum NodeKind {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "end")]
    End,
    #[serde(rename = "agent")]
    Agent(AgentData),
    #[serde(rename = "if")]
    If(IfData),
    #[serde(rename = "dataStore")]
    DataStore(DataStoreData),
}

impl NodeKind {
    pub fn tag(&self) -> NodeKindTag {
        match self {
            NodeKind::Start => NodeKindTag::Start,
            NodeKind::End => NodeKindTag::End,
            NodeKind::Agent(_) => NodeKindTag::Agent,
            NodeKind::If(_) => NodeKindTag::If,
            NodeKind::DataStore(_) => NodeKindTag::DataStore,
        }
    }

    /// Process nodes are everything between start and end; they are the
    /// nodes subject to connectivity validation.
    pub fn is_process(&self) -> bool {
        matches!(
            self,
            NodeKind::Agent(_) | NodeKind::If(_) | NodeKind::DataStore(_)
        )
    }
}

/// Payload-free discriminant of [`NodeKind`], serialized with the wire
/// literals the editor switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKindTag {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "end")]
    End,
    #[serde(rename = "agent")]
    Agent,
    #[serde(rename = "if")]
    If,
    #[serde(rename = "dataStore")]
    DataStore,
}

impl NodeKindTag {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKindTag::Start => "start",
            NodeKindTag::End => "end",
            NodeKindTag::Agent => "agent",
            NodeKindTag::If => "if",
            NodeKindTag::DataStore => "dataStore",
        }
    }
}

impl fmt::Display for NodeKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an agent node. `config` is the opaque remainder of the
/// editor's data bag (model, prompt, parameters); this core never looks
/// inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Payload of a conditional node: the condition list and the operator that
/// combines the verdicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IfData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default, rename = "logicOperator")]
    pub logic_operator: LogicOperator,
}

/// Payload of a data-store mutation node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStoreData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// A directed connection between two nodes.
///
/// `source_handle` carries the `"true"`/`"false"` branch literal on edges
/// leaving a conditional node and is absent everywhere else.
/// `target_handle` is reserved and not interpreted by this core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, rename = "targetHandle", skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FlowEdge {
    /// The branch this edge implements, when its source handle is one of
    /// the two recognized literals.
    pub fn branch_handle(&self) -> Option<BranchHandle> {
        self.source_handle
            .as_deref()
            .and_then(BranchHandle::from_handle)
    }
}

/// One of the two outgoing branches of a conditional node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchHandle {
    True,
    False,
}

impl BranchHandle {
    /// Parses the case-sensitive `"true"`/`"false"` handle literals.
    pub fn from_handle(handle: &str) -> Option<BranchHandle> {
        match handle {
            "true" => Some(BranchHandle::True),
            "false" => Some(BranchHandle::False),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BranchHandle::True => "true",
            BranchHandle::False => "false",
        }
    }

    pub fn complement(self) -> BranchHandle {
        match self {
            BranchHandle::True => BranchHandle::False,
            BranchHandle::False => BranchHandle::True,
        }
    }
}

impl fmt::Display for BranchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
