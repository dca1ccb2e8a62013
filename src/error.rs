use thiserror::Error;

/// Errors that can occur while turning an external flow format into a
/// [`FlowDefinition`](crate::flow::FlowDefinition).
///
/// Note that *structural* defects (missing start node, dangling branches,
/// disconnected nodes) are never errors: they come back as
/// [`ValidationIssue`](crate::validation::ValidationIssue) data from the
/// validator. This enum only covers input that cannot be represented at all.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownNodeKind { node_id: String, kind: String },

    #[error("Node '{node_id}' ({kind}) has an invalid data payload: {message}")]
    InvalidNodeData {
        node_id: String,
        kind: String,
        message: String,
    },

    #[error("Invalid custom flow data: {0}")]
    ValidationError(String),
}
