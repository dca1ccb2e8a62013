use super::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for host data models that can be converted into a canonical
/// [`FlowDefinition`].
///
/// This is the extension point that keeps the engine format-agnostic: parse
/// whatever your editor or persistence layer stores, then translate it here.
/// The crate ships one first-party implementation for the editor's JSON
/// shape, [`UiFlow`](crate::ui::UiFlow).
///
/// # Example
///
/// ```rust
/// use flowgate::error::FlowConversionError;
/// use flowgate::flow::{FlowDefinition, FlowNode, IntoFlow, NodeKind, Position};
///
/// // A host format that only records node ids and a kind string.
/// struct StoredNode { id: String, kind: String }
/// struct StoredFlow { nodes: Vec<StoredNode> }
///
/// impl IntoFlow for StoredFlow {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|stored| {
///                 let kind = match stored.kind.as_str() {
///                     "start" => NodeKind::Start,
///                     "end" => NodeKind::End,
///                     "agent" => NodeKind::Agent(Default::default()),
///                     "if" => NodeKind::If(Default::default()),
///                     "dataStore" => NodeKind::DataStore(Default::default()),
///                     other => {
///                         return Err(FlowConversionError::UnknownNodeKind {
///                             node_id: stored.id,
///                             kind: other.to_string(),
///                         });
///                     }
///                 };
///                 Ok(FlowNode {
///                     id: stored.id,
///                     kind,
///                     position: Position::default(),
///                     deletable: None,
///                 })
///             })
///             .collect::<Result<Vec<_>, _>>()?;
///
///         Ok(FlowDefinition { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the host object and converts it into a canonical flow.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
