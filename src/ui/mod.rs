//! Serde types for the editor's JSON wire format.
//!
//! These structs mirror what the flow editor persists (camelCase field
//! names, a per-node `data` bag) and exist only to be converted into the
//! canonical [`FlowDefinition`](crate::flow::FlowDefinition) via
//! [`IntoFlow`](crate::flow::IntoFlow).

mod types;

pub use types::*;
