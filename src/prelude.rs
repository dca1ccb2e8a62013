//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the flowgate
//! crate. Import this module to get the core functionality without having
//! to name each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowgate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//! let flow = UiFlow::from_json(&flow_json)?.into_flow()?;
//!
//! let mut validator = FlowValidator::new();
//! for issue in validator.validate(&flow) {
//!     println!("{issue}");
//! }
//! # Ok(())
//! # }
//! ```

// Graph data model
pub use crate::flow::{
    AgentData, BranchHandle, DataStoreData, FlowDefinition, FlowEdge, FlowNode, IfBranches,
    IfData, IntoFlow, NodeKind, NodeKindTag, Position,
};

// Condition type system
pub use crate::condition::{
    Condition, ConditionDataType, ConditionOperator, LogicOperator, operators_for,
};

// Reachability engine
pub use crate::traversal::{
    NodeConnectivity, ReachSet, TraversalCache, TraversalEngine, TraversalResult, can_reach,
    flow_fingerprint, traverse,
};

// Structural validation
pub use crate::validation::{
    FlowValidator, ValidationIssue, ValidationIssueCode, ValidationSeverity, validate_flow,
};

// Wire format and errors
pub use crate::error::FlowConversionError;
pub use crate::ui::UiFlow;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
