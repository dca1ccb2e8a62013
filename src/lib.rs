//! # Flowgate - Flow Graph Reachability and Structural Validation
//!
//! **Flowgate** proves user-drawn chat-pipeline flows structurally sound
//! before they are allowed to execute. A flow is a directed graph with one
//! start node, one end node, and process nodes (agent calls, condition
//! branches, data-store mutations) in between; flowgate computes which nodes
//! lie on a start-to-end path, tolerates arbitrary cycles and disconnected
//! fragments, and turns every topological defect into a typed, user-facing
//! issue the editor can render.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical
//! [`FlowDefinition`](flow::FlowDefinition); the primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your flow format into your own structs, or
//!     use the bundled [`ui::UiFlow`] types for the editor's JSON shape.
//! 2.  **Convert**: Implement [`flow::IntoFlow`] for your structs (or reuse
//!     the `UiFlow` impl) to translate into a `FlowDefinition`.
//! 3.  **Traverse**: Ask a [`traversal::TraversalEngine`] for the
//!     connectivity summary. Repeated queries against an unchanged graph are
//!     answered from a fingerprint-keyed cache.
//! 4.  **Validate**: Run a [`validation::FlowValidator`] to get the ordered
//!     issue list that gates execution.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowgate::prelude::*;
//!
//! fn main() -> flowgate::prelude::Result<()> {
//!     let flow_json = r#"{
//!         "nodes": [
//!             { "id": "start", "type": "start", "position": { "x": 0, "y": 0 }, "data": {} },
//!             { "id": "triage", "type": "agent", "position": { "x": 200, "y": 0 },
//!               "data": { "name": "Triage" } },
//!             { "id": "router", "type": "if", "position": { "x": 400, "y": 0 },
//!               "data": {
//!                 "label": "Needs escalation?",
//!                 "logicOperator": "and",
//!                 "conditions": [{
//!                   "id": "c1",
//!                   "dataType": "string",
//!                   "operator": "string_contains",
//!                   "value1": "{{triage.category}}",
//!                   "value2": "escalate"
//!                 }]
//!               } },
//!             { "id": "escalation", "type": "agent", "position": { "x": 600, "y": -80 },
//!               "data": { "name": "Escalation" } },
//!             { "id": "end", "type": "end", "position": { "x": 800, "y": 0 }, "data": {} }
//!         ],
//!         "edges": [
//!             { "id": "e1", "source": "start", "target": "triage" },
//!             { "id": "e2", "source": "triage", "target": "router" },
//!             { "id": "e3", "source": "router", "target": "escalation", "sourceHandle": "true" },
//!             { "id": "e4", "source": "escalation", "target": "end" },
//!             { "id": "e5", "source": "router", "target": "end", "sourceHandle": "false" }
//!         ]
//!     }"#;
//!
//!     // Convert the editor format into the canonical flow model.
//!     let flow = UiFlow::from_json(flow_json)?.into_flow()?;
//!
//!     // Connectivity: cached per snapshot fingerprint.
//!     let mut engine = TraversalEngine::new();
//!     let result = engine.traverse(&flow);
//!     assert!(result.has_valid_flow);
//!     assert!(result.is_fully_connected("router"));
//!
//!     // Structural validation: a valid flow yields an empty issue list.
//!     let mut validator = FlowValidator::new();
//!     let issues = validator.validate(&flow);
//!     assert!(issues.is_empty());
//!
//!     Ok(())
//! }
//! ```

pub mod condition;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod traversal;
pub mod ui;
pub mod validation;
