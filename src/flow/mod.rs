//! The canonical flow graph model.
//!
//! A [`FlowDefinition`] is an immutable snapshot of the user-drawn graph:
//! an ordered list of nodes and an ordered list of directed edges. It is the
//! input to both the reachability engine and the structural validator, and
//! the target of the [`IntoFlow`] conversion seam for host formats.

mod conversion;
mod definition;
mod queries;

pub use conversion::*;
pub use definition::*;
pub use queries::*;
