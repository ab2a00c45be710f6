//! Case data model.
//!
//! `types` holds the nested shape the case builder hands over, `compile`
//! turns it into a validated [`CaseGraph`] and `demo` supplies the built-in
//! investigation.

pub mod compile;
mod demo;
mod types;

pub use compile::{compile, CaseError, CaseGraph, GraphNode, NodeId};
pub use demo::{demo_case, UNKNOWN_CASE};
pub use types::{CaseData, CaseNode, NodeCategory, UnknownCategory};

/// Id of the synthetic center node. Reserved: no case node may use it.
pub const CENTER_ID: &str = "center";
