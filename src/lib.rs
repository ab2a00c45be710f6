pub mod case;
pub mod layout;
pub mod output;
pub mod respond;
pub mod view;
pub mod wasm;

pub use case::{compile, demo_case, CaseData, CaseError, CaseGraph, CaseNode, NodeCategory, CENTER_ID};
pub use layout::{layout_case, LayoutConfig, LayoutError, PointF, RadialLayout};
pub use output::GraphOutput;
pub use respond::{ChatSession, ResponseProvider, ScriptedResponder};
pub use view::{CaseView, CaseViewConfig, EntryForm, LoadingProgress};
