//! Output types for the graph widget.
//!
//! These structs are serialized to JSON and handed to the frontend, which
//! renders nodes and edges and owns dragging, pan and zoom.

use serde::Serialize;

use crate::case::{CaseGraph, GraphNode, CENTER_ID};
use crate::layout::{PointF, RadialLayout};
use crate::respond::{ChatMessage, ChatSession};
use crate::view::{LoadingProgress, StepState};

/// Widget node type of the center node. Other nodes use their category.
pub const CENTER_KIND: &str = "center";

/// A positioned node ready for the widget
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: String,
    /// "center" or the node category
    pub kind: String,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    pub position: PointF,
    /// The center stays put; everything else can be dragged
    pub draggable: bool,
}

/// An edge between two nodes
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Error information shown instead of the graph
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// Which stage failed: "input", "case", "layout", "config"
    pub kind: String,
    pub message: String,
}

/// The combined output sent to the frontend
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl GraphOutput {
    pub fn from_layout(graph: &CaseGraph, layout: &RadialLayout) -> Self {
        let nodes = layout
            .nodes()
            .filter_map(|placed| {
                if placed.id == CENTER_ID {
                    return Some(NodeOutput {
                        id: CENTER_ID.to_string(),
                        kind: CENTER_KIND.to_string(),
                        label: graph.name.clone(),
                        description: graph.summary.clone(),
                        reference: None,
                        highlights: Vec::new(),
                        position: placed.position,
                        draggable: false,
                    });
                }
                let node = graph.get(&placed.id)?;
                Some(NodeOutput {
                    id: node.id.clone(),
                    kind: node.category.as_str().to_string(),
                    label: node.title.clone(),
                    description: node.summary.clone(),
                    reference: node.reference.clone(),
                    highlights: node.highlights.clone(),
                    position: placed.position,
                    draggable: true,
                })
            })
            .collect();

        let edges = layout
            .edges()
            .iter()
            .map(|e| EdgeOutput {
                id: e.id.clone(),
                source: e.source.clone(),
                target: e.target.clone(),
            })
            .collect();

        Self {
            name: graph.name.clone(),
            summary: graph.summary.clone(),
            nodes,
            edges,
            error: None,
        }
    }

    pub fn error(kind: &str, message: impl Into<String>) -> Self {
        Self {
            error: Some(ErrorInfo {
                kind: kind.to_string(),
                message: message.into(),
            }),
            ..Self::default()
        }
    }
}

/// The open detail overlay: node content plus its chat transcript
#[derive(Debug, Clone, Serialize)]
pub struct DetailOutput {
    pub id: String,
    pub kind: String,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    pub messages: Vec<ChatMessage>,
}

impl DetailOutput {
    /// A node nobody has asked about yet shows only the greeting.
    pub fn new(node: &GraphNode, chat: Option<&ChatSession>) -> Self {
        let messages = match chat {
            Some(chat) => chat.messages().to_vec(),
            None => ChatSession::new().messages().to_vec(),
        };
        Self {
            id: node.id.clone(),
            kind: node.category.as_str().to_string(),
            label: node.title.clone(),
            description: node.summary.clone(),
            reference: node.reference.clone(),
            highlights: node.highlights.clone(),
            messages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutput {
    pub label: &'static str,
    pub state: StepState,
}

/// Loading-screen snapshot for one timer tick
#[derive(Debug, Clone, Serialize)]
pub struct LoadingOutput {
    pub progress: u8,
    pub current_step: usize,
    pub complete: bool,
    pub steps: Vec<StepOutput>,
}

impl From<&LoadingProgress> for LoadingOutput {
    fn from(p: &LoadingProgress) -> Self {
        Self {
            progress: p.progress(),
            current_step: p.current_step(),
            complete: p.is_complete(),
            steps: p.steps().map(|(label, state)| StepOutput { label, state }).collect(),
        }
    }
}
