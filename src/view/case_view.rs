use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use super::config::CaseViewConfig;
use crate::case::{compile, demo_case, CaseData, CaseError, CaseGraph, GraphNode, NodeId};
use crate::layout::{layout_case, LayoutConfig, LayoutError, RadialLayout};
use crate::output::GraphOutput;
use crate::respond::{ChatMessage, ChatSession, ResponseProvider};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("no detail overlay is open")]
    NoOverlayOpen,
}

/// State of one case page: the validated graph, its layout, which node's
/// detail overlay is open, and one chat transcript per node asked about.
#[derive(Debug, Clone)]
pub struct CaseView {
    graph: CaseGraph,
    layout: RadialLayout,
    selected: Option<NodeId>,
    chats: HashMap<NodeId, ChatSession>,
}

impl CaseView {
    pub fn new(data: &CaseData, cfg: &LayoutConfig) -> Result<Self, ViewError> {
        let graph = compile(data)?;
        let layout = layout_case(&graph, cfg)?;
        debug!(case = %graph.name, nodes = graph.len(), "case view ready");
        Ok(Self {
            graph,
            layout,
            selected: None,
            chats: HashMap::new(),
        })
    }

    /// Case view over the built-in demo case.
    pub fn from_config(config: &CaseViewConfig, cfg: &LayoutConfig) -> Result<Self, ViewError> {
        Self::new(&demo_case(&config.name, config.database_enhanced), cfg)
    }

    pub fn graph(&self) -> &CaseGraph {
        &self.graph
    }

    pub fn layout(&self) -> &RadialLayout {
        &self.layout
    }

    /// Open the detail overlay for `id`, replacing any open one. An unknown
    /// id leaves the overlay as it was.
    pub fn open_details(&mut self, id: &str) -> Result<&GraphNode, CaseError> {
        let nid = match self.graph.lookup(id) {
            Ok(node) => node.nid,
            Err(e) => {
                warn!(id, "detail overlay requested for unknown node");
                return Err(e);
            }
        };
        self.selected = Some(nid);
        Ok(self.graph.node(nid))
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&GraphNode> {
        self.selected.map(|nid| self.graph.node(nid))
    }

    /// Ask a question in the open overlay's chat.
    pub fn ask<P: ResponseProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        input: &str,
    ) -> Result<Option<&ChatMessage>, ViewError> {
        let nid = self.selected.ok_or(ViewError::NoOverlayOpen)?;
        let category = self.graph.node(nid).category.as_str();
        let chat = self.chats.entry(nid).or_default();
        Ok(chat.send(provider, category, input))
    }

    /// Transcript for `id`, if a question has been asked about it.
    pub fn chat(&self, id: &str) -> Option<&ChatSession> {
        let node = self.graph.get(id)?;
        self.chats.get(&node.nid)
    }

    pub fn graph_output(&self) -> GraphOutput {
        GraphOutput::from_layout(&self.graph, &self.layout)
    }
}
