//
// Compile step: CaseData (nested surface tree) -> CaseGraph (adjacency arena)
//
// What this does:
// - Flattens top-level nodes and their nested children into one indexed
//   vector with parent/children links
// - Enforces global id uniqueness (the center id is reserved)
// - Checks every nested child's parentId against its container
// - Rejects top-level nodes that declare a parentId: edges come from
//   nesting only, so such a node has no place in the graph
// - Preserves input order: `order` is the pre-order traversal index
//
// Depth is limited to two levels (top-level node + children).

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::types::{CaseData, CaseNode, NodeCategory};
use super::CENTER_ID;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub nid: NodeId,
    pub id: String,
    pub category: NodeCategory,
    pub title: String,
    pub summary: String,
    pub reference: Option<String>,
    pub highlights: Vec<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Stable traversal order index.
    pub order: usize,
}

impl GraphNode {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("node with empty id")]
    EmptyId,
    #[error("duplicate node identifier: {0}")]
    DuplicateId(String),
    #[error("node '{id}' declares parent '{declared}' but is nested under '{container}'")]
    ParentMismatch {
        id: String,
        declared: String,
        container: String,
    },
    #[error("node '{id}' references unknown parent '{parent}'")]
    DanglingParent { id: String, parent: String },
    #[error("node '{id}' declares parent '{parent}' but is not nested under it")]
    NotNested { id: String, parent: String },
    #[error("node '{id}' would nest deeper than two levels")]
    TooDeep { id: String },
    #[error("node not found: {0}")]
    NodeNotFound(String),
}

/// A validated case: nodes in an arena, parent/child links by index.
#[derive(Debug, Clone, Serialize)]
pub struct CaseGraph {
    pub name: String,
    pub summary: String,
    nodes: Vec<GraphNode>,
    top_level: Vec<NodeId>,
    #[serde(skip)]
    by_id: HashMap<String, NodeId>,
}

impl CaseGraph {
    /// Nodes without a parent, in input order.
    pub fn top_level(&self) -> impl Iterator<Item = &GraphNode> {
        self.top_level.iter().map(|nid| &self.nodes[nid.0])
    }

    pub fn top_level_count(&self) -> usize {
        self.top_level.len()
    }

    pub fn children(&self, nid: NodeId) -> impl Iterator<Item = &GraphNode> {
        self.nodes[nid.0]
            .children
            .iter()
            .map(|c| &self.nodes[c.0])
    }

    pub fn get(&self, id: &str) -> Option<&GraphNode> {
        self.by_id.get(id).map(|nid| &self.nodes[nid.0])
    }

    /// Like [`CaseGraph::get`], but a missing id is an error.
    pub fn lookup(&self, id: &str) -> Result<&GraphNode, CaseError> {
        self.get(id)
            .ok_or_else(|| CaseError::NodeNotFound(id.to_string()))
    }

    pub fn node(&self, nid: NodeId) -> &GraphNode {
        &self.nodes[nid.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub fn compile(case: &CaseData) -> Result<CaseGraph, CaseError> {
    let mut ctx = CompileCtx::new();

    for node in &case.nodes {
        ctx.compile_top_level(node)?;
    }

    // Parents may be declared before they appear
    ctx.check_declared_parents()?;

    Ok(ctx.finish(case))
}

struct DeclaredParent {
    id: String,
    parent: String,
}

struct CompileCtx {
    nodes: Vec<GraphNode>,
    top_level: Vec<NodeId>,
    by_id: HashMap<String, NodeId>,
    declared_parents: Vec<DeclaredParent>,
    next_order: usize,
}

impl CompileCtx {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            top_level: Vec::new(),
            by_id: HashMap::new(),
            declared_parents: Vec::new(),
            next_order: 0,
        }
    }

    fn finish(self, case: &CaseData) -> CaseGraph {
        CaseGraph {
            name: case.name.clone(),
            summary: case.summary.clone(),
            nodes: self.nodes,
            top_level: self.top_level,
            by_id: self.by_id,
        }
    }

    fn alloc_order(&mut self) -> usize {
        let o = self.next_order;
        self.next_order += 1;
        o
    }

    fn new_node(&mut self, n: &CaseNode, parent: Option<NodeId>) -> Result<NodeId, CaseError> {
        if n.id.is_empty() {
            return Err(CaseError::EmptyId);
        }
        if n.id == CENTER_ID || self.by_id.contains_key(&n.id) {
            return Err(CaseError::DuplicateId(n.id.clone()));
        }

        let nid = NodeId(self.nodes.len());
        let order = self.alloc_order();
        self.nodes.push(GraphNode {
            nid,
            id: n.id.clone(),
            category: n.category,
            title: n.title.clone(),
            summary: n.summary.clone(),
            reference: n.reference.clone(),
            highlights: n.highlights.clone(),
            parent,
            children: Vec::new(),
            order,
        });
        self.by_id.insert(n.id.clone(), nid);
        Ok(nid)
    }

    fn compile_top_level(&mut self, n: &CaseNode) -> Result<(), CaseError> {
        let nid = self.new_node(n, None)?;
        self.top_level.push(nid);

        if let Some(parent) = &n.parent_id {
            self.declared_parents.push(DeclaredParent {
                id: n.id.clone(),
                parent: parent.clone(),
            });
        }

        for child in &n.children {
            self.compile_child(child, n, nid)?;
        }
        Ok(())
    }

    fn compile_child(&mut self, child: &CaseNode, container: &CaseNode, parent: NodeId) -> Result<(), CaseError> {
        if !child.children.is_empty() {
            return Err(CaseError::TooDeep { id: child.id.clone() });
        }
        if let Some(declared) = &child.parent_id {
            if *declared != container.id {
                return Err(CaseError::ParentMismatch {
                    id: child.id.clone(),
                    declared: declared.clone(),
                    container: container.id.clone(),
                });
            }
        }

        let nid = self.new_node(child, Some(parent))?;
        debug!(parent = %container.id, child = %child.id, "adding relationship");
        self.nodes[parent.0].children.push(nid);
        Ok(())
    }

    fn check_declared_parents(&self) -> Result<(), CaseError> {
        let Some(dp) = self.declared_parents.first() else {
            return Ok(());
        };
        let (id, parent) = (dp.id.clone(), dp.parent.clone());
        if parent == id || !self.by_id.contains_key(&parent) {
            return Err(CaseError::DanglingParent { id, parent });
        }
        Err(CaseError::NotNested { id, parent })
    }
}
