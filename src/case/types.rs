use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation category of a case node. Selects the widget node type and
/// the canned answers used by the scripted chat.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Events,
    People,
    Documents,
    Similar,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 4] = [
        NodeCategory::Events,
        NodeCategory::People,
        NodeCategory::Documents,
        NodeCategory::Similar,
    ];

    /// Canonical lower-case name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Events => "events",
            NodeCategory::People => "people",
            NodeCategory::Documents => "documents",
            NodeCategory::Similar => "similar",
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for NodeCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One artifact or entity of an investigation, as supplied by the case
/// builder. Nesting under `children` is one level deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseNode {
    pub id: String,
    #[serde(rename = "type")]
    pub category: NodeCategory,
    pub title: String,
    pub summary: String,
    /// Link to a supporting document (not checked for existence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Short "key facts" shown under the summary in the detail overlay
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CaseNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl CaseNode {
    pub fn new(
        id: impl Into<String>,
        category: NodeCategory,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            summary: summary.into(),
            reference: None,
            highlights: Vec::new(),
            children: Vec::new(),
            parent_id: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = highlights.into_iter().map(Into::into).collect();
        self
    }

    /// Nest `child` under this node, filling in its back-reference.
    pub fn with_child(mut self, mut child: CaseNode) -> Self {
        child.parent_id = Some(self.id.clone());
        self.children.push(child);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// One investigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseData {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub nodes: Vec<CaseNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_case() {
        let json = r#"{
            "name": "X",
            "summary": "S",
            "nodes": [
                {"id": "a", "type": "events", "title": "A", "summary": "sa", "reference": "/a.pdf"},
                {"id": "b", "type": "people", "title": "B", "summary": "sb",
                 "children": [{"id": "b1", "type": "documents", "title": "B1", "summary": "sb1", "parentId": "b"}]}
            ]
        }"#;
        let case: CaseData = serde_json::from_str(json).unwrap();

        assert_eq!(case.nodes.len(), 2);
        assert_eq!(case.nodes[0].reference.as_deref(), Some("/a.pdf"));
        assert_eq!(case.nodes[1].category, NodeCategory::People);
        assert_eq!(case.nodes[1].children[0].parent_id.as_deref(), Some("b"));
        assert!(case.nodes[0].children.is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id": "a", "type": "weather", "title": "A", "summary": "sa"}"#;
        assert!(serde_json::from_str::<CaseNode>(json).is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("people".parse::<NodeCategory>(), Ok(NodeCategory::People));
        assert_eq!(
            "People".parse::<NodeCategory>(),
            Err(UnknownCategory("People".to_string()))
        );
    }

    #[test]
    fn test_with_child_sets_parent_id() {
        let node = CaseNode::new("p", NodeCategory::Documents, "P", "")
            .with_child(CaseNode::new("c", NodeCategory::Documents, "C", ""));
        assert_eq!(node.children[0].parent_id.as_deref(), Some("p"));
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let node = CaseNode::new("c", NodeCategory::Similar, "C", "s").with_parent("p");
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"similar\""));
        assert!(json.contains("\"parentId\":\"p\""));
        assert!(!json.contains("children"));
    }
}
