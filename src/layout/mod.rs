// Radial layout for case graphs.
//
// Goals:
// - Deterministic: no randomness, same input gives bit-identical output
// - Center node fixed at the configured point
// - Top-level nodes evenly spaced on a circle, in input order
// - Children fanned outward around their parent, at most 90 degrees wide
//
// Submodules:
// - geometry: 2-D vector helpers
// - radial: the placement pass
//
// Output:
// - RadialLayout with positions keyed by node id plus the edge list.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

mod geometry;
mod radial;

pub use geometry::PointF;
pub use radial::layout_case;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutConfig {
    /// Position of the center node.
    pub center: PointF,
    /// Distance from the center to top-level nodes.
    pub radius: f64,
    /// Distance from a parent to its children.
    pub child_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: PointF::new(400.0, 300.0),
            radius: 350.0,
            child_radius: 250.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (which, value) in [("radius", self.radius), ("child_radius", self.child_radius)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::NonPositiveRadius { which, value });
            }
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(LayoutError::NonFiniteCenter);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{which} must be a positive finite number, got {value}")]
    NonPositiveRadius { which: &'static str, value: f64 },
    #[error("center must have finite coordinates")]
    NonFiniteCenter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: String,
    pub position: PointF,
    /// 0 for the center, 1 for top-level nodes, 2 for children.
    pub depth: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialLayout {
    /// Insertion order: center, top-level nodes, then children per parent.
    pub positions: IndexMap<String, PlacedNode>,
    pub edges: Vec<LayoutEdge>,
}

impl RadialLayout {
    pub fn position(&self, id: &str) -> Option<PointF> {
        self.positions.get(id).map(|p| p.position)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PlacedNode> {
        self.positions.values()
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
