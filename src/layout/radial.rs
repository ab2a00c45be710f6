// Radial placement pass.
//
// 1. Center node at cfg.center
// 2. i-th top-level node at angle i * 2pi / N on the circle of cfg.radius
// 3. Children of each top-level node at cfg.child_radius from it:
//    - one child: straight outward along the center->parent direction
//    - k children: fanned around that direction, step min(pi/2, pi/k),
//      symmetric about it
// 4. Edges once every position exists: center->top-level, parent->child

use std::f64::consts::{FRAC_PI_2, PI};

use indexmap::IndexMap;
use tracing::debug;

use super::{LayoutConfig, LayoutEdge, LayoutError, PlacedNode, PointF, RadialLayout};
use crate::case::{CaseGraph, CENTER_ID};

pub fn layout_case(graph: &CaseGraph, cfg: &LayoutConfig) -> Result<RadialLayout, LayoutError> {
    cfg.validate()?;

    let mut positions: IndexMap<String, PlacedNode> = IndexMap::with_capacity(graph.len() + 1);
    positions.insert(
        CENTER_ID.to_string(),
        PlacedNode { id: CENTER_ID.to_string(), position: cfg.center, depth: 0 },
    );

    let n = graph.top_level_count();
    let mut parent_positions: Vec<PointF> = Vec::with_capacity(n);

    for (i, node) in graph.top_level().enumerate() {
        let angle = (i as f64 * (2.0 * PI)) / n as f64;
        let position = PointF::polar(cfg.center, cfg.radius, angle);
        debug!(id = %node.id, x = position.x, y = position.y, "placed top-level node");
        parent_positions.push(position);
        positions.insert(node.id.clone(), PlacedNode { id: node.id.clone(), position, depth: 1 });
    }

    for (parent, &parent_pos) in graph.top_level().zip(&parent_positions) {
        let children: Vec<_> = graph.children(parent.nid).collect();
        if children.is_empty() {
            continue;
        }

        // radius > 0, so the parent never coincides with the center
        let dir = (parent_pos - cfg.center).normalized();
        for (j, offset) in fan_offsets(dir, children.len(), cfg.child_radius).into_iter().enumerate() {
            let child = children[j];
            let position = parent_pos + offset;
            positions.insert(child.id.clone(), PlacedNode { id: child.id.clone(), position, depth: 2 });
        }
        debug!(parent = %parent.id, count = children.len(), "placed children");
    }

    let edges = build_edges(graph);
    Ok(RadialLayout { positions, edges })
}

/// Offsets from a parent for `k` children around the outward unit
/// direction `dir`, each of length `r`.
fn fan_offsets(dir: PointF, k: usize, r: f64) -> Vec<PointF> {
    if k == 1 {
        return vec![dir * r];
    }

    let spread = fan_step(k);
    let middle = (k - 1) as f64 / 2.0;
    (0..k)
        .map(|j| {
            let alpha = (j as f64 - middle) * spread;
            dir.rotated(alpha) * r
        })
        .collect()
}

/// Angle between neighbouring children in a fan of `k`.
fn fan_step(k: usize) -> f64 {
    FRAC_PI_2.min(PI / k as f64)
}

fn build_edges(graph: &CaseGraph) -> Vec<LayoutEdge> {
    let mut edges = Vec::with_capacity(graph.len());

    for node in graph.top_level() {
        edges.push(LayoutEdge {
            id: format!("{CENTER_ID}-to-{}", node.id),
            source: CENTER_ID.to_string(),
            target: node.id.clone(),
        });
    }

    for parent in graph.top_level() {
        for child in graph.children(parent.nid) {
            edges.push(LayoutEdge {
                id: format!("edge-{}-{}", parent.id, child.id),
                source: parent.id.clone(),
                target: child.id.clone(),
            });
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::case::{compile, CaseData, CaseNode, NodeCategory};

    const EPS: f64 = 1e-9;

    fn leaf(id: &str) -> CaseNode {
        CaseNode::new(id, NodeCategory::Documents, id, "")
    }

    fn with_children(id: &str, k: usize) -> CaseNode {
        (0..k).fold(leaf(id), |n, j| n.with_child(leaf(&format!("{id}{j}"))))
    }

    fn graph(nodes: Vec<CaseNode>) -> CaseGraph {
        compile(&CaseData { name: "X".to_string(), summary: "S".to_string(), nodes }).unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let g = graph(vec![
            CaseNode::new("a", NodeCategory::Events, "A", "sa"),
            CaseNode::new("b", NodeCategory::People, "B", "sb")
                .with_child(CaseNode::new("b1", NodeCategory::Documents, "B1", "sb1")),
        ]);
        let cfg = LayoutConfig {
            center: PointF::new(400.0, 300.0),
            radius: 350.0,
            child_radius: 250.0,
        };
        let layout = layout_case(&g, &cfg).unwrap();

        assert_abs_diff_eq!(layout.position("center").unwrap(), PointF::new(400.0, 300.0), epsilon = EPS);
        assert_abs_diff_eq!(layout.position("a").unwrap(), PointF::new(750.0, 300.0), epsilon = EPS);
        assert_abs_diff_eq!(layout.position("b").unwrap(), PointF::new(50.0, 300.0), epsilon = EPS);
        assert_abs_diff_eq!(layout.position("b1").unwrap(), PointF::new(-200.0, 300.0), epsilon = EPS);

        let pairs: Vec<(&str, &str)> = layout
            .edges()
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("center", "a"), ("center", "b"), ("b", "b1")]);
        assert_eq!(layout.edges()[2].id, "edge-b-b1");
        assert_eq!(layout.edges()[0].id, "center-to-a");
    }

    #[test]
    fn test_empty_case_has_only_center() {
        let layout = layout_case(&graph(vec![]), &LayoutConfig::default()).unwrap();
        assert_eq!(layout.len(), 1);
        assert!(layout.edges().is_empty());
        assert_abs_diff_eq!(layout.position(CENTER_ID).unwrap(), PointF::new(400.0, 300.0), epsilon = EPS);
    }

    #[test]
    fn test_counts_match_structure() {
        let g = graph(vec![leaf("a"), with_children("b", 3), leaf("c"), with_children("d", 1)]);
        let layout = layout_case(&g, &LayoutConfig::default()).unwrap();

        // center + 4 top-level + 4 children
        assert_eq!(layout.len(), 9);
        assert_eq!(layout.edges().len(), 4 + 4);
        let center_edges = layout.edges().iter().filter(|e| e.source == CENTER_ID).count();
        assert_eq!(center_edges, 4);
    }

    #[test]
    fn test_top_level_evenly_spaced() {
        let cfg = LayoutConfig::default();
        let g = graph((0..5).map(|i| leaf(&format!("n{i}"))).collect());
        let layout = layout_case(&g, &cfg).unwrap();

        for i in 0..5 {
            let p = layout.position(&format!("n{i}")).unwrap();
            assert_abs_diff_eq!(p.distance(&cfg.center), cfg.radius, epsilon = EPS);

            let expected = i as f64 * 2.0 * PI / 5.0;
            let actual = (p - cfg.center).angle().rem_euclid(2.0 * PI);
            let diff = (actual - expected).abs();
            assert!(diff < EPS || (diff - 2.0 * PI).abs() < EPS, "node {i}: {actual} vs {expected}");
        }
    }

    #[test]
    fn test_single_child_points_outward() {
        let cfg = LayoutConfig::default();
        let g = graph(vec![leaf("a"), leaf("b"), with_children("c", 1)]);
        let layout = layout_case(&g, &cfg).unwrap();

        let parent = layout.position("c").unwrap();
        let child = layout.position("c0").unwrap();
        assert_abs_diff_eq!(child.distance(&parent), cfg.child_radius, epsilon = EPS);

        let dir = (parent - cfg.center).normalized();
        let off = (child - parent).normalized();
        assert_abs_diff_eq!(off, dir, epsilon = EPS);
    }

    #[test]
    fn test_fan_within_bounds() {
        let cfg = LayoutConfig::default();
        for k in 2..=9 {
            let g = graph(vec![leaf("a"), with_children("p", k)]);
            let layout = layout_case(&g, &cfg).unwrap();

            let parent = layout.position("p").unwrap();
            let dir = (parent - cfg.center).normalized();
            let mut angles = Vec::new();
            for j in 0..k {
                let child = layout.position(&format!("p{j}")).unwrap();
                assert_abs_diff_eq!(child.distance(&parent), cfg.child_radius, epsilon = EPS);
                let off = (child - parent).normalized();
                // signed angle from dir to off
                let cross = dir.x * off.y - dir.y * off.x;
                let dot = dir.x * off.x + dir.y * off.y;
                angles.push(cross.atan2(dot));
            }

            let max = angles.iter().cloned().fold(f64::MIN, f64::max);
            let min = angles.iter().cloned().fold(f64::MAX, f64::min);
            let bound = fan_step(k) * (k - 1) as f64;
            assert!(max - min <= bound + EPS, "k={k}: spread {} > {bound}", max - min);
            // symmetric about the outward direction
            assert_abs_diff_eq!(max + min, 0.0, epsilon = EPS);
        }
    }

    #[test]
    fn test_fan_step_caps_at_quarter_turn() {
        assert_eq!(fan_step(2), FRAC_PI_2);
        assert_abs_diff_eq!(fan_step(4), PI / 4.0, epsilon = EPS);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let g = graph(vec![leaf("a"), with_children("b", 4), with_children("c", 2)]);
        let cfg = LayoutConfig::default();
        let first = layout_case(&g, &cfg).unwrap();
        let second = layout_case(&g, &cfg).unwrap();

        assert_eq!(first.edges, second.edges);
        for (a, b) in first.nodes().zip(second.nodes()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
            assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = LayoutConfig { radius: -1.0, ..LayoutConfig::default() };
        assert!(layout_case(&graph(vec![leaf("a")]), &cfg).is_err());
    }

    #[test]
    fn test_depths() {
        let g = graph(vec![with_children("a", 2)]);
        let layout = layout_case(&g, &LayoutConfig::default()).unwrap();
        let depths: Vec<(&str, u8)> = layout.nodes().map(|n| (n.id.as_str(), n.depth)).collect();
        assert_eq!(depths, vec![("center", 0), ("a", 1), ("a0", 2), ("a1", 2)]);
    }
}
