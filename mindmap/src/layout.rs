//! Layout engine: converts an outline tree into positioned nodes and edges.
//!
//! DESIGN
//! ======
//! The outline is flattened into an arena-style list of nodes carrying
//! parent ids instead of nested pointers; edges are derived by a lookup
//! pass over that list. Output is plain geometric data so any rendering
//! adapter (SVG, canvas) can draw it.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::outline::OutlineNode;

/// Id of the root node in every layout.
pub const ROOT_ID: &str = "root";

/// Level-2 siblings pack tighter than level-1 siblings by this factor.
const LEAF_SPREAD_DIVISOR: f64 = 1.2;

/// Geometry knobs for [`layout`]. [`LayoutConfig::default`] carries the
/// values from [`crate::consts`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Node box width.
    pub node_w: f64,
    /// Node box height.
    pub node_h: f64,
    /// Horizontal gap between levels.
    pub level_gap: f64,
    /// Vertical gap between adjacent level-1 siblings.
    pub sibling_gap: f64,
    /// Outer margin around the content.
    pub padding: f64,
    /// Canvas width floor.
    pub min_canvas_w: f64,
    /// Canvas height floor.
    pub min_canvas_h: f64,
    /// Character threshold for display-label truncation.
    pub max_label_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_w: consts::NODE_W,
            node_h: consts::NODE_H,
            level_gap: consts::LEVEL_GAP,
            sibling_gap: consts::SIBLING_GAP,
            padding: consts::PADDING,
            min_canvas_w: consts::MIN_CANVAS_W,
            min_canvas_h: consts::MIN_CANVAS_H,
            max_label_chars: consts::MAX_LABEL_CHARS,
        }
    }
}

/// A laid-out node. `x`/`y` are the box center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    /// Unique within one layout invocation.
    pub id: String,
    /// Full label text; display truncation never mutates this.
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// 0 = root, 1 = branch, 2 = leaf.
    pub level: u8,
    /// Absent only on the root.
    pub parent_id: Option<String>,
}

/// A parent→child connector, by node id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// The laid-out graph plus its canvas box.
///
/// `origin_x`/`origin_y` are the top-left corner of the canvas in node
/// coordinates; renderers translate by their negation. `width`/`height`
/// already include padding and the minimum-canvas floor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    /// The geometry this layout was computed with, kept so renderers draw
    /// boxes at the same size the spacing assumed.
    pub config: LayoutConfig,
}

impl Layout {
    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Lay out an outline as a left-to-right tree.
///
/// The root sits one gap in from the left edge, vertically centered on the
/// span of its branches. Branches stack top to bottom at `sibling_gap`
/// spacing; each branch's leaves center on the branch and pack slightly
/// tighter. A childless root still produces a valid single-node layout.
#[must_use]
pub fn layout(outline: &OutlineNode, config: &LayoutConfig) -> Layout {
    let mut nodes = Vec::new();

    let branch_count = outline.children.len();
    let root_x = config.padding + config.node_w / 2.0;
    #[allow(clippy::cast_precision_loss)]
    let root_y = (config.padding + (branch_count as f64 - 1.0) * config.sibling_gap / 2.0)
        .max(config.padding);
    nodes.push(PositionedNode {
        id: ROOT_ID.to_owned(),
        label: outline.label.clone(),
        x: root_x,
        y: root_y,
        level: 0,
        parent_id: None,
    });

    for (index, branch) in outline.children.iter().enumerate() {
        let branch_id = format!("b{index}");
        let branch_x = root_x + config.level_gap;
        #[allow(clippy::cast_precision_loss)]
        let branch_y = config.padding + index as f64 * config.sibling_gap;
        nodes.push(PositionedNode {
            id: branch_id.clone(),
            label: branch.label.clone(),
            x: branch_x,
            y: branch_y,
            level: 1,
            parent_id: Some(ROOT_ID.to_owned()),
        });

        let leaf_count = branch.children.len();
        let spread = config.sibling_gap / LEAF_SPREAD_DIVISOR;
        for (leaf_index, leaf) in branch.children.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let offset = (leaf_index as f64 - (leaf_count as f64 - 1.0) / 2.0) * spread;
            nodes.push(PositionedNode {
                id: format!("{branch_id}-l{leaf_index}"),
                label: leaf.label.clone(),
                x: branch_x + config.level_gap,
                y: branch_y + offset,
                level: 2,
                parent_id: Some(branch_id.clone()),
            });
        }
    }

    let edges = derive_edges(&nodes);
    let (origin_x, origin_y, width, height) = bounding_box(&nodes, config);
    Layout {
        nodes,
        edges,
        origin_x,
        origin_y,
        width,
        height,
        config: *config,
    }
}

/// Truncate a label for display. Returns the label unchanged when it fits.
#[must_use]
pub fn display_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_owned()
    } else {
        let truncated: String = label.chars().take(max_chars).collect();
        format!("{truncated}…")
    }
}

/// One edge per non-root node, from its parent.
fn derive_edges(nodes: &[PositionedNode]) -> Vec<Edge> {
    nodes
        .iter()
        .filter_map(|node| {
            node.parent_id.as_ref().map(|parent| Edge {
                from: parent.clone(),
                to: node.id.clone(),
            })
        })
        .collect()
}

/// Tight box over all node extents plus padding, floored at the minimum
/// canvas size. Returns `(origin_x, origin_y, width, height)`.
fn bounding_box(nodes: &[PositionedNode], config: &LayoutConfig) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for node in nodes {
        min_x = min_x.min(node.x - config.node_w / 2.0);
        max_x = max_x.max(node.x + config.node_w / 2.0);
        min_y = min_y.min(node.y - config.node_h / 2.0);
        max_y = max_y.max(node.y + config.node_h / 2.0);
    }
    let width = ((max_x - min_x) + 2.0 * config.padding).max(config.min_canvas_w);
    let height = ((max_y - min_y) + 2.0 * config.padding).max(config.min_canvas_h);
    (min_x - config.padding, min_y - config.padding, width, height)
}
