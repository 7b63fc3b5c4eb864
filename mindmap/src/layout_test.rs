#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn outline_with_branches(count: usize) -> OutlineNode {
    OutlineNode {
        label: "Root".to_owned(),
        children: (0..count)
            .map(|i| OutlineNode::leaf(format!("Branch {i}")))
            .collect(),
    }
}

fn branch_with_leaves(leaf_count: usize) -> OutlineNode {
    OutlineNode {
        label: "Root".to_owned(),
        children: vec![OutlineNode {
            label: "Branch".to_owned(),
            children: (0..leaf_count)
                .map(|i| OutlineNode::leaf(format!("Leaf {i}")))
                .collect(),
        }],
    }
}

// --- Root placement ---

#[test]
fn root_sits_one_padding_in_from_the_left() {
    let laid = layout(&outline_with_branches(3), &LayoutConfig::default());
    let root = laid.node(ROOT_ID).unwrap();
    assert_eq!(root.x, 40.0 + 160.0 / 2.0);
    assert_eq!(root.level, 0);
    assert_eq!(root.parent_id, None);
}

#[test]
fn root_centers_on_the_branch_span() {
    let laid = layout(&outline_with_branches(3), &LayoutConfig::default());
    let root = laid.node(ROOT_ID).unwrap();
    assert_eq!(root.y, 40.0 + (2.0 * 90.0) / 2.0);
}

#[test]
fn childless_root_is_clamped_to_padding() {
    let laid = layout(&outline_with_branches(0), &LayoutConfig::default());
    let root = laid.node(ROOT_ID).unwrap();
    assert_eq!(root.y, 40.0);
    assert_eq!(laid.nodes.len(), 1);
    assert!(laid.edges.is_empty());
}

#[test]
fn single_branch_root_aligns_with_it() {
    let laid = layout(&outline_with_branches(1), &LayoutConfig::default());
    let root = laid.node(ROOT_ID).unwrap();
    let branch = laid.node("b0").unwrap();
    assert_eq!(root.y, 40.0);
    assert_eq!(branch.y, 40.0);
}

// --- Branch stacking ---

#[test]
fn branches_share_x_and_stack_at_fixed_spacing() {
    let laid = layout(&outline_with_branches(4), &LayoutConfig::default());
    assert_eq!(laid.nodes.len(), 5);
    assert_eq!(laid.edges.len(), 4);

    let branches: Vec<&PositionedNode> =
        laid.nodes.iter().filter(|n| n.level == 1).collect();
    assert_eq!(branches.len(), 4);
    let expected_x = laid.node(ROOT_ID).unwrap().x + 220.0;
    for (index, branch) in branches.iter().enumerate() {
        assert_eq!(branch.x, expected_x);
        #[allow(clippy::cast_precision_loss)]
        let expected_y = 40.0 + index as f64 * 90.0;
        assert_eq!(branch.y, expected_y);
    }
}

// --- Leaf spread ---

#[test]
fn leaves_center_on_their_parent() {
    let laid = layout(&branch_with_leaves(2), &LayoutConfig::default());
    let branch = laid.node("b0").unwrap();
    let first = laid.node("b0-l0").unwrap();
    let second = laid.node("b0-l1").unwrap();
    let spread = 90.0 / 1.2;

    assert_eq!(first.x, branch.x + 220.0);
    assert!(approx_eq(first.y, branch.y - spread / 2.0));
    assert!(approx_eq(second.y, branch.y + spread / 2.0));
    assert!(approx_eq((first.y + second.y) / 2.0, branch.y));
}

#[test]
fn odd_leaf_counts_put_the_middle_leaf_on_the_parent() {
    let laid = layout(&branch_with_leaves(3), &LayoutConfig::default());
    let branch = laid.node("b0").unwrap();
    let middle = laid.node("b0-l1").unwrap();
    assert_eq!(middle.y, branch.y);
}

// --- Tree structure ---

#[test]
fn levels_increase_by_one_along_parents() {
    let laid = layout(&branch_with_leaves(3), &LayoutConfig::default());
    for node in &laid.nodes {
        match &node.parent_id {
            None => assert_eq!(node.level, 0),
            Some(parent_id) => {
                let parent = laid.node(parent_id).unwrap();
                assert_eq!(node.level, parent.level + 1);
            }
        }
    }
}

#[test]
fn edges_run_from_parent_to_child() {
    let laid = layout(&branch_with_leaves(2), &LayoutConfig::default());
    assert_eq!(laid.edges.len(), 3);
    for edge in &laid.edges {
        let child = laid.node(&edge.to).unwrap();
        assert_eq!(child.parent_id.as_deref(), Some(edge.from.as_str()));
    }
}

#[test]
fn node_ids_are_unique() {
    let outline = OutlineNode {
        label: "Root".to_owned(),
        children: vec![branch_with_leaves(2).children.remove(0), {
            OutlineNode {
                label: "Other".to_owned(),
                children: vec![OutlineNode::leaf("x")],
            }
        }],
    };
    let laid = layout(&outline, &LayoutConfig::default());
    let ids: HashSet<&str> = laid.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), laid.nodes.len());
}

// --- Canvas box ---

#[test]
fn minimum_canvas_size_is_enforced() {
    let laid = layout(&outline_with_branches(0), &LayoutConfig::default());
    assert_eq!(laid.width, 900.0);
    assert_eq!(laid.height, 520.0);
}

#[test]
fn tall_trees_grow_past_the_floor() {
    let laid = layout(&outline_with_branches(8), &LayoutConfig::default());
    // Branch centers span 40..=670; boxes add 24 above and below.
    assert_eq!(laid.height, (694.0 - 16.0) + 80.0);
    assert_eq!(laid.width, 900.0);
}

#[test]
fn origin_keeps_one_padding_above_the_topmost_node() {
    let laid = layout(&outline_with_branches(2), &LayoutConfig::default());
    // Topmost extent is the first branch's box top.
    assert_eq!(laid.origin_y, (40.0 - 24.0) - 40.0);
    assert_eq!(laid.origin_x, 0.0);
}

#[test]
fn config_overrides_change_the_geometry() {
    let config = LayoutConfig {
        node_w: 100.0,
        node_h: 40.0,
        level_gap: 150.0,
        sibling_gap: 60.0,
        padding: 10.0,
        min_canvas_w: 300.0,
        min_canvas_h: 200.0,
        max_label_chars: 10,
    };
    let laid = layout(&outline_with_branches(1), &config);
    let root = laid.node(ROOT_ID).unwrap();
    let branch = laid.node("b0").unwrap();
    assert_eq!(root.x, 10.0 + 50.0);
    assert_eq!(branch.x, root.x + 150.0);
    assert_eq!(laid.config, config);
}

// --- Display labels ---

#[test]
fn short_labels_pass_through() {
    let label = "a".repeat(60);
    assert_eq!(display_label(&label, 60), label);
}

#[test]
fn long_labels_truncate_with_an_ellipsis() {
    let label = "a".repeat(61);
    let shown = display_label(&label, 60);
    assert_eq!(shown.chars().count(), 61);
    assert!(shown.ends_with('…'));
    assert!(shown.starts_with(&"a".repeat(60)));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let label = "у".repeat(61);
    let shown = display_label(&label, 60);
    assert_eq!(shown.chars().count(), 61);
    assert!(shown.ends_with('…'));
}

#[test]
fn layout_never_mutates_label_data() {
    let long = "a".repeat(100);
    let outline = OutlineNode {
        label: long.clone(),
        children: Vec::new(),
    };
    let laid = layout(&outline, &LayoutConfig::default());
    assert_eq!(laid.node(ROOT_ID).unwrap().label, long);
}
