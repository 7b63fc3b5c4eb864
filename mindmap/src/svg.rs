//! SVG serialization of a mind-map layout.
//!
//! Produces a self-contained document: white background, rounded node
//! boxes styled by level, and arrowed connector lines. The string needs no
//! external stylesheet, so it can be rasterized off-document as-is.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::fmt::Write as _;

use crate::layout::{Layout, PositionedNode, display_label};

const ROOT_FILL: &str = "#2563eb";
const ROOT_TEXT: &str = "#ffffff";
const BRANCH_FILL: &str = "#dbeafe";
const BRANCH_STROKE: &str = "#93c5fd";
const BRANCH_TEXT: &str = "#1e3a8a";
const LEAF_FILL: &str = "#f8fafc";
const LEAF_STROKE: &str = "#cbd5e1";
const LEAF_TEXT: &str = "#334155";
const EDGE_STROKE: &str = "#94a3b8";
const FONT_FAMILY: &str = "system-ui, sans-serif";
const CORNER_RADIUS: f64 = 10.0;

/// Serialize a layout to a standalone SVG document.
#[must_use]
pub fn render_svg(layout: &Layout) -> String {
    let width = layout.width;
    let height = layout.height;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = writeln!(out, "<defs>");
    let _ = writeln!(
        out,
        "  <marker id=\"arrow\" markerWidth=\"10\" markerHeight=\"7\" refX=\"10\" refY=\"3.5\" orient=\"auto\">\n    <polygon points=\"0 0, 10 3.5, 0 7\" fill=\"{EDGE_STROKE}\"/>\n  </marker>"
    );
    let _ = writeln!(out, "</defs>");
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#ffffff\"/>"
    );

    // Edges first so node boxes draw over the line ends.
    for edge in &layout.edges {
        let (Some(from), Some(to)) = (layout.node(&edge.from), layout.node(&edge.to)) else {
            continue;
        };
        let x1 = from.x + layout.config.node_w / 2.0 - layout.origin_x;
        let y1 = from.y - layout.origin_y;
        let x2 = to.x - layout.config.node_w / 2.0 - layout.origin_x;
        let y2 = to.y - layout.origin_y;
        let _ = writeln!(
            out,
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{EDGE_STROKE}\" stroke-width=\"1.5\" marker-end=\"url(#arrow)\"/>"
        );
    }

    for node in &layout.nodes {
        write_node(&mut out, layout, node);
    }

    let _ = writeln!(out, "</svg>");
    out
}

fn write_node(out: &mut String, layout: &Layout, node: &PositionedNode) {
    let config = &layout.config;
    let x = node.x - config.node_w / 2.0 - layout.origin_x;
    let y = node.y - config.node_h / 2.0 - layout.origin_y;
    let (fill, stroke, text_color, font_size) = match node.level {
        0 => (ROOT_FILL, ROOT_FILL, ROOT_TEXT, 14.0),
        1 => (BRANCH_FILL, BRANCH_STROKE, BRANCH_TEXT, 13.0),
        _ => (LEAF_FILL, LEAF_STROKE, LEAF_TEXT, 12.0),
    };
    let _ = writeln!(
        out,
        "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" rx=\"{CORNER_RADIUS}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1.5\"/>",
        w = config.node_w,
        h = config.node_h,
    );
    let label = display_label(&node.label, config.max_label_chars);
    let _ = writeln!(
        out,
        "<text x=\"{tx}\" y=\"{ty}\" font-family=\"{FONT_FAMILY}\" font-size=\"{font_size}\" fill=\"{text_color}\" text-anchor=\"middle\" dominant-baseline=\"central\">{text}</text>",
        tx = node.x - layout.origin_x,
        ty = node.y - layout.origin_y,
        text = escape_text(&label),
    );
}

/// Escape text for inclusion in SVG markup.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
