//! Default geometry constants for the mind-map layout.
//!
//! These are presentation tuning values, not derived quantities. They feed
//! [`crate::layout::LayoutConfig::default`]; callers wanting different
//! geometry build their own config rather than editing these.

// ── Node geometry (logical pixels) ──────────────────────────────

/// Node box width.
pub const NODE_W: f64 = 160.0;

/// Node box height.
pub const NODE_H: f64 = 48.0;

// ── Spacing (logical pixels) ────────────────────────────────────

/// Horizontal gap between node levels.
pub const LEVEL_GAP: f64 = 220.0;

/// Vertical gap between adjacent siblings at level 1. Level-2 siblings are
/// packed slightly tighter (this value divided by 1.2).
pub const SIBLING_GAP: f64 = 90.0;

/// Outer margin between the tight content box and the canvas edge.
pub const PADDING: f64 = 40.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Minimum canvas width, so tiny trees still render in a usable area.
pub const MIN_CANVAS_W: f64 = 900.0;

/// Minimum canvas height.
pub const MIN_CANVAS_H: f64 = 520.0;

// ── Labels ──────────────────────────────────────────────────────

/// Display labels longer than this many characters are truncated with a
/// trailing ellipsis. Node data is never mutated.
pub const MAX_LABEL_CHARS: usize = 60;
