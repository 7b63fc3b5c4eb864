//! Outline construction: summary data and key points to a label tree.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use serde::{Deserialize, Serialize};

use crate::summary::{KeyPoint, SummaryData};

/// Root label used when neither the summary nor the video supplies a title.
pub const DEFAULT_ROOT_LABEL: &str = "Mind Map";

/// Branch label for summary paragraphs.
pub const OVERVIEW_LABEL: &str = "Overview";

/// Branch label for summary bullets.
pub const HIGHLIGHTS_LABEL: &str = "Highlights";

/// Branch label for the key-point list.
pub const KEY_POINTS_LABEL: &str = "Key Points";

/// Fallback label for a summary section without a heading.
pub const SECTION_LABEL: &str = "Section";

/// A node in the outline tree.
///
/// The tree is always exactly three levels deep: root, branches, leaves.
/// Deeper nesting is not modeled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub label: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// A childless node.
    #[must_use]
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }
}

/// Build the outline for a video's mind map.
///
/// Branches appear in a fixed order, each only when its source data exists:
/// Overview (summary paragraphs), Highlights (summary bullets), one branch
/// per summary section (leaves are that section's paragraphs then bullets),
/// and Key Points. A prose-only summary contributes no branches; pass
/// `None` for it. The root label falls back from the summary title to
/// `fallback_title` to [`DEFAULT_ROOT_LABEL`], skipping empty strings.
#[must_use]
pub fn build_outline(
    summary: Option<&SummaryData>,
    fallback_title: &str,
    key_points: &[KeyPoint],
) -> OutlineNode {
    let mut root = OutlineNode {
        label: root_label(summary, fallback_title),
        children: Vec::new(),
    };

    if let Some(summary) = summary {
        if !summary.paragraphs.is_empty() {
            root.children
                .push(branch(OVERVIEW_LABEL, &summary.paragraphs));
        }
        if !summary.bullets.is_empty() {
            root.children
                .push(branch(HIGHLIGHTS_LABEL, &summary.bullets));
        }
        for section in &summary.sections {
            let label = section
                .heading
                .as_deref()
                .filter(|heading| !heading.is_empty())
                .unwrap_or(SECTION_LABEL);
            let mut leaves: Vec<OutlineNode> = Vec::new();
            leaves.extend(section.paragraphs.iter().map(OutlineNode::leaf));
            leaves.extend(section.bullets.iter().map(OutlineNode::leaf));
            root.children.push(OutlineNode {
                label: label.to_owned(),
                children: leaves,
            });
        }
    }

    if !key_points.is_empty() {
        root.children.push(OutlineNode {
            label: KEY_POINTS_LABEL.to_owned(),
            children: key_points
                .iter()
                .map(|point| OutlineNode::leaf(point.text.clone()))
                .collect(),
        });
    }

    root
}

fn root_label(summary: Option<&SummaryData>, fallback_title: &str) -> String {
    summary
        .and_then(|data| data.title.as_deref())
        .filter(|title| !title.is_empty())
        .unwrap_or(if fallback_title.is_empty() {
            DEFAULT_ROOT_LABEL
        } else {
            fallback_title
        })
        .to_owned()
}

fn branch(label: &str, leaves: &[String]) -> OutlineNode {
    OutlineNode {
        label: label.to_owned(),
        children: leaves.iter().map(OutlineNode::leaf).collect(),
    }
}
