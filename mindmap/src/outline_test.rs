use super::*;
use crate::summary::{SummaryData, SummarySection};

fn key_point(id: &str, text: &str) -> KeyPoint {
    KeyPoint {
        id: id.to_owned(),
        text: text.to_owned(),
    }
}

// --- Root label resolution ---

#[test]
fn summary_title_wins() {
    let summary = SummaryData {
        title: Some("T".to_owned()),
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "Video Title", &[]);
    assert_eq!(root.label, "T");
}

#[test]
fn fallback_title_used_without_summary_title() {
    let root = build_outline(Some(&SummaryData::default()), "Video Title", &[]);
    assert_eq!(root.label, "Video Title");
}

#[test]
fn empty_summary_title_falls_through() {
    let summary = SummaryData {
        title: Some(String::new()),
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "Video Title", &[]);
    assert_eq!(root.label, "Video Title");
}

#[test]
fn default_label_when_no_titles_exist() {
    let root = build_outline(None, "", &[]);
    assert_eq!(root.label, DEFAULT_ROOT_LABEL);
    assert!(root.children.is_empty());
}

// --- Branch construction ---

#[test]
fn bullets_become_a_highlights_branch() {
    let summary = SummaryData {
        title: Some("T".to_owned()),
        bullets: vec!["a".to_owned(), "b".to_owned()],
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "", &[]);
    assert_eq!(root.label, "T");
    assert_eq!(root.children.len(), 1);
    let branch = &root.children[0];
    assert_eq!(branch.label, HIGHLIGHTS_LABEL);
    assert_eq!(branch.children.len(), 2);
    assert_eq!(branch.children[0].label, "a");
    assert_eq!(branch.children[1].label, "b");
}

#[test]
fn branches_keep_the_fixed_order() {
    let summary = SummaryData {
        title: None,
        paragraphs: vec!["p".to_owned()],
        bullets: vec!["b".to_owned()],
        sections: vec![SummarySection {
            heading: Some("Deep Dive".to_owned()),
            paragraphs: vec!["sp".to_owned()],
            bullets: vec!["sb".to_owned()],
        }],
    };
    let root = build_outline(Some(&summary), "V", &[key_point("1", "kp")]);
    let labels: Vec<&str> = root.children.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![OVERVIEW_LABEL, HIGHLIGHTS_LABEL, "Deep Dive", KEY_POINTS_LABEL]
    );
}

#[test]
fn section_paragraphs_precede_section_bullets() {
    let summary = SummaryData {
        sections: vec![SummarySection {
            heading: Some("S".to_owned()),
            paragraphs: vec!["p1".to_owned()],
            bullets: vec!["b1".to_owned()],
        }],
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "V", &[]);
    let section = &root.children[0];
    assert_eq!(section.children[0].label, "p1");
    assert_eq!(section.children[1].label, "b1");
}

#[test]
fn unnamed_sections_get_the_fallback_label() {
    let summary = SummaryData {
        sections: vec![
            SummarySection::default(),
            SummarySection {
                heading: Some(String::new()),
                ..SummarySection::default()
            },
        ],
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "V", &[]);
    assert_eq!(root.children[0].label, SECTION_LABEL);
    assert_eq!(root.children[1].label, SECTION_LABEL);
}

#[test]
fn empty_sections_still_appear_as_branches() {
    let summary = SummaryData {
        sections: vec![SummarySection {
            heading: Some("Bare".to_owned()),
            ..SummarySection::default()
        }],
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "V", &[]);
    assert_eq!(root.children.len(), 1);
    assert!(root.children[0].children.is_empty());
}

#[test]
fn key_points_alone_populate_the_tree() {
    let root = build_outline(None, "V", &[key_point("1", "x"), key_point("2", "y")]);
    assert_eq!(root.label, "V");
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].label, KEY_POINTS_LABEL);
    assert_eq!(root.children[0].children.len(), 2);
}

#[test]
fn no_sources_yield_a_childless_root() {
    let root = build_outline(None, "V", &[]);
    assert_eq!(root.label, "V");
    assert!(root.children.is_empty());
}

#[test]
fn outline_is_three_levels_at_most() {
    let summary = SummaryData {
        paragraphs: vec!["p".to_owned()],
        ..SummaryData::default()
    };
    let root = build_outline(Some(&summary), "V", &[]);
    for branch in &root.children {
        for leaf in &branch.children {
            assert!(leaf.children.is_empty());
        }
    }
}
