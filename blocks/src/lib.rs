//! Text formatting engine for AI-generated study content.
//!
//! The summary, key-point, and chat endpoints return loosely structured
//! prose: an optional preamble line, blank-line separated sections, numbered
//! and bulleted list items, and `**bold**` markers. This crate classifies
//! that text into typed blocks once, so rendering code can do an exhaustive
//! match instead of re-parsing strings.
//!
//! This crate is UI-framework agnostic so client crates can consume it
//! directly for rendering.

use serde::{Deserialize, Serialize};

/// Heading labels recognized at the start of a section, with or without a
/// trailing colon, case-insensitively.
const HEADING_LABELS: [&str; 4] = ["Key Points", "Main Takeaways", "Summary", "Highlights"];

/// Glyph rendered for every bullet item, regardless of the source marker
/// (`*`, `-`, or `•`).
pub const BULLET_GLYPH: &str = "•";

/// An inline run of text inside a block.
///
/// Bold runs render as standalone block-level lines rather than inline
/// emphasis, so a paragraph with interior bold becomes a stack of lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Ordinary text, emitted verbatim.
    PlainText(String),
    /// Text that was wrapped in `**` markers, without the markers.
    BoldBlock(String),
}

impl InlineSpan {
    /// The span's text content, without any markers.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(text) | Self::BoldBlock(text) => text,
        }
    }
}

/// A classified block of formatted text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormattedBlock {
    /// A recognized section heading, colon stripped.
    Heading { text: String },
    /// A numbered list item. `marker` keeps the source token (e.g. `"3."`).
    NumberedItem { marker: String, content: Vec<InlineSpan> },
    /// A bulleted list item; renderers draw [`BULLET_GLYPH`] before it.
    BulletItem { content: Vec<InlineSpan> },
    /// Anything that matched no other rule.
    Paragraph { content: Vec<InlineSpan> },
}

/// Classify a block of AI-generated text into renderable blocks.
///
/// Line endings are normalized and outer whitespace trimmed first; blank or
/// empty input yields an empty list. Sections are separated by blank lines
/// and classified independently, in input order: heading, numbered item,
/// bullet item, then paragraph as the fallback.
#[must_use]
pub fn format_text(raw: &str) -> Vec<FormattedBlock> {
    let normalized = raw.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    split_sections(strip_preamble(trimmed))
        .iter()
        .map(|section| classify_section(section))
        .collect()
}

/// Split text into plain and `**bold**` spans, preserving order.
///
/// Bold pairs never span lines. A `**` with no closing pair on the same
/// line stays plain text, as does everything between and around pairs.
#[must_use]
pub fn format_bold_text(raw: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = raw;
    while let Some((open, close)) = find_bold_pair(rest) {
        if open > 0 {
            spans.push(InlineSpan::PlainText(rest[..open].to_owned()));
        }
        spans.push(InlineSpan::BoldBlock(rest[open + 2..close].to_owned()));
        rest = &rest[close + 2..];
    }
    if !rest.is_empty() {
        spans.push(InlineSpan::PlainText(rest.to_owned()));
    }
    spans
}

/// Strip the "Here are the key points ... :" preamble, through the first
/// colon and any whitespace after it. Without a colon nothing is stripped.
fn strip_preamble(text: &str) -> &str {
    const PREAMBLE: &str = "here are the key points";
    let has_preamble = text
        .get(..PREAMBLE.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(PREAMBLE));
    if !has_preamble {
        return text;
    }
    match text.find(':') {
        Some(colon) => text[colon + 1..].trim_start(),
        None => text,
    }
}

/// Split text into sections on runs of whitespace-only lines.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current.join("\n"));
    }
    sections
}

fn classify_section(section: &str) -> FormattedBlock {
    let trimmed = section.trim();
    if let Some(text) = heading_text(trimmed) {
        return FormattedBlock::Heading { text };
    }
    if let Some((marker, content)) = split_numbered(trimmed) {
        return FormattedBlock::NumberedItem {
            marker,
            content: format_bold_text(content),
        };
    }
    if let Some(content) = bullet_content(trimmed) {
        return FormattedBlock::BulletItem {
            content: format_bold_text(content),
        };
    }
    FormattedBlock::Paragraph {
        content: format_bold_text(trimmed),
    }
}

/// Heading text (first colon removed) if the section starts with one of the
/// recognized labels.
fn heading_text(section: &str) -> Option<String> {
    let is_heading = HEADING_LABELS.iter().any(|label| {
        section
            .get(..label.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(label))
    });
    is_heading.then(|| section.replacen(':', "", 1))
}

/// Marker token and remaining content if the section starts with digits
/// followed by a period.
fn split_numbered(section: &str) -> Option<(String, &str)> {
    let digits = section.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &section[digits..];
    if !rest.starts_with('.') {
        return None;
    }
    let marker = section[..=digits].to_owned();
    Some((marker, section[digits + 1..].trim_start()))
}

/// Content after the bullet marker if the section starts with `*`, `-`, or
/// `•` followed by whitespace.
fn bullet_content(section: &str) -> Option<&str> {
    let rest = ['*', '-', '•']
        .iter()
        .find_map(|&glyph| section.strip_prefix(glyph))?;
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

/// Byte offsets of the opening and closing `**` of the leftmost bold pair,
/// or `None` when no pair closes on the line it opened on.
fn find_bold_pair(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(found) = text[from..].find("**") {
        let open = from + found;
        let content_start = open + 2;
        let line_end = text[content_start..]
            .find('\n')
            .map_or(text.len(), |nl| content_start + nl);
        if let Some(close) = text[content_start..line_end].find("**") {
            return Some((open, content_start + close));
        }
        from = open + 1;
    }
    None
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
