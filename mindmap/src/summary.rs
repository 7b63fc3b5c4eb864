//! Wire types for summaries and key points.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: a summary may arrive as plain prose or
//! as a structured document, and key points may be bare strings or full
//! objects. These types absorb that looseness at the deserialization
//! boundary so the outline builder and UI see one canonical form.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A summary payload: free prose or a structured document.
///
/// Plain prose feeds the text formatter; only structured summaries
/// contribute branches to the mind map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Summary {
    Text(String),
    Structured(SummaryData),
}

impl Summary {
    /// The structured document, if this summary has one.
    #[must_use]
    pub fn as_structured(&self) -> Option<&SummaryData> {
        match self {
            Self::Text(_) => None,
            Self::Structured(data) => Some(data),
        }
    }

    /// The prose form, if this summary is plain text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    /// True when there is nothing to show: empty prose or a structured
    /// document with no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Structured(data) => {
                data.title.is_none()
                    && data.paragraphs.is_empty()
                    && data.bullets.is_empty()
                    && data.sections.is_empty()
            }
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A structured summary document. Every field is optional on the wire, and
/// absent fields stay absent when re-serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    /// Document title, used as the mind-map root label when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Overview paragraphs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    /// Highlight bullets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    /// Named sections with their own paragraphs and bullets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SummarySection>,
}

/// One named section of a structured summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarySection {
    /// Section heading; rendered as "Section" when absent or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

/// A single key point extracted from the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub id: String,
    pub text: String,
}

/// Deserialize key points from either wire shape: bare strings or full
/// objects. Ids may be numbers or strings; missing ones are filled in
/// with the 1-based position.
///
/// # Errors
///
/// Fails when the value is not a list of strings/objects.
pub fn deserialize_key_points<'de, D>(deserializer: D) -> Result<Vec<KeyPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireId {
        Num(u64),
        Text(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireKeyPoint {
        Bare(String),
        Full { id: Option<WireId>, text: String },
    }

    let entries = Vec::<WireKeyPoint>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let position = (index + 1).to_string();
            match entry {
                WireKeyPoint::Bare(text) => KeyPoint { id: position, text },
                WireKeyPoint::Full { id, text } => KeyPoint {
                    id: match id {
                        Some(WireId::Num(n)) => n.to_string(),
                        Some(WireId::Text(s)) => s,
                        None => position,
                    },
                    text,
                },
            }
        })
        .collect())
}
