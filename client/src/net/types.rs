//! Shared wire DTOs for the processing backend and the identity provider.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and is loose about optional fields, so
//! these types absorb that at the serde boundary. Summary and key-point
//! shapes come from the `mindmap` crate, which owns their normalization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use mindmap::summary::deserialize_key_points;
use serde::{Deserialize, Deserializer, Serialize};

pub use mindmap::summary::{KeyPoint, Summary};

/// A processed video and everything derived from it.
///
/// Assembled client-side from a [`ProcessVideoResponse`]; also serialized
/// wholesale into the `/api/answer` request body as conversation context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Client-generated identifier for this study session.
    pub id: String,
    /// The URL the user submitted.
    pub youtube_url: String,
    /// Canonical 11-character YouTube video ID.
    pub video_id: String,
    /// Video title from the backend.
    pub title: String,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
    /// Full transcript text; drives summary/question/key-point generation.
    pub transcript: String,
    /// Generated summary, prose or structured.
    pub summary: Summary,
    /// Normalized key points.
    #[serde(default, deserialize_with = "deserialize_key_points")]
    pub key_points: Vec<KeyPoint>,
}

/// A generated practice question with its model answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Backend-assigned identifier; may be absent and filled client-side.
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_difficulty")]
    pub difficulty: Difficulty,
}

/// Difficulty rating attached to a practice question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Anything else the backend sends; rendered with neutral styling.
    #[default]
    Unknown,
}

impl Difficulty {
    /// Parse a wire value, treating unrecognized ratings as [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }

    /// Badge label shown on the question card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unknown => "unrated",
        }
    }

    /// CSS class modifier for the badge color.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Unknown => "unknown",
        }
    }
}

fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Difficulty::from_wire(&raw))
}

/// One side of the Q&A conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message, also sent to the backend as answer context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch when the message was created.
    #[serde(default)]
    pub timestamp: f64,
}

/// An authenticated user as returned by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: Option<String>,
    /// Account creation timestamp (ISO 8601).
    pub created_at: Option<String>,
    /// When the email address was confirmed, if it has been.
    pub email_confirmed_at: Option<String>,
    pub last_sign_in_at: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    /// Display name for headers and the profile card.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }
}

/// Provider metadata attached by the identity service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Sign-in provider, e.g. `"email"` or `"google"`.
    pub provider: Option<String>,
}

/// Free-form profile metadata supplied at sign-up or by OAuth providers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub full_name: Option<String>,
}

// ===== Backend response envelopes =====

/// Response from `POST /api/process-video`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessVideoResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub video_info: VideoInfo,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default, deserialize_with = "deserialize_key_points")]
    pub key_points: Vec<KeyPoint>,
}

/// Title and thumbnail metadata inside a [`ProcessVideoResponse`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

/// Response from `POST /api/summary`.
#[derive(Clone, Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary: Option<Summary>,
}

/// Response from `POST /api/keypoints`.
#[derive(Clone, Debug, Deserialize)]
pub struct KeyPointsResponse {
    #[serde(
        rename = "keyPoints",
        default,
        deserialize_with = "deserialize_key_points"
    )]
    pub key_points: Vec<KeyPoint>,
}

/// Response from `POST /api/questions`.
#[derive(Clone, Debug, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Response from `POST /api/answer`.
#[derive(Clone, Debug, Deserialize)]
pub struct AnswerResponse {
    pub answer: Option<String>,
}

/// Response from `POST /api/teach`.
#[derive(Clone, Debug, Deserialize)]
pub struct TeachingResponse {
    pub teaching: Option<String>,
}

/// Error payload carried by non-2xx backend responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<String>,
}
