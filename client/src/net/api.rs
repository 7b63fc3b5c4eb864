//! REST helpers for the video-processing backend.
//!
//! In the browser: real HTTP calls via `gloo-net`. On native targets
//! (unit tests) the request paths are stubbed since these endpoints are
//! only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs so a failed generation surfaces
//! once as a terminal message in the UI instead of crashing the page.
//! There is no retry, backoff, or timeout layer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(target_arch = "wasm32")]
use super::types::{
    AnswerResponse, ErrorResponse, KeyPointsResponse, QuestionsResponse, SummaryResponse,
    TeachingResponse,
};
#[cfg(any(test, target_arch = "wasm32"))]
use super::types::ProcessVideoResponse;
use super::types::{ChatMessage, KeyPoint, Question, Summary, Video};

/// Summary text used when a video has no transcript to work from.
const NO_TRANSCRIPT_SUMMARY: &str = "Transcript not available to summarize.";

/// Summary text used when the backend returns an empty summary field.
#[cfg(any(test, target_arch = "wasm32"))]
const NO_SUMMARY_FALLBACK: &str = "No summary generated.";

/// Answer text used when the backend returns an empty response.
#[cfg(any(test, target_arch = "wasm32"))]
const NO_ANSWER_FALLBACK: &str = "No response.";

/// How many trailing chat messages are sent as answer context.
#[cfg(any(test, target_arch = "wasm32"))]
const ANSWER_HISTORY_LIMIT: usize = 6;

#[cfg(any(test, target_arch = "wasm32"))]
fn api_url(path: &str) -> String {
    let base = option_env!("OTUBE_API_BASE").unwrap_or("");
    format!("{base}{path}")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn summary_failed_message(status_text: &str) -> String {
    format!("Summary generation failed: {status_text}")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn key_points_failed_message(status_text: &str) -> String {
    format!("Key points extraction failed: {status_text}")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn questions_failed_message(status_text: &str) -> String {
    format!("Question generation failed: {status_text}")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn answer_failed_message(status_text: &str) -> String {
    format!("Answer generation failed: {status_text}")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn teaching_failed_message(status_text: &str) -> String {
    format!("Teaching generation failed: {status_text}")
}

/// Error message for a failed `process-video` call, preferring the backend's
/// own `detail` text when it sent one.
#[cfg(any(test, target_arch = "wasm32"))]
fn process_failed_message(detail: Option<String>) -> String {
    detail
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Failed to process video".to_owned())
}

/// Resolve the summary field of a response, substituting the fallback text
/// when the backend sent nothing usable.
#[cfg(any(test, target_arch = "wasm32"))]
fn summary_or_fallback(summary: Option<Summary>) -> Summary {
    match summary {
        Some(Summary::Text(text)) if text.is_empty() => {
            Summary::Text(NO_SUMMARY_FALLBACK.to_owned())
        }
        Some(summary) => summary,
        None => Summary::Text(NO_SUMMARY_FALLBACK.to_owned()),
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
fn answer_or_fallback(answer: Option<String>) -> String {
    answer
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_owned())
}

/// The trailing slice of `history` sent with an answer request.
#[cfg(any(test, target_arch = "wasm32"))]
fn recent_history(history: &[ChatMessage]) -> &[ChatMessage] {
    let start = history.len().saturating_sub(ANSWER_HISTORY_LIMIT);
    &history[start..]
}

/// Give every question an id so expand/collapse state stays per-card even
/// when the backend omits ids.
#[cfg(any(test, target_arch = "wasm32"))]
fn normalize_questions(mut questions: Vec<Question>) -> Vec<Question> {
    for question in &mut questions {
        if question.id.is_empty() {
            question.id = uuid::Uuid::new_v4().to_string();
        }
    }
    questions
}

#[cfg(any(test, target_arch = "wasm32"))]
fn assemble_video(url: &str, resp: ProcessVideoResponse) -> Video {
    Video {
        id: uuid::Uuid::new_v4().to_string(),
        youtube_url: url.to_owned(),
        video_id: resp.video_id,
        title: resp.video_info.title,
        thumbnail_url: resp.video_info.thumbnail_url,
        transcript: resp.transcript,
        summary: resp.summary,
        key_points: resp.key_points,
    }
}

/// Flatten a summary for teach-style prompts. Structured documents are
/// JSON-encoded the same way they arrived from the backend.
#[must_use]
pub fn summary_prompt_text(summary: &Summary) -> String {
    match summary {
        Summary::Text(text) => text.clone(),
        Summary::Structured(data) => serde_json::to_string(data).unwrap_or_default(),
    }
}

/// Submit a YouTube URL for processing via `POST /api/process-video`.
///
/// # Errors
///
/// Returns the backend's `detail` message on a non-2xx response, or a
/// generic failure message when processing did not succeed.
pub async fn process_video(url: &str, language: &str) -> Result<Video, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "url": url, "language": language });
        let resp = gloo_net::http::Request::post(&api_url("/api/process-video"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let detail = resp
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(process_failed_message(detail));
        }
        let body: ProcessVideoResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err(process_failed_message(None));
        }
        Ok(assemble_video(url, body))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (url, language);
        Err("not available outside the browser".to_owned())
    }
}

/// Generate a summary for a transcript via `POST /api/summary`.
///
/// A blank transcript short-circuits with an explanatory summary instead
/// of calling the backend.
///
/// # Errors
///
/// Returns an error string when the request fails or the backend responds
/// with a non-2xx status.
pub async fn generate_summary(transcript: &str, language: &str) -> Result<Summary, String> {
    if transcript.trim().is_empty() {
        return Ok(Summary::Text(NO_TRANSCRIPT_SUMMARY.to_owned()));
    }
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "transcript": transcript, "language": language });
        let resp = gloo_net::http::Request::post(&api_url("/api/summary"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(summary_failed_message(&resp.status_text()));
        }
        let body: SummaryResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(summary_or_fallback(body.summary))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
        Err("not available outside the browser".to_owned())
    }
}

/// Extract key points from a transcript via `POST /api/keypoints`.
///
/// A blank transcript short-circuits with an empty list.
///
/// # Errors
///
/// Returns an error string when the request fails or the backend responds
/// with a non-2xx status.
pub async fn extract_key_points(transcript: &str, language: &str) -> Result<Vec<KeyPoint>, String> {
    if transcript.trim().is_empty() {
        return Ok(Vec::new());
    }
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "transcript": transcript, "language": language });
        let resp = gloo_net::http::Request::post(&api_url("/api/keypoints"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(key_points_failed_message(&resp.status_text()));
        }
        let body: KeyPointsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.key_points)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
        Err("not available outside the browser".to_owned())
    }
}

/// Generate practice questions via `POST /api/questions`.
///
/// A blank transcript short-circuits with an empty list.
///
/// # Errors
///
/// Returns an error string when the request fails or the backend responds
/// with a non-2xx status.
pub async fn generate_questions(transcript: &str, language: &str) -> Result<Vec<Question>, String> {
    if transcript.trim().is_empty() {
        return Ok(Vec::new());
    }
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "transcript": transcript, "language": language });
        let resp = gloo_net::http::Request::post(&api_url("/api/questions"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(questions_failed_message(&resp.status_text()));
        }
        let body: QuestionsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(normalize_questions(body.questions))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
        Err("not available outside the browser".to_owned())
    }
}

/// Answer a free-form question about a video via `POST /api/answer`.
///
/// Sends the whole video as context plus the trailing chat history.
///
/// # Errors
///
/// Returns an error string when the request fails or the backend responds
/// with a non-2xx status.
pub async fn answer_question(
    question: &str,
    video: &Video,
    history: &[ChatMessage],
    language: &str,
) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({
            "question": question,
            "video": video,
            "history": recent_history(history),
            "language": language,
        });
        let resp = gloo_net::http::Request::post(&api_url("/api/answer"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(answer_failed_message(&resp.status_text()));
        }
        let body: AnswerResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(answer_or_fallback(body.answer))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (question, video, history, language);
        Err("not available outside the browser".to_owned())
    }
}

/// Generate a detailed explanation via `POST /api/teach`.
///
/// `summary_text` is the flattened prompt text, usually built with
/// [`summary_prompt_text`]. A blank prompt short-circuits with an empty
/// string.
///
/// # Errors
///
/// Returns an error string when the request fails or the backend responds
/// with a non-2xx status.
pub async fn generate_teaching(summary_text: &str, language: &str) -> Result<String, String> {
    if summary_text.trim().is_empty() {
        return Ok(String::new());
    }
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "summary": summary_text, "language": language });
        let resp = gloo_net::http::Request::post(&api_url("/api/teach"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(teaching_failed_message(&resp.status_text()));
        }
        let body: TeachingResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.teaching.unwrap_or_default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
        Err("not available outside the browser".to_owned())
    }
}
