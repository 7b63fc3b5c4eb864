use super::*;
use crate::net::types::{Difficulty, Role, VideoInfo};
use mindmap::summary::SummaryData;

fn message(n: usize) -> ChatMessage {
    ChatMessage {
        id: n.to_string(),
        role: if n % 2 == 0 { Role::User } else { Role::Assistant },
        content: format!("message {n}"),
        timestamp: 0.0,
    }
}

// =============================================================
// URL + error message builders
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    // OTUBE_API_BASE is unset in tests, so paths come through unchanged.
    assert_eq!(api_url("/api/summary"), "/api/summary");
}

#[test]
fn failure_messages_include_status_text() {
    assert_eq!(
        summary_failed_message("Bad Gateway"),
        "Summary generation failed: Bad Gateway"
    );
    assert_eq!(
        key_points_failed_message("Not Found"),
        "Key points extraction failed: Not Found"
    );
    assert_eq!(
        questions_failed_message("Too Many Requests"),
        "Question generation failed: Too Many Requests"
    );
    assert_eq!(
        answer_failed_message("Internal Server Error"),
        "Answer generation failed: Internal Server Error"
    );
    assert_eq!(
        teaching_failed_message("Bad Request"),
        "Teaching generation failed: Bad Request"
    );
}

#[test]
fn process_failed_message_prefers_backend_detail() {
    assert_eq!(
        process_failed_message(Some("Invalid YouTube URL".to_owned())),
        "Invalid YouTube URL"
    );
    assert_eq!(process_failed_message(None), "Failed to process video");
    assert_eq!(
        process_failed_message(Some(String::new())),
        "Failed to process video"
    );
}

// =============================================================
// Response fallbacks
// =============================================================

#[test]
fn summary_fallback_covers_missing_and_empty() {
    assert_eq!(
        summary_or_fallback(None),
        Summary::Text("No summary generated.".to_owned())
    );
    assert_eq!(
        summary_or_fallback(Some(Summary::Text(String::new()))),
        Summary::Text("No summary generated.".to_owned())
    );
}

#[test]
fn summary_fallback_keeps_real_content() {
    let structured = Summary::Structured(SummaryData {
        title: Some("T".to_owned()),
        ..SummaryData::default()
    });
    assert_eq!(summary_or_fallback(Some(structured.clone())), structured);
    assert_eq!(
        summary_or_fallback(Some(Summary::Text(" ".to_owned()))),
        Summary::Text(" ".to_owned())
    );
}

#[test]
fn answer_fallback_covers_missing_and_empty() {
    assert_eq!(answer_or_fallback(None), "No response.");
    assert_eq!(answer_or_fallback(Some(String::new())), "No response.");
    assert_eq!(answer_or_fallback(Some("Sure.".to_owned())), "Sure.");
}

// =============================================================
// Answer context
// =============================================================

#[test]
fn recent_history_keeps_last_six() {
    let history: Vec<ChatMessage> = (0..10).map(message).collect();
    let recent = recent_history(&history);
    assert_eq!(recent.len(), 6);
    assert_eq!(recent[0].id, "4");
    assert_eq!(recent[5].id, "9");
}

#[test]
fn recent_history_passes_short_conversations_whole() {
    let history: Vec<ChatMessage> = (0..3).map(message).collect();
    assert_eq!(recent_history(&history).len(), 3);
    assert!(recent_history(&[]).is_empty());
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn normalize_questions_fills_only_missing_ids() {
    let questions = vec![
        Question {
            id: "q-1".to_owned(),
            question: "Why?".to_owned(),
            answer: "Because.".to_owned(),
            difficulty: Difficulty::Easy,
        },
        Question {
            id: String::new(),
            question: "How?".to_owned(),
            answer: "Carefully.".to_owned(),
            difficulty: Difficulty::Hard,
        },
    ];
    let normalized = normalize_questions(questions);
    assert_eq!(normalized[0].id, "q-1");
    assert!(!normalized[1].id.is_empty());
}

#[test]
fn assemble_video_copies_response_fields() {
    let resp = ProcessVideoResponse {
        success: true,
        video_id: "dQw4w9WgXcQ".to_owned(),
        video_info: VideoInfo {
            title: "A Video".to_owned(),
            thumbnail_url: "http://img".to_owned(),
        },
        transcript: "hello there".to_owned(),
        summary: Summary::Text("short".to_owned()),
        key_points: vec![KeyPoint {
            id: "1".to_owned(),
            text: "first".to_owned(),
        }],
    };
    let video = assemble_video("https://youtu.be/dQw4w9WgXcQ", resp);
    assert!(!video.id.is_empty());
    assert_eq!(video.youtube_url, "https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(video.video_id, "dQw4w9WgXcQ");
    assert_eq!(video.title, "A Video");
    assert_eq!(video.transcript, "hello there");
    assert_eq!(video.key_points.len(), 1);
}

// =============================================================
// Prompt flattening
// =============================================================

#[test]
fn summary_prompt_text_passes_prose_through() {
    assert_eq!(
        summary_prompt_text(&Summary::Text("plain words".to_owned())),
        "plain words"
    );
}

#[test]
fn summary_prompt_text_encodes_structured_documents() {
    let summary = Summary::Structured(SummaryData {
        title: Some("Doc".to_owned()),
        bullets: vec!["one".to_owned()],
        ..SummaryData::default()
    });
    let text = summary_prompt_text(&summary);
    assert!(text.starts_with('{'));
    assert!(text.contains("\"title\":\"Doc\""));
    assert!(text.contains("\"bullets\":[\"one\"]"));
}
