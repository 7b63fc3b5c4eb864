use super::*;
use mindmap::summary::Summary;

fn sample_video(title: &str) -> Video {
    Video {
        id: "v-1".to_owned(),
        youtube_url: "https://youtu.be/dQw4w9WgXcQ".to_owned(),
        video_id: "dQw4w9WgXcQ".to_owned(),
        title: title.to_owned(),
        thumbnail_url: String::new(),
        transcript: "some transcript".to_owned(),
        summary: Summary::Text("a summary".to_owned()),
        key_points: Vec::new(),
    }
}

fn sample_question(text: &str) -> Question {
    Question {
        id: "q-1".to_owned(),
        question: text.to_owned(),
        answer: "because".to_owned(),
        difficulty: crate::net::types::Difficulty::Easy,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn study_state_default_is_idle() {
    let state = StudyState::default();
    assert!(state.video.is_none());
    assert!(state.questions.is_empty());
    assert!(!state.processing);
    assert!(!state.generating_more);
    assert!(state.error.is_none());
}

#[test]
fn default_transcript_is_empty() {
    assert_eq!(StudyState::default().transcript(), "");
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn begin_processing_bumps_seq_and_clears_error() {
    let mut state = StudyState {
        error: Some("old failure".to_owned()),
        ..StudyState::default()
    };
    let seq = state.begin_processing();
    assert_eq!(seq, 1);
    assert!(state.processing);
    assert!(state.error.is_none());
}

#[test]
fn finish_processing_installs_video_and_questions() {
    let mut state = StudyState::default();
    let seq = state.begin_processing();
    let installed = state.finish_processing(seq, sample_video("A"), vec![sample_question("Q?")]);
    assert!(installed);
    assert!(!state.processing);
    assert_eq!(state.video.as_ref().unwrap().title, "A");
    assert_eq!(state.questions.len(), 1);
    assert_eq!(state.transcript(), "some transcript");
}

#[test]
fn superseded_finish_is_discarded() {
    let mut state = StudyState::default();
    let first = state.begin_processing();
    let second = state.begin_processing();
    assert!(!state.finish_processing(first, sample_video("old"), Vec::new()));
    assert!(state.video.is_none());
    assert!(state.processing);
    assert!(state.finish_processing(second, sample_video("new"), Vec::new()));
    assert_eq!(state.video.as_ref().unwrap().title, "new");
}

#[test]
fn superseded_failure_is_discarded() {
    let mut state = StudyState::default();
    let first = state.begin_processing();
    let second = state.begin_processing();
    assert!(!state.fail_processing(first, "too slow".to_owned()));
    assert!(state.error.is_none());
    assert!(state.fail_processing(second, "bad url".to_owned()));
    assert_eq!(state.error.as_deref(), Some("bad url"));
    assert!(!state.processing);
}

#[test]
fn append_questions_extends_and_clears_flag() {
    let mut state = StudyState {
        questions: vec![sample_question("first?")],
        generating_more: true,
        ..StudyState::default()
    };
    state.append_questions(vec![sample_question("second?")]);
    assert_eq!(state.questions.len(), 2);
    assert!(!state.generating_more);
}
