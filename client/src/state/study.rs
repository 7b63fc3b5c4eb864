//! Study-session state: the processed video, its questions, and the
//! processing lifecycle.
//!
//! DESIGN
//! ======
//! Backend calls are not cancellable once issued. Each submission bumps
//! `submit_seq` and async completions carry the value captured at submit
//! time; a completion whose sequence is no longer current is discarded so
//! a newer submission is never overwritten by a stale result.

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

use crate::net::types::{Question, Video};

/// State for the active study session.
#[derive(Clone, Debug, Default)]
pub struct StudyState {
    /// The most recently processed video, if any.
    pub video: Option<Video>,
    /// Practice questions for the current video.
    pub questions: Vec<Question>,
    /// True while a video submission is in flight.
    pub processing: bool,
    /// True while an extra batch of questions is being generated.
    pub generating_more: bool,
    /// Terminal error from the last failed operation, shown once in the UI.
    pub error: Option<String>,
    /// Monotonic submission counter used to discard superseded results.
    pub submit_seq: u64,
}

impl StudyState {
    /// Start a new submission. Returns the sequence number the completion
    /// must present to [`finish_processing`](Self::finish_processing).
    pub fn begin_processing(&mut self) -> u64 {
        self.submit_seq += 1;
        self.processing = true;
        self.error = None;
        self.submit_seq
    }

    /// True when a completion carrying `seq` belongs to the newest submission.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        self.submit_seq == seq
    }

    /// Install a finished video and its questions. Returns `false` without
    /// touching state when `seq` has been superseded.
    pub fn finish_processing(&mut self, seq: u64, video: Video, questions: Vec<Question>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.video = Some(video);
        self.questions = questions;
        self.processing = false;
        true
    }

    /// Record a failed submission. Returns `false` without touching state
    /// when `seq` has been superseded.
    pub fn fail_processing(&mut self, seq: u64, message: String) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.error = Some(message);
        self.processing = false;
        true
    }

    /// Append a freshly generated batch of questions.
    pub fn append_questions(&mut self, batch: Vec<Question>) {
        self.questions.extend(batch);
        self.generating_more = false;
    }

    /// The transcript of the current video, or empty when none is loaded.
    #[must_use]
    pub fn transcript(&self) -> &str {
        self.video.as_ref().map_or("", |v| v.transcript.as_str())
    }
}
