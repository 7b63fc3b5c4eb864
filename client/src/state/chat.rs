//! State for the video Q&A chat panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatMessage;

/// Conversation state for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Conversation history in arrival order.
    pub messages: Vec<ChatMessage>,
    /// True while an answer is being generated.
    pub loading: bool,
}

impl ChatState {
    /// Append a message to the history.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drop the conversation, e.g. when a new video is loaded.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.loading = false;
    }
}
