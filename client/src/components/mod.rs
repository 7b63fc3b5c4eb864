//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the study-session chrome and reading surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod chat_panel;
pub mod extra_info;
pub mod formatted;
pub mod language_selector;
pub mod mind_map_panel;
pub mod question_list;
pub mod video_input;
pub mod video_summary;
