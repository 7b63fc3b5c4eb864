//! Local UI chrome state (language, overlays).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`study`,
//! `chat`) so overlay toggles never invalidate study data subscribers.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A selectable output language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code sent to the backend.
    pub code: &'static str,
    /// Native display name.
    pub name: &'static str,
    /// Flag emoji shown in the selector.
    pub flag: &'static str,
}

/// Languages offered by the selector, first entry is the default.
pub const LANGUAGES: [Language; 2] = [
    Language {
        code: "en",
        name: "English",
        flag: "\u{1f1fa}\u{1f1f8}",
    },
    Language {
        code: "hi",
        name: "\u{939}\u{93f}\u{928}\u{94d}\u{926}\u{940}",
        flag: "\u{1f1ee}\u{1f1f3}",
    },
];

/// Look up a language by code, falling back to the default entry.
#[must_use]
pub fn language_entry(code: &str) -> Language {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .copied()
        .unwrap_or(LANGUAGES[0])
}

/// UI state for the language choice and overlay panels.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Active output language code.
    pub language: String,
    /// Whether the mind-map overlay is open.
    pub mind_map_open: bool,
    /// Whether the extra-info overlay is open.
    pub extra_info_open: bool,
    /// Whether the language dropdown is expanded.
    pub language_menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            language: LANGUAGES[0].code.to_owned(),
            mind_map_open: false,
            extra_info_open: false,
            language_menu_open: false,
        }
    }
}
