//! YouTube URL entry form.

use leptos::prelude::*;

use crate::state::study::StudyState;
use crate::util::youtube::extract_video_id;

#[cfg(test)]
#[path = "video_input_test.rs"]
mod video_input_test;

const INVALID_URL_MESSAGE: &str = "That does not look like a YouTube video URL.";

/// Check a raw submission and return the trimmed URL ready to process.
fn validate_url(raw: &str) -> Result<String, &'static str> {
    let url = raw.trim().to_owned();
    if extract_video_id(&url).is_none() {
        return Err(INVALID_URL_MESSAGE);
    }
    Ok(url)
}

/// URL form that validates the link and hands it to the processing flow.
#[component]
pub fn VideoInput(on_submit: Callback<String>) -> impl IntoView {
    let study = expect_context::<RwSignal<StudyState>>();

    let draft = RwSignal::new(String::new());
    let invalid = RwSignal::new(None::<&'static str>);

    let processing = move || study.get().processing;

    let submit = move || {
        let raw = draft.get_untracked();
        if raw.trim().is_empty() || study.get_untracked().processing {
            return;
        }
        match validate_url(&raw) {
            Ok(url) => {
                invalid.set(None);
                on_submit.run(url);
            }
            Err(message) => invalid.set(Some(message)),
        }
    };

    view! {
        <form
            class="video-input"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <div class="video-input__row">
                <input
                    class="video-input__field"
                    type="text"
                    placeholder="Paste YouTube URL here to start learning..."
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        draft.set(event_target_value(&ev));
                        invalid.set(None);
                    }
                    disabled=processing
                />
                <button
                    class="btn btn--primary video-input__submit"
                    type="submit"
                    disabled=move || processing() || draft.get().trim().is_empty()
                >
                    {move || if processing() { "Processing..." } else { "Analyze Video" }}
                </button>
            </div>
            {move || {
                invalid
                    .get()
                    .map(|message| view! { <p class="video-input__error">{message}</p> })
            }}
            <p class="video-input__hint">
                "Enter any YouTube video URL to get AI-powered summaries, key points, and interactive learning."
            </p>
        </form>
    }
}
