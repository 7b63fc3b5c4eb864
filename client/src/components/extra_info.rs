//! Beyond-transcript context overlay.

use leptos::prelude::*;

use crate::components::formatted::FormattedText;
use crate::net::api;
use crate::net::types::Video;
use crate::state::ui::UiState;

const EXTRA_INFO_PROMPT: &str = "Provide concise extra context/background, definitions, and related subtopics NOT explicitly covered in the transcript. Focus on missing foundations and broader perspective. ";
const EXTRA_INFO_FAILED: &str = "Failed to generate extra information.";

/// Overlay that requests background context beyond the transcript as soon
/// as it opens.
#[component]
pub fn ExtraInfo(video: Video) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let content = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    {
        let base = api::summary_prompt_text(&video.summary);
        let prompt = format!("{EXTRA_INFO_PROMPT}\n{base}");
        let language = ui.get_untracked().language;
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let result = api::generate_teaching(&prompt, &language).await;
            content.set(result.unwrap_or_else(|_| EXTRA_INFO_FAILED.to_owned()));
            loading.set(false);
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (prompt, language);
            loading.set(false);
        }
    }

    let close = move |_| ui.update(|u| u.extra_info_open = false);

    view! {
        <div class="overlay">
            <div class="overlay__panel overlay__panel--left">
                <div class="overlay__header">
                    <h3 class="overlay__heading">"Extra Info (Beyond Transcript)"</h3>
                    <button class="overlay__close" on:click=close>"\u{2715}"</button>
                </div>
                {move || {
                    if loading.get() {
                        view! { <p class="overlay__loading">"Generating\u{2026}"</p> }.into_any()
                    } else {
                        view! { <FormattedText text=content.get()/> }.into_any()
                    }
                }}
            </div>
            <div class="overlay__backdrop" on:click=close></div>
        </div>
    }
}
