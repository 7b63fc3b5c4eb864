//! Landing page orchestrating the study session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the processing flow: submit URL, process the video, generate the
//! first question batch, then install everything at once. Completions carry
//! the submission sequence captured at submit time so a newer submission
//! silently wins over stale results.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::chat_panel::ChatPanel;
use crate::components::extra_info::ExtraInfo;
use crate::components::language_selector::LanguageSelector;
use crate::components::mind_map_panel::MindMapPanel;
use crate::components::question_list::QuestionList;
use crate::components::video_input::VideoInput;
use crate::components::video_summary::VideoSummary;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::study::StudyState;
use crate::state::ui::UiState;

/// Home page: URL input, the analysis stack, and the overlay toggles.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let study = expect_context::<RwSignal<StudyState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Keyed on content so the stack below only remounts for a new video,
    // not for question appends or flag flips.
    let current_video = Memo::new(move |_| study.get().video);

    let on_submit = Callback::new(move |url: String| {
        let mut seq = 0;
        study.update(|s| seq = s.begin_processing());
        let language = ui.get_untracked().language;

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            match crate::net::api::process_video(&url, &language).await {
                Ok(video) => {
                    let questions = match crate::net::api::generate_questions(
                        &video.transcript,
                        &language,
                    )
                    .await
                    {
                        Ok(questions) => questions,
                        Err(message) => {
                            log::warn!("question generation failed: {message}");
                            Vec::new()
                        }
                    };
                    let mut installed = false;
                    study.update(|s| installed = s.finish_processing(seq, video, questions));
                    if installed {
                        chat.update(|c| c.reset());
                    }
                }
                Err(message) => {
                    study.update(|s| {
                        s.fail_processing(seq, message);
                    });
                }
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (url, language, seq);
            study.update(|s| s.processing = false);
        }
    });

    let on_generate_more = Callback::new(move |()| {
        let state = study.get_untracked();
        if state.generating_more || state.video.is_none() {
            return;
        }
        let transcript = state.transcript().to_owned();
        study.update(|s| s.generating_more = true);
        let language = ui.get_untracked().language;

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_questions(&transcript, &language).await {
                Ok(batch) => study.update(|s| s.append_questions(batch)),
                Err(message) => {
                    log::warn!("question generation failed: {message}");
                    study.update(|s| s.generating_more = false);
                }
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (transcript, language);
            study.update(|s| s.generating_more = false);
        }
    });

    view! {
        <div class="home">
            <header class="home__header">
                <div class="home__brand">
                    <h1 class="home__logo">"OTUBE"</h1>
                    <span class="home__tagline">"Learn from any YouTube video"</span>
                </div>
                <div class="home__actions">
                    {move || {
                        current_video.get().is_some().then(|| view! {
                            <button
                                class="btn home__overlay-btn"
                                on:click=move |_| ui.update(|u| u.mind_map_open = true)
                            >
                                "Mind Map"
                            </button>
                            <button
                                class="btn home__overlay-btn"
                                on:click=move |_| ui.update(|u| u.extra_info_open = true)
                            >
                                "Extra Info"
                            </button>
                        })
                    }}
                    <LanguageSelector/>
                    <div class="home__account">
                        {move || {
                            if auth.get().user.is_some() {
                                view! { <A href="/profile">"Profile"</A> }.into_any()
                            } else {
                                view! { <A href="/login">"Sign in"</A> }.into_any()
                            }
                        }}
                    </div>
                </div>
            </header>

            <main class="home__main">
                <VideoInput on_submit=on_submit/>

                {move || {
                    study.get().error.map(|message| view! {
                        <div class="home__error">{message}</div>
                    })
                }}

                {move || {
                    current_video.get().map(|video| view! {
                        <div class="home__stack">
                            <VideoSummary video=video/>
                            <QuestionList on_generate_more=on_generate_more/>
                            <ChatPanel/>
                        </div>
                    })
                }}
            </main>

            {move || {
                if !ui.get().mind_map_open {
                    return None;
                }
                current_video
                    .get()
                    .map(|video| view! { <MindMapPanel video=video/> })
            }}
            {move || {
                if !ui.get().extra_info_open {
                    return None;
                }
                current_video
                    .get()
                    .map(|video| view! { <ExtraInfo video=video/> })
            }}
        </div>
    }
}
