//! Video header, summary card, detailed explanation, and key points.

use blocks::BULLET_GLYPH;
use leptos::prelude::*;
use mindmap::summary::{Summary, SummaryData};

use crate::components::formatted::{BoldText, FormattedText};
use crate::net::api;
use crate::net::types::Video;
use crate::state::ui::UiState;

const TEACH_FAILED_MESSAGE: &str = "Failed to generate detailed explanation.";

/// Analysis card for a processed video: thumbnail header, summary,
/// on-demand detailed explanation, and the key-points grid.
#[component]
pub fn VideoSummary(video: Video) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let teaching = RwSignal::new(String::new());
    let teach_loading = RwSignal::new(false);

    let summary_for_teach = video.summary.clone();
    let on_teach = move |_| {
        if teach_loading.get_untracked() {
            return;
        }
        teach_loading.set(true);
        let prompt = api::summary_prompt_text(&summary_for_teach);
        let language = ui.get_untracked().language;
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let result = api::generate_teaching(&prompt, &language).await;
            teaching.set(result.unwrap_or_else(|_| TEACH_FAILED_MESSAGE.to_owned()));
            teach_loading.set(false);
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (prompt, language);
            teach_loading.set(false);
        }
    };

    let summary_view = match video.summary.clone() {
        Summary::Text(text) => view! { <FormattedText text=text/> }.into_any(),
        Summary::Structured(data) => structured_summary(data).into_any(),
    };

    let key_points = video.key_points.clone();

    view! {
        <div class="video-summary">
            <div class="video-summary__header">
                {(!video.thumbnail_url.is_empty())
                    .then(|| view! {
                        <img
                            class="video-summary__thumbnail"
                            src=video.thumbnail_url.clone()
                            alt=video.title.clone()
                        />
                    })}
                <div class="video-summary__header-overlay">
                    <h2 class="video-summary__title">{video.title.clone()}</h2>
                    <span class="video-summary__caption">"YouTube Video Analysis"</span>
                </div>
            </div>

            <div class="video-summary__body">
                <section class="video-summary__section">
                    <h3 class="video-summary__section-title">"Summary"</h3>
                    <div class="video-summary__card">{summary_view}</div>

                    <button
                        class="btn btn--primary video-summary__teach"
                        on:click=on_teach
                        disabled=move || teach_loading.get()
                    >
                        {move || {
                            if teach_loading.get() {
                                "Generating explanation\u{2026}"
                            } else {
                                "Explain in detail"
                            }
                        }}
                    </button>

                    {move || {
                        let text = teaching.get();
                        if text.is_empty() {
                            return None;
                        }
                        Some(view! {
                            <div class="video-summary__teaching">
                                <h4 class="video-summary__teaching-title">"Detailed Explanation"</h4>
                                <FormattedText text=text/>
                            </div>
                        })
                    }}
                </section>

                {(!key_points.is_empty())
                    .then(|| view! {
                        <section class="video-summary__section">
                            <h3 class="video-summary__section-title">"Key Learning Points"</h3>
                            <ul class="video-summary__points">
                                {key_points
                                    .iter()
                                    .enumerate()
                                    .map(|(index, point)| view! {
                                        <li class="video-summary__point">
                                            <span class="video-summary__point-number">{index + 1}</span>
                                            <p class="video-summary__point-text">
                                                <BoldText text=point.text.clone()/>
                                            </p>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    })}
            </div>
        </div>
    }
}

/// Render a structured summary document directly: title, overview
/// paragraphs, highlight bullets, then each named section.
fn structured_summary(data: SummaryData) -> impl IntoView {
    view! {
        <div class="formatted">
            {data
                .title
                .map(|title| view! { <h3 class="formatted__heading">{title}</h3> })}
            {data
                .paragraphs
                .into_iter()
                .map(|paragraph| view! {
                    <p class="formatted__paragraph">
                        <BoldText text=paragraph/>
                    </p>
                })
                .collect_view()}
            {data
                .bullets
                .into_iter()
                .map(|bullet| view! {
                    <div class="formatted__item">
                        <span class="formatted__marker">{BULLET_GLYPH}</span>
                        <span class="formatted__body">
                            <BoldText text=bullet/>
                        </span>
                    </div>
                })
                .collect_view()}
            {data
                .sections
                .into_iter()
                .map(|section| {
                    let heading = section
                        .heading
                        .filter(|heading| !heading.is_empty())
                        .unwrap_or_else(|| "Section".to_owned());
                    view! {
                        <div class="formatted__section">
                            <h4 class="formatted__subheading">{heading}</h4>
                            {section
                                .paragraphs
                                .into_iter()
                                .map(|paragraph| view! {
                                    <p class="formatted__paragraph">
                                        <BoldText text=paragraph/>
                                    </p>
                                })
                                .collect_view()}
                            {section
                                .bullets
                                .into_iter()
                                .map(|bullet| view! {
                                    <div class="formatted__item">
                                        <span class="formatted__marker">{BULLET_GLYPH}</span>
                                        <span class="formatted__body">
                                            <BoldText text=bullet/>
                                        </span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
