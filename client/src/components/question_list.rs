//! Practice-question cards with expandable answers.

use leptos::prelude::*;

use crate::components::formatted::BoldText;
use crate::state::study::StudyState;

/// Expandable practice-question list. Renders nothing until questions
/// exist; at most one answer is open at a time.
#[component]
pub fn QuestionList(on_generate_more: Callback<()>) -> impl IntoView {
    let study = expect_context::<RwSignal<StudyState>>();

    let expanded = RwSignal::new(None::<String>);

    let generating_more = move || study.get().generating_more;

    view! {
        <Show when=move || !study.get().questions.is_empty()>
            <div class="question-list">
                <div class="question-list__header">
                    <h3 class="question-list__heading">"Practice Questions"</h3>
                </div>

                <div class="question-list__body">
                    {move || {
                        let questions = study.get().questions;
                        questions
                            .iter()
                            .enumerate()
                            .map(|(index, question)| {
                                let id = question.id.clone();
                                let id_for_toggle = id.clone();
                                let is_open = expanded.get().as_deref() == Some(id.as_str());
                                let badge_class = format!(
                                    "question-list__badge question-list__badge--{}",
                                    question.difficulty.css_modifier()
                                );
                                let answer = question.answer.clone();

                                view! {
                                    <div class="question-list__card">
                                        <button
                                            class="question-list__question"
                                            on:click=move |_| {
                                                expanded.update(|open| {
                                                    if open.as_deref() == Some(id_for_toggle.as_str()) {
                                                        *open = None;
                                                    } else {
                                                        *open = Some(id_for_toggle.clone());
                                                    }
                                                });
                                            }
                                        >
                                            <span class="question-list__number">{index + 1}</span>
                                            <span class="question-list__text">
                                                <BoldText text=question.question.clone()/>
                                                <span class=badge_class>
                                                    {question.difficulty.label().to_uppercase()}
                                                </span>
                                            </span>
                                            <span class="question-list__chevron">
                                                {if is_open { "\u{25b4}" } else { "\u{25be}" }}
                                            </span>
                                        </button>
                                        {is_open
                                            .then(move || view! {
                                                <div class="question-list__answer">
                                                    <p class="question-list__answer-label">"Answer:"</p>
                                                    <BoldText text=answer/>
                                                </div>
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}

                    <div class="question-list__more">
                        <button
                            class="btn btn--primary question-list__more-btn"
                            on:click=move |_| on_generate_more.run(())
                            disabled=generating_more
                        >
                            {move || {
                                if generating_more() {
                                    "Generating More Questions..."
                                } else {
                                    "Generate More Questions"
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
