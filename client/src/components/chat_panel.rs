//! Q&A chat over the processed video.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends questions to the backend answer endpoint with the video payload
//! and recent history, and renders the conversation from shared chat state.

use leptos::prelude::*;

use crate::components::formatted::BoldText;
use crate::net::types::{ChatMessage, Role};
use crate::state::chat::ChatState;
use crate::state::study::StudyState;
use crate::state::ui::UiState;

/// Chat panel showing conversation history and a question input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let study = expect_context::<RwSignal<StudyState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let question = text.trim().to_owned();
        if question.is_empty() || chat.get().loading {
            return;
        }
        let Some(video) = study.get_untracked().video else {
            return;
        };

        // Snapshot before the user message lands; the question itself is
        // not part of the history sent alongside it.
        let history = chat.get_untracked().messages;
        chat.update(|c| {
            c.push(ChatMessage {
                id: uuid::Uuid::new_v4().to_string(),
                role: Role::User,
                content: question.clone(),
                timestamp: now_ms(),
            });
            c.loading = true;
        });
        input.set(String::new());

        let language = ui.get_untracked().language;
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            let reply =
                match crate::net::api::answer_question(&question, &video, &history, &language)
                    .await
                {
                    Ok(answer) => answer,
                    Err(message) => message,
                };
            chat.update(|c| {
                c.push(ChatMessage {
                    id: uuid::Uuid::new_v4().to_string(),
                    role: Role::Assistant,
                    content: reply,
                    timestamp: now_ms(),
                });
                c.loading = false;
            });
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (question, video, history, language);
            chat.update(|c| c.loading = false);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().loading;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <h3 class="chat-panel__heading">"Ask Questions About This Video"</h3>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                <p>"Start a conversation about the video content"</p>
                                <p class="chat-panel__empty-hint">
                                    "Ask questions, request explanations, or discuss concepts"
                                </p>
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|message| {
                            let is_user = message.role == Role::User;
                            let content = message.content.clone();
                            view! {
                                <div class="chat-panel__row" class:chat-panel__row--user=is_user>
                                    <div
                                        class="chat-panel__bubble"
                                        class:chat-panel__bubble--user=is_user
                                    >
                                        <BoldText text=content/>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    chat.get().loading.then(|| view! {
                        <div class="chat-panel__row">
                            <div class="chat-panel__bubble chat-panel__bubble--pending">
                                "\u{2026}"
                            </div>
                        </div>
                    })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your question here..."
                    disabled=move || chat.get().loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
