//! Output-language dropdown.

use leptos::prelude::*;

use crate::state::ui::{LANGUAGES, UiState, language_entry};

/// Language picker showing the active flag and name, with a dropdown of
/// every offered language.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let current = move || language_entry(&ui.get().language);
    let open = move || ui.get().language_menu_open;

    view! {
        <div class="language-selector">
            <button
                class="language-selector__toggle"
                on:click=move |_| ui.update(|u| u.language_menu_open = !u.language_menu_open)
            >
                <span class="language-selector__flag">{move || current().flag}</span>
                <span class="language-selector__name">{move || current().name}</span>
                <span
                    class="language-selector__chevron"
                    class:language-selector__chevron--open=open
                >
                    "\u{25be}"
                </span>
            </button>
            <Show when=open>
                <div class="language-selector__menu">
                    {LANGUAGES
                        .iter()
                        .map(|lang| {
                            let code = lang.code;
                            view! {
                                <button
                                    class="language-selector__option"
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.language = code.to_owned();
                                            u.language_menu_open = false;
                                        });
                                    }
                                >
                                    <span class="language-selector__flag">{lang.flag}</span>
                                    <span class="language-selector__name">{lang.name}</span>
                                    {move || {
                                        (ui.get().language == code)
                                            .then(|| view! {
                                                <span class="language-selector__check">"\u{2713}"</span>
                                            })
                                    }}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
