//! Password update page reached from the recovery-email link.

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(test)]
#[path = "update_password_test.rs"]
mod update_password_test;

fn validate_new_password(password: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err("Enter a new password.");
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(password.to_owned())
}

/// Recovery landing page: adopts the access token from the link fragment,
/// then lets the user set a new password.
#[component]
pub fn UpdatePasswordPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let updated = RwSignal::new(false);
    let busy = RwSignal::new(false);

    crate::net::identity::adopt_recovery_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || updated.get() {
            return;
        }
        let password_value = match validate_new_password(&password.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            match crate::net::identity::update_password(&password_value).await {
                Ok(()) => updated.set(true),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = password_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"OTUBE"</h1>
                <h2 class="auth-card__title">"Set a new password"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="auth-card__error">{move || error.get()}</div>
                </Show>

                <Show
                    when=move || !updated.get()
                    fallback=|| {
                        view! {
                            <div class="auth-card__notice">
                                "Password updated. Sign in with your new password."
                            </div>
                            <p class="auth-card__footer">
                                <A href="/login">"Sign in"</A>
                            </p>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label" for="new-password">"New password"</label>
                        <input
                            id="new-password"
                            class="auth-form__input"
                            type="password"
                            placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Updating..." } else { "Update password" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
