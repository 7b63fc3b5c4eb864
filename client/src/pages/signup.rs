//! Account creation page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

/// Minimum password length the identity provider will accept.
const MIN_PASSWORD_CHARS: usize = 6;

/// Trim the email and check both fields, including the provider's
/// password-length floor.
fn validate_signup(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim().to_owned();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email, password.to_owned()))
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_signup(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            match crate::net::identity::sign_up(&email_value, &password_value).await {
                // A confirmed email means the provider issued a session right
                // away; otherwise a confirmation email is on its way.
                Ok(user) if user.email_confirmed_at.is_some() => {
                    auth.update(|a| a.user = Some(user));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Ok(_) => {
                    notice.set(
                        "Check your email to confirm your account, then sign in.".to_owned(),
                    );
                    busy.set(false);
                }
                Err(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    let on_google = move |_| {
        error.set(String::new());
        crate::net::identity::google_sign_in();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"OTUBE"</h1>
                <h2 class="auth-card__title">"Create your account"</h2>
                <p class="auth-card__subtitle">"Start learning from any YouTube video"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="auth-card__error">{move || error.get()}</div>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <div class="auth-card__notice">{move || notice.get()}</div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="email">"Email address"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
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
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>

                <button class="btn auth-card__google" type="button" on:click=on_google>
                    "Continue with Google"
                </button>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
