//! Login page with email + password, Google OAuth, and password reset.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// Trim the email and require both fields. The password is passed through
/// verbatim.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim().to_owned();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email, password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
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
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
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
            match crate::net::identity::sign_in(&email_value, &password_value).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
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

    let on_forgot = move |_| {
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            error.set("Enter your email above, then click Forgot password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());

        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            match crate::net::identity::send_reset_email(&email_value).await {
                Ok(()) => notice.set("Password reset email sent. Check your inbox.".to_owned()),
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = email_value;
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
                <h2 class="auth-card__title">"Welcome back"</h2>
                <p class="auth-card__subtitle">"Sign in to continue learning"</p>

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
                    <div class="auth-form__aside">
                        <button class="auth-form__link" type="button" on:click=on_forgot>
                            "Forgot password?"
                        </button>
                    </div>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <button class="btn auth-card__google" type="button" on:click=on_google>
                    "Continue with Google"
                </button>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
