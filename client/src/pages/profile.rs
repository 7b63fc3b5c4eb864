//! User profile page with account details and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// The date portion of an ISO 8601 timestamp, or the input unchanged when
/// it is too short to carry one.
fn date_only(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

/// Compact "date hh:mm" rendering of an ISO 8601 timestamp.
fn date_time_display(iso: &str) -> String {
    let date = date_only(iso);
    match iso.get(11..16) {
        Some(time) => format!("{date} {time}"),
        None => date.to_owned(),
    }
}

/// Provider name with a leading capital; absent means password auth.
fn provider_label(provider: Option<&str>) -> String {
    let provider = provider.filter(|p| !p.is_empty()).unwrap_or("email");
    let mut chars = provider.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Profile page. Redirects to `/login` once the session check settles
/// without a user.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.checking && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_sign_out = move |_| {
        #[cfg(target_arch = "wasm32")]
        leptos::task::spawn_local(async move {
            crate::net::identity::sign_out().await;
            auth.update(|a| a.user = None);
        });
        #[cfg(not(target_arch = "wasm32"))]
        auth.update(|a| a.user = None);
    };

    view! {
        <div class="profile-page">
            {move || {
                let state = auth.get();
                if state.checking {
                    return Some(
                        view! { <div class="profile-page__loading">"Loading..."</div> }.into_any(),
                    );
                }
                let user = state.user?;

                let display_name = user.display_name().to_owned();
                let avatar_initial = display_name
                    .chars()
                    .next()
                    .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().to_string());
                let email = user.email.clone().unwrap_or_default();
                let joined = user
                    .created_at
                    .as_deref()
                    .map_or("\u{2014}", date_only)
                    .to_owned();
                let verified = user.email_confirmed_at.is_some();
                let provider = provider_label(user.app_metadata.provider.as_deref());
                let last_sign_in = user
                    .last_sign_in_at
                    .as_deref()
                    .map_or_else(|| "\u{2014}".to_owned(), date_time_display);

                Some(
                    view! {
                        <div class="profile-page__inner">
                            <div class="profile-page__back">
                                <A href="/">"Back to Home"</A>
                            </div>
                            <h1 class="profile-page__title">"Your Profile"</h1>

                            <div class="profile-card">
                                <div class="profile-card__identity">
                                    <div class="profile-card__avatar">{avatar_initial}</div>
                                    <div>
                                        <h2 class="profile-card__name">{display_name}</h2>
                                        <p class="profile-card__email">{email}</p>
                                        <p class="profile-card__joined">{format!("Joined {joined}")}</p>
                                    </div>
                                </div>

                                <div class="profile-card__section">
                                    <h3 class="profile-card__section-title">"Account Information"</h3>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Email Verified"</span>
                                        <span
                                            class="profile-card__badge"
                                            class:profile-card__badge--verified=verified
                                        >
                                            {if verified { "Verified" } else { "Pending" }}
                                        </span>
                                    </div>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Authentication Provider"</span>
                                        <span class="profile-card__value">{provider}</span>
                                    </div>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Last Sign In"</span>
                                        <span class="profile-card__value">{last_sign_in}</span>
                                    </div>
                                </div>
                            </div>

                            <div class="profile-card">
                                <h3 class="profile-card__section-title">"Learning Statistics"</h3>
                                <div class="profile-card__stats">
                                    <div class="profile-card__stat">
                                        <span class="profile-card__stat-value">"0"</span>
                                        <span class="profile-card__stat-label">"Videos Processed"</span>
                                    </div>
                                    <div class="profile-card__stat">
                                        <span class="profile-card__stat-value">"0"</span>
                                        <span class="profile-card__stat-label">"Questions Answered"</span>
                                    </div>
                                    <div class="profile-card__stat">
                                        <span class="profile-card__stat-value">"0"</span>
                                        <span class="profile-card__stat-label">"Total Study Time"</span>
                                    </div>
                                </div>
                                <p class="profile-card__note">"**Note**: Statistics tracking coming soon!"</p>
                            </div>

                            <button class="btn profile-page__sign-out" on:click=on_sign_out>
                                "Sign Out"
                            </button>
                        </div>
                    }
                        .into_any(),
                )
            }}
        </div>
    }
}
