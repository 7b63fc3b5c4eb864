//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, login::LoginPage, profile::ProfilePage, signup::SignUpPage,
    update_password::UpdatePasswordPage,
};
use crate::state::{auth::AuthState, chat::ChatState, study::StudyState, ui::UiState};

/// Root application component.
///
/// Provides all shared state contexts, restores the identity session, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let study = RwSignal::new(StudyState::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(study);
    provide_context(chat);
    provide_context(ui);

    // Restore any stored session so pages see the signed-in user on load.
    #[cfg(target_arch = "wasm32")]
    leptos::task::spawn_local(async move {
        let user = crate::net::identity::current_session().await;
        auth.update(|a| {
            a.user = user;
            a.checking = false;
        });
    });
    #[cfg(not(target_arch = "wasm32"))]
    auth.update(|a| a.checking = false);

    view! {
        <Stylesheet id="otube" href="/styles.css"/>
        <Title text="OTUBE"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("update-password") view=UpdatePasswordPage/>
            </Routes>
        </Router>
    }
}
