//! Identity-provider REST client (GoTrue-style auth service).
//!
//! In the browser: real HTTP calls via `gloo-net` with the session token
//! persisted to `localStorage`. On native targets the request paths are
//! stubbed since auth is only meaningful in a browser session.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in/sign-up surface the provider's own message when one is present
//! so the login card can show "Invalid login credentials" style text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::types::AuthUser;

/// localStorage key holding the session access token.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "otube_session";

#[cfg(any(test, target_arch = "wasm32"))]
fn auth_base() -> &'static str {
    option_env!("OTUBE_AUTH_URL").unwrap_or("https://placeholder.supabase.co")
}

#[cfg(target_arch = "wasm32")]
fn auth_key() -> &'static str {
    option_env!("OTUBE_AUTH_KEY").unwrap_or("placeholder-key")
}

#[cfg(any(test, target_arch = "wasm32"))]
fn auth_url(path: &str) -> String {
    format!("{}{path}", auth_base())
}

/// URL the OAuth flow redirects the whole window to.
#[cfg(any(test, target_arch = "wasm32"))]
fn authorize_url(provider: &str) -> String {
    auth_url(&format!("/auth/v1/authorize?provider={provider}"))
}

/// Recovery endpoint carrying the address the emailed link returns to.
#[cfg(any(test, target_arch = "wasm32"))]
fn recover_url(origin: &str) -> String {
    auth_url(&format!(
        "/auth/v1/recover?redirect_to={origin}/update-password"
    ))
}

/// Extract the access token from a recovery-link URL fragment, e.g.
/// `#access_token=abc&type=recovery`.
#[cfg(any(test, target_arch = "wasm32"))]
fn token_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .find_map(|pair| pair.strip_prefix("access_token="))
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
}

/// Provider error payloads come in several shapes; prefer the most
/// descriptive field available.
#[cfg(any(test, target_arch = "wasm32"))]
fn identity_error_message(body: &serde_json::Value, status: u16) -> String {
    body.get("error_description")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("msg").and_then(serde_json::Value::as_str))
        .or_else(|| body.get("error").and_then(serde_json::Value::as_str))
        .map_or_else(
            || format!("identity request failed: {status}"),
            ToOwned::to_owned,
        )
}

/// Pull the access token and user out of a token or sign-up response.
/// Confirmation-required sign-ups return the bare user with no token.
#[cfg(any(test, target_arch = "wasm32"))]
fn parse_session(value: serde_json::Value) -> Option<(Option<String>, AuthUser)> {
    let token = value
        .get("access_token")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned);
    if let Some(user_value) = value.get("user") {
        let user = serde_json::from_value(user_value.clone()).ok()?;
        return Some((token, user));
    }
    serde_json::from_value::<AuthUser>(value)
        .ok()
        .map(|user| (None, user))
}

// ===== Session token storage =====

#[cfg(target_arch = "wasm32")]
fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

// ===== Provider calls =====

/// Sign in with email and password. Stores the session token on success.
///
/// # Errors
///
/// Returns the provider's error message, e.g. for bad credentials.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthUser, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&auth_url("/auth/v1/token?grant_type=password"))
            .header("apikey", auth_key())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        if status >= 400 {
            return Err(identity_error_message(&body, status));
        }
        let (token, user) =
            parse_session(body).ok_or_else(|| "unexpected identity response".to_owned())?;
        if let Some(token) = token {
            store_token(&token);
        }
        Ok(user)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account with email and password.
///
/// Returns the new user; when email confirmation is enabled no session
/// token is issued yet.
///
/// # Errors
///
/// Returns the provider's error message, e.g. when the email is taken.
pub async fn sign_up(email: &str, password: &str) -> Result<AuthUser, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&auth_url("/auth/v1/signup"))
            .header("apikey", auth_key())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        if status >= 400 {
            return Err(identity_error_message(&body, status));
        }
        let (token, user) =
            parse_session(body).ok_or_else(|| "unexpected identity response".to_owned())?;
        if let Some(token) = token {
            store_token(&token);
        }
        Ok(user)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Start the Google OAuth flow by redirecting the window to the provider.
pub fn google_sign_in() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&authorize_url("google"));
        }
    }
}

/// Send a password-reset email pointing back at `/update-password`.
///
/// # Errors
///
/// Returns the provider's error message when the request is rejected.
pub async fn send_reset_email(email: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&recover_url(&origin))
            .header("apikey", auth_key())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body: serde_json::Value = resp.json().await.unwrap_or_default();
            return Err(identity_error_message(&body, status));
        }
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = email;
        Err("not available outside the browser".to_owned())
    }
}

/// Adopt the session token carried in a recovery-link URL fragment, if any.
///
/// The emailed reset link lands on `/update-password` with the token in the
/// fragment; storing it lets [`update_password`] authenticate.
pub fn adopt_recovery_session() {
    #[cfg(target_arch = "wasm32")]
    {
        let fragment = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if let Some(token) = token_from_fragment(&fragment) {
            store_token(&token);
        }
    }
}

/// Set a new password for the signed-in (or recovering) user.
///
/// # Errors
///
/// Returns the provider's error message, or a sign-in prompt when no
/// session token is available.
pub async fn update_password(new_password: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let token = stored_token().ok_or_else(|| "No active session. Sign in first.".to_owned())?;
        let payload = serde_json::json!({ "password": new_password });
        let resp = gloo_net::http::Request::put(&auth_url("/auth/v1/user"))
            .header("apikey", auth_key())
            .header("Authorization", &format!("Bearer {token}"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body: serde_json::Value = resp.json().await.unwrap_or_default();
            return Err(identity_error_message(&body, status));
        }
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = new_password;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the user for the stored session token.
///
/// Returns `None` when no token is stored or the token is no longer valid;
/// an invalid token is dropped from storage.
pub async fn current_session() -> Option<AuthUser> {
    #[cfg(target_arch = "wasm32")]
    {
        let token = stored_token()?;
        let resp = gloo_net::http::Request::get(&auth_url("/auth/v1/user"))
            .header("apikey", auth_key())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            clear_token();
            return None;
        }
        resp.json::<AuthUser>().await.ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Sign out: best-effort provider logout, then drop the stored token.
pub async fn sign_out() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(token) = stored_token() {
            let _ = gloo_net::http::Request::post(&auth_url("/auth/v1/logout"))
                .header("apikey", auth_key())
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await;
        }
        clear_token();
    }
}
