use super::*;

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn auth_url_joins_base_and_path() {
    assert_eq!(
        auth_url("/auth/v1/signup"),
        format!("{}/auth/v1/signup", auth_base())
    );
}

#[test]
fn authorize_url_names_the_provider() {
    assert!(authorize_url("google").ends_with("/auth/v1/authorize?provider=google"));
}

#[test]
fn recover_url_carries_redirect_target() {
    let url = recover_url("https://otube.example");
    assert!(url.contains("/auth/v1/recover?redirect_to=https://otube.example/update-password"));
}

// =============================================================
// Recovery fragment parsing
// =============================================================

#[test]
fn token_from_fragment_extracts_access_token() {
    assert_eq!(
        token_from_fragment("#access_token=abc123&type=recovery"),
        Some("abc123".to_owned())
    );
    assert_eq!(
        token_from_fragment("#type=recovery&access_token=zzz"),
        Some("zzz".to_owned())
    );
}

#[test]
fn token_from_fragment_rejects_missing_or_empty() {
    assert_eq!(token_from_fragment(""), None);
    assert_eq!(token_from_fragment("#type=recovery"), None);
    assert_eq!(token_from_fragment("#access_token="), None);
}

// =============================================================
// Error message selection
// =============================================================

#[test]
fn error_message_prefers_description() {
    let body = serde_json::json!({
        "error": "invalid_grant",
        "error_description": "Invalid login credentials"
    });
    assert_eq!(
        identity_error_message(&body, 400),
        "Invalid login credentials"
    );
}

#[test]
fn error_message_falls_back_through_fields() {
    let msg_body = serde_json::json!({ "msg": "User already registered" });
    assert_eq!(identity_error_message(&msg_body, 400), "User already registered");

    let error_body = serde_json::json!({ "error": "server_error" });
    assert_eq!(identity_error_message(&error_body, 500), "server_error");

    let empty = serde_json::json!({});
    assert_eq!(identity_error_message(&empty, 502), "identity request failed: 502");
}

// =============================================================
// Session payload parsing
// =============================================================

#[test]
fn parse_session_reads_token_response() {
    let body = serde_json::json!({
        "access_token": "tok-1",
        "token_type": "bearer",
        "user": { "id": "u-1", "email": "a@b.com" }
    });
    let (token, user) = parse_session(body).unwrap();
    assert_eq!(token.as_deref(), Some("tok-1"));
    assert_eq!(user.id, "u-1");
}

#[test]
fn parse_session_reads_bare_user() {
    let body = serde_json::json!({ "id": "u-2", "email": "new@b.com" });
    let (token, user) = parse_session(body).unwrap();
    assert!(token.is_none());
    assert_eq!(user.email.as_deref(), Some("new@b.com"));
}

#[test]
fn parse_session_rejects_malformed_payloads() {
    assert!(parse_session(serde_json::json!({})).is_none());
    assert!(parse_session(serde_json::json!({ "user": 42 })).is_none());
}
