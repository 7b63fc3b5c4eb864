use super::*;

// =============================================================================
// validate_url
// =============================================================================

#[test]
fn accepts_a_watch_url() {
    let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    assert_eq!(validate_url(url), Ok(url.to_owned()));
}

#[test]
fn accepts_a_short_link() {
    let url = "https://youtu.be/dQw4w9WgXcQ";
    assert_eq!(validate_url(url), Ok(url.to_owned()));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(
        validate_url("  https://youtu.be/dQw4w9WgXcQ \n"),
        Ok("https://youtu.be/dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn rejects_a_link_without_a_video_id() {
    assert_eq!(
        validate_url("https://example.com/watch?v=short"),
        Err(INVALID_URL_MESSAGE)
    );
}

#[test]
fn rejects_empty_input() {
    assert!(validate_url("   ").is_err());
}
