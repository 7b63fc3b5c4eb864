use super::*;

const ID: &str = "dQw4w9WgXcQ";

// =============================================================
// Structured URLs (scheme present)
// =============================================================

#[test]
fn watch_url_reads_v_param() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn extra_query_params_do_not_interfere() {
    assert_eq!(
        extract_video_id("https://youtube.com/watch?t=42s&v=dQw4w9WgXcQ&list=PL").as_deref(),
        Some(ID)
    );
}

#[test]
fn short_link_reads_first_path_segment() {
    assert_eq!(
        extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
    assert_eq!(
        extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=10").as_deref(),
        Some(ID)
    );
}

#[test]
fn embed_and_shorts_paths_read_next_segment() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
    assert_eq!(
        extract_video_id("https://youtube.com/shorts/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn www_and_port_are_stripped_from_host() {
    assert_eq!(
        extract_video_id("https://www.youtu.be:443/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn invalid_v_param_falls_through_to_path() {
    assert_eq!(
        extract_video_id("https://youtu.be/dQw4w9WgXcQ?v=short").as_deref(),
        Some(ID)
    );
}

// =============================================================
// Bounded-token fallback inside structured URLs
// =============================================================

#[test]
fn long_run_contributes_its_tail() {
    // "clip-dQw4w9WgXcQ" is one 16-character run; the ID is its tail.
    assert_eq!(
        extract_video_id("https://example.com/clip-dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn exact_run_bounded_by_punctuation() {
    assert_eq!(
        extract_video_id("https://example.com/v/dQw4w9WgXcQ.html").as_deref(),
        Some(ID)
    );
}

#[test]
fn no_eleven_char_run_means_no_id() {
    assert_eq!(extract_video_id("https://example.com/short"), None);
}

#[test]
fn multibyte_characters_break_runs_safely() {
    assert_eq!(
        extract_video_id("https://example.com/vid\u{e9}o-dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

// =============================================================
// Loose fallback (no scheme)
// =============================================================

#[test]
fn loose_watch_url_matches_v_marker() {
    assert_eq!(
        extract_video_id("youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn loose_marker_takes_exactly_eleven_chars() {
    // Twelve ID characters after the marker: the first eleven win.
    assert_eq!(
        extract_video_id("watch?v=dQw4w9WgXcQQ").as_deref(),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(extract_video_id("watch?v=short"), None);
}

#[test]
fn loose_scan_skips_failed_marker_positions() {
    assert_eq!(
        extract_video_id("clip?v=tooShort&v=dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn loose_short_and_shorts_markers() {
    assert_eq!(
        extract_video_id("youtu.be/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
    assert_eq!(
        extract_video_id("youtube.com/shorts/dQw4w9WgXcQ").as_deref(),
        Some(ID)
    );
}

#[test]
fn bare_id_without_markers_is_rejected() {
    assert_eq!(extract_video_id("dQw4w9WgXcQ"), None);
    assert_eq!(extract_video_id(""), None);
}

// =============================================================
// Thumbnails
// =============================================================

#[test]
fn thumbnail_url_uses_hqdefault() {
    assert_eq!(
        thumbnail_url("dQw4w9WgXcQ"),
        "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
    );
}
