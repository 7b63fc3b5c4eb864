//! YouTube URL helpers.
//!
//! DESIGN
//! ======
//! `extract_video_id` accepts the many shapes users paste: full watch URLs,
//! short `youtu.be` links, embed and shorts paths, and bare fragments
//! without a scheme. URLs with a scheme are parsed into host/path/query and
//! checked structurally; everything else falls back to marker scanning.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

/// Pull the canonical 11-character video ID out of a YouTube URL.
///
/// Returns `None` when no plausible ID is present.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<String> {
    match structured_parts(url) {
        Some(parts) => from_structured(url, &parts),
        None => from_loose(url),
    }
}

/// Thumbnail image URL for a video ID.
#[must_use]
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn is_video_id(s: &str) -> bool {
    s.len() == 11 && s.bytes().all(is_id_byte)
}

struct UrlParts<'a> {
    host: &'a str,
    path: &'a str,
    query: &'a str,
}

/// Split a URL with an explicit scheme into host, path, and query.
/// Returns `None` for scheme-less input, which takes the loose path.
fn structured_parts(url: &str) -> Option<UrlParts<'_>> {
    let scheme_end = url.find("://")?;
    let rest = &url[scheme_end + 3..];
    let rest = &rest[..rest.find('#').unwrap_or(rest.len())];

    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host_port = authority.rsplit('@').next().unwrap_or(authority);
    let host = host_port.split(':').next().unwrap_or(host_port);
    let host = host.strip_prefix("www.").unwrap_or(host);

    let after = &rest[authority_end..];
    let (path, query) = match after.find('?') {
        Some(q) => (&after[..q], &after[q + 1..]),
        None => (after, ""),
    };
    Some(UrlParts { host, path, query })
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

fn from_structured(url: &str, parts: &UrlParts<'_>) -> Option<String> {
    if let Some(v) = query_param(parts.query, "v") {
        if is_video_id(v) {
            return Some(v.to_owned());
        }
    }

    let segments: Vec<&str> = parts.path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.host == "youtu.be" {
        if let Some(first) = segments.first() {
            if is_video_id(first) {
                return Some((*first).to_owned());
            }
        }
    }

    if let Some(idx) = segments
        .iter()
        .position(|segment| *segment == "embed" || *segment == "shorts")
    {
        if let Some(next) = segments.get(idx + 1) {
            if is_video_id(next) {
                return Some((*next).to_owned());
            }
        }
    }

    bounded_token(url).map(ToOwned::to_owned)
}

/// Last 11 characters of the first ID-character run of length >= 11. The
/// run must end at a non-ID character or the end of the string, so longer
/// runs contribute their tail rather than their head.
fn bounded_token(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    let mut run_start = None;
    for (i, &b) in bytes.iter().enumerate() {
        if is_id_byte(b) {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            if i - start >= 11 {
                return Some(&url[i - 11..i]);
            }
        }
    }
    if let Some(start) = run_start {
        if bytes.len() - start >= 11 {
            return Some(&url[bytes.len() - 11..]);
        }
    }
    None
}

/// Scheme-less fallback: probe known markers in priority order, each
/// requiring exactly 11 ID characters to follow.
fn from_loose(url: &str) -> Option<String> {
    if let Some(id) = find_v_param(url) {
        return Some(id.to_owned());
    }
    for marker in ["youtu.be/", "embed/", "shorts/"] {
        if let Some(id) = find_after(url, marker) {
            return Some(id.to_owned());
        }
    }
    None
}

fn find_v_param(url: &str) -> Option<&str> {
    let bytes = url.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'?' || b == b'&') && url[i + 1..].starts_with("v=") {
            let start = i + 3;
            if let Some(candidate) = url.get(start..start + 11) {
                if candidate.bytes().all(is_id_byte) {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

fn find_after<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let mut from = 0;
    while let Some(found) = url[from..].find(marker) {
        let start = from + found + marker.len();
        if let Some(candidate) = url.get(start..start + 11) {
            if candidate.bytes().all(is_id_byte) {
                return Some(candidate);
            }
        }
        from = from + found + 1;
    }
    None
}
