/// Video identifier extraction for Video Ask
use regex::Regex;
use std::sync::OnceLock;

/// Identifier shown when the active tab is not a recognisable video page
pub const FALLBACK_VIDEO_ID: &str = "iv-5mZ_9CPY";

/// Length of every video identifier
pub const VIDEO_ID_LEN: usize = 11;

const VIDEO_URL_PATTERN: &str = r"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/|y2u\.be/)([a-zA-Z0-9_-]{11})";

fn video_url_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(VIDEO_URL_PATTERN) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Invalid video URL pattern: {}", e);
            None
        }
    })
    .as_ref()
}

/// Extract the video identifier from a URL
///
/// One pattern with alternation covers every shape; the leftmost match wins:
/// - youtube.com/<segment>/<anything>/<id>
/// - youtube.com/v/<id>, youtube.com/e/<id>, youtube.com/embed/<id>
/// - youtube.com/...?v=<id> or &v=<id>
/// - youtu.be/<id>
/// - y2u.be/<id>
///
/// Examples:
/// - https://www.youtube.com/watch?v=dQw4w9WgXcQ → dQw4w9WgXcQ
/// - https://youtu.be/dQw4w9WgXcQ → dQw4w9WgXcQ
/// - https://example.com/ → None
pub fn extract_video_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    video_url_regex()?
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the video identifier, or fall back to the default one
pub fn video_id_or_default(url: Option<&str>) -> String {
    video_id_or(url, FALLBACK_VIDEO_ID)
}

/// Extract the video identifier, or fall back to `fallback`
pub fn video_id_or(url: Option<&str>, fallback: &str) -> String {
    url.and_then(extract_video_id)
        .unwrap_or_else(|| fallback.to_string())
}

/// Check that a string is a well-formed video identifier
pub fn is_valid_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
