// URL detector
// Finds the first URL-shaped substring of a chat message

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::video_metadata::extract_video_id;
use crate::models::lookup::{Provider, UrlCandidate};
use crate::utils::config::DENYLISTED_EXTENSIONS;

// Scheme or bare `www.`, a dotted domain, then an optional tail that may not
// end on `.`, `,` or `:` so trailing punctuation stays out of the match.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:https?|ftp)://|www\.)[\w\-]+(?:\.[\w\-]+)+(?:[\w\-.,@?^=%&:/~+#;]*[\w\-@?^=%&/~+#;])?",
    )
    .expect("url pattern is valid")
});

/// Detect the URL a message should be looked up for
///
/// Only the first match is considered: one message triggers at most one
/// lookup, even when it carries several links.
pub fn detect(text: &str) -> Option<UrlCandidate> {
    let raw = URL_PATTERN.find(text)?.as_str();

    if is_denylisted(raw) {
        return None;
    }

    let url = normalize(raw);
    let provider = if extract_video_id(&url).is_some() {
        Provider::Video
    } else {
        Provider::Generic
    };

    Some(UrlCandidate {
        raw: raw.to_string(),
        url,
        provider,
    })
}

/// Prefix bare `www.` matches with `http://`
fn normalize(raw: &str) -> String {
    if raw.starts_with("www.") {
        format!("http://{}", raw)
    } else {
        raw.to_string()
    }
}

/// Path part of a URL: everything from the first `/` after the host,
/// with query and fragment removed; empty when there is none
fn path_of(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let path = match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "",
    };
    path.split(['?', '#'].as_ref()).next().unwrap_or(path)
}

/// Whether the URL path ends in a media, archive or executable extension
pub fn is_denylisted(url: &str) -> bool {
    let path = path_of(url).to_ascii_lowercase();
    DENYLISTED_EXTENSIONS.iter().any(|ext| {
        path.len() > ext.len()
            && path.ends_with(ext)
            && path.as_bytes()[path.len() - ext.len() - 1] == b'.'
    })
}
