// Video host metadata feed
// Watch-link recognition and parsing of the feed entry

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::LookupError;
use crate::utils::config::VIDEO_HOST;

static WATCH_URL: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)^(?:https?://)?(?:www\.)?{}/watch\?v=([a-z0-9_\-]{{11,13}})(?:$|[&#])",
        regex::escape(VIDEO_HOST)
    );
    Regex::new(&pattern).expect("watch url pattern is valid")
});

/// Category and title of a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub category: String,
}

/// Extract the video id from a watch URL
pub fn extract_video_id(url: &str) -> Option<String> {
    WATCH_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Metadata endpoint for a video id
pub fn metadata_url(base: &str, video_id: &str) -> String {
    format!("{}/{}?alt=json", base.trim_end_matches('/'), video_id)
}

/// Parse a feed response body into the video's category and title
pub fn parse_metadata(body: &[u8]) -> Result<VideoMetadata, LookupError> {
    let feed: Feed =
        serde_json::from_slice(body).map_err(|e| LookupError::MalformedMetadata(e.to_string()))?;

    let category = feed
        .entry
        .media_group
        .categories
        .into_iter()
        .next()
        .map(|c| c.label)
        .ok_or_else(|| LookupError::MalformedMetadata("entry has no category".to_string()))?;

    Ok(VideoMetadata {
        title: feed.entry.title.text,
        category,
    })
}

// Feed response structures
#[derive(Debug, Deserialize)]
struct Feed {
    entry: FeedEntry,
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    title: TextNode,
    #[serde(rename = "media$group")]
    media_group: MediaGroup,
}

#[derive(Debug, Deserialize)]
struct TextNode {
    #[serde(rename = "$t")]
    text: String,
}

#[derive(Debug, Deserialize)]
struct MediaGroup {
    #[serde(rename = "media$category", default)]
    categories: Vec<MediaCategory>,
}

#[derive(Debug, Deserialize)]
struct MediaCategory {
    label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("http://www.videohost.example/watch?v=abcdefghijk"),
            Some("abcdefghijk".to_string())
        );
        assert_eq!(
            extract_video_id("https://VIDEOHOST.example/watch?v=dQw4w9WgXcQ&t=42"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("http://videohost.example/watch?v=abc-def_ghijk"),
            Some("abc-def_ghijk".to_string())
        );
        assert_eq!(extract_video_id("http://videohost.example/watch?v=short"), None);
        assert_eq!(
            extract_video_id("http://videohost.example/watch?v=abcdefghijklmnopq"),
            None
        );
        assert_eq!(
            extract_video_id("http://videohost.example/watch?v=abcdefghijkl#t=3"),
            Some("abcdefghijkl".to_string())
        );
        assert_eq!(extract_video_id("http://othersite.example/watch?v=abcdefghijk"), None);
        assert_eq!(extract_video_id("http://videohost.example/channel/abcdefghijk"), None);
    }

    #[test]
    fn test_metadata_url() {
        assert_eq!(
            metadata_url("http://metadata.videohost.example/feeds/videos/", "abcdefghijk"),
            "http://metadata.videohost.example/feeds/videos/abcdefghijk?alt=json"
        );
    }

    #[test]
    fn test_parse_metadata() {
        let body = br#"{"entry": {
            "title": {"$t": "Never Gonna Give You Up"},
            "media$group": {"media$category": [{"label": "Music", "term": "Music"}]}
        }}"#;
        let meta = parse_metadata(body).unwrap();
        assert_eq!(meta.title, "Never Gonna Give You Up");
        assert_eq!(meta.category, "Music");
    }

    #[test]
    fn test_parse_metadata_missing_fields() {
        let no_category = br#"{"entry": {"title": {"$t": "x"}, "media$group": {"media$category": []}}}"#;
        assert!(matches!(
            parse_metadata(no_category),
            Err(LookupError::MalformedMetadata(_))
        ));

        let no_title = br#"{"entry": {"media$group": {"media$category": [{"label": "Music"}]}}}"#;
        assert!(matches!(
            parse_metadata(no_title),
            Err(LookupError::MalformedMetadata(_))
        ));

        assert!(parse_metadata(b"<html>not json</html>").is_err());
    }
}
