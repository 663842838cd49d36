// Title extractors
// Turn a fetched body into the display title for one strategy

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::api::video_metadata::parse_metadata;
use crate::error::LookupError;
use crate::models::lookup::{ExtractedTitle, FetchResult, Strategy};
use crate::utils::formatters::{collapse_whitespace, format_video_title};
use crate::utils::theme::Theme;

// Byte-level so a body truncated mid character still matches.
static TITLE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is-u)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("title pattern is valid")
});

pub trait TitleExtractor: Send + Sync {
    fn extract(&self, result: &FetchResult) -> Result<ExtractedTitle, LookupError>;
}

/// `<title>` element of an HTML page
pub struct GenericExtractor;

impl TitleExtractor for GenericExtractor {
    fn extract(&self, result: &FetchResult) -> Result<ExtractedTitle, LookupError> {
        let raw = TITLE_TAG
            .captures(&result.body)
            .and_then(|caps| caps.get(1))
            .ok_or(LookupError::NoTitle)?;

        let text = String::from_utf8_lossy(raw.as_bytes());
        let title = collapse_whitespace(&html_escape::decode_html_entities(&text));

        if title.is_empty() {
            return Err(LookupError::NoTitle);
        }
        Ok(ExtractedTitle(title))
    }
}

/// Category-prefixed title from the video metadata feed
pub struct VideoMetadataExtractor {
    theme: Theme,
}

impl VideoMetadataExtractor {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl TitleExtractor for VideoMetadataExtractor {
    fn extract(&self, result: &FetchResult) -> Result<ExtractedTitle, LookupError> {
        let meta = parse_metadata(&result.body)?;
        let title = collapse_whitespace(&meta.title);
        if title.is_empty() {
            return Err(LookupError::MalformedMetadata("empty title".to_string()));
        }
        Ok(ExtractedTitle(format_video_title(
            &self.theme,
            &collapse_whitespace(&meta.category),
            &title,
        )))
    }
}

/// Extractor for the strategy recorded at dispatch time
pub fn extractor_for(strategy: Strategy, theme: &Theme) -> Box<dyn TitleExtractor> {
    match strategy {
        Strategy::Generic => Box::new(GenericExtractor),
        Strategy::VideoMetadata => Box::new(VideoMetadataExtractor::new(theme.clone())),
    }
}
