// Centralized configuration for the URL title bot

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::models::conversation::ConversationId;
use crate::utils::theme::Theme;

/// Wall-clock bound on a single fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Bytes read from a generic page; enough for the `<title>` of virtually any page
pub const GENERIC_READ_LIMIT: usize = 4096;

/// Literal prefix of every emitted title line
pub const OUTPUT_MARKER: &str = "+++\t";

/// Host serving the video watch pages
pub const VIDEO_HOST: &str = "videohost.example";

/// Default base of the video metadata feed
pub const DEFAULT_METADATA_BASE: &str = "http://metadata.videohost.example/feeds/videos";

pub const DEFAULT_USER_AGENT: &str = "url-title-bot/0.1";

/// File types that are never fetched (matched as a `.ext` suffix of the path)
pub const DENYLISTED_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "bmp", "gif", "webp",
    // video
    "avi", "mpg", "flv", "3gp", "mp4", "mkv", "mov", "webm",
    // audio
    "mp3", "flac", "ogg", "wav",
    // archives
    "tar.gz", "tar.bz2", "zip", "7z", "rar",
    // executables
    "exe", "msi", "dmg",
];

/// Discord embed colors
pub mod colors {
    pub const PRIMARY: u32 = 0x00bfff;
    pub const SUCCESS: u32 = 0x2ecc71;
    pub const WARNING: u32 = 0xffa500;
}

/// Runtime settings, read from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub fetch_timeout: Duration,
    pub read_limit: usize,
    pub video_metadata: bool,
    pub metadata_base: String,
    pub user_agent: String,
    pub theme: Theme,
    pub focus: Option<ConversationId>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch_timeout: FETCH_TIMEOUT,
            read_limit: GENERIC_READ_LIMIT,
            video_metadata: true,
            metadata_base: DEFAULT_METADATA_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            theme: Theme::plain(),
            focus: None,
        }
    }
}

impl Settings {
    /// Load settings from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load settings from any key lookup; unset keys keep their defaults
    pub fn from_source<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = get("URL_TITLE_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("URL_TITLE_TIMEOUT_SECS must be a number, got {:?}", raw))?;
            if secs == 0 {
                return Err(anyhow!("URL_TITLE_TIMEOUT_SECS must be greater than zero"));
            }
            settings.fetch_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get("URL_TITLE_READ_LIMIT") {
            let limit: usize = raw
                .trim()
                .parse()
                .with_context(|| format!("URL_TITLE_READ_LIMIT must be a number, got {:?}", raw))?;
            if limit == 0 {
                return Err(anyhow!("URL_TITLE_READ_LIMIT must be greater than zero"));
            }
            settings.read_limit = limit;
        }

        if let Some(raw) = get("URL_TITLE_VIDEO_METADATA") {
            settings.video_metadata = parse_bool(&raw)
                .ok_or_else(|| anyhow!("URL_TITLE_VIDEO_METADATA must be true or false, got {:?}", raw))?;
        }

        if let Some(base) = get("URL_TITLE_METADATA_BASE") {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                return Err(anyhow!("URL_TITLE_METADATA_BASE must not be empty"));
            }
            settings.metadata_base = base.to_string();
        }

        if let Some(agent) = get("URL_TITLE_USER_AGENT") {
            if !agent.trim().is_empty() {
                settings.user_agent = agent.trim().to_string();
            }
        }

        if let Some(name) = get("URL_TITLE_THEME") {
            settings.theme = Theme::by_name(&name)
                .ok_or_else(|| anyhow!("Unknown URL_TITLE_THEME {:?} (expected plain or ansi)", name))?;
        }

        if let Some(raw) = get("URL_TITLE_FOCUS") {
            settings.focus = Some(
                ConversationId::parse(&raw)
                    .ok_or_else(|| anyhow!("URL_TITLE_FOCUS must look like <guild>/<channel>, got {:?}", raw))?,
            );
        }

        Ok(settings)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_source(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings.fetch_timeout, Duration::from_secs(15));
        assert_eq!(settings.read_limit, 4096);
        assert!(settings.video_metadata);
        assert_eq!(settings.metadata_base, DEFAULT_METADATA_BASE);
        assert_eq!(settings.theme, Theme::plain());
        assert!(settings.focus.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("URL_TITLE_TIMEOUT_SECS", "5"),
            ("URL_TITLE_READ_LIMIT", "1024"),
            ("URL_TITLE_VIDEO_METADATA", "off"),
            ("URL_TITLE_METADATA_BASE", "http://localhost:9000/feeds/"),
            ("URL_TITLE_THEME", "ansi"),
            ("URL_TITLE_FOCUS", "42/99"),
        ])
        .unwrap();
        assert_eq!(settings.fetch_timeout, Duration::from_secs(5));
        assert_eq!(settings.read_limit, 1024);
        assert!(!settings.video_metadata);
        assert_eq!(settings.metadata_base, "http://localhost:9000/feeds");
        assert_eq!(settings.theme, Theme::ansi());
        assert_eq!(settings.focus, Some(ConversationId::new("42", "99")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(settings_from(&[("URL_TITLE_TIMEOUT_SECS", "soon")]).is_err());
        assert!(settings_from(&[("URL_TITLE_TIMEOUT_SECS", "0")]).is_err());
        assert!(settings_from(&[("URL_TITLE_VIDEO_METADATA", "maybe")]).is_err());
        assert!(settings_from(&[("URL_TITLE_THEME", "neon")]).is_err());
        assert!(settings_from(&[("URL_TITLE_FOCUS", "nochannel")]).is_err());
    }
}
