// Color tokens for title lines
// The tokens are opaque to the pipeline; the host decides what they render as

/// Styling tokens used when formatting a title line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub reset: String,
    pub title: String,
    pub link: String,
}

impl Theme {
    pub fn new(reset: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            reset: reset.into(),
            title: title.into(),
            link: link.into(),
        }
    }

    /// No styling at all (Discord renders raw escapes as garbage)
    pub fn plain() -> Self {
        Self::new("", "", "")
    }

    /// ANSI SGR codes: bold title, default-colored link
    pub fn ansi() -> Self {
        Self::new("\x1b[0m", "\x1b[1m", "\x1b[39m")
    }

    /// Look up a theme by its configuration name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "plain" | "none" => Some(Self::plain()),
            "ansi" => Some(Self::ansi()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}
