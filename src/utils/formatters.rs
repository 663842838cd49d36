// Formatting utilities

use crate::utils::config::OUTPUT_MARKER;
use crate::utils::theme::Theme;

/// Collapse every whitespace run (newlines included) to one space and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format the line emitted for a resolved URL
pub fn format_title_line(theme: &Theme, title: &str, url: &str) -> String {
    format!(
        "{}{}{} {}{}- {}",
        OUTPUT_MARKER, theme.title, title, theme.reset, theme.link, url
    )
}

/// Format a video title so the category stays unstyled next to the styled title
pub fn format_video_title(theme: &Theme, category: &str, title: &str) -> String {
    format!("{}({}){} {}", theme.reset, category, theme.title, title)
}

/// Truncate string to max chars with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Hello\n World "), "Hello World");
        assert_eq!(collapse_whitespace("a\t\t b\r\n\r\nc"), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_format_title_line() {
        let theme = Theme::new("<R>", "<T>", "<L>");
        assert_eq!(
            format_title_line(&theme, "Hello", "http://example.com"),
            "+++\t<T>Hello <R><L>- http://example.com"
        );
        assert_eq!(
            format_title_line(&Theme::plain(), "Hello", "http://example.com"),
            "+++\tHello - http://example.com"
        );
    }

    #[test]
    fn test_format_video_title() {
        let theme = Theme::new("<R>", "<T>", "<L>");
        assert_eq!(format_video_title(&theme, "Music", "Song"), "<R>(Music)<T> Song");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("日本語のタイトル", 6), "日本語...");
    }
}
