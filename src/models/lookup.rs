// Lookup data model
// Candidates, in-flight lookups and fetch results

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::conversation::ConversationId;

/// Which kind of link a candidate points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Generic,
    Video,
}

/// Extraction algorithm chosen at dispatch time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `<title>` element from the first bytes of the page
    Generic,
    /// Category and title from the video metadata feed
    VideoMetadata,
}

/// A URL-shaped substring found in a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCandidate {
    /// Text exactly as matched in the message
    pub raw: String,
    /// Protocol-prefixed form, used as the registry key
    pub url: String,
    pub provider: Provider,
}

/// Registry record of an in-flight fetch
#[derive(Debug, Clone)]
pub struct PendingLookup {
    pub url: String,
    pub conversation: ConversationId,
    pub created_at: DateTime<Utc>,
    pub strategy: Strategy,
}

impl PendingLookup {
    pub fn new(url: impl Into<String>, conversation: ConversationId, strategy: Strategy) -> Self {
        Self {
            url: url.into(),
            conversation,
            created_at: Utc::now(),
            strategy,
        }
    }

    /// Milliseconds since the lookup was dispatched
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.created_at).num_milliseconds()
    }
}

/// Outbound fetch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// `None` reads the whole body
    pub max_bytes: Option<usize>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Success,
    Timeout,
    Error,
}

/// Raw outcome of a fetch, consumed once by the result dispatcher
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: FetchStatus,
    /// HTTP status code when a response was received
    pub code: Option<u16>,
    pub body: Vec<u8>,
}

impl FetchResult {
    pub fn success(code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: FetchStatus::Success,
            code: Some(code),
            body: body.into(),
        }
    }

    pub fn error(code: Option<u16>) -> Self {
        Self {
            status: FetchStatus::Error,
            code,
            body: Vec::new(),
        }
    }

    pub fn timeout() -> Self {
        Self {
            status: FetchStatus::Timeout,
            code: None,
            body: Vec::new(),
        }
    }
}

/// Display string produced by an extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTitle(pub String);

impl ExtractedTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_result_constructors() {
        let ok = FetchResult::success(200, b"<title>x</title>".to_vec());
        assert_eq!(ok.status, FetchStatus::Success);
        assert_eq!(ok.code, Some(200));

        let err = FetchResult::error(Some(404));
        assert_eq!(err.status, FetchStatus::Error);
        assert!(err.body.is_empty());

        assert_eq!(FetchResult::timeout().status, FetchStatus::Timeout);
    }

    #[test]
    fn test_pending_lookup_age() {
        let lookup = PendingLookup::new(
            "http://example.com",
            ConversationId::new("s", "c"),
            Strategy::Generic,
        );
        assert!(lookup.age_ms() >= 0);
    }
}
