// Lookup error taxonomy
// None of these reach the chat; they are logged where they are handled

use thiserror::Error;

/// Reasons a message does not end in a title line
#[derive(Error, Debug)]
pub enum LookupError {
    /// No URL-shaped substring, or the match was denylisted
    #[error("no usable URL in message")]
    MalformedUrl,

    /// A lookup for the same URL is already pending
    #[error("lookup already in flight for {0}")]
    DuplicateInFlight(String),

    /// Network error or non-success HTTP status
    #[error("fetch failed for {url} (status: {code:?})")]
    FetchFailure { url: String, code: Option<u16> },

    /// Fetch exceeded the wall-clock bound
    #[error("fetch timed out for {0}")]
    FetchTimeout(String),

    /// Video metadata lacked the expected fields
    #[error("malformed video metadata: {0}")]
    MalformedMetadata(String),

    /// Completion arrived for a URL the registry no longer tracks
    #[error("stale completion for {0}")]
    StaleCompletion(String),

    /// Page fetched but no non-empty title was found
    #[error("no title found")]
    NoTitle,

    /// The host refused the title line
    #[error("failed to emit title line: {0}")]
    Emit(#[from] anyhow::Error),
}
