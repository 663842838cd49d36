// Conversation identity
// A conversation is the server + channel pairing a title line is emitted to

use std::fmt;

/// Logical message destination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationId {
    pub server: String,
    pub channel: String,
}

impl ConversationId {
    pub fn new(server: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            channel: channel.into(),
        }
    }

    /// Parse the `<server>/<channel>` form used by `URL_TITLE_FOCUS`
    pub fn parse(input: &str) -> Option<Self> {
        let (server, channel) = input.trim().split_once('/')?;
        if server.is_empty() || channel.is_empty() || channel.contains('/') {
            return None;
        }
        Some(Self::new(server, channel))
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.server, self.channel)
    }
}
