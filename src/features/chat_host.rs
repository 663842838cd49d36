// Chat transport seen from the lookup pipeline

use async_trait::async_trait;

use crate::models::conversation::ConversationId;

/// What the pipeline needs from the chat transport
#[async_trait]
pub trait ChatHost: Send + Sync {
    /// Conversation the user is currently looking at, if any
    fn current_conversation(&self) -> Option<ConversationId>;

    /// Map a server and parsed channel name to a conversation
    fn resolve_conversation(&self, server: &str, channel: &str) -> Option<ConversationId>;

    /// Print a line into a conversation
    async fn emit(&self, conversation: &ConversationId, text: &str) -> anyhow::Result<()>;
}
