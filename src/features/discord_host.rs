// Discord transport for the lookup pipeline
// A conversation is a guild + text channel; one channel at a time holds focus

use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Context as _;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use crate::features::chat_host::ChatHost;
use crate::models::conversation::ConversationId;
use crate::utils::formatters::truncate;

/// Discord rejects longer messages
const MAX_MESSAGE_LEN: usize = 2000;

pub struct DiscordHost {
    http: Arc<serenity::Http>,
    focus: RwLock<Option<ConversationId>>,
}

impl DiscordHost {
    pub fn new(http: Arc<serenity::Http>, focus: Option<ConversationId>) -> Self {
        Self {
            http,
            focus: RwLock::new(focus),
        }
    }

    /// Replace the focused conversation, returning the previous one
    pub fn set_focus(&self, conversation: Option<ConversationId>) -> Option<ConversationId> {
        let mut focus = self.focus.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *focus, conversation)
    }
}

#[async_trait]
impl ChatHost for DiscordHost {
    fn current_conversation(&self) -> Option<ConversationId> {
        self.focus
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn resolve_conversation(&self, server: &str, channel: &str) -> Option<ConversationId> {
        conversation_for(server, channel)
    }

    async fn emit(&self, conversation: &ConversationId, text: &str) -> anyhow::Result<()> {
        let channel_id: u64 = conversation
            .channel
            .parse()
            .with_context(|| format!("{} is not a Discord channel", conversation))?;

        serenity::ChannelId::new(channel_id)
            .say(&self.http, truncate(text, MAX_MESSAGE_LEN))
            .await?;
        Ok(())
    }
}

/// Discord conversations need a non-zero numeric channel id
pub fn conversation_for(server: &str, channel: &str) -> Option<ConversationId> {
    match channel.parse::<u64>() {
        Ok(id) if id != 0 && !server.is_empty() => Some(ConversationId::new(server, channel)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_for() {
        assert_eq!(
            conversation_for("1", "2"),
            Some(ConversationId::new("1", "2"))
        );
        assert_eq!(conversation_for("1", "0"), None);
        assert_eq!(conversation_for("1", "#general"), None);
        assert_eq!(conversation_for("", "2"), None);
    }

    #[test]
    fn test_focus_switching() {
        let host = DiscordHost::new(Arc::new(serenity::Http::new("")), None);
        assert_eq!(host.current_conversation(), None);

        let first = ConversationId::new("1", "2");
        assert_eq!(host.set_focus(Some(first.clone())), None);
        assert_eq!(host.current_conversation(), Some(first.clone()));
        assert_eq!(host.set_focus(None), Some(first));
        assert_eq!(host.current_conversation(), None);
    }
}
