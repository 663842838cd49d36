// Message handler
// Entry point for incoming chat lines: focus check, URL detection, dispatch

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::LookupError;
use crate::features::chat_host::ChatHost;
use crate::features::fetch_dispatcher::FetchDispatcher;
use crate::features::url_detector::detect;

pub struct MessageHandler {
    host: Arc<dyn ChatHost>,
    dispatcher: Arc<FetchDispatcher>,
}

impl MessageHandler {
    pub fn new(host: Arc<dyn ChatHost>, dispatcher: Arc<FetchDispatcher>) -> Self {
        Self { host, dispatcher }
    }

    /// Handle one incoming line
    ///
    /// `channel_raw` is the part of the line naming the target; its last token
    /// is the channel. Only messages in the focused conversation are looked at.
    /// Never waits on the fetch.
    pub fn on_message(
        &self,
        server_id: &str,
        channel_raw: &str,
        raw_line: &str,
    ) -> Option<JoinHandle<()>> {
        let channel = parse_channel(channel_raw)?;
        let conversation = self.host.resolve_conversation(server_id, channel)?;

        if self.host.current_conversation().as_ref() != Some(&conversation) {
            return None;
        }

        match detect(raw_line) {
            Some(candidate) => self.dispatcher.dispatch(candidate, conversation),
            None => {
                trace!("{} in {}", LookupError::MalformedUrl, conversation);
                None
            }
        }
    }
}

/// Channel name: last whitespace-separated token of the target part
pub fn parse_channel(channel_raw: &str) -> Option<&str> {
    channel_raw.split_whitespace().last()
}

/// Split an IRC `:prefix PRIVMSG #chan :text` line into its target part and text
///
/// Discord delivers channel and content separately, so only IRC-shaped
/// input (the tests) goes through here.
#[cfg(test)]
pub fn split_privmsg(raw: &str) -> Option<(&str, &str)> {
    let line = raw.strip_prefix(':').unwrap_or(raw);
    let (head, text) = line.split_once(" :")?;

    let mut tokens = head.split_whitespace();
    if raw.starts_with(':') {
        tokens.next()?;
    }
    let command = tokens.next()?;
    tokens.next()?;

    command.eq_ignore_ascii_case("PRIVMSG").then_some((head, text))
}
