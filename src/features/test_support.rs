// In-memory host and fetcher for exercising the pipeline without a network

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::http_fetcher::Fetcher;
use crate::features::chat_host::ChatHost;
use crate::models::conversation::ConversationId;
use crate::models::lookup::{FetchRequest, FetchResult};

/// Host that records every emitted line
#[derive(Default)]
pub struct RecordingHost {
    focus: Mutex<Option<ConversationId>>,
    emitted: Mutex<Vec<(ConversationId, String)>>,
    fail: bool,
}

impl RecordingHost {
    pub fn focused_on(conversation: ConversationId) -> Self {
        Self {
            focus: Mutex::new(Some(conversation)),
            ..Self::default()
        }
    }

    /// Host whose emit always errors
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn set_focus(&self, conversation: Option<ConversationId>) {
        *self.focus.lock().unwrap() = conversation;
    }

    pub fn emitted(&self) -> Vec<(ConversationId, String)> {
        self.emitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatHost for RecordingHost {
    fn current_conversation(&self) -> Option<ConversationId> {
        self.focus.lock().unwrap().clone()
    }

    fn resolve_conversation(&self, server: &str, channel: &str) -> Option<ConversationId> {
        Some(ConversationId::new(server, channel))
    }

    async fn emit(&self, conversation: &ConversationId, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("host is gone");
        }
        self.emitted
            .lock()
            .unwrap()
            .push((conversation.clone(), text.to_string()));
        Ok(())
    }
}

/// Fetcher serving canned results; unknown URLs fail
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, FetchResult>,
    delay: Duration,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, result: FetchResult) -> Self {
        self.responses.insert(url.to_string(), result);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay_for(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, request: &FetchRequest) -> FetchResult {
        self.requests.lock().unwrap().push(request.clone());

        let delay = self.delays.get(&request.url).copied().unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| FetchResult::error(None))
    }
}
