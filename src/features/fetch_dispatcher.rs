// Fetch dispatcher
// Picks the strategy for a candidate and launches its bounded fetch

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::http_fetcher::Fetcher;
use crate::api::video_metadata::{extract_video_id, metadata_url};
use crate::error::LookupError;
use crate::features::registry::ResolutionRegistry;
use crate::features::result_dispatcher::ResultDispatcher;
use crate::models::conversation::ConversationId;
use crate::models::lookup::{FetchRequest, FetchResult, Provider, Strategy, UrlCandidate};
use crate::utils::config::Settings;

pub struct FetchDispatcher {
    registry: Arc<ResolutionRegistry>,
    fetcher: Arc<dyn Fetcher>,
    results: Arc<ResultDispatcher>,
    settings: Settings,
}

impl FetchDispatcher {
    pub fn new(
        registry: Arc<ResolutionRegistry>,
        fetcher: Arc<dyn Fetcher>,
        results: Arc<ResultDispatcher>,
        settings: Settings,
    ) -> Self {
        Self {
            registry,
            fetcher,
            results,
            settings,
        }
    }

    /// Strategy and outbound request for a candidate
    pub fn plan(&self, candidate: &UrlCandidate) -> (Strategy, FetchRequest) {
        if self.settings.video_metadata && candidate.provider == Provider::Video {
            if let Some(id) = extract_video_id(&candidate.url) {
                return (
                    Strategy::VideoMetadata,
                    FetchRequest {
                        url: metadata_url(&self.settings.metadata_base, &id),
                        max_bytes: None,
                        timeout: self.settings.fetch_timeout,
                    },
                );
            }
        }

        (
            Strategy::Generic,
            FetchRequest {
                url: candidate.url.clone(),
                max_bytes: Some(self.settings.read_limit),
                timeout: self.settings.fetch_timeout,
            },
        )
    }

    /// Start a lookup for `candidate` on behalf of `conversation`
    ///
    /// Returns immediately. A URL that is already pending is dropped, whichever
    /// conversation asked for it. The returned task can be awaited or detached.
    pub fn dispatch(
        &self,
        candidate: UrlCandidate,
        conversation: ConversationId,
    ) -> Option<JoinHandle<()>> {
        let (strategy, request) = self.plan(&candidate);

        if !self
            .registry
            .try_insert(&candidate.url, conversation.clone(), strategy)
        {
            debug!("{}", LookupError::DuplicateInFlight(candidate.url));
            return None;
        }

        debug!(
            "Dispatching {:?} lookup for {:?} (fetching {}) from {}",
            strategy, candidate.raw, request.url, conversation
        );

        let fetcher = Arc::clone(&self.fetcher);
        let results = Arc::clone(&self.results);
        let url = candidate.url;

        Some(tokio::spawn(async move {
            // Dropping the fetch future on expiry cancels it
            let result = match tokio::time::timeout(request.timeout, fetcher.fetch(&request)).await {
                Ok(result) => result,
                Err(_) => FetchResult::timeout(),
            };
            results.on_fetch_complete(&url, result).await;
        }))
    }
}
