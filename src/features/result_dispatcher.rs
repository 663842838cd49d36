// Result dispatcher
// Consumes completed fetches and emits title lines to the requesting conversation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::LookupError;
use crate::features::chat_host::ChatHost;
use crate::features::registry::ResolutionRegistry;
use crate::features::title_extractor::extractor_for;
use crate::models::lookup::{FetchResult, FetchStatus};
use crate::utils::formatters::{format_title_line, truncate};
use crate::utils::theme::Theme;

pub struct ResultDispatcher {
    registry: Arc<ResolutionRegistry>,
    host: Arc<dyn ChatHost>,
    theme: Theme,
}

impl ResultDispatcher {
    pub fn new(registry: Arc<ResolutionRegistry>, host: Arc<dyn ChatHost>, theme: Theme) -> Self {
        Self {
            registry,
            host,
            theme,
        }
    }

    /// Handle a finished fetch; returns the emitted line, if any
    ///
    /// Never fails: every outcome other than a title line is logged and dropped.
    pub async fn on_fetch_complete(&self, url: &str, result: FetchResult) -> Option<String> {
        match self.resolve(url, result).await {
            Ok(line) => Some(line),
            Err(e @ LookupError::Emit(_)) => {
                warn!("{}", e);
                None
            }
            Err(e) => {
                debug!("No title line for {}: {}", url, e);
                None
            }
        }
    }

    async fn resolve(&self, url: &str, result: FetchResult) -> Result<String, LookupError> {
        let lookup = self
            .registry
            .take(url)
            .ok_or_else(|| LookupError::StaleCompletion(url.to_string()))?;

        match result.status {
            FetchStatus::Success => {}
            FetchStatus::Timeout => return Err(LookupError::FetchTimeout(lookup.url)),
            FetchStatus::Error => {
                return Err(LookupError::FetchFailure {
                    url: lookup.url,
                    code: result.code,
                })
            }
        }

        let title = extractor_for(lookup.strategy, &self.theme).extract(&result)?;
        let line = format_title_line(&self.theme, title.as_str(), &lookup.url);

        self.host.emit(&lookup.conversation, &line).await?;
        info!(
            "Title for {} in {} after {}ms: {}",
            lookup.url,
            lookup.conversation,
            lookup.age_ms(),
            truncate(title.as_str(), 80)
        );

        Ok(line)
    }
}
