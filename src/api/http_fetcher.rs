// HTTP fetch collaborator
// Reads at most a bounded prefix of the body so large pages cost nothing extra

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::models::lookup::{FetchRequest, FetchResult};

/// Performs one outbound fetch
///
/// Implementations report every failure through [`FetchResult`]; the
/// wall-clock bound is enforced by the caller, which drops the future.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> FetchResult;
}

/// `reqwest`-backed fetcher; redirects follow the client's default policy
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> FetchResult {
        let mut response = match self.client.get(&request.url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("Request to {} failed: {}", request.url, e);
                return FetchResult::error(e.status().map(|s| s.as_u16()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned non-success status {}", request.url, status);
            return FetchResult::error(Some(status.as_u16()));
        }

        match read_capped(&mut response, request.max_bytes).await {
            Ok(body) => FetchResult::success(status.as_u16(), body),
            Err(e) => {
                debug!("Failed to read body of {}: {}", request.url, e);
                FetchResult::error(Some(status.as_u16()))
            }
        }
    }
}

/// Read the body chunk by chunk, stopping once `max_bytes` have arrived
async fn read_capped(
    response: &mut reqwest::Response,
    max_bytes: Option<usize>,
) -> reqwest::Result<Vec<u8>> {
    let mut body = Vec::new();

    while let Some(chunk) = response.chunk().await? {
        body.extend_from_slice(&chunk);
        if let Some(limit) = max_bytes {
            if body.len() >= limit {
                body.truncate(limit);
                break;
            }
        }
    }

    Ok(body)
}
