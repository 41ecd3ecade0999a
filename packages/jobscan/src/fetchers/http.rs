//! HTTP page fetcher built on reqwest.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::PageFetcher;

/// Browser-like User-Agent to reduce trivial bot blocking.
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches pages over HTTP with fixed timeouts and no retries.
///
/// One GET per call; any non-2xx status is a failure. Retry policy belongs
/// to the scheduler cadence, not this layer.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Network(Box::new(e)))?;

        Ok(Self { client })
    }

    /// Use a caller-configured client instead of the defaults.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        // Fail fast on malformed URLs rather than letting reqwest classify them
        Url::parse(url).map_err(|e| FetchError::Network(Box::new(e)))?;

        debug!(url = %url, "fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "page fetch failed");
            if e.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Network(Box::new(e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "non-success status");
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Network(Box::new(e))
            }
        })?;

        debug!(url = %url, content_length = body.len(), "page fetched");
        Ok(body)
    }
}
