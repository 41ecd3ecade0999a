//! Testing utilities: mock fetcher with call tracking.
//!
//! Useful for exercising the scan pipeline without network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::PageFetcher;

/// How a mock URL should fail.
#[derive(Debug, Clone, Copy)]
enum Failure {
    Network,
    Timeout,
    Status(u16),
}

/// A fetcher that serves predefined bodies without network access.
///
/// Clones share state, so a test can reconfigure pages after handing the
/// fetcher to a scanner.
#[derive(Default, Clone)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashMap<String, Failure>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), body.into());
        self
    }

    /// Replace (or add) the body served for `url`.
    pub fn set_page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.write().unwrap().insert(url.into(), body.into());
    }

    /// Fail `url` with a network error.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(url.into(), Failure::Network);
        self
    }

    /// Fail `url` with a timeout.
    pub fn fail_timeout(self, url: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(url.into(), Failure::Timeout);
        self
    }

    /// Fail `url` with a non-2xx status.
    pub fn fail_status(self, url: impl Into<String>, status: u16) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(url.into(), Failure::Status(status));
        self
    }

    /// All URLs fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// How many times `url` was fetched.
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls.read().unwrap().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(failure) = self.failures.read().unwrap().get(url) {
            return Err(match failure {
                Failure::Network => FetchError::Network(Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "mock connection refused",
                ))),
                Failure::Timeout => FetchError::Timeout { url: url.to_string() },
                Failure::Status(status) => FetchError::BadStatus {
                    status: *status,
                    url: url.to_string(),
                },
            });
        }

        self.pages.read().unwrap().get(url).cloned().ok_or_else(|| {
            FetchError::Network(Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock page for {url}"),
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_predefined_pages_and_records_calls() {
        let fetcher = MockFetcher::new().with_page("https://a.test", "<p>hello</p>");

        let body = fetcher.fetch("https://a.test").await.unwrap();
        assert_eq!(body, "<p>hello</p>");
        assert_eq!(fetcher.fetch_count("https://a.test"), 1);

        let missing = fetcher.fetch("https://missing.test").await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn configured_failures_map_to_fetch_errors() {
        let fetcher = MockFetcher::new()
            .fail_timeout("https://slow.test")
            .fail_status("https://gone.test", 404);

        assert!(matches!(
            fetcher.fetch("https://slow.test").await,
            Err(FetchError::Timeout { .. })
        ));
        assert!(matches!(
            fetcher.fetch("https://gone.test").await,
            Err(FetchError::BadStatus { status: 404, .. })
        ));
    }
}
