//! Page fetch abstraction.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Fetches the raw text of a page.
///
/// Implementations perform exactly one request per call; retry policy
/// belongs to the caller (here: none within a scan cycle, the next scheduled
/// batch is the retry mechanism).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and return its body as text.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
