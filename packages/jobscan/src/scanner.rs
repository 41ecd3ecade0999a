//! Single-site scan flow: fetch, compare, extract, persist.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extract::extract_postings;
use crate::traits::{PageFetcher, PostingStore, ScanStore, SiteStore, SnapshotStore};
use crate::types::{JobSite, PageSnapshot, ScanOutcome};

/// Pause after persisting a changed page, so back-to-back batches do not
/// hammer the same site.
const DEFAULT_COURTESY_DELAY: Duration = Duration::from_millis(2000);

/// Scans one site per invocation.
///
/// Every failure — fetch, extraction, storage — folds into the returned
/// `ScanOutcome`; `scan_site` itself never errors, so sibling scans in a
/// batch are unaffected.
pub struct SiteScanner<F, S> {
    fetcher: Arc<F>,
    store: Arc<S>,
    courtesy_delay: Duration,
}

impl<F, S> SiteScanner<F, S>
where
    F: PageFetcher,
    S: ScanStore,
{
    pub fn new(fetcher: Arc<F>, store: Arc<S>) -> Self {
        Self {
            fetcher,
            store,
            courtesy_delay: DEFAULT_COURTESY_DELAY,
        }
    }

    /// Override the post-scan courtesy delay (zero disables it).
    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    /// Scan one site, converting any failure into a failed outcome.
    pub async fn scan_site(&self, site: &JobSite) -> ScanOutcome {
        match self.scan_site_inner(site).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(site = %site.name, error = %e, "site scan failed");
                ScanOutcome::failed(site.id, &site.name, e.to_string())
            }
        }
    }

    async fn scan_site_inner(&self, site: &JobSite) -> Result<ScanOutcome> {
        info!(site = %site.name, url = %site.url, "scanning site");

        let content = self.fetcher.fetch(&site.url).await?;
        let fingerprint = PageSnapshot::fingerprint(&content);

        // No prior snapshot always counts as changed.
        let latest = self.store.latest_snapshot(site.id).await?;
        let changed = latest
            .map(|snapshot| snapshot.content_hash != fingerprint)
            .unwrap_or(true);

        if !changed {
            debug!(site = %site.name, "content unchanged");
            self.store.touch_last_checked(site.id, Utc::now()).await?;
            return Ok(ScanOutcome::unchanged(site));
        }

        info!(site = %site.name, "content changed, extracting postings");

        // The snapshot lands before extraction runs, so an interrupted scan
        // still leaves an unambiguous latest snapshot for the next poll.
        let snapshot = PageSnapshot::new(site.id, content);
        self.store.append_snapshot(&snapshot).await?;

        let postings = extract_postings(&snapshot.content, site);

        if !postings.is_empty() {
            self.store.append_postings(&postings).await?;
            info!(site = %site.name, postings = postings.len(), "persisted new postings");
        }

        // Last-checked moves only after postings are persisted; an earlier
        // crash leaves the page marked unchecked so the next poll retries.
        self.store.touch_last_checked(site.id, Utc::now()).await?;

        if !self.courtesy_delay.is_zero() {
            tokio::time::sleep(self.courtesy_delay).await;
        }

        Ok(ScanOutcome::with_postings(site, postings))
    }
}
