//! Concurrent batch orchestration over all active sites.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::Result;
use crate::scanner::SiteScanner;
use crate::traits::{PageFetcher, ScanStore, SiteStore};
use crate::types::{JobSite, ScanOutcome};

/// Fans one `SiteScanner` invocation out per active site.
///
/// Scans run as independent tokio tasks with no concurrency cap (each is
/// network-bound); a failure in one site's scan surfaces as a failed outcome
/// and never cancels or taints siblings.
pub struct BatchOrchestrator<F, S> {
    scanner: Arc<SiteScanner<F, S>>,
    store: Arc<S>,
}

impl<F, S> BatchOrchestrator<F, S>
where
    F: PageFetcher + 'static,
    S: ScanStore + 'static,
{
    pub fn new(fetcher: Arc<F>, store: Arc<S>) -> Self {
        Self {
            scanner: Arc::new(SiteScanner::new(fetcher, Arc::clone(&store))),
            store,
        }
    }

    /// Use a pre-configured scanner (e.g. with a custom courtesy delay).
    pub fn with_scanner(scanner: SiteScanner<F, S>, store: Arc<S>) -> Self {
        Self {
            scanner: Arc::new(scanner),
            store,
        }
    }

    /// Scan every active site concurrently, one outcome per site.
    ///
    /// Only a failure to list the sites at all propagates as an error;
    /// everything downstream is captured in the outcomes.
    pub async fn scan_all(&self) -> Result<Vec<ScanOutcome>> {
        let sites = self.store.list_active_sites().await?;
        info!(sites = sites.len(), "starting scan batch");

        if sites.is_empty() {
            warn!("no active sites configured");
            return Ok(Vec::new());
        }

        Ok(self.scan_sites(sites).await)
    }

    /// Scan a caller-supplied list of sites concurrently.
    pub async fn scan_sites(&self, sites: Vec<JobSite>) -> Vec<ScanOutcome> {
        let mut handles = Vec::with_capacity(sites.len());

        for site in sites {
            let scanner = Arc::clone(&self.scanner);
            let label = (site.id, site.name.clone());
            handles.push((
                label,
                tokio::spawn(async move { scanner.scan_site(&site).await }),
            ));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for ((site_id, site_name), handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                // A panicking task still yields one outcome for its site
                Err(e) => {
                    warn!(site = %site_name, error = %e, "scan task did not complete");
                    outcomes.push(ScanOutcome::failed(
                        site_id,
                        site_name,
                        format!("scan task did not complete: {e}"),
                    ));
                }
            }
        }

        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        let changed = outcomes.iter().filter(|o| o.changed).count();
        let new_postings: usize = outcomes.iter().map(ScanOutcome::new_postings_count).sum();
        info!(
            sites = outcomes.len(),
            succeeded,
            failed = outcomes.len() - succeeded,
            changed,
            new_postings,
            "scan batch finished"
        );

        outcomes
    }
}
