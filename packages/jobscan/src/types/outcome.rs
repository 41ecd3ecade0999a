//! Per-site scan outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{JobPosting, JobSite};

/// The result of scanning one site during one batch.
///
/// Transient: produced per scan invocation and consumed by report
/// generation. Invariants held by the constructors: a failed outcome never
/// carries postings, and an unchanged outcome has an empty posting list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub site_id: i64,
    pub site_name: String,

    /// Whether the page content differed from the latest snapshot
    pub changed: bool,

    /// Postings discovered on this scan (only when `changed`)
    pub new_postings: Vec<JobPosting>,

    /// Human-readable failure cause, if the scan failed
    pub error: Option<String>,

    pub scanned_at: DateTime<Utc>,
}

impl ScanOutcome {
    /// Outcome for a page whose content matched the latest snapshot.
    pub fn unchanged(site: &JobSite) -> Self {
        Self {
            site_id: site.id,
            site_name: site.name.clone(),
            changed: false,
            new_postings: Vec::new(),
            error: None,
            scanned_at: Utc::now(),
        }
    }

    /// Outcome for a changed page, with whatever extraction produced
    /// (possibly nothing).
    pub fn with_postings(site: &JobSite, new_postings: Vec<JobPosting>) -> Self {
        Self {
            site_id: site.id,
            site_name: site.name.clone(),
            changed: true,
            new_postings,
            error: None,
            scanned_at: Utc::now(),
        }
    }

    /// Outcome for a scan that failed at any stage.
    pub fn failed(site_id: i64, site_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            site_id,
            site_name: site_name.into(),
            changed: false,
            new_postings: Vec::new(),
            error: Some(message.into()),
            scanned_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn new_postings_count(&self) -> usize {
        self.new_postings.len()
    }
}
