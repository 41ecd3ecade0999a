//! Storage traits for sites, snapshots, and postings.
//!
//! The storage layer is split into focused traits so backends can be
//! composed per record kind:
//! - `SiteStore`: site configuration reads plus the last-checked touch
//! - `SnapshotStore`: append-only page snapshots
//! - `PostingStore`: append-only discovered postings
//! - `ScanStore`: composite trait combining all three
//!
//! Appends return the store-generated id, decoupling the engine from any
//! specific persistence technology.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::{JobPosting, JobSite, PageSnapshot};

/// Site configuration access.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// List sites eligible for scanning.
    async fn list_active_sites(&self) -> Result<Vec<JobSite>>;

    /// Record when a site was last checked.
    async fn touch_last_checked(&self, site_id: i64, at: DateTime<Utc>) -> Result<()>;
}

/// Append-only snapshot storage.
///
/// Snapshots for a site are totally ordered by creation time; "latest" is
/// unambiguous. Backends never update or delete existing rows.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// The most recent snapshot for a site, if any.
    async fn latest_snapshot(&self, site_id: i64) -> Result<Option<PageSnapshot>>;

    /// Append a snapshot and return its generated id.
    async fn append_snapshot(&self, snapshot: &PageSnapshot) -> Result<i64>;
}

/// Append-only posting storage.
#[async_trait]
pub trait PostingStore: Send + Sync {
    /// Append a batch of postings and return their generated ids, in order.
    async fn append_postings(&self, postings: &[JobPosting]) -> Result<Vec<i64>>;
}

/// Composite storage trait used by the scanner and orchestrator.
pub trait ScanStore: SiteStore + SnapshotStore + PostingStore {}

// Blanket implementation: anything implementing all three traits is a ScanStore
impl<T: SiteStore + SnapshotStore + PostingStore> ScanStore for T {}
