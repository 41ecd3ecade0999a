//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::{PostingStore, SiteStore, SnapshotStore};
use crate::types::{JobPosting, JobSite, PageSnapshot};

/// In-memory store for sites, snapshots, and postings.
///
/// Useful for tests and development. Not suitable for production as data is
/// lost on restart. Ids are assigned monotonically per record kind.
pub struct MemoryStore {
    sites: RwLock<HashMap<i64, JobSite>>,
    snapshots: RwLock<Vec<PageSnapshot>>,
    postings: RwLock<Vec<JobPosting>>,
    next_site_id: AtomicI64,
    next_snapshot_id: AtomicI64,
    next_posting_id: AtomicI64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            sites: RwLock::new(HashMap::new()),
            snapshots: RwLock::new(Vec::new()),
            postings: RwLock::new(Vec::new()),
            next_site_id: AtomicI64::new(1),
            next_snapshot_id: AtomicI64::new(1),
            next_posting_id: AtomicI64::new(1),
        }
    }

    /// Seed a site configuration, returning its assigned id.
    pub fn add_site(&self, site: JobSite) -> i64 {
        let id = self.next_site_id.fetch_add(1, Ordering::SeqCst);
        self.sites.write().unwrap().insert(id, site.with_id(id));
        id
    }

    pub fn site_count(&self) -> usize {
        self.sites.read().unwrap().len()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.read().unwrap().len()
    }

    pub fn posting_count(&self) -> usize {
        self.postings.read().unwrap().len()
    }

    /// All stored postings, in append order.
    pub fn postings(&self) -> Vec<JobPosting> {
        self.postings.read().unwrap().clone()
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn list_active_sites(&self) -> Result<Vec<JobSite>> {
        let mut sites: Vec<JobSite> = self
            .sites
            .read()
            .unwrap()
            .values()
            .filter(|site| site.is_active)
            .cloned()
            .collect();
        sites.sort_by_key(|site| site.id);
        Ok(sites)
    }

    async fn touch_last_checked(&self, site_id: i64, at: DateTime<Utc>) -> Result<()> {
        if let Some(site) = self.sites.write().unwrap().get_mut(&site_id) {
            site.last_checked = Some(at);
            site.updated_at = at;
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn latest_snapshot(&self, site_id: i64) -> Result<Option<PageSnapshot>> {
        Ok(self
            .snapshots
            .read()
            .unwrap()
            .iter()
            .filter(|snapshot| snapshot.site_id == site_id)
            .max_by_key(|snapshot| (snapshot.created_at, snapshot.id))
            .cloned())
    }

    async fn append_snapshot(&self, snapshot: &PageSnapshot) -> Result<i64> {
        let id = self.next_snapshot_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = snapshot.clone();
        stored.id = id;
        self.snapshots.write().unwrap().push(stored);
        Ok(id)
    }
}

#[async_trait]
impl PostingStore for MemoryStore {
    async fn append_postings(&self, postings: &[JobPosting]) -> Result<Vec<i64>> {
        let mut stored = self.postings.write().unwrap();
        let ids = postings
            .iter()
            .map(|posting| {
                let id = self.next_posting_id.fetch_add(1, Ordering::SeqCst);
                let mut row = posting.clone();
                row.id = id;
                stored.push(row);
                id
            })
            .collect();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_only_active_sites() {
        let store = MemoryStore::new();
        store.add_site(JobSite::new("A", "https://a.test"));
        store.add_site(JobSite::new("B", "https://b.test").inactive());
        store.add_site(JobSite::new("C", "https://c.test"));

        let active = store.list_active_sites().await.unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|site| site.is_active));
    }

    #[tokio::test]
    async fn latest_snapshot_is_most_recent_per_site() {
        let store = MemoryStore::new();
        let older = PageSnapshot::new(1, "first")
            .with_created_at(Utc::now() - chrono::Duration::hours(1));
        let newer = PageSnapshot::new(1, "second");
        let other_site = PageSnapshot::new(2, "elsewhere");

        store.append_snapshot(&older).await.unwrap();
        store.append_snapshot(&newer).await.unwrap();
        store.append_snapshot(&other_site).await.unwrap();

        let latest = store.latest_snapshot(1).await.unwrap().unwrap();
        assert_eq!(latest.content, "second");
        assert!(store.latest_snapshot(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_postings_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let batch = vec![
            JobPosting::new(1, "Rust Engineer"),
            JobPosting::new(1, "SRE"),
        ];

        let ids = store.append_postings(&batch).await.unwrap();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.posting_count(), 2);
    }

    #[tokio::test]
    async fn touch_last_checked_updates_site() {
        let store = MemoryStore::new();
        let id = store.add_site(JobSite::new("A", "https://a.test"));

        let at = Utc::now();
        store.touch_last_checked(id, at).await.unwrap();

        let sites = store.list_active_sites().await.unwrap();
        assert_eq!(sites[0].last_checked, Some(at));
    }
}
