//! Change-detection and extraction engine for job-posting pages.
//!
//! Polls configured sites, fingerprints page content with SHA-256 to detect
//! changes across polls, extracts structured postings from changed pages via
//! a cascading selector strategy, and aggregates per-site outcomes into a
//! plain-text report. Failures are isolated per site: one broken page never
//! aborts a batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobscan::{BatchOrchestrator, HttpFetcher, MemoryStore, JobSite, render_report};
//!
//! let store = Arc::new(MemoryStore::new());
//! store.add_site(JobSite::new("Acme Careers", "https://acme.example/jobs"));
//! store.add_site(
//!     JobSite::new("Globex Jobs", "https://globex.example/careers")
//!         .with_selector(".vacancy-card"),
//! );
//!
//! let orchestrator = BatchOrchestrator::new(Arc::new(HttpFetcher::new()?), store);
//! let outcomes = orchestrator.scan_all().await?;
//! println!("{}", render_report(&outcomes, chrono::Utc::now()));
//! ```
//!
//! # Modules
//!
//! - [`types`] - Site, snapshot, posting, and outcome records
//! - [`traits`] - Fetcher and store abstractions
//! - [`extract`] - Selector cascade and per-field extraction
//! - [`scanner`] - Single-site scan flow
//! - [`batch`] - Concurrent batch orchestration
//! - [`report`] - Plain-text report rendering
//! - [`stores`] - Storage implementations (MemoryStore)
//! - [`testing`] - Mock fetcher for tests

pub mod batch;
pub mod error;
pub mod extract;
pub mod fetchers;
pub mod report;
pub mod scanner;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use batch::BatchOrchestrator;
pub use error::{FetchError, FetchResult, Result, ScanError};
pub use extract::extract_postings;
pub use fetchers::HttpFetcher;
pub use report::render_report;
pub use scanner::SiteScanner;
pub use stores::MemoryStore;
pub use traits::{PageFetcher, PostingStore, ScanStore, SiteStore, SnapshotStore};
pub use types::{JobPosting, JobSite, PageSnapshot, ScanOutcome};
