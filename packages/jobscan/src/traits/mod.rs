//! Trait abstractions the engine depends on.

pub mod fetcher;
pub mod store;

pub use fetcher::PageFetcher;
pub use store::{PostingStore, ScanStore, SiteStore, SnapshotStore};
