//! Domain record types: sites, snapshots, postings, and scan outcomes.

pub mod outcome;
pub mod posting;
pub mod site;
pub mod snapshot;

pub use outcome::ScanOutcome;
pub use posting::JobPosting;
pub use site::JobSite;
pub use snapshot::PageSnapshot;
