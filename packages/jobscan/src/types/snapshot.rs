//! Page snapshots and content fingerprinting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An immutable snapshot of a page as fetched during one poll.
///
/// Snapshots are append-only: the engine reads the latest snapshot per site
/// for change detection and appends a new one whenever content changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Store-assigned id (0 until persisted)
    pub id: i64,

    /// Site this snapshot belongs to
    pub site_id: i64,

    /// SHA-256 fingerprint of `content`, 64 lower-hex chars
    pub content_hash: String,

    /// Raw page text as fetched
    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl PageSnapshot {
    /// Create a snapshot for freshly fetched content, computing its fingerprint.
    pub fn new(site_id: i64, content: impl Into<String>) -> Self {
        let content = content.into();
        let content_hash = Self::fingerprint(&content);

        Self {
            id: 0,
            site_id,
            content_hash,
            content,
            created_at: Utc::now(),
        }
    }

    /// SHA-256 fingerprint of page content.
    ///
    /// Used purely as an equality oracle across polls, not for security.
    pub fn fingerprint(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Set the created timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Check whether new content differs from this snapshot.
    pub fn content_changed(&self, new_content: &str) -> bool {
        Self::fingerprint(new_content) != self.content_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic_64_hex() {
        let a = PageSnapshot::fingerprint("<html>jobs</html>");
        let b = PageSnapshot::fingerprint("<html>jobs</html>");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fingerprint_differs_for_different_content() {
        let a = PageSnapshot::fingerprint("<html>jobs</html>");
        let b = PageSnapshot::fingerprint("<html>Jobs</html>");
        assert_ne!(a, b);
    }

    #[test]
    fn content_changed_compares_hashes() {
        let snapshot = PageSnapshot::new(1, "original page");
        assert!(!snapshot.content_changed("original page"));
        assert!(snapshot.content_changed("updated page"));
    }
}
