//! Site configuration records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured job site to poll.
///
/// Created by configuration or the CLI layer; the scan engine only ever
/// mutates `last_checked` (through the site store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSite {
    /// Store-assigned id (0 until persisted)
    pub id: i64,

    /// Display name used in reports and logs
    pub name: String,

    /// Page URL to poll
    pub url: String,

    /// Optional CSS selector locating posting-container elements.
    /// When set, the generic cascade is bypassed entirely.
    pub selector: Option<String>,

    /// Inactive sites are skipped by the batch orchestrator
    pub is_active: bool,

    /// Poll interval in minutes (consumed by the external scheduler)
    pub check_interval_minutes: u32,

    /// When the site was last checked, successfully or not
    pub last_checked: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSite {
    /// Create a new active site with the default 60-minute interval.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            url: url.into(),
            selector: None,
            is_active: true,
            check_interval_minutes: 60,
            last_checked: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set a site-specific posting selector.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Set the poll interval in minutes.
    pub fn with_check_interval(mut self, minutes: u32) -> Self {
        self.check_interval_minutes = minutes;
        self
    }

    /// Set the store-assigned id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Mark the site inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
