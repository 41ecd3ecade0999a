//! Extracted job-posting records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting discovered on a changed page.
///
/// Title is the only mandatory field; extraction discards candidate elements
/// it cannot derive a title from. Missing optional fields stay `None`, never
/// empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    /// Store-assigned id (0 until persisted)
    pub id: i64,

    /// Site the posting was discovered on
    pub site_id: i64,

    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,

    /// Absolute link to the posting, when one could be derived
    pub url: Option<String>,

    pub discovered_at: DateTime<Utc>,
}

impl JobPosting {
    /// Create a posting with only the mandatory fields.
    pub fn new(site_id: i64, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            site_id,
            title: title.into(),
            company: None,
            location: None,
            salary: None,
            description: None,
            url: None,
            discovered_at: Utc::now(),
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
