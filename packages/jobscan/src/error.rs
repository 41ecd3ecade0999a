//! Typed errors for the scan engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on failure kinds. Parse and selector failures are recovered inside the
//! extractor and never surface here.

use thiserror::Error;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect or read deadline exceeded
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    BadStatus { status: u16, url: String },

    /// Transport-level failure (DNS, TLS, connection reset)
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur during a site scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Page fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Site configuration is unusable (e.g. unparseable URL)
    #[error("invalid site: {reason}")]
    InvalidSite { reason: String },
}

impl ScanError {
    /// Wrap an arbitrary storage backend failure.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(err))
    }
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
