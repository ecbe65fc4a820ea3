//! Error types for the scan workflows.
//!
//! The analyzers themselves never fail: malformed or empty HTML yields empty
//! results with recommendations. Only the surrounding workflow (domain input
//! and fetching) can produce a [`ScanError`].

use thiserror::Error;

/// Errors surfaced to the caller of a scan. None of them are retried.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The supplied domain was empty or could not form a valid URL.
    #[error("Invalid domain: {0}")]
    InvalidInput(String),

    /// The target answered with a non-success HTTP status.
    #[error("Failed to fetch site: {status} ({url})")]
    FetchFailure { url: String, status: u16 },

    /// The target could not be reached at all (DNS, TLS, timeout, ...).
    #[cfg(feature = "fetch")]
    #[error("Failed to fetch site: {0}")]
    Request(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("HTTP client initialization error: {0}")]
    Client(String),
}

impl ScanError {
    /// Whether the error belongs to the fetch-failure class (unreachable or non-success).
    pub fn is_fetch_failure(&self) -> bool {
        match self {
            ScanError::FetchFailure { .. } => true,
            #[cfg(feature = "fetch")]
            ScanError::Request(_) => true,
            _ => false,
        }
    }
}
