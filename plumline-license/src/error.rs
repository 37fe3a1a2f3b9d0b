//! Error types for the license client.

use thiserror::Error;

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

/// Errors that can occur in license operations.
///
/// None of these ever propagate out of `start`/`resync`; the reconciler
/// recovers each of them and the host keeps reading whatever state it has.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The remote authority could not be reached, timed out, answered with a
    /// non-success status, or returned a payload that failed validation.
    #[error("license authority unreachable: {0}")]
    Unreachable(String),

    /// The cache file could not be read. Expected on first run.
    #[error("cache read failed: {0}")]
    CacheRead(String),

    /// The cache file could not be written. The in-memory state stays
    /// authoritative for the running process.
    #[error("cache write failed: {0}")]
    CachePersist(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
