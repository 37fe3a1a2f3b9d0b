//! Durable cache for the license state.
//!
//! Holds exactly one record in a human-readable JSON file. Reads never fail
//! outward: a missing or invalid file is "no cache". Writes report their
//! error so the caller can log it, but the in-memory state stays
//! authoritative for the running process either way.

use crate::error::{LicenseError, LicenseResult};
use plumline_types::CachedLicenseState;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Bound on a single cache file read or write.
const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// File-backed store for the single cached license state record.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached state, or `None` when the file is missing,
    /// unreadable, or fails schema validation. A missing cache is expected on
    /// first run and logged at debug level only.
    pub async fn load(&self) -> Option<CachedLicenseState> {
        match self.read_state().await {
            Ok(state) => Some(state),
            Err(LicenseError::CacheRead(reason)) => {
                debug!("no readable license cache at {:?}: {reason}", self.path);
                None
            }
            Err(err) => {
                warn!("ignoring invalid license cache at {:?}: {err}", self.path);
                None
            }
        }
    }

    /// Serializes and durably writes the record, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns `CachePersist` when the write fails or times out.
    pub async fn save(&self, state: &CachedLicenseState) -> LicenseResult<()> {
        let json = serde_json::to_vec_pretty(state)?;

        timeout(IO_TIMEOUT, fs::write(&self.path, json))
            .await
            .map_err(|_| LicenseError::CachePersist("timed out writing cache file".to_string()))?
            .map_err(|e| LicenseError::CachePersist(e.to_string()))
    }

    async fn read_state(&self) -> LicenseResult<CachedLicenseState> {
        let bytes = timeout(IO_TIMEOUT, fs::read(&self.path))
            .await
            .map_err(|_| LicenseError::CacheRead("timed out reading cache file".to_string()))?
            .map_err(|e| LicenseError::CacheRead(e.to_string()))?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}
