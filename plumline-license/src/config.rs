//! Configuration for the license client.
//!
//! Read once at process start; the host hands it to `LicenseRegistry::start`.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the activation key.
pub const LICENSE_KEY_ENV: &str = "PLUMLINE_LICENSE_KEY";

/// Environment variable overriding the license authority base URL.
pub const API_URL_ENV: &str = "PLUMLINE_LICENSE_API_URL";

/// Configuration for license verification.
#[derive(Debug, Clone)]
pub struct LicenseConfig {
    /// The activation key. Absent means every check reports "no license".
    pub license_key: Option<String>,
    /// Base URL of the license authority.
    pub api_base_url: String,
    /// Path of the durable cache file, relative to the working directory.
    pub cache_path: PathBuf,
    /// Timeout for a single verification request.
    pub request_timeout_secs: u64,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            license_key: None,
            api_base_url: "https://license.plumline.io".to_string(),
            cache_path: PathBuf::from("plumline-license.json"),
            request_timeout_secs: 10,
        }
    }
}

impl LicenseConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults; a blank key counts as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var(LICENSE_KEY_ENV) {
            if !key.trim().is_empty() {
                config.license_key = Some(key.trim().to_string());
            }
        }

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url.trim().trim_end_matches('/').to_string();
            }
        }

        config
    }

    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the configured key with the middle blanked, safe for logs.
    #[must_use]
    pub fn masked_key(&self) -> String {
        match &self.license_key {
            None => "<unset>".to_string(),
            Some(key) if key.len() <= 8 || !key.is_ascii() => "****".to_string(),
            Some(key) => format!("{}****{}", &key[..4], &key[key.len() - 4..]),
        }
    }
}
