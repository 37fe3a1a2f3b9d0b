//! Shared test helpers for license client tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use plumline_license::{ClaimSource, LicenseConfig};
use plumline_types::{LicenseRecord, LicenseStatus};
use std::collections::HashMap;
use std::path::Path;

/// A key the authority accepts in these tests.
pub const TEST_KEY: &str = "pl_live_1234abcd5678efgh";

/// A base URL nothing listens on, for unreachable-authority scenarios.
pub const DEAD_URL: &str = "http://127.0.0.1:9";

/// Builds a config pointing at a test server and a temp cache file.
pub fn test_config(base_url: &str, cache_path: &Path, license_key: Option<&str>) -> LicenseConfig {
    LicenseConfig {
        license_key: license_key.map(String::from),
        api_base_url: base_url.to_string(),
        cache_path: cache_path.to_path_buf(),
        request_timeout_secs: 2,
    }
}

/// A fixed creation timestamp, so persisted records compare field-for-field.
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 2, 9, 30, 0).unwrap()
}

/// Builds a license record the way the authority would report it.
pub fn license_record(status: LicenseStatus, flags: &[(&str, bool)]) -> LicenseRecord {
    LicenseRecord {
        status,
        created_at: created_at(),
        name: "Acme Corp".to_string(),
        period_end: Utc.with_ymd_and_hms(2026, 11, 2, 9, 30, 0).unwrap(),
        cancel_at_period_end: false,
        license_key: TEST_KEY.to_string(),
        flags: flags
            .iter()
            .map(|(name, granted)| (name.to_string(), *granted))
            .collect(),
    }
}

/// Builds the authority's successful verification response body.
pub fn verify_body(status: &str, flags: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "status": status,
            "createdAt": "2025-11-02T09:30:00Z",
            "name": "Acme Corp",
            "periodEnd": "2026-11-02T09:30:00Z",
            "cancelAtPeriodEnd": false,
            "licenseKey": TEST_KEY,
            "flags": flags
        }
    })
}

/// A claim source with a fixed set of claimed flags.
pub struct FixedClaims {
    flags: Vec<String>,
}

impl FixedClaims {
    pub fn new(flags: &[&str]) -> Self {
        Self {
            flags: flags.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ClaimSource for FixedClaims {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn claimed_flags(&self) -> Vec<String> {
        self.flags.clone()
    }
}

/// Builds an empty granted-flags map.
pub fn no_flags() -> HashMap<String, bool> {
    HashMap::new()
}

/// Builds a granted-flags map from pairs.
pub fn flags(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
    pairs
        .iter()
        .map(|(name, granted)| (name.to_string(), *granted))
        .collect()
}
