//! The license record reported by the remote authority.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Subscription status as reported by the license authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// Subscription is paid up and active.
    Active,
    /// Subscription is in a trial period.
    Trialing,
    /// Payment failed; the authority has not canceled the subscription yet.
    PastDue,
    /// Subscription was canceled.
    Canceled,
    /// Subscription ran past its period end without renewal.
    Expired,
}

/// A license as reported by the remote authority.
///
/// Produced exclusively by the authority client and immutable once
/// constructed. Field names match the authority's JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    /// Subscription status reported by the authority.
    pub status: LicenseStatus,
    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
    /// Display name of the license holder.
    pub name: String,
    /// End of the current billing period.
    pub period_end: DateTime<Utc>,
    /// Whether the subscription cancels at the period end.
    pub cancel_at_period_end: bool,
    /// The activation key this record was issued for.
    pub license_key: String,
    /// Feature flags granted by this license.
    pub flags: HashMap<String, bool>,
}

impl LicenseRecord {
    /// Returns whether a feature flag is granted. Absent flags grant nothing.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}
