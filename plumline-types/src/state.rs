//! Locally cached license state and the derived authorization status.

use crate::record::{LicenseRecord, LicenseStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The final authorization verdict for the running process.
///
/// Combines the authority-reported status with local policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedStatus {
    /// Authority reported an active subscription.
    Active,
    /// Authority reported a trial subscription.
    Trialing,
    /// Authority reported a missed payment.
    PastDue,
    /// Authority reported a canceled subscription.
    Canceled,
    /// Authority reported an expired subscription.
    Expired,
    /// No license is configured, or the authority knows none for the key.
    NotFound,
    /// The host uses enterprise features the license does not grant.
    Unauthorized,
}

impl From<LicenseStatus> for DerivedStatus {
    fn from(status: LicenseStatus) -> Self {
        match status {
            LicenseStatus::Active => Self::Active,
            LicenseStatus::Trialing => Self::Trialing,
            LicenseStatus::PastDue => Self::PastDue,
            LicenseStatus::Canceled => Self::Canceled,
            LicenseStatus::Expired => Self::Expired,
        }
    }
}

/// The single long-lived license record held by the reconciler in memory and
/// mirrored to durable storage.
///
/// Replaced wholesale on every successful reconciliation; a failed remote
/// check leaves the previous value untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedLicenseState {
    /// When the reconciliation that produced this record ran.
    pub last_checked: DateTime<Utc>,
    /// The authority's license record, if a verification ever succeeded.
    pub license: Option<LicenseRecord>,
    /// The activation key the process was configured with, for drift detection.
    pub requested_license_key: Option<String>,
    /// Whether local policy found enterprise usage not covered by the license.
    pub unauthorized_flag_usage: bool,
    /// The authorization verdict derived from the fields above.
    pub derived_status: DerivedStatus,
}

impl CachedLicenseState {
    /// Builds a state record, deriving the status with the fixed precedence:
    /// unauthorized usage overrides everything (including the authority's
    /// reported status), then the authority's status, then `NotFound` when no
    /// license is present.
    #[must_use]
    pub fn derive(
        license: Option<LicenseRecord>,
        requested_license_key: Option<String>,
        unauthorized_flag_usage: bool,
        last_checked: DateTime<Utc>,
    ) -> Self {
        let derived_status = if unauthorized_flag_usage {
            DerivedStatus::Unauthorized
        } else if let Some(license) = &license {
            DerivedStatus::from(license.status)
        } else {
            DerivedStatus::NotFound
        };

        Self {
            last_checked,
            license,
            requested_license_key,
            unauthorized_flag_usage,
            derived_status,
        }
    }

    /// Returns whether a feature flag is granted by the cached license.
    #[must_use]
    pub fn has_feature(&self, name: &str) -> bool {
        self.license.as_ref().is_some_and(|l| l.flag(name))
    }

    /// Returns true if the derived status allows full feature usage.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.derived_status,
            DerivedStatus::Active | DerivedStatus::Trialing
        )
    }
}
