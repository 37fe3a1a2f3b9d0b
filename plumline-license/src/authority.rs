//! Remote license authority client.
//!
//! Issues a single verification request per call and validates the typed
//! response. Retry cadence belongs to the caller's reconciliation schedule,
//! not here.

use crate::config::LicenseConfig;
use crate::error::{LicenseError, LicenseResult};
use plumline_types::LicenseRecord;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request body for the authority's verification endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    license_key: &'a str,
}

/// Response envelope from the authority's verification endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    success: bool,
    data: Option<LicenseRecord>,
}

/// Client for the remote license authority.
pub struct AuthorityClient {
    base_url: String,
    client: Client,
}

impl AuthorityClient {
    /// Creates a client with the configured base URL and request timeout.
    pub fn new(config: &LicenseConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Verifies the activation key against the authority.
    ///
    /// Returns `Ok(None)` without any network call when no key is configured,
    /// and `Ok(None)` when the authority answers that the key carries no
    /// entitlement. Both are valid "no license" outcomes, distinct from an
    /// unreachable authority.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Unreachable`] when the request fails or times
    /// out, the authority answers with a non-2xx status, or the payload fails
    /// validation. Malformed authority data is never accepted.
    pub async fn verify(
        &self,
        license_key: Option<&str>,
    ) -> LicenseResult<Option<LicenseRecord>> {
        let Some(license_key) = license_key else {
            debug!("no license key configured, skipping remote verification");
            return Ok(None);
        };

        let url = format!("{}/api/licenses/verify", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&VerifyRequest { license_key })
            .send()
            .await
            .map_err(|e| LicenseError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LicenseError::Unreachable(format!(
                "authority answered HTTP {status}"
            )));
        }

        let body: VerifyResponse = response.json().await.map_err(|e| {
            LicenseError::Unreachable(format!("malformed authority response: {e}"))
        })?;

        if !body.success {
            debug!("authority reported no entitlement for the configured key");
            return Ok(None);
        }

        body.data.map(Some).ok_or_else(|| {
            LicenseError::Unreachable("authority response missing license data".to_string())
        })
    }
}
