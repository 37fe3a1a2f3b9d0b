//! Local policy evaluation against granted feature flags.
//!
//! The host supplies claim sources (its records of live enterprise feature
//! usage) and a billing-required flag; the checker only evaluates them
//! against the flags the license grants. It owns no data.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The distinguished billing capability.
pub const BILLING_FLAG: &str = "billing";

/// A host-supplied enumerator of live enterprise feature claims.
#[async_trait]
pub trait ClaimSource: Send + Sync {
    /// Name of the source, for diagnostics.
    fn name(&self) -> &str;

    /// Enterprise feature flags the host's live records currently require.
    async fn claimed_flags(&self) -> Vec<String>;
}

/// Evaluates host claims against license-granted flags.
#[derive(Default)]
pub struct PolicyChecker {
    sources: Vec<Arc<dyn ClaimSource>>,
    billing_required: bool,
}

impl PolicyChecker {
    /// Creates a checker with no claim sources and billing not required.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a claim source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ClaimSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Marks the billing capability as required by the host configuration.
    #[must_use]
    pub fn with_billing_required(mut self, required: bool) -> Self {
        self.billing_required = required;
        self
    }

    /// Returns whether any live claim exceeds the granted flags.
    ///
    /// An empty map grants nothing: with no remote response, every
    /// enterprise-gated claim found in host records is unauthorized.
    pub async fn find_unauthorized_usage(&self, granted: &HashMap<String, bool>) -> bool {
        if self.billing_required && !flag_granted(granted, BILLING_FLAG) {
            debug!("billing is required by host configuration but not granted");
            return true;
        }

        for source in &self.sources {
            for flag in source.claimed_flags().await {
                if !flag_granted(granted, &flag) {
                    debug!(
                        "flag '{flag}' claimed by source '{}' is not granted",
                        source.name()
                    );
                    return true;
                }
            }
        }

        false
    }
}

fn flag_granted(granted: &HashMap<String, bool>, name: &str) -> bool {
    granted.get(name).copied().unwrap_or(false)
}
