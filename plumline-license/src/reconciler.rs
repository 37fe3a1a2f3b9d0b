//! License reconciliation and the process-wide shared instance.
//!
//! One reconciliation cycle: load the durable cache, seed the in-memory slot
//! if it is empty, contact the authority, evaluate local policy, derive the
//! status, swap the new record in, and persist it. When the authority is
//! unreachable the previously seeded state survives untouched and the host
//! keeps reading stale (or absent) license data.

use crate::authority::AuthorityClient;
use crate::config::LicenseConfig;
use crate::policy::PolicyChecker;
use crate::store::CacheStore;
use chrono::Utc;
use plumline_types::CachedLicenseState;
use std::sync::{Arc, OnceLock};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Orchestrates the cache store, authority client, and policy checker into a
/// single coherent view of the current license state.
pub struct LicenseReconciler {
    config: LicenseConfig,
    store: CacheStore,
    authority: AuthorityClient,
    policy: PolicyChecker,
    /// In-memory fast path. Written only by reconciliation cycles; read by
    /// many concurrent callers. Whole-record swaps only.
    cached: RwLock<Option<CachedLicenseState>>,
    /// Serializes reconciliation cycles; at most one write is in flight.
    cycle: Mutex<()>,
}

impl LicenseReconciler {
    /// Creates a reconciler. No cycle runs until [`Self::resync`] is called;
    /// hosts normally go through [`LicenseRegistry::start`] instead so every
    /// subsystem shares one instance.
    pub fn new(config: LicenseConfig, policy: PolicyChecker) -> Self {
        let store = CacheStore::new(config.cache_path.clone());
        let authority = AuthorityClient::new(&config);

        Self {
            config,
            store,
            authority,
            policy,
            cached: RwLock::new(None),
            cycle: Mutex::new(()),
        }
    }

    /// Returns the current license state: memory first, then one durable
    /// load, then `None`. Never triggers network I/O; safe to call
    /// concurrently and frequently.
    pub async fn cached_license(&self) -> Option<CachedLicenseState> {
        if let Some(state) = self.cached.read().await.clone() {
            return Some(state);
        }
        self.load_for_key().await
    }

    /// Runs one full reconciliation cycle.
    ///
    /// Every failure is handled here: an unreachable authority falls back to
    /// the previous state with a warning, and a persistence failure keeps the
    /// freshly computed state in memory. Nothing propagates to the caller.
    pub async fn resync(&self) {
        let _guard = self.cycle.lock().await;

        if let Some(previous) = self.load_for_key().await {
            let mut slot = self.cached.write().await;
            if slot.is_none() {
                debug!("seeding in-memory license state from durable cache");
                *slot = Some(previous);
            }
        }

        match self
            .authority
            .verify(self.config.license_key.as_deref())
            .await
        {
            Ok(license) => {
                let granted = license
                    .as_ref()
                    .map(|l| l.flags.clone())
                    .unwrap_or_default();
                let unauthorized = self.policy.find_unauthorized_usage(&granted).await;
                let state = CachedLicenseState::derive(
                    license,
                    self.config.license_key.clone(),
                    unauthorized,
                    Utc::now(),
                );

                info!(
                    "license reconciled: {:?} for key {}",
                    state.derived_status,
                    self.config.masked_key()
                );
                *self.cached.write().await = Some(state.clone());

                if let Err(err) = self.store.save(&state).await {
                    error!("failed to persist license state: {err}");
                }
            }
            Err(err) => {
                warn!("license check failed, keeping previous state: {err}");
            }
        }
    }

    /// Loads the durable cache, discarding records written for a different
    /// activation key than the one this process is configured with.
    async fn load_for_key(&self) -> Option<CachedLicenseState> {
        let state = self.store.load().await?;
        if state.requested_license_key != self.config.license_key {
            warn!("cached license state belongs to a different activation key, ignoring it");
            return None;
        }
        Some(state)
    }
}

/// Process-wide registration point for the shared reconciler.
///
/// Injected at process start and handed to every subsystem sharing the
/// runtime; the first `start` call constructs the instance and runs the
/// initial cycle, later calls (including concurrent racers) get the existing
/// instance without restarting it.
#[derive(Default)]
pub struct LicenseRegistry {
    slot: OnceLock<Arc<LicenseReconciler>>,
}

impl LicenseRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared reconciler, constructing it and running the first
    /// reconciliation cycle if this is the first call.
    ///
    /// Registration happens before the first cycle runs, so concurrent
    /// callers observe "already started" promptly. The first cycle handles
    /// all of its failures internally, so a degraded start (no license state)
    /// never prevents the instance from being considered started.
    pub async fn start(
        &self,
        config: LicenseConfig,
        policy: PolicyChecker,
    ) -> Arc<LicenseReconciler> {
        let mut constructed = false;
        let reconciler = Arc::clone(self.slot.get_or_init(|| {
            constructed = true;
            Arc::new(LicenseReconciler::new(config, policy))
        }));

        if constructed {
            reconciler.resync().await;
        }

        reconciler
    }

    /// Returns the shared reconciler, or `None` if `start` was never called.
    #[must_use]
    pub fn instance(&self) -> Option<Arc<LicenseReconciler>> {
        self.slot.get().cloned()
    }
}
