//! License verification and entitlement gating for Plumline.
//!
//! This crate is the client side of Plumline's license protocol. It validates
//! the configured activation key against the remote license authority, caches
//! the result in a local JSON file for resilience, and derives an
//! authorization status the host uses to gate enterprise feature flags.
//!
//! # Design Principles
//!
//! - **Remote source of truth, local fallback**: every reconciliation cycle
//!   asks the authority; when it is unreachable, the previously cached state
//!   keeps serving readers unchanged.
//! - **One record**: the cache holds exactly one `CachedLicenseState`,
//!   replaced wholesale on success and never partially mutated.
//! - **Never crash the host**: all failures inside `start`/`resync` are
//!   caught and logged; callers always read *some* (possibly stale or absent)
//!   license state.
//! - **One instance per process**: independent subsystems sharing a runtime
//!   observe the same reconciler through a [`LicenseRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use plumline_license::{LicenseConfig, LicenseRegistry, PolicyChecker};
//!
//! # async fn run() {
//! let registry = LicenseRegistry::new();
//! let reconciler = registry
//!     .start(LicenseConfig::from_env(), PolicyChecker::new())
//!     .await;
//!
//! if let Some(state) = reconciler.cached_license().await {
//!     println!("license status: {:?}", state.derived_status);
//! }
//! # }
//! ```

mod authority;
mod config;
mod error;
mod policy;
mod reconciler;
mod store;

pub use authority::AuthorityClient;
pub use config::{LicenseConfig, API_URL_ENV, LICENSE_KEY_ENV};
pub use error::{LicenseError, LicenseResult};
pub use policy::{ClaimSource, PolicyChecker, BILLING_FLAG};
pub use reconciler::{LicenseReconciler, LicenseRegistry};
pub use store::CacheStore;
