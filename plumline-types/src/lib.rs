//! Core type definitions for Plumline.
//!
//! This crate defines the licensing data model shared between the license
//! client and the host application:
//! - The license record reported by the remote authority
//! - The locally cached license state and its derived authorization status
//!
//! Evaluation logic (remote verification, policy checks, caching) lives in
//! `plumline-license`; this crate is plain data.

mod record;
mod state;

pub use record::{LicenseRecord, LicenseStatus};
pub use state::{CachedLicenseState, DerivedStatus};
