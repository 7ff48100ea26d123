//! # cyberware-core
//!
//! Boot-time identity primitives for cyberware devices.
//!
//! This crate provides:
//! - Hardware identity extraction (unique-ID, device name, MAC addresses)
//! - The pairing color alphabet
//! - Derive-once pairing identity persistence
//! - Preference store interface and backends
//! - The process-wide device registry

pub mod alphabet;
pub mod constants;
pub mod error;
pub mod extract;
pub mod file_store;
pub mod pairing;
pub mod prefs;
pub mod registry;

#[cfg(test)]
mod test_util;

pub use alphabet::ColorAlphabet;
pub use error::{Error, Result};
pub use extract::{ExtractedIdentity, extract};
pub use file_store::FileStore;
pub use pairing::derive_or_restore;
pub use prefs::{MemoryStore, PrefValue, PreferenceStore, StoreError, StoreResult};
pub use registry::{DeviceRegistry, EventBag, RegistryKey};
