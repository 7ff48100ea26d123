//! Preference store interface
//!
//! The durable key-value store is owned outside the core. The core reads
//! and writes through [`PreferenceStore`] and raises the store's "flush
//! requested" signal after writing; the owner decides when to persist.

use std::collections::BTreeMap;
use std::io;

use cyberware_types::Rgb;
use serde::{Deserialize, Serialize};

/// Preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefValue {
    Text(String),
    Colors([Rgb; 3]),
}

impl PrefValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_colors(&self) -> Option<&[Rgb; 3]> {
        match self {
            Self::Colors(c) => Some(c),
            _ => None,
        }
    }

    /// Short name of the value type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Colors(_) => "colors",
        }
    }
}

impl From<String> for PrefValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for PrefValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<[Rgb; 3]> for PrefValue {
    fn from(colors: [Rgb; 3]) -> Self {
        Self::Colors(colors)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Preference store failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store contents corrupt: {0}")]
    Corrupt(String),

    #[error("Value rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Durable mapping of named preferences
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a preference, `None` if never set
    fn get(&self, key: &str) -> StoreResult<Option<PrefValue>>;

    /// Write a preference
    fn set(&mut self, key: &str, value: PrefValue) -> StoreResult<()>;

    /// Ask the owner to persist the store; never cleared by the core
    fn request_flush(&mut self);
}

/// In-memory preference store
///
/// Counts flush requests instead of persisting anything.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, PrefValue>,
    flush_requests: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value
    pub fn with(mut self, key: &str, value: impl Into<PrefValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of flush requests received
    pub fn flush_requests(&self) -> u32 {
        self.flush_requests
    }

    pub fn flush_requested(&self) -> bool {
        self.flush_requests > 0
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<PrefValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: PrefValue) -> StoreResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn request_flush(&mut self) {
        self.flush_requests += 1;
    }
}
