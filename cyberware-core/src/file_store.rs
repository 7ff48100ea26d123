//! File-backed preference store
//!
//! The whole store is one JSON object keyed by preference name:
//!
//! ```text
//! {
//!   "ap_color": { "colors": [{ "r": 0, "g": 255, "b": 0 }, ...] },
//!   "ap_color_code": { "text": "GGY" },
//!   "ap_name": { "text": "DISPLAY-0F889A-GGY" }
//! }
//! ```
//!
//! Writes stay in memory until [`FileStore::flush`]; a flush writes a
//! sibling temp file and renames it over the original.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::prefs::{PrefValue, PreferenceStore, StoreError, StoreResult};

/// Preference store persisted to a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
    flush_requested: bool,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing or empty file opens as an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the file is not a valid store and
    /// [`StoreError::Io`] if it exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        debug!(path = %path.display(), entries = values.len(), "Opened preference file");

        Ok(Self {
            path,
            values,
            flush_requested: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush_requested(&self) -> bool {
        self.flush_requested
    }

    /// Write every preference to disk and clear the flush request
    pub fn flush(&mut self) -> StoreResult<()> {
        let text = serde_json::to_string_pretty(&self.values)
            .map_err(|e| StoreError::Rejected(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;

        self.flush_requested = false;

        info!(path = %self.path.display(), entries = self.values.len(), "Preferences flushed");

        Ok(())
    }

    /// Flush only if a flush was requested; returns whether it flushed
    pub fn flush_if_requested(&mut self) -> StoreResult<bool> {
        if !self.flush_requested {
            return Ok(false);
        }

        self.flush()?;
        Ok(true)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<PrefValue>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: PrefValue) -> StoreResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn request_flush(&mut self) {
        self.flush_requested = true;
    }
}
