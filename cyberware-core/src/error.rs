//! Error types for cyberware-core

use crate::prefs::StoreError;

/// Result type alias for identity operations
pub type Result<T> = std::result::Result<T, Error>;

/// Identity construction errors
///
/// None of these are recovered inside the core; the caller decides whether
/// to stop booting or carry on without pairing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unique-ID or station address could not be read
    #[error("Hardware fault: {0}")]
    HardwareFault(#[from] cyberware_hal::Error),

    /// Preference store read or write failed
    #[error("Preference store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Persisted pairing triple is incomplete or mistyped
    #[error("Invalid persisted state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Check if the peripheral layer failed
    pub fn is_hardware_fault(&self) -> bool {
        matches!(self, Self::HardwareFault(_))
    }

    /// Check if the preference store failed
    pub fn is_store_fault(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// Check if the persisted state is corrupted
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::InvalidState(_) | Self::StoreUnavailable(StoreError::Corrupt(_))
        )
    }
}
