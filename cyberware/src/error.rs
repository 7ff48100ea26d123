//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Identity error: {0}")]
    Core(#[from] cyberware_core::Error),

    #[error("Peripheral error: {0}")]
    Hal(#[from] cyberware_hal::Error),

    #[error("Configuration error: {0}")]
    Types(#[from] cyberware_types::Error),
}

impl Error {
    /// Check if the device can keep booting without a pairing identity
    ///
    /// Store failures and corrupted pairing state only affect pairing;
    /// hardware faults and bad configuration leave no usable identity.
    pub fn allows_unpaired_boot(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_store_fault() || e.is_corruption())
    }
}
