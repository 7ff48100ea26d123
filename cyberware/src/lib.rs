//! # cyberware
//!
//! Boot-time identity for cyberware devices.
//!
//! ## Features
//!
//! - Hardware identity from the chip unique-ID and station address
//! - Three-color pairing credentials, derived once and restored after
//! - Pluggable preference stores and hardware backends
//! - Process-wide device registry
//!
//! ## Quick Start
//!
//! ```no_run
//! use cyberware::{CyberwareIdentity, Hardware, IdentityConfig};
//! use cyberware_core::FileStore;
//! use cyberware_hal::{Capabilities, MachineIdSource, SysfsStation};
//!
//! fn main() -> cyberware::Result<()> {
//!     let hardware = Hardware {
//!         unique_id: &MachineIdSource::new(),
//!         station: &SysfsStation::new("wlan0"),
//!         capabilities: Capabilities::INDICATOR,
//!     };
//!
//!     let mut store = FileStore::open("/var/lib/cyberware/prefs.json")
//!         .map_err(cyberware_core::Error::from)?;
//!     let identity = CyberwareIdentity::initialize_global(
//!         &IdentityConfig::default(),
//!         &hardware,
//!         &mut store,
//!         &mut rand::thread_rng(),
//!     )?;
//!     store.flush_if_requested().map_err(cyberware_core::Error::from)?;
//!
//!     println!("{} pairs as {:?}", identity.name(), identity.ap_name());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod identity;

// Re-exports
pub use config::IdentityConfig;
pub use error::{Error, Result};
pub use identity::{CyberwareIdentity, Hardware};

pub use cyberware_core::{DeviceRegistry, FileStore, MemoryStore, PreferenceStore, RegistryKey};
pub use cyberware_hal::{Capabilities, Peripherals};
pub use cyberware_types::{CyberwareInfo, HardwareId, MacAddress, PairingIdentity, Rgb};
