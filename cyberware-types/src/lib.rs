//! Type definitions for cyberware identities

pub mod color;
pub mod error;
pub mod hardware_id;
pub mod info;
pub mod mac;
pub mod pairing;

pub use color::{ColorEntry, Rgb};
pub use error::{Error, Result};
pub use hardware_id::HardwareId;
pub use info::CyberwareInfo;
pub use mac::MacAddress;
pub use pairing::PairingIdentity;
