//! Hardware identity extraction
//!
//! Turns the raw unique-ID and station address into the identity strings
//! the rest of the firmware uses. Runs on every boot.

use cyberware_hal::{StationInterface, UniqueIdSource};
use cyberware_types::{HardwareId, MacAddress};
use tracing::debug;

use crate::{
    constants::PUBLIC_MAC,
    error::Result,
};

/// Output of [`extract`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIdentity {
    /// e.g. `"0F889A"`
    pub hardware_id: HardwareId,

    /// e.g. `"DISPLAY-0F889A"`
    pub device_name: String,

    /// Station interface address, used for traffic between paired devices
    pub private_mac: MacAddress,

    /// Shared pairing address, a private copy per identity
    pub public_mac: MacAddress,
}

/// Compose a device name from its type and hardware ID
///
/// # Examples
///
/// ```
/// use cyberware_core::extract::device_name;
/// use cyberware_types::HardwareId;
///
/// let id = HardwareId::from_prefix([0x0F, 0x88, 0x9A]);
/// assert_eq!(device_name("DISPLAY", &id), "DISPLAY-0F889A");
/// ```
pub fn device_name(kind: &str, hardware_id: &HardwareId) -> String {
    format!("{}-{}", kind, hardware_id)
}

/// Read the hardware identity
///
/// # Errors
///
/// Returns [`crate::Error::HardwareFault`] if the unique-ID source or the
/// station interface cannot be read, or if the unique-ID is shorter than
/// [`HardwareId::PREFIX_LEN`] bytes.
pub fn extract<U, S>(kind: &str, unique_id: &U, station: &S) -> Result<ExtractedIdentity>
where
    U: UniqueIdSource + ?Sized,
    S: StationInterface + ?Sized,
{
    let uid = unique_id.unique_id()?;
    let hardware_id = HardwareId::from_unique_id(&uid).map_err(|_| cyberware_hal::Error::Truncated {
        expected: HardwareId::PREFIX_LEN,
        actual: uid.len(),
    })?;

    let private_mac = MacAddress::new(station.mac_address()?);
    let public_mac = MacAddress::new(PUBLIC_MAC);
    let device_name = device_name(kind, &hardware_id);

    debug!(
        hardware_id = %hardware_id,
        device_name = %device_name,
        private_mac = %private_mac,
        "Extracted hardware identity"
    );

    Ok(ExtractedIdentity {
        hardware_id,
        device_name,
        private_mac,
        public_mac,
    })
}
