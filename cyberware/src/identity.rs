//! Cyberware identity aggregate

use cyberware_core::{
    ColorAlphabet, DeviceRegistry, PreferenceStore, RegistryKey, extract, pairing, registry,
};
use cyberware_hal::{Capabilities, Peripherals, StationInterface, UniqueIdSource};
use cyberware_types::{CyberwareInfo, HardwareId, MacAddress, PairingIdentity, Rgb};
use rand_core::RngCore;
use tracing::{debug, info, warn};

use crate::config::IdentityConfig;
use crate::error::Result;

/// Hardware handles read during identity construction
pub struct Hardware<'a> {
    /// Chip unique-ID
    pub unique_id: &'a dyn UniqueIdSource,

    /// Station-mode network interface
    pub station: &'a dyn StationInterface,

    /// Peripherals present on the board
    pub capabilities: Capabilities,
}

/// Identity of this cyberware
///
/// Built once per boot by [`CyberwareIdentity::initialize`]. Everything is
/// read-only except `name` and `status`, which are plain last-write-wins
/// fields.
///
/// # Examples
///
/// ```
/// use cyberware::{CyberwareIdentity, Hardware, IdentityConfig};
/// use cyberware_core::{DeviceRegistry, MemoryStore};
/// use cyberware_hal::{Capabilities, FixedStation, FixedUniqueId};
///
/// let hardware = Hardware {
///     unique_id: &FixedUniqueId::new(vec![0x0F, 0x88, 0x9A, 0x00]),
///     station: &FixedStation::new([0x5C, 0xCF, 0x7F, 0x0A, 0x1B, 0x2C]),
///     capabilities: Capabilities::empty(),
/// };
///
/// let mut store = MemoryStore::new();
/// let registry = DeviceRegistry::new();
/// let identity = CyberwareIdentity::initialize(
///     &IdentityConfig::default(),
///     &hardware,
///     &mut store,
///     &mut rand::thread_rng(),
///     &registry,
/// ).unwrap();
///
/// assert_eq!(identity.name(), "DISPLAY-0F889A");
/// assert_eq!(identity.ap_name(), None);
/// ```
#[derive(Debug, Clone)]
pub struct CyberwareIdentity {
    info: CyberwareInfo,
    hardware_id: HardwareId,
    device_name: String,
    name: String,
    status: String,
    mac_private: MacAddress,
    mac_public: MacAddress,
    pairing: Option<PairingIdentity>,
    registry_key: RegistryKey,
}

impl CyberwareIdentity {
    /// Build the identity and register it in `registry`
    ///
    /// The hardware identity is always extracted. The pairing identity is
    /// restored or derived only when the indicator capability is present;
    /// without it no store access and no random draws happen.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the hardware cannot
    /// be read, or the pairing identity cannot be restored or persisted.
    /// Nothing is registered on error.
    pub fn initialize<S, R>(
        config: &IdentityConfig,
        hardware: &Hardware<'_>,
        store: &mut S,
        rng: &mut R,
        registry: &DeviceRegistry,
    ) -> Result<Self>
    where
        S: PreferenceStore + ?Sized,
        R: RngCore + ?Sized,
    {
        config.validate()?;

        let extracted = extract(config.kind(), hardware.unique_id, hardware.station)?;

        let capabilities = config.capabilities().unwrap_or(hardware.capabilities);

        let pairing = if capabilities.contains(Capabilities::INDICATOR) {
            Some(pairing::derive_or_restore(
                store,
                &ColorAlphabet::new(),
                rng,
                &extracted.device_name,
            )?)
        } else {
            debug!("No indicator present, skipping pairing identity");
            None
        };

        let registry_key = match &pairing {
            Some(p) => RegistryKey::Paired(p.ap_name.clone()),
            None => RegistryKey::Unpaired(extracted.device_name.clone()),
        };
        registry.register(registry_key.clone());

        info!(
            name = %extracted.device_name,
            ap_name = pairing.as_ref().map(|p| p.ap_name.as_str()).unwrap_or("-"),
            mac = %extracted.private_mac,
            "Cyberware identity ready"
        );

        Ok(Self {
            info: config.info(),
            hardware_id: extracted.hardware_id,
            name: extracted.device_name.clone(),
            device_name: extracted.device_name,
            status: config.status().to_string(),
            mac_private: extracted.private_mac,
            mac_public: extracted.public_mac,
            pairing,
            registry_key,
        })
    }

    /// [`CyberwareIdentity::initialize`] against the process-wide registry
    pub fn initialize_global<S, R>(
        config: &IdentityConfig,
        hardware: &Hardware<'_>,
        store: &mut S,
        rng: &mut R,
    ) -> Result<Self>
    where
        S: PreferenceStore + ?Sized,
        R: RngCore + ?Sized,
    {
        Self::initialize(config, hardware, store, rng, registry::global())
    }

    /// Show the pairing colors on the indicator, then beep once
    ///
    /// Returns `false` without touching any peripheral if there is no
    /// pairing identity.
    pub fn announce(&self, peripherals: &mut Peripherals) -> Result<bool> {
        let Some(pairing) = &self.pairing else {
            return Ok(false);
        };

        if let Some(indicator) = peripherals.indicator_mut() {
            for color in pairing.ap_color {
                if indicator.supports(color) {
                    indicator.set_color(color)?;
                } else {
                    warn!(color = %color, "Indicator cannot show pairing color");
                }
            }
        }

        if let Some(buzzer) = peripherals.buzzer_mut() {
            buzzer.signal()?;
        }

        Ok(true)
    }

    // Static metadata

    pub fn info(&self) -> &CyberwareInfo {
        &self.info
    }

    /// Type, e.g. `"DISPLAY"`
    pub fn kind(&self) -> &str {
        &self.info.kind
    }

    /// Full name, e.g. `OLED DISPLAY 0.96" 128x64 REV 1.0`
    pub fn fullname(&self) -> &str {
        &self.info.fullname
    }

    pub fn version(&self) -> &str {
        &self.info.version
    }

    // Hardware identity

    /// Unique ID, e.g. `"0F889A"`
    pub fn id(&self) -> &HardwareId {
        &self.hardware_id
    }

    /// Name derived at boot, e.g. `"DISPLAY-0F889A"`; never changes
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Current name; starts as [`Self::device_name`]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Operational status, e.g. `"OK"`, `"PAIRING"`
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Station address, used between paired cyberwares
    pub fn mac_private(&self) -> &MacAddress {
        &self.mac_private
    }

    pub fn mac_private_str(&self) -> String {
        self.mac_private.to_string()
    }

    /// Pairing address shared by every cyberware
    pub fn mac_public(&self) -> &MacAddress {
        &self.mac_public
    }

    /// Writable copy of the public address for radio drivers that need one
    pub fn mac_public_mut(&mut self) -> &mut [u8; 6] {
        self.mac_public.as_mut_bytes()
    }

    pub fn mac_public_str(&self) -> String {
        self.mac_public.to_string()
    }

    // Pairing identity

    pub fn pairing(&self) -> Option<&PairingIdentity> {
        self.pairing.as_ref()
    }

    pub fn is_paired(&self) -> bool {
        self.pairing.is_some()
    }

    pub fn ap_name(&self) -> Option<&str> {
        self.pairing.as_ref().map(|p| p.ap_name.as_str())
    }

    pub fn ap_color(&self) -> Option<[Rgb; 3]> {
        self.pairing.as_ref().map(|p| p.ap_color)
    }

    pub fn ap_color_code(&self) -> Option<&str> {
        self.pairing.as_ref().map(|p| p.ap_color_code.as_str())
    }

    /// Key this identity is registered under
    pub fn registry_key(&self) -> &RegistryKey {
        &self.registry_key
    }
}
