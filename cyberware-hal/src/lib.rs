//! Hardware access for cyberware identity
//!
//! Traits for the peripherals identity construction reads from, plus the
//! fixed (in-memory) and sysfs (Linux host) backends.

pub mod error;
pub mod fixed;
pub mod sysfs;

pub use error::{Error, Result};
pub use fixed::{CountingBuzzer, FixedStation, FixedUniqueId, RecordingIndicator};
pub use sysfs::{MachineIdSource, SysfsStation};

use cyberware_types::Rgb;

/// Immutable per-chip unique-ID
pub trait UniqueIdSource {
    /// Read the full unique-ID
    fn unique_id(&self) -> Result<Vec<u8>>;
}

/// Station-mode network interface
pub trait StationInterface {
    /// Burned-in (or configured) hardware address
    fn mac_address(&self) -> Result<[u8; 6]>;
}

/// Addressable-LED indicator
pub trait Indicator {
    /// Drive the indicator to `color`
    fn set_color(&mut self, color: Rgb) -> Result<()>;

    /// Whether the indicator can produce `color`
    fn supports(&self, _color: Rgb) -> bool {
        true
    }
}

/// Piezo buzzer
pub trait Buzzer {
    /// Emit a short notification beep
    fn signal(&mut self) -> Result<()>;
}

bitflags::bitflags! {
    /// Peripherals present on this cyberware
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Addressable-LED indicator
        const INDICATOR = 1;

        /// Buzzer
        const BUZZER = 1 << 1;
    }
}

/// Peripheral set, resolved once at startup
///
/// A missing peripheral is simply `None`; presence is reported through
/// [`Peripherals::capabilities`].
#[derive(Default)]
pub struct Peripherals {
    indicator: Option<Box<dyn Indicator>>,
    buzzer: Option<Box<dyn Buzzer>>,
}

impl Peripherals {
    /// Empty peripheral set
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an indicator
    pub fn with_indicator(mut self, indicator: impl Indicator + 'static) -> Self {
        self.indicator = Some(Box::new(indicator));
        self
    }

    /// Attach a buzzer
    pub fn with_buzzer(mut self, buzzer: impl Buzzer + 'static) -> Self {
        self.buzzer = Some(Box::new(buzzer));
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::INDICATOR, self.indicator.is_some());
        caps.set(Capabilities::BUZZER, self.buzzer.is_some());
        caps
    }

    pub fn indicator_mut(&mut self) -> Option<&mut (dyn Indicator + 'static)> {
        self.indicator.as_deref_mut()
    }

    pub fn buzzer_mut(&mut self) -> Option<&mut (dyn Buzzer + 'static)> {
        self.buzzer.as_deref_mut()
    }
}

impl std::fmt::Debug for Peripherals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Peripherals")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
