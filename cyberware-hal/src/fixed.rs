//! Fixed (in-memory) peripherals
//!
//! Deterministic stand-ins for boards without the real hardware and for
//! tests. Indicator and buzzer clones share their recorded state so a caller
//! can hand one copy to [`crate::Peripherals`] and inspect the other.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use cyberware_types::Rgb;
use parking_lot::Mutex;
use tracing::trace;

use crate::{Buzzer, Indicator, StationInterface, UniqueIdSource, error::*};

/// Unique-ID source returning a fixed byte string
#[derive(Debug, Clone)]
pub struct FixedUniqueId {
    bytes: Option<Vec<u8>>,
}

impl FixedUniqueId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
        }
    }

    /// Source that fails every read
    pub fn unavailable() -> Self {
        Self { bytes: None }
    }
}

impl UniqueIdSource for FixedUniqueId {
    fn unique_id(&self) -> Result<Vec<u8>> {
        self.bytes
            .clone()
            .ok_or_else(|| Error::Unavailable("unique-ID source".into()))
    }
}

/// Station interface reporting a fixed address
#[derive(Debug, Clone)]
pub struct FixedStation {
    mac: Option<[u8; 6]>,
}

impl FixedStation {
    pub fn new(mac: [u8; 6]) -> Self {
        Self { mac: Some(mac) }
    }

    /// Interface that cannot report an address
    pub fn unavailable() -> Self {
        Self { mac: None }
    }
}

impl StationInterface for FixedStation {
    fn mac_address(&self) -> Result<[u8; 6]> {
        self.mac
            .ok_or_else(|| Error::Unavailable("station interface".into()))
    }
}

/// Indicator that records every color it is asked to show
#[derive(Debug, Clone, Default)]
pub struct RecordingIndicator {
    history: Arc<Mutex<Vec<Rgb>>>,
}

impl RecordingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors shown so far, oldest first
    pub fn history(&self) -> Vec<Rgb> {
        self.history.lock().clone()
    }
}

impl Indicator for RecordingIndicator {
    fn set_color(&mut self, color: Rgb) -> Result<()> {
        trace!(color = %color, "Indicator set");
        self.history.lock().push(color);
        Ok(())
    }
}

/// Buzzer that counts its signals
#[derive(Debug, Clone, Default)]
pub struct CountingBuzzer {
    count: Arc<AtomicU32>,
}

impl CountingBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }
}

impl Buzzer for CountingBuzzer {
    fn signal(&mut self) -> Result<()> {
        self.count.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixed_unique_id() {
        let source = FixedUniqueId::new(vec![0x0F, 0x88, 0x9A, 0x00]);
        assert_eq!(source.unique_id().unwrap(), vec![0x0F, 0x88, 0x9A, 0x00]);
    }

    #[test]
    fn test_unique_id_unavailable() {
        let result = FixedUniqueId::unavailable().unique_id();
        assert!(matches!(result, Err(Error::Unavailable(_))));
    }

    #[test]
    fn test_fixed_station() {
        let station = FixedStation::new([0x5C, 0xCF, 0x7F, 1, 2, 3]);
        assert_eq!(station.mac_address().unwrap(), [0x5C, 0xCF, 0x7F, 1, 2, 3]);
        assert!(FixedStation::unavailable().mac_address().is_err());
    }

    #[test]
    fn test_recording_indicator_shares_history() {
        let observer = RecordingIndicator::new();
        let mut driver = observer.clone();

        driver.set_color(Rgb::new(255, 0, 0)).unwrap();
        driver.set_color(Rgb::new(0, 0, 255)).unwrap();

        assert_eq!(
            observer.history(),
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_counting_buzzer() {
        let observer = CountingBuzzer::new();
        let mut driver = observer.clone();

        driver.signal().unwrap();
        driver.signal().unwrap();

        assert_eq!(observer.count(), 2);
    }
}
