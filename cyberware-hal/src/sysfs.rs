//! Linux host backends
//!
//! Reads the station address from `/sys/class/net/<iface>/address` and a
//! unique-ID from `/etc/machine-id`, so a cyberware image can run on a
//! Linux SBC or in a dev container.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cyberware_types::MacAddress;
use tracing::debug;

use crate::{StationInterface, UniqueIdSource, error::*};

/// Default sysfs network class directory
pub const SYSFS_NET_ROOT: &str = "/sys/class/net";

/// Default machine-id path
pub const MACHINE_ID_PATH: &str = "/etc/machine-id";

fn read_trimmed(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(s.trim().to_string()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::Unavailable(path.display().to_string()))
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Unique-ID taken from the hex machine-id file
#[derive(Debug, Clone)]
pub struct MachineIdSource {
    path: PathBuf,
}

impl MachineIdSource {
    pub fn new() -> Self {
        Self::with_path(MACHINE_ID_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for MachineIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniqueIdSource for MachineIdSource {
    fn unique_id(&self) -> Result<Vec<u8>> {
        let text = read_trimmed(&self.path)?;

        debug!(path = %self.path.display(), "Read machine-id");

        hex::decode(&text)
            .map_err(|e| Error::Malformed(format!("{}: {}", self.path.display(), e)))
    }
}

/// Station interface backed by sysfs
#[derive(Debug, Clone)]
pub struct SysfsStation {
    iface: String,
    root: PathBuf,
}

impl SysfsStation {
    /// Station interface by name, e.g. `"wlan0"`
    pub fn new(iface: impl Into<String>) -> Self {
        Self {
            iface: iface.into(),
            root: PathBuf::from(SYSFS_NET_ROOT),
        }
    }

    /// Override the sysfs network class directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    fn address_path(&self) -> PathBuf {
        self.root.join(&self.iface).join("address")
    }
}

impl StationInterface for SysfsStation {
    fn mac_address(&self) -> Result<[u8; 6]> {
        let path = self.address_path();
        let text = read_trimmed(&path)?;

        let mac: MacAddress = text
            .parse()
            .map_err(|e| Error::Malformed(format!("{}: {}", path.display(), e)))?;

        debug!(iface = %self.iface, mac = %mac, "Read station address");

        Ok(*mac.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cyberware-hal-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_machine_id_source() {
        let dir = scratch_dir("machine-id");
        let path = dir.join("machine-id");
        fs::write(&path, "0f889a00112233445566778899aabbcc\n").unwrap();

        let id = MachineIdSource::with_path(&path).unique_id().unwrap();
        assert_eq!(id.len(), 16);
        assert_eq!(&id[..3], &[0x0F, 0x88, 0x9A]);
    }

    #[test]
    fn test_machine_id_missing() {
        let dir = scratch_dir("machine-id-missing");
        let result = MachineIdSource::with_path(dir.join("nope")).unique_id();
        assert!(matches!(result, Err(Error::Unavailable(_))));
    }

    #[test]
    fn test_machine_id_malformed() {
        let dir = scratch_dir("machine-id-bad");
        let path = dir.join("machine-id");
        fs::write(&path, "not hex at all").unwrap();

        let result = MachineIdSource::with_path(&path).unique_id();
        assert!(matches!(result, Err(Error::Malformed(_))));
    }

    #[test]
    fn test_sysfs_station() {
        let root = scratch_dir("net");
        fs::create_dir_all(root.join("wlan0")).unwrap();
        fs::write(root.join("wlan0").join("address"), "5c:cf:7f:0a:1b:2c\n").unwrap();

        let station = SysfsStation::new("wlan0").with_root(&root);
        assert_eq!(
            station.mac_address().unwrap(),
            [0x5C, 0xCF, 0x7F, 0x0A, 0x1B, 0x2C]
        );
    }

    #[test]
    fn test_sysfs_station_missing_iface() {
        let root = scratch_dir("net-missing");
        let result = SysfsStation::new("wlan9").with_root(&root).mac_address();
        assert!(matches!(result, Err(Error::Unavailable(_))));
    }

    #[test]
    fn test_sysfs_station_garbage() {
        let root = scratch_dir("net-bad");
        fs::create_dir_all(root.join("eth0")).unwrap();
        fs::write(root.join("eth0").join("address"), "00:11:22\n").unwrap();

        let result = SysfsStation::new("eth0").with_root(&root).mac_address();
        assert!(matches!(result, Err(Error::Malformed(_))));
    }
}
