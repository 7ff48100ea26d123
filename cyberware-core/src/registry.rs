//! Process-wide device registry
//!
//! Maps each cyberware to an event bag other subsystems fill in after boot.
//! A device with a pairing identity is keyed by its AP name; one without is
//! keyed by its own device name, so devices without an indicator never
//! share a slot.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::{debug, warn};

/// Registry key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistryKey {
    /// Keyed by pairing AP name
    Paired(String),

    /// No pairing identity; keyed by device name
    Unpaired(String),
}

impl RegistryKey {
    pub fn name(&self) -> &str {
        match self {
            Self::Paired(name) | Self::Unpaired(name) => name,
        }
    }

    pub fn is_paired(&self) -> bool {
        matches!(self, Self::Paired(_))
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paired(name) => write!(f, "paired:{}", name),
            Self::Unpaired(name) => write!(f, "unpaired:{}", name),
        }
    }
}

/// Named event flags for one device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBag {
    flags: BTreeMap<String, bool>,
}

impl EventBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, event: &str) {
        self.flags.insert(event.to_string(), true);
    }

    pub fn clear(&mut self, event: &str) {
        self.flags.insert(event.to_string(), false);
    }

    /// `false` for events never seen
    pub fn is_set(&self, event: &str) -> bool {
        self.flags.get(event).copied().unwrap_or(false)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Device registry
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: RwLock<HashMap<RegistryKey, EventBag>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device with an empty event bag
    ///
    /// Returns `false` and keeps the existing bag if the key is already
    /// registered.
    pub fn register(&self, key: RegistryKey) -> bool {
        let mut devices = self.devices.write();

        if devices.contains_key(&key) {
            warn!(key = %key, "Device already registered");
            return false;
        }

        debug!(key = %key, "Registered device");
        devices.insert(key, EventBag::new());
        true
    }

    pub fn contains(&self, key: &RegistryKey) -> bool {
        self.devices.read().contains_key(key)
    }

    /// Snapshot of a device's event bag
    pub fn events(&self, key: &RegistryKey) -> Option<EventBag> {
        self.devices.read().get(key).cloned()
    }

    /// Run `f` against a device's event bag
    pub fn with_events<T>(
        &self,
        key: &RegistryKey,
        f: impl FnOnce(&mut EventBag) -> T,
    ) -> Option<T> {
        self.devices.write().get_mut(key).map(f)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<RegistryKey> {
        let mut keys: Vec<RegistryKey> = self.devices.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

/// The process-wide registry
pub fn global() -> &'static DeviceRegistry {
    static GLOBAL: OnceLock<DeviceRegistry> = OnceLock::new();
    GLOBAL.get_or_init(DeviceRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_seeds_empty_bag() {
        let registry = DeviceRegistry::new();
        let key = RegistryKey::Paired("DISPLAY-0F889A-GGY".into());

        assert!(registry.register(key.clone()));
        assert!(registry.contains(&key));
        assert_eq!(registry.events(&key), Some(EventBag::new()));
    }

    #[test]
    fn test_duplicate_register_keeps_bag() {
        let registry = DeviceRegistry::new();
        let key = RegistryKey::Paired("DISPLAY-0F889A-GGY".into());

        registry.register(key.clone());
        registry.with_events(&key, |bag| bag.set("paired"));

        assert!(!registry.register(key.clone()));
        assert!(registry.events(&key).unwrap().is_set("paired"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unpaired_devices_do_not_collide() {
        let registry = DeviceRegistry::new();

        assert!(registry.register(RegistryKey::Unpaired("BUTTON-02AD9A".into())));
        assert!(registry.register(RegistryKey::Unpaired("BUTTON-11AA22".into())));

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_paired_and_unpaired_are_distinct() {
        let registry = DeviceRegistry::new();

        registry.register(RegistryKey::Paired("X".into()));
        registry.register(RegistryKey::Unpaired("X".into()));

        assert_eq!(
            registry.keys(),
            vec![RegistryKey::Paired("X".into()), RegistryKey::Unpaired("X".into())]
        );
    }

    #[test]
    fn test_with_events_unknown_key() {
        let registry = DeviceRegistry::new();
        let result = registry.with_events(&RegistryKey::Paired("nope".into()), |bag| bag.len());
        assert_eq!(result, None);
    }

    #[test]
    fn test_event_bag_flags() {
        let mut bag = EventBag::new();
        assert!(!bag.is_set("connected"));

        bag.set("connected");
        assert!(bag.is_set("connected"));

        bag.clear("connected");
        assert!(!bag.is_set("connected"));
        assert_eq!(bag.names().collect::<Vec<_>>(), vec!["connected"]);
    }

    #[test]
    fn test_registry_key_display() {
        assert_eq!(RegistryKey::Paired("A".into()).to_string(), "paired:A");
        assert_eq!(RegistryKey::Unpaired("B".into()).to_string(), "unpaired:B");
        assert_eq!(RegistryKey::Unpaired("B".into()).name(), "B");
        assert!(!RegistryKey::Unpaired("B".into()).is_paired());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
    }
}
