//! Identity configuration

use cyberware_core::constants::{DEFAULT_FULLNAME, DEFAULT_KIND, DEFAULT_STATUS};
use cyberware_hal::Capabilities;
use cyberware_types::{CyberwareInfo, Error as TypesError};

/// Static identity settings for a cyberware build
///
/// # Examples
///
/// ```
/// use cyberware::IdentityConfig;
///
/// let config = IdentityConfig::default()
///     .with_kind("BUTTON")
///     .with_fullname("GENERIC BUTTON REV 1.0");
///
/// assert_eq!(config.kind(), "BUTTON");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    kind: String,
    fullname: String,
    version: String,
    status: String,
    capabilities: Option<Capabilities>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            fullname: DEFAULT_FULLNAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: DEFAULT_STATUS.to_string(),
            capabilities: None,
        }
    }
}

impl IdentityConfig {
    /// Set cyberware type, e.g. `"DISPLAY"`
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set full product name
    pub fn with_fullname(mut self, fullname: impl Into<String>) -> Self {
        self.fullname = fullname.into();
        self
    }

    /// Set firmware version (default: crate version)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set initial status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Override detected peripheral capabilities
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Capability override, if any
    pub fn capabilities(&self) -> Option<Capabilities> {
        self.capabilities
    }

    pub fn info(&self) -> CyberwareInfo {
        CyberwareInfo::new(&self.kind, &self.fullname, &self.version)
    }

    /// Check the type is usable inside a device name
    ///
    /// The type must be non-empty ASCII alphanumeric; a `-` would make the
    /// device name ambiguous.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.kind.is_empty() || !self.kind.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TypesError::Validation(format!(
                "cyberware type {:?} must be non-empty ASCII alphanumeric",
                self.kind
            )));
        }
        Ok(())
    }
}
