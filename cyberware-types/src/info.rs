//! Static cyberware metadata

use std::fmt;

/// Static cyberware information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyberwareInfo {
    /// Short type used in names, e.g. `"DISPLAY"`
    pub kind: String,

    /// Full product name, e.g. `OLED DISPLAY 0.96" 128x64 REV 1.0`
    pub fullname: String,

    /// Firmware version
    pub version: String,
}

impl CyberwareInfo {
    pub fn new(
        kind: impl Into<String>,
        fullname: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            fullname: fullname.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for CyberwareInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cyberware[{}: {}, FW: {}]",
            self.kind, self.fullname, self.version
        )
    }
}
