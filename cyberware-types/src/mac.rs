//! 6-byte hardware (MAC) addresses

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Hardware address
///
/// The raw octets live in an owned buffer so lower layers that need a
/// writable address (e.g. ESP-NOW peer registration) can borrow it mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Address length in bytes
    pub const LEN: usize = 6;

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8; 6] {
        &mut self.0
    }

    /// Colon-delimited uppercase form, e.g. `"9E:9C:1F:00:00:00"`
    pub fn to_colon_string(&self) -> String {
        self.to_string()
    }

    /// Locally administered bit of the first octet
    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    /// Parse `XX:XX:XX:XX:XX:XX` (either case)
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != Self::LEN {
            return Err(Error::Parse(format!(
                "expected {} octets in {:?}, got {}",
                Self::LEN,
                s,
                parts.len()
            )));
        }

        let mut octets = [0u8; 6];
        for (slot, part) in octets.iter_mut().zip(&parts) {
            if part.len() != 2 {
                return Err(Error::Parse(format!("bad octet {:?} in {:?}", part, s)));
            }
            let decoded = hex::decode(part)
                .map_err(|e| Error::Parse(format!("bad octet {:?} in {:?}: {}", part, s, e)))?;
            *slot = decoded[0];
        }

        Ok(Self(octets))
    }
}
