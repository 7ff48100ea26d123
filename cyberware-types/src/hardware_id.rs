//! Hardware identifier derived from the platform unique-ID

use std::fmt;

use crate::error::{Error, Result};

/// Stable hardware identifier
///
/// Built from the first [`HardwareId::PREFIX_LEN`] bytes of the platform's
/// immutable unique-ID and rendered as uppercase hex without separators.
///
/// # Examples
///
/// ```
/// use cyberware_types::HardwareId;
///
/// // ESP8266 unique_id() returns e.g. 0F 88 9A 00
/// let id = HardwareId::from_unique_id(&[0x0F, 0x88, 0x9A, 0x00]).unwrap();
/// assert_eq!(id.as_str(), "0F889A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareId {
    raw: [u8; HardwareId::PREFIX_LEN],
    text: String,
}

impl HardwareId {
    /// Number of unique-ID bytes that make up the identifier
    pub const PREFIX_LEN: usize = 3;

    /// Build from an exact 3-byte prefix
    pub fn from_prefix(raw: [u8; Self::PREFIX_LEN]) -> Self {
        Self {
            raw,
            text: hex::encode_upper(raw),
        }
    }

    /// Build from a full unique-ID, keeping only its prefix
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the unique-ID is shorter than
    /// [`HardwareId::PREFIX_LEN`] bytes.
    pub fn from_unique_id(unique_id: &[u8]) -> Result<Self> {
        let prefix: [u8; Self::PREFIX_LEN] = unique_id
            .get(..Self::PREFIX_LEN)
            .and_then(|p| p.try_into().ok())
            .ok_or_else(|| {
                Error::Validation(format!(
                    "unique-ID has {} bytes, need at least {}",
                    unique_id.len(),
                    Self::PREFIX_LEN
                ))
            })?;

        Ok(Self::from_prefix(prefix))
    }

    /// Raw prefix bytes
    pub fn as_bytes(&self) -> &[u8; Self::PREFIX_LEN] {
        &self.raw
    }

    /// Uppercase hex form, e.g. `"0F889A"`
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_hardware_id_from_esp_unique_id() {
        let id = HardwareId::from_unique_id(&[0x0F, 0x88, 0x9A, 0x00]).unwrap();
        assert_eq!(id.as_str(), "0F889A");
        assert_eq!(id.as_bytes(), &[0x0F, 0x88, 0x9A]);
        assert_eq!(id.to_string(), "0F889A");
    }

    #[test]
    fn test_hardware_id_exact_prefix() {
        let id = HardwareId::from_unique_id(&[0x02, 0xAD, 0x9A]).unwrap();
        assert_eq!(id.as_str(), "02AD9A");
    }

    #[test]
    fn test_hardware_id_too_short() {
        let result = HardwareId::from_unique_id(&[0x0F, 0x88]);
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = HardwareId::from_unique_id(&[]);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    proptest! {
        #[test]
        fn test_hardware_id_is_six_uppercase_hex(
            bytes in prop::collection::vec(any::<u8>(), 3..16)
        ) {
            let id = HardwareId::from_unique_id(&bytes).unwrap();
            prop_assert_eq!(id.as_str().len(), 6);
            let upper_hex = |c: char| c.is_ascii_digit() || ('A'..='F').contains(&c);
            prop_assert!(id.as_str().chars().all(upper_hex));
        }

        #[test]
        fn test_hardware_id_depends_only_on_prefix(
            prefix in any::<[u8; 3]>(),
            tail_a in prop::collection::vec(any::<u8>(), 0..8),
            tail_b in prop::collection::vec(any::<u8>(), 0..8),
        ) {
            let mut a = prefix.to_vec();
            a.extend(tail_a);
            let mut b = prefix.to_vec();
            b.extend(tail_b);

            prop_assert_eq!(
                HardwareId::from_unique_id(&a).unwrap(),
                HardwareId::from_unique_id(&b).unwrap()
            );
        }
    }
}
