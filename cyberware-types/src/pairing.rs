//! Pairing identity

use std::fmt;

use crate::color::Rgb;

/// Name and color triple a cyberware exposes while pairing
///
/// Created once per device lifetime. The three fields always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairingIdentity {
    /// AP name, e.g. `"DISPLAY-0F889A-GGY"`
    pub ap_name: String,

    /// Colors blinked on the indicator, in code order
    pub ap_color: [Rgb; 3],

    /// One glyph per color, e.g. `"GGY"`
    pub ap_color_code: String,
}

impl PairingIdentity {
    pub fn new(
        ap_name: impl Into<String>,
        ap_color: [Rgb; 3],
        ap_color_code: impl Into<String>,
    ) -> Self {
        Self {
            ap_name: ap_name.into(),
            ap_color,
            ap_color_code: ap_color_code.into(),
        }
    }
}

impl fmt::Display for PairingIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pairing[{}, code: {}]", self.ap_name, self.ap_color_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pairing_identity_display() {
        let green = Rgb::new(0, 255, 0);
        let yellow = Rgb::new(255, 255, 0);
        let identity = PairingIdentity::new("DISPLAY-0F889A-GGY", [green, green, yellow], "GGY");

        assert_eq!(identity.ap_color[0], green);
        assert_eq!(identity.to_string(), "Pairing[DISPLAY-0F889A-GGY, code: GGY]");
    }
}
