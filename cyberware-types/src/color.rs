//! Indicator colors

use std::fmt;

use serde::{Deserialize, Serialize};

/// 3-channel color value as driven onto the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a tuple, the shape NeoPixel-style drivers take
    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// `RRGGBB` uppercase hex
    pub fn to_hex(self) -> String {
        hex::encode_upper([self.r, self.g, self.b])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// A named indicator color and the glyph that spells it in a color code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorEntry {
    pub glyph: char,
    pub color: Rgb,
}

impl ColorEntry {
    pub const fn new(glyph: char, color: Rgb) -> Self {
        Self { glyph, color }
    }
}

impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.glyph, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgb_hex() {
        let c = Rgb::new(255, 128, 0);
        assert_eq!(c.to_hex(), "FF8000");
        assert_eq!(c.to_string(), "#FF8000");
    }

    #[test]
    fn test_rgb_tuple() {
        assert_eq!(Rgb::from((1, 2, 3)).as_tuple(), (1, 2, 3));
    }
}
