//! Identity constants

/// Public MAC shared by every cyberware, set on the AP interface and used
/// only as the destination of pairing requests
pub const PUBLIC_MAC: [u8; 6] = [0x9E, 0x9C, 0x1F, 0x00, 0x00, 0x00];

/// String form of [`PUBLIC_MAC`]
pub const PUBLIC_MAC_STR: &str = "9E:9C:1F:00:00:00";

/// Default cyberware type
pub const DEFAULT_KIND: &str = "DISPLAY";

/// Default full product name
pub const DEFAULT_FULLNAME: &str = "OLED DISPLAY 0.96\" 128x64 REV 1.0";

/// Status reported before any monitor has run
pub const DEFAULT_STATUS: &str = "CYBERWARE_STATUS";

/// Random bits drawn per color pick
pub const COLOR_INDEX_BITS: u32 = 3;

/// Colors (and glyphs) in a pairing color code
pub const COLOR_CODE_LEN: usize = 3;

/// Preference keys
pub mod keys {
    /// Pairing AP name (text)
    pub const AP_NAME: &str = "ap_name";

    /// Pairing colors (three colors)
    pub const AP_COLOR: &str = "ap_color";

    /// Pairing color code (text, one glyph per color)
    pub const AP_COLOR_CODE: &str = "ap_color_code";
}
