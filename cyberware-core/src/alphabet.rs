//! Pairing color alphabet
//!
//! Eight colors the indicator can show, each spelled by a single glyph.
//! Eight is a power of two, so an index is just the low
//! [`COLOR_INDEX_BITS`] bits of one random draw.

use cyberware_types::{ColorEntry, Rgb};
use rand_core::RngCore;
use tracing::trace;

use crate::constants::COLOR_INDEX_BITS;

/// Fixed, ordered color alphabet
///
/// # Examples
///
/// ```
/// use cyberware_core::ColorAlphabet;
///
/// let alphabet = ColorAlphabet::new();
/// assert_eq!(alphabet.get(3).unwrap().glyph, 'G');
/// assert_eq!(alphabet.by_glyph('W').unwrap().color.as_tuple(), (255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorAlphabet;

impl ColorAlphabet {
    /// Entries in index order: R, O, Y, G, A, B, P, W
    pub const ENTRIES: [ColorEntry; 8] = [
        ColorEntry::new('R', Rgb::new(255, 0, 0)),
        ColorEntry::new('O', Rgb::new(255, 128, 0)),
        ColorEntry::new('Y', Rgb::new(255, 255, 0)),
        ColorEntry::new('G', Rgb::new(0, 255, 0)),
        ColorEntry::new('A', Rgb::new(0, 255, 255)),
        ColorEntry::new('B', Rgb::new(0, 0, 255)),
        ColorEntry::new('P', Rgb::new(128, 0, 255)),
        ColorEntry::new('W', Rgb::new(255, 255, 255)),
    ];

    /// Mask selecting the index bits of a draw
    pub const INDEX_MASK: u32 = (1 << COLOR_INDEX_BITS) - 1;

    pub fn new() -> Self {
        Self
    }

    pub fn entries(&self) -> &'static [ColorEntry; 8] {
        &Self::ENTRIES
    }

    pub fn get(&self, index: usize) -> Option<ColorEntry> {
        Self::ENTRIES.get(index).copied()
    }

    pub fn by_glyph(&self, glyph: char) -> Option<ColorEntry> {
        Self::ENTRIES.iter().find(|e| e.glyph == glyph).copied()
    }

    /// Whether every character of `code` is an alphabet glyph
    pub fn is_valid_code(&self, code: &str) -> bool {
        code.chars().all(|c| self.by_glyph(c).is_some())
    }

    /// Pick an entry uniformly using one draw from `rng`
    pub fn pick_random<R: RngCore + ?Sized>(&self, rng: &mut R) -> ColorEntry {
        let index = (rng.next_u32() & Self::INDEX_MASK) as usize;
        let entry = Self::ENTRIES[index];

        trace!(index = index, glyph = %entry.glyph, "Picked color");

        entry
    }
}
