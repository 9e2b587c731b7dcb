//! The fixed eight-color palette and nearest-color matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Manhattan distance in RGB space: `|dr| + |dg| + |db|`
    pub fn manhattan(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).unsigned_abs();
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Identifier of a palette entry.
///
/// Keys read from the code format are stored verbatim, so a key may exist
/// that has no palette color; [`ColorKey::rgb`] returns `None` for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorKey(pub u8);

impl ColorKey {
    pub const BLACK: ColorKey = ColorKey(0x00);
    pub const GREEN: ColorKey = ColorKey(0x01);
    pub const RED: ColorKey = ColorKey(0x02);
    pub const YELLOW: ColorKey = ColorKey(0x03);
    pub const BLUE: ColorKey = ColorKey(0x04);
    pub const MAGENTA: ColorKey = ColorKey(0x05);
    pub const CYAN: ColorKey = ColorKey(0x06);
    pub const WHITE: ColorKey = ColorKey(0x07);

    /// Palette color for this key, if it names one
    pub fn rgb(self) -> Option<Rgb> {
        PALETTE.iter().find(|(k, _)| *k == self).map(|(_, c)| *c)
    }

    pub fn is_valid(self) -> bool {
        self.rgb().is_some()
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl FromStr for ColorKey {
    type Err = std::num::ParseIntError;

    /// Parses `0xNN`, `0XNN` or bare `NN` hex tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        u8::from_str_radix(digits, 16).map(ColorKey)
    }
}

impl TryFrom<String> for ColorKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse()
            .map_err(|e| format!("invalid color key '{}': {}", value, e))
    }
}

impl From<ColorKey> for String {
    fn from(key: ColorKey) -> Self {
        key.to_string()
    }
}

/// Palette entries in iteration order. Ties in [`nearest`] go to the
/// earlier entry.
pub const PALETTE: [(ColorKey, Rgb); 8] = [
    (ColorKey::BLACK, Rgb::new(0x00, 0x00, 0x00)),
    (ColorKey::GREEN, Rgb::new(0x00, 0xFF, 0x00)),
    (ColorKey::RED, Rgb::new(0xFF, 0x00, 0x00)),
    (ColorKey::YELLOW, Rgb::new(0xFF, 0xFF, 0x00)),
    (ColorKey::BLUE, Rgb::new(0x00, 0x00, 0xFF)),
    (ColorKey::MAGENTA, Rgb::new(0xFF, 0x00, 0xFF)),
    (ColorKey::CYAN, Rgb::new(0x00, 0xFF, 0xFF)),
    (ColorKey::WHITE, Rgb::new(0xFF, 0xFF, 0xFF)),
];

/// Palette key with the smallest Manhattan distance to `color`.
pub fn nearest(color: Rgb) -> ColorKey {
    let mut best = PALETTE[0].0;
    let mut best_dist = u32::MAX;
    for (key, rgb) in PALETTE.iter() {
        let dist = color.manhattan(*rgb);
        if dist < best_dist {
            best_dist = dist;
            best = *key;
        }
    }
    best
}
