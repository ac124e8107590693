//! Block and material colors.
//!
//! Design files store colors as 8 hex digits with the alpha byte first
//! (`AARRGGBB`). Materials use HTML notation (`#RRGGBB`).

use crate::error::{MesherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, used when a block has no secondary color.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a design-file color.
    ///
    /// Accepts `AARRGGBB` and, for convenience, opaque `RRGGBB`. A leading
    /// `#` or `0x` is ignored.
    pub fn from_argb_hex(s: &str) -> Result<Self> {
        let digits = strip_prefix(s);
        let bytes = hex_bytes(digits).ok_or_else(|| MesherError::InvalidColor(s.to_string()))?;
        match bytes.as_slice() {
            // Alpha leads in the file, so roll it to the back.
            [a, r, g, b] => Ok(Self::rgba(*r, *g, *b, *a)),
            [r, g, b] => Ok(Self::rgba(*r, *g, *b, 255)),
            _ => Err(MesherError::InvalidColor(s.to_string())),
        }
    }

    /// Parse an HTML `#RRGGBB` color.
    pub fn from_html(s: &str) -> Result<Self> {
        let bytes = hex_bytes(strip_prefix(s)).ok_or_else(|| MesherError::InvalidColor(s.to_string()))?;
        match bytes.as_slice() {
            [r, g, b] => Ok(Self::rgba(*r, *g, *b, 255)),
            _ => Err(MesherError::InvalidColor(s.to_string())),
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Normalized `0.0..=1.0` components.
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Formats back into design-file notation (`AARRGGBB`).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

fn strip_prefix(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s)
}

fn hex_bytes(digits: &str) -> Option<Vec<u8>> {
    if digits.is_empty() || digits.len() % 2 != 0 || !digits.is_ascii() {
        return None;
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_rolls_alpha_to_back() {
        let c = Color::from_argb_hex("FF808080").unwrap();
        assert_eq!(c.to_rgba8(), [0x80, 0x80, 0x80, 0xFF]);

        let c = Color::from_argb_hex("80FF2010").unwrap();
        assert_eq!(c.to_rgba8(), [0xFF, 0x20, 0x10, 0x80]);
        assert_eq!(c.to_string(), "80FF2010");
    }

    #[test]
    fn test_short_and_prefixed_forms() {
        assert_eq!(
            Color::from_argb_hex("#102030").unwrap(),
            Color::rgba(0x10, 0x20, 0x30, 0xFF)
        );
        assert_eq!(Color::from_argb_hex("00000000").unwrap(), Color::TRANSPARENT);
        assert_eq!(
            Color::from_html("#ffb380").unwrap(),
            Color::rgba(0xFF, 0xB3, 0x80, 0xFF)
        );
    }

    #[test]
    fn test_invalid_colors() {
        assert!(Color::from_argb_hex("").is_err());
        assert!(Color::from_argb_hex("FFF").is_err());
        assert!(Color::from_argb_hex("GG808080").is_err());
        assert!(Color::from_argb_hex("FF80808080").is_err());
        assert!(Color::from_html("#ff00ff00").is_err());
    }

    #[test]
    fn test_normalized() {
        let c = Color::rgba(255, 0, 51, 255).to_rgba_f32();
        assert_eq!(c, [1.0, 0.0, 0.2, 1.0]);
    }
}
