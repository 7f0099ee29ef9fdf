// File: crates/sparkline-core/src/theme.rs
// Summary: RGBA colors for the sparkline and the headline value, with CSS hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// RGBA color with 8-bit components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
pub struct ColorParseError(pub String);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Default sparkline stroke (`#60B17D`).
    pub const SPARKLINE: Color = Color::rgb(0x60, 0xB1, 0x7D);
    /// Default headline value color (`#424242`).
    pub const VALUE: Color = Color::rgb(0x42, 0x42, 0x42);

    /// CSS hex notation; alpha is emitted only when not opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return Err(err()); }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|n| n * 17).map_err(|_| err());
        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_long_and_alpha_forms() {
        assert_eq!("#60B17D".parse::<Color>().unwrap(), Color::SPARKLINE);
        assert_eq!("#424242".parse::<Color>().unwrap(), Color::VALUE);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!("#00000080".parse::<Color>().unwrap(), Color::from_argb(0x80, 0, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!("60B17D".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn css_output_skips_opaque_alpha() {
        assert_eq!(Color::SPARKLINE.to_css(), "#60B17D");
        assert_eq!(Color::from_argb(0x80, 1, 2, 3).to_css(), "#01020380");
    }
}
