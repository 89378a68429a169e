//! Colors and two-stop gradients used for link accents.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A left-to-right gradient between two color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// CSS `background-image` value.
    pub fn css(&self) -> String {
        format!("linear-gradient(to right, {}, {})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#5865F2"), Some(Color::rgb(0x58, 0x65, 0xf2)));
        assert_eq!(Color::from_hex("7289da"), Some(Color::rgb(0x72, 0x89, 0xda)));
        assert_eq!(
            Color::from_hex("#00000080"),
            Some(Color { r: 0, g: 0, b: 0, a: 0x80 })
        );
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_from_hex_rejects_signs() {
        assert_eq!(Color::from_hex("#+f+f+f"), None);
        assert_eq!(Color::from_hex("+fffff"), None);
        assert_eq!(Color::from_hex("#-1ffff"), None);
    }

    #[test]
    fn test_to_hex_omits_opaque_alpha() {
        assert_eq!(Color::rgb(0x7c, 0x3a, 0xed).to_hex(), "#7c3aed");
        assert_eq!(Color { r: 1, g: 2, b: 3, a: 4 }.to_hex(), "#01020304");
    }

    #[test]
    fn test_gradient_css() {
        let g = Gradient::new(Color::rgb(0x7c, 0x3a, 0xed), Color::rgb(0x4f, 0x46, 0xe5));
        assert_eq!(g.css(), "linear-gradient(to right, #7c3aed, #4f46e5)");
    }
}
