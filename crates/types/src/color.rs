//! Stroke colors as they appear in page markup and settings.
//!
//! Colors are stored as normalized RGBA and serialized as CSS color strings
//! so settings files stay readable (`"#CCD1C4"` rather than a struct).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a CSS color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color string is empty")]
    Empty,
    #[error("invalid hex color `{0}` (expected #rgb, #rgba, #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
    #[error("invalid functional color `{0}`")]
    InvalidFunction(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)` or one of a handful of names.
    pub fn parse_css(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return parse_rgb_function(&lower)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }
        named_color(&lower).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "cairo")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_rgb_function(s: &str) -> Option<Color> {
    let (name, rest) = s.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();

    let channel = |p: &str| -> Option<f64> {
        let v: f64 = p.parse().ok()?;
        (0.0..=255.0).contains(&v).then_some(v / 255.0)
    };

    match (name.trim(), parts.as_slice()) {
        ("rgb", [r, g, b]) => Some(Color::new(channel(r)?, channel(g)?, channel(b)?, 1.0)),
        ("rgba", [r, g, b, a]) => {
            let alpha: f64 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&alpha) {
                return None;
            }
            Some(Color::new(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let rgba = match name {
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "green" => (0, 128, 0, 255),
        "blue" => (0, 0, 255, 255),
        "yellow" => (255, 255, 0, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "transparent" => (0, 0, 0, 0),
        _ => return None,
    };
    Some(Color::from_rgba8(rgba.0, rgba.1, rgba.2, rgba.3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(
            Color::parse_css("#ff0000").unwrap(),
            Color::from_rgba8(255, 0, 0, 255)
        );
        assert_eq!(
            Color::parse_css("#f00").unwrap(),
            Color::from_rgba8(255, 0, 0, 255)
        );
        assert_eq!(
            Color::parse_css("#CCD1C4").unwrap().to_rgba8(),
            (0xcc, 0xd1, 0xc4, 255)
        );
        assert_eq!(Color::parse_css("#00ff0080").unwrap().to_rgba8().3, 0x80);
    }

    #[test]
    fn test_parse_functional_and_named() {
        let c = Color::parse_css("rgba(0, 128, 255, 0.5)").unwrap();
        assert_eq!(c.to_rgba8(), (0, 128, 255, 128));
        assert_eq!(Color::parse_css(" Orange ").unwrap().to_hex(), "#ffa500");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::parse_css("  "), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse_css("#12"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse_css("#gg0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse_css("rgb(300, 0, 0)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            Color::parse_css("fuchsia-ish"),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn test_serializes_as_css_string() {
        let json = serde_json::to_string(&Color::from_rgba8(0xcc, 0xd1, 0xc4, 255)).unwrap();
        assert_eq!(json, "\"#ccd1c4\"");
        let back: Color = serde_json::from_str("\"#ccd1c4\"").unwrap();
        assert_eq!(back.to_rgba8(), (0xcc, 0xd1, 0xc4, 255));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
