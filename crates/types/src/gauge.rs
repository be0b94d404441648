//! Circular gauge types: the markup attribute contract and the fixed
//! per-gauge drawing style.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::color::{Color, ColorParseError};

/// Attribute carrying the target percentage (integer 0 to 100).
pub const PERCENTAGE_ATTR: &str = "data-cp-percentage";
/// Attribute carrying the progress stroke color.
pub const COLOR_ATTR: &str = "data-cp-color";

/// Highest accepted percentage.
pub const MAX_PERCENTAGE: u8 = 100;

/// Default length of one gauge fill animation.
pub const DEFAULT_GAUGE_DURATION_MS: u64 = 3000;

/// Validation failures for gauge host attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    #[error("missing attribute `{name}`")]
    Missing { name: &'static str },
    #[error("attribute `{name}` is not an integer: `{value}`")]
    NotNumeric { name: &'static str, value: String },
    #[error("attribute `{name}` is out of range 0..=100: {value}")]
    OutOfRange { name: &'static str, value: i64 },
    #[error("attribute `{name}` is not a valid color: {source}")]
    InvalidColor {
        name: &'static str,
        #[source]
        source: ColorParseError,
    },
}

/// Invalid values in a [`GaugeStyle`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("gauge animation duration must be greater than zero")]
    ZeroDuration,
    #[error("gauge {name} must be a positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// A validated whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage(u8);

impl Percentage {
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_PERCENTAGE).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Parse the string form found in markup.
    pub fn parse_attribute(raw: &str) -> Result<Self, AttributeError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed.parse().map_err(|_| AttributeError::NotNumeric {
            name: PERCENTAGE_ATTR,
            value: raw.to_string(),
        })?;
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(AttributeError::OutOfRange {
                name: PERCENTAGE_ATTR,
                value,
            })
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two attributes every gauge host must carry, validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeAttributes {
    pub percentage: Percentage,
    pub color: Color,
}

impl GaugeAttributes {
    /// Read and validate both attributes through an attribute lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AttributeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_percentage = lookup(PERCENTAGE_ATTR).ok_or(AttributeError::Missing {
            name: PERCENTAGE_ATTR,
        })?;
        let percentage = Percentage::parse_attribute(&raw_percentage)?;

        let raw_color = lookup(COLOR_ATTR).ok_or(AttributeError::Missing { name: COLOR_ATTR })?;
        let color = Color::parse_css(&raw_color).map_err(|source| AttributeError::InvalidColor {
            name: COLOR_ATTR,
            source,
        })?;

        Ok(Self { percentage, color })
    }
}

/// Drawing style shared by every gauge on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeStyle {
    /// Stroke width of both rings, in canvas pixels
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Ring radius, in canvas pixels
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Color of the static background ring
    #[serde(default = "default_base_color")]
    pub base_color: Color,
    /// Length of one fill animation
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_line_width() -> f64 {
    15.0
}

fn default_radius() -> f64 {
    140.0
}

fn default_base_color() -> Color {
    Color::from_rgba8(0xCC, 0xD1, 0xC4, 0xFF)
}

fn default_duration_ms() -> u64 {
    DEFAULT_GAUGE_DURATION_MS
}

impl GaugeStyle {
    /// Check values coming from settings files.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.duration_ms == 0 {
            return Err(StyleError::ZeroDuration);
        }
        for (name, value) in [("line_width", self.line_width), ("radius", self.radius)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(StyleError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            radius: default_radius(),
            base_color: default_base_color(),
            duration_ms: default_duration_ms(),
        }
    }
}
