//! folio-types: Shared data types for the folio landing page.
//!
//! This crate contains pure data types (colors, gauge attributes, slider
//! options) shared across all folio crates. Cairo support is optional and
//! only used for `Color::apply_to_cairo`.

pub mod color;
pub mod gauge;
pub mod slider;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorParseError};
pub use gauge::{
    AttributeError, GaugeAttributes, GaugeStyle, Percentage, StyleError, COLOR_ATTR,
    DEFAULT_GAUGE_DURATION_MS, MAX_PERCENTAGE, PERCENTAGE_ATTR,
};
pub use slider::{
    NavigationOptions, PaginationOptions, SlidePlacement, SlideText, SliderOptions,
    SlidesPerColumnFill,
};
