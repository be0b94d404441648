//! folio-render: Cairo rendering for folio gauges.

pub mod cairo_canvas;
pub mod gauge_canvas;

pub use cairo_canvas::{paint_scaled, CairoCanvas};
pub use gauge_canvas::GaugeCanvas;
