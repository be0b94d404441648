//! folio: a single-page portfolio rendered with GTK
//!
//! This library provides:
//! - The page model (elements, gauge hosts, selectors)
//! - Page components: animated skill gauges, the hiding header, the works
//!   text that follows its slider
//! - Configuration management
//! - The GTK window that hosts the page

pub mod components;
pub mod config;
pub mod page;
pub mod ui;

// Re-export commonly used types
pub use components::{GaugeController, PageContext};
pub use config::AppConfig;
