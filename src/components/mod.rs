//! Page components: gauges, header, works text and the page context

mod context;
mod gauge;
mod gauge_controller;
mod header;
mod works;

pub use context::{PageContext, ScrollMetrics};
pub use gauge::GaugeItem;
pub use gauge_controller::GaugeController;
pub use header::{
    ClassList, HeaderController, BURGER_CROSS_CLASS, HEADER_HIDDEN_CLASS, MENU_OPEN_CLASS,
};
pub use works::{Carousel, WorksText};
