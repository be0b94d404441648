//! GTK user interface: window, slider, gauge hosts and frame scheduling

mod frame_clock;
mod gauge_host;
mod header_bar;
mod main_window;
mod slider;
mod theme;
mod widgets;

pub use frame_clock::WidgetFrames;
pub use gauge_host::GtkGaugeHost;
pub use header_bar::PageHeader;
pub use main_window::{build_ui, MainWindow};
pub use slider::{Slide, StackSlider};
pub use theme::load_css;
pub use widgets::WidgetClasses;
