//! Frame scheduling on top of the GTK frame clock.

use folio_core::{FrameCallback, FrameScheduler};
use gtk4::glib;
use gtk4::prelude::*;
use std::cell::Cell;

/// Runs frame callbacks from a widget's tick callback.
///
/// Every request installs a one-shot tick callback, so the widget only
/// receives ticks while some animation is running.
pub struct WidgetFrames {
    widget: gtk4::Widget,
}

impl WidgetFrames {
    pub fn new(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
        }
    }
}

impl FrameScheduler for WidgetFrames {
    fn request_frame(&self, callback: FrameCallback) {
        let slot = Cell::new(Some(callback));
        self.widget.add_tick_callback(move |_, _| {
            if let Some(callback) = slot.take() {
                callback();
            }
            glib::ControlFlow::Break
        });
    }
}
