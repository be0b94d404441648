//! Page-model adapters for plain GTK widgets.

use gtk4::prelude::*;

use crate::components::ClassList;
use crate::page::TextSink;

impl TextSink for gtk4::Label {
    fn set_text(&self, text: &str) {
        gtk4::Label::set_text(self, text);
    }
}

/// CSS classes of a widget.
///
/// Optionally ties the widget's visibility or pointer targeting to one class,
/// for elements the page shows and hides by class (the collapsible navigation
/// list, the header faded out by CSS).
pub struct WidgetClasses {
    widget: gtk4::Widget,
    visible_when: Option<&'static str>,
    inert_when: Option<&'static str>,
}

impl WidgetClasses {
    pub fn new(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
            visible_when: None,
            inert_when: None,
        }
    }

    /// Show the widget only while it carries `class`.
    pub fn visible_when(mut self, class: &'static str) -> Self {
        self.visible_when = Some(class);
        self.sync_state();
        self
    }

    /// Ignore pointer input while the widget carries `class`.
    pub fn inert_when(mut self, class: &'static str) -> Self {
        self.inert_when = Some(class);
        self.sync_state();
        self
    }

    fn sync_state(&self) {
        if let Some(class) = self.visible_when {
            self.widget.set_visible(self.widget.has_css_class(class));
        }
        if let Some(class) = self.inert_when {
            self.widget.set_can_target(!self.widget.has_css_class(class));
        }
    }
}

impl ClassList for WidgetClasses {
    fn add_class(&self, class: &str) {
        self.widget.add_css_class(class);
        self.sync_state();
    }

    fn remove_class(&self, class: &str) {
        self.widget.remove_css_class(class);
        self.sync_state();
    }

    fn contains_class(&self, class: &str) -> bool {
        self.widget.has_css_class(class)
    }
}
