//! Header visibility and burger menu state, expressed as CSS classes.

use std::rc::Rc;

/// Class marking the header as scrolled out of view
pub const HEADER_HIDDEN_CLASS: &str = "out";
/// Class marking the navigation list as expanded
pub const MENU_OPEN_CLASS: &str = "open";
/// Class turning the burger icon into a cross
pub const BURGER_CROSS_CLASS: &str = "cross";

/// Mutable set of CSS classes on an element.
pub trait ClassList {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn contains_class(&self, class: &str) -> bool;

    fn toggle_class(&self, class: &str) {
        if self.contains_class(class) {
            self.remove_class(class);
        } else {
            self.add_class(class);
        }
    }
}

pub struct HeaderController {
    header: Rc<dyn ClassList>,
    menu: Rc<dyn ClassList>,
    burger: Rc<dyn ClassList>,
}

impl HeaderController {
    pub fn new(
        header: Rc<dyn ClassList>,
        menu: Rc<dyn ClassList>,
        burger: Rc<dyn ClassList>,
    ) -> Self {
        Self {
            header,
            menu,
            burger,
        }
    }

    /// Slide the header out and collapse the menu.
    pub fn hide_header(&self) {
        if !self.is_hidden() {
            log::trace!("Hiding header");
        }
        self.header.add_class(HEADER_HIDDEN_CLASS);
        self.menu.remove_class(MENU_OPEN_CLASS);
        self.burger.remove_class(BURGER_CROSS_CLASS);
    }

    pub fn show_header(&self) {
        self.header.remove_class(HEADER_HIDDEN_CLASS);
    }

    /// Burger click handler.
    pub fn toggle_menu(&self) {
        self.menu.toggle_class(MENU_OPEN_CLASS);
        self.burger.toggle_class(BURGER_CROSS_CLASS);
    }

    pub fn is_hidden(&self) -> bool {
        self.header.contains_class(HEADER_HIDDEN_CLASS)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.contains_class(MENU_OPEN_CLASS)
    }
}
