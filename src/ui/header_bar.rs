//! Fixed page header: title, burger button and the navigation list.

use gtk4::prelude::*;
use gtk4::{Align, Button, Label, Orientation};
use std::rc::Rc;

use super::widgets::WidgetClasses;
use crate::components::{HeaderController, HEADER_HIDDEN_CLASS, MENU_OPEN_CLASS};

pub struct PageHeader {
    root: gtk4::Box,
    burger: Button,
    menu: gtk4::Box,
}

impl PageHeader {
    pub fn new(title: &str) -> Self {
        let root = gtk4::Box::new(Orientation::Vertical, 8);
        root.add_css_class("main-header");
        root.set_valign(Align::Start);

        let bar = gtk4::Box::new(Orientation::Horizontal, 12);
        let title = Label::new(Some(title));
        title.add_css_class("main-header__title");
        title.set_hexpand(true);
        title.set_halign(Align::Start);
        bar.append(&title);

        let burger = Button::from_icon_name("open-menu-symbolic");
        burger.add_css_class("main-nav__burger");
        burger.set_tooltip_text(Some("Menu"));
        bar.append(&burger);
        root.append(&bar);

        let menu = gtk4::Box::new(Orientation::Vertical, 4);
        menu.add_css_class("main-nav__list");
        root.append(&menu);

        Self { root, burger, menu }
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.root
    }

    pub fn burger(&self) -> &Button {
        &self.burger
    }

    /// Append a navigation entry and return its button.
    pub fn add_link(&self, label: &str) -> Button {
        let button = Button::with_label(label);
        button.add_css_class("flat");
        self.menu.append(&button);
        button
    }

    /// Controller driving this header through its CSS classes.
    pub fn controller(&self) -> HeaderController {
        HeaderController::new(
            Rc::new(WidgetClasses::new(&self.root).inert_when(HEADER_HIDDEN_CLASS)),
            Rc::new(WidgetClasses::new(&self.menu).visible_when(MENU_OPEN_CLASS)),
            Rc::new(WidgetClasses::new(&self.burger)),
        )
    }
}
