//! Paged slider built on `gtk::Stack`.
//!
//! Slides are laid out onto pages with [`SliderOptions::page_layout`]; each
//! page is a grid and the stack slides between pages. Listeners registered
//! through [`Carousel::connect_transition_end`] run once the stack has
//! settled on a page.

use folio_types::SliderOptions;
use gtk4::prelude::*;
use gtk4::{Align, Button, Grid, Orientation, Stack, StackTransitionType};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::components::Carousel;

const TRANSITION_DURATION_MS: u32 = 300;
const ACTIVE_BULLET_CLASS: &str = "active";

/// A slide: its widget and the id reported while it leads a page.
pub struct Slide {
    pub id: Option<String>,
    pub widget: gtk4::Widget,
}

impl Slide {
    pub fn new(id: Option<String>, widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            id,
            widget: widget.clone().upcast(),
        }
    }
}

type Listeners = RefCell<Vec<Box<dyn Fn()>>>;

pub struct StackSlider {
    root: gtk4::Box,
    stack: Stack,
    pages: Vec<Grid>,
    /// Id of the first slide on each page
    leading_ids: Vec<Option<String>>,
    bullets: Vec<Button>,
    prev: Option<Button>,
    next: Option<Button>,
    current: Cell<usize>,
    listeners: Rc<Listeners>,
}

impl StackSlider {
    pub fn new(options: &SliderOptions, slides: Vec<Slide>) -> Rc<Self> {
        let stack = Stack::new();
        stack.set_transition_type(StackTransitionType::SlideLeftRight);
        stack.set_transition_duration(TRANSITION_DURATION_MS);
        stack.set_hexpand(true);

        let placements = options.page_layout(slides.len());
        let page_count = options.page_count(slides.len());
        let spacing = options.space_between;

        let pages: Vec<Grid> = (0..page_count)
            .map(|index| {
                let grid = Grid::new();
                grid.set_column_spacing(spacing);
                grid.set_row_spacing(spacing);
                grid.set_column_homogeneous(true);
                stack.add_named(&grid, Some(format!("page-{index}").as_str()));
                grid
            })
            .collect();

        let mut leading_ids = vec![None; page_count];
        for (slide, placement) in slides.iter().zip(&placements) {
            pages[placement.page].attach(
                &slide.widget,
                placement.column as i32,
                placement.row as i32,
                1,
                1,
            );
            if leading_ids[placement.page].is_none() {
                leading_ids[placement.page] = slide.id.clone();
            }
        }

        let row = gtk4::Box::new(Orientation::Horizontal, 12);
        let (prev, next) = match &options.navigation {
            Some(navigation) => {
                let prev = nav_button("go-previous-symbolic", &navigation.prev_el);
                let next = nav_button("go-next-symbolic", &navigation.next_el);
                (Some(prev), Some(next))
            }
            None => (None, None),
        };
        if let Some(prev) = &prev {
            row.append(prev);
        }
        row.append(&stack);
        if let Some(next) = &next {
            row.append(next);
        }

        let root = gtk4::Box::new(Orientation::Vertical, 12);
        root.add_css_class("slider");
        root.append(&row);

        let mut bullets = Vec::new();
        if let Some(pagination) = &options.pagination {
            let dots = gtk4::Box::new(Orientation::Horizontal, 6);
            dots.set_halign(Align::Center);
            dots.add_css_class(selector_name(&pagination.el));
            for _ in 0..page_count {
                let bullet = Button::new();
                bullet.add_css_class("bullet");
                bullet.set_can_target(pagination.clickable);
                dots.append(&bullet);
                bullets.push(bullet);
            }
            root.append(&dots);
        }

        let slider = Rc::new(Self {
            root,
            stack,
            pages,
            leading_ids,
            bullets,
            prev,
            next,
            current: Cell::new(0),
            listeners: Rc::new(RefCell::new(Vec::new())),
        });
        slider.connect_signals();
        slider.update_controls();
        log::debug!(
            "Slider with {} slides on {} pages",
            slides.len(),
            slider.page_count()
        );
        slider
    }

    fn connect_signals(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        if let Some(prev) = &self.prev {
            let weak = weak.clone();
            prev.connect_clicked(move |_| with_slider(&weak, |s| s.prev()));
        }
        if let Some(next) = &self.next {
            let weak = weak.clone();
            next.connect_clicked(move |_| with_slider(&weak, |s| s.next()));
        }
        for (page, bullet) in self.bullets.iter().enumerate() {
            let weak = weak.clone();
            bullet.connect_clicked(move |_| with_slider(&weak, |s| s.go_to(page)));
        }

        // Settled either when a running transition finishes or when the
        // visible page changed without one (animations disabled).
        let listeners = self.listeners.clone();
        self.stack.connect_transition_running_notify(move |stack| {
            if !stack.is_transition_running() {
                emit(&listeners);
            }
        });
        let listeners = self.listeners.clone();
        self.stack.connect_visible_child_notify(move |stack| {
            if !stack.is_transition_running() {
                emit(&listeners);
            }
        });
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.root
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> usize {
        self.current.get()
    }

    /// Show `page`, clamped to the last page.
    pub fn go_to(&self, page: usize) {
        let Some(last) = self.pages.len().checked_sub(1) else {
            return;
        };
        let page = page.min(last);
        if page == self.current.get() {
            return;
        }
        self.current.set(page);
        self.stack.set_visible_child(&self.pages[page]);
        self.update_controls();
    }

    pub fn next(&self) {
        self.go_to(self.current.get() + 1);
    }

    pub fn prev(&self) {
        self.go_to(self.current.get().saturating_sub(1));
    }

    fn update_controls(&self) {
        let current = self.current.get();
        for (page, bullet) in self.bullets.iter().enumerate() {
            if page == current {
                bullet.add_css_class(ACTIVE_BULLET_CLASS);
            } else {
                bullet.remove_css_class(ACTIVE_BULLET_CLASS);
            }
        }
        if let Some(prev) = &self.prev {
            prev.set_sensitive(current > 0);
        }
        if let Some(next) = &self.next {
            next.set_sensitive(current + 1 < self.pages.len());
        }
    }
}

impl Carousel for StackSlider {
    fn active_slide_id(&self) -> Option<String> {
        self.leading_ids.get(self.current.get()).cloned().flatten()
    }

    fn connect_transition_end(&self, callback: Box<dyn Fn()>) {
        self.listeners.borrow_mut().push(callback);
    }
}

fn with_slider(weak: &Weak<StackSlider>, f: impl FnOnce(&StackSlider)) {
    if let Some(slider) = weak.upgrade() {
        f(&slider);
    }
}

fn emit(listeners: &Listeners) {
    for listener in listeners.borrow().iter() {
        listener();
    }
}

fn nav_button(icon: &str, selector: &str) -> Button {
    let button = Button::from_icon_name(icon);
    button.set_widget_name(selector_name(selector));
    button.set_valign(Align::Center);
    button.add_css_class("slider__nav");
    button
}

/// `#name` or `.name` to `name`.
fn selector_name(selector: &str) -> &str {
    selector.trim_start_matches(['#', '.'])
}
