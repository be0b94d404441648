//! Page context: the controllers of one page plus scroll tracking.
//!
//! Built once when the window is constructed and shared with the scroll
//! handler. Scroll rules:
//! - gauges start animating once the skills section top reaches the top of
//!   the viewport,
//! - the header hides while scrolling down past the first screen and shows
//!   again on any upward scroll or near the top.

use std::cell::Cell;
use std::rc::Rc;

use super::{Carousel, GaugeController, HeaderController, WorksText};

/// Scroll position snapshot delivered with every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the page
    pub scroll_y: f64,
    /// Height of the visible area
    pub viewport_height: f64,
    /// Offset of the skills section from the top of the page
    pub section_top: f64,
}

pub struct PageContext {
    gauges: GaugeController,
    header: HeaderController,
    works: Option<Rc<WorksText>>,
    carousels: Vec<Rc<dyn Carousel>>,
    replay_gauges: bool,
    previous_scroll: Cell<f64>,
}

impl PageContext {
    pub fn new(gauges: GaugeController, header: HeaderController) -> Self {
        Self {
            gauges,
            header,
            works: None,
            carousels: Vec::new(),
            replay_gauges: false,
            previous_scroll: Cell::new(0.0),
        }
    }

    /// Reset the gauges whenever the page scrolls back above their section.
    pub fn with_replay(mut self, replay: bool) -> Self {
        self.replay_gauges = replay;
        self
    }

    pub fn with_works(mut self, works: Rc<WorksText>) -> Self {
        self.works = Some(works);
        self
    }

    /// Keep a slider alive for the lifetime of the page.
    pub fn with_carousel(mut self, carousel: Rc<dyn Carousel>) -> Self {
        self.carousels.push(carousel);
        self
    }

    pub fn on_scroll(&self, metrics: ScrollMetrics) {
        if metrics.section_top <= metrics.scroll_y {
            self.gauges.init();
        } else if self.replay_gauges
            && self.gauges.is_initialized()
            && metrics.scroll_y + metrics.viewport_height < metrics.section_top
        {
            log::debug!("Skills section left the viewport, resetting gauges");
            self.gauges.reset();
        }

        let previous = self.previous_scroll.get();
        if metrics.scroll_y > metrics.viewport_height && metrics.scroll_y > previous {
            self.header.hide_header();
        } else {
            self.header.show_header();
        }
        self.previous_scroll.set(metrics.scroll_y);
    }

    pub fn header(&self) -> &HeaderController {
        &self.header
    }

    pub fn gauges(&self) -> &GaugeController {
        &self.gauges
    }

    pub fn works(&self) -> Option<&Rc<WorksText>> {
        self.works.as_ref()
    }
}
