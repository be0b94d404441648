//! Works section: swaps the description text when the slider settles.

use folio_types::SlideText;
use std::rc::Rc;

use crate::page::TextSink;

/// A slider widget as seen by page components.
pub trait Carousel {
    /// Id of the slide currently shown (first slide of the active page).
    fn active_slide_id(&self) -> Option<String>;

    /// Run `callback` every time a slide transition finishes.
    fn connect_transition_end(&self, callback: Box<dyn Fn()>);
}

pub struct WorksText {
    entries: Vec<SlideText>,
    target: Rc<dyn TextSink>,
}

impl WorksText {
    pub fn new(entries: Vec<SlideText>, target: Rc<dyn TextSink>) -> Rc<Self> {
        Rc::new(Self { entries, target })
    }

    /// Subscribe to `carousel` so the text follows the active slide.
    pub fn attach(self: &Rc<Self>, carousel: Rc<dyn Carousel>) {
        let works = Rc::downgrade(self);
        let source = Rc::downgrade(&carousel);
        carousel.connect_transition_end(Box::new(move || {
            let (Some(works), Some(source)) = (works.upgrade(), source.upgrade()) else {
                return;
            };
            works.sync(source.active_slide_id().as_deref());
        }));
    }

    /// Show the text for `active`. Returns whether the text changed.
    pub fn sync(&self, active: Option<&str>) -> bool {
        let Some(id) = active else {
            log::warn!("Works slider has no active slide id");
            return false;
        };
        match SlideText::lookup(&self.entries, id) {
            Some(entry) => {
                self.target.set_text(&entry.text);
                true
            }
            None => {
                log::warn!("No works text for slide `{}`", id);
                false
            }
        }
    }
}
