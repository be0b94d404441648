//! In-memory page elements for controller tests.

use anyhow::{bail, Result};
use folio_core::RecordingSurface;
use folio_types::{COLOR_ATTR, PERCENTAGE_ATTR};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::{Element, GaugeHost, MountedGauge, TextSink};
use crate::components::ClassList;

/// Text sink remembering every value it was given.
#[derive(Default)]
pub struct RecordingText {
    history: RefCell<Vec<String>>,
}

impl RecordingText {
    pub fn text(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl TextSink for RecordingText {
    fn set_text(&self, text: &str) {
        self.history.borrow_mut().push(text.to_string());
    }
}

/// Gauge host with fixed attributes and a recording surface.
pub struct FakeHost {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub width: f64,
    pub label: Rc<RecordingText>,
    pub surface: RecordingSurface,
    pub mounted_side: Cell<Option<u32>>,
    pub fail_mount: bool,
}

impl FakeHost {
    pub fn counter(percentage: &str, color: &str) -> Self {
        Self {
            id: None,
            classes: vec!["counter".to_string()],
            attributes: HashMap::from([
                (PERCENTAGE_ATTR.to_string(), percentage.to_string()),
                (COLOR_ATTR.to_string(), color.to_string()),
            ]),
            width: 150.0,
            label: Rc::new(RecordingText::default()),
            surface: RecordingSurface::new(),
            mounted_side: Cell::new(None),
            fail_mount: false,
        }
    }
}

impl Element for FakeHost {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

impl GaugeHost for FakeHost {
    fn measured_width(&self) -> f64 {
        self.width
    }

    fn mount(&self, label_text: &str, canvas_side: u32) -> Result<MountedGauge> {
        if self.fail_mount {
            bail!("host refused to mount");
        }
        self.mounted_side.set(Some(canvas_side));
        self.label.set_text(label_text);
        Ok(MountedGauge {
            label: self.label.clone(),
            surface: Box::new(self.surface.clone()),
        })
    }
}

/// Class list backed by a set.
#[derive(Default)]
pub struct FakeClassList {
    classes: RefCell<HashSet<String>>,
}

impl FakeClassList {
    pub fn with(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl ClassList for FakeClassList {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn contains_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}
