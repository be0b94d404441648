//! Page element traits.
//!
//! Controllers never touch widgets directly. They see elements through these
//! traits, which the GTK window implements with real widgets and tests
//! implement with plain structs.

use anyhow::Result;
use folio_core::DrawingSurface;
use std::rc::Rc;

use super::selector::Selector;

/// Something a selector can match against.
pub trait Element {
    fn id(&self) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
}

/// Anything that displays a line of text (value labels, descriptions).
pub trait TextSink {
    fn set_text(&self, text: &str);
}

/// Content produced by mounting a gauge into its host.
pub struct MountedGauge {
    /// Label showing the current value (without the `%` symbol)
    pub label: Rc<dyn TextSink>,
    /// Square surface the gauge draws on
    pub surface: Box<dyn DrawingSurface>,
}

/// A page element that hosts one circular gauge.
pub trait GaugeHost: Element {
    /// Rendered width of the host in logical pixels.
    fn measured_width(&self) -> f64;

    /// Replace the host's content with a value label showing `label_text`,
    /// a `%` symbol, and a square canvas of `canvas_side` pixels displayed
    /// at the host width.
    fn mount(&self, label_text: &str, canvas_side: u32) -> Result<MountedGauge>;
}

/// Source of gauge hosts.
pub trait Document {
    /// All hosts matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Rc<dyn GaugeHost>>;
}

/// Document backed by an ordered list of hosts.
#[derive(Default)]
pub struct HostRegistry {
    hosts: Vec<Rc<dyn GaugeHost>>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, host: Rc<dyn GaugeHost>) {
        self.hosts.push(host);
    }
}

impl Document for HostRegistry {
    fn query_all(&self, selector: &Selector) -> Vec<Rc<dyn GaugeHost>> {
        self.hosts
            .iter()
            .filter(|host| {
                let host: &dyn GaugeHost = host.as_ref();
                selector.matches(host)
            })
            .cloned()
            .collect()
    }
}
