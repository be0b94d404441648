//! Page model: elements, gauge hosts and selectors

mod document;
mod selector;

#[cfg(test)]
pub(crate) mod testing;

pub use document::{Document, Element, GaugeHost, HostRegistry, MountedGauge, TextSink};
pub use selector::{Selector, SelectorError, SimpleSelector};
