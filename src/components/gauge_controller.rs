//! Gauge controller: discovers gauge hosts once and animates them together.
//!
//! The controller is either uninitialized or initialized. `init` moves it to
//! initialized and starts one animation run per gauge; calling it again is a
//! no-op. `reset` shows 0 on every gauge and moves it back, so the next
//! `init` animates again.

use anyhow::{Context, Result};
use folio_core::FrameDriver;
use folio_types::GaugeStyle;
use std::cell::Cell;

use super::gauge::GaugeItem;
use crate::page::{Document, Selector};

pub struct GaugeController {
    items: Vec<GaugeItem>,
    driver: FrameDriver,
    initialized: Cell<bool>,
}

impl GaugeController {
    /// Mount a gauge into every host matching `selector`.
    ///
    /// Fails on an invalid style or the first host with invalid attributes.
    pub fn new(
        document: &dyn Document,
        selector: &Selector,
        style: &GaugeStyle,
        driver: FrameDriver,
    ) -> Result<Self> {
        style.validate().context("invalid gauge style")?;
        let hosts = document.query_all(selector);
        let mut items = Vec::with_capacity(hosts.len());
        for (index, host) in hosts.iter().enumerate() {
            let item = GaugeItem::mount(host.as_ref(), style).with_context(|| {
                format!(
                    "gauge host {} ({}) matched by `{}`",
                    index,
                    host.id().unwrap_or_else(|| "no id".to_string()),
                    selector
                )
            })?;
            items.push(item);
        }

        if items.is_empty() {
            log::warn!("No gauge hosts match `{}`", selector);
        } else {
            log::info!("Mounted {} gauges for `{}`", items.len(), selector);
        }

        Ok(Self {
            items,
            driver,
            initialized: Cell::new(false),
        })
    }

    /// Start every gauge's animation, once. Returns whether runs were started.
    pub fn init(&self) -> bool {
        if self.initialized.get() {
            return false;
        }
        log::debug!("Animating {} gauges", self.items.len());
        for item in &self.items {
            item.render(&self.driver);
        }
        self.initialized.set(true);
        true
    }

    /// Show 0 everywhere and allow the next `init` to animate again.
    pub fn reset(&self) {
        for item in &self.items {
            item.reset();
        }
        self.initialized.set(false);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
