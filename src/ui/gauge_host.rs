//! Gauge host widget: a skill card that receives a circular gauge.

use anyhow::Result;
use folio_core::{ArcStroke, DrawingSurface};
use folio_render::{paint_scaled, CairoCanvas};
use gtk4::prelude::*;
use gtk4::{Align, DrawingArea, Label, Orientation, Overlay};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::GaugeElementConfig;
use crate::page::{Element, GaugeHost, MountedGauge};

/// Skill card: an empty slot for the gauge plus a caption.
pub struct GtkGaugeHost {
    root: gtk4::Box,
    slot: gtk4::Box,
    id: Option<String>,
    attributes: BTreeMap<String, String>,
    width: f64,
}

impl GtkGaugeHost {
    pub fn new(config: &GaugeElementConfig) -> Self {
        let root = gtk4::Box::new(Orientation::Vertical, 8);
        root.set_halign(Align::Center);
        root.set_size_request(config.width.round() as i32, -1);
        for class in &config.classes {
            root.add_css_class(class);
        }
        if let Some(id) = &config.id {
            root.set_widget_name(id);
        }

        let slot = gtk4::Box::new(Orientation::Vertical, 0);
        slot.add_css_class("counter__gauge");
        root.append(&slot);

        let title = Label::new(Some(config.title.as_str()));
        title.add_css_class("counter__title");
        root.append(&title);

        Self {
            root,
            slot,
            id: config.id.clone(),
            attributes: config.attributes.clone(),
            width: config.width,
        }
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.root
    }
}

impl Element for GtkGaugeHost {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.root.has_css_class(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

impl GaugeHost for GtkGaugeHost {
    fn measured_width(&self) -> f64 {
        let allocated = self.root.width();
        if allocated > 0 {
            allocated as f64
        } else {
            self.width
        }
    }

    fn mount(&self, label_text: &str, canvas_side: u32) -> Result<MountedGauge> {
        while let Some(child) = self.slot.first_child() {
            self.slot.remove(&child);
        }

        let side = canvas_side as i32;
        let canvas = CairoCanvas::new(side)?;
        let display_side = self.width.round() as i32;

        let area = DrawingArea::new();
        area.set_content_width(display_side);
        area.set_content_height(display_side);
        let image = canvas.image();
        area.set_draw_func(move |_, cr, width, height| {
            let target = width.min(height) as f64;
            if let Err(e) = paint_scaled(cr, &image, side, target) {
                log::warn!("Failed to paint gauge: {}", e);
            }
        });

        let value = Label::new(Some(label_text));
        value.add_css_class("percentage__value");
        let symbol = Label::new(Some("%"));
        symbol.add_css_class("percentage__symbol");

        let percentage = gtk4::Box::new(Orientation::Horizontal, 2);
        percentage.add_css_class("percentage");
        percentage.set_halign(Align::Center);
        percentage.set_valign(Align::Center);
        percentage.append(&value);
        percentage.append(&symbol);

        let overlay = Overlay::new();
        overlay.set_child(Some(&area));
        overlay.add_overlay(&percentage);
        self.slot.append(&overlay);

        Ok(MountedGauge {
            label: Rc::new(value),
            surface: Box::new(GtkCanvas { canvas, area }),
        })
    }
}

/// Offscreen canvas that schedules a redraw of its drawing area on change.
struct GtkCanvas {
    canvas: CairoCanvas,
    area: DrawingArea,
}

impl DrawingSurface for GtkCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.canvas.clear_rect(x, y, width, height)?;
        self.area.queue_draw();
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<()> {
        self.canvas.stroke_arc(arc)?;
        self.area.queue_draw();
        Ok(())
    }
}
