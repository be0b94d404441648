//! One circular gauge: its host, value label, canvas and animation runs.

use anyhow::{Context, Result};
use folio_core::{ease_in_out_quart, Animation, DrawingSurface, FrameDriver};
use folio_render::GaugeCanvas;
use folio_types::{GaugeAttributes, GaugeStyle, Percentage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::page::{GaugeHost, TextSink};

type SharedCanvas = Rc<RefCell<GaugeCanvas<Box<dyn DrawingSurface>>>>;

/// A mounted gauge.
pub struct GaugeItem {
    target: Percentage,
    label: Rc<dyn TextSink>,
    canvas: SharedCanvas,
    duration: Duration,
    /// Bumped by every render/reset; runs from older generations stop painting.
    generation: Rc<Cell<u64>>,
}

impl GaugeItem {
    /// Validate the host's attributes and mount label and canvas into it.
    pub fn mount(host: &dyn GaugeHost, style: &GaugeStyle) -> Result<Self> {
        let attributes = GaugeAttributes::from_lookup(|name| host.attribute(name))
            .context("invalid gauge attributes")?;

        let size = host.measured_width();
        let side = (size * 2.0).round().max(1.0) as u32;
        let mounted = host
            .mount(&attributes.percentage.to_string(), side)
            .context("mount gauge content")?;

        let canvas = GaugeCanvas::new(mounted.surface, side as f64, attributes.color, style);
        log::debug!(
            "Mounted gauge: {}% in {} on a {}px canvas",
            attributes.percentage,
            attributes.color,
            side
        );

        Ok(Self {
            target: attributes.percentage,
            label: mounted.label,
            canvas: Rc::new(RefCell::new(canvas)),
            duration: Duration::from_millis(style.duration_ms),
            generation: Rc::new(Cell::new(0)),
        })
    }

    pub fn target(&self) -> Percentage {
        self.target
    }

    /// Animate from 0 to the target percentage.
    pub fn render(&self, driver: &FrameDriver) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let current = self.generation.clone();
        let label = self.label.clone();
        let canvas = self.canvas.clone();
        let step = move |percent: f64| {
            if current.get() != generation {
                return;
            }
            show(&*label, &canvas, percent);
        };

        let from = 0.0;
        let change = self.target.as_f64();
        let timeline = move |t: f64, d: f64| ease_in_out_quart(t, from, change, d);

        driver.animate(Animation::new(driver.now(), self.duration, step, timeline));
    }

    /// Show 0 and stop any run in flight from painting.
    pub fn reset(&self) {
        self.generation.set(self.generation.get() + 1);
        show(&*self.label, &self.canvas, 0.0);
    }
}

fn show(label: &dyn TextSink, canvas: &SharedCanvas, percent: f64) {
    label.set_text(&(percent.round() as i64).to_string());
    if let Err(e) = canvas.borrow_mut().next_step(percent) {
        log::warn!("Failed to draw gauge at {:.1}%: {:#}", percent, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::FakeHost;
    use folio_core::{ManualClock, ManualFrames, ANIMATION_FRAME_INTERVAL};
    use std::f64::consts::PI;

    fn driver() -> (Rc<ManualClock>, Rc<ManualFrames>, FrameDriver) {
        let clock = Rc::new(ManualClock::new());
        let frames = Rc::new(ManualFrames::new());
        let driver = FrameDriver::new(clock.clone(), frames.clone());
        (clock, frames, driver)
    }

    #[test]
    fn test_mount_shows_target_and_sizes_canvas() {
        let host = FakeHost::counter("75", "#ff0000");
        let item = GaugeItem::mount(&host, &GaugeStyle::default()).unwrap();

        assert_eq!(item.target().value(), 75);
        assert_eq!(host.label.text().as_deref(), Some("75"));
        assert_eq!(host.mounted_side.get(), Some(300));
        assert!(host.surface.ops().is_empty());
    }

    #[test]
    fn test_mount_rejects_bad_attributes() {
        let host = FakeHost::counter("seventy", "#ff0000");
        let err = GaugeItem::mount(&host, &GaugeStyle::default())
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("not an integer"));
        assert_eq!(host.mounted_side.get(), None);
    }

    #[test]
    fn test_render_ends_on_target() {
        let (clock, frames, driver) = driver();
        let host = FakeHost::counter("75", "#ff0000");
        let item = GaugeItem::mount(&host, &GaugeStyle::default()).unwrap();

        item.render(&driver);
        assert_eq!(host.label.text().as_deref(), Some("0"));

        // Land one tick exactly on the end of the run.
        for _ in 0..10 {
            clock.advance(Duration::from_millis(300));
            frames.fire();
        }
        clock.advance(ANIMATION_FRAME_INTERVAL);
        frames.fire();
        assert_eq!(frames.pending(), 0);

        assert_eq!(host.label.text().as_deref(), Some("75"));
        let arcs = host.surface.last_frame_arcs();
        assert!((arcs[1].start_angle - 1.5 * PI).abs() < 1e-9);
        assert!((arcs[1].end_angle - 3.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_reset_silences_run_in_flight() {
        let (clock, frames, driver) = driver();
        let host = FakeHost::counter("50", "#00ff00");
        let item = GaugeItem::mount(&host, &GaugeStyle::default()).unwrap();

        item.render(&driver);
        clock.advance(Duration::from_millis(1000));
        frames.fire();
        item.reset();
        let frames_after_reset = host.surface.frame_count();

        while frames.pending() > 0 {
            clock.advance(Duration::from_millis(500));
            frames.fire();
        }

        assert_eq!(host.surface.frame_count(), frames_after_reset);
        assert_eq!(host.label.text().as_deref(), Some("0"));
        assert!(host.surface.last_frame_arcs()[1].sweep().abs() < 1e-12);
    }
}
