//! Circular percentage gauge drawn onto a square surface.
//!
//! Every frame clears the whole surface, strokes the full background ring and
//! then the colored progress arc from the top of the circle clockwise.

use std::f64::consts::{PI, TAU};

use anyhow::Result;
use folio_core::{ArcStroke, DrawingSurface, GAUGE_START_ANGLE, PERCENT_PER_HALF_TURN};
use folio_types::{Color, GaugeStyle};

/// A gauge bound to its drawing surface.
pub struct GaugeCanvas<S> {
    surface: S,
    size: f64,
    center_x: f64,
    center_y: f64,
    line_width: f64,
    radius: f64,
    line_color: Color,
    base_color: Color,
}

impl<S: DrawingSurface> GaugeCanvas<S> {
    /// `size` is the side of the square surface in surface pixels.
    pub fn new(surface: S, size: f64, line_color: Color, style: &GaugeStyle) -> Self {
        Self {
            surface,
            size,
            center_x: size / 2.0,
            center_y: size / 2.0,
            line_width: style.line_width,
            radius: style.radius,
            line_color,
            base_color: style.base_color,
        }
    }

    /// End angle of the progress arc for `percent`. Not clamped: values
    /// outside 0..=100 over- or under-sweep.
    pub fn end_angle(percent: f64) -> f64 {
        GAUGE_START_ANGLE + (percent / PERCENT_PER_HALF_TURN) * PI
    }

    /// Redraw the gauge showing `percent`.
    pub fn next_step(&mut self, percent: f64) -> Result<()> {
        let end = Self::end_angle(percent);
        self.clear()?;
        self.draw_base_circle()?;
        self.draw_arc(end, self.line_color)
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn clear(&mut self) -> Result<()> {
        self.surface.clear_rect(0.0, 0.0, self.size, self.size)
    }

    fn draw_base_circle(&mut self) -> Result<()> {
        self.draw_arc(GAUGE_START_ANGLE + TAU, self.base_color)
    }

    fn draw_arc(&mut self, end: f64, color: Color) -> Result<()> {
        let arc = ArcStroke {
            center_x: self.center_x,
            center_y: self.center_y,
            radius: self.radius,
            start_angle: GAUGE_START_ANGLE,
            end_angle: end,
            line_width: self.line_width,
            color,
        };
        self.surface.stroke_arc(&arc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{RecordingSurface, SurfaceOp};

    const EPSILON: f64 = 1e-12;

    fn canvas() -> (RecordingSurface, GaugeCanvas<RecordingSurface>) {
        let recorder = RecordingSurface::new();
        let color = Color::parse_css("#ff0000").unwrap();
        let canvas = GaugeCanvas::new(recorder.clone(), 300.0, color, &GaugeStyle::default());
        (recorder, canvas)
    }

    #[test]
    fn test_frame_is_clear_then_base_then_progress() {
        let (recorder, mut canvas) = canvas();
        canvas.next_step(40.0).unwrap();

        let ops = recorder.ops();
        assert_eq!(ops.len(), 3);
        assert_eq!(
            ops[0],
            SurfaceOp::Clear {
                x: 0.0,
                y: 0.0,
                width: 300.0,
                height: 300.0
            }
        );
        let SurfaceOp::Arc(base) = ops[1] else {
            panic!("expected base arc, got {:?}", ops[1]);
        };
        assert_eq!(base.color.to_hex(), "#ccd1c4");
        assert!((base.sweep() - TAU).abs() < EPSILON);
        assert_eq!((base.center_x, base.center_y), (150.0, 150.0));
        assert_eq!(base.radius, 140.0);
        assert_eq!(base.line_width, 15.0);
    }

    #[test]
    fn test_zero_percent_draws_only_background() {
        let (recorder, mut canvas) = canvas();
        canvas.next_step(0.0).unwrap();

        let arcs = recorder.last_frame_arcs();
        assert_eq!(arcs.len(), 2);
        assert!((arcs[0].sweep() - TAU).abs() < EPSILON);
        assert!(arcs[1].sweep().abs() < EPSILON);
        assert!((arcs[1].start_angle - 1.5 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_full_percent_matches_background_sweep() {
        let (recorder, mut canvas) = canvas();
        canvas.next_step(100.0).unwrap();

        let arcs = recorder.last_frame_arcs();
        assert!((arcs[1].sweep() - arcs[0].sweep()).abs() < EPSILON);
        assert!((arcs[1].end_angle - 3.5 * PI).abs() < EPSILON);
        assert_eq!(arcs[1].color.to_hex(), "#ff0000");
    }

    #[test]
    fn test_seventy_five_percent_sweeps_three_quarters() {
        let (recorder, mut canvas) = canvas();
        canvas.next_step(75.0).unwrap();

        let progress = recorder.last_frame_arcs()[1];
        assert!((progress.start_angle - 1.5 * PI).abs() < EPSILON);
        assert!((progress.end_angle - 3.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert!(GaugeCanvas::<RecordingSurface>::end_angle(150.0) > 4.0 * PI);
        assert!(GaugeCanvas::<RecordingSurface>::end_angle(-10.0) < 1.5 * PI);
    }
}
