//! Cairo image surface used as a gauge's drawing surface.
//!
//! The bitmap is created once at twice the on-screen size and never resized;
//! widgets paint it scaled down so arcs stay crisp on HiDPI output.

use anyhow::{Context as _, Result};
use cairo::{Context, Format, ImageSurface, Operator};
use folio_core::{ArcStroke, DrawingSurface};

/// Offscreen ARGB32 bitmap with its drawing context.
pub struct CairoCanvas {
    context: Context,
    surface: ImageSurface,
}

impl CairoCanvas {
    /// Create a transparent square canvas of `side` pixels.
    pub fn new(side: i32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, side, side)
            .with_context(|| format!("create {side}x{side} gauge surface"))?;
        let context = Context::new(&surface).context("create gauge drawing context")?;
        Ok(Self { context, surface })
    }

    /// Handle to the bitmap, for use as a paint source.
    pub fn image(&self) -> ImageSurface {
        self.surface.clone()
    }

    /// Release the drawing context and hand back the bitmap.
    pub fn into_image(self) -> ImageSurface {
        let Self { context, surface } = self;
        drop(context);
        surface.flush();
        surface
    }
}

/// Paint `image` (a `side` square) onto `cr` scaled to `target_side`.
pub fn paint_scaled(
    cr: &Context,
    image: &ImageSurface,
    side: i32,
    target_side: f64,
) -> Result<(), cairo::Error> {
    if side <= 0 {
        return Ok(());
    }
    let scale = target_side / side as f64;
    cr.save()?;
    cr.scale(scale, scale);
    cr.set_source_surface(image, 0.0, 0.0)?;
    cr.paint()?;
    cr.restore()?;
    Ok(())
}

impl DrawingSurface for CairoCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        let cr = &self.context;
        cr.save()?;
        cr.set_operator(Operator::Clear);
        cr.rectangle(x, y, width, height);
        cr.fill()?;
        cr.restore()?;
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<()> {
        let cr = &self.context;
        cr.new_path();
        cr.arc(
            arc.center_x,
            arc.center_y,
            arc.radius,
            arc.start_angle,
            arc.end_angle,
        );
        cr.set_line_width(arc.line_width);
        arc.color.apply_to_cairo(cr);
        cr.stroke()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GaugeCanvas;
    use folio_types::{Color, GaugeStyle};

    /// Read one ARGB32 pixel as (a, r, g, b). Cairo stores native-endian u32s.
    fn pixel(image: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let stride = image.stride() as usize;
        let data = image.data().unwrap();
        let offset = y * stride + x * 4;
        let value = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    #[test]
    fn test_progress_ring_is_painted() {
        let canvas = CairoCanvas::new(300).unwrap();
        let red = Color::parse_css("#ff0000").unwrap();
        let mut gauge = GaugeCanvas::new(canvas, 300.0, red, &GaugeStyle::default());
        gauge.next_step(100.0).unwrap();

        let mut image = gauge.into_surface().into_image();

        // Top of the ring (center 150,150, radius 140) carries the progress color.
        let (a, r, g, b) = pixel(&mut image, 150, 10);
        assert_eq!(a, 255);
        assert_eq!((r, g, b), (255, 0, 0));

        // The middle of the gauge stays transparent.
        assert_eq!(pixel(&mut image, 150, 150).0, 0);
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut canvas = CairoCanvas::new(64).unwrap();
        canvas
            .stroke_arc(&ArcStroke {
                center_x: 32.0,
                center_y: 32.0,
                radius: 20.0,
                start_angle: 0.0,
                end_angle: std::f64::consts::TAU,
                line_width: 8.0,
                color: Color::from_rgba8(0, 0, 255, 255),
            })
            .unwrap();
        canvas.clear_rect(0.0, 0.0, 64.0, 64.0).unwrap();

        let mut image = canvas.into_image();
        assert_eq!(pixel(&mut image, 52, 32).0, 0);
    }
}
