//! Drawing surface trait and a recording implementation.

use anyhow::Result;
use folio_types::Color;
use std::cell::RefCell;
use std::rc::Rc;

/// One stroked circular arc, angles in radians, swept clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub line_width: f64,
    pub color: Color,
}

impl ArcStroke {
    /// Angular span from start to end.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// A 2D surface that gauges paint onto.
///
/// Implementations own their bitmap and drawing context; callers only ever
/// clear rectangles and stroke arcs.
pub trait DrawingSurface {
    /// Reset a rectangle to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()>;

    /// Stroke an arc with the given width and color.
    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for Box<S> {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        (**self).clear_rect(x, y, width, height)
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<()> {
        (**self).stroke_arc(arc)
    }
}

/// Operation captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Arc(ArcStroke),
}

/// Surface that records operations instead of rasterizing them.
///
/// Clones share the same log, so a test can keep one handle while the
/// gauge owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<SurfaceOp>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.borrow().clone()
    }

    /// Number of clears so far (one per rendered frame).
    pub fn frame_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear { .. }))
            .count()
    }

    /// Arcs drawn since the most recent clear.
    pub fn last_frame_arcs(&self) -> Vec<ArcStroke> {
        let ops = self.ops.borrow();
        let start = ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear { .. }))
            .map_or(0, |i| i + 1);
        ops[start..]
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Arc(arc) => Some(*arc),
                SurfaceOp::Clear { .. } => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.ops.borrow_mut().push(SurfaceOp::Clear {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<()> {
        self.ops.borrow_mut().push(SurfaceOp::Arc(*arc));
        Ok(())
    }
}
