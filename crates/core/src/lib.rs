//! folio-core: Core traits and animation machinery for folio.
//!
//! This crate contains the easing curves, the frame-driven animation driver
//! with its clock and scheduler traits, the `DrawingSurface` trait, and
//! shared constants. It has no GTK or Cairo dependencies.

pub mod animation;
pub mod constants;
pub mod easing;
mod surface;

pub use animation::{
    Animation, Clock, FrameCallback, FrameDriver, FrameScheduler, ManualClock, ManualFrames,
    MonotonicClock,
};
pub use constants::{
    ANIMATION_FRAME_INTERVAL, GAUGE_START_ANGLE, PERCENT_PER_HALF_TURN,
};
pub use easing::ease_in_out_quart;
pub use surface::{ArcStroke, DrawingSurface, RecordingSurface, SurfaceOp};

// Re-export types used in trait signatures for convenience
pub use folio_types::Color;
