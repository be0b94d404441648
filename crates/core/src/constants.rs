//! Shared constants for the application

use std::f64::consts::PI;
use std::time::Duration;

/// Nominal display refresh interval (16ms, ~60fps).
/// Only used by the manual frame source in tests and demos; the real
/// interval comes from the display's frame clock.
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Angle where gauge arcs start: the top of the circle (1.5π)
pub const GAUGE_START_ANGLE: f64 = 1.5 * PI;

/// Percentage points per π radians of sweep (100% = 2π)
pub const PERCENT_PER_HALF_TURN: f64 = 50.0;
