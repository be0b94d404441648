//! Frame-driven animation runs.
//!
//! An [`Animation`] is advanced once per display refresh: each tick measures
//! the elapsed time since the run started, feeds it through the timeline
//! (usually an easing curve) and hands the result to the step callback. The
//! next tick is requested only after the current one has finished, so steps
//! for a run are strictly time ordered. Once the elapsed time exceeds the
//! duration the run stops requesting frames and is dropped.
//!
//! Time and frame delivery are both injected:
//! - [`Clock`] supplies a monotonic timestamp,
//! - [`FrameScheduler`] runs a one-shot callback on the next frame.
//!
//! The UI provides a frame-clock scheduler; [`ManualClock`] and
//! [`ManualFrames`] drive runs deterministically without a display.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// One-shot callback run on the next display frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Delivers callbacks on the next display refresh.
pub trait FrameScheduler {
    /// Run `callback` once, on the next frame.
    fn request_frame(&self, callback: FrameCallback);
}

/// Clock backed by `Instant`, with its origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A single animation run.
pub struct Animation {
    start: Duration,
    duration: Duration,
    step: Box<dyn FnMut(f64)>,
    timeline: Box<dyn Fn(f64, f64) -> f64>,
}

impl Animation {
    /// `timeline(elapsed_ms, duration_ms)` maps time to the value passed to
    /// `step`.
    pub fn new<S, T>(start: Duration, duration: Duration, step: S, timeline: T) -> Self
    where
        S: FnMut(f64) + 'static,
        T: Fn(f64, f64) -> f64 + 'static,
    {
        Self {
            start,
            duration,
            step: Box::new(step),
            timeline: Box::new(timeline),
        }
    }

}

/// Clock plus frame scheduler, shared by every run on a page.
#[derive(Clone)]
pub struct FrameDriver {
    clock: Rc<dyn Clock>,
    frames: Rc<dyn FrameScheduler>,
}

impl FrameDriver {
    pub fn new(clock: Rc<dyn Clock>, frames: Rc<dyn FrameScheduler>) -> Self {
        Self { clock, frames }
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Start a run. The first tick happens immediately, later ticks on
    /// successive frames.
    pub fn animate(&self, run: Animation) {
        log::debug!(
            "Starting animation run at {:?} for {:?}",
            run.start,
            run.duration
        );
        tick(run, self.clone());
    }
}

fn tick(mut run: Animation, driver: FrameDriver) {
    let elapsed = driver.now().saturating_sub(run.start);
    if elapsed > run.duration {
        log::trace!("Animation run finished after {:?}", elapsed);
        return;
    }

    let value = (run.timeline)(millis(elapsed), millis(run.duration));
    (run.step)(value);

    let frames = driver.frames.clone();
    frames.request_frame(Box::new(move || tick(run, driver)));
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Frame scheduler that queues callbacks until [`ManualFrames::fire`].
#[derive(Default)]
pub struct ManualFrames {
    pending: RefCell<Vec<FrameCallback>>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Deliver one frame: run every callback queued so far. Callbacks queued
    /// while firing wait for the following frame. Returns how many ran.
    pub fn fire(&self) -> usize {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        let count = due.len();
        for callback in due {
            callback();
        }
        count
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push(callback);
    }
}
