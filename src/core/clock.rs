//! Wall-clock access.
//!
//! Sessions read time only through `Clock` so tests can drive elapsed time
//! explicitly with `ManualClock`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of milliseconds since the Unix epoch.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// System wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the controller.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock reading `start_millis`.
    #[must_use]
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_millis)),
        }
    }

    /// Move the clock forward.
    pub fn advance_millis(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    /// Move the clock forward by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance_millis(secs * 1000);
    }

    /// Set the absolute time.
    pub fn set_millis(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Whole seconds elapsed between two millisecond timestamps.
///
/// Rounds down and saturates at zero if `now` is before `start`.
#[must_use]
pub fn elapsed_secs(start_millis: u64, now_millis: u64) -> u64 {
    now_millis.saturating_sub(start_millis) / 1000
}
