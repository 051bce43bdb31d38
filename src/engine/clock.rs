//! Time sources for the timed variant.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock that moves forward by `step` on every reading.
///
/// The first reading returns the origin.
#[derive(Debug)]
pub struct SteppingClock {
    origin: Instant,
    step: Duration,
    readings: Cell<u32>,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            step,
            readings: Cell::new(0),
        }
    }

    /// Number of times `now` was called.
    #[must_use]
    pub fn readings(&self) -> u32 {
        self.readings.get()
    }

    /// Time elapsed since the origin as of the last reading.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.step * self.readings.get().saturating_sub(1)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let n = self.readings.get();
        self.readings.set(n + 1);
        self.origin + self.step * n
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
