//! Wall-clock source for handlers
//!
//! All timestamps the dojo writes are local time.

use chrono::{DateTime, Local, SecondsFormat};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that starts at a fixed instant and advances a fixed step per reading
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<DateTime<Local>>,
    step: chrono::Duration,
}

impl SteppingClock {
    pub fn new(start: DateTime<Local>, step: chrono::Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    /// Always returns the same instant
    pub fn frozen(at: DateTime<Local>) -> Self {
        Self::new(at, chrono::Duration::zero())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let current = self.next.get();
        self.next.set(current + self.step);
        current
    }
}

/// RFC 3339 at second precision, `Z` for a zero offset
pub fn rfc3339(at: &DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
