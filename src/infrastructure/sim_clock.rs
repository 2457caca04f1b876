//! An in-process simulated clock
//!
//! Implements the scoped freeze/travel contract over the real system clock:
//! frozen scopes pin `now`, traveling scopes apply a fixed offset to real
//! time. The previous state is restored when the scope exits, including on a
//! failing or panicking body.

use std::mem;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::domain::{ExampleResult, ScopedBody, TimeControl};

#[derive(Debug, Clone, Copy)]
enum Mode {
    Real,
    Frozen(DateTime<Utc>),
    Offset(Duration),
}

/// A [`TimeControl`] backed by the system clock plus a freeze/offset state
#[derive(Debug)]
pub struct SimClock {
    mode: Mutex<Mode>,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            mode: Mutex::new(Mode::Real),
        }
    }

    fn enter(&self, mode: Mode, body: ScopedBody<'_>) -> ExampleResult {
        let previous = mem::replace(&mut *self.mode.lock(), mode);
        let _restore = Restore {
            clock: self,
            previous,
        };
        body()
    }
}

impl TimeControl for SimClock {
    fn now(&self) -> DateTime<Utc> {
        match *self.mode.lock() {
            Mode::Real => Utc::now(),
            Mode::Frozen(instant) => instant,
            Mode::Offset(offset) => Utc::now() + offset,
        }
    }

    fn freeze(&self, instant: DateTime<Utc>, body: ScopedBody<'_>) -> ExampleResult {
        self.enter(Mode::Frozen(instant), body)
    }

    fn travel(&self, instant: DateTime<Utc>, body: ScopedBody<'_>) -> ExampleResult {
        self.enter(Mode::Offset(instant - Utc::now()), body)
    }
}

/// Restores the prior mode when the scope unwinds
struct Restore<'a> {
    clock: &'a SimClock,
    previous: Mode,
}

impl Drop for Restore<'_> {
    fn drop(&mut self) {
        *self.clock.mode.lock() = self.previous;
    }
}
