//! The consumed time-mutation primitive
//!
//! The core does not virtualize the clock itself; it drives an external
//! facility through this trait. [`crate::infrastructure::SimClock`] is a
//! reference implementation for tests and harness authors.

use chrono::{DateTime, Utc};

use super::example::ExampleResult;

/// A body executed inside a scoped time mutation
pub type ScopedBody<'a> = &'a mut dyn FnMut() -> ExampleResult;

/// Scoped control over the process-visible current time.
///
/// Both scoped operations must restore real time on exit, including when the
/// body fails or unwinds. `now` reports the current time as the body would
/// observe it, so inside an active mutation it reflects the mutated clock.
pub trait TimeControl: Send + Sync {
    /// The process-visible current time
    fn now(&self) -> DateTime<Utc>;

    /// Holds the observed time constant at `instant` for the duration of `body`
    fn freeze(&self, instant: DateTime<Utc>, body: ScopedBody<'_>) -> ExampleResult;

    /// Shifts the observed time to `instant` for the duration of `body`;
    /// time keeps advancing from there
    fn travel(&self, instant: DateTime<Utc>, body: ScopedBody<'_>) -> ExampleResult;
}
