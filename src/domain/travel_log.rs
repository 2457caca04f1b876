//! The travel ledger: coalesces repeated travel requests into one journey
//!
//! A trip is an `(operation, start value)` pair plus the wall-clock duration
//! its previous executions consumed. When the next request matches the
//! recorded trip (same operation, same value, same representation) the
//! journey continues from where it left off. Anything else starts fresh and
//! discards the old elapsed duration.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::time_value::{TimeOp, TimeValue};
use crate::error::Result;

/// One recorded journey
#[derive(Debug)]
struct Trip {
    op: Option<TimeOp>,
    start: Option<TimeValue>,
    baseline: Option<DateTime<Utc>>,
    elapsed: Duration,
}

impl Trip {
    fn empty() -> Self {
        Self {
            op: None,
            start: None,
            baseline: None,
            elapsed: Duration::zero(),
        }
    }

    fn started(op: TimeOp, start: TimeValue, baseline: DateTime<Utc>) -> Self {
        Self {
            op: Some(op),
            start: Some(start),
            baseline: Some(baseline),
            elapsed: Duration::zero(),
        }
    }
}

/// Tracks the active trip so sequential requests can resume it
#[derive(Debug)]
pub struct TravelLog {
    trip: Trip,
}

impl Default for TravelLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TravelLog {
    /// An empty log; the first request always starts a fresh trip
    pub fn new() -> Self {
        Self { trip: Trip::empty() }
    }

    /// Resumes the recorded trip or starts a new one, returning the concrete
    /// instant the caller should mutate time to.
    ///
    /// Resuming requires the operation and the start value to match the
    /// record, where value equality includes the representation: a calendar
    /// date never resumes a timestamp even when both denote the same instant.
    pub fn resolve(&mut self, op: TimeOp, start: TimeValue) -> Result<DateTime<Utc>> {
        if self.resumes(op, &start) {
            if let Some(baseline) = self.trip.baseline {
                debug!(%op, elapsed_ms = self.trip.elapsed.num_milliseconds(), "resuming trip");
                return Ok(baseline + self.trip.elapsed);
            }
        }
        let baseline = start.baseline()?;
        debug!(%op, %baseline, "starting fresh trip");
        self.trip = Trip::started(op, start, baseline);
        Ok(baseline)
    }

    /// Records the duration consumed so far: `now` minus the trip's baseline.
    ///
    /// Called once per resolved trip, after the body finishes, success or
    /// failure. Elapsed never goes negative.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if let Some(baseline) = self.trip.baseline {
            self.trip.elapsed = (now - baseline).max(Duration::zero());
        }
    }

    /// Seeds the log with a trip unless one is already recorded. Used for the
    /// ledger backing a globally configured time.
    pub fn seed_if_empty(&mut self, op: TimeOp, start: TimeValue) -> Result<()> {
        if self.trip.op.is_none() {
            let baseline = start.baseline()?;
            self.trip = Trip::started(op, start, baseline);
        }
        Ok(())
    }

    fn resumes(&self, op: TimeOp, start: &TimeValue) -> bool {
        self.trip.op == Some(op) && self.trip.start.as_ref() == Some(start)
    }
}
