//! Executes one example inside a scoped time mutation, with ledger
//! bookkeeping around the body

use parking_lot::Mutex;

use crate::domain::{Example, ExampleResult, TimeControl, TimeOp, TimeValue, TravelLog};

/// Runs a single example under a resolved directive, consulting the ledger
/// for travel so journeys can continue across examples
pub(crate) struct Traveler<'a> {
    clock: &'a dyn TimeControl,
    log: &'a Mutex<TravelLog>,
}

impl<'a> Traveler<'a> {
    pub fn new(clock: &'a dyn TimeControl, log: &'a Mutex<TravelLog>) -> Self {
        Self { clock, log }
    }

    /// Enters the scoped mutation and runs the body.
    ///
    /// Travel resolves its start through the ledger and guarantees `pause`
    /// runs after the body, success or failure. Freeze bypasses the ledger
    /// entirely; frozen time has no elapsed to account for.
    pub fn run(&self, op: TimeOp, time: TimeValue, example: &mut dyn Example) -> ExampleResult {
        match op {
            TimeOp::Freeze => {
                let instant = time.baseline()?;
                let mut body = || example.run();
                self.clock.freeze(instant, &mut body)
            }
            TimeOp::Travel => {
                let instant = self.log.lock().resolve(op, time)?;
                let mut body = || {
                    let _pause = PauseGuard {
                        clock: self.clock,
                        log: self.log,
                    };
                    example.run()
                };
                self.clock.travel(instant, &mut body)
            }
        }
    }
}

/// Records the trip's elapsed duration when dropped, so pausing survives a
/// failing or panicking body. Reads the clock inside the scoped mutation,
/// where `now` reflects traveled time.
struct PauseGuard<'a> {
    clock: &'a dyn TimeControl,
    log: &'a Mutex<TravelLog>,
}

impl Drop for PauseGuard<'_> {
    fn drop(&mut self) {
        self.log.lock().pause(self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metadata;
    use crate::infrastructure::SimClock;
    use anyhow::anyhow;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::any::Any;

    struct FailingExample {
        metadata: Metadata,
    }

    impl Example for FailingExample {
        fn metadata(&self) -> &Metadata {
            &self.metadata
        }

        fn run(&mut self) -> ExampleResult {
            Err(anyhow!("body failed"))
        }

        fn subject(&self) -> &dyn Any {
            &self.metadata
        }
    }

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_pause_runs_even_when_the_body_fails() {
        let clock = SimClock::new();
        let log = Mutex::new(TravelLog::new());
        let start = instant(2016, 7, 15);
        let mut example = FailingExample {
            metadata: Metadata::new(),
        };

        let traveler = Traveler::new(&clock, &log);
        let result = traveler.run(TimeOp::Travel, TimeValue::Timestamp(start), &mut example);
        assert!(result.is_err());

        // A matching resolve must resume from the paused elapsed, proving
        // pause ran despite the failure.
        let resumed = log
            .lock()
            .resolve(TimeOp::Travel, TimeValue::Timestamp(start))
            .unwrap();
        assert!(resumed >= start);
        assert!(resumed < start + Duration::seconds(30));
    }

    #[test]
    fn test_freeze_leaves_the_ledger_untouched() {
        let clock = SimClock::new();
        let log = Mutex::new(TravelLog::new());
        let start = instant(2016, 7, 15);
        let mut example = FailingExample {
            metadata: Metadata::new(),
        };

        let traveler = Traveler::new(&clock, &log);
        let _ = traveler.run(TimeOp::Freeze, TimeValue::Timestamp(start), &mut example);

        // First travel resolve still starts fresh.
        let resolved = log
            .lock()
            .resolve(TimeOp::Travel, TimeValue::Timestamp(start))
            .unwrap();
        assert_eq!(resolved, start);
    }

    #[test]
    fn test_malformed_time_errors_before_the_body_runs() {
        struct Exploding(Metadata, bool);
        impl Example for Exploding {
            fn metadata(&self) -> &Metadata {
                &self.0
            }
            fn run(&mut self) -> ExampleResult {
                self.1 = true;
                Ok(())
            }
            fn subject(&self) -> &dyn Any {
                &self.0
            }
        }

        let clock = SimClock::new();
        let log = Mutex::new(TravelLog::new());
        let mut example = Exploding(Metadata::new(), false);

        let traveler = Traveler::new(&clock, &log);
        let result = traveler.run(TimeOp::Travel, TimeValue::from("garbage"), &mut example);
        assert!(result.is_err());
        assert!(!example.1, "body must not run on a configuration error");
    }
}
