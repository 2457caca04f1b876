//! The ledger-backed runner that continues journeys across examples

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::traveler::Traveler;
use crate::application::ExampleRunner;
use crate::config::GlobalTime;
use crate::domain::{
    Example, ExampleDecorator, ExampleResult, TimeControl, TimeOp, TimeValue, TravelLog,
};

/// Runs examples while allowing travel to continue across them.
///
/// Two ledgers are kept: one for examples that declare their own directive,
/// and a separate one backing the globally configured time, seeded lazily the
/// first time a global travel actually applies. Keeping them apart means an
/// ad-hoc travel in one example never resets the global journey.
pub struct SequentialTimeMachine {
    clock: Arc<dyn TimeControl>,
    global: Arc<GlobalTime>,
    local_log: Mutex<TravelLog>,
    global_log: Mutex<TravelLog>,
}

impl SequentialTimeMachine {
    pub fn new(clock: Arc<dyn TimeControl>, global: Arc<GlobalTime>) -> Self {
        Self {
            clock,
            global,
            local_log: Mutex::new(TravelLog::new()),
            global_log: Mutex::new(TravelLog::new()),
        }
    }
}

impl ExampleRunner for SequentialTimeMachine {
    fn run(&self, example: &mut dyn Example) -> ExampleResult {
        let (directive, local) = {
            let decorator = ExampleDecorator::new(&*example, &self.global);
            (decorator.effective()?, decorator.local_directive().is_some())
        };
        match directive {
            None => example.run(),
            Some((op, time)) => {
                let log = if local {
                    &self.local_log
                } else {
                    // Global directives resolve against a ledger that starts
                    // out on the configured journey.
                    self.global_log
                        .lock()
                        .seed_if_empty(TimeOp::Travel, TimeValue::Timestamp(self.global.global_time()?))?;
                    &self.global_log
                };
                Traveler::new(self.clock.as_ref(), log).run(op, time, example)
            }
        }
    }
}
