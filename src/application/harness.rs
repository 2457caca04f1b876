//! Strategy selection and process-wide state

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::{ExampleRunner, SequentialTimeMachine, TimeMachine};
use crate::config::GlobalTime;
use crate::domain::TimeControl;
use crate::error::Result;

/// Process-scoped entry point: owns one instance of each runner strategy and
/// the global time configuration.
///
/// Constructed once at harness startup and passed by reference into whatever
/// hooks the host runner offers. There is no hidden global state; isolation
/// of the harness's own tests goes through [`Harness::reset_global_time`].
pub struct Harness {
    global: Arc<GlobalTime>,
    simple: TimeMachine,
    sequential: SequentialTimeMachine,
}

impl Harness {
    /// A harness whose global time comes from the environment
    pub fn new(clock: Arc<dyn TimeControl>) -> Self {
        Self::with_global(clock, Arc::new(GlobalTime::from_env()))
    }

    /// A harness with an explicit global time configuration
    pub fn with_global(clock: Arc<dyn TimeControl>, global: Arc<GlobalTime>) -> Self {
        Self {
            simple: TimeMachine::new(clock.clone(), global.clone()),
            sequential: SequentialTimeMachine::new(clock, global.clone()),
            global,
        }
    }

    /// Picks a runner strategy. The same instance is returned for the same
    /// flag for the life of the harness, so ledger state accumulates where it
    /// should.
    pub fn machine(&self, sequential: bool) -> &dyn ExampleRunner {
        if sequential {
            &self.sequential
        } else {
            &self.simple
        }
    }

    /// Whether a global time is configured
    pub fn global_time_configured(&self) -> bool {
        self.global.configured()
    }

    /// The configured global time; parse errors surface on first access
    pub fn global_time(&self) -> Result<DateTime<Utc>> {
        self.global.global_time()
    }

    /// Invalidates the memoized global time. For isolating the harness's own
    /// tests, not for production flows.
    pub fn reset_global_time(&self) {
        self.global.reset();
    }
}
