//! The stateless per-example runner

use std::sync::Arc;

use crate::application::ExampleRunner;
use crate::config::GlobalTime;
use crate::domain::{Example, ExampleDecorator, ExampleResult, TimeControl, TimeOp};

/// Resolves every example independently; no journey ever continues across
/// examples
pub struct TimeMachine {
    clock: Arc<dyn TimeControl>,
    global: Arc<GlobalTime>,
}

impl TimeMachine {
    pub fn new(clock: Arc<dyn TimeControl>, global: Arc<GlobalTime>) -> Self {
        Self { clock, global }
    }
}

impl ExampleRunner for TimeMachine {
    fn run(&self, example: &mut dyn Example) -> ExampleResult {
        let directive = ExampleDecorator::new(&*example, &self.global).effective()?;
        match directive {
            None => example.run(),
            Some((op, time)) => {
                let instant = time.baseline()?;
                let mut body = || example.run();
                match op {
                    TimeOp::Freeze => self.clock.freeze(instant, &mut body),
                    TimeOp::Travel => self.clock.travel(instant, &mut body),
                }
            }
        }
    }
}
