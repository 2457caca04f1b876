//! Example runners and strategy selection
//!
//! Two runner strategies exist: [`TimeMachine`] resolves every example in
//! isolation, while [`SequentialTimeMachine`] keeps travel ledgers so a
//! journey can continue across examples. [`Harness`] owns one instance of
//! each for the process lifetime and picks between them.

pub mod harness;
pub mod sequential;
pub mod time_machine;
mod traveler;

pub use harness::Harness;
pub use sequential::SequentialTimeMachine;
pub use time_machine::TimeMachine;

use crate::domain::{Example, ExampleResult};

/// A strategy for executing one example under its effective time directive
pub trait ExampleRunner: Send + Sync {
    /// Runs the example body, applying whatever directive resolves for it.
    /// Body failures propagate unchanged; configuration problems surface
    /// before the body runs.
    fn run(&self, example: &mut dyn Example) -> ExampleResult;
}
