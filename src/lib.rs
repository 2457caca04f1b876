//! Chronotest - declarative time control for test harnesses
//!
//! Lets test examples declare a simulated point in time through metadata:
//! `freeze` pins the observed clock, `travel` shifts it and lets it advance,
//! and a globally configured time applies to every example that does not opt
//! out. The sequential runner coalesces matching travel requests into one
//! continuous journey across examples, so elapsed wall-clock time carries
//! forward instead of resetting at each example boundary.
//!
//! The crate consumes two things it does not own: the host runner's examples
//! (through [`Example`]) and a scoped time-mutation facility (through
//! [`TimeControl`]).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{ExampleRunner, Harness, SequentialTimeMachine, TimeMachine};
pub use config::{GlobalTime, GLOBAL_DATE_VAR, GLOBAL_TIME_VAR};
pub use domain::{
    DeferredTime, Example, ExampleDecorator, ExampleResult, Metadata, MetadataValue, TimeControl,
    TimeOp, TimeSpec, TimeValue, TravelLog,
};
pub use error::{Error, Result};
pub use infrastructure::SimClock;
