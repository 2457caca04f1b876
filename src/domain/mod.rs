//! Domain types and decision logic for chronotest
//!
//! Everything that decides what time an example runs under lives here: the
//! metadata model, the directive interpreter, and the travel ledger. The
//! traits consumed from outside, [`Example`] for the host runner and
//! [`TimeControl`] for the time-mutation facility, also live here so the
//! application layer depends only on this module.

pub mod clock;
pub mod decorator;
pub mod example;
pub mod metadata;
pub mod time_value;
pub mod travel_log;

pub use clock::{ScopedBody, TimeControl};
pub use decorator::ExampleDecorator;
pub use example::{Example, ExampleResult};
pub use metadata::{keys, DeferredTime, Metadata, MetadataValue, TimeSpec};
pub use time_value::{parse_instant, start_of_day, TimeOp, TimeValue};
pub use travel_log::TravelLog;
